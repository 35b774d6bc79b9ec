use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `position`.
    pub fn empty_at(position: SourcePosition) -> Self {
        Self::new(position, position)
    }

    /// Returns the byte range covered by this span.
    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset()
    }
}
