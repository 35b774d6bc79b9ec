use crate::GraphQLSourceSpan;
use crate::Source;
use std::sync::Arc;

/// Where a node came from: its span plus the [`Source`] it was parsed out of.
///
/// All nodes from one parse share the same `Arc<Source>`. Nodes parsed with
/// [`ParseOptions::no_location`](crate::ParseOptions::no_location) carry no
/// `Location` at all.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Location {
    pub span: GraphQLSourceSpan,
    #[serde(skip)]
    pub source: Arc<Source>,
}

impl Location {
    pub fn new(span: GraphQLSourceSpan, source: Arc<Source>) -> Self {
        Self { span, source }
    }

    /// Byte offset of the node's first character.
    pub fn start(&self) -> usize {
        self.span.start_inclusive.byte_offset()
    }

    /// Byte offset just past the node's last character.
    pub fn end(&self) -> usize {
        self.span.end_exclusive.byte_offset()
    }

    /// The exact source text this node was parsed from.
    pub fn source_text(&self) -> &str {
        self.source
            .body
            .get(self.span.byte_range())
            .unwrap_or_default()
    }
}
