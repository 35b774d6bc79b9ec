/// A position in GraphQL source text, with dual column tracking.
///
/// This is a pure data struct; the lexer computes positions as it scans.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the body
/// - `col_utf8`: character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole body
///
/// Use [`Source::display_position`](crate::Source::display_position) to get
/// the 1-based line/column a human expects, with the source's location
/// offset applied.
///
/// For ASCII text both columns are equal. For characters outside the Basic
/// Multilingual Plane (e.g. emoji) `col_utf8` advances by 1 and `col_utf16`
/// by 2.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    ///
    /// Prefer this one when talking to LSP clients.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the body.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
