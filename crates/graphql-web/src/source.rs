use crate::SourcePosition;

/// The default [`Source::name`] used when none is given.
pub const DEFAULT_SOURCE_NAME: &str = "GraphQL request";

/// 1-based line/column offset of a [`Source`]'s body within some larger
/// file (e.g. a GraphQL document embedded in a host-language string).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocationOffset {
    pub line: usize,
    pub column: usize,
}

impl Default for LocationOffset {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// A body of GraphQL text plus the metadata used when reporting positions
/// inside it.
///
/// Every entry point that accepts GraphQL text accepts `impl Into<Source>`,
/// so a plain `&str` or `String` works wherever a `Source` does.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub body: String,
    pub name: String,
    pub location_offset: LocationOffset,
}

impl Source {
    /// Creates a source with the default name and a `{1, 1}` offset.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: DEFAULT_SOURCE_NAME.to_string(),
            location_offset: LocationOffset::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the 1-based offset of the body within its enclosing file.
    ///
    /// Values below 1 are clamped to 1.
    pub fn with_location_offset(mut self, line: usize, column: usize) -> Self {
        self.location_offset = LocationOffset {
            line: line.max(1),
            column: column.max(1),
        };
        self
    }

    /// Maps a 0-based [`SourcePosition`] to a 1-based `(line, column)` pair
    /// in the enclosing file.
    ///
    /// The column offset only applies to the body's first line, since
    /// every later line starts at the enclosing file's first column.
    pub fn display_position(&self, position: &SourcePosition) -> (usize, usize) {
        let line = position.line() + self.location_offset.line;
        let column = if position.line() == 0 {
            position.col_utf8() + self.location_offset.column
        } else {
            position.col_utf8() + 1
        };
        (line, column)
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

impl From<&String> for Source {
    fn from(body: &String) -> Self {
        Source::new(body.as_str())
    }
}
