use crate::ast::AstNode;
use crate::ast::Node;
use crate::GraphQLParseError;
use crate::Source;
use crate::SourcePosition;
use serde_json::Map;
use serde_json::Value as JsonValue;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::sync::LazyLock;

static EMPTY_EXTENSIONS: LazyLock<Map<String, JsonValue>> = LazyLock::new(Map::new);

/// One step of a response path: an object key or a list index.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A 1-based line and column, as reported in serialized errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// A general-purpose GraphQL error: a message plus optional nodes, source
/// positions, response path, underlying cause and extensions.
///
/// Built with [`GraphQLError::new`] and the `with_*` methods. Displays as
/// its message and serializes to the response shape
/// `{"message", "locations", "path", "extensions"}`.
///
/// ```
/// use graphql_web::{GraphQLError, parse_document, ParseOptions};
///
/// let err: GraphQLError = parse_document("{", ParseOptions::default()).unwrap_err().into();
/// assert_eq!(err.locations()[0].line, 1);
/// assert_eq!(err.positions(), &[1]);
/// ```
#[derive(Clone, Debug)]
pub struct GraphQLError {
    message: String,
    nodes: Vec<Node>,
    source: Option<Arc<Source>>,
    positions: Vec<usize>,
    path: Vec<PathSegment>,
    original_error: Option<Arc<dyn Error + Send + Sync>>,
    extensions: Option<Map<String, JsonValue>>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            nodes: Vec::new(),
            source: None,
            positions: Vec::new(),
            path: Vec::new(),
            original_error: None,
            extensions: None,
        }
    }

    /// Attaches a single node.
    pub fn with_node(self, node: impl Into<Node>) -> Self {
        self.with_nodes([node.into()])
    }

    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes = nodes.into_iter().collect();
        self
    }

    pub fn with_source(mut self, source: impl Into<Arc<Source>>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Byte offsets into the source body.
    pub fn with_positions(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    pub fn with_path<S: Into<PathSegment>>(mut self, path: impl IntoIterator<Item = S>) -> Self {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_original_error(mut self, err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        self.original_error = Some(Arc::from(err.into()));
        self
    }

    pub fn with_extensions(mut self, extensions: Map<String, JsonValue>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The explicit source, or else the source of the first located node.
    pub fn graphql_source(&self) -> Option<&Arc<Source>> {
        self.source.as_ref().or_else(|| {
            self.nodes
                .iter()
                .find_map(|node| node.loc().map(|loc| &loc.source))
        })
    }

    /// The explicit positions, or else the start offsets of the located
    /// nodes.
    pub fn positions(&self) -> Vec<usize> {
        if !self.positions.is_empty() {
            return self.positions.clone();
        }
        self.nodes
            .iter()
            .filter_map(|node| node.loc().map(|loc| loc.start()))
            .collect()
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn original_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.original_error.as_deref()
    }

    /// The explicit extensions; otherwise those of the original error when
    /// it is itself a `GraphQLError`; otherwise an empty map.
    pub fn extensions(&self) -> &Map<String, JsonValue> {
        if let Some(extensions) = &self.extensions {
            return extensions;
        }
        self.original_error
            .as_deref()
            .and_then(|err| err.downcast_ref::<GraphQLError>())
            .map(|original| original.extensions())
            .unwrap_or(&EMPTY_EXTENSIONS)
    }

    /// 1-based locations of every position, with the source's location
    /// offset applied. Empty when there is no source.
    pub fn locations(&self) -> Vec<SourceLocation> {
        if self.positions.is_empty() {
            return self
                .nodes
                .iter()
                .filter_map(|node| node.loc())
                .map(|loc| {
                    let (line, column) = loc.source.display_position(&loc.span.start_inclusive);
                    SourceLocation { line, column }
                })
                .collect();
        }
        let Some(source) = self.graphql_source() else {
            return Vec::new();
        };
        self.positions
            .iter()
            .map(|&offset| {
                let (line, column) = source.display_position(&position_at(&source.body, offset));
                SourceLocation { line, column }
            })
            .collect()
    }
}

/// Computes the position of `offset` in `body`, counting `\r\n`, `\n` and
/// `\r` as one line break each. Offsets past the end clamp to the end.
fn position_at(body: &str, offset: usize) -> SourcePosition {
    let mut line = 0;
    let mut col_utf8 = 0;
    let mut col_utf16 = 0;
    let mut prev_was_cr = false;
    let mut byte_offset = 0;
    for (index, ch) in body.char_indices() {
        if index >= offset {
            break;
        }
        byte_offset = index + ch.len_utf8();
        match ch {
            '\n' if prev_was_cr => {},
            '\n' | '\r' => {
                line += 1;
                col_utf8 = 0;
                col_utf16 = 0;
            },
            _ => {
                col_utf8 += 1;
                col_utf16 += ch.len_utf16();
            },
        }
        prev_was_cr = ch == '\r';
    }
    SourcePosition::new(line, col_utf8, col_utf16, byte_offset)
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for GraphQLError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.original_error
            .as_deref()
            .map(|err| err as &(dyn Error + 'static))
    }
}

impl From<GraphQLParseError> for GraphQLError {
    fn from(err: GraphQLParseError) -> Self {
        GraphQLError::new(format!("Syntax Error: {}", err.message()))
            .with_source(Arc::clone(err.graphql_source()))
            .with_positions([err.offset()])
            .with_original_error(err)
    }
}

impl serde::Serialize for GraphQLError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Repr<'a> {
            message: &'a str,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            locations: Vec<SourceLocation>,
            #[serde(skip_serializing_if = "Vec::is_empty")]
            path: Vec<PathSegment>,
            #[serde(skip_serializing_if = "Map::is_empty")]
            extensions: Map<String, JsonValue>,
        }

        Repr {
            message: &self.message,
            locations: self.locations(),
            path: self.path.clone(),
            extensions: self.extensions().clone(),
        }
        .serialize(serializer)
    }
}
