use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// How a [`GraphQLErrorNote`] is labelled in
/// [`format_detailed`](crate::GraphQLParseError::format_detailed) output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// `= note: ...`
    General,
    /// `= help: ...`, a suggested fix.
    Help,
    /// `= spec: ...`, a link into the GraphQL specification.
    Spec,
}

/// Extra context attached to a parse error: an explanation, a fix, a
/// link, or a pointer at a related span such as where an unterminated
/// string began.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    fn new(kind: GraphQLErrorNoteKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message)
    }

    /// A general note that also points at `span`.
    pub fn general_with_span(message: impl Into<String>, span: GraphQLSourceSpan) -> Self {
        Self {
            span: Some(span),
            ..Self::general(message)
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Help, message)
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Spec, url)
    }
}

/// Notes of one error. Rarely more than two, so they are stored inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
