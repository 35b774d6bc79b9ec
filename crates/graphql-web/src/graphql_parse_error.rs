use crate::GrammarProduction;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::Source;
use std::sync::Arc;

/// A syntax error with location information and contextual notes.
///
/// Parsing is fail-fast: the first malformed token produces one of these and
/// no tree is returned. Every error names the [`GrammarProduction`] that was
/// being parsed and the byte offset where scanning stopped.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:`, found `1`", "selection set cannot be empty"
    message: String,

    /// The span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "expected X" at end of input: a zero-width span after the last
    ///   consumed token
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,

    /// The grammar production that failed.
    production: GrammarProduction,

    /// Additional notes providing context and suggestions.
    notes: GraphQLErrorNotes,

    /// The source being parsed, for names, location offsets and snippets.
    graphql_source: Arc<Source>,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
        production: GrammarProduction,
        source: Arc<Source>,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            production,
            notes: GraphQLErrorNotes::new(),
            graphql_source: source,
        }
    }

    /// Creates a parse error from a lexer error token, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        lexer_notes: GraphQLErrorNotes,
        production: GrammarProduction,
        source: Arc<Source>,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: GraphQLParseErrorKind::LexerError,
            production,
            notes: lexer_notes,
            graphql_source: source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn production(&self) -> GrammarProduction {
        self.production
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// The [`Source`] that was being parsed.
    pub fn graphql_source(&self) -> &Arc<Source> {
        &self.graphql_source
    }

    /// Byte offset into the source body where the error was detected.
    pub fn offset(&self) -> usize {
        self.span.start_inclusive.byte_offset()
    }

    /// 1-based `(line, column)` of the error, with the source's location
    /// offset applied.
    pub fn display_position(&self) -> (usize, usize) {
        self.graphql_source.display_position(&self.span.start_inclusive)
    }

    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Builder-style variant of [`add_help`](Self::add_help).
    pub fn with_help(mut self, message: impl Into<String>) -> Self {
        self.add_help(message);
        self
    }

    /// Formats this error as a multi-line diagnostic.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found `1`
    ///   --> GraphQL request:1:17 (in Argument)
    ///    |
    ///  1 | query { user(id 1) }
    ///    |                 ^
    /// ```
    pub fn format_detailed(&self) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let (line, column) = self.display_position();
        output.push_str(&format!(
            "  --> {}:{line}:{column} (in {})\n",
            self.graphql_source.name, self.production,
        ));

        if let Some(snippet) = self.format_source_snippet() {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
                GraphQLErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));

            if let Some(note_span) = &note.span
                && let Some(snippet) = self.format_note_snippet(note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// GraphQL request:1:17: Syntax Error: expected `:`, found `1` (in Argument at offset 16)
    /// ```
    pub fn format_oneline(&self) -> String {
        let (line, column) = self.display_position();
        format!(
            "{}:{line}:{column}: Syntax Error: {} (in {} at offset {})",
            self.graphql_source.name,
            self.message,
            self.production,
            self.offset(),
        )
    }

    fn format_source_snippet(&self) -> Option<String> {
        let line_num = self.span.start_inclusive.line();
        let line_content = source_line(&self.graphql_source.body, line_num)?;
        let (display_line_num, _) = self.display_position();
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = self.span.start_inclusive.col_utf8();
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.col_utf8()
        } else {
            line_content.chars().count()
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }

    fn format_note_snippet(&self, span: &GraphQLSourceSpan) -> Option<String> {
        let line_num = span.start_inclusive.line();
        let line_content = source_line(&self.graphql_source.body, line_num)?;
        let (display_line_num, _) = self.graphql_source.display_position(&span.start_inclusive);
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!(
            "     {display_line_num:>line_num_width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "     {:>width$} | {:>padding$}-\n",
            "",
            "",
            width = line_num_width,
            padding = span.start_inclusive.col_utf8()
        ));

        Some(output)
    }
}

/// Returns the 0-based `line_num`th line of `body`, treating `\r\n`, `\n`
/// and `\r` as line terminators (matching the lexer's line counting).
fn source_line(body: &str, line_num: usize) -> Option<&str> {
    let mut remaining = body;
    for _ in 0..line_num {
        let idx = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())?;
        let skip = if remaining[idx..].starts_with("\r\n") { 2 } else { 1 };
        remaining = &remaining[idx + skip..];
    }
    let end = memchr::memchr2(b'\n', b'\r', remaining.as_bytes()).unwrap_or(remaining.len());
    Some(&remaining[..end])
}
