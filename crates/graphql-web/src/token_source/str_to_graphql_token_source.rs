//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Token values borrow directly from the source string (`Cow::Borrowed`), so
//! names, numbers and strings are not allocated during lexing.
//!
//! Whitespace, commas, the byte order mark and `#` comments are ignored
//! tokens and are skipped between significant tokens. Invalid input does not
//! stop the lexer: it emits an `Error` token and continues, leaving it to
//! the parser to decide whether to abort.
//!
//! # Usage
//!
//! ```rust
//! use graphql_web::token_source::StrGraphQLTokenSource;
//!
//! let lexer = StrGraphQLTokenSource::new("{ name }");
//! for token in lexer {
//!     println!("{:?}", token.kind);
//! }
//! // Output:
//! // CurlyBraceOpen
//! // Name("name")
//! // CurlyBraceClose
//! // Eof
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;

/// Lexes GraphQL tokens from a `&str`.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current 0-based column, counted in characters.
    curr_col_utf8: usize,

    /// Current 0-based column, counted in UTF-16 code units.
    curr_col_utf16: usize,

    /// Set after a `\r` so that a following `\n` does not count as a second
    /// line break.
    last_char_was_cr: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// `peek_char_nth(0)` is equivalent to `peek_char()`.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
                self.curr_col_utf16 = 0;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes a run of characters known to contain no line terminators,
    /// advancing the columns in one step.
    fn consume_line_segment(&mut self, byte_len: usize) {
        let segment = &self.source[self.curr_byte_offset..self.curr_byte_offset + byte_len];
        for ch in segment.chars() {
            self.curr_col_utf8 += 1;
            self.curr_col_utf16 += ch.len_utf16();
        }
        if byte_len > 0 {
            self.last_char_was_cr = false;
        }
        self.curr_byte_offset += byte_len;
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn make_token(
        &self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, self.make_span(start))
    }

    /// Consumes one character and emits `kind` for it.
    fn single_char_token(
        &mut self,
        kind: GraphQLTokenKind<'src>,
        start: SourcePosition,
    ) -> GraphQLToken<'src> {
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        self.skip_ignored();

        let start = self.curr_position();
        match self.peek_char() {
            None => self.make_token(GraphQLTokenKind::Eof, start),

            Some('!') => self.single_char_token(GraphQLTokenKind::Bang, start),
            Some('$') => self.single_char_token(GraphQLTokenKind::Dollar, start),
            Some('(') => self.single_char_token(GraphQLTokenKind::ParenOpen, start),
            Some(')') => self.single_char_token(GraphQLTokenKind::ParenClose, start),
            Some(':') => self.single_char_token(GraphQLTokenKind::Colon, start),
            Some('=') => self.single_char_token(GraphQLTokenKind::Equals, start),
            Some('@') => self.single_char_token(GraphQLTokenKind::At, start),
            Some('[') => self.single_char_token(GraphQLTokenKind::SquareBracketOpen, start),
            Some(']') => self.single_char_token(GraphQLTokenKind::SquareBracketClose, start),
            Some('{') => self.single_char_token(GraphQLTokenKind::CurlyBraceOpen, start),
            Some('}') => self.single_char_token(GraphQLTokenKind::CurlyBraceClose, start),

            Some('.') => self.lex_dot_or_ellipsis(start),
            Some('"') => self.lex_string(start),
            Some(c) if is_name_start(c) => self.lex_name(start),
            Some(c) if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            Some(c) => self.lex_invalid_character(c, start),
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, line terminators, commas, the BOM and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (not including) the line terminator.
    fn skip_comment(&mut self) {
        let rest = self.remaining().as_bytes();
        let len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.consume_line_segment(len);
    }

    // =========================================================================
    // Dot / Ellipsis lexing
    // =========================================================================

    /// Lexes dots, producing either an `Ellipsis` token or an error.
    ///
    /// - `...` (adjacent) is an `Ellipsis`
    /// - `.` alone is an error with no hint
    /// - `..` is an error suggesting a third dot
    /// - `. .`, `.. .`, `. ..` and `. . .` on one line are errors suggesting
    ///   the spacing be removed
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let first_dot_line = self.curr_line;
        self.consume();
        self.skip_whitespace_same_line();

        match self.peek_char() {
            Some('.') if self.curr_line == first_dot_line => {
                let second_dot_start = self.curr_position();
                let first_two_adjacent =
                    second_dot_start.byte_offset() == start.byte_offset() + 1;
                self.consume();
                self.skip_whitespace_same_line();

                match self.peek_char() {
                    Some('.') if self.curr_line == first_dot_line => {
                        let third_dot_start = self.curr_position();
                        self.consume();
                        let second_third_adjacent = third_dot_start.byte_offset()
                            == second_dot_start.byte_offset() + 1;

                        let kind = match (first_two_adjacent, second_third_adjacent) {
                            (true, true) => GraphQLTokenKind::Ellipsis,
                            (true, false) => GraphQLTokenKind::error(
                                "Unexpected `.. .`",
                                smallvec![GraphQLErrorNote::help(
                                    "This `.` may have been intended to complete a `...` \
                                     spread operator. Try removing the extra spacing between \
                                     the dots."
                                )],
                            ),
                            (false, true) => GraphQLTokenKind::error(
                                "Unexpected `. ..`",
                                smallvec![spaced_dots_help()],
                            ),
                            (false, false) => GraphQLTokenKind::error(
                                "Unexpected `. . .`",
                                smallvec![spaced_dots_help()],
                            ),
                        };
                        self.make_token(kind, start)
                    },
                    _ if first_two_adjacent => self.make_token(
                        GraphQLTokenKind::error(
                            "Unexpected `..` (use `...` for spread operator)",
                            smallvec![GraphQLErrorNote::help(
                                "Add one more `.` to form the spread operator `...`"
                            )],
                        ),
                        start,
                    ),
                    _ => self.make_token(
                        GraphQLTokenKind::error(
                            "Unexpected `. .` (use `...` for spread operator)",
                            smallvec![spaced_dots_help()],
                        ),
                        start,
                    ),
                }
            },
            _ => self.make_token(GraphQLTokenKind::error("Unexpected `.`", smallvec![]), start),
        }
    }

    fn skip_whitespace_same_line(&mut self) {
        self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\u{FEFF}'));
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name. `true`, `false` and `null` become their own token kinds
    /// only when the whole name matches.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let rest = self.remaining().as_bytes();
        let len = rest
            .iter()
            .position(|b| !is_name_continue(*b as char))
            .unwrap_or(rest.len());
        let name = &self.source[self.curr_byte_offset..self.curr_byte_offset + len];
        self.consume_line_segment(len);

        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.make_token(kind, start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: one or more digits
    /// - Optional fraction: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
            return self.make_token(GraphQLTokenKind::error("Unexpected `-`", smallvec![]), start);
        }
        self.consume_while(|ch| ch.is_ascii_digit());

        if self.peek_char() == Some('.') {
            if !matches!(self.peek_char_nth(1), Some(ch) if ch.is_ascii_digit()) {
                self.consume();
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: expected digit after `.`",
                    "https://spec.graphql.org/October2021/#sec-Float-Value",
                );
            }
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    "https://spec.graphql.org/October2021/#sec-Float-Value",
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(num_text)
        } else {
            GraphQLTokenKind::int_value_borrowed(num_text)
        };
        self.make_token(kind, start)
    }

    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: &str,
    ) -> GraphQLToken<'src> {
        self.consume_while(|ch| ch.is_ascii_digit() || matches!(ch, 'e' | 'E' | '+' | '-'));

        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        self.make_token(
            GraphQLTokenKind::error(
                format!("{message}: `{invalid_text}`"),
                smallvec![GraphQLErrorNote::spec(spec_url)],
            ),
            start,
        )
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (single-line or block string). The token keeps
    /// the raw text including the quotes.
    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let str_start = self.curr_byte_offset;

        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start, str_start);
        }

        self.consume();
        loop {
            match self.peek_char() {
                None => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                GraphQLSourceSpan::empty_at(start),
                            ),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    );
                    return self.make_token(kind, start);
                },
                Some('\n' | '\r') => {
                    let kind = GraphQLTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines"
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line strings, \
                                 or escape the newline with `\\n`"
                            ),
                        ],
                    );
                    return self.make_token(kind, start);
                },
                Some('"') => {
                    self.consume();
                    break;
                },
                Some('\\') => {
                    self.consume();
                    if !matches!(self.peek_char(), None | Some('\n' | '\r')) {
                        self.consume();
                    }
                },
                Some(_) => {
                    let len = string_run_len(self.remaining());
                    self.consume_line_segment(len);
                },
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::string_value_borrowed(string_text), start)
    }

    /// Lexes a block string literal. `\"""` does not terminate it.
    fn lex_block_string(&mut self, start: SourcePosition, str_start: usize) -> GraphQLToken<'src> {
        for _ in 0..3 {
            self.consume();
        }

        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                let kind = GraphQLTokenKind::error(
                    "Unterminated block string",
                    smallvec![
                        GraphQLErrorNote::general_with_span(
                            "Block string started here",
                            GraphQLSourceSpan::empty_at(start),
                        ),
                        GraphQLErrorNote::help("Add closing `\"\"\"`"),
                    ],
                );
                return self.make_token(kind, start);
            }

            if rest.starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume();
                }
            } else if rest.starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume();
                }
                break;
            } else {
                match string_run_len(rest) {
                    0 => {
                        self.consume();
                    },
                    len => self.consume_line_segment(len),
                }
            }
        }

        let string_text = &self.source[str_start..self.curr_byte_offset];
        self.make_token(GraphQLTokenKind::string_value_borrowed(string_text), start)
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    fn lex_invalid_character(&mut self, ch: char, start: SourcePosition) -> GraphQLToken<'src> {
        self.consume();
        self.make_token(
            GraphQLTokenKind::error(
                format!("Unexpected character {}", describe_char(ch)),
                smallvec![],
            ),
            start,
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn spaced_dots_help() -> GraphQLErrorNote {
    GraphQLErrorNote::help(
        "These dots may have been intended to form a `...` spread operator. Try \
         removing the extra spacing between the dots.",
    )
}

/// `NameStart`: `[A-Za-z_]`
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// `NameContinue`: `[A-Za-z0-9_]`
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Byte length of the leading run of `rest` that holds no quote, backslash
/// or line terminator. These are all ASCII, so the run ends on a char
/// boundary.
fn string_run_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    memchr::memchr3(b'"', b'\\', b'\n', bytes)
        .into_iter()
        .chain(memchr::memchr(b'\r', bytes))
        .min()
        .unwrap_or(bytes.len())
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks; invisible and control
/// characters also get their code point and, when known, their Unicode name.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {})", ch, ch as u32, name),
            None => format!("`{}` (U+{:04X})", ch, ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Names of the invisible characters most often pasted into documents by
/// accident.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{2000}'..='\u{200A}' => Some("TYPOGRAPHIC SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202A}'..='\u{202E}' => Some("BIDIRECTIONAL FORMATTING"),
        '\u{202F}' => Some("NARROW NO-BREAK SPACE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FFFE}' | '\u{FFFF}' => Some("NONCHARACTER"),
        _ => None,
    }
}
