use crate::GraphQLErrorNotes;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;

/// The kind of a GraphQL token.
///
/// Literal values (`IntValue`, `FloatValue`, `StringValue`) store only the raw
/// source text. Values borrow from the source (`Cow::Borrowed`) so lexing
/// does not allocate.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (e.g.
/// `IntValue("-123")`), not as separate minus and number tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// A GraphQL name/identifier.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, including optional negative sign
    /// (e.g. `"-123"`, `"007"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, including optional negative sign
    /// (e.g. `"-1.23e-4"`, `"12e2"`).
    FloatValue(Cow<'src, str>),

    /// Raw source text of a string literal, including quotes
    /// (e.g. `"\"hello\\nworld\""`, `"\"\"\"block\"\"\""`).
    ///
    /// Use `parse_string_value()` to get the decoded content.
    StringValue(Cow<'src, str>),

    // =========================================================================
    // Boolean and null (only on an exact, full-name match)
    // =========================================================================
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    Null,

    /// End of input.
    Eof,

    /// Text the lexer could not turn into a token.
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::FloatValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::StringValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the string representation of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue(_)
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// Returns `true` for a `"""` block string token.
    pub fn is_block_string(&self) -> bool {
        matches!(self, GraphQLTokenKind::StringValue(raw) if raw.starts_with("\"\"\""))
    }

    /// Decodes a `StringValue`'s raw text.
    ///
    /// - Single-line strings (`"..."`): escape sequences are decoded; a string
    ///   with no backslash is returned verbatim.
    /// - Block strings (`"""..."""`): the block-string dedent is applied and
    ///   `\"""` is unescaped.
    ///
    /// Returns `None` if this is not a `StringValue`.
    pub fn parse_string_value(&self) -> Option<Result<String, GraphQLStringParsingError>> {
        match self {
            GraphQLTokenKind::StringValue(raw) => Some(parse_graphql_string(raw)),
            _ => None,
        }
    }
}

fn parse_graphql_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if let Some(rest) = raw.strip_prefix("\"\"\"") {
        let content = rest
            .strip_suffix("\"\"\"")
            .ok_or(GraphQLStringParsingError::UnterminatedString)?;
        Ok(dedent_block_string(content))
    } else {
        let content = raw
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .ok_or(GraphQLStringParsingError::UnterminatedString)?;
        unescape_string(content)
    }
}

/// Decodes the escape sequences of a single-line string's content (the text
/// between the quotes).
///
/// Supports `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t` and `\uXXXX`. A
/// high/low surrogate pair written as two `\u` escapes is combined into one
/// character; an unpaired surrogate is an error.
pub fn unescape_string(content: &str) -> Result<String, GraphQLStringParsingError> {
    if memchr::memchr(b'\\', content.as_bytes()).is_none() {
        return Ok(content.to_string());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('u') => {
                let code_unit = read_hex4(&mut chars)?;
                result.push(decode_code_unit(code_unit, &mut chars)?);
            }
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(format!(
                    "\\{other}"
                )));
            }
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            }
        }
    }

    Ok(result)
}

/// Reads the four hex digits following `\u`.
fn read_hex4(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<u32, GraphQLStringParsingError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}{c}"
                )));
            }
            None => {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!(
                    "\\u{hex}"
                )));
            }
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Turns one UTF-16 code unit into a `char`, pulling the trailing `\uXXXX`
/// low surrogate from `chars` when `code_unit` is a high surrogate.
fn decode_code_unit(
    code_unit: u32,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<char, GraphQLStringParsingError> {
    let lone_surrogate =
        || GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{code_unit:04X}"));

    match code_unit {
        0xD800..=0xDBFF => {
            if chars.next() != Some('\\') || chars.next() != Some('u') {
                return Err(lone_surrogate());
            }
            let low = read_hex4(chars)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(lone_surrogate());
            }
            let combined = 0x10000 + ((code_unit - 0xD800) << 10) + (low - 0xDC00);
            char::from_u32(combined).ok_or_else(lone_surrogate)
        }
        0xDC00..=0xDFFF => Err(lone_surrogate()),
        _ => char::from_u32(code_unit).ok_or_else(lone_surrogate),
    }
}

/// Applies the block-string dedent to the content between `"""` delimiters.
///
/// 1. Split into lines on `\r\n`, `\n` or `\r`.
/// 2. The common indent is the smallest non-zero run of leading spaces/tabs
///    among lines after the first that are not entirely whitespace.
/// 3. Leading and trailing whitespace-only lines are dropped.
/// 4. Up to common-indent leading whitespace is removed from every kept
///    line, the first included.
/// 5. Lines are joined with `\n` and `\"""` becomes `"""`.
pub fn dedent_block_string(content: &str) -> String {
    let lines = split_lines(content);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace_len(line))
        .filter(|indent| *indent > 0)
        .min()
        .unwrap_or(0);

    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !is_blank(line))
        .unwrap_or(first);

    let mut result = String::with_capacity(content.len());
    for (idx, line) in lines.iter().enumerate().take(last + 1).skip(first) {
        if idx > first {
            result.push('\n');
        }
        let strip = leading_whitespace_len(line).min(common_indent);
        result.push_str(&line[strip..]);
    }

    if result.contains("\\\"\"\"") {
        result.replace("\\\"\"\"", "\"\"\"")
    } else {
        result
    }
}

fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut remaining = content;
    while let Some(idx) = memchr::memchr2(b'\n', b'\r', remaining.as_bytes()) {
        lines.push(&remaining[..idx]);
        let skip = if remaining[idx..].starts_with("\r\n") { 2 } else { 1 };
        remaining = &remaining[idx + skip..];
    }
    lines.push(remaining);
    lines
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace_len(line) == line.len()
}
