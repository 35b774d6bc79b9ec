//! Tests for parse error reporting: messages, kinds, spans, notes and
//! formatting.

use crate::tests::utils::parse_doc_err;
use crate::GrammarProduction;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLParseErrorKind;
use crate::ParseOptions;
use crate::Source;

// =============================================================================
// Document structure
// =============================================================================

/// A document needs at least one definition; whitespace and comments do
/// not count.
#[test]
fn empty_document_is_rejected() {
    for source in ["", "   ", "# just a comment\n", ",,,"] {
        let err = parse_doc_err(source);
        assert_eq!(
            err.message(),
            "document must contain at least one definition",
            "for {source:?}",
        );
        assert_eq!(
            err.kind(),
            &GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: "document".to_string(),
            },
        );
    }
}

/// Type system definitions are recognized and explained.
#[test]
fn type_system_definition_is_rejected() {
    let err = parse_doc_err("type Query { a: Int }");
    assert_eq!(
        err.message(),
        "expected one of `query`, `mutation`, `subscription`, `fragment`, `{`, found `type`",
    );
    assert_eq!(err.production(), GrammarProduction::Document);
    assert!(err.notes().iter().any(|note| {
        note.kind == GraphQLErrorNoteKind::General
            && note.message == "type system definitions are not supported in executable documents"
    }));
}

/// Other unknown leading names get no type system note.
#[test]
fn unknown_definition_keyword() {
    let err = parse_doc_err("querry Q { a }");
    assert!(err.message().ends_with("found `querry`"));
    assert!(err.notes().iter().all(|note| note.kind != GraphQLErrorNoteKind::General));
}

/// Stray tokens after a complete definition.
#[test]
fn trailing_closing_brace_is_rejected() {
    let err = parse_doc_err("{ a } }");
    assert!(err.message().ends_with("found `}`"));
    assert_eq!(err.offset(), 6);
}

// =============================================================================
// Fragments and variables
// =============================================================================

/// `on` cannot name a fragment.
#[test]
fn fragment_named_on_is_rejected() {
    let err = parse_doc_err("fragment on on User { id }");
    assert_eq!(err.message(), "fragment name cannot be `on`");
    assert_eq!(err.production(), GrammarProduction::FragmentDefinition);
    assert_eq!(err.offset(), 9);
}

/// A fragment definition needs its type condition.
#[test]
fn fragment_without_type_condition_is_rejected() {
    let err = parse_doc_err("fragment F { id }");
    assert_eq!(err.message(), "expected `on`, found `{`");
    if let GraphQLParseErrorKind::UnexpectedToken { expected, found } = err.kind() {
        assert_eq!(expected, &["on"]);
        assert_eq!(found, "{");
    } else {
        panic!("Expected UnexpectedToken, got: {:?}", err.kind());
    }
}

/// `()` after an operation name is an empty variable list.
#[test]
fn empty_variable_definitions_are_rejected() {
    let err = parse_doc_err("query Q() { a }");
    assert_eq!(err.message(), "variable definitions cannot be empty");
    assert_eq!(err.production(), GrammarProduction::VariableDefinition);
}

/// Variable definitions start with `$`.
#[test]
fn variable_without_dollar_is_rejected() {
    let err = parse_doc_err("query Q(a: Int) { a }");
    assert_eq!(err.message(), "expected `$`, found `a`");
    assert_eq!(err.production(), GrammarProduction::Variable);
}

/// Arguments are `name: value`.
#[test]
fn argument_without_colon_is_rejected() {
    let err = parse_doc_err("{ f(a 1) }");
    assert_eq!(err.message(), "expected `:`, found `1`");
    assert_eq!(err.production(), GrammarProduction::Argument);
    assert_eq!(err.offset(), 6);
    assert_eq!(err.span().byte_range(), 6..7);
}

// =============================================================================
// Lexer errors
// =============================================================================

/// Characters outside the language surface as lexer errors with the
/// lexer's own message.
#[test]
fn unexpected_character() {
    let err = parse_doc_err("{ a ? }");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(err.message(), "Unexpected character `?`");
    assert_eq!(err.offset(), 4);
}

/// `&` is rejected by the lexer rather than reported as a misplaced token.
#[test]
fn ampersand_is_lexer_error() {
    let err = parse_doc_err("fragment F on A & B { a }");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
    assert_eq!(err.message(), "Unexpected character `&`");
    assert_eq!(err.offset(), 16);
}

/// Invisible characters are named in the message.
#[test]
fn unexpected_invisible_character() {
    let err = parse_doc_err("{ a \u{200B} }");
    assert_eq!(
        err.message(),
        "Unexpected character `\u{200B}` (U+200B: ZERO WIDTH SPACE)",
    );
}

/// Two dots are not a spread.
#[test]
fn two_dots_are_rejected() {
    let err = parse_doc_err("{ ..F }");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::LexerError);
    assert!(err.message().starts_with("Unexpected `..`"));
    assert!(err.notes().iter().any(|note| note.kind == GraphQLErrorNoteKind::Help));
}

/// An unterminated block string points back at where it started.
#[test]
fn unterminated_block_string() {
    let err = parse_doc_err("{ f(a: \"\"\"abc) }");
    assert_eq!(err.message(), "Unterminated block string");
    assert!(err.notes().iter().any(|note| note.span.is_some()));
}

// =============================================================================
// Positions and formatting
// =============================================================================

/// Lines and columns are 1-based and count every line terminator style.
#[test]
fn display_position_across_lines() {
    let err = parse_doc_err("{\r\n  a\r\n  b(x 1)\n}");
    assert_eq!(err.message(), "expected `:`, found `1`");
    assert_eq!(err.display_position(), (3, 7));
}

/// The source's location offset shifts reported positions; the column
/// offset only applies to the first line.
#[test]
fn location_offset_applies() {
    let source = Source::new("{ f(a 1) }").with_location_offset(10, 5);
    let err = crate::parse_document(source, ParseOptions::default()).unwrap_err();
    assert_eq!(err.display_position(), (10, 11));

    let source = Source::new("\n{ f(a 1) }").with_location_offset(10, 5);
    let err = crate::parse_document(source, ParseOptions::default()).unwrap_err();
    assert_eq!(err.display_position(), (11, 7));
}

/// The one-line form names the source, position, production and offset.
#[test]
fn format_oneline() {
    let err = parse_doc_err("{ f(a 1) }");
    assert_eq!(
        err.format_oneline(),
        "GraphQL request:1:7: Syntax Error: expected `:`, found `1` (in Argument at offset 6)",
    );
    assert_eq!(err.to_string(), err.format_oneline());
}

/// The detailed form shows the offending line with a caret and the notes.
#[test]
fn format_detailed() {
    let source = Source::new("query Q {\n  f(a 1)\n}").with_name("q.graphql");
    let err = crate::parse_document(source, ParseOptions::default()).unwrap_err();
    let detailed = err.format_detailed();
    assert!(detailed.starts_with("error: expected `:`, found `1`\n"), "{detailed}");
    assert!(detailed.contains("--> q.graphql:2:7 (in Argument)"), "{detailed}");
    assert!(detailed.contains("  f(a 1)"), "{detailed}");
    assert!(detailed.contains('^'), "{detailed}");
}

/// Help notes attached by the parser show up in the detailed form.
#[test]
fn format_detailed_includes_help() {
    let err = parse_doc_err("{ a {} }");
    let detailed = err.format_detailed();
    assert!(detailed.contains("= help: Remove the empty delimiters"), "{detailed}");
}
