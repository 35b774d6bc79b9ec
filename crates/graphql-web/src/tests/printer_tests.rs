//! Tests for the canonical printer.

use crate::ast;
use crate::ast::Node;
use crate::print;
use crate::print_block_string_literal;
use crate::print_string_literal;
use crate::tests::utils::parse_doc;
use crate::tests::utils::parse_ty;
use crate::tests::utils::parse_val;
use std::sync::Arc;

/// Parses and prints a document.
fn reprint(source: &str) -> String {
    print(&Node::from(parse_doc(source)))
}

// =============================================================================
// Operations and fragments
// =============================================================================

/// Printing is canonical: reprinting printed output changes nothing, and
/// reparsing it yields an equal tree.
#[test]
fn round_trip() {
    let source = "
        query Q($a: Int = 1, $b: [String!]! @x) @op {
          alias: f(a: $a, b: {c: [1, 2.5, \"s\", ENUM, null, true]}) @skip(if: false) {
            ...Frag @y
            ... on T { g }
            ... @z { h }
          }
        }
        fragment Frag on T { i }
        mutation { j }
        subscription S { k }
    ";
    let printed = reprint(source);
    assert_eq!(reprint(&printed), printed);
    assert_eq!(parse_doc(&printed), parse_doc(source));
}

/// An anonymous query with nothing attached prints as a bare selection
/// set; anything else keeps the keyword.
#[test]
fn shorthand_query() {
    assert_eq!(reprint("query { a }"), "{\n  a\n}");
    assert_eq!(reprint("{ a }"), "{\n  a\n}");
    assert_eq!(reprint("query ($v: Int) { a }"), "query ($v: Int) {\n  a\n}");
    assert_eq!(reprint("query @d { a }"), "query @d {\n  a\n}");
    assert_eq!(reprint("mutation { a }"), "mutation {\n  a\n}");
    assert_eq!(reprint("query Q { a }"), "query Q {\n  a\n}");
}

/// Definitions are separated by a blank line.
#[test]
fn multiple_definitions() {
    assert_eq!(
        reprint("{ a } fragment F on T @d { b }"),
        "{\n  a\n}\n\nfragment F on T @d {\n  b\n}",
    );
}

/// Nested selection sets indent two spaces per level.
#[test]
fn nested_indentation() {
    assert_eq!(
        reprint("{ a { b { c } ... on T { d } } }"),
        "{\n  a {\n    b {\n      c\n    }\n    ... on T {\n      d\n    }\n  }\n}",
    );
}

/// Spreads, inline fragments without a type condition, and directives.
#[test]
fn fragments_and_directives() {
    assert_eq!(
        reprint("{ ...F @a @b(x: 1) ... @c { d } }"),
        "{\n  ...F @a @b(x: 1)\n  ... @c {\n    d\n  }\n}",
    );
}

/// Variable definitions with defaults and directives.
#[test]
fn variable_definitions() {
    assert_eq!(
        reprint("query Q($a: [Int!]! = [1, 2] @d, $b: B) { a }"),
        "query Q($a: [Int!]! = [1, 2] @d, $b: B) {\n  a\n}",
    );
}

// =============================================================================
// Argument wrapping
// =============================================================================

/// A field head of exactly 80 columns stays on one line; 81 wraps with
/// one argument per line.
#[test]
fn argument_wrapping_boundary() {
    let fits = "x".repeat(72);
    assert_eq!(
        reprint(&format!("{{ f(a: \"{fits}\") }}")),
        format!("{{\n  f(a: \"{fits}\")\n}}"),
    );

    let wraps = "x".repeat(73);
    assert_eq!(
        reprint(&format!("{{ f(a: \"{wraps}\") }}")),
        format!("{{\n  f(\n    a: \"{wraps}\"\n  )\n}}"),
    );
}

/// Every argument gets its own line once wrapped; the alias counts
/// toward the width.
#[test]
fn argument_wrapping_multiple() {
    let long = "y".repeat(30);
    let printed = reprint(&format!(
        "{{ alias: field(first: \"{long}\", second: \"{long}\") {{ id }} }}"
    ));
    assert_eq!(
        printed,
        format!(
            "{{\n  alias: field(\n    first: \"{long}\"\n    second: \"{long}\"\n  ) {{\n    id\n  }}\n}}"
        ),
    );
}

/// Directive arguments never wrap.
#[test]
fn directive_arguments_do_not_wrap() {
    let long = "z".repeat(100);
    let printed = reprint(&format!("{{ f @d(a: \"{long}\") }}"));
    assert_eq!(printed, format!("{{\n  f @d(a: \"{long}\")\n}}"));
}

// =============================================================================
// Values
// =============================================================================

/// Strings print with JSON escaping.
#[test]
fn string_values() {
    assert_eq!(parse_val(r#""a\"b\n\u0001é""#).print(), r#""a\"b\n\u0001é""#);
    assert_eq!(print_string_literal("tab\there"), r#""tab\there""#);
}

/// Block strings print their lines at the current indentation.
#[test]
fn block_strings() {
    assert_eq!(parse_val("\"\"\"x\ny\"\"\"").print(), "\"\"\"\nx\ny\n\"\"\"");
    assert_eq!(
        reprint("{ f(a: \"\"\"x\ny\"\"\") }"),
        "{\n  f(a: \"\"\"\n  x\n  y\n  \"\"\")\n}",
    );
}

/// `"""` inside a block string is escaped.
#[test]
fn block_string_escapes_triple_quote() {
    assert_eq!(print_block_string_literal("a\"\"\"b"), "\"\"\"\na\\\"\"\"b\n\"\"\"");
}

/// Lists, objects and scalars keep their source text.
#[test]
fn compound_values() {
    assert_eq!(parse_val("[ 1 , -2.5e3 , [ ] , { } ]").print(), "[1, -2.5e3, [], {}]");
    assert_eq!(parse_val("{a:1 b:{c:$d}}").print(), "{a: 1, b: {c: $d}}");
    assert_eq!(parse_val("null").print(), "null");
    assert_eq!(parse_val("false").print(), "false");
}

/// Types print as written, minus whitespace.
#[test]
fn types() {
    assert_eq!(parse_ty("[ [ A ! ] ] !").print(), "[[A!]]!");
}

// =============================================================================
// Hand-built trees
// =============================================================================

/// Empty argument and directive lists are omitted with their delimiters.
#[test]
fn empty_lists_are_omitted() {
    let field = ast::Field {
        alias: None,
        name: Arc::new(ast::Name::new("f")),
        arguments: Vec::new(),
        directives: vec![Arc::new(ast::Directive {
            name: Arc::new(ast::Name::new("d")),
            arguments: Vec::new(),
            loc: None,
        })],
        selection_set: None,
        loc: None,
    };
    assert_eq!(field.print(), "f @d");
}

/// An empty selection set prints as nothing, and so does the space
/// before it.
#[test]
fn empty_selection_set_is_omitted() {
    let empty = Arc::new(ast::SelectionSet {
        selections: Vec::new(),
        loc: None,
    });
    assert_eq!(empty.print(), "");

    let op = ast::OperationDefinition {
        description: None,
        operation: ast::OperationKind::Query,
        name: Some(Arc::new(ast::Name::new("Q"))),
        variable_definitions: Vec::new(),
        directives: Vec::new(),
        selection_set: Arc::clone(&empty),
        loc: None,
    };
    assert_eq!(op.print(), "query Q");

    let frag = ast::InlineFragment {
        type_condition: None,
        directives: Vec::new(),
        selection_set: empty,
        loc: None,
    };
    assert_eq!(frag.print(), "...");
}

/// A described anonymous query keeps its keyword so the description has
/// something to attach to.
#[test]
fn described_anonymous_query() {
    let doc = parse_doc("query { a }");
    let ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("Expected OperationDefinition, got: {:?}", doc.definitions[0]);
    };
    let described = ast::OperationDefinition {
        description: Some(Arc::new(ast::StringValue::new("Docs", false))),
        ..(**op).clone()
    };
    assert_eq!(described.print(), "\"Docs\"\nquery {\n  a\n}");
}
