//! Property-based tests: printed literals and documents parse back to
//! what was printed.

use crate::ast;
use crate::ast::Node;
use crate::print;
use crate::print_block_string_literal;
use crate::print_string_literal;
use crate::ParseOptions;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}"
}

/// Small documents built from random names and scalar arguments.
fn document_strategy() -> impl Strategy<Value = String> {
    let field = (
        name_strategy(),
        prop::option::of(name_strategy()),
        prop::collection::vec((name_strategy(), "-?[1-9][0-9]{0,6}"), 0..4),
    )
        .prop_map(|(name, alias, args)| {
            let mut out = match alias {
                Some(alias) => format!("{alias}: {name}"),
                None => name,
            };
            if !args.is_empty() {
                let args: Vec<String> =
                    args.into_iter().map(|(arg, value)| format!("{arg}: {value}")).collect();
                out.push_str(&format!("({})", args.join(", ")));
            }
            out
        });
    (
        name_strategy(),
        prop::collection::vec(field, 1..6),
    )
        .prop_map(|(op_name, fields)| format!("query {op_name} {{ {} }}", fields.join(" ")))
}

proptest! {
    /// Any Rust string survives printing as a string literal and parsing
    /// it back.
    #[test]
    fn string_literal_round_trip(value in any::<String>()) {
        let printed = print_string_literal(&value);
        let parsed = crate::parse_value(printed.as_str(), ParseOptions::without_locations());
        match parsed {
            Ok(ast::Value::String(string)) => {
                prop_assert_eq!(&string.value, &value);
                prop_assert!(!string.block);
            },
            other => prop_assert!(false, "Expected StringValue for {printed}, got: {other:?}"),
        }
    }

    /// Single-line block strings without leading indentation come back
    /// unchanged.
    #[test]
    fn block_string_literal_round_trip(value in "[A-Za-z0-9][A-Za-z0-9 ,.!?\\\\]{0,40}") {
        let printed = print_block_string_literal(&value);
        let parsed = crate::parse_value(printed.as_str(), ParseOptions::without_locations());
        match parsed {
            Ok(ast::Value::String(string)) => {
                prop_assert_eq!(&string.value, &value);
                prop_assert!(string.block);
            },
            other => prop_assert!(false, "Expected StringValue for {printed}, got: {other:?}"),
        }
    }

    /// Printing is idempotent and structure-preserving.
    #[test]
    fn document_round_trip(source in document_strategy()) {
        let doc = crate::parse_document(source.as_str(), ParseOptions::without_locations());
        prop_assert!(doc.is_ok(), "failed to parse {}", source);
        let doc = doc.unwrap();

        let printed = print(&Node::from(doc.clone()));
        let reparsed = crate::parse_document(printed.as_str(), ParseOptions::without_locations());
        prop_assert!(reparsed.is_ok(), "failed to reparse {}", printed);
        let reparsed = reparsed.unwrap();

        prop_assert_eq!(&reparsed, &doc);
        prop_assert_eq!(print(&Node::from(reparsed)), printed);
    }

    /// The parser never panics, whatever the input.
    #[test]
    fn parse_never_panics(source in "[{}()\\[\\]:$@!.=\"a-z0-9 \n#,]{0,64}") {
        let _ = crate::parse_document(source.as_str(), ParseOptions::default());
    }
}
