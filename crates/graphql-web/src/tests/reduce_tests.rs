//! Tests for bottom-up reduction of syntax trees.

use crate::ast::Node;
use crate::tests::utils::parse_doc;
use crate::tests::utils::parse_val;
use crate::visitor::reduce;
use crate::visitor::visit;
use crate::visitor::Reduce;
use crate::visitor::ReduceAction;
use crate::visitor::Reduced;
use crate::visitor::VisitAction;
use crate::visitor::VisitContext;
use crate::visitor::VisitError;
use crate::visitor::Visitor;
use std::cell::RefCell;

/// Reduces a document to an outline of its field names, e.g.
/// `a b {c d}`. Fields named in `skip`, `remove` or `stop_at` get the
/// matching [`ReduceAction`] from `enter`.
#[derive(Default)]
struct Outline {
    skip: Option<&'static str>,
    remove: Option<&'static str>,
    stop_at: Option<&'static str>,
    names_left: Vec<String>,
}

impl Reduce for Outline {
    type Output = String;

    fn enter(
        &mut self,
        node: &Node,
        _ctx: &VisitContext<'_>,
    ) -> Result<ReduceAction<String>, VisitError> {
        let Node::Field(field) = node else {
            return Ok(ReduceAction::Continue);
        };
        let name = Some(field.name.value.as_str());
        Ok(if name == self.skip {
            ReduceAction::Skip(format!("<{}>", field.name.value))
        } else if name == self.remove {
            ReduceAction::Remove
        } else if name == self.stop_at {
            ReduceAction::Break
        } else {
            ReduceAction::Continue
        })
    }

    fn leave(
        &mut self,
        node: &Node,
        mut children: Reduced<String>,
        _ctx: &VisitContext<'_>,
    ) -> Result<String, VisitError> {
        Ok(match node {
            Node::Name(name) => {
                self.names_left.push(name.value.clone());
                name.value.clone()
            },
            Node::Field(_) => {
                let name = children.take("name").unwrap_or_default();
                match children.take("selection_set") {
                    Some(selections) => format!("{name} {{{selections}}}"),
                    None => name,
                }
            },
            Node::SelectionSet(_) => children.take_list("selections").join(" "),
            Node::OperationDefinition(_) => children.take("selection_set").unwrap_or_default(),
            Node::Document(_) => children.take_list("definitions").join("\n"),
            _ => String::new(),
        })
    }
}

fn outline(source: &str, reducer: &mut Outline) -> Option<String> {
    reduce(parse_doc(source), reducer).unwrap()
}

// =============================================================================
// Folding
// =============================================================================

/// `leave` receives the values reduced from each child field.
#[test]
fn reduce_to_outline() {
    let mut reducer = Outline::default();
    let result = outline("{ a b { c d } }", &mut reducer);
    assert_eq!(result.as_deref(), Some("a b {c d}"));
    assert_eq!(reducer.names_left, ["a", "b", "c", "d"]);
}

/// Value trees reduce like documents.
#[test]
fn reduce_value_root() {
    struct SumInts;

    impl Reduce for SumInts {
        type Output = i64;

        fn leave(
            &mut self,
            node: &Node,
            children: Reduced<i64>,
            _ctx: &VisitContext<'_>,
        ) -> Result<i64, VisitError> {
            if let Node::IntValue(int) = node {
                return int.value.parse().map_err(VisitError::callback);
            }
            Ok(children.into_values().sum())
        }
    }

    let value = parse_val("[1, {a: 2, b: [3]}, \"4\"]");
    assert_eq!(reduce(value, &mut SumInts).unwrap(), Some(6));
}

/// Fields appear in field order; absent optional fields have no entry and
/// list fields always have one.
#[test]
fn reduced_fields_in_order() {
    struct FieldKeys(Vec<Vec<&'static str>>);

    impl Reduce for FieldKeys {
        type Output = ();

        fn leave(
            &mut self,
            node: &Node,
            children: Reduced<()>,
            _ctx: &VisitContext<'_>,
        ) -> Result<(), VisitError> {
            if let Node::Field(_) = node {
                self.0.push(children.fields().map(|(name, _)| name).collect());
            }
            Ok(())
        }
    }

    let mut reducer = FieldKeys(Vec::new());
    reduce(parse_doc("{ x: f(a: 1) @d { g } }"), &mut reducer).unwrap();
    assert_eq!(
        reducer.0,
        [
            vec!["name", "arguments", "directives"],
            vec!["alias", "name", "arguments", "directives", "selection_set"],
        ],
    );
}

/// `leave` sees the same context as it does during `visit`.
#[test]
fn leave_context_matches_visit() {
    struct Paths(Vec<String>);

    fn describe(node: &Node, ctx: &VisitContext<'_>) -> String {
        let path: Vec<String> = ctx.path.iter().map(ToString::to_string).collect();
        format!("{} {} {}", node.kind(), path.join("."), ctx.ancestors.len())
    }

    impl Reduce for Paths {
        type Output = ();

        fn leave(
            &mut self,
            node: &Node,
            _children: Reduced<()>,
            ctx: &VisitContext<'_>,
        ) -> Result<(), VisitError> {
            self.0.push(describe(node, ctx));
            Ok(())
        }
    }

    let source = "query Q($v: [Int!] = [1]) { f(x: {y: $v}) @d { ... on T { g } } }";
    let mut reducer = Paths(Vec::new());
    reduce(parse_doc(source), &mut reducer).unwrap();

    let visited = RefCell::new(Vec::new());
    let mut visitor = Visitor::new().leave(|node, ctx| {
        visited.borrow_mut().push(describe(node, ctx));
        Ok(VisitAction::Continue)
    });
    visit(parse_doc(source), &mut visitor).unwrap();
    drop(visitor);

    assert_eq!(reducer.0, visited.into_inner());
}

// =============================================================================
// Actions
// =============================================================================

/// `Skip` uses the given value; the skipped subtree is never left.
#[test]
fn skip_uses_given_value() {
    let mut reducer = Outline {
        skip: Some("b"),
        ..Outline::default()
    };
    let result = outline("{ a b { c } d }", &mut reducer);
    assert_eq!(result.as_deref(), Some("a <b> d"));
    assert_eq!(reducer.names_left, ["a", "d"]);
}

/// `Remove` leaves the node out of its parent's list.
#[test]
fn remove_drops_from_list() {
    let mut reducer = Outline {
        remove: Some("b"),
        ..Outline::default()
    };
    let result = outline("{ a b { c } d }", &mut reducer);
    assert_eq!(result.as_deref(), Some("a d"));
}

/// `Break` stops the reduction and yields no value.
#[test]
fn break_yields_none() {
    let mut reducer = Outline {
        stop_at: Some("c"),
        ..Outline::default()
    };
    let result = outline("{ a b { c } d }", &mut reducer);
    assert_eq!(result, None);
    assert_eq!(reducer.names_left, ["a", "b"]);
}

/// Removing the root is an error, as with `visit`.
#[test]
fn removing_root() {
    struct RemoveAll;

    impl Reduce for RemoveAll {
        type Output = ();

        fn enter(
            &mut self,
            _node: &Node,
            _ctx: &VisitContext<'_>,
        ) -> Result<ReduceAction<()>, VisitError> {
            Ok(ReduceAction::Remove)
        }

        fn leave(
            &mut self,
            _node: &Node,
            _children: Reduced<()>,
            _ctx: &VisitContext<'_>,
        ) -> Result<(), VisitError> {
            Ok(())
        }
    }

    let result = reduce(parse_doc("{ a }"), &mut RemoveAll);
    assert!(
        matches!(result, Err(VisitError::RemovedRoot)),
        "Expected RemovedRoot, got: {result:?}",
    );
}

/// An error from `leave` aborts the reduction and is returned as is.
#[test]
fn leave_error_is_returned() {
    struct FailOnFloat;

    impl Reduce for FailOnFloat {
        type Output = ();

        fn leave(
            &mut self,
            node: &Node,
            _children: Reduced<()>,
            _ctx: &VisitContext<'_>,
        ) -> Result<(), VisitError> {
            match node {
                Node::FloatValue(_) => Err(VisitError::callback("floats are not allowed")),
                _ => Ok(()),
            }
        }
    }

    let result = reduce(parse_doc("{ f(a: 1, b: 2.5) }"), &mut FailOnFloat);
    if let Err(err @ VisitError::Callback(_)) = &result {
        assert_eq!(err.to_string(), "floats are not allowed");
    } else {
        panic!("Expected Callback error, got: {result:?}");
    }
}
