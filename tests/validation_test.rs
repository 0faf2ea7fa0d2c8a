//! Structural validation: every contract violation fails fast with a
//! precise error, and no partial output escapes.

use rstest::rstest;
use treeg::{clean_tree, TreeError, Value};

fn n(name: &str, children: Vec<Value>) -> Value {
    Value::node(name, children)
}

#[rstest]
#[case::integer(Value::Int(5), "integer")]
#[case::null(Value::Null, "null")]
#[case::text(Value::text("a"), "text")]
#[case::node(n("a", vec![]), "node")]
fn test_forest_must_be_sequence(#[case] forest: Value, #[case] found: &'static str) {
    assert_eq!(
        clean_tree(&forest).unwrap_err(),
        TreeError::ForestNotIterable { found }
    );
}

#[rstest]
#[case::text(Value::text("x"), "text")]
#[case::null(Value::Null, "null")]
#[case::integer(Value::Int(1), "integer")]
#[case::sequence(Value::seq(vec![]), "sequence")]
fn test_forest_elements_must_be_nodes(#[case] element: Value, #[case] found: &'static str) {
    let forest = Value::seq(vec![element]);
    assert_eq!(
        clean_tree(&forest).unwrap_err(),
        TreeError::ElementNotNode { found }
    );
}

#[rstest]
#[case::integer(Value::Int(1), "integer")]
#[case::null(Value::Null, "null")]
#[case::sequence(Value::seq(vec![]), "sequence")]
fn test_node_name_must_be_text(#[case] name: Value, #[case] found: &'static str) {
    let forest = Value::seq(vec![Value::raw_node(name, Value::seq(vec![]))]);
    assert_eq!(
        clean_tree(&forest).unwrap_err(),
        TreeError::NameNotText { found }
    );
}

#[rstest]
#[case::integer(Value::Int(1), "integer")]
#[case::null(Value::Null, "null")]
#[case::text(Value::text("x"), "text")]
fn test_node_children_must_be_sequence(#[case] children: Value, #[case] found: &'static str) {
    let forest = Value::seq(vec![Value::raw_node(Value::text("a"), children)]);
    assert_eq!(
        clean_tree(&forest).unwrap_err(),
        TreeError::ChildrenNotSequence { found }
    );
}

#[rstest]
#[case::text_child(vec![Value::text("x")], "text")]
#[case::text_then_node(vec![Value::text("x"), n("a", vec![])], "text")]
#[case::node_then_text(vec![n("a", vec![]), Value::text("x")], "text")]
#[case::null_child(vec![Value::Null], "null")]
fn test_children_elements_must_be_nodes(
    #[case] children: Vec<Value>,
    #[case] found: &'static str,
) {
    let forest = Value::seq(vec![n("a", children)]);
    assert_eq!(
        clean_tree(&forest).unwrap_err(),
        TreeError::ElementNotNode { found }
    );
}

#[rstest]
fn test_malformed_later_root_fails_whole_call() {
    // The first root is valid but no partial result is returned.
    let forest = Value::seq(vec![n("a", vec![n("b", vec![])]), Value::Int(3)]);
    assert_eq!(
        clean_tree(&forest).unwrap_err(),
        TreeError::ElementNotNode { found: "integer" }
    );
}

#[rstest]
fn test_malformed_node_deep_in_surviving_subtree_is_caught() {
    let forest = Value::seq(vec![n(
        "a",
        vec![n("b", vec![Value::raw_node(Value::Int(9), Value::seq(vec![]))])],
    )]);
    assert_eq!(
        clean_tree(&forest).unwrap_err(),
        TreeError::NameNotText { found: "integer" }
    );
}

#[rstest]
fn test_malformed_child_under_empty_named_parent_is_caught() {
    // Validation happens on visit, before the prune decision: the parent
    // would be dropped, but its malformed child still fails the call.
    let forest = Value::seq(vec![n("", vec![Value::Int(7)])]);
    assert_eq!(
        clean_tree(&forest).unwrap_err(),
        TreeError::ElementNotNode { found: "integer" }
    );
}

#[rstest]
#[case::forest(
    TreeError::ForestNotIterable { found: "integer" },
    "forest must be a sequence of nodes, got integer"
)]
#[case::element(
    TreeError::ElementNotNode { found: "text" },
    "forest must contain only nodes, got text"
)]
#[case::name(
    TreeError::NameNotText { found: "null" },
    "node name must be text, got null"
)]
#[case::children(
    TreeError::ChildrenNotSequence { found: "text" },
    "node children must be a sequence, got text"
)]
fn test_error_messages(#[case] err: TreeError, #[case] message: &str) {
    assert_eq!(err.to_string(), message);
}
