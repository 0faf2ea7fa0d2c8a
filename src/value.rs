//! Type-erased input values.
//!
//! Forests arrive at the library boundary as [`Value`]s: loosely shaped
//! data that merely claims to be a sequence of nodes. Nothing is checked
//! at construction, traversal validates each value when it first reaches
//! it and rejects anything that is not node-shaped.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// An unvalidated value at the library boundary.
///
/// Only `Seq` is accepted as a forest, only `Node` as a forest element,
/// only `Text` as a node name and only `Seq` as node children. The other
/// variants exist so that malformed input can be represented and rejected
/// with a precise diagnostic instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Int(i64),
    Text(String),
    Seq(Vec<Value>),
    Node(Box<RawNode>),
}

/// An unvalidated node shell: both fields are still arbitrary values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub name: Value,
    pub children: Value,
}

impl Value {
    /// A well-formed node value with text name and sequence children.
    pub fn node(name: impl Into<String>, children: Vec<Value>) -> Self {
        Value::Node(Box::new(RawNode {
            name: Value::Text(name.into()),
            children: Value::Seq(children),
        }))
    }

    /// A node shell with arbitrary, possibly malformed fields.
    pub fn raw_node(name: Value, children: Value) -> Self {
        Value::Node(Box::new(RawNode { name, children }))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn seq(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }

    /// Static description of the value shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
            Value::Seq(_) => "sequence",
            Value::Node(_) => "node",
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::from(&node)
    }
}

impl From<&Node> for Value {
    /// Embeds an already-validated tree as a boundary value.
    ///
    /// Bottom-up with an explicit frame stack, same as the pruning engine,
    /// so deep trees convert without call-stack recursion.
    fn from(root: &Node) -> Self {
        struct Frame<'a> {
            node: &'a Node,
            index: usize,
            built: Vec<Value>,
        }

        let mut stack = vec![Frame {
            node: root,
            index: 0,
            built: Vec::new(),
        }];

        while let Some(top) = stack.last_mut() {
            if let Some(child) = top.node.children().get(top.index) {
                top.index += 1;
                stack.push(Frame {
                    node: child,
                    index: 0,
                    built: Vec::new(),
                });
                continue;
            }
            if let Some(frame) = stack.pop() {
                let value = Value::node(frame.node.name(), frame.built);
                match stack.last_mut() {
                    Some(parent) => parent.built.push(value),
                    None => return value,
                }
            }
        }

        unreachable!("the root frame returns before the stack empties")
    }
}
