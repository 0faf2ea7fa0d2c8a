//! treeg: prune and validate forests of named tree nodes.
//!
//! The one operation of this crate is [`clean_tree`]: given a forest (a
//! sequence of root values), it returns a new forest with every node whose
//! name is the empty string removed together with its entire subtree.
//! Traversal uses an explicit heap-allocated frame stack instead of
//! call-stack recursion, so trees thousands of levels deep are handled
//! without overflow.
//!
//! Input is type-erased: forests arrive as [`Value`]s and every element is
//! validated when traversal first reaches it. Output is a `Vec` of fresh,
//! immutable [`Node`] values, the input is never mutated.
//!
//! ```
//! use treeg::{clean_tree, Node, Value};
//!
//! let forest = Value::seq(vec![Value::node(
//!     "a",
//!     vec![Value::node("", vec![]), Value::node("b", vec![])],
//! )]);
//!
//! let cleaned = clean_tree(&forest).unwrap();
//! assert_eq!(cleaned, vec![Node::new("a", vec![Node::leaf("b")])]);
//! ```

pub mod display;
pub mod errors;
mod frame_stack;
pub mod node;
pub mod util;
pub mod value;

pub use display::ToTreeString;
pub use errors::{TreeError, TreeResult};
pub use node::Node;
pub use value::{RawNode, Value};

use tracing::{debug, instrument};

/// Prunes a forest, dropping every node whose name is the empty string
/// along with its entire subtree.
///
/// The forest must be a [`Value::Seq`] of node values; anything else fails
/// with [`TreeError::ForestNotIterable`] before any element is examined.
/// Each visited value is validated on first contact: it must be a node,
/// its name must be text and its children must be a sequence. Any
/// violation aborts the whole call, there is no partial output.
///
/// Surviving roots keep their relative input order, as do surviving
/// children at every level. The call never mutates its input and returns
/// identical results on repeated invocation.
#[instrument(level = "debug", skip(forest))]
pub fn clean_tree(forest: &Value) -> TreeResult<Vec<Node>> {
    match forest {
        Value::Seq(roots) => clean_roots(roots),
        other => Err(TreeError::ForestNotIterable {
            found: other.kind(),
        }),
    }
}

/// Prunes roots produced by any iterator, collecting the survivors.
///
/// Same semantics as [`clean_tree`] for each root; useful when the forest
/// is generated lazily instead of materialized as a [`Value::Seq`].
pub fn clean_roots<'a, I>(roots: I) -> TreeResult<Vec<Node>>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut cleaned = Vec::new();
    for root in roots {
        if let Some(node) = frame_stack::clean_root(root)? {
            cleaned.push(node);
        }
    }
    debug!(surviving_roots = cleaned.len(), "forest cleaned");
    Ok(cleaned)
}
