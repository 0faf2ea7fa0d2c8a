//! Human-readable tree rendering via termtree.

use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::node::Node;

pub trait ToTreeString {
    fn to_tree_string(&self) -> Tree<String>;
}

impl ToTreeString for Node {
    /// Builds the termtree representation bottom-up with an explicit
    /// frame stack, so deep trees render without call-stack recursion.
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        struct Frame<'a> {
            node: &'a Node,
            index: usize,
            leaves: Vec<Tree<String>>,
        }

        let mut stack = vec![Frame {
            node: self,
            index: 0,
            leaves: Vec::new(),
        }];

        while let Some(top) = stack.last_mut() {
            if let Some(child) = top.node.children().get(top.index) {
                top.index += 1;
                stack.push(Frame {
                    node: child,
                    index: 0,
                    leaves: Vec::new(),
                });
                continue;
            }
            if let Some(frame) = stack.pop() {
                let tree = Tree::new(frame.node.name().to_string()).with_leaves(frame.leaves);
                match stack.last_mut() {
                    Some(parent) => parent.leaves.push(tree),
                    None => return tree,
                }
            }
        }

        unreachable!("the root frame returns before the stack empties")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
