//! Immutable, validated tree nodes.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An immutable tree node with a name and an ordered list of children.
///
/// Equality is structural: two nodes are equal when their names match and
/// their children match pairwise, in order. Nodes are plain values, there
/// is no parent pointer and no shared ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    name: String,
    children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// A node without children.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in the subtree rooted at this node.
    ///
    /// Iterative with an explicit `(node, depth)` stack, deep chains do
    /// not overflow the call stack.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node, usize)> = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            if depth > max_depth {
                max_depth = depth;
            }
            for child in &node.children {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    /// Total number of nodes in the subtree rooted at this node.
    #[instrument(level = "trace", skip(self))]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            for child in &node.children {
                stack.push(child);
            }
        }

        count
    }

    /// Names of all leaf nodes, left to right.
    ///
    /// A node without children yields its own name.
    #[instrument(level = "trace", skip(self))]
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        let mut stack: Vec<&Node> = vec![self];

        while let Some(node) = stack.pop() {
            if node.children.is_empty() {
                leaves.push(node.name.as_str());
            } else {
                // Push children in reverse order for left-to-right traversal
                for child in node.children.iter().rev() {
                    stack.push(child);
                }
            }
        }

        leaves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      root
    //      /  \
    //   left  right
    //     |
    //   grand
    fn sample() -> Node {
        Node::new(
            "root",
            vec![
                Node::new("left", vec![Node::leaf("grand")]),
                Node::leaf("right"),
            ],
        )
    }

    #[test]
    fn test_depth() {
        assert_eq!(sample().depth(), 3);
        assert_eq!(Node::leaf("a").depth(), 1);
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample().node_count(), 4);
        assert_eq!(Node::leaf("a").node_count(), 1);
    }

    #[test]
    fn test_leaf_names_left_to_right() {
        assert_eq!(sample().leaf_names(), vec!["grand", "right"]);
        assert_eq!(Node::leaf("solo").leaf_names(), vec!["solo"]);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), Node::leaf("root"));
    }
}
