//! Iterative post-order pruning engine.
//!
//! Recursion is replaced by an explicit, heap-allocated stack of frames,
//! so traversal depth is bounded by memory, not by the call stack. Each
//! frame is the work-in-progress record for one node: its validated name,
//! its validated children, the index of the next child to descend into,
//! and the cleaned children collected so far.

use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::Node;
use crate::value::Value;

#[derive(Debug)]
struct Frame<'a> {
    name: &'a str,
    children: &'a [Value],
    index: usize,
    cleaned: Vec<Node>,
}

impl<'a> Frame<'a> {
    /// Validates a value as a node and opens a frame for it.
    ///
    /// Validation happens here, when traversal first reaches the value:
    /// before the prune decision for this node, and before any of its
    /// children are looked at.
    fn open(value: &'a Value) -> TreeResult<Self> {
        let raw = match value {
            Value::Node(raw) => raw,
            other => {
                return Err(TreeError::ElementNotNode {
                    found: other.kind(),
                })
            }
        };
        let name = match &raw.name {
            Value::Text(name) => name.as_str(),
            other => {
                return Err(TreeError::NameNotText {
                    found: other.kind(),
                })
            }
        };
        let children = match &raw.children {
            Value::Seq(children) => children.as_slice(),
            other => {
                return Err(TreeError::ChildrenNotSequence {
                    found: other.kind(),
                })
            }
        };
        Ok(Self {
            name,
            children,
            index: 0,
            cleaned: Vec::new(),
        })
    }

    /// The cleaned node for this frame, or `None` when the name is empty
    /// and the node is pruned together with everything collected under it.
    fn finalize(self) -> Option<Node> {
        if self.name.is_empty() {
            None
        } else {
            Some(Node::new(self.name, self.cleaned))
        }
    }
}

enum Step {
    /// Descended into a child, or handed a finalized node to its parent.
    Continue,
    /// The root frame finalized, traversal is finished.
    Done(Option<Node>),
}

/// Explicit traversal stack replacing call-stack recursion.
struct FrameStack<'a> {
    frames: Vec<Frame<'a>>,
}

impl<'a> FrameStack<'a> {
    fn new(root: &'a Value) -> TreeResult<Self> {
        Ok(Self {
            frames: vec![Frame::open(root)?],
        })
    }

    /// Advances traversal by one move.
    ///
    /// Either validates and descends into the next unvisited child of the
    /// top frame, or finalizes the top frame and attaches its result to
    /// the parent. Finalizing the root frame ends traversal.
    fn step(&mut self) -> TreeResult<Step> {
        let Some(frame) = self.frames.last_mut() else {
            return Ok(Step::Done(None));
        };

        if let Some(child) = frame.children.get(frame.index) {
            frame.index += 1;
            let next = Frame::open(child)?;
            self.frames.push(next);
            return Ok(Step::Continue);
        }

        let built = self.frames.pop().and_then(Frame::finalize);
        match self.frames.last_mut() {
            Some(parent) => {
                if let Some(node) = built {
                    parent.cleaned.push(node);
                }
                Ok(Step::Continue)
            }
            None => Ok(Step::Done(built)),
        }
    }
}

/// Prunes a single root value, returning the surviving node if any.
#[instrument(level = "trace", skip(root))]
pub(crate) fn clean_root(root: &Value) -> TreeResult<Option<Node>> {
    let mut stack = FrameStack::new(root)?;
    loop {
        if let Step::Done(result) = stack.step()? {
            return Ok(result);
        }
    }
}
