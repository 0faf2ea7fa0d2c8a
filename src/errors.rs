//! Structural errors raised while validating a forest.
//!
//! All variants are input-contract violations: the caller handed over a
//! value that is not a well-formed forest of nodes. Validation is
//! fail-fast, the whole call aborts with no partial output.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("forest must be a sequence of nodes, got {found}")]
    ForestNotIterable { found: &'static str },

    #[error("forest must contain only nodes, got {found}")]
    ElementNotNode { found: &'static str },

    #[error("node name must be text, got {found}")]
    NameNotText { found: &'static str },

    #[error("node children must be a sequence, got {found}")]
    ChildrenNotSequence { found: &'static str },
}

pub type TreeResult<T> = Result<T, TreeError>;
