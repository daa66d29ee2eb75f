use generational_arena::Index;
use thiserror::Error;

use crate::traverse::TraverseOrder;

#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("cannot attach {child:?} to {parent:?}: node is already attached or contained in the subtree")]
    Cycle { parent: Index, child: Index },

    #[error("nodes {0:?} and {1:?} belong to different trees")]
    CrossTree(Index, Index),

    #[error("{target:?} is not an ancestor of {node:?}")]
    NotAncestor { node: Index, target: Index },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("traversal order must contain root, left and right exactly once, got {0:?}")]
    InvalidOrder(TraverseOrder),

    #[error("node {0:?} not found in hierarchy")]
    NodeNotFound(Index),
}

pub type HierarchyResult<T> = Result<T, HierarchyError>;
