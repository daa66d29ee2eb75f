//! Arena-based rooted tree hierarchies.
//!
//! A [`Hierarchy`] is a forest of labeled nodes stored in a single
//! generational arena; all inter-node references are [`Index`] values, so
//! the owned-children-with-back-pointers shape needs no reference cycles.
//! Every inserted node starts out as the root of its own singleton tree and
//! joins a larger tree through [`Hierarchy::attach`].
//!
//! On top of the storage the crate offers ancestor-chain queries
//! (`parent_branch`, `ancestors_until`, `ancestors_depth`,
//! `minimal_sufficient_mark`), relationship predicates (`contains`,
//! `belongs`, `same_root`), lineage-set validation (`is_branch`,
//! `is_on_branch`, `path_to_child`) and a depth-first traversal engine
//! configurable over all six root/left/right orders.
//!
//! ```
//! use hierarena::Hierarchy;
//!
//! let mut h = Hierarchy::new();
//! let root = h.insert("fs");
//! let home = h.insert("home");
//! h.attach(root, home)?;
//!
//! assert!(h.contains(root, home));
//! assert_eq!(h.parent_branch(home)?, vec![root]);
//! # Ok::<(), hierarena::HierarchyError>(())
//! ```

pub mod arena;
pub mod display;
pub mod errors;
pub mod lineage;
pub mod traverse;
pub mod util;

pub use arena::{Hierarchy, Node, PostOrderIterator, TreeIterator};
pub use errors::{HierarchyError, HierarchyResult};
pub use traverse::{
    TraverseOrder, TraversePosition, LEFT_RIGHT_ROOT, LEFT_ROOT_RIGHT, RIGHT_LEFT_ROOT,
    RIGHT_ROOT_LEFT, ROOT_LEFT_RIGHT, ROOT_RIGHT_LEFT,
};

pub use generational_arena::Index;
