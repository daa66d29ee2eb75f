//! Configurable-order depth-first traversal.
//!
//! An order is a permutation of the three symbolic positions root, left and
//! right, applied to the generalized n-ary children list. Internally the six
//! permutations decompose into two orthogonal choices: where the self-visit
//! happens relative to the child recursion, and whether children are walked
//! forward or in reverse.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{Hierarchy, Node};
use crate::errors::{HierarchyError, HierarchyResult};

/// Symbolic slot in a traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversePosition {
    Root,
    Left,
    Right,
}

/// Permutation of the three traversal positions.
pub type TraverseOrder = [TraversePosition; 3];

use TraversePosition::{Left, Right, Root};

pub const ROOT_LEFT_RIGHT: TraverseOrder = [Root, Left, Right];
pub const ROOT_RIGHT_LEFT: TraverseOrder = [Root, Right, Left];
pub const LEFT_ROOT_RIGHT: TraverseOrder = [Left, Root, Right];
pub const RIGHT_ROOT_LEFT: TraverseOrder = [Right, Root, Left];
pub const LEFT_RIGHT_ROOT: TraverseOrder = [Left, Right, Root];
pub const RIGHT_LEFT_ROOT: TraverseOrder = [Right, Left, Root];

/// Where the self-visit happens relative to the child recursion.
#[derive(Debug, Clone, Copy)]
enum VisitSlot {
    /// Visit first, then all children
    Before,
    /// Recurse into the leading child, visit, then the remaining children
    Between,
    /// Recurse into all children, then visit
    After,
}

/// Direction the children list is walked in.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

fn decode_order(order: TraverseOrder) -> HierarchyResult<(VisitSlot, Direction)> {
    for position in [Root, Left, Right] {
        if order.iter().filter(|&&p| p == position).count() != 1 {
            return Err(HierarchyError::InvalidOrder(order));
        }
    }
    let slot = match order.iter().position(|&p| p == Root) {
        Some(0) => VisitSlot::Before,
        Some(1) => VisitSlot::Between,
        _ => VisitSlot::After,
    };
    // whichever of left/right comes first decides the child direction
    let direction = match order.iter().copied().find(|&p| p != Root) {
        Some(Left) => Direction::Forward,
        _ => Direction::Reverse,
    };
    Ok((slot, direction))
}

impl<T> Hierarchy<T> {
    /// Depth-first traversal of the subtree rooted at `root` in the default
    /// root-left-right order.
    pub fn traverse<F>(&self, root: Index, visit: F) -> HierarchyResult<()>
    where
        F: FnMut(Index, &Node<T>),
    {
        self.traverse_with(root, ROOT_LEFT_RIGHT, visit, |_, _| false)
    }

    /// Depth-first traversal in the given order.
    ///
    /// When `stop` reports true for a node the callback is skipped for that
    /// node only; recursion into its children proceeds regardless. The
    /// predicate is re-evaluated per node, so state accumulated by the
    /// callback can flip it mid-traversal.
    #[instrument(level = "trace", skip(self, visit, stop))]
    pub fn traverse_with<F, S>(
        &self,
        root: Index,
        order: TraverseOrder,
        mut visit: F,
        mut stop: S,
    ) -> HierarchyResult<()>
    where
        F: FnMut(Index, &Node<T>),
        S: FnMut(Index, &Node<T>) -> bool,
    {
        let (slot, direction) = decode_order(order)?;
        self.walk(root, slot, direction, &mut visit, &mut stop)
    }

    fn walk<F, S>(
        &self,
        idx: Index,
        slot: VisitSlot,
        direction: Direction,
        visit: &mut F,
        stop: &mut S,
    ) -> HierarchyResult<()>
    where
        F: FnMut(Index, &Node<T>),
        S: FnMut(Index, &Node<T>) -> bool,
    {
        let node = self.node(idx)?;
        match slot {
            VisitSlot::Before => {
                if !stop(idx, node) {
                    visit(idx, node);
                }
                for child in ordered(node.children(), direction) {
                    self.walk(child, slot, direction, visit, stop)?;
                }
            }
            VisitSlot::Between => {
                let kids: Vec<Index> = ordered(node.children(), direction).collect();
                if let Some((&head, rest)) = kids.split_first() {
                    self.walk(head, slot, direction, visit, stop)?;
                    if !stop(idx, node) {
                        visit(idx, node);
                    }
                    for &child in rest {
                        self.walk(child, slot, direction, visit, stop)?;
                    }
                } else if !stop(idx, node) {
                    visit(idx, node);
                }
            }
            VisitSlot::After => {
                for child in ordered(node.children(), direction) {
                    self.walk(child, slot, direction, visit, stop)?;
                }
                if !stop(idx, node) {
                    visit(idx, node);
                }
            }
        }
        Ok(())
    }
}

fn ordered(children: &[Index], direction: Direction) -> Box<dyn Iterator<Item = Index> + '_> {
    match direction {
        Direction::Forward => Box::new(children.iter().copied()),
        Direction::Reverse => Box::new(children.iter().rev().copied()),
    }
}
