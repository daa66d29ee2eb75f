use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{HierarchyError, HierarchyResult};

/// Node in an arena-based hierarchy.
///
/// Fields are private; mutation beyond the payload goes through
/// [`Hierarchy::attach`], which keeps the parent/root/generation
/// bookkeeping consistent.
#[derive(Debug)]
pub struct Node<T> {
    /// Caller-supplied payload, opaque to the structure
    mark: T,
    /// Whether the mark is self-contained or needs ancestor context
    sufficient: bool,
    /// Index of the parent node, None for roots
    parent: Option<Index>,
    /// Index of the absolute root of this node's tree, None for roots
    root: Option<Index>,
    /// Depth below the root, 0 for roots
    generation: usize,
    /// Indices of child nodes, in attachment order
    children: Vec<Index>,
}

impl<T> Node<T> {
    fn new(mark: T, sufficient: bool) -> Self {
        Self {
            mark,
            sufficient,
            parent: None,
            root: None,
            generation: 0,
            children: Vec::new(),
        }
    }

    pub fn mark(&self) -> &T {
        &self.mark
    }

    pub fn mark_mut(&mut self) -> &mut T {
        &mut self.mark
    }

    pub fn sufficient(&self) -> bool {
        self.sufficient
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.generation == 0
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based forest of rooted trees.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Every inserted node starts out as the root of its own singleton tree and
/// joins a larger tree only through [`Hierarchy::attach`]. Nodes are never
/// detached or removed.
#[derive(Debug)]
pub struct Hierarchy<T> {
    /// Arena storage for all nodes, across all trees
    arena: Arena<Node<T>>,
}

impl<T> Default for Hierarchy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Hierarchy<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
        }
    }

    /// Inserts a standalone root node with a sufficient mark.
    #[instrument(level = "trace", skip(self, mark))]
    pub fn insert(&mut self, mark: T) -> Index {
        self.arena.insert(Node::new(mark, true))
    }

    /// Inserts a standalone root node whose mark needs ancestor context.
    #[instrument(level = "trace", skip(self, mark))]
    pub fn insert_insufficient(&mut self, mark: T) -> Index {
        self.arena.insert(Node::new(mark, false))
    }

    pub fn get(&self, idx: Index) -> Option<&Node<T>> {
        self.arena.get(idx)
    }

    pub fn get_mut(&mut self, idx: Index) -> Option<&mut Node<T>> {
        self.arena.get_mut(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub(crate) fn node(&self, idx: Index) -> HierarchyResult<&Node<T>> {
        self.arena.get(idx).ok_or(HierarchyError::NodeNotFound(idx))
    }

    fn node_mut(&mut self, idx: Index) -> HierarchyResult<&mut Node<T>> {
        self.arena
            .get_mut(idx)
            .ok_or(HierarchyError::NodeNotFound(idx))
    }

    /// Resolves the absolute root of `idx`'s tree.
    pub fn root_of(&self, idx: Index) -> HierarchyResult<Index> {
        Ok(self.node(idx)?.root.unwrap_or(idx))
    }

    /// Attaches `child` as the last child of `parent`.
    ///
    /// Fails with [`HierarchyError::Cycle`] if `child` is `parent` itself,
    /// an existing descendant of `parent`, or already attached anywhere
    /// else. On success the child's whole subtree is re-rooted: generation
    /// and root are updated on the child and cascaded through its
    /// descendants.
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: Index, child: Index) -> HierarchyResult<()> {
        self.node(parent)?;
        if self.contains(parent, child) {
            return Err(HierarchyError::Cycle { parent, child });
        }
        if self.node(child)?.parent.is_some() {
            // no detach operation exists, so a second attachment is
            // always a re-attachment
            return Err(HierarchyError::Cycle { parent, child });
        }

        let root = self.root_of(parent)?;
        let parent_generation = self.node(parent)?.generation;

        self.node_mut(parent)?.children.push(child);
        {
            let c = self.node_mut(child)?;
            c.parent = Some(parent);
            c.root = Some(root);
            c.generation = parent_generation + 1;
        }

        // cascade through any pre-built subtree below `child`
        let mut stack = vec![child];
        while let Some(idx) = stack.pop() {
            let (generation, kids) = {
                let n = self.node(idx)?;
                (n.generation, n.children.clone())
            };
            for kid in kids {
                let k = self.node_mut(kid)?;
                k.generation = generation + 1;
                k.root = Some(root);
                stack.push(kid);
            }
        }

        Ok(())
    }

    /// Height of the subtree rooted at `root`; 1 for a lone node, 0 for a
    /// stale index.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, root: Index) -> usize {
        if let Some(node) = self.get(root) {
            1 + node
                .children
                .iter()
                .map(|&child| self.depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects all leaf nodes of the subtree rooted at `root`, in child
    /// order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self, root: Index) -> Vec<Index> {
        let mut out = Vec::new();
        self.collect_leaves(root, &mut out);
        out
    }

    fn collect_leaves(&self, idx: Index, out: &mut Vec<Index>) {
        if let Some(node) = self.get(idx) {
            if node.children.is_empty() {
                out.push(idx);
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, out);
                }
            }
        }
    }

    /// Depth-first preorder iterator over the subtree rooted at `root`.
    pub fn iter(&self, root: Index) -> TreeIterator<'_, T> {
        TreeIterator::new(self, root)
    }

    /// Depth-first postorder iterator over the subtree rooted at `root`.
    pub fn iter_postorder(&self, root: Index) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self, root)
    }
}

pub struct TreeIterator<'a, T> {
    hierarchy: &'a Hierarchy<T>,
    stack: Vec<Index>,
}

impl<'a, T> TreeIterator<'a, T> {
    fn new(hierarchy: &'a Hierarchy<T>, root: Index) -> Self {
        Self {
            hierarchy,
            stack: vec![root],
        }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = (Index, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.hierarchy.get(current) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a, T> {
    hierarchy: &'a Hierarchy<T>,
    stack: Vec<(Index, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(hierarchy: &'a Hierarchy<T>, root: Index) -> Self {
        Self {
            hierarchy,
            stack: vec![(root, false)],
        }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = (Index, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if let Some(node) = self.hierarchy.get(current) {
                if !visited {
                    self.stack.push((current, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current, node));
                }
            }
        }
        None
    }
}
