//! Ancestor-chain queries, relationship predicates and lineage-set
//! validators.
//!
//! Queries that can legitimately fail (cross-tree lookups, non-ancestor
//! walks, stale indices) return [`HierarchyResult`]; the boolean predicates
//! swallow those failures and report `false`, since "not related" is an
//! expected outcome for them.

use generational_arena::Index;
use itertools::Itertools;
use tracing::instrument;

use crate::arena::Hierarchy;
use crate::errors::{HierarchyError, HierarchyResult};

impl<T> Hierarchy<T> {
    /// Ordered chain from the tree's root down to `n`'s immediate parent,
    /// exclusive of `n`. Empty if `n` is a root.
    #[instrument(level = "trace", skip(self))]
    pub fn parent_branch(&self, n: Index) -> HierarchyResult<Vec<Index>> {
        let mut branch = Vec::new();
        let mut cur = self.node(n)?.parent();
        while let Some(p) = cur {
            branch.push(p);
            cur = self.node(p)?.parent();
        }
        branch.reverse();
        Ok(branch)
    }

    /// Ancestors of `n` up to and including `target`, ordered root-ward
    /// (`target` first, `n`'s immediate parent last).
    ///
    /// Empty when `target == n` or when `n` is the root of `target`'s tree.
    /// Fails with [`HierarchyError::CrossTree`] across distinct trees and
    /// with [`HierarchyError::NotAncestor`] when the walk reaches the root
    /// without meeting `target`.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors_until(&self, n: Index, target: Index) -> HierarchyResult<Vec<Index>> {
        let n_root = self.root_of(n)?;
        let target_root = self.root_of(target)?;
        if target_root == n {
            return Ok(Vec::new());
        }
        if target_root != n_root {
            return Err(HierarchyError::CrossTree(n, target));
        }
        if n == target {
            return Ok(Vec::new());
        }

        let mut branch = Vec::new();
        let mut i = match self.node(n)?.parent() {
            Some(p) => p,
            None => return Ok(Vec::new()),
        };
        loop {
            branch.push(i);
            if i == target {
                break;
            }
            match self.node(i)?.parent() {
                Some(p) => i = p,
                None => return Err(HierarchyError::NotAncestor { node: n, target }),
            }
        }
        branch.reverse();
        Ok(branch)
    }

    /// At most `d` nearest ancestors of `n`, returned root-ward-ordered and
    /// truncated at the tree root. Fails with
    /// [`HierarchyError::InvalidArgument`] for negative `d`.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors_depth(&self, n: Index, d: isize) -> HierarchyResult<Vec<Index>> {
        if d < 0 {
            return Err(HierarchyError::InvalidArgument(format!(
                "depth must be non-negative, got {d}"
            )));
        }
        let d = d as usize;
        let mut out = Vec::new();
        let mut cur = self.node(n)?.parent();
        while let Some(p) = cur {
            if out.len() == d {
                break;
            }
            out.push(p);
            cur = self.node(p)?.parent();
        }
        out.reverse();
        Ok(out)
    }

    /// Shortest parenting chain that makes `n`'s mark interpretable: `n`
    /// plus every strict ancestor with an insufficient mark, plus the first
    /// sufficient ancestor (or the absolute root if none is sufficient),
    /// ordered root-ward with `n` last. Just `[n]` when `n` is sufficient.
    #[instrument(level = "trace", skip(self))]
    pub fn minimal_sufficient_mark(&self, n: Index) -> HierarchyResult<Vec<Index>> {
        let node = self.node(n)?;
        let mut chain = vec![n];
        if node.sufficient() {
            return Ok(chain);
        }
        let mut cur = node.parent();
        while let Some(p) = cur {
            chain.push(p);
            let parent = self.node(p)?;
            if parent.sufficient() {
                break;
            }
            cur = parent.parent();
        }
        chain.reverse();
        Ok(chain)
    }

    /// Inclusive root-to-leaf path from `n` down to `child`; empty when `n`
    /// does not contain `child`.
    #[instrument(level = "trace", skip(self))]
    pub fn path_to_child(&self, n: Index, child: Index) -> HierarchyResult<Vec<Index>> {
        if !self.contains(n, child) {
            return Ok(Vec::new());
        }
        let mut path = self.ancestors_until(child, n)?;
        path.push(child);
        Ok(path)
    }

    /// True iff `b` is `a` itself or a strict descendant of `a`.
    #[instrument(level = "trace", skip(self))]
    pub fn contains(&self, a: Index, b: Index) -> bool {
        if !self.same_root(a, b) {
            return false;
        }
        if a == b {
            return true;
        }
        match self.ancestors_until(b, a) {
            Ok(branch) => !branch.is_empty(),
            Err(_) => false,
        }
    }

    /// True iff `a` is a strict descendant of `b`.
    #[instrument(level = "trace", skip(self))]
    pub fn belongs(&self, a: Index, b: Index) -> bool {
        if !self.same_root(a, b) {
            return false;
        }
        match self.ancestors_until(a, b) {
            Ok(branch) => !branch.is_empty(),
            Err(_) => false,
        }
    }

    /// True iff both nodes share the same absolute root.
    pub fn same_root(&self, a: Index, b: Index) -> bool {
        match (self.root_of(a), self.root_of(b)) {
            (Ok(ra), Ok(rb)) => ra == rb,
            _ => false,
        }
    }

    /// True iff `set`, deduped and sorted by generation, forms an unbroken
    /// chain of direct parent-child links inside `n`'s subtree. Input order
    /// is irrelevant.
    #[instrument(level = "trace", skip(self, set))]
    pub fn is_branch(&self, n: Index, set: &[Index]) -> bool {
        let sorted = match self.contained_by_generation(n, set) {
            Some(s) => s,
            None => return false,
        };
        sorted.windows(2).all(|pair| {
            self.get(pair[0])
                .map(|cur| cur.children().contains(&pair[1]))
                .unwrap_or(false)
        })
    }

    /// Like [`Hierarchy::is_branch`] but only requires a transitive ancestor
    /// relation between consecutive elements, so gaps are allowed. Strictly
    /// weaker than `is_branch`.
    #[instrument(level = "trace", skip(self, set))]
    pub fn is_on_branch(&self, n: Index, set: &[Index]) -> bool {
        let sorted = match self.contained_by_generation(n, set) {
            Some(s) => s,
            None => return false,
        };
        sorted
            .windows(2)
            .all(|pair| self.contains(pair[0], pair[1]))
    }

    /// Dedupes `set`, checks containment in `n`, sorts ascending by
    /// generation. None when any element is outside `n`'s subtree.
    fn contained_by_generation(&self, n: Index, set: &[Index]) -> Option<Vec<Index>> {
        let mut hs: Vec<Index> = set.iter().copied().unique().collect();
        if !hs.iter().all(|&h| self.contains(n, h)) {
            return None;
        }
        hs.sort_by_key(|&h| self.get(h).map(|node| node.generation()).unwrap_or(0));
        Some(hs)
    }
}
