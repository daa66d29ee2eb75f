use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;

use crate::arena::Hierarchy;

impl<T: Display> Hierarchy<T> {
    /// Renders the subtree rooted at `root` as a [`termtree::Tree`] of mark
    /// strings, ready for terminal display.
    pub fn to_tree_string(&self, root: Index) -> Tree<String> {
        match self.get(root) {
            Some(node) => {
                let leaves: Vec<_> = node
                    .children()
                    .iter()
                    .map(|&child| self.to_tree_string(child))
                    .collect();
                Tree::new(node.mark().to_string()).with_leaves(leaves)
            }
            None => Tree::new("<stale node>".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_small_tree_when_rendered_then_all_marks_appear() {
        let mut h = Hierarchy::new();
        let root = h.insert("root");
        let a = h.insert("a");
        let b = h.insert("b");
        h.attach(root, a).unwrap();
        h.attach(root, b).unwrap();

        let rendered = h.to_tree_string(root).to_string();
        assert!(rendered.contains("root"));
        assert!(rendered.contains('a'));
        assert!(rendered.contains('b'));
    }
}
