//! Tests for node construction, attachment invariants and relationship
//! predicates.

use hierarena::util::testing::init_test_setup;
use hierarena::{Hierarchy, HierarchyError};

// ============================================================
// Construction & Attachment
// ============================================================

#[test]
fn given_fresh_node_when_inserted_then_generation_zero_and_own_root() {
    init_test_setup();
    let mut h = Hierarchy::new();
    let n = h.insert("n");

    let node = h.get(n).unwrap();
    assert_eq!(node.generation(), 0);
    assert_eq!(node.parent(), None);
    assert!(node.is_root());
    assert!(node.is_leaf());
    assert_eq!(h.root_of(n).unwrap(), n);
    assert_eq!(h.len(), 1);
}

#[test]
fn given_chain_when_attaching_then_generations_increment() {
    let mut h = Hierarchy::new();
    let root = h.insert(0);
    let mid = h.insert(1);
    let leaf = h.insert(2);
    h.attach(root, mid).unwrap();
    h.attach(mid, leaf).unwrap();

    assert_eq!(h.get(root).unwrap().generation(), 0);
    assert_eq!(h.get(mid).unwrap().generation(), 1);
    assert_eq!(h.get(leaf).unwrap().generation(), 2);
    assert_eq!(h.root_of(leaf).unwrap(), root);
    assert_eq!(h.root_of(mid).unwrap(), root);
    assert!(!h.get(mid).unwrap().is_root());
    assert!(!h.get(root).unwrap().is_leaf());
}

#[test]
fn given_attached_child_when_listing_children_then_insertion_order_kept() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let a = h.insert("a");
    let b = h.insert("b");
    let c = h.insert("c");
    h.attach(root, a).unwrap();
    h.attach(root, b).unwrap();
    h.attach(root, c).unwrap();

    assert_eq!(h.get(root).unwrap().children(), &[a, b, c]);
}

#[test]
fn given_node_when_attaching_to_itself_then_cycle_error() {
    let mut h = Hierarchy::new();
    let n = h.insert("n");
    assert!(matches!(h.attach(n, n), Err(HierarchyError::Cycle { .. })));
}

#[test]
fn given_existing_descendant_when_reattaching_then_cycle_error() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let child = h.insert("child");
    h.attach(root, child).unwrap();

    assert!(matches!(
        h.attach(root, child),
        Err(HierarchyError::Cycle { .. })
    ));
    // one level deeper: grandchild is still a descendant of root
    let grandchild = h.insert("grandchild");
    h.attach(child, grandchild).unwrap();
    assert!(matches!(
        h.attach(root, grandchild),
        Err(HierarchyError::Cycle { .. })
    ));
}

#[test]
fn given_node_attached_in_another_tree_when_attaching_then_cycle_error() {
    let mut h = Hierarchy::new();
    let root_a = h.insert("a");
    let root_b = h.insert("b");
    let child = h.insert("child");
    h.attach(root_a, child).unwrap();

    assert!(matches!(
        h.attach(root_b, child),
        Err(HierarchyError::Cycle { .. })
    ));
}

#[test]
fn given_prebuilt_subtree_when_attached_then_generation_and_root_cascade() {
    let mut h = Hierarchy::new();
    let subtree = h.insert("subtree");
    let leaf_a = h.insert("leaf_a");
    let leaf_b = h.insert("leaf_b");
    h.attach(subtree, leaf_a).unwrap();
    h.attach(subtree, leaf_b).unwrap();

    let root = h.insert("root");
    h.attach(root, subtree).unwrap();

    assert_eq!(h.get(subtree).unwrap().generation(), 1);
    assert_eq!(h.get(leaf_a).unwrap().generation(), 2);
    assert_eq!(h.get(leaf_b).unwrap().generation(), 2);
    assert_eq!(h.root_of(leaf_a).unwrap(), root);
    assert_eq!(h.root_of(leaf_b).unwrap(), root);
}

// ============================================================
// Relationship Predicates
// ============================================================

#[test]
fn given_node_when_checking_contains_self_then_true() {
    let mut h = Hierarchy::new();
    let n = h.insert("n");
    assert!(h.contains(n, n));
}

#[test]
fn given_direct_and_indirect_children_when_checking_contains_then_true() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let mid = h.insert("mid");
    let leaf = h.insert("leaf");
    h.attach(root, mid).unwrap();
    h.attach(mid, leaf).unwrap();

    assert!(h.contains(root, mid));
    assert!(h.contains(root, leaf));
    assert!(h.contains(mid, leaf));
}

#[test]
fn given_unrelated_trees_when_checking_contains_then_false() {
    let mut h = Hierarchy::new();
    let a = h.insert("a");
    let b = h.insert("b");
    assert!(!h.contains(a, b));
    assert!(!h.contains(b, a));
}

#[test]
fn given_sibling_when_checking_contains_then_false() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let a = h.insert("a");
    let b = h.insert("b");
    h.attach(root, a).unwrap();
    h.attach(root, b).unwrap();
    assert!(!h.contains(a, b));
}

#[test]
fn given_descendant_when_checking_belongs_then_true() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let mid = h.insert("mid");
    let leaf = h.insert("leaf");
    h.attach(root, mid).unwrap();
    h.attach(mid, leaf).unwrap();

    assert!(h.belongs(mid, root));
    assert!(h.belongs(leaf, root));
    assert!(!h.belongs(root, leaf));
    // belongs is strict: a node does not belong to itself
    assert!(!h.belongs(root, root));
}

#[test]
fn given_same_tree_pairs_when_comparing_contains_and_belongs_then_inverse() {
    let mut h = Hierarchy::new();
    let root = h.insert(0);
    let mid = h.insert(1);
    let leaf = h.insert(2);
    h.attach(root, mid).unwrap();
    h.attach(mid, leaf).unwrap();

    for a in [root, mid, leaf] {
        for b in [root, mid, leaf] {
            if a != b {
                assert_eq!(h.contains(a, b), h.belongs(b, a));
            }
        }
    }
}

#[test]
fn given_sibling_when_checking_belongs_then_false_not_error() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let a = h.insert("a");
    let b = h.insert("b");
    h.attach(root, a).unwrap();
    h.attach(root, b).unwrap();
    assert!(!h.belongs(a, b));
    assert!(!h.belongs(b, a));
}

#[test]
fn given_two_trees_when_checking_same_root_then_only_within_tree() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let child = h.insert("child");
    let stranger = h.insert("stranger");
    h.attach(root, child).unwrap();

    assert!(h.same_root(root, child));
    assert!(h.same_root(child, child));
    assert!(!h.same_root(root, stranger));
}

// ============================================================
// Depth, Leaves & Iterators
// ============================================================

#[test]
fn given_chain_when_measuring_depth_then_counts_levels() {
    let mut h = Hierarchy::new();
    let root = h.insert(0);
    let mid = h.insert(1);
    let leaf = h.insert(2);
    h.attach(root, mid).unwrap();
    h.attach(mid, leaf).unwrap();

    assert_eq!(h.depth(root), 3);
    assert_eq!(h.depth(mid), 2);
    assert_eq!(h.depth(leaf), 1);
}

#[test]
fn given_branching_tree_when_collecting_leaves_then_child_order() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let a = h.insert("a");
    let b = h.insert("b");
    let a1 = h.insert("a1");
    h.attach(root, a).unwrap();
    h.attach(root, b).unwrap();
    h.attach(a, a1).unwrap();

    assert_eq!(h.leaves(root), vec![a1, b]);
    assert_eq!(h.leaves(a1), vec![a1]);
}

#[test]
fn given_tree_when_iterating_preorder_then_parent_before_children() {
    let mut h = Hierarchy::new();
    let root = h.insert(1);
    let left = h.insert(2);
    let right = h.insert(3);
    h.attach(root, left).unwrap();
    h.attach(root, right).unwrap();

    let marks: Vec<i32> = h.iter(root).map(|(_, n)| *n.mark()).collect();
    assert_eq!(marks, vec![1, 2, 3]);
}

#[test]
fn given_tree_when_iterating_postorder_then_children_before_parent() {
    let mut h = Hierarchy::new();
    let root = h.insert(1);
    let left = h.insert(2);
    let right = h.insert(3);
    h.attach(root, left).unwrap();
    h.attach(root, right).unwrap();

    let marks: Vec<i32> = h.iter_postorder(root).map(|(_, n)| *n.mark()).collect();
    assert_eq!(marks, vec![2, 3, 1]);
}

#[test]
fn given_displayable_marks_when_rendering_then_termtree_output_nests() {
    let mut h = Hierarchy::new();
    let root = h.insert("root");
    let child = h.insert("child");
    h.attach(root, child).unwrap();

    let rendered = h.to_tree_string(root).to_string();
    assert!(rendered.starts_with("root"));
    assert!(rendered.contains("child"));
}
