use avlset::{AvlSet, BstSet, Tree};

use quickcheck_macros::quickcheck;
use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to an `AvlSet` and a `HashSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], set: &mut AvlSet<T>, model: &mut HashSet<T>)
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(set.insert(x.clone()), model.insert(x.clone()));
            }
            Op::Remove(x) => {
                assert_eq!(set.remove(x), model.remove(x));
            }
        }
    }
}

/// Checks the AVL balance bound on every node, using only the public,
/// read-only view of the tree.
fn balanced<T>(tree: &Tree<T>) -> bool {
    match tree.node() {
        None => true,
        Some(n) => {
            n.balance_factor().abs() <= 1
                && n.height() == tree.measured_depth()
                && balanced(n.left())
                && balanced(n.right())
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = AvlSet::new();
    let mut model = HashSet::new();

    do_ops(&ops, &mut set, &mut model);
    set.len() == model.len()
        && model.iter().all(|x| set.contains(x))
        && balanced(set.root())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let set: AvlSet<_> = xs.iter().copied().collect();

    xs.iter().all(|x| set.contains(x) && set.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let set: AvlSet<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !set.contains(x) && !set.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut set: AvlSet<_> = xs.iter().copied().collect();
    for delete in &deletes {
        set.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !set.contains(x))
        && still_present.iter().all(|x| set.contains(x))
        && balanced(set.root())
}

#[quickcheck]
fn ascending_is_strictly_increasing(xs: Vec<i32>) -> bool {
    let set: AvlSet<_> = xs.into_iter().collect();
    let ascending: Vec<_> = set.iter().collect();

    ascending.windows(2).all(|w| w[0] < w[1]) && ascending.len() == set.len()
}

#[quickcheck]
fn unbalanced_agrees_with_balanced(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut avl: AvlSet<_> = xs.iter().copied().collect();
    let mut bst: BstSet<_> = xs.iter().copied().collect();
    for delete in &deletes {
        if avl.remove(delete) != bst.remove(delete) {
            return false;
        }
    }

    avl.len() == bst.len() && avl.iter().eq(bst.iter())
}

#[test]
fn sorted_input_stays_shallow() {
    let set: AvlSet<_> = (0..1024).collect();

    // 1024 nodes fit in 11 levels; AVL allows up to ~1.44 lg n.
    assert!(set.depth() <= 14);
    assert!(balanced(set.root()));
}
