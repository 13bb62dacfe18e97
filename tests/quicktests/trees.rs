use ordtree::{AvlTree, Balance, Bst, Error, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::{init_logger, Op};

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of adds
/// and deletes we have the same values in both.
fn do_ops<B: Balance>(ops: &[Op<i8>], tree: &mut Tree<i8, B>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        let agrees = match op {
            Op::Insert(k) => tree.add(*k).is_ok() == set.insert(*k),
            Op::Remove(k) => tree.delete(k).ok() == set.take(k),
            Op::Iter => tree.in_order().eq(set.iter()),
        };
        if !agrees || tree.count() != set.len() || tree.is_empty() != set.is_empty() {
            return false;
        }
    }

    true
}

fn strictly_ascending<B>(tree: &Tree<i8, B>) -> bool {
    let values: Vec<_> = tree.in_order().collect();
    values.windows(2).all(|pair| pair[0] < pair[1])
}

fn fuzz<B: Balance>(ops: Vec<Op<i8>>) -> bool {
    init_logger();
    let mut tree = Tree::<i8, B>::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && strictly_ascending(&tree)
        && set.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn fuzz_multiple_operations_bst(ops: Vec<Op<i8>>) -> bool {
    fuzz::<ordtree::Unbalanced>(ops)
}

#[quickcheck]
fn fuzz_multiple_operations_avl(ops: Vec<Op<i8>>) -> bool {
    fuzz::<ordtree::Avl>(ops)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut bst = Bst::new();
    let mut avl = AvlTree::new();
    for x in &xs {
        let _ = bst.add(*x);
        let _ = avl.add(*x);
    }

    xs.iter()
        .all(|x| bst.find(x).map(|n| *n.value()) == Ok(*x) && avl.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = AvlTree::new();
    for x in &xs {
        let _ = tree.add(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.find(x).err() == Some(Error::NotFound))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Bst::new();
    for x in &xs {
        let _ = tree.add(*x);
    }
    for delete in &deletes {
        let _ = tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_err())
        && still_present.iter().all(|x| tree.find(x).is_ok())
}

#[quickcheck]
fn failed_operations_keep_count(xs: Vec<i8>) -> bool {
    let mut tree = AvlTree::new();
    let mut added = 0;
    for x in &xs {
        let before = tree.count();
        let expected = match tree.add(*x) {
            Ok(_) => {
                added += 1;
                before + 1
            }
            Err(Error::AlreadyExists(v)) if v == *x => before,
            Err(_) => return false,
        };
        if tree.count() != expected {
            return false;
        }
    }

    let unique: HashSet<_> = xs.iter().collect();
    let mut deleted = 0;
    for x in &xs {
        if tree.delete(x).is_ok() {
            deleted += 1;
        }
    }

    added == unique.len() && deleted == added && tree.is_empty() && tree.height() == 0
}

#[quickcheck]
fn traversals_visit_every_node(xs: Vec<i8>) -> bool {
    let mut tree = AvlTree::new();
    for x in &xs {
        let _ = tree.add(*x);
    }
    let mut sorted: Vec<_> = tree.in_order().copied().collect();

    let mut pre: Vec<_> = tree.pre_order().copied().collect();
    let mut post: Vec<_> = tree.post_order().copied().collect();
    let root = tree.root().map(|n| *n.value());

    let ends_right = pre.first().copied() == root && post.last().copied() == root;

    pre.sort_unstable();
    post.sort_unstable();
    sorted.dedup();
    ends_right && pre == sorted && post == sorted && sorted.len() == tree.count()
}

#[quickcheck]
fn bst_and_avl_hold_the_same_values(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut bst = Bst::new();
    let mut avl = AvlTree::new();
    for x in &xs {
        if bst.add(*x).is_ok() != avl.add(*x).is_ok() {
            return false;
        }
    }
    for x in &deletes {
        if bst.delete(x) != avl.delete(x) {
            return false;
        }
    }

    bst.in_order().eq(avl.in_order()) && bst.count() == avl.count()
}
