use ordered_tree::{Error, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

fn build(xs: &[i8]) -> OrderedTree<i8> {
    xs.iter().copied().collect()
}

/// Builds a tree from `xs` then removes each of `deletes` once, mirroring the removals in a
/// plain `Vec` that is returned sorted.
fn build_and_delete(xs: &[i8], deletes: &[i8]) -> (OrderedTree<i8>, Vec<i8>) {
    let mut tree = build(xs);
    let mut model = xs.to_vec();
    for delete in deletes {
        let _ = tree.remove(delete);
        if let Some(pos) = model.iter().position(|x| x == delete) {
            model.swap_remove(pos);
        }
    }
    model.sort();
    (tree, model)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.find(x) == Some(x) && tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present = xs;

    for delete in &deletes {
        let removed = tree.remove(delete);
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if removed != Ok(*delete) {
                    return false;
                }
            }
            None => {
                if removed != Err(Error::ItemNotFound) {
                    return false;
                }
            }
        }
    }

    still_present.sort();
    tree.len() == still_present.len() && tree.iter().eq(still_present.iter())
}

#[quickcheck]
fn size_matches_every_traversal(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        let _ = tree.remove(delete);
    }

    let len = tree.len();
    tree.pre_order().count() == len
        && tree.in_order().count() == len
        && tree.post_order().count() == len
        && tree.level_order().count() == len
}

#[quickcheck]
fn find_is_idempotent(xs: Vec<i8>, query: i8) -> bool {
    let tree = build(&xs);
    let shape: Vec<_> = tree.pre_order().copied().collect();

    let first = tree.find(&query).copied();
    let second = tree.find(&query).copied();
    first == second && tree.pre_order().copied().collect::<Vec<_>>() == shape
}

#[quickcheck]
fn rebalance_preserves_contents(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    tree.rebalance();

    let mut sorted = xs;
    sorted.sort();
    tree.len() == sorted.len() && tree.iter().eq(sorted.iter())
}

#[quickcheck]
fn rebalance_balances_distinct_items(xs: BTreeSet<i16>) -> bool {
    if xs.is_empty() {
        return true;
    }

    // Sorted insertion is the worst case.
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    tree.rebalance();

    let minimal = xs.len().ilog2() as isize;
    tree.is_balanced() && tree.height() == minimal
}

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, deletes: Vec<i8>, low: i8, high: i8) -> bool {
    let (tree, model) = build_and_delete(&xs, &deletes);

    let expected: Vec<_> = model.iter().filter(|x| low <= **x && **x <= high).collect();
    tree.range_find(&low, &high) == expected
}

#[quickcheck]
fn range_find_with_many_duplicates(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    // Folding onto a handful of values makes nearly every item a duplicate.
    let fold = |xs: Vec<i8>| xs.into_iter().map(|x| x % 4).collect::<Vec<_>>();
    let (tree, model) = build_and_delete(&fold(xs), &fold(deletes));

    (-3..=3).all(|low| {
        let expected: Vec<_> = model.iter().filter(|x| low <= **x && **x <= low).collect();
        tree.range_find(&low, &low) == expected
    })
}

#[quickcheck]
fn successor_and_predecessor_match_btreeset(xs: Vec<i8>, deletes: Vec<i8>, query: i8) -> bool {
    let fold = |xs: Vec<i8>| xs.into_iter().map(|x| x % 16).collect::<Vec<_>>();
    let (tree, model) = build_and_delete(&fold(xs), &fold(deletes));
    let query = query % 16;
    let set: BTreeSet<_> = model.into_iter().collect();

    let successor = set.range(query.saturating_add(1)..).next().filter(|x| **x > query);
    let predecessor = set.range(..query).next_back();
    tree.successor(&query) == successor && tree.predecessor(&query) == predecessor
}

#[quickcheck]
fn replace_finds_what_find_finds(xs: Vec<i8>, query: i8) -> bool {
    let mut tree = build(&xs);
    let found = tree.find(&query).copied();

    // Replacing an item with itself leaves the tree ordered.
    tree.replace(&query, query) == found && tree.iter().zip(tree.iter().skip(1)).all(|(a, b)| a <= b)
}

#[quickcheck]
fn min_and_max_match_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}
