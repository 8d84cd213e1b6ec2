use std::collections::HashSet;

use treemap::{Error, Tree};

/// Checks the BST ordering of every node by walking the structure from the root with the
/// bounds each subtree must respect.
fn is_bst<T: Ord>(tree: &Tree<T>) -> bool {
    let mut stack = vec![(tree.root(), None::<&T>, None::<&T>)];
    while let Some((node, low, high)) = stack.pop() {
        let Some(node) = node else { continue };
        let data = node.data();
        if low.map_or(false, |low| data <= low) || high.map_or(false, |high| data >= high) {
            return false;
        }
        stack.push((node.left(), low, Some(data)));
        stack.push((node.right(), Some(data), high));
    }
    true
}

quickcheck::quickcheck! {
    fn in_order_is_sorted(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let items = tree.items_in_order();

        is_bst(&tree) && items.windows(2).all(|w| w[0] < w[1])
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x) && tree.search(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn size_counts_distinct_items(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let distinct: HashSet<_> = xs.into_iter().collect();

        tree.len() == distinct.len()
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let mut still_present: HashSet<_> = xs.into_iter().collect();

        for delete in &deletes {
            let before = tree.len();
            let result = tree.delete(delete);
            let expected = if still_present.remove(delete) {
                Ok(*delete)
            } else if before == 0 {
                Err(Error::EmptyTree)
            } else {
                Err(Error::NotFound)
            };
            if result != expected || !is_bst(&tree) {
                return false;
            }
            let shrink = usize::from(expected.is_ok());
            if tree.len() != before - shrink {
                return false;
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.len()
    }
}
