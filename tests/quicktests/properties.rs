use keyed_bst::Tree;

use crate::Op;

/// Applies a set of operations to a tree and to a list of every `(K, V)` it should hold. The
/// number of successful removals is returned so size can be checked against it.
fn do_ops(ops: &[Op<i8, i8>], bst: &mut Tree<i8, i8>, model: &mut Vec<(i8, i8)>) -> usize {
    let mut removed = 0;
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(*k, *v);
                model.push((*k, *v));
            }
            Op::Remove(k) => {
                if let Some(v) = bst.remove(k) {
                    let pos = model
                        .iter()
                        .position(|pair| *pair == (*k, v))
                        .expect("removed value was never inserted");
                    model.swap_remove(pos);
                    removed += 1;
                }
            }
        }
    }
    removed
}

quickcheck::quickcheck! {
    fn size_is_inserts_minus_removals(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = Vec::new();

        let removed = do_ops(&ops, &mut tree, &mut model);
        let inserted = ops.iter().filter(|op| matches!(op, Op::Insert(..))).count();

        tree.size() == inserted - removed && tree.size() == model.len()
    }
}

quickcheck::quickcheck! {
    fn iteration_is_sorted_and_complete(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = Vec::new();
        do_ops(&ops, &mut tree, &mut model);

        let mut expected: Vec<_> = model.iter().map(|(k, _)| *k).collect();
        expected.sort();

        let mut iter = tree.iter();
        let mut actual = Vec::new();
        while iter.has_next() {
            match iter.try_next() {
                Ok((k, _)) => actual.push(*k),
                Err(_) => return false,
            }
        }

        actual == expected && iter.try_next().is_err()
    }
}

quickcheck::quickcheck! {
    fn insert_then_get_round_trips(xs: Vec<i8>, key: i8, value: i8) -> bool {
        let mut tree = Tree::new();
        for x in xs.iter().filter(|x| **x != key) {
            tree.insert(*x, *x);
        }

        tree.insert(key, value);
        tree.get(&key) == Some(&value)
    }
}

quickcheck::quickcheck! {
    fn remove_missing_key_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree = Tree::new();
        for x in xs.iter().filter(|x| **x != missing) {
            tree.insert(*x, *x);
        }
        let before: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();
        let root_before = tree.root_key().copied();

        let removed = tree.remove(&missing);
        let after: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();

        removed.is_none() && before == after && tree.root_key().copied() == root_before
    }
}

quickcheck::quickcheck! {
    fn removing_unique_key_makes_it_unreachable(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let mut unique = xs.clone();
        unique.sort();
        unique.dedup();
        for x in &unique {
            tree.insert(*x, *x);
        }

        unique.iter().all(|x| {
            let size = tree.size();
            tree.remove(x) == Some(*x) && tree.get(x).is_none() && tree.size() == size - 1
        })
    }
}
