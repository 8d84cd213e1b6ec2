use std::collections::BTreeMap;

use treemap::{Error, TreeMap};

use crate::Op;

/// Applies a set of operations to a `TreeMap` and a `BTreeMap`.
/// This way we can ensure that after a random smattering of sets
/// and deletes both agree on every key.
fn do_ops<K, V>(ops: &[Op<K, V>], map: &mut TreeMap<K, V>, model: &mut BTreeMap<K, V>)
where
    K: Ord + Clone + std::fmt::Debug,
    V: PartialEq + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                assert_eq!(map.set(k.clone(), v.clone()), model.insert(k.clone(), v.clone()));
            }
            Op::Remove(k) => {
                assert_eq!(map.delete(k), model.remove(k).ok_or(Error::KeyNotFound));
            }
            Op::Iter => {
                assert!(map.items().into_iter().eq(model.iter()));
            }
        }
        assert_eq!(map.len(), model.len());
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        let mut map = TreeMap::new();
        let mut model = BTreeMap::new();

        do_ops(&ops, &mut map, &mut model);
        model.iter().all(|(k, v)| map.get(k) == Ok(v))
    }
}

quickcheck::quickcheck! {
    fn keys_are_ascending(entries: Vec<(u8, String)>) -> bool {
        let map: TreeMap<_, _> = entries.into_iter().collect();
        let ascending = map.keys().windows(2).all(|w| w[0] < w[1]);
        ascending
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let map: TreeMap<_, _> = xs.iter().map(|x| (*x, ())).collect();

        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| !map.contains(x) && map.get(x) == Err(Error::KeyNotFound))
    }
}
