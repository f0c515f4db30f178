use cordyceps_avl::{AvlMap, Error};
use pretty_assertions::assert_eq;

fn keys<V>(map: &AvlMap<i32, V>) -> Vec<i32> {
    map.iter().map(|(&key, _)| key).collect()
}

fn cursor_keys<V>(map: &AvlMap<i32, V>) -> Vec<i32> {
    let mut out = Vec::new();
    let mut cursor = map.begin();

    while cursor != map.end() {
        let (&key, _) = cursor.key_value().expect("cursor before end has an entry");
        out.push(key);
        cursor.move_next();
    }

    out
}

fn example() -> AvlMap<i32, &'static str> {
    let mut map = AvlMap::new();

    for key in [1, 2, -1, 0, -2, -3, 5] {
        map.set(key, "baa");
        map.assert_invariants();
    }

    map
}

#[test]
fn erase_from_example() {
    let mut map = example();

    assert_eq!(map.erase(&2), Ok("baa"));
    map.assert_invariants();

    assert_eq!(cursor_keys(&map), vec![-3, -2, -1, 0, 1, 5]);
    assert!(!map.exists(&2));
    assert_eq!(map.len(), 6);
}

#[test]
fn dump_after_erase() {
    let mut map = example();
    map.erase(&2).unwrap();

    assert_eq!(
        map.to_string(),
        "└── -1\n\
         \x20   ├── 1\n\
         \x20   │   ├── 5\n\
         \x20   │   └── 0\n\
         \x20   └── -2\n\
         \x20       └── -3\n"
    );
}

#[test]
fn set_then_get() {
    let mut map = AvlMap::new();

    assert_eq!(map.set(3, "three"), None);
    assert_eq!(map.get(&3), Some(&"three"));
    assert_eq!(map[&3], "three");
}

#[test]
fn set_overwrites_in_place() {
    let mut map = AvlMap::new();

    map.set(1, 10);
    map.set(2, 20);
    map.set(3, 30);

    let height = map.height();

    assert_eq!(map.set(2, 21), Some(20));
    assert_eq!(map.get(&2), Some(&21));
    assert_eq!(map.len(), 3);
    assert_eq!(map.height(), height);
    map.assert_invariants();
}

#[test]
fn get_mut_updates_value() {
    let mut map: AvlMap<i32, Vec<i32>> = AvlMap::new();
    map.set(1, vec![]);

    map.get_mut(&1).unwrap().push(4);
    assert_eq!(map[&1], vec![4]);
    assert!(map.get_mut(&2).is_none());
}

#[test]
fn absent_before_insert_and_after_erase() {
    let mut map = AvlMap::new();

    assert!(!map.exists(&4));
    assert_eq!(map.get(&4), None);

    map.set(4, ());
    assert!(map.exists(&4));

    assert_eq!(map.erase(&4), Ok(()));
    assert!(!map.exists(&4));

    assert_eq!(map.erase(&4), Err(Error::KeyNotFound));
    assert!(map.is_empty());
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let map: AvlMap<i32, i32> = AvlMap::new();
    let _value: i32 = map[&1];
}

#[test]
fn ascending_keys_form_balanced_root() {
    let map: AvlMap<i32, ()> = [1, 2, 3].into_iter().map(|k| (k, ())).collect();

    assert_eq!(map.to_string(), "└── 2\n    ├── 3\n    └── 1\n");
    assert_eq!(map.height(), 2);
}

#[test]
fn depth_stays_logarithmic() {
    let mut map = AvlMap::new();

    for key in 0..5000 {
        map.set(key, key);
    }

    for key in (0..5000).step_by(3) {
        map.erase(&key).unwrap();
    }

    map.assert_invariants();

    let bound = 1.4405 * ((map.len() + 2) as f64).log2();
    assert!((map.height() as f64) <= bound, "height {} > {bound}", map.height());
}

#[test]
fn clone_is_independent() {
    let mut original = example();
    let mut copy = original.clone();

    copy.assert_invariants();
    assert_eq!(copy, original);

    copy.erase(&-1).unwrap();
    copy.set(42, "new");
    original.set(7, "seven");

    assert_eq!(keys(&original), vec![-3, -2, -1, 0, 1, 2, 5, 7]);
    assert_eq!(keys(&copy), vec![-3, -2, 0, 1, 2, 5, 42]);
    original.assert_invariants();
    copy.assert_invariants();
}

#[test]
fn clone_from_replaces_contents() {
    let source = example();
    let mut target: AvlMap<i32, &str> = [(100, "x"), (200, "y")].into_iter().collect();

    target.clone_from(&source);

    assert_eq!(target, source);
    target.assert_invariants();
}

#[test]
fn first_last_and_pops() {
    let mut map = example();

    assert_eq!(map.first_key_value(), Some((&-3, &"baa")));
    assert_eq!(map.last_key_value(), Some((&5, &"baa")));

    assert_eq!(map.pop_first(), Some((-3, "baa")));
    assert_eq!(map.pop_last(), Some((5, "baa")));
    map.assert_invariants();

    assert_eq!(keys(&map), vec![-2, -1, 0, 1, 2]);
}

#[test]
fn cursor_matches_iter() {
    let map: AvlMap<i32, i32> = (0..100).rev().map(|k| (k * 7 % 101, k)).collect();

    assert_eq!(cursor_keys(&map), keys(&map));
    assert_eq!(map.iter().len(), map.len());
}

#[test]
fn empty_map_cursors() {
    let map: AvlMap<i32, ()> = AvlMap::new();

    let mut begin = map.begin();
    assert_eq!(begin, map.end());
    assert!(begin.is_end());

    begin.move_next();
    assert_eq!(begin, map.end());
    assert_eq!(map.to_string(), "");
}

#[test]
fn debug_formats_as_map() {
    let map: AvlMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();

    assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
}

#[test]
fn clear_then_reuse() {
    let mut map = example();

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);

    map.set(1, "one");
    assert_eq!(keys(&map), vec![1]);
}

#[test]
fn string_keys_borrow_lookup() {
    let mut map = AvlMap::new();

    map.set("b".to_string(), 2);
    map.set("a".to_string(), 1);

    assert_eq!(map.get("a"), Some(&1));
    assert!(map.exists("b"));
    assert_eq!(map.erase("a"), Ok(1));
}
