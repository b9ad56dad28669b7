use keyed_bst::{Error, Tree};

fn keys<V>(tree: &Tree<i32, V>) -> Vec<i32> {
    tree.iter().map(|(k, _)| *k).collect()
}

#[test]
fn insert_then_iterate_in_order() {
    let mut tree = Tree::new();
    for key in [5, 3, 8, 1, 4] {
        tree.insert(key, ());
    }

    assert_eq!(tree.size(), 5);
    assert_eq!(keys(&tree), [1, 3, 4, 5, 8]);
}

#[test]
fn duplicate_key_finds_first_inserted() {
    let mut tree = Tree::new();
    tree.insert(5, "a");
    tree.insert(5, "b");

    assert_eq!(tree.get(&5), Some(&"a"));
    assert_eq!(tree.size(), 2);
}

#[test]
fn remove_node_with_two_children() {
    let mut tree = Tree::new();
    for key in [10, 5, 15, 3, 7, 12, 20] {
        tree.insert(key, key);
    }

    tree.remove(&10);

    assert_eq!(tree.root_key(), Some(&12));
    assert_eq!(keys(&tree), [3, 5, 7, 12, 15, 20]);
}

#[test]
fn get_on_empty_tree() {
    let tree: Tree<i32, &str> = Tree::new();

    for key in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(tree.get(&key), None);
    }
}

#[test]
fn iterate_empty_tree() {
    let tree: Tree<i32, ()> = Tree::new();
    let mut iter = tree.iter();

    assert!(!iter.has_next());
    assert_eq!(iter.try_next(), Err(Error::Exhausted));
}

#[test]
fn remove_missing_key() {
    let mut tree = Tree::new();
    for key in [10, 5, 15, 3, 7, 12, 20] {
        tree.insert(key, key);
    }
    let before = keys(&tree);

    assert_eq!(tree.remove(&99), None);

    assert_eq!(tree.size(), 7);
    assert_eq!(keys(&tree), before);
}

#[test]
fn opaque_values_are_borrowed_not_owned() {
    let payloads = vec![String::from("first"), String::from("second")];

    let mut tree = Tree::new();
    tree.insert(2, &payloads[1]);
    tree.insert(1, &payloads[0]);

    assert_eq!(tree.get(&1), Some(&&payloads[0]));
    assert_eq!(tree.remove(&2), Some(&payloads[1]));
    tree.free();

    // The caller still has every payload.
    assert_eq!(payloads, ["first", "second"]);
}

#[test]
fn exhausted_error_message() {
    assert_eq!(
        Error::Exhausted.to_string(),
        "iterator is exhausted: no nodes left to visit"
    );
}
