use crate::config::TrieConfig;
use crate::node::Node;
use crate::trie::{Insertion, Trie};

use proptest::prelude::*;
use std::collections::BTreeSet;

fn validate_tree(t: &Trie) {
    assert!(t.root.common.is_empty(), "root must have an empty prefix");

    let mut terminals = 0usize;
    let mut stack: Vec<(&Node, String, bool)> = vec![(&t.root, String::new(), true)];
    while let Some((node, parent_path, is_root)) = stack.pop() {
        let path = parent_path + &node.common;

        assert_eq!(
            node.keys.len(),
            node.children.len(),
            "keys and children must stay parallel"
        );
        assert_eq!(
            node.children.capacity(),
            node.children.len(),
            "child slots must not exceed children"
        );
        let distinct: BTreeSet<char> = node.keys.iter().copied().collect();
        assert_eq!(distinct.len(), node.keys.len(), "duplicate child key");

        if !is_root {
            assert!(
                node.value.is_some() || node.children.len() > 1,
                "non-root node at {path:?} is neither terminal nor a branch point"
            );
        }
        if let Some(value) = &node.value {
            assert_eq!(value, &path, "terminal value must match its path");
            terminals += 1;
        }

        for (&c, child) in node.keys.iter().zip(&node.children) {
            let mut child_path = path.clone();
            child_path.push(c);
            stack.push((child, child_path, false));
        }
    }
    assert_eq!(terminals, t.len(), "terminal count must track len");
}

fn keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abé日]{0,6}", 0..48)
}

fn build(keys: &[String]) -> (Trie, BTreeSet<String>) {
    let mut t = Trie::with_config(TrieConfig::default().with_allow_empty(true));
    let mut m = BTreeSet::new();
    for k in keys {
        let expected = if m.insert(k.clone()) {
            Insertion::Inserted
        } else {
            Insertion::AlreadyExists
        };
        assert_eq!(t.insert(k), Ok(expected));
    }
    (t, m)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_inserted_keys_exist(keys in keys_strategy()) {
        let (t, m) = build(&keys);
        validate_tree(&t);
        prop_assert_eq!(t.len(), m.len());
        for k in &m {
            prop_assert!(t.exists(k), "missing {:?}", k);
        }
    }

    #[test]
    fn prop_lookups_match_model(keys in keys_strategy(), probes in keys_strategy()) {
        let (t, m) = build(&keys);
        for p in &probes {
            prop_assert_eq!(t.exists(p), m.contains(p), "exists {:?}", p);
            prop_assert_eq!(
                t.starts_with(p),
                m.iter().any(|k| k.starts_with(p.as_str())),
                "starts_with {:?}", p
            );
        }
    }

    #[test]
    fn prop_shape_is_independent_of_order(keys in keys_strategy()) {
        let (forward, _) = build(&keys);
        let reversed: Vec<String> = keys.iter().rev().cloned().collect();
        let (backward, _) = build(&reversed);
        validate_tree(&backward);
        prop_assert_eq!(forward.stats(), backward.stats());
    }

    #[test]
    fn prop_reinsert_changes_nothing(keys in keys_strategy()) {
        let (mut t, m) = build(&keys);
        let stats = t.stats();
        for k in &m {
            prop_assert_eq!(t.insert(k), Ok(Insertion::AlreadyExists));
        }
        prop_assert_eq!(t.stats(), stats);
    }
}
