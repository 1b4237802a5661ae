extern crate rand;
extern crate splay_collections;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use splay_collections::adaptive_hash_map::AdaptiveHashMap;
use splay_collections::hash_map::HashMap;
use splay_collections::splay_tree::NodeRef;
use splay_collections::{Error, Name};
use std::collections::BTreeMap;
use std::vec::Vec;

fn bucket_keys(root: Option<NodeRef<i32, u32>>) -> Vec<i32> {
    let mut keys = Vec::new();
    let mut stack: Vec<NodeRef<i32, u32>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        keys.push(*node.key());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    keys
}

fn check_buckets(map: &AdaptiveHashMap<i32, u32>) {
    let mut total = 0;
    for (index, bucket) in map.buckets().iter().enumerate() {
        let keys = bucket_keys(bucket.root());
        assert_eq!(keys.len(), bucket.len());
        for key in keys {
            assert_eq!(map.hash_code(&key), index);
        }
        total += bucket.len();
    }
    assert_eq!(total, map.len());
}

#[test]
fn int_test_adaptive_hash_map() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut map = AdaptiveHashMap::new(17);
    let mut expected = BTreeMap::new();

    for i in 0..20_000 {
        let key = rng.gen_range(-1_000..1_000i32);
        let value = rng.gen::<u32>();

        match rng.gen_range(0..3) {
            0 => {
                let result = map.insert(key, value);
                if expected.contains_key(&key) {
                    assert_eq!(result, Err(Error::DuplicateKey));
                } else {
                    assert_eq!(result, Ok(()));
                    expected.insert(key, value);
                    let bucket = &map.buckets()[map.hash_code(&key)];
                    assert_eq!(bucket.root().map(|node| *node.key()), Some(key));
                }
            },
            1 => match expected.get(&key) {
                Some(value) => assert_eq!(map.peek(&key), Ok(value)),
                None => assert_eq!(map.peek(&key), Err(Error::NonexistentKey)),
            },
            _ => match expected.remove(&key) {
                Some(value) => assert_eq!(map.extract(&key), Ok(value)),
                None => assert_eq!(map.extract(&key), Err(Error::NonexistentKey)),
            },
        }

        assert_eq!(map.len(), expected.len());
        if i % 1_000 == 0 {
            check_buckets(&map);
        }
    }
    check_buckets(&map);
}

#[test]
fn int_test_single_bucket() {
    let mut map = AdaptiveHashMap::new(1);
    for key in &[5, 3, 8, 1] {
        map.insert(*key, (*key * 100) as u32).unwrap();
    }
    assert_eq!(map.buckets()[0].len(), 4);
    assert_eq!(map.buckets()[0].root().map(|node| *node.key()), Some(1));

    assert_eq!(map.extract(&5), Ok(500));
    assert_eq!(map.len(), 3);
    assert_eq!(map.peek(&5), Err(Error::NonexistentKey));
    check_buckets(&map);
}

#[test]
fn int_test_name_keys() {
    let mut map = AdaptiveHashMap::new(7);
    let mut table = HashMap::new(7);
    let names = [
        ("Ada", "Lovelace"),
        ("Alan", "Turing"),
        ("Grace", "Hopper"),
        ("Edsger", "Dijkstra"),
        ("Barbara", "Liskov"),
    ];

    for (year, (first, last)) in names.iter().enumerate() {
        map.insert(Name::new(*first, *last), year).unwrap();
        table.insert(Name::new(*first, *last), year).unwrap();
    }

    for (year, (first, last)) in names.iter().enumerate() {
        let name = Name::new(*first, *last);
        assert_eq!(map.hash_code(&name), table.hash_code(&name));
        assert_eq!(map.peek(&name), Ok(&year));
        assert_eq!(table.peek(&name), Ok(&year));
    }

    let grace = Name::new("Grace", "Hopper");
    assert_eq!(map.extract(&grace), Ok(2));
    assert_eq!(table.extract(&grace), Ok(2));
    assert_eq!(map.len(), 4);
    assert_eq!(table.len(), 4);
}

#[test]
fn int_test_hash_map() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut map = HashMap::new(3);
    let mut expected = BTreeMap::new();

    for _ in 0..5_000 {
        let key = rng.gen_range(-500..500i32);
        let value = rng.gen::<u32>();

        match rng.gen_range(0..3) {
            0 => {
                let result = map.insert(key, value);
                if expected.contains_key(&key) {
                    assert_eq!(result, Err(Error::DuplicateKey));
                } else {
                    assert_eq!(result, Ok(()));
                    expected.insert(key, value);
                }
            },
            1 => assert_eq!(map.peek(&key).ok(), expected.get(&key)),
            _ => assert_eq!(map.extract(&key).ok(), expected.remove(&key)),
        }

        assert_eq!(map.len(), expected.len());
        assert!(map.len() <= map.bucket_count());
        let occupied = map.slots().iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, map.len());
    }
}
