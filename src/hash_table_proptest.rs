#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// bucket placement directly.

use crate::hash_table::HashTable;
use crate::hashing::BuildIdentityHasher;
use crate::pair::Pair;
use crate::policy::{ResizePolicy, TablePolicy};
use crate::TableError;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hasher};

#[derive(Clone, Debug)]
enum Op {
    Insert(u64, i32),
    Erase(u64),
    Get(u64),
    ContainsValue(i32),
    Clear,
    Iterate,
}

// Keys drawn from a small range so replacements, erases of present keys and
// repeated resizes in both directions all show up.
fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        6 => (0u64..96, -8i32..8).prop_map(|(k, v)| Op::Insert(k, v)),
        4 => (0u64..96).prop_map(Op::Erase),
        2 => (0u64..96).prop_map(Op::Get),
        1 => (-10i32..10).prop_map(Op::ContainsValue),
        1 => Just(Op::Clear),
        1 => Just(Op::Iterate),
    ];
    proptest::collection::vec(op, 1..400)
}

#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

fn check_structure<S: BuildHasher>(
    sut: &HashTable<u64, i32, S>,
    model: &HashMap<u64, i32>,
) -> Result<(), TestCaseError> {
    let cap = sut.capacity();
    prop_assert!(cap.is_power_of_two());
    prop_assert!(cap >= TablePolicy::INITIAL_CAPACITY);
    let lf = sut.load_factor().expect("capacity is never zero");
    prop_assert!(lf <= TablePolicy::MAX_LOAD_FACTOR);
    prop_assert!(cap == TablePolicy::INITIAL_CAPACITY || lf >= TablePolicy::MIN_LOAD_FACTOR);

    prop_assert_eq!(sut.len(), model.len());
    prop_assert_eq!(sut.is_empty(), model.is_empty());
    let bucket_total: usize = (0..cap)
        .map(|i| sut.bucket(i).map_or(0, |b| b.len()))
        .sum();
    prop_assert_eq!(bucket_total, model.len());

    for k in model.keys() {
        let (b, _) = sut.locate(k).expect("model key must be present");
        prop_assert_eq!(b, sut.bucket_index(k));
    }
    Ok(())
}

fn run<S: BuildHasher>(mut sut: HashTable<u64, i32, S>, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut model: HashMap<u64, i32> = HashMap::new();
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                sut.insert(&Pair::new(k, v)).expect("clone duplicate cannot fail");
                model.insert(k, v);
                prop_assert_eq!(sut.get(&k), Some(&v));
            }
            Op::Erase(k) => {
                let expected = match model.remove(&k) {
                    Some(_) => Ok(()),
                    None => Err(TableError::KeyNotFound),
                };
                prop_assert_eq!(sut.erase(&k), expected);
                prop_assert!(!sut.contains_key(&k));
            }
            Op::Get(k) => {
                prop_assert_eq!(sut.get(&k), model.get(&k));
                prop_assert_eq!(sut.contains_key(&k), model.contains_key(&k));
            }
            Op::ContainsValue(v) => {
                let expected = model.values().any(|mv| *mv == v);
                prop_assert_eq!(sut.contains_value(&v), expected);
            }
            Op::Clear => {
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), TablePolicy::INITIAL_CAPACITY);
            }
            Op::Iterate => {
                let seen: BTreeMap<u64, i32> = sut.iter().map(|(k, v)| (*k, *v)).collect();
                let expected: BTreeMap<u64, i32> = model.iter().map(|(k, v)| (*k, *v)).collect();
                prop_assert_eq!(seen, expected);
            }
        }
        check_structure(&sut, &model)?;
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised after every step:
// - len/is_empty parity with the model and with the sum of bucket lengths.
// - Capacity is a power of two, never below the initial capacity, and the
//   load factor stays within the policy band.
// - Every live key sits in bucket `hash & (capacity - 1)`.
// - Erase of an absent key reports KeyNotFound without side effects.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in arb_ops()) {
        run(HashTable::new(), ops)?;
    }

    #[test]
    fn prop_state_machine_identity_hash(ops in arb_ops()) {
        run(HashTable::with_hasher(BuildIdentityHasher), ops)?;
    }
}

// Same invariants under worst-case collisions: every pair shares bucket 0,
// so lookups rely entirely on the key-only comparator.
proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions(ops in arb_ops()) {
        run(HashTable::with_hasher(ConstBuildHasher), ops)?;
    }
}

// Property: inserting distinct keys then erasing all of them, in any order,
// returns the table to its initial shape.
proptest! {
    #[test]
    fn prop_round_trip_restores_initial_capacity(
        keys in proptest::collection::hash_set(any::<u64>(), 0..300)
    ) {
        let mut sut: HashTable<u64, i32> = HashTable::new();
        for k in &keys {
            sut.insert(&Pair::new(*k, 0)).unwrap();
        }
        prop_assert_eq!(sut.len(), keys.len());
        for k in &keys {
            prop_assert_eq!(sut.erase(k), Ok(()));
        }
        prop_assert!(sut.is_empty());
        prop_assert_eq!(sut.capacity(), TablePolicy::INITIAL_CAPACITY);
    }
}
