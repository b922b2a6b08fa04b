//! HashTable: separate chaining over `DynArray` buckets.
//!
//! The bucket array always holds `capacity` eagerly built buckets and
//! `capacity` is always a power of two, so a key's bucket is
//! `hash(key) & (capacity - 1)`. Buckets store owned `Pair`s; each key
//! lives in exactly one bucket, at most once.
//!
//! Lookups search a bucket with an explicit key-only (or value-only)
//! comparator closure through `DynArray::find_by`; the buckets' own
//! full-pair comparator is never swapped out, so no shared state is
//! mutated by a search.
//!
//! Resizing mirrors `DynArray`: after an insert pushes the load above the
//! policy maximum, the bucket count is multiplied by the growth factor and
//! pairs of the original buckets are rehashed; after an erase drops it
//! below the minimum, the upper buckets are retired and their pairs are
//! moved down. Rehashing moves pairs, it never duplicates or destroys them.

use crate::dyn_array::DynArray;
use crate::error::TableError;
use crate::ops::{CloneOps, ElementOps, FnOps, FnOpsBuilder};
use crate::pair::Pair;
use crate::policy::{self, ArrayPolicy, ResizePolicy, TablePolicy};
use crate::reentrancy::DebugReentrancy;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use core::ops::Range;
use hashbrown::hash_map::DefaultHashBuilder;
use log::{debug, warn};
use std::fmt;

pub type Bucket<K, V, O> = DynArray<Pair<K, V>, O, ArrayPolicy>;

pub struct HashTable<K, V, S = DefaultHashBuilder, O = CloneOps, P = TablePolicy>
where
    O: ElementOps<Pair<K, V>>,
    P: ResizePolicy,
{
    chains: Chains<K, V, S, O, P>,
    reentrancy: DebugReentrancy,
}

// Structural state, kept apart from the guard so entry points can hold the
// guard while mutating.
struct Chains<K, V, S, O, P>
where
    O: ElementOps<Pair<K, V>>,
    P: ResizePolicy,
{
    hasher: S,
    buckets: Vec<Bucket<K, V, O>>,
    size: usize,
    ops: O,
    _policy: PhantomData<fn() -> P>,
}

#[inline]
fn index_for(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    (hash & (capacity as u64 - 1)) as usize
}

impl<K, V, S, O, P> Chains<K, V, S, O, P>
where
    K: Eq + Hash,
    S: BuildHasher,
    O: ElementOps<Pair<K, V>> + Clone,
    P: ResizePolicy,
{
    fn new(hasher: S, ops: O) -> Self {
        assert!(
            P::INITIAL_CAPACITY.is_power_of_two(),
            "table initial capacity must be a power of two"
        );
        assert!(
            P::GROWTH_FACTOR >= 2 && P::GROWTH_FACTOR.is_power_of_two(),
            "table growth factor must be a power of two >= 2"
        );
        let buckets = (0..P::INITIAL_CAPACITY)
            .map(|_| Bucket::with_ops(ops.clone()))
            .collect();
        Self {
            hasher,
            buckets,
            size: 0,
            ops,
            _policy: PhantomData,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn bucket_index<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        index_for(self.hasher.hash_one(q), self.capacity())
    }

    fn locate<Q>(&self, q: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let b = self.bucket_index(q);
        let pos = self.buckets[b].find_by(|p| p.key_matches(q))?;
        Some((b, pos))
    }

    fn insert(&mut self, pair: &Pair<K, V>) -> Result<(), TableError> {
        let b = self.bucket_index(&pair.key);
        let bucket = &mut self.buckets[b];
        match bucket.find_by(|p| p.key_matches(&pair.key)) {
            Some(pos) => bucket.replace(pos, pair)?,
            None => {
                bucket.push_back(pair)?;
                self.size += 1;
                self.grow_if_needed();
            }
        }
        Ok(())
    }

    fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (b, pos) = self.locate(q)?;
        self.buckets[b].at(pos).map(|p| &p.value)
    }

    fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (b, pos) = self.locate(q)?;
        self.buckets[b].at_mut(pos).map(|p| &mut p.value)
    }

    fn contains_value(&self, v: &V) -> bool
    where
        V: PartialEq,
    {
        self.buckets
            .iter()
            .any(|bucket| bucket.find_by(|p| p.value_matches(v)).is_some())
    }

    fn contains_pair(&self, pair: &Pair<K, V>) -> bool {
        let b = self.bucket_index(&pair.key);
        self.buckets[b].find(pair).is_some()
    }

    fn erase_at(&mut self, b: usize, pos: usize) -> Result<(), TableError> {
        self.buckets[b].erase(pos)?;
        self.size -= 1;
        self.shrink_if_needed();
        Ok(())
    }

    fn clear(&mut self) {
        // Buckets at or above `cursor` are empty. A shrink only moves pairs
        // out of buckets above the new capacity, so clamping keeps that true.
        let mut cursor = self.capacity();
        while self.size > 0 {
            cursor = cursor.min(self.capacity());
            let Some(b) = cursor.checked_sub(1) else {
                break;
            };
            match self.buckets[b].len().checked_sub(1) {
                Some(last) => {
                    if self.erase_at(b, last).is_err() {
                        break;
                    }
                }
                None => cursor = b,
            }
        }
    }

    /// Re-place every pair of `sources` under `capacity`, returning how many moved.
    fn rehash(&mut self, sources: Range<usize>, capacity: usize) -> usize {
        let mut moved = 0;
        for i in sources {
            for j in (0..self.buckets[i].len()).rev() {
                let Some(p) = self.buckets[i].at(j) else {
                    continue;
                };
                let target = index_for(self.hasher.hash_one(&p.key), capacity);
                if target == i {
                    continue;
                }
                if let Some(pair) = self.buckets[i].remove(j) {
                    self.buckets[target].push_back_owned(pair);
                    moved += 1;
                }
            }
        }
        moved
    }

    fn grow_if_needed(&mut self) {
        let old = self.capacity();
        let Some(new) = P::grown(self.size, old) else {
            return;
        };
        if let Err(e) = self.buckets.try_reserve_exact(new - old) {
            warn!(
                "hash table growth {} -> {} failed, keeping capacity: {}",
                old, new, e
            );
            return;
        }
        let ops = &self.ops;
        self.buckets
            .extend((old..new).map(|_| Bucket::with_ops(ops.clone())));
        let moved = self.rehash(0..old, new);
        debug!(
            "hash table grew {} -> {} buckets ({} pairs, {} moved)",
            old, new, self.size, moved
        );
    }

    fn shrink_if_needed(&mut self) {
        let old = self.capacity();
        let Some(new) = P::shrunk(self.size, old) else {
            return;
        };
        let moved = self.rehash(new..old, new);
        self.buckets.truncate(new);
        self.buckets.shrink_to(new);
        debug!(
            "hash table shrank {} -> {} buckets ({} pairs, {} moved)",
            old, new, self.size, moved
        );
    }
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
{
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + PartialEq,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_hasher_and_ops(hasher, CloneOps)
    }
}

impl<K, V, S, P> HashTable<K, V, S, FnOps<Pair<K, V>>, P>
where
    K: Eq + Hash,
    S: BuildHasher,
    P: ResizePolicy,
{
    /// Build a table from closure pair handles; fails if any handle is missing.
    pub fn allocate(hasher: S, handles: FnOpsBuilder<Pair<K, V>>) -> Result<Self, TableError> {
        Ok(Self::with_hasher_and_ops(hasher, handles.build()?))
    }
}

impl<K, V, S, O, P> HashTable<K, V, S, O, P>
where
    K: Eq + Hash,
    S: BuildHasher,
    O: ElementOps<Pair<K, V>> + Clone,
    P: ResizePolicy,
{
    pub fn with_hasher_and_ops(hasher: S, ops: O) -> Self {
        Self {
            chains: Chains::new(hasher, ops),
            reentrancy: DebugReentrancy::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chains.size
    }

    pub fn is_empty(&self) -> bool {
        self.chains.size == 0
    }

    /// Number of buckets; always a power of two.
    pub fn capacity(&self) -> usize {
        self.chains.capacity()
    }

    pub fn load_factor(&self) -> Option<f64> {
        policy::load_factor(self.chains.size, self.chains.capacity())
    }

    pub fn hasher(&self) -> &S {
        &self.chains.hasher
    }

    pub fn bucket(&self, index: usize) -> Option<&Bucket<K, V, O>> {
        self.chains.buckets.get(index)
    }

    pub fn bucket_index<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        let _g = self.reentrancy.enter("bucket_index");
        self.chains.bucket_index(q)
    }

    /// `(bucket, position)` of the pair holding `q`.
    pub fn locate<Q>(&self, q: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter("locate");
        self.chains.locate(q)
    }

    /// Store a duplicate of `pair`. An existing pair with the same key is
    /// replaced in place and the length is unchanged. On failure the table
    /// is left as it was.
    pub fn insert(&mut self, pair: &Pair<K, V>) -> Result<(), TableError> {
        let _g = self.reentrancy.enter("insert");
        self.chains.insert(pair)
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter("get");
        self.chains.get(q)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter("get_mut");
        self.chains.get_mut(q)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter("contains_key");
        self.chains.locate(q).is_some()
    }

    /// Linear scan over every bucket, matching values only.
    pub fn contains_value(&self, v: &V) -> bool
    where
        V: PartialEq,
    {
        let _g = self.reentrancy.enter("contains_value");
        self.chains.contains_value(v)
    }

    /// Whether a pair equal to `pair` under the pair comparator is stored.
    pub fn contains_pair(&self, pair: &Pair<K, V>) -> bool {
        let _g = self.reentrancy.enter("contains_pair");
        self.chains.contains_pair(pair)
    }

    pub fn erase<Q>(&mut self, q: &Q) -> Result<(), TableError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.reentrancy.enter("erase");
        let (b, pos) = self.chains.locate(q).ok_or(TableError::KeyNotFound)?;
        self.chains.erase_at(b, pos)
    }

    /// Erase pair by pair; the bucket array shrinks along the way.
    pub fn clear(&mut self) {
        let _g = self.reentrancy.enter("clear");
        self.chains.clear();
    }

    pub fn iter(&self) -> Iter<'_, K, V, O> {
        let empty: &[Pair<K, V>] = &[];
        Iter {
            buckets: self.chains.buckets.iter(),
            current: empty.iter(),
            remaining: self.chains.size,
        }
    }
}

/// Iterator over `(&K, &V)` in bucket order.
pub struct Iter<'a, K, V, O>
where
    O: ElementOps<Pair<K, V>>,
{
    buckets: core::slice::Iter<'a, Bucket<K, V, O>>,
    current: core::slice::Iter<'a, Pair<K, V>>,
    remaining: usize,
}

impl<'a, K, V, O> Iterator for Iter<'a, K, V, O>
where
    O: ElementOps<Pair<K, V>>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.current.next() {
                self.remaining -= 1;
                return Some((&p.key, &p.value));
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, O> ExactSizeIterator for Iter<'_, K, V, O> where O: ElementOps<Pair<K, V>> {}

impl<'a, K, V, S, O, P> IntoIterator for &'a HashTable<K, V, S, O, P>
where
    K: Eq + Hash,
    S: BuildHasher,
    O: ElementOps<Pair<K, V>> + Clone,
    P: ResizePolicy,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S, O, P> fmt::Debug for HashTable<K, V, S, O, P>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
    O: ElementOps<Pair<K, V>> + Clone,
    P: ResizePolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::BuildIdentityHasher;
    use std::cell::Cell;
    use std::collections::BTreeSet;
    use std::hash::Hasher;
    use std::rc::Rc;

    type IdTable<V> = HashTable<u64, V, BuildIdentityHasher>;

    fn id_table<V: Clone + PartialEq>() -> IdTable<V> {
        HashTable::with_hasher(BuildIdentityHasher)
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
        } // force all keys into the same bucket
    }

    /// Invariant: crossing 0.75 at 13/16 doubles the bucket count once; keys
    /// stay reachable and land on `hash & (capacity - 1)`.
    #[test]
    fn growth_at_thirteen_of_sixteen() {
        let mut t = id_table();
        for k in 1..=12u64 {
            t.insert(&Pair::new(k, k * 100)).unwrap();
        }
        assert_eq!(t.capacity(), 16);
        t.insert(&Pair::new(13, 1300)).unwrap();
        assert_eq!(t.capacity(), 32);
        assert_eq!(t.get(&7), Some(&700));
        assert_eq!(t.bucket_index(&7u64), 7 & 31);
        for k in 1..=13u64 {
            let (b, _) = t.locate(&k).expect("key reachable after growth");
            assert_eq!(b, (k & 31) as usize);
        }
    }

    /// Invariant: a later, unmoved pair in a bucket must not stop earlier
    /// pairs of that bucket from being rehashed.
    #[test]
    fn growth_moves_pairs_behind_an_unmoved_one() {
        let mut t = id_table();
        // Both land in bucket 0 at capacity 16; at 32 only 16 moves.
        t.insert(&Pair::new(16, "sixteen")).unwrap();
        t.insert(&Pair::new(0, "zero")).unwrap();
        for k in 1..=11u64 {
            t.insert(&Pair::new(k, "filler")).unwrap();
        }
        assert_eq!(t.capacity(), 32);
        assert_eq!(t.locate(&16u64).map(|(b, _)| b), Some(16));
        assert_eq!(t.locate(&0u64).map(|(b, _)| b), Some(0));
        assert_eq!(t.get(&16), Some(&"sixteen"));
        assert_eq!(t.bucket(0).map(|b| b.len()), Some(1));
    }

    /// Invariant: re-inserting a key replaces its value without changing len.
    #[test]
    fn insert_existing_key_replaces_value() {
        let mut t: HashTable<String, i32> = HashTable::new();
        t.insert(&Pair::new("k".to_string(), 1)).unwrap();
        t.insert(&Pair::new("k".to_string(), 2)).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("k"), Some(&2));
    }

    /// Invariant: value search does not disturb later key lookups.
    #[test]
    fn value_search_then_key_lookup() {
        let mut t = id_table();
        t.insert(&Pair::new(1, "a")).unwrap();
        t.insert(&Pair::new(2, "b")).unwrap();
        assert!(t.contains_value(&"b"));
        assert!(!t.contains_value(&"c"));
        assert!(t.contains_key(&2));
        assert!(!t.contains_key(&3));
        assert!(t.contains_pair(&Pair::new(2, "b")));
        assert!(!t.contains_pair(&Pair::new(2, "a")));
    }

    /// Invariant: erasing an absent key is a no-op reported as KeyNotFound.
    #[test]
    fn erase_is_idempotent() {
        let mut t = id_table();
        t.insert(&Pair::new(5, ())).unwrap();
        assert_eq!(t.erase(&5), Ok(()));
        assert_eq!(t.erase(&5), Err(TableError::KeyNotFound));
        assert_eq!(t.erase(&5), Err(TableError::KeyNotFound));
        assert_eq!(t.len(), 0);
    }

    /// Invariant: inserting then erasing every key leaves an empty table at
    /// exactly the initial bucket count.
    #[test]
    fn round_trip_returns_to_initial_capacity() {
        let mut t = id_table();
        for k in 0..500u64 {
            t.insert(&Pair::new(k, k)).unwrap();
        }
        assert_eq!(t.len(), 500);
        assert_eq!(t.capacity(), 1024);
        for k in 0..500u64 {
            t.erase(&k).unwrap();
            assert!(t.capacity().is_power_of_two());
            assert!(t.capacity() >= TablePolicy::INITIAL_CAPACITY);
        }
        assert!(t.is_empty());
        assert_eq!(t.capacity(), TablePolicy::INITIAL_CAPACITY);
        assert!((0..t.capacity()).all(|i| t.bucket(i).map_or(false, |b| b.is_empty())));
    }

    #[test]
    fn shrink_moves_pairs_out_of_retired_buckets() {
        let mut t = id_table();
        for k in 0..13u64 {
            t.insert(&Pair::new(k * 3, k)).unwrap();
        }
        assert_eq!(t.capacity(), 32);
        // 13 -> 7 pairs: 7/32 < 0.25.
        for k in 0..6u64 {
            t.erase(&(k * 3)).unwrap();
        }
        assert_eq!(t.capacity(), 16);
        for k in 6..13u64 {
            assert_eq!(t.get(&(k * 3)), Some(&k));
            assert_eq!(t.locate(&(k * 3)).map(|(b, _)| b), Some((k * 3 % 16) as usize));
        }
    }

    #[test]
    fn clear_empties_and_shrinks() {
        let mut t = id_table();
        for k in 0..300u64 {
            t.insert(&Pair::new(k, k)).unwrap();
        }
        t.clear();
        assert_eq!(t.len(), 0);
        assert_eq!(t.iter().count(), 0);
        assert_eq!(t.capacity(), TablePolicy::INITIAL_CAPACITY);
        t.insert(&Pair::new(1, 1)).unwrap();
        assert_eq!(t.get(&1), Some(&1));
    }

    /// Invariant: all keys resolve under total collision, across growth.
    #[test]
    fn collisions_resolve_by_key() {
        let mut t: HashTable<String, usize, ConstBuildHasher> =
            HashTable::with_hasher(ConstBuildHasher);
        for i in 0..40 {
            t.insert(&Pair::new(format!("k{i}"), i)).unwrap();
        }
        assert_eq!(t.capacity(), 64);
        assert_eq!(t.bucket(0).map(|b| b.len()), Some(40));
        for i in 0..40 {
            assert_eq!(t.get(format!("k{i}").as_str()), Some(&i));
        }
    }

    /// Invariant: a refused duplicate leaves the table untouched, for both
    /// fresh keys and replacements.
    #[test]
    fn failed_duplicate_leaves_table_unchanged() {
        let mut t: HashTable<u64, i32, BuildIdentityHasher, FnOps<Pair<u64, i32>>> =
            HashTable::allocate(
                BuildIdentityHasher,
                FnOps::builder()
                    .duplicate(|p: &Pair<u64, i32>| (p.value >= 0).then(|| p.clone()))
                    .compare(|a: &Pair<u64, i32>, b: &Pair<u64, i32>| a == b)
                    .destroy(|_| {}),
            )
            .unwrap();
        t.insert(&Pair::new(1, 10)).unwrap();
        assert_eq!(
            t.insert(&Pair::new(2, -1)),
            Err(TableError::DuplicateFailed)
        );
        assert_eq!(
            t.insert(&Pair::new(1, -1)),
            Err(TableError::DuplicateFailed)
        );
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(&1), Some(&10));
        assert!(!t.contains_key(&2));
    }

    #[test]
    fn allocate_rejects_missing_handle() {
        let r: Result<HashTable<u64, u64, BuildIdentityHasher, FnOps<Pair<u64, u64>>>, _> =
            HashTable::allocate(
                BuildIdentityHasher,
                FnOps::builder()
                    .duplicate(|p: &Pair<u64, u64>| Some(p.clone()))
                    .compare(|a: &Pair<u64, u64>, b: &Pair<u64, u64>| a == b),
            );
        assert!(matches!(r, Err(TableError::MissingHandle("destroy"))));
    }

    /// Invariant: rehashing moves pairs; only replace, erase and drop destroy.
    #[test]
    fn pair_destroy_count_tracks_ownership() {
        let destroyed = Rc::new(Cell::new(0usize));
        let d = Rc::clone(&destroyed);
        let mut t: HashTable<u64, u64, BuildIdentityHasher, FnOps<Pair<u64, u64>>> =
            HashTable::allocate(
                BuildIdentityHasher,
                FnOps::builder()
                    .duplicate(|p: &Pair<u64, u64>| Some(p.clone()))
                    .compare(|a: &Pair<u64, u64>, b: &Pair<u64, u64>| a == b)
                    .destroy(move |_| d.set(d.get() + 1)),
            )
            .unwrap();
        for k in 0..100u64 {
            t.insert(&Pair::new(k, k)).unwrap();
        }
        assert!(t.capacity() > TablePolicy::INITIAL_CAPACITY);
        assert_eq!(destroyed.get(), 0);

        t.insert(&Pair::new(3, 33)).unwrap();
        assert_eq!(destroyed.get(), 1);

        t.erase(&4).unwrap();
        assert_eq!(destroyed.get(), 2);

        drop(t);
        assert_eq!(destroyed.get(), 101);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut t = id_table();
        t.insert(&Pair::new(9, 1)).unwrap();
        if let Some(v) = t.get_mut(&9) {
            *v += 41;
        }
        assert_eq!(t.get(&9), Some(&42));
        assert!(t.get_mut(&10).is_none());
    }

    #[test]
    fn iteration_yields_each_pair_once() {
        let mut t: HashTable<String, usize> = HashTable::new();
        for i in 0..50 {
            t.insert(&Pair::new(format!("k{i}"), i)).unwrap();
        }
        let it = t.iter();
        assert_eq!(it.len(), 50);
        let seen: BTreeSet<usize> = it.map(|(_, v)| *v).collect();
        assert_eq!(seen, (0..50).collect());
        assert_eq!((&t).into_iter().count(), 50);
    }

    #[test]
    fn load_factor_tracks_len_over_buckets() {
        let mut t = id_table();
        assert_eq!(t.load_factor(), Some(0.0));
        for k in 0..4u64 {
            t.insert(&Pair::new(k, ())).unwrap();
        }
        assert_eq!(t.load_factor(), Some(0.25));
    }

    #[test]
    fn debug_lists_entries() {
        let mut t = id_table();
        t.insert(&Pair::new(1, "one")).unwrap();
        assert_eq!(format!("{t:?}"), r#"{1: "one"}"#);
    }
}
