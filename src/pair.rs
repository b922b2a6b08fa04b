//! Key/value element stored in table buckets.

use core::borrow::Borrow;

/// A key and its value. Pairs compare as a whole through `PartialEq`; the
/// table also matches them by key alone or by value alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub fn key_matches<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.key.borrow() == q
    }

    #[inline]
    pub fn value_matches(&self, v: &V) -> bool
    where
        V: PartialEq,
    {
        self.value == *v
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}
