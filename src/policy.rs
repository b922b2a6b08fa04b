//! Compile-time resize policies.
//!
//! A policy is a zero-sized type carrying four constants. Containers take
//! the policy as a type parameter, so the thresholds are fixed at compile
//! time and cost nothing at runtime. Both the array and the table:
//! - multiply capacity by `GROWTH_FACTOR` after an insertion leaves
//!   `len / capacity > MAX_LOAD_FACTOR`;
//! - divide capacity by `GROWTH_FACTOR` after a removal leaves
//!   `len / capacity < MIN_LOAD_FACTOR`, but never below `INITIAL_CAPACITY`.

pub const ARRAY_INITIAL_CAPACITY: usize = 16;
pub const ARRAY_GROWTH_FACTOR: usize = 2;
pub const ARRAY_MAX_LOAD_FACTOR: f64 = 0.75;
pub const ARRAY_MIN_LOAD_FACTOR: f64 = 0.25;

pub const TABLE_INITIAL_CAPACITY: usize = 16;
pub const TABLE_GROWTH_FACTOR: usize = 2;
pub const TABLE_MAX_LOAD_FACTOR: f64 = 0.75;
pub const TABLE_MIN_LOAD_FACTOR: f64 = 0.25;

pub trait ResizePolicy {
    const INITIAL_CAPACITY: usize;
    const GROWTH_FACTOR: usize;
    const MAX_LOAD_FACTOR: f64;
    const MIN_LOAD_FACTOR: f64;

    /// Capacity to grow to, or `None` when the load is within bounds.
    #[inline]
    fn grown(len: usize, capacity: usize) -> Option<usize> {
        match load_factor(len, capacity) {
            Some(lf) if lf > Self::MAX_LOAD_FACTOR => capacity.checked_mul(Self::GROWTH_FACTOR),
            _ => None,
        }
    }

    /// Capacity to shrink to, or `None` when the load is within bounds or
    /// shrinking would undershoot the initial capacity.
    #[inline]
    fn shrunk(len: usize, capacity: usize) -> Option<usize> {
        match load_factor(len, capacity) {
            Some(lf) if lf < Self::MIN_LOAD_FACTOR => {
                let next = capacity / Self::GROWTH_FACTOR;
                (next >= Self::INITIAL_CAPACITY).then_some(next)
            }
            _ => None,
        }
    }
}

/// `len / capacity`, or `None` for a zero capacity.
#[inline]
pub fn load_factor(len: usize, capacity: usize) -> Option<f64> {
    (capacity != 0).then(|| len as f64 / capacity as f64)
}

/// Default policy for `DynArray`, including table buckets.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayPolicy;

impl ResizePolicy for ArrayPolicy {
    const INITIAL_CAPACITY: usize = ARRAY_INITIAL_CAPACITY;
    const GROWTH_FACTOR: usize = ARRAY_GROWTH_FACTOR;
    const MAX_LOAD_FACTOR: f64 = ARRAY_MAX_LOAD_FACTOR;
    const MIN_LOAD_FACTOR: f64 = ARRAY_MIN_LOAD_FACTOR;
}

/// Default policy for the `HashTable` bucket array. `INITIAL_CAPACITY` and
/// `GROWTH_FACTOR` must keep the bucket count a power of two.
#[derive(Clone, Copy, Debug, Default)]
pub struct TablePolicy;

impl ResizePolicy for TablePolicy {
    const INITIAL_CAPACITY: usize = TABLE_INITIAL_CAPACITY;
    const GROWTH_FACTOR: usize = TABLE_GROWTH_FACTOR;
    const MAX_LOAD_FACTOR: f64 = TABLE_MAX_LOAD_FACTOR;
    const MIN_LOAD_FACTOR: f64 = TABLE_MIN_LOAD_FACTOR;
}
