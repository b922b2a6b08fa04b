//! chain-hashmap: a single-threaded, separate-chaining HashMap whose buckets
//! are load-factor resized dynamic arrays.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: two small containers with precise contracts, the second built
//!   entirely from the first.
//! - Layers:
//!   - DynArray<T, O, P>: owning sequence. Elements are copied in, compared
//!     and released through an `ElementOps` value (`O`); capacity follows
//!     the compile-time `ResizePolicy` (`P`).
//!   - HashTable<K, V, S, O, P>: power-of-two array of `DynArray<Pair<K, V>>`
//!     buckets indexed by `hash & (capacity - 1)`, with the same
//!     grow/shrink policy applied to the bucket count.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` tables (reentrancy tracker marker);
//!   `FnOps` handles are `Rc` closures.
//! - Containers own their elements; callers keep their originals.
//! - Every bucket exists from construction; there are no lazy buckets.
//! - A key appears at most once; inserting it again replaces the pair.
//!
//! Lookup without comparator swapping
//! - Buckets keep their full-pair comparator for `find`. Key-only and
//!   value-only searches pass an explicit closure to `find_by`, so a lookup
//!   never mutates container state.
//!
//! Reentrancy policy
//! - `HashTable` calls into user code (`Hash`, `Eq`, `ElementOps`) while it
//!   may be moving pairs between buckets. Each public entry point enters a
//!   debug-only guard; calling back into the same table from such code
//!   panics in debug builds.
//!
//! Resizing
//! - Growth multiplies the bucket count and rehashes every pair of the
//!   original buckets; shrink moves the pairs of retired upper buckets down.
//!   Pairs are moved, never duplicated, so rehashing cannot fail halfway.
//! - Neither container shrinks below its initial capacity.
//!
//! Notes and non-goals
//! - No thread safety, no stable iteration order across mutations, no
//!   serialization, no defence against adversarial hashes.
//! - Failures are typed (`ArrayError`, `TableError`); not-found lookups are
//!   `None`/`false`.

pub mod dyn_array;
pub mod error;
pub mod hash_table;
mod hash_table_proptest;
pub mod hashing;
pub mod ops;
pub mod pair;
pub mod policy;
mod reentrancy;

// Public surface
pub use dyn_array::DynArray;
pub use error::{ArrayError, TableError};
pub use hash_table::{HashTable, Iter};
pub use hashing::{BuildIdentityHasher, IdentityHasher};
pub use ops::{CloneOps, ElementOps, FnOps, FnOpsBuilder};
pub use pair::Pair;
pub use policy::{ArrayPolicy, ResizePolicy, TablePolicy};
