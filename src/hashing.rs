//! Identity hashing for integer keys.
//!
//! `BuildIdentityHasher` makes `hash(k) == k` for every primitive integer
//! key, which lets callers predict bucket placement exactly. Every write
//! folds into the state, so composite and byte-string keys still mix.

use core::hash::{BuildHasher, Hasher};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildIdentityHasher;

impl BuildHasher for BuildIdentityHasher {
    type Hasher = IdentityHasher;

    #[inline]
    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher::default()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityHasher {
    state: u64,
}

macro_rules! write_int {
    ($($name:ident: $t:ty),* $(,)?) => {
        $(
            #[inline]
            fn $name(&mut self, n: $t) {
                self.state = self.state.rotate_left(<$t>::BITS) ^ (n as u64);
            }
        )*
    };
}

impl Hasher for IdentityHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = self.state.rotate_left(8) ^ u64::from(b);
        }
    }

    write_int! {
        write_u8: u8,
        write_u16: u16,
        write_u32: u32,
        write_u64: u64,
        write_usize: usize,
        write_i8: i8,
        write_i16: i16,
        write_i32: i32,
        write_i64: i64,
        write_isize: isize,
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}
