//! DynArray: owning, load-factor resized sequence with injected element operations.
//!
//! Every element is owned by the array. Elements enter through
//! `ElementOps::duplicate` (or are moved in with `push_back_owned`) and
//! leave through `ElementOps::destroy` (or are moved out with `remove`).
//! `capacity` is the logical slot count the resize policy reasons about;
//! the backing `Vec` is reserved to at least that many slots.

use crate::error::ArrayError;
use crate::ops::{CloneOps, ElementOps, FnOps, FnOpsBuilder};
use crate::policy::{self, ArrayPolicy, ResizePolicy};
use core::marker::PhantomData;
use log::{trace, warn};
use std::fmt;

pub struct DynArray<T, O = CloneOps, P = ArrayPolicy>
where
    O: ElementOps<T>,
    P: ResizePolicy,
{
    slots: Vec<T>,
    capacity: usize,
    ops: O,
    _policy: PhantomData<fn() -> P>,
}

impl<T> DynArray<T>
where
    T: Clone + PartialEq,
{
    pub fn new() -> Self {
        Self::with_ops(CloneOps)
    }
}

impl<T> Default for DynArray<T>
where
    T: Clone + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> DynArray<T, FnOps<T>, P>
where
    P: ResizePolicy,
{
    /// Build an array from closure handles; fails if any handle is missing.
    pub fn allocate(handles: FnOpsBuilder<T>) -> Result<Self, ArrayError> {
        Ok(Self::with_ops(handles.build()?))
    }
}

impl<T, O, P> DynArray<T, O, P>
where
    O: ElementOps<T>,
    P: ResizePolicy,
{
    pub fn with_ops(ops: O) -> Self {
        assert!(P::INITIAL_CAPACITY > 0, "initial capacity must be > 0");
        assert!(P::GROWTH_FACTOR >= 2, "growth factor must be >= 2");
        Self {
            slots: Vec::with_capacity(P::INITIAL_CAPACITY),
            capacity: P::INITIAL_CAPACITY,
            ops,
            _policy: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ops(&self) -> &O {
        &self.ops
    }

    pub fn load_factor(&self) -> Option<f64> {
        policy::load_factor(self.slots.len(), self.capacity)
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)
    }

    /// First index whose element `compare`s equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.slots.iter().position(|e| self.ops.compare(e, value))
    }

    /// First index whose element satisfies `pred`. This is how callers search
    /// with a comparator other than the array's own, e.g. matching only part
    /// of an element.
    pub fn find_by<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.slots.iter().position(pred)
    }

    /// Append a duplicate of `value`. On duplication failure nothing changes.
    pub fn push_back(&mut self, value: &T) -> Result<(), ArrayError> {
        let copy = self
            .ops
            .duplicate(value)
            .ok_or(ArrayError::DuplicateFailed)?;
        self.push_back_owned(copy);
        Ok(())
    }

    /// Append an element the caller already owns, without duplicating it.
    pub fn push_back_owned(&mut self, value: T) {
        self.slots.push(value);
        self.grow_if_needed();
    }

    /// Destroy the element at `index` and close the gap, keeping order.
    pub fn erase(&mut self, index: usize) -> Result<(), ArrayError> {
        let elem = self.remove(index).ok_or(ArrayError::OutOfBounds {
            index,
            size: self.slots.len(),
        })?;
        self.ops.destroy(elem);
        Ok(())
    }

    /// Move the element at `index` out of the array, keeping order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.slots.len() {
            return None;
        }
        let elem = self.slots.remove(index);
        self.shrink_if_needed();
        Some(elem)
    }

    /// Swap the element at `index` for a duplicate of `value`. The old element
    /// is destroyed only after the duplicate exists.
    pub fn replace(&mut self, index: usize, value: &T) -> Result<(), ArrayError> {
        let size = self.slots.len();
        if index >= size {
            return Err(ArrayError::OutOfBounds { index, size });
        }
        let copy = self
            .ops
            .duplicate(value)
            .ok_or(ArrayError::DuplicateFailed)?;
        let old = core::mem::replace(&mut self.slots[index], copy);
        self.ops.destroy(old);
        Ok(())
    }

    /// Erase from the back until empty; capacity steps down one shrink at a time.
    pub fn clear(&mut self) {
        while let Some(last) = self.slots.len().checked_sub(1) {
            if self.erase(last).is_err() {
                break;
            }
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.slots.iter()
    }

    fn grow_if_needed(&mut self) {
        let Some(next) = P::grown(self.slots.len(), self.capacity) else {
            return;
        };
        let additional = next.saturating_sub(self.slots.len());
        match self.slots.try_reserve_exact(additional) {
            Ok(()) => {
                trace!("dyn array grew {} -> {}", self.capacity, next);
                self.capacity = next;
            }
            Err(e) => warn!(
                "dyn array growth {} -> {} failed, keeping capacity: {}",
                self.capacity, next, e
            ),
        }
    }

    fn shrink_if_needed(&mut self) {
        if let Some(next) = P::shrunk(self.slots.len(), self.capacity) {
            trace!("dyn array shrank {} -> {}", self.capacity, next);
            self.slots.shrink_to(next);
            self.capacity = next;
        }
    }
}

impl<T, O, P> Drop for DynArray<T, O, P>
where
    O: ElementOps<T>,
    P: ResizePolicy,
{
    fn drop(&mut self) {
        for elem in self.slots.drain(..) {
            self.ops.destroy(elem);
        }
    }
}

impl<'a, T, O, P> IntoIterator for &'a DynArray<T, O, P>
where
    O: ElementOps<T>,
    P: ResizePolicy,
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<T, O, P> fmt::Debug for DynArray<T, O, P>
where
    T: fmt::Debug,
    O: ElementOps<T>,
    P: ResizePolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("capacity", &self.capacity)
            .field("elements", &self.slots)
            .finish()
    }
}
