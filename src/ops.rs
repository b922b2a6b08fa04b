//! Element operation handles: duplicate, compare, destroy.
//!
//! Containers own every element they store. They never copy, compare or
//! drop an element directly; all three go through an `ElementOps` value
//! held by the container.

use crate::error::ArrayError;
use std::fmt;
use std::rc::Rc;

pub trait ElementOps<T> {
    /// Produce an owned copy of `elem`. `None` signals that no copy could be
    /// made; the container then reports failure and stays unchanged.
    fn duplicate(&self, elem: &T) -> Option<T>;

    fn compare(&self, a: &T, b: &T) -> bool;

    /// Release an element the container owns.
    fn destroy(&self, elem: T) {
        drop(elem);
    }
}

/// `Clone` + `PartialEq` + `Drop`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloneOps;

impl<T: Clone + PartialEq> ElementOps<T> for CloneOps {
    #[inline]
    fn duplicate(&self, elem: &T) -> Option<T> {
        Some(elem.clone())
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

type DuplicateFn<T> = Rc<dyn Fn(&T) -> Option<T>>;
type CompareFn<T> = Rc<dyn Fn(&T, &T) -> bool>;
type DestroyFn<T> = Rc<dyn Fn(T)>;

/// Operation handles supplied as closures.
///
/// Built through [`FnOps::builder`], which refuses to produce a value unless
/// all three handles are present. Cloning shares the closures, so every
/// bucket of a table can carry the same handles.
pub struct FnOps<T> {
    duplicate: DuplicateFn<T>,
    compare: CompareFn<T>,
    destroy: DestroyFn<T>,
}

impl<T> FnOps<T> {
    pub fn builder() -> FnOpsBuilder<T> {
        FnOpsBuilder {
            duplicate: None,
            compare: None,
            destroy: None,
        }
    }
}

impl<T> Clone for FnOps<T> {
    fn clone(&self) -> Self {
        Self {
            duplicate: Rc::clone(&self.duplicate),
            compare: Rc::clone(&self.compare),
            destroy: Rc::clone(&self.destroy),
        }
    }
}

impl<T> fmt::Debug for FnOps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOps").finish_non_exhaustive()
    }
}

impl<T> ElementOps<T> for FnOps<T> {
    #[inline]
    fn duplicate(&self, elem: &T) -> Option<T> {
        (self.duplicate)(elem)
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> bool {
        (self.compare)(a, b)
    }

    #[inline]
    fn destroy(&self, elem: T) {
        (self.destroy)(elem)
    }
}

pub struct FnOpsBuilder<T> {
    duplicate: Option<DuplicateFn<T>>,
    compare: Option<CompareFn<T>>,
    destroy: Option<DestroyFn<T>>,
}

impl<T> FnOpsBuilder<T> {
    pub fn duplicate<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<T> + 'static,
    {
        self.duplicate = Some(Rc::new(f));
        self
    }

    pub fn compare<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.compare = Some(Rc::new(f));
        self
    }

    pub fn destroy<F>(mut self, f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        self.destroy = Some(Rc::new(f));
        self
    }

    pub fn build(self) -> Result<FnOps<T>, ArrayError> {
        Ok(FnOps {
            duplicate: self.duplicate.ok_or(ArrayError::MissingHandle("duplicate"))?,
            compare: self.compare.ok_or(ArrayError::MissingHandle("compare"))?,
            destroy: self.destroy.ok_or(ArrayError::MissingHandle("destroy"))?,
        })
    }
}
