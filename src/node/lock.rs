use core::ops::{Deref, DerefMut};
#[cfg(feature = "std")]
use std::sync::{self as impl_, PoisonError};

#[cfg(not(feature = "std"))]
use spin as impl_;

/// Interior mutability for a trie node shared between views.
///
/// Backed by [`std::sync::RwLock`] when the `std` feature is enabled and by
/// [`spin::RwLock`] otherwise. Poisoning is ignored: a node only ever holds
/// plain data, so a panic while it was locked cannot leave it half-updated in
/// a way later readers could observe as inconsistent.
#[repr(transparent)]
pub(crate) struct NodeLock<T>(impl_::RwLock<T>);

#[repr(transparent)]
pub(crate) struct NodeReadGuard<'a, T>(impl_::RwLockReadGuard<'a, T>);

#[repr(transparent)]
pub(crate) struct NodeWriteGuard<'a, T>(impl_::RwLockWriteGuard<'a, T>);

impl<T> NodeLock<T> {
    #[must_use]
    pub(crate) const fn new(value: T) -> Self {
        Self(impl_::RwLock::new(value))
    }

    #[inline]
    pub(crate) fn read(&self) -> NodeReadGuard<'_, T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        #[cfg(feature = "std")]
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);

        NodeReadGuard(guard)
    }

    #[inline]
    pub(crate) fn write(&self) -> NodeWriteGuard<'_, T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.write();

        #[cfg(feature = "std")]
        let guard = self.0.write().unwrap_or_else(PoisonError::into_inner);

        NodeWriteGuard(guard)
    }

    #[inline]
    pub(crate) fn into_inner(self) -> T {
        #[cfg(not(feature = "std"))]
        let value = self.0.into_inner();

        #[cfg(feature = "std")]
        let value = self.0.into_inner().unwrap_or_else(PoisonError::into_inner);

        value
    }
}

impl<T> Deref for NodeReadGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for NodeWriteGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for NodeWriteGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
