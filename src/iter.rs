// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`ArrayList`](crate::ArrayList).
//!
//! - `Iter` / `IterMut` borrow the live prefix `[0, len)`.
//! - `IntoIter<T>` yields by value.
//!
//! All three are double-ended, exact-size and fused.

// Crate imports
use crate::vec::ArrayList;

// Alloc imports
use alloc::vec;

// Core imports
use core::{convert, iter::FusedIterator, slice};

/// Borrowing iterator returned by [`ArrayList::iter`].
pub struct Iter<'a, T> {
    pub(crate) inner: slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.inner.find_map(Option::as_ref)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find_map(Option::as_ref)
    }
}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable borrowing iterator returned by [`ArrayList::iter_mut`].
pub struct IterMut<'a, T> {
    pub(crate) inner: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.find_map(Option::as_mut)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find_map(Option::as_mut)
    }
}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owned iterator returned by `ArrayList::into_iter()`.
///
/// Yields elements by value from front to back.
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.find_map(convert::identity)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.by_ref().rev().find_map(convert::identity)
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.buf.into_vec();
        slots.truncate(self.len);
        IntoIter {
            inner: slots.into_iter(),
        }
    }
}
