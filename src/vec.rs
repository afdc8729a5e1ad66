// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `ArrayList` type and its inherent API.
//!
//! `ArrayList<T>` stores elements in an owned, heap-allocated slot buffer and
//! tracks a logical length. Growth, insertion and removal live in the
//! submodules; the quicksort lives in [`crate::sort`].

mod clear;
mod extend;
mod grow;
mod insert;
mod new;
mod push;
mod remove;

// Crate imports
use crate::{
    error::Error,
    iter::{Iter, IterMut},
};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A growable, heap-backed array list.
///
/// `ArrayList<T>` owns a buffer of `capacity()` slots and tracks a logical
/// length `len ∈ 0..=capacity()`. Only the prefix `[0, len)` holds elements;
/// the tail `[len, capacity)` is vacant.
///
/// # Layout and invariants
///
/// - The buffer is a `Box<[Option<T>]>` whose length *is* the capacity.
/// - Slots `[0, len)` are `Some`, slots `[len, capacity)` are `None`.
/// - Removal and [`clear`](ArrayList::clear) reset vacated slots to `None`, so
///   elements are dropped as soon as they leave the list.
/// - The backing buffer is never exposed; reads hand out element references.
///
/// # Growth
///
/// When an operation needs `min` slots and `capacity() < min`, the new
/// capacity is `old + old / 2`, raised to `min` if that is still short. The
/// elements are moved into a freshly allocated buffer. Capacity never shrinks.
///
/// # Bounds policy
///
/// Indexed operations compare the index against `capacity()`, not `len()`.
/// See the crate-level docs for how vacant slots in `[len, capacity)` are
/// reported.
///
/// # Examples
///
/// ```rust
/// use growable_array_list::ArrayList;
///
/// let mut v = ArrayList::new();
/// for x in 0..11 {
///     v.push(x);
/// }
/// assert_eq!(v.len(), 11);
/// assert_eq!(v.capacity(), 15);
/// assert_eq!(v.get(10), Ok(Some(&10)));
/// assert_eq!(v.get(12), Ok(None));
/// assert!(v.get(15).is_err());
/// ```
#[derive(Clone)]
pub struct ArrayList<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Capacity used by [`new`](ArrayList::new) and substituted for a requested
    /// capacity of `0`.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`.
    ///
    /// - `Ok(Some(&T))` if `index < len`.
    /// - `Ok(None)` if `len <= index < capacity` (a vacant slot).
    /// - [`Error::IndexOutOfBounds`] if `index >= capacity`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<Option<&T>, Error> {
        self.check_index(index)?;
        Ok(self.buf[index].as_ref())
    }

    /// Mutable counterpart of [`get`](ArrayList::get), with the same bounds policy.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, Error> {
        self.check_index(index)?;
        Ok(self.buf[index].as_mut())
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Returns `true` if the list contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
    }

    // iterators
    /// Iterates over the elements in index order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.buf[..self.len].iter(),
        }
    }

    /// Iterates mutably over the elements in index order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len;
        IterMut {
            inner: self.buf[..len].iter_mut(),
        }
    }

    /// Capacity-based bounds check shared by `get`, `insert` and `remove`.
    #[inline]
    pub(crate) fn check_index(&self, index: usize) -> Result<(), Error> {
        if index >= self.buf.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        Ok(())
    }
}

struct Elements<'a, T>(&'a ArrayList<T>);

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &Elements(self))
            .finish()
    }
}

// Equality and hashing look at the live elements only; capacity is ignored.
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for ArrayList<T> {}
impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for x in self.iter() {
            x.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::ArrayList;
    use crate::Error;
    use alloc::{format, string::String, vec::Vec};

    fn contents<T: Clone>(v: &ArrayList<T>) -> Vec<T> {
        v.iter().cloned().collect()
    }

    #[test]
    fn test_add_and_get() {
        let mut v = ArrayList::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.get(0), Ok(Some(&1)));
        assert_eq!(v.get(1), Ok(Some(&2)));
        assert_eq!(v.get(2), Ok(Some(&3)));
    }

    #[test]
    fn test_insert_builds_sequence_in_order() {
        let mut v = ArrayList::new();
        v.insert(0, 1).unwrap();
        v.insert(1, 3).unwrap();
        v.insert(1, 2).unwrap();
        assert_eq!(contents(&v), [1, 2, 3]);
    }

    #[test]
    fn test_remove_shifts_tail_left() {
        let mut v = ArrayList::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.remove(1), Ok(Some(2)));
        assert_eq!(v.len(), 2);
        assert_eq!(v.get(1), Ok(Some(&3)));
    }

    #[test]
    fn test_clear_empties_and_keeps_capacity() {
        let mut v = ArrayList::new();
        v.push(1);
        v.push(2);
        v.push(3);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), ArrayList::<i32>::DEFAULT_CAPACITY);
        assert_eq!(v.get(0), Ok(None));
    }

    #[test]
    fn test_strings_doubles_and_booleans() {
        let mut s: ArrayList<String> = ArrayList::new();
        s.push("Hello".into());
        s.push("World".into());
        assert_eq!(s.get(0).unwrap().map(String::as_str), Some("Hello"));
        assert_eq!(s.get(1).unwrap().map(String::as_str), Some("World"));

        let mut d: ArrayList<f64> = ArrayList::new();
        d.push(3.5);
        d.push(2.25);
        assert_eq!(d.get(0), Ok(Some(&3.5)));
        assert_eq!(d.get(1), Ok(Some(&2.25)));

        let mut b: ArrayList<bool> = ArrayList::new();
        b.push(true);
        b.push(false);
        assert_eq!(b.get(0), Ok(Some(&true)));
        assert_eq!(b.get(1), Ok(Some(&false)));
    }

    #[test]
    fn test_bounds_are_checked_against_capacity() {
        let mut v: ArrayList<i32> = ArrayList::new();
        v.push(1);

        // Vacant but allocated.
        assert_eq!(v.get(1), Ok(None));
        assert_eq!(v.get(9), Ok(None));

        // Past the allocation.
        assert_eq!(
            v.get(10),
            Err(Error::IndexOutOfBounds { index: 10, size: 1 })
        );
        assert_eq!(
            v.get_mut(10),
            Err(Error::IndexOutOfBounds { index: 10, size: 1 })
        );
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut v: ArrayList<i32> = [7, 8, 9].into();
        if let Ok(Some(x)) = v.get_mut(1) {
            *x = 80;
        }
        assert_eq!(contents(&v), [7, 80, 9]);

        // Built from an array, the buffer is exactly full.
        assert_eq!(v.capacity(), 3);
        assert_eq!(
            v.get_mut(3),
            Err(Error::IndexOutOfBounds { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_get_mut_vacant_slot_is_none() {
        let mut v: ArrayList<i32> = ArrayList::new();
        v.push(7);
        assert_eq!(v.get_mut(1), Ok(None));
        assert_eq!(v.get_mut(9), Ok(None));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_contains_first_last() {
        let v: ArrayList<i32> = [7, 8, 9].into();
        assert!(v.contains(&7));
        assert!(!v.contains(&10));
        assert_eq!(v.first(), Some(&7));
        assert_eq!(v.last(), Some(&9));

        let empty: ArrayList<i32> = ArrayList::new();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_iter_and_iter_mut() {
        let mut v: ArrayList<i32> = [1, 2, 3, 4].into();
        for x in v.iter_mut() {
            *x *= 2;
        }
        assert_eq!(contents(&v), [2, 4, 6, 8]);
        assert_eq!(v.iter().len(), 4);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [8, 6, 4, 2]);
    }

    #[test]
    fn test_eq_ignores_capacity() {
        use core::hash::{Hash, Hasher};
        use std::collections::hash_map::DefaultHasher;

        let mut a = ArrayList::with_capacity(3);
        let mut b = ArrayList::with_capacity(50);
        for x in [1, 2, 3] {
            a.push(x);
            b.push(x);
        }
        assert_ne!(a.capacity(), b.capacity());
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());

        b.push(4);
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut v: ArrayList<i32> = [1, 2, 3].into();
        let mut c = v.clone();
        v[1] = 20;
        c[2] = 30;
        assert_eq!(contents(&v), [1, 20, 3]);
        assert_eq!(contents(&c), [1, 2, 30]);
        assert_eq!(c.capacity(), v.capacity());
    }

    #[test]
    fn test_debug_structure_and_error_display() {
        let v: ArrayList<i32> = [1, 2].into();
        let dbg = format!("{v:?}");
        assert!(dbg.contains("ArrayList"));
        assert!(dbg.contains("len: 2"));
        assert!(dbg.contains("capacity"));
        assert!(dbg.contains("elements: [1, 2]"));

        let err = v.get(99).unwrap_err();
        assert_eq!(format!("{err}"), "Index: 99, Size: 2");
    }
}

#[cfg(test)]
mod proptests {
    // Imports
    use super::ArrayList;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    proptest! {
        /// Property: get(i) returns the i-th pushed element.
        #[test]
        fn push_then_get_in_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut v = ArrayList::new();
            for x in &values {
                v.push(*x);
            }
            prop_assert_eq!(v.len(), values.len());
            for (i, x) in values.iter().enumerate() {
                prop_assert_eq!(v.get(i), Ok(Some(x)));
            }
        }

        /// Property: insert places the element and shifts the tail right.
        #[test]
        fn insert_shifts_tail(
            values in prop::collection::vec(any::<u8>(), 0..32),
            at in any::<prop::sample::Index>(),
            x in any::<u8>(),
        ) {
            let mut v: ArrayList<u8> = values.clone().into();
            let index = at.index(values.len() + 1);
            let mut expected = values.clone();
            expected.insert(index, x);

            match v.insert(index, x) {
                Ok(()) => {
                    prop_assert_eq!(v.get(index), Ok(Some(&x)));
                    prop_assert_eq!(v.iter().copied().collect::<Vec<_>>(), expected);
                }
                // Only possible when appending to a full buffer.
                Err(_) => {
                    prop_assert_eq!(index, v.capacity());
                    prop_assert_eq!(v.iter().copied().collect::<Vec<_>>(), values);
                }
            }
        }

        /// Property: remove returns the element and shifts the tail left.
        #[test]
        fn remove_shifts_tail(
            values in prop::collection::vec(any::<u8>(), 1..32),
            at in any::<prop::sample::Index>(),
        ) {
            let mut v: ArrayList<u8> = values.clone().into();
            let index = at.index(values.len());
            let mut expected = values.clone();
            let removed = expected.remove(index);

            prop_assert_eq!(v.remove(index), Ok(Some(removed)));
            prop_assert_eq!(v.len(), values.len() - 1);
            prop_assert_eq!(v.iter().copied().collect::<Vec<_>>(), expected);
        }
    }
}
