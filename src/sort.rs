// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-place quicksort for [`ArrayList`](crate::ArrayList).
//!
//! A plain Lomuto-style quicksort: the last element of each range is the
//! pivot, elements that belong before it are swapped to the front, and the
//! pivot is finally swapped into place. There is no pivot randomisation, so
//! sorted and reverse-sorted inputs take `O(n²)` comparisons. The sort is
//! unstable.
//!
//! The two ordering modes are separate [`Comparison`] impls, so natural-order
//! sorting is only available when `T: Ord`.

// Crate imports
use crate::vec::ArrayList;

// Core imports
use core::{cmp::Ordering, mem};

/// Decides whether an element belongs in front of the pivot.
trait Comparison<T> {
    fn precedes_pivot(&mut self, elem: &T, pivot: &T) -> bool;
}

/// The element type's own `Ord`.
struct Natural;

impl<T: Ord> Comparison<T> for Natural {
    #[inline]
    fn precedes_pivot(&mut self, elem: &T, pivot: &T) -> bool {
        // pivot >= elem
        pivot.cmp(elem) != Ordering::Less
    }
}

/// A caller-supplied comparator.
struct Comparator<F>(F);

impl<T, F: FnMut(&T, &T) -> Ordering> Comparison<T> for Comparator<F> {
    #[inline]
    fn precedes_pivot(&mut self, elem: &T, pivot: &T) -> bool {
        // compare(elem, pivot) <= 0
        (self.0)(elem, pivot) != Ordering::Greater
    }
}

/// Partitions `slots` around its last element and returns the pivot's final index.
fn partition<T, C: Comparison<T>>(slots: &mut [Option<T>], cmp: &mut C) -> usize {
    let high = slots.len() - 1;
    let mut store = 0;
    for j in 0..high {
        let (Some(elem), Some(pivot)) = (&slots[j], &slots[high]) else {
            unreachable!("vacant slot inside the live prefix");
        };
        if cmp.precedes_pivot(elem, pivot) {
            slots.swap(store, j);
            store += 1;
        }
    }
    slots.swap(store, high);
    store
}

/// Sorts `slots` in place.
///
/// The range left of the pivot is always sorted before the range right of
/// it. The left side recurses; the right side is the loop's next iteration.
fn quick_sort<T, C: Comparison<T>>(mut slots: &mut [Option<T>], cmp: &mut C) {
    while slots.len() > 1 {
        let p = partition(slots, cmp);
        let (left, rest) = mem::take(&mut slots).split_at_mut(p);
        quick_sort(left, cmp);
        slots = &mut rest[1..];
    }
}

impl<T> ArrayList<T> {
    /// Sorts the list in ascending natural order.
    ///
    /// Unstable; `O(n log n)` on average, `O(n²)` on sorted or
    /// reverse-sorted input.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        let len = self.len;
        quick_sort(&mut self.buf[..len], &mut Natural);
    }

    /// Sorts the list with `compare`, placing `a` before `b` when
    /// `compare(a, b)` is `Less` or `Equal`.
    ///
    /// `compare` is always called as `compare(element, pivot)`. After each
    /// partition the range left of the pivot is sorted completely before the
    /// range right of it, so a stateful comparator sees calls in that order.
    ///
    /// Passing a reversed comparator yields descending order:
    ///
    /// ```rust
    /// use growable_array_list::ArrayList;
    ///
    /// let mut v: ArrayList<i32> = [3, 1, 2].into();
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len;
        quick_sort(&mut self.buf[..len], &mut Comparator(compare));
    }

    /// Sorts the list by the key `f` extracts, in ascending key order.
    ///
    /// The key is recomputed for every comparison.
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)));
    }
}
