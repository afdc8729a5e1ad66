// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::ArrayList;

// Alloc imports
use alloc::vec::Vec;

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut v = Self::with_capacity(iter.size_hint().0);
        v.extend(iter);
        v
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(src: Vec<T>) -> Self {
        src.into_iter().collect()
    }
}

impl<T, const M: usize> From<[T; M]> for ArrayList<T> {
    fn from(src: [T; M]) -> Self {
        src.into_iter().collect()
    }
}
