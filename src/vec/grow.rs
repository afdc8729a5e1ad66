// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{ArrayList, new::vacant_slots};

impl<T> ArrayList<T> {
    /// Ensures room for at least `additional` more elements, using the same
    /// growth rule as [`push`](ArrayList::push).
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.grow_for(self.len.saturating_add(additional));
    }

    /// Grows the buffer so that `capacity() >= min_capacity`.
    ///
    /// The new capacity is `old + old / 2`, or `min_capacity` if that is
    /// larger. Elements are moved into the new buffer; the old one is freed.
    pub(crate) fn grow_for(&mut self, min_capacity: usize) {
        let old_capacity = self.buf.len();
        if min_capacity <= old_capacity {
            return;
        }
        let new_capacity = old_capacity
            .saturating_add(old_capacity >> 1)
            .max(min_capacity);

        let mut buf = vacant_slots(new_capacity);
        for (dst, src) in buf.iter_mut().zip(&mut self.buf[..self.len]) {
            *dst = src.take();
        }
        self.buf = buf;
    }
}
