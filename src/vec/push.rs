// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::ArrayList;

impl<T> ArrayList<T> {
    /// Appends `value`, growing the buffer if it is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.grow_for(self.len + 1);
        self.buf[self.len] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the last element, if any.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.buf[self.len].take()
    }
}
