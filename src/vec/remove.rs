// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::ArrayList};

impl<T> ArrayList<T> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// - `Ok(Some(T))` if `index < len()`; the vacated trailing slot is reset.
    /// - `Ok(None)` if `len() <= index < capacity()`; nothing changes.
    /// - [`Error::IndexOutOfBounds`] if `index >= capacity()`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<Option<T>, Error> {
        self.check_index(index)?;
        if index >= self.len {
            return Ok(None);
        }
        let len = self.len;
        let out = self.buf[index].take();

        // Shift left: [index+1..len) -> [index..len-1); the emptied slot
        // rotates to `len - 1`.
        self.buf[index..len].rotate_left(1);

        self.len = len - 1;
        Ok(out)
    }
}
