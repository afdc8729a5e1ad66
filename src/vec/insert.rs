// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::ArrayList};

impl<T> ArrayList<T> {
    /// Inserts `value` at `index`, shifting elements to the right.
    ///
    /// - Returns [`Error::IndexOutOfBounds`] if `index >= capacity()`. This
    ///   check runs before growth, so inserting at `len() == capacity()`
    ///   fails even though [`push`](ArrayList::push) would succeed.
    /// - Returns [`Error::IndexOutOfBounds`] if `index > len()`.
    ///
    /// The list is untouched on error.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.check_index(index)?;
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.len,
            });
        }
        self.grow_for(self.len + 1);
        let len = self.len;

        // Shift right: [index..len) -> [index+1..len+1); the vacant slot at
        // `len` rotates into `index`.
        self.buf[index..=len].rotate_right(1);
        self.buf[index] = Some(value);

        self.len = len + 1;
        Ok(())
    }
}
