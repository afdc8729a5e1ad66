// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::ArrayList};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::iter;

/// Allocates `capacity` vacant slots.
pub(crate) fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ArrayList<T> {
    /// Constructs an empty list with [`DEFAULT_CAPACITY`](ArrayList::DEFAULT_CAPACITY) slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty list with `capacity` slots.
    ///
    /// A requested capacity of `0` is replaced by
    /// [`DEFAULT_CAPACITY`](ArrayList::DEFAULT_CAPACITY).
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            buf: vacant_slots(capacity),
            len: 0,
        }
    }

    /// Signed variant of [`with_capacity`](ArrayList::with_capacity).
    ///
    /// Returns [`Error::InvalidArgument`] if `initial_capacity < 0`.
    #[inline]
    pub fn try_with_capacity(initial_capacity: isize) -> Result<Self, Error> {
        usize::try_from(initial_capacity)
            .map(Self::with_capacity)
            .map_err(|_| Error::InvalidArgument {
                capacity: initial_capacity,
            })
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}
