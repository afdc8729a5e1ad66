// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `ArrayList`.
//!
//! Both errors are raised before any mutation takes place, so a failed call
//! leaves the list (including its capacity) exactly as it was.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`ArrayList`](crate::ArrayList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A negative initial capacity was requested.
    ///
    /// Only returned by [`ArrayList::try_with_capacity`](crate::ArrayList::try_with_capacity).
    InvalidArgument {
        /// The rejected capacity.
        capacity: isize,
    },
    /// An index failed the bounds check.
    ///
    /// Indices are checked against the allocated capacity, so this is raised
    /// for `index >= capacity()`. [`ArrayList::insert`](crate::ArrayList::insert)
    /// also raises it for an index past the logical end.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The logical length at the time of the call.
        size: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { capacity } => write!(f, "Illegal Capacity: {capacity}"),
            Self::IndexOutOfBounds { index, size } => write!(f, "Index: {index}, Size: {size}"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::IndexOutOfBounds { index: 4, size: 1 });
        assert_eq!(s, "Index: 4, Size: 1");
    }

    #[test]
    fn test_invalid_argument_message_carries_value() {
        let e = Error::InvalidArgument { capacity: -7 };
        assert_eq!(e.to_string(), "Illegal Capacity: -7");
    }
}
