// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-array-list`
//!
//! A `no_std`, heap-backed, growable array list **with no `unsafe`**.
//!
//! The core type, [`ArrayList<T>`], owns a contiguous buffer of element slots
//! whose length is the list's *capacity*, and tracks a logical length
//! `len ∈ 0..=capacity`. It supports appending, indexed insertion and
//! removal, and an in-place quicksort driven either by the element type's
//! natural order or by a caller-supplied comparator.
//!
//! ## Capacity growth
//!
//! - [`ArrayList::new`] starts with [`ArrayList::DEFAULT_CAPACITY`] (10) slots.
//! - [`ArrayList::with_capacity`] uses the requested capacity, substituting the
//!   default for `0`. [`ArrayList::try_with_capacity`] takes a signed value and
//!   rejects negatives with [`Error::InvalidArgument`].
//! - When an operation needs more room, the capacity becomes
//!   `old + old / 2`, or exactly the required minimum if that is still too
//!   small. Growth allocates a fresh buffer and moves every element across.
//! - The capacity never shrinks, not even on [`ArrayList::clear`].
//!
//! ## Bounds policy
//!
//! [`ArrayList::get`], [`ArrayList::insert`] and [`ArrayList::remove`] check the
//! requested index against the **allocated capacity**, not the logical
//! length:
//!
//! - `index >= capacity()` → [`Error::IndexOutOfBounds`].
//! - `len() <= index < capacity()` passes the check but names a vacant slot.
//!   `get` and `remove` report it as `Ok(None)`; `insert` rejects any index
//!   past `len()` because it would leave a gap.
//!
//! Indexing with `list[i]` follows slice semantics instead and panics for
//! `i >= len()`.
//!
//! ## Sorting
//!
//! - [`ArrayList::sort`] sorts by natural order and requires `T: Ord`.
//! - [`ArrayList::sort_by`] and [`ArrayList::sort_by_key`] take a comparator or
//!   a key extractor.
//!
//! Both use the same recursive quicksort with the last element of each range
//! as the pivot. The sort is unstable and degrades to `O(n²)` on already
//! sorted or reverse-sorted input.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `ArrayList<T>`, as a sequence
//!     of the `len()` live elements.
//!
//! ## Example
//!
//! ```rust
//! use growable_array_list::ArrayList;
//!
//! let mut v: ArrayList<i32> = ArrayList::new();
//! v.push(3);
//! v.push(1);
//! v.insert(1, 2).unwrap();
//! assert_eq!(v.get(1), Ok(Some(&2)));
//!
//! v.sort();
//! assert_eq!(v.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! v.sort_by(|a, b| b.cmp(a));
//! assert_eq!(v.remove(0), Ok(Some(3)));
//! assert_eq!(v.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod sort;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};
pub use vec::ArrayList;
