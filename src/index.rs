// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`ArrayList`](crate::ArrayList).
//!
//! `list[i]` mirrors slice behavior and panics for `i >= len()`. Use
//! [`ArrayList::get`](crate::ArrayList::get) for the capacity-based, fallible
//! lookup.

// Crate imports
use crate::vec::ArrayList;

// Core imports
use core::ops::{Index, IndexMut};

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        match self.get(i) {
            Ok(Some(x)) => x,
            _ => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, i
            ),
        }
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        let len = self.len;
        match self.get_mut(i) {
            Ok(Some(x)) => x,
            _ => panic!("index out of bounds: the len is {len} but the index is {i}"),
        }
    }
}
