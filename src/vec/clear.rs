// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::ArrayList;

impl<T> ArrayList<T> {
    /// Drops every element and sets `len = 0`. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.fill_with(|| None);
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::ArrayList;
    use alloc::rc::Rc;

    #[test]
    fn test_clear_then_reuse() {
        let mut v: ArrayList<i32> = ArrayList::new();
        for x in 0..12 {
            v.push(x);
        }
        let cap = v.capacity();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), cap);
        v.push(9);
        assert_eq!(v.get(0), Ok(Some(&9)));
        assert_eq!(v.get(1), Ok(None));
    }

    #[test]
    fn test_clear_drops_elements() {
        let tracked = Rc::new(());
        let mut v = ArrayList::new();
        v.push(Rc::clone(&tracked));
        v.push(Rc::clone(&tracked));
        v.clear();
        assert_eq!(Rc::strong_count(&tracked), 1);
    }
}
