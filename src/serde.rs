// This file is part of growable-array-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`ArrayList`](crate::ArrayList).
//!
//! - **Serialize**: as a sequence of the `len()` live elements. Capacity is
//!   not part of the serialized form.
//! - **Deserialize**: from any sequence, pushing each element. A size hint
//!   from the format seeds the initial capacity (bounded, so a hostile hint
//!   cannot force a huge allocation up front).

// Crate imports
use crate::vec::ArrayList;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

/// Upper bound on the capacity taken from a format's size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for ArrayList<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for ListVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = ArrayList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = ArrayList::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for ArrayList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor::<T>(PhantomData))
    }
}
