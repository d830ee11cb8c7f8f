//! Remove duplicates from a sorted array
//!
//! After `dedup` returns `k`, `data[..k]` holds each distinct value once, in
//! ascending order. Slots past `k` are unspecified.

use std::collections::BTreeSet;

use crate::Approach;

pub trait RemoveDuplicates: Approach {
    /// `data` must be sorted ascending. Returns the number of distinct values.
    fn dedup(&self, data: &mut [i32]) -> usize;
}

/// Collect into an ordered set and copy back
pub struct OrderedSet;

approach!(OrderedSet, "ordered_set", Brute, time = "O(n log n)", space = "O(n)");

impl RemoveDuplicates for OrderedSet {
    fn dedup(&self, data: &mut [i32]) -> usize {
        let unique: BTreeSet<i32> = data.iter().copied().collect();
        for (slot, value) in data.iter_mut().zip(&unique) {
            *slot = *value;
        }
        unique.len()
    }
}

/// Copy each value into a buffer when the next one differs
pub struct TempBuffer;

approach!(TempBuffer, "temp_buffer", Better, time = "O(n)", space = "O(n)");

impl RemoveDuplicates for TempBuffer {
    fn dedup(&self, data: &mut [i32]) -> usize {
        let Some(&last) = data.last() else {
            return 0;
        };

        let mut buffer = Vec::with_capacity(data.len());
        for pair in data.windows(2) {
            if pair[0] != pair[1] {
                buffer.push(pair[0]);
            }
        }
        // The final run is closed by the last element
        buffer.push(last);

        data[..buffer.len()].copy_from_slice(&buffer);
        buffer.len()
    }
}

/// `write` trails the last unique value; `read` looks for the next one
pub struct TwoPointers;

approach!(TwoPointers, "two_pointers", Optimal, time = "O(n)", space = "O(1)");

impl RemoveDuplicates for TwoPointers {
    fn dedup(&self, data: &mut [i32]) -> usize {
        if data.is_empty() {
            return 0;
        }

        let mut write = 0;
        for read in 1..data.len() {
            if data[read] != data[write] {
                write += 1;
                data[write] = data[read];
            }
        }
        write + 1
    }
}

pub const APPROACHES: [&dyn RemoveDuplicates; 3] = [&OrderedSet, &TempBuffer, &TwoPointers];
