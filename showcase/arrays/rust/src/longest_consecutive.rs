//! Longest run of consecutive integers formable from a set of values

use std::collections::HashSet;

use crate::Approach;

pub trait LongestConsecutive: Approach {
    /// Length of the longest `x, x+1, ..., x+k` all present in `data`.
    /// Duplicates count once; 0 for an empty slice.
    fn longest_consecutive(&self, data: &[i32]) -> usize;
}

/// From every value, keep searching the whole slice for the next one
pub struct LinearProbe;

approach!(LinearProbe, "linear_probe", Brute, time = "O(n^3)", space = "O(1)");

impl LongestConsecutive for LinearProbe {
    fn longest_consecutive(&self, data: &[i32]) -> usize {
        let mut longest = 0;
        for &start in data {
            let mut x = start;
            let mut run = 1;
            while let Some(next) = x.checked_add(1).filter(|n| data.contains(n)) {
                x = next;
                run += 1;
            }
            longest = longest.max(run);
        }
        longest
    }
}

/// Sort a copy so runs become neighbours; duplicates neither extend nor break
pub struct SortThenCount;

approach!(SortThenCount, "sort_then_count", Better, time = "O(n log n)", space = "O(n)");

impl LongestConsecutive for SortThenCount {
    fn longest_consecutive(&self, data: &[i32]) -> usize {
        let mut sorted = data.to_vec();
        sorted.sort_unstable();

        let Some((&first, rest)) = sorted.split_first() else {
            return 0;
        };
        let mut previous = first;
        let mut current = 1;
        let mut longest = 1;
        for &value in rest {
            if previous.checked_add(1) == Some(value) {
                current += 1;
            } else if value != previous {
                current = 1;
            }
            previous = value;
            longest = longest.max(current);
        }
        longest
    }
}

/// Only count upwards from values whose predecessor is absent
pub struct HashSetRuns;

approach!(HashSetRuns, "hash_set_runs", Optimal, time = "O(n)", space = "O(n)");

impl LongestConsecutive for HashSetRuns {
    fn longest_consecutive(&self, data: &[i32]) -> usize {
        let values: HashSet<i32> = data.iter().copied().collect();
        let mut longest = 0;

        for &x in &values {
            let is_head = x.checked_sub(1).map_or(true, |prev| !values.contains(&prev));
            if !is_head {
                continue;
            }
            let mut run = 1;
            let mut current = x;
            while let Some(next) = current.checked_add(1).filter(|n| values.contains(n)) {
                current = next;
                run += 1;
            }
            longest = longest.max(run);
        }
        longest
    }
}

pub const APPROACHES: [&dyn LongestConsecutive; 3] = [&LinearProbe, &SortThenCount, &HashSetRuns];
