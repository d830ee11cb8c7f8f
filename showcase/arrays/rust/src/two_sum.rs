//! Two sum: do two elements at different positions add up to `target`?

use std::collections::HashSet;

use crate::Approach;

pub trait TwoSum: Approach {
    /// A pair of values summing to `target`, reported as `(smaller, larger)`
    fn find_pair(&self, data: &[i32], target: i32) -> Option<(i32, i32)>;

    fn has_pair(&self, data: &[i32], target: i32) -> bool {
        self.find_pair(data, target).is_some()
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    (a.min(b), a.max(b))
}

/// Try every `i < j`
pub struct AllPairs;

approach!(AllPairs, "all_pairs", Brute, time = "O(n^2)", space = "O(1)");

impl TwoSum for AllPairs {
    fn find_pair(&self, data: &[i32], target: i32) -> Option<(i32, i32)> {
        let target = i64::from(target);
        for i in 0..data.len() {
            for j in i + 1..data.len() {
                if i64::from(data[i]) + i64::from(data[j]) == target {
                    return Some(ordered(data[i], data[j]));
                }
            }
        }
        None
    }
}

/// Look up the complement among values already seen
pub struct SeenSet;

approach!(SeenSet, "seen_set", Better, time = "O(n)", space = "O(n)");

impl TwoSum for SeenSet {
    fn find_pair(&self, data: &[i32], target: i32) -> Option<(i32, i32)> {
        let mut seen: HashSet<i64> = HashSet::with_capacity(data.len());
        for &value in data {
            let needed = i64::from(target) - i64::from(value);
            if seen.contains(&needed) {
                // `needed` was inserted from an i32, so it fits
                return Some(ordered(value, needed as i32));
            }
            seen.insert(i64::from(value));
        }
        None
    }
}

/// Sort a copy and close in from both ends
pub struct SortedTwoPointers;

approach!(SortedTwoPointers, "sorted_two_pointers", Optimal, time = "O(n log n)", space = "O(n)");

impl TwoSum for SortedTwoPointers {
    fn find_pair(&self, data: &[i32], target: i32) -> Option<(i32, i32)> {
        if data.len() < 2 {
            return None;
        }
        let mut sorted = data.to_vec();
        sorted.sort_unstable();

        let target = i64::from(target);
        let (mut start, mut end) = (0, sorted.len() - 1);
        while start < end {
            let sum = i64::from(sorted[start]) + i64::from(sorted[end]);
            if sum == target {
                return Some((sorted[start], sorted[end]));
            } else if sum < target {
                start += 1;
            } else {
                end -= 1;
            }
        }
        None
    }
}

pub const APPROACHES: [&dyn TwoSum; 3] = [&AllPairs, &SeenSet, &SortedTwoPointers];
