//! Longest contiguous subarray whose sum equals `k`

use std::collections::HashMap;

use crate::Approach;

pub trait LongestSubarraySum: Approach {
    /// Length of the longest subarray summing to `k`, 0 if there is none
    fn longest_with_sum(&self, data: &[i32], k: i64) -> usize;
}

/// Extend every start index to every end index with a running sum
pub struct AllSubarrays;

approach!(AllSubarrays, "all_subarrays", Brute, time = "O(n^2)", space = "O(1)");

impl LongestSubarraySum for AllSubarrays {
    fn longest_with_sum(&self, data: &[i32], k: i64) -> usize {
        let mut best = 0;
        for i in 0..data.len() {
            let mut sum = 0i64;
            for j in i..data.len() {
                sum += i64::from(data[j]);
                if sum == k {
                    best = best.max(j - i + 1);
                }
            }
        }
        best
    }
}

/// Remember the first index of every prefix sum; a subarray ending at `i`
/// sums to `k` when `prefix - k` was seen before. Handles negatives.
pub struct PrefixSumMap;

approach!(PrefixSumMap, "prefix_sum_map", Better, time = "O(n)", space = "O(n)");

impl LongestSubarraySum for PrefixSumMap {
    fn longest_with_sum(&self, data: &[i32], k: i64) -> usize {
        let mut first_seen: HashMap<i64, usize> = HashMap::new();
        let mut prefix = 0i64;
        let mut best = 0;

        for (i, &value) in data.iter().enumerate() {
            prefix += i64::from(value);

            if prefix == k {
                best = best.max(i + 1);
            }
            if let Some(&j) = prefix.checked_sub(k).and_then(|need| first_seen.get(&need)) {
                best = best.max(i - j);
            }
            // Keep the leftmost index so later subarrays stay as long as possible
            first_seen.entry(prefix).or_insert(i);
        }
        best
    }
}

/// Grow on the right, shrink on the left while the sum is too big.
/// Only valid when every element is non-negative.
pub struct SlidingWindow;

approach!(SlidingWindow, "sliding_window", Optimal, time = "O(n)", space = "O(1)");

impl LongestSubarraySum for SlidingWindow {
    fn longest_with_sum(&self, data: &[i32], k: i64) -> usize {
        let mut left = 0;
        let mut sum = 0i64;
        let mut best = 0;

        for right in 0..data.len() {
            sum += i64::from(data[right]);
            while sum > k && left <= right {
                sum -= i64::from(data[left]);
                left += 1;
            }
            if sum == k && left <= right {
                best = best.max(right - left + 1);
            }
        }
        best
    }
}

pub const APPROACHES: [&dyn LongestSubarraySum; 3] = [&AllSubarrays, &PrefixSumMap, &SlidingWindow];
