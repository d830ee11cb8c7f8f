//! Largest element of an array

use crate::Approach;

pub trait LargestElement: Approach {
    /// Returns the maximum value, or `None` for an empty slice
    fn largest(&self, data: &[i32]) -> Option<i32>;
}

/// Every element is compared against every other; the one nothing beats wins
pub struct PairwiseScan;

approach!(PairwiseScan, "pairwise_scan", Brute, time = "O(n^2)", space = "O(1)");

impl LargestElement for PairwiseScan {
    fn largest(&self, data: &[i32]) -> Option<i32> {
        data.iter()
            .copied()
            .find(|&candidate| !data.iter().any(|&other| other > candidate))
    }
}

/// Sort a copy and take the last element
pub struct SortThenLast;

approach!(SortThenLast, "sort_then_last", Better, time = "O(n log n)", space = "O(n)");

impl LargestElement for SortThenLast {
    fn largest(&self, data: &[i32]) -> Option<i32> {
        let mut sorted = data.to_vec();
        sorted.sort_unstable();
        sorted.last().copied()
    }
}

/// Running maximum in one pass
pub struct SinglePass;

approach!(SinglePass, "single_pass", Optimal, time = "O(n)", space = "O(1)");

impl LargestElement for SinglePass {
    fn largest(&self, data: &[i32]) -> Option<i32> {
        let (&first, rest) = data.split_first()?;
        let mut largest = first;
        for &value in rest {
            if value > largest {
                largest = value;
            }
        }
        Some(largest)
    }
}

pub const APPROACHES: [&dyn LargestElement; 3] = [&PairwiseScan, &SortThenLast, &SinglePass];
