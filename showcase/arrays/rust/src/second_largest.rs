//! Second largest distinct element
//!
//! The answer is the largest value strictly below the maximum. Arrays with
//! fewer than two distinct values have no second largest.

use crate::Approach;

pub trait SecondLargest: Approach {
    fn second_largest(&self, data: &[i32]) -> Option<i32>;
}

/// Sort a copy, then walk back from the end until the value changes
pub struct SortThenScan;

approach!(SortThenScan, "sort_then_scan", Brute, time = "O(n log n)", space = "O(n)");

impl SecondLargest for SortThenScan {
    fn second_largest(&self, data: &[i32]) -> Option<i32> {
        let mut sorted = data.to_vec();
        sorted.sort_unstable();
        let largest = *sorted.last()?;
        sorted.iter().rev().copied().find(|&v| v != largest)
    }
}

/// First pass finds the maximum, second pass the best value below it
pub struct TwoPass;

approach!(TwoPass, "two_pass", Better, time = "O(n)", space = "O(1)");

impl SecondLargest for TwoPass {
    fn second_largest(&self, data: &[i32]) -> Option<i32> {
        let largest = data.iter().copied().max()?;
        let mut second: Option<i32> = None;
        for &value in data {
            if value != largest && second.map_or(true, |s| value > s) {
                second = Some(value);
            }
        }
        second
    }
}

/// Track best and second best together; a new best demotes the old one
pub struct SinglePass;

approach!(SinglePass, "single_pass", Optimal, time = "O(n)", space = "O(1)");

impl SecondLargest for SinglePass {
    fn second_largest(&self, data: &[i32]) -> Option<i32> {
        let (&first, rest) = data.split_first()?;
        let mut largest = first;
        let mut second: Option<i32> = None;

        for &value in rest {
            if value > largest {
                second = Some(largest);
                largest = value;
            } else if value < largest && second.map_or(true, |s| value > s) {
                second = Some(value);
            }
        }
        second
    }
}

pub const APPROACHES: [&dyn SecondLargest; 3] = [&SortThenScan, &TwoPass, &SinglePass];
