use array_problems::approach;

use crate::SortedSearch;

/// Walk the slice front to back - the O(n) reference answer
pub struct LinearScan;

approach!(LinearScan, "linear_scan", Brute, time = "O(n)", space = "O(1)");

impl SortedSearch for LinearScan {
    fn find(&self, data: &[i32], target: i32) -> Option<usize> {
        data.iter().position(|&v| v == target)
    }

    fn lower_bound(&self, data: &[i32], target: i32) -> usize {
        data.iter().position(|&v| v >= target).unwrap_or(data.len())
    }

    fn upper_bound(&self, data: &[i32], target: i32) -> usize {
        data.iter().position(|&v| v > target).unwrap_or(data.len())
    }

    fn first_occurrence(&self, data: &[i32], target: i32) -> Option<usize> {
        data.iter().position(|&v| v == target)
    }

    fn last_occurrence(&self, data: &[i32], target: i32) -> Option<usize> {
        data.iter().rposition(|&v| v == target)
    }
}

/// Standard library `binary_search` and `partition_point`
pub struct StdSlice;

approach!(StdSlice, "std_slice", Better, time = "O(log n)", space = "O(1)");

impl SortedSearch for StdSlice {
    fn find(&self, data: &[i32], target: i32) -> Option<usize> {
        data.binary_search(&target).ok()
    }

    fn lower_bound(&self, data: &[i32], target: i32) -> usize {
        data.partition_point(|&v| v < target)
    }

    fn upper_bound(&self, data: &[i32], target: i32) -> usize {
        data.partition_point(|&v| v <= target)
    }

    fn first_occurrence(&self, data: &[i32], target: i32) -> Option<usize> {
        let i = self.lower_bound(data, target);
        (data.get(i) == Some(&target)).then_some(i)
    }

    fn last_occurrence(&self, data: &[i32], target: i32) -> Option<usize> {
        let i = self.upper_bound(data, target).checked_sub(1)?;
        (data[i] == target).then_some(i)
    }
}
