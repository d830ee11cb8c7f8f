use std::cmp::Ordering;

use array_problems::approach;

use crate::SortedSearch;

/// Hand-written halving search.
///
/// Every loop keeps a half-open window `[low, high)` that still may hold
/// the answer, so no index ever goes below zero. The boundary searches
/// record the best candidate seen so far and keep narrowing past it.
pub struct Bisection;

impl Bisection {
    /// Smallest index whose value satisfies `pred`, assuming `pred` is
    /// false then true across the slice
    fn first_where(data: &[i32], pred: impl Fn(i32) -> bool) -> usize {
        let mut low = 0;
        let mut high = data.len();
        let mut answer = data.len();

        while low < high {
            let mid = low + (high - low) / 2;
            if pred(data[mid]) {
                answer = mid;
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        answer
    }
}

approach!(Bisection, "bisection", Optimal, time = "O(log n)", space = "O(1)");

impl SortedSearch for Bisection {
    fn find(&self, data: &[i32], target: i32) -> Option<usize> {
        let mut low = 0;
        let mut high = data.len();

        while low < high {
            let mid = low + (high - low) / 2;
            match data[mid].cmp(&target) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        None
    }

    fn lower_bound(&self, data: &[i32], target: i32) -> usize {
        Self::first_where(data, |v| v >= target)
    }

    fn upper_bound(&self, data: &[i32], target: i32) -> usize {
        Self::first_where(data, |v| v > target)
    }

    fn first_occurrence(&self, data: &[i32], target: i32) -> Option<usize> {
        let mut low = 0;
        let mut high = data.len();
        let mut first = None;

        while low < high {
            let mid = low + (high - low) / 2;
            match data[mid].cmp(&target) {
                Ordering::Equal => {
                    first = Some(mid);
                    high = mid;
                }
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        first
    }

    fn last_occurrence(&self, data: &[i32], target: i32) -> Option<usize> {
        let mut low = 0;
        let mut high = data.len();
        let mut last = None;

        while low < high {
            let mid = low + (high - low) / 2;
            match data[mid].cmp(&target) {
                Ordering::Equal => {
                    last = Some(mid);
                    low = mid + 1;
                }
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_where_on_all_false_and_all_true() {
        let data = [1, 2, 3];
        assert_eq!(Bisection::first_where(&data, |v| v > 10), 3);
        assert_eq!(Bisection::first_where(&data, |v| v > -10), 0);
        assert_eq!(Bisection::first_where(&[], |v| v > 0), 0);
    }

    #[test]
    fn test_large_duplicate_run() {
        let mut data = vec![0; 10_000];
        data.extend(vec![1; 10_000]);
        assert_eq!(Bisection.occurrence_range(&data, 0), Some((0, 9_999)));
        assert_eq!(Bisection.occurrence_range(&data, 1), Some((10_000, 19_999)));
        assert_eq!(Bisection.count_occurrences(&data, 1), 10_000);
        assert_eq!(Bisection.search_insert(&data, 1), 10_000);
    }
}
