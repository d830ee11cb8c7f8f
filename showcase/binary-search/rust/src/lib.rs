//! Sorted Search Showcase
//!
//! Binary search and its boundary variants (lower bound, upper bound,
//! insert position, first and last occurrence) over ascending `i32` slices.
//! Every searcher answers the same questions so they can be checked and
//! timed against each other.
//!
//! All methods assume `data` is sorted ascending; on unsorted input the
//! answers are unspecified but never panic.

pub mod baselines;
pub mod bisection;

pub use array_problems::{Approach, Complexity, Tier};
pub use baselines::{LinearScan, StdSlice};
pub use bisection::Bisection;

/// Trait for searching a sorted slice
pub trait SortedSearch: Approach {
    /// Some index holding `target`, not necessarily the first
    fn find(&self, data: &[i32], target: i32) -> Option<usize>;

    /// Smallest `i` with `data[i] >= target`, or `data.len()`
    fn lower_bound(&self, data: &[i32], target: i32) -> usize;

    /// Smallest `i` with `data[i] > target`, or `data.len()`
    fn upper_bound(&self, data: &[i32], target: i32) -> usize;

    fn first_occurrence(&self, data: &[i32], target: i32) -> Option<usize>;

    fn last_occurrence(&self, data: &[i32], target: i32) -> Option<usize>;

    /// Index of `target` if present, otherwise where it would be inserted
    /// to keep `data` sorted
    fn search_insert(&self, data: &[i32], target: i32) -> usize {
        self.lower_bound(data, target)
    }

    /// Inclusive `(first, last)` indices of `target`
    fn occurrence_range(&self, data: &[i32], target: i32) -> Option<(usize, usize)> {
        let first = self.first_occurrence(data, target)?;
        let last = self.last_occurrence(data, target)?;
        Some((first, last))
    }

    fn count_occurrences(&self, data: &[i32], target: i32) -> usize {
        self.occurrence_range(data, target)
            .map_or(0, |(first, last)| last - first + 1)
    }
}

pub const SEARCHERS: [&dyn SortedSearch; 3] = [&LinearScan, &StdSlice, &Bisection];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn test_searcher<S: SortedSearch>(s: &S) {
        // Find
        assert_eq!(s.find(&[1, 2, 5, 7, 9, 11], 7), Some(3));
        assert_eq!(s.find(&[1, 2, 5, 7, 9, 11], 8), None);
        assert_eq!(s.find(&[1, 2, 5, 7, 9, 11], 0), None);
        assert_eq!(s.find(&[1, 2, 5, 7, 9, 11], 12), None);
        assert_eq!(s.find(&[4], 4), Some(0));
        assert_eq!(s.find(&[], 4), None);

        // Lower bound
        assert_eq!(s.lower_bound(&[1, 2, 5, 6, 6, 7, 8], 8), 6);
        assert_eq!(s.lower_bound(&[1, 2, 5, 6, 6, 7, 8], 6), 3);
        assert_eq!(s.lower_bound(&[1, 2, 5, 6, 6, 7, 8], 0), 0);
        assert_eq!(s.lower_bound(&[1, 2, 5, 6, 6, 7, 8], 9), 7);
        assert_eq!(s.lower_bound(&[], 9), 0);

        // Upper bound
        assert_eq!(s.upper_bound(&[1, 2, 5, 7, 7, 8, 8], 7), 5);
        assert_eq!(s.upper_bound(&[1, 2, 5, 7, 7, 8, 8], 8), 7);
        assert_eq!(s.upper_bound(&[1, 2, 5, 7, 7, 8, 8], 0), 0);
        assert_eq!(s.upper_bound(&[1, 2, 5, 7, 7, 8, 8], 6), 3);

        // Search insert
        assert_eq!(s.search_insert(&[1, 2, 4, 4, 5, 6], 4), 2);
        assert_eq!(s.search_insert(&[1, 2, 4, 4, 5], 3), 2);
        assert_eq!(s.search_insert(&[1, 2, 4, 4, 5], 6), 5);

        // First and last occurrence
        let data = [1, 2, 3, 5, 5, 5, 6, 8];
        assert_eq!(s.first_occurrence(&data, 5), Some(3));
        assert_eq!(s.last_occurrence(&data, 5), Some(5));
        assert_eq!(s.occurrence_range(&data, 5), Some((3, 5)));
        assert_eq!(s.count_occurrences(&data, 5), 3);
        assert_eq!(s.occurrence_range(&data, 8), Some((7, 7)));
        assert_eq!(s.occurrence_range(&data, 4), None);
        assert_eq!(s.count_occurrences(&data, 4), 0);

        // Extremes
        let data = [i32::MIN, i32::MIN, 0, i32::MAX];
        assert_eq!(s.first_occurrence(&data, i32::MIN), Some(0));
        assert_eq!(s.last_occurrence(&data, i32::MAX), Some(3));
        assert_eq!(s.upper_bound(&data, i32::MAX), 4);
    }

    #[test]
    fn test_linear_scan() { test_searcher(&LinearScan); }

    #[test]
    fn test_std_slice() { test_searcher(&StdSlice); }

    #[test]
    fn test_bisection() { test_searcher(&Bisection); }

    #[test]
    fn test_tiers() {
        let tiers: Vec<Tier> = SEARCHERS.iter().map(|s| s.tier()).collect();
        assert_eq!(tiers, [Tier::Brute, Tier::Better, Tier::Optimal]);
        assert_eq!(Bisection.complexity().time, "O(log n)");

        let names: Vec<&str> = SEARCHERS.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["linear_scan", "std_slice", "bisection"]);
        assert_eq!(LinearScan.complexity(), Complexity { time: "O(n)", space: "O(1)" });
        assert_eq!(StdSlice.complexity().space, "O(1)");
    }

    #[test]
    fn test_random_against_linear_scan() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..500 {
            let len = rng.gen_range(0..40);
            // Narrow range for long duplicate runs
            let mut data: Vec<i32> = (0..len).map(|_| rng.gen_range(-10..10)).collect();
            data.sort_unstable();

            for target in -12..12 {
                let lower = LinearScan.lower_bound(&data, target);
                let upper = LinearScan.upper_bound(&data, target);
                let range = LinearScan.occurrence_range(&data, target);

                for s in SEARCHERS {
                    assert_eq!(s.lower_bound(&data, target), lower, "{} lower {:?} {}", s.name(), data, target);
                    assert_eq!(s.upper_bound(&data, target), upper, "{} upper {:?} {}", s.name(), data, target);
                    assert_eq!(s.occurrence_range(&data, target), range, "{} range {:?} {}", s.name(), data, target);
                    assert_eq!(s.count_occurrences(&data, target), upper - lower);

                    match s.find(&data, target) {
                        Some(i) => assert_eq!(data[i], target),
                        None => assert!(range.is_none(), "{} missed {} in {:?}", s.name(), target, data),
                    }
                }
            }
        }
    }
}
