//! Maximum subarray sum, with the subarray's bounds

use serde::Serialize;

use crate::Approach;

/// A non-empty contiguous run `data[start..=end]` and its sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subarray {
    pub sum: i64,
    pub start: usize,
    pub end: usize,
}

impl Subarray {
    /// The elements covered, taken from the slice the subarray was found in
    pub fn elements<'a>(&self, data: &'a [i32]) -> &'a [i32] {
        &data[self.start..=self.end]
    }
}

pub trait MaxSubarray: Approach {
    /// `None` only for an empty slice. Among subarrays with the best sum,
    /// the one with the earliest start wins, then the shortest.
    fn max_subarray(&self, data: &[i32]) -> Option<Subarray>;
}

/// Running sum from every start index
pub struct AllSubarrays;

approach!(AllSubarrays, "all_subarrays", Brute, time = "O(n^2)", space = "O(1)");

impl MaxSubarray for AllSubarrays {
    fn max_subarray(&self, data: &[i32]) -> Option<Subarray> {
        let mut best: Option<Subarray> = None;
        for start in 0..data.len() {
            let mut sum = 0i64;
            for end in start..data.len() {
                sum += i64::from(data[end]);
                if best.map_or(true, |b| sum > b.sum) {
                    best = Some(Subarray { sum, start, end });
                }
            }
        }
        best
    }
}

/// Kadane: drop the running sum once it goes negative and start the next
/// run just after it. A run that only returns to 0 keeps its start.
pub struct Kadane;

approach!(Kadane, "kadane", Optimal, time = "O(n)", space = "O(1)");

impl MaxSubarray for Kadane {
    fn max_subarray(&self, data: &[i32]) -> Option<Subarray> {
        let mut best: Option<Subarray> = None;
        let mut current = 0i64;
        let mut start = 0;

        for (i, &value) in data.iter().enumerate() {
            current += i64::from(value);

            if best.map_or(true, |b| current > b.sum) {
                best = Some(Subarray { sum: current, start, end: i });
            }
            if current < 0 {
                current = 0;
                start = i + 1;
            }
        }
        best
    }
}

pub const APPROACHES: [&dyn MaxSubarray; 2] = [&AllSubarrays, &Kadane];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn test_max_subarray<M: MaxSubarray>(m: &M) {
        let data = [-2, -3, 1, 5, -3, 7, -1];
        let best = m.max_subarray(&data).unwrap();
        assert_eq!(best, Subarray { sum: 10, start: 2, end: 5 });
        assert_eq!(best.elements(&data), &[1, 5, -3, 7]);
        assert_eq!(best.elements(&data).len(), 4);

        assert_eq!(m.max_subarray(&[-2, -1, 5, -3, 7]).map(|s| s.sum), Some(9));

        // Maximum at the very first element
        assert_eq!(m.max_subarray(&[5, -10, 1]), Some(Subarray { sum: 5, start: 0, end: 0 }));

        // All negative: best single element
        assert_eq!(m.max_subarray(&[-8, -3, -6]), Some(Subarray { sum: -3, start: 1, end: 1 }));

        assert_eq!(m.max_subarray(&[]), None);

        // Leading zeros and zero-sum prefixes belong to the earliest start
        assert_eq!(m.max_subarray(&[0, 3]), Some(Subarray { sum: 3, start: 0, end: 1 }));
        assert_eq!(m.max_subarray(&[2, -2, 3]), Some(Subarray { sum: 3, start: 0, end: 2 }));
        // ...but trailing zeros do not lengthen it
        assert_eq!(m.max_subarray(&[4, 0, 0]), Some(Subarray { sum: 4, start: 0, end: 0 }));
        assert_eq!(m.max_subarray(&[0, 0]), Some(Subarray { sum: 0, start: 0, end: 0 }));

        let big = [i32::MAX, i32::MAX];
        assert_eq!(m.max_subarray(&big).map(|s| s.sum), Some(2 * i64::from(i32::MAX)));
    }

    #[test]
    fn test_all_subarrays() { test_max_subarray(&AllSubarrays); }

    #[test]
    fn test_kadane() { test_max_subarray(&Kadane); }

    #[test]
    fn test_random_agreement() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(18);
        for _ in 0..300 {
            let len = rng.gen_range(1..40);
            // Small range so zero sums and ties come up often
            let data: Vec<i32> = (0..len).map(|_| rng.gen_range(-4..5)).collect();
            let expected = AllSubarrays.max_subarray(&data).unwrap();
            let got = Kadane.max_subarray(&data).unwrap();

            assert_eq!(got, expected, "input {:?}", data);
            let covered: i64 = got.elements(&data).iter().map(|&v| i64::from(v)).sum();
            assert_eq!(covered, got.sum);
        }
    }
}
