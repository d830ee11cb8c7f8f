//! Numbers that appear exactly once
//!
//! The classic form: every value appears twice except one. `CountEach` and
//! `FrequencyMap` also work without that guarantee; `XorFold` does not.

use std::collections::BTreeMap;

use crate::Approach;

pub trait SingleNumber: Approach {
    fn single(&self, data: &[i32]) -> Option<i32>;
}

/// First element whose count over the whole array is 1
pub struct CountEach;

approach!(CountEach, "count_each", Brute, time = "O(n^2)", space = "O(1)");

impl SingleNumber for CountEach {
    fn single(&self, data: &[i32]) -> Option<i32> {
        data.iter()
            .copied()
            .find(|&x| data.iter().filter(|&&y| y == x).count() == 1)
    }
}

/// Ordered frequency table
pub struct FrequencyMap;

approach!(FrequencyMap, "frequency_map", Better, time = "O(n log n)", space = "O(n)");

impl FrequencyMap {
    /// Every value appearing exactly once, ascending
    pub fn all_singles(data: &[i32]) -> Vec<i32> {
        Self::counts(data)
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .map(|(value, _)| value)
            .collect()
    }

    fn counts(data: &[i32]) -> BTreeMap<i32, usize> {
        let mut freq = BTreeMap::new();
        for &value in data {
            *freq.entry(value).or_insert(0) += 1;
        }
        freq
    }
}

impl SingleNumber for FrequencyMap {
    fn single(&self, data: &[i32]) -> Option<i32> {
        Self::counts(data)
            .into_iter()
            .find(|&(_, count)| count == 1)
            .map(|(value, _)| value)
    }
}

/// Pairs cancel under XOR, leaving the single value
pub struct XorFold;

approach!(XorFold, "xor_fold", Optimal, time = "O(n)", space = "O(1)");

impl SingleNumber for XorFold {
    fn single(&self, data: &[i32]) -> Option<i32> {
        if data.is_empty() {
            return None;
        }
        Some(data.iter().fold(0, |acc, &v| acc ^ v))
    }
}

pub const APPROACHES: [&dyn SingleNumber; 3] = [&CountEach, &FrequencyMap, &XorFold];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn test_single<S: SingleNumber>(s: &S) {
        assert_eq!(s.single(&[1, 2, 3, 2, 1]), Some(3));
        assert_eq!(s.single(&[4, 1, 2, 1, 2]), Some(4));
        assert_eq!(s.single(&[7]), Some(7));
        assert_eq!(s.single(&[-5, 9, 9]), Some(-5));
        assert_eq!(s.single(&[]), None);
    }

    #[test]
    fn test_count_each() { test_single(&CountEach); }

    #[test]
    fn test_frequency_map() { test_single(&FrequencyMap); }

    #[test]
    fn test_xor_fold() { test_single(&XorFold); }

    #[test]
    fn test_without_pairing_guarantee() {
        let data = [1, 2, 3, 2, 1, 5, 3, 8];
        assert_eq!(FrequencyMap::all_singles(&data), vec![5, 8]);
        // Brute force reports the first one in array order
        assert_eq!(CountEach.single(&data), Some(5));
        assert_eq!(CountEach.single(&[1, 1]), None);
        assert_eq!(FrequencyMap.single(&[2, 2, 3, 3]), None);
    }

    #[test]
    fn test_random_agreement() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(17);
        for _ in 0..100 {
            let pairs = rng.gen_range(0..20);
            let lone = 1000 + rng.gen_range(0..1000);
            let mut data: Vec<i32> = (0..pairs).flat_map(|v| [v, v]).collect();
            data.push(lone);
            data.shuffle(&mut rng);

            for approach in APPROACHES {
                assert_eq!(approach.single(&data), Some(lone), "{}", approach.name());
            }
        }
    }
}
