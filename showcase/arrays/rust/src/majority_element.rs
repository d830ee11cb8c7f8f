//! Majority element: the value occurring more than `n / 2` times

use std::collections::HashMap;

use crate::Approach;

pub trait MajorityElement: Approach {
    fn majority(&self, data: &[i32]) -> Option<i32>;
}

/// Count every candidate over the whole array
pub struct CountEach;

approach!(CountEach, "count_each", Brute, time = "O(n^2)", space = "O(1)");

impl MajorityElement for CountEach {
    fn majority(&self, data: &[i32]) -> Option<i32> {
        let half = data.len() / 2;
        data.iter()
            .copied()
            .find(|&x| data.iter().filter(|&&y| y == x).count() > half)
    }
}

/// Hash counts, stopping as soon as one crosses half
pub struct HashCount;

approach!(HashCount, "hash_count", Better, time = "O(n)", space = "O(n)");

impl MajorityElement for HashCount {
    fn majority(&self, data: &[i32]) -> Option<i32> {
        let half = data.len() / 2;
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for &value in data {
            let count = counts.entry(value).or_insert(0);
            *count += 1;
            if *count > half {
                return Some(value);
            }
        }
        None
    }
}

/// Boyer-Moore voting, then a second pass to confirm the survivor
pub struct BoyerMoore;

approach!(BoyerMoore, "boyer_moore", Optimal, time = "O(n)", space = "O(1)");

impl MajorityElement for BoyerMoore {
    fn majority(&self, data: &[i32]) -> Option<i32> {
        let mut candidate = *data.first()?;
        let mut votes = 0usize;

        for &value in data {
            if votes == 0 {
                candidate = value;
                votes = 1;
            } else if value == candidate {
                votes += 1;
            } else {
                votes -= 1;
            }
        }

        let count = data.iter().filter(|&&v| v == candidate).count();
        (count > data.len() / 2).then_some(candidate)
    }
}

pub const APPROACHES: [&dyn MajorityElement; 3] = [&CountEach, &HashCount, &BoyerMoore];
