//! Union of two sorted arrays, as an ascending list of distinct values

use std::collections::BTreeSet;

use crate::Approach;

pub trait UnionSorted: Approach {
    fn union(&self, a: &[i32], b: &[i32]) -> Vec<i32>;
}

/// Throw everything into an ordered set. Works on unsorted input too.
pub struct OrderedSet;

approach!(OrderedSet, "ordered_set", Brute, time = "O((n1 + n2) log (n1 + n2))", space = "O(n1 + n2)");

impl UnionSorted for OrderedSet {
    fn union(&self, a: &[i32], b: &[i32]) -> Vec<i32> {
        let set: BTreeSet<i32> = a.iter().chain(b).copied().collect();
        set.into_iter().collect()
    }
}

/// Merge step of merge sort, skipping anything equal to the last value pushed
pub struct TwoPointerMerge;

approach!(TwoPointerMerge, "two_pointer_merge", Optimal, time = "O(n1 + n2)", space = "O(1) extra");

fn push_distinct(out: &mut Vec<i32>, value: i32) {
    if out.last() != Some(&value) {
        out.push(value);
    }
}

impl UnionSorted for TwoPointerMerge {
    fn union(&self, a: &[i32], b: &[i32]) -> Vec<i32> {
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                push_distinct(&mut out, a[i]);
                i += 1;
            } else if b[j] < a[i] {
                push_distinct(&mut out, b[j]);
                j += 1;
            } else {
                push_distinct(&mut out, a[i]);
                i += 1;
                j += 1;
            }
        }

        for &value in &a[i..] {
            push_distinct(&mut out, value);
        }
        for &value in &b[j..] {
            push_distinct(&mut out, value);
        }
        out
    }
}

pub const APPROACHES: [&dyn UnionSorted; 2] = [&OrderedSet, &TwoPointerMerge];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn test_union<U: UnionSorted>(u: &U) {
        assert_eq!(
            u.union(&[1, 1, 2, 2, 3, 4, 4, 5], &[2, 3, 3, 4, 5, 5, 6]),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(
            u.union(&[1, 2, 2, 3, 4, 4, 5, 6], &[2, 3, 3, 4, 5, 5]),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(u.union(&[], &[]), Vec::<i32>::new());
        assert_eq!(u.union(&[], &[1, 1, 2]), vec![1, 2]);
        assert_eq!(u.union(&[3, 3], &[]), vec![3]);
        assert_eq!(u.union(&[-2, 0], &[-3, 0, 7]), vec![-3, -2, 0, 7]);
    }

    #[test]
    fn test_ordered_set() { test_union(&OrderedSet); }

    #[test]
    fn test_two_pointer_merge() { test_union(&TwoPointerMerge); }

    #[test]
    fn test_random_agreement() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        for _ in 0..200 {
            let mut a: Vec<i32> = (0..rng.gen_range(0..25)).map(|_| rng.gen_range(0..20)).collect();
            let mut b: Vec<i32> = (0..rng.gen_range(0..25)).map(|_| rng.gen_range(0..20)).collect();
            a.sort_unstable();
            b.sort_unstable();

            let mut expected: Vec<i32> = a.iter().chain(&b).copied().collect();
            expected.sort_unstable();
            expected.dedup();

            for approach in APPROACHES {
                assert_eq!(approach.union(&a, &b), expected, "{}", approach.name());
            }
        }
    }
}
