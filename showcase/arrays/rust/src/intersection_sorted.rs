//! Intersection of two sorted arrays, keeping duplicates
//!
//! A value common to both inputs appears `min(count in a, count in b)` times.

use crate::Approach;

pub trait IntersectionSorted: Approach {
    fn intersection(&self, a: &[i32], b: &[i32]) -> Vec<i32>;
}

/// For each `a[i]`, take the first unused equal element of `b`
pub struct VisitedFlags;

approach!(VisitedFlags, "visited_flags", Brute, time = "O(n1 * n2)", space = "O(n2)");

impl IntersectionSorted for VisitedFlags {
    fn intersection(&self, a: &[i32], b: &[i32]) -> Vec<i32> {
        let mut visited = vec![false; b.len()];
        let mut out = Vec::new();

        for &x in a {
            if let Some(j) = (0..b.len()).find(|&j| b[j] == x && !visited[j]) {
                visited[j] = true;
                out.push(x);
            }
        }
        out
    }
}

/// Advance whichever side holds the smaller value; equal values match
pub struct TwoPointers;

approach!(TwoPointers, "two_pointers", Optimal, time = "O(n1 + n2)", space = "O(1) extra");

impl IntersectionSorted for TwoPointers {
    fn intersection(&self, a: &[i32], b: &[i32]) -> Vec<i32> {
        let mut out = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            if a[i] == b[j] {
                out.push(a[i]);
                i += 1;
                j += 1;
            } else if a[i] < b[j] {
                i += 1;
            } else {
                j += 1;
            }
        }
        out
    }
}

pub const APPROACHES: [&dyn IntersectionSorted; 2] = [&VisitedFlags, &TwoPointers];
