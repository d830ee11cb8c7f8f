//! Longest run of consecutive 1s. Any value other than 1 breaks a run.

use crate::Approach;

pub trait MaxConsecutiveOnes: Approach {
    fn max_consecutive_ones(&self, data: &[i32]) -> usize;
}

/// Measure the run starting at every index
pub struct EveryStart;

approach!(EveryStart, "every_start", Brute, time = "O(n^2)", space = "O(1)");

impl MaxConsecutiveOnes for EveryStart {
    fn max_consecutive_ones(&self, data: &[i32]) -> usize {
        (0..data.len())
            .map(|start| data[start..].iter().take_while(|&&v| v == 1).count())
            .max()
            .unwrap_or(0)
    }
}

/// One counter for the current streak, one for the best
pub struct RunningCount;

approach!(RunningCount, "running_count", Optimal, time = "O(n)", space = "O(1)");

impl MaxConsecutiveOnes for RunningCount {
    fn max_consecutive_ones(&self, data: &[i32]) -> usize {
        let mut best = 0;
        let mut count = 0;
        for &value in data {
            if value == 1 {
                count += 1;
                best = best.max(count);
            } else {
                count = 0;
            }
        }
        best
    }
}

pub const APPROACHES: [&dyn MaxConsecutiveOnes; 2] = [&EveryStart, &RunningCount];
