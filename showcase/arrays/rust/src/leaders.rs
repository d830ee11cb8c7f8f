//! Leaders: elements not smaller than anything to their right

use crate::Approach;

pub trait Leaders: Approach {
    /// Every `data[i]` with `data[i] >= data[j]` for all `j > i`, in
    /// left-to-right order. The last element is always a leader.
    fn leaders(&self, data: &[i32]) -> Vec<i32>;
}

/// Check each element against its whole suffix
pub struct ScanRight;

approach!(ScanRight, "scan_right", Brute, time = "O(n^2)", space = "O(1) extra");

impl Leaders for ScanRight {
    fn leaders(&self, data: &[i32]) -> Vec<i32> {
        data.iter()
            .enumerate()
            .filter(|&(i, &v)| data[i + 1..].iter().all(|&right| right <= v))
            .map(|(_, &v)| v)
            .collect()
    }
}

/// Walk from the right carrying the suffix maximum
pub struct SuffixMaximum;

approach!(SuffixMaximum, "suffix_maximum", Optimal, time = "O(n)", space = "O(1) extra");

impl Leaders for SuffixMaximum {
    fn leaders(&self, data: &[i32]) -> Vec<i32> {
        let mut out = Vec::new();
        let mut max: Option<i32> = None;
        for &value in data.iter().rev() {
            if max.map_or(true, |m| value >= m) {
                out.push(value);
                max = Some(value);
            }
        }
        out.reverse();
        out
    }
}

pub const APPROACHES: [&dyn Leaders; 2] = [&ScanRight, &SuffixMaximum];
