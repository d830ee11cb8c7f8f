//! Missing number in `1..=n`
//!
//! Input holds distinct values from `1..=n` with (at most) one value absent.
//! `None` means nothing is missing.

use crate::Approach;

pub trait MissingNumber: Approach {
    fn missing(&self, data: &[u32], n: u32) -> Option<u32>;
}

/// Gauss: `n(n+1)/2` minus the actual sum
pub struct SumFormula;

approach!(SumFormula, "sum_formula", Brute, time = "O(n)", space = "O(1)");

impl MissingNumber for SumFormula {
    fn missing(&self, data: &[u32], n: u32) -> Option<u32> {
        let n = u64::from(n);
        let expected = n * (n + 1) / 2;
        let actual: u64 = data.iter().map(|&v| u64::from(v)).sum();
        match expected.checked_sub(actual) {
            Some(0) | None => None,
            Some(gap) => u32::try_from(gap).ok(),
        }
    }
}

/// Mark every value seen in a table indexed `0..=n`
pub struct PresenceTable;

approach!(PresenceTable, "presence_table", Better, time = "O(n)", space = "O(n)");

impl PresenceTable {
    /// Every value of `1..=n` absent from `data`. Out of range values are ignored.
    pub fn all_missing(data: &[u32], n: u32) -> Vec<u32> {
        let seen = Self::table(data, n);
        (1..=n).filter(|&v| !seen[v as usize]).collect()
    }

    fn table(data: &[u32], n: u32) -> Vec<bool> {
        let mut seen = vec![false; n as usize + 1];
        for &v in data {
            if (1..=n).contains(&v) {
                seen[v as usize] = true;
            }
        }
        seen
    }
}

impl MissingNumber for PresenceTable {
    fn missing(&self, data: &[u32], n: u32) -> Option<u32> {
        let seen = Self::table(data, n);
        (1..=n).find(|&v| !seen[v as usize])
    }
}

/// `(1 ^ 2 ^ ... ^ n) ^ (data[0] ^ ... ^ data[k])`: present values cancel
pub struct XorFold;

approach!(XorFold, "xor_fold", Optimal, time = "O(n)", space = "O(1)");

impl MissingNumber for XorFold {
    fn missing(&self, data: &[u32], n: u32) -> Option<u32> {
        let range = (1..=n).fold(0, |acc, v| acc ^ v);
        let present = data.iter().fold(0, |acc, &v| acc ^ v);
        match range ^ present {
            0 => None,
            gap => Some(gap),
        }
    }
}

pub const APPROACHES: [&dyn MissingNumber; 3] = [&SumFormula, &PresenceTable, &XorFold];
