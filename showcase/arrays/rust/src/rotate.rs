//! Left rotation of an array, by one place and by `d` places

use crate::Approach;

/// Save the first element, shift the rest left, put it at the end
pub fn rotate_left_by_one(data: &mut [i32]) {
    let Some(&first) = data.first() else {
        return;
    };
    for i in 1..data.len() {
        data[i - 1] = data[i];
    }
    let last = data.len() - 1;
    data[last] = first;
}

pub trait LeftRotate: Approach {
    /// Rotates left by `d` places. `d` is taken modulo the length.
    fn rotate_left(&self, data: &mut [i32], d: usize);
}

/// Buffer the first `d` values, shift the tail down, append the buffer
pub struct TempBuffer;

approach!(TempBuffer, "temp_buffer", Brute, time = "O(n)", space = "O(d)");

impl LeftRotate for TempBuffer {
    fn rotate_left(&self, data: &mut [i32], d: usize) {
        let n = data.len();
        if n == 0 {
            return;
        }
        let d = d % n;

        let head = data[..d].to_vec();
        for i in d..n {
            data[i - d] = data[i];
        }
        data[n - d..].copy_from_slice(&head);
    }
}

/// [A B] -> [A^R B^R] -> [B A]
pub struct Reversal;

approach!(Reversal, "reversal", Optimal, time = "O(n)", space = "O(1)");

impl LeftRotate for Reversal {
    fn rotate_left(&self, data: &mut [i32], d: usize) {
        let n = data.len();
        if n == 0 {
            return;
        }
        let d = d % n;

        data[..d].reverse();
        data[d..].reverse();
        data.reverse();
    }
}

pub const APPROACHES: [&dyn LeftRotate; 2] = [&TempBuffer, &Reversal];
