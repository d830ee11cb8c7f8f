//! Move all zeros to the end, keeping the order of the non-zero values

use crate::Approach;

pub trait MoveZeros: Approach {
    fn move_zeros(&self, data: &mut [i32]);
}

/// Stable partition through a scratch array
pub struct TempArray;

approach!(TempArray, "temp_array", Brute, time = "O(n)", space = "O(n)");

impl MoveZeros for TempArray {
    fn move_zeros(&self, data: &mut [i32]) {
        let mut temp: Vec<i32> = data.iter().copied().filter(|&v| v != 0).collect();
        temp.resize(data.len(), 0);
        data.copy_from_slice(&temp);
    }
}

/// Find the first zero, then swap every later non-zero into the zero slot
pub struct SwapIntoFirstZero;

approach!(SwapIntoFirstZero, "swap_into_first_zero", Optimal, time = "O(n)", space = "O(1)");

impl MoveZeros for SwapIntoFirstZero {
    fn move_zeros(&self, data: &mut [i32]) {
        let Some(mut zero) = data.iter().position(|&v| v == 0) else {
            return;
        };

        for i in zero + 1..data.len() {
            if data[i] != 0 {
                data.swap(i, zero);
                zero += 1;
            }
        }
    }
}

pub const APPROACHES: [&dyn MoveZeros; 2] = [&TempArray, &SwapIntoFirstZero];
