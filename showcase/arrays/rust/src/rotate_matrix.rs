//! Rotate a square matrix 90 degrees clockwise

use crate::matrix::square_size;
use crate::{Approach, Result};

pub trait RotateMatrix: Approach {
    /// Rotates an `n x n` grid in place; anything else is rejected untouched
    fn rotate_clockwise(&self, grid: &mut [Vec<i32>]) -> Result<()>;
}

/// Build the rotated grid separately: `rotated[j][n-1-i] = grid[i][j]`
pub struct CopyRotate;

approach!(CopyRotate, "copy_rotate", Brute, time = "O(n^2)", space = "O(n^2)");

impl RotateMatrix for CopyRotate {
    fn rotate_clockwise(&self, grid: &mut [Vec<i32>]) -> Result<()> {
        let n = square_size(grid)?;
        let mut rotated = vec![vec![0; n]; n];
        for (i, row) in grid.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                rotated[j][n - 1 - i] = cell;
            }
        }
        for (row, new_row) in grid.iter_mut().zip(rotated) {
            *row = new_row;
        }
        Ok(())
    }
}

/// Transpose, then reverse every row
pub struct TransposeReverse;

approach!(TransposeReverse, "transpose_reverse", Optimal, time = "O(n^2)", space = "O(1)");

impl RotateMatrix for TransposeReverse {
    fn rotate_clockwise(&self, grid: &mut [Vec<i32>]) -> Result<()> {
        let n = square_size(grid)?;
        for j in 1..n {
            // Rows above `j` and row `j` itself, borrowed separately
            let (upper, lower) = grid.split_at_mut(j);
            for (i, row) in upper.iter_mut().enumerate() {
                std::mem::swap(&mut row[j], &mut lower[0][i]);
            }
        }
        for row in grid.iter_mut() {
            row.reverse();
        }
        Ok(())
    }
}

pub const APPROACHES: [&dyn RotateMatrix; 2] = [&CopyRotate, &TransposeReverse];
