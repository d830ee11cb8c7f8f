//! Set matrix zeroes: a 0 anywhere clears its whole row and column

use crate::matrix::dimensions;
use crate::{Approach, Result};

pub trait SetMatrixZeroes: Approach {
    /// Zeroes, in place, every row and column that held a 0 on entry.
    /// Ragged grids are rejected untouched.
    fn set_zeroes(&self, grid: &mut [Vec<i32>]) -> Result<()>;
}

/// One flag per row and one per column
pub struct MarkerArrays;

approach!(MarkerArrays, "marker_arrays", Brute, time = "O(n*m)", space = "O(n+m)");

impl SetMatrixZeroes for MarkerArrays {
    fn set_zeroes(&self, grid: &mut [Vec<i32>]) -> Result<()> {
        let (rows, cols) = dimensions(grid)?;
        let mut zero_rows = vec![false; rows];
        let mut zero_cols = vec![false; cols];

        for (i, row) in grid.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    zero_rows[i] = true;
                    zero_cols[j] = true;
                }
            }
        }

        for (i, row) in grid.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                if zero_rows[i] || zero_cols[j] {
                    *cell = 0;
                }
            }
        }
        Ok(())
    }
}

/// Row 0 and column 0 double as the markers. Column 0's own marker lives in
/// a separate flag since `grid[0][0]` already stands for row 0.
pub struct FirstRowColumnMarkers;

approach!(FirstRowColumnMarkers, "first_row_column_markers", Optimal, time = "O(n*m)", space = "O(1)");

impl SetMatrixZeroes for FirstRowColumnMarkers {
    fn set_zeroes(&self, grid: &mut [Vec<i32>]) -> Result<()> {
        let (rows, cols) = dimensions(grid)?;
        if rows == 0 || cols == 0 {
            return Ok(());
        }

        let mut first_col_zero = false;
        for i in 0..rows {
            if grid[i][0] == 0 {
                first_col_zero = true;
            }
            for j in 1..cols {
                if grid[i][j] == 0 {
                    grid[i][0] = 0;
                    grid[0][j] = 0;
                }
            }
        }

        // Interior first, so the markers are still intact while we read them
        for i in 1..rows {
            for j in 1..cols {
                if grid[i][0] == 0 || grid[0][j] == 0 {
                    grid[i][j] = 0;
                }
            }
        }

        if grid[0][0] == 0 {
            grid[0].fill(0);
        }
        if first_col_zero {
            for row in grid.iter_mut() {
                row[0] = 0;
            }
        }
        Ok(())
    }
}

pub const APPROACHES: [&dyn SetMatrixZeroes; 2] = [&MarkerArrays, &FirstRowColumnMarkers];
