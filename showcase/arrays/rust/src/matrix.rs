//! Shape checks shared by the grid problems

use crate::{Error, Result};

/// `(rows, cols)` of a grid whose rows all have the same length.
/// An empty grid is `0x0`.
pub fn dimensions(grid: &[Vec<i32>]) -> Result<(usize, usize)> {
    let expected = grid.first().map_or(0, Vec::len);
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != expected {
            return Err(Error::Ragged { row, len: cells.len(), expected });
        }
    }
    Ok((grid.len(), expected))
}

/// Side length of an `n x n` grid
pub fn square_size(grid: &[Vec<i32>]) -> Result<usize> {
    let (rows, cols) = dimensions(grid)?;
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(dimensions(&[vec![1, 2, 3], vec![4, 5, 6]]), Ok((2, 3)));
        assert_eq!(dimensions(&[]), Ok((0, 0)));
        assert_eq!(dimensions(&[vec![], vec![]]), Ok((2, 0)));
        assert_eq!(
            dimensions(&[vec![1, 2], vec![3], vec![4, 5]]),
            Err(Error::Ragged { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn test_square_size() {
        assert_eq!(square_size(&[vec![1, 2], vec![3, 4]]), Ok(2));
        assert_eq!(square_size(&[]), Ok(0));
        assert_eq!(
            square_size(&[vec![1, 2, 3], vec![4, 5, 6]]),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
    }
}
