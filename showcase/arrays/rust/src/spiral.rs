//! Spiral traversal of a matrix

use crate::matrix::dimensions;
use crate::Result;

/// Elements of `grid` in clockwise spiral order, starting top-left.
///
/// Walks the top row, right column, bottom row, then left column, shrinking
/// the boundary after each side. Bounds are half-open so single rows and
/// columns never get visited twice.
pub fn spiral_order(grid: &[Vec<i32>]) -> Result<Vec<i32>> {
    let (rows, cols) = dimensions(grid)?;
    let mut out = Vec::with_capacity(rows * cols);

    let (mut top, mut bottom) = (0, rows);
    let (mut left, mut right) = (0, cols);

    while top < bottom && left < right {
        out.extend_from_slice(&grid[top][left..right]);
        top += 1;

        out.extend((top..bottom).map(|i| grid[i][right - 1]));
        right -= 1;

        if top < bottom {
            out.extend(grid[bottom - 1][left..right].iter().rev());
            bottom -= 1;
        }
        if left < right {
            out.extend((top..bottom).rev().map(|i| grid[i][left]));
            left += 1;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_rectangular() {
        let grid = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]];
        assert_eq!(spiral_order(&grid).unwrap(), [1, 2, 3, 4, 8, 12, 11, 10, 9, 5, 6, 7]);
    }

    #[test]
    fn test_square() {
        let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert_eq!(spiral_order(&grid).unwrap(), [1, 2, 3, 6, 9, 8, 7, 4, 5]);

        let grid: Vec<Vec<i32>> = (0..4).map(|r| (0..4).map(|c| r * 4 + c + 1).collect()).collect();
        assert_eq!(
            spiral_order(&grid).unwrap(),
            [1, 2, 3, 4, 8, 12, 16, 15, 14, 13, 9, 5, 6, 7, 11, 10]
        );
    }

    #[test]
    fn test_thin_shapes() {
        assert_eq!(spiral_order(&[vec![1, 2, 3]]).unwrap(), [1, 2, 3]);
        assert_eq!(spiral_order(&[vec![1], vec![2], vec![3]]).unwrap(), [1, 2, 3]);
        assert_eq!(spiral_order(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap(), [1, 2, 4, 6, 5, 3]);
    }

    #[test]
    fn test_empty_and_ragged() {
        assert_eq!(spiral_order(&[]).unwrap(), Vec::<i32>::new());
        assert_eq!(spiral_order(&[vec![], vec![]]).unwrap(), Vec::<i32>::new());
        assert_eq!(
            spiral_order(&[vec![1, 2], vec![3]]),
            Err(Error::Ragged { row: 1, len: 1, expected: 2 })
        );
    }

    #[test]
    fn test_visits_every_cell_once() {
        for rows in 1..7 {
            for cols in 1..7 {
                let grid: Vec<Vec<i32>> =
                    (0..rows).map(|r| (0..cols).map(|c| r * cols + c).collect()).collect();
                let mut order = spiral_order(&grid).unwrap();
                order.sort_unstable();
                assert_eq!(order, (0..rows * cols).collect::<Vec<_>>());
            }
        }
    }
}
