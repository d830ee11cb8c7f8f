//! Array Problem Showcase
//!
//! Classic array and matrix interview problems. Each problem is a trait and
//! every way of solving it (brute force, better, optimal) is a unit struct
//! implementing that trait, so approaches can be compared side by side.

use serde::Serialize;
use thiserror::Error;

/// Where an approach sits on the brute -> better -> optimal ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Brute,
    Better,
    Optimal,
}

/// Asymptotic cost of an approach, as written on a whiteboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

/// Common description shared by every approach to every problem
pub trait Approach {
    /// Short snake_case identifier used in reports
    fn name(&self) -> &'static str;

    fn tier(&self) -> Tier;

    fn complexity(&self) -> Complexity;
}

/// Errors for inputs whose shape an algorithm cannot work with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("value {value} at index {index} is not one of 0, 1, 2")]
    InvalidColor { index: usize, value: i32 },

    #[error("row {row} has {len} columns, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },

    #[error("matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("{non_negative} non-negative and {negative} negative values cannot alternate")]
    UnbalancedSigns { non_negative: usize, negative: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Implements [`Approach`] for a unit struct:
/// `approach!(Kadane, "kadane", Optimal, time = "O(n)", space = "O(1)")`
#[macro_export]
macro_rules! approach {
    ($ty:ty, $name:literal, $tier:ident, time = $time:literal, space = $space:literal) => {
        impl $crate::Approach for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn tier(&self) -> $crate::Tier {
                $crate::Tier::$tier
            }

            fn complexity(&self) -> $crate::Complexity {
                $crate::Complexity { time: $time, space: $space }
            }
        }
    };
}

pub mod intersection_sorted;
pub mod largest_element;
pub mod leaders;
pub mod longest_consecutive;
pub mod longest_subarray_sum;
pub mod majority_element;
pub mod matrix;
pub mod max_consecutive_ones;
pub mod max_subarray;
pub mod missing_number;
pub mod move_zeros;
pub mod next_permutation;
pub mod rearrange_by_sign;
pub mod remove_duplicates;
pub mod rotate;
pub mod rotate_matrix;
pub mod second_largest;
pub mod set_matrix_zeroes;
pub mod single_number;
pub mod sort_colors;
pub mod spiral;
pub mod stock_profit;
pub mod two_sum;
pub mod union_sorted;
