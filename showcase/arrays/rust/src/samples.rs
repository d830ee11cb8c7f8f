//! Runs every approach on each problem's worked example and prints the answers

use std::fmt::Debug;

use anyhow::Result;
use array_problems::intersection_sorted::{self, IntersectionSorted};
use array_problems::largest_element::{self, LargestElement};
use array_problems::leaders::{self, Leaders};
use array_problems::longest_consecutive::{self, LongestConsecutive};
use array_problems::longest_subarray_sum::{self, LongestSubarraySum};
use array_problems::majority_element::{self, MajorityElement};
use array_problems::max_consecutive_ones::{self, MaxConsecutiveOnes};
use array_problems::max_subarray::{self, MaxSubarray};
use array_problems::missing_number::{self, MissingNumber, PresenceTable};
use array_problems::move_zeros::{self, MoveZeros};
use array_problems::next_permutation::next_permutation;
use array_problems::rearrange_by_sign::{self, RearrangeBySign};
use array_problems::remove_duplicates::{self, RemoveDuplicates};
use array_problems::rotate::{self, rotate_left_by_one, LeftRotate};
use array_problems::rotate_matrix::{self, RotateMatrix};
use array_problems::second_largest::{self, SecondLargest};
use array_problems::set_matrix_zeroes::{self, SetMatrixZeroes};
use array_problems::single_number::{self, FrequencyMap, SingleNumber};
use array_problems::sort_colors::{self, SortColors};
use array_problems::spiral::spiral_order;
use array_problems::stock_profit::{self, StockProfit};
use array_problems::two_sum::{self, TwoSum};
use array_problems::union_sorted::{self, UnionSorted};
use array_problems::Approach;

fn report<A: Approach + ?Sized>(problem: &str, approach: &A, result: impl Debug) {
    println!("{} ({}): {:?}", problem, approach.name(), result);
}

fn main() -> Result<()> {
    let data = [3, 2, 1, 5, 2];
    for a in largest_element::APPROACHES {
        report("Largest element", a, a.largest(&data));
    }

    let data = [1, 6, 2, 6, 7, 7];
    for a in second_largest::APPROACHES {
        report("Second largest", a, a.second_largest(&data));
    }

    let data = [1, 2, 2, 2, 3, 3];
    for a in remove_duplicates::APPROACHES {
        let mut v = data.to_vec();
        let k = a.dedup(&mut v);
        report("Remove duplicates", a, &v[..k]);
    }

    let mut v = vec![1, 2, 3, 4, 5];
    rotate_left_by_one(&mut v);
    println!("Left rotate by one: {:?}", v);

    let data = [1, 2, 3, 4, 5, 6];
    for a in rotate::APPROACHES {
        let mut v = data.to_vec();
        a.rotate_left(&mut v, 2);
        report("Left rotate by 2", a, v);
    }

    let data = [1, 2, 0, 3, 4, 0, 3, 5];
    for a in move_zeros::APPROACHES {
        let mut v = data.to_vec();
        a.move_zeros(&mut v);
        report("Move zeros", a, v);
    }

    let (a1, a2) = ([1, 1, 2, 2, 3, 4, 4, 5], [2, 3, 3, 4, 5, 5, 6]);
    for a in union_sorted::APPROACHES {
        report("Union", a, a.union(&a1, &a2));
    }

    let (a1, a2) = ([1, 2, 2, 3, 4], [2, 2, 3, 5]);
    for a in intersection_sorted::APPROACHES {
        report("Intersection", a, a.intersection(&a1, &a2));
    }

    let data = [1, 2, 4, 5];
    for a in missing_number::APPROACHES {
        report("Missing number", a, a.missing(&data, 5));
    }
    println!("All missing up to 8: {:?}", PresenceTable::all_missing(&data, 8));

    let data = [1, 1, 0, 1, 1, 1, 1, 0, 1, 1];
    for a in max_consecutive_ones::APPROACHES {
        report("Max consecutive ones", a, a.max_consecutive_ones(&data));
    }

    let data = [1, 2, 3, 2, 1];
    for a in single_number::APPROACHES {
        report("Single number", a, a.single(&data));
    }
    println!("All singles: {:?}", FrequencyMap::all_singles(&[1, 2, 3, 2, 1, 5, 3]));

    let data = [1, 2, 3, 1, 1, 1, 1, 4, 2, 3];
    for a in longest_subarray_sum::APPROACHES {
        report("Longest subarray with sum 6", a, a.longest_with_sum(&data, 6));
    }

    let data = [1, 3, 5, 7, 9];
    for a in two_sum::APPROACHES {
        report("Two sum to 16", a, a.find_pair(&data, 16));
    }

    let data = [1, 0, 0, 1, 2, 2, 0, 2, 1];
    for a in sort_colors::APPROACHES {
        let mut v = data.to_vec();
        a.sort_colors(&mut v)?;
        report("Sort 0s 1s 2s", a, v);
    }

    let data = [2, 2, 1, 2, 3, 2, 2];
    for a in majority_element::APPROACHES {
        report("Majority element", a, a.majority(&data));
    }

    let data = [-2, -3, 1, 5, -3, 7, -1];
    for a in max_subarray::APPROACHES {
        match a.max_subarray(&data) {
            Some(best) => report("Max subarray", a, (best.sum, best.elements(&data))),
            None => report("Max subarray", a, "empty input"),
        }
    }

    let prices = [7, 1, 5, 3, 6, 4];
    for a in stock_profit::APPROACHES {
        report("Stock profit", a, a.max_profit(&prices));
    }

    let data = [3, 1, -2, -5, -2, 4];
    for a in rearrange_by_sign::APPROACHES {
        report("Rearrange by sign", a, a.rearrange(&data)?);
    }

    let mut v = vec![1, 2, 3, 4, 5];
    next_permutation(&mut v);
    println!("Next permutation: {:?}", v);

    let data = [12, 14, 16, 7, 6, 2, 5];
    for a in leaders::APPROACHES {
        report("Leaders", a, a.leaders(&data));
    }

    let data = [100, 102, 1, 4, 20, 3, 2];
    for a in longest_consecutive::APPROACHES {
        report("Longest consecutive", a, a.longest_consecutive(&data));
    }

    let grid = vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]];
    for a in set_matrix_zeroes::APPROACHES {
        let mut g = grid.clone();
        a.set_zeroes(&mut g)?;
        report("Set matrix zeroes", a, g);
    }

    let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    for a in rotate_matrix::APPROACHES {
        let mut g = grid.clone();
        a.rotate_clockwise(&mut g)?;
        report("Rotate matrix", a, g);
    }

    let grid = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]];
    println!("Spiral order: {:?}", spiral_order(&grid)?);

    Ok(())
}
