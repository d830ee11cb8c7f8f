//! Sort an array of 0s, 1s and 2s (Dutch national flag)

use crate::{Approach, Error, Result};

pub trait SortColors: Approach {
    /// Sorts in place. Any value outside {0, 1, 2} is rejected before the
    /// slice is touched.
    fn sort_colors(&self, data: &mut [i32]) -> Result<()>;
}

fn validate(data: &[i32]) -> Result<()> {
    match data.iter().position(|v| !(0..=2).contains(v)) {
        Some(index) => Err(Error::InvalidColor { index, value: data[index] }),
        None => Ok(()),
    }
}

/// General-purpose comparison sort
pub struct StdSort;

approach!(StdSort, "std_sort", Brute, time = "O(n log n)", space = "O(1)");

impl SortColors for StdSort {
    fn sort_colors(&self, data: &mut [i32]) -> Result<()> {
        validate(data)?;
        data.sort_unstable();
        Ok(())
    }
}

/// Count each color, then overwrite in order
pub struct CountingSort;

approach!(CountingSort, "counting_sort", Better, time = "O(n)", space = "O(1)");

impl SortColors for CountingSort {
    fn sort_colors(&self, data: &mut [i32]) -> Result<()> {
        validate(data)?;

        let mut counts = [0usize; 3];
        for &v in data.iter() {
            counts[v as usize] += 1;
        }

        let (zeros, rest) = data.split_at_mut(counts[0]);
        let (ones, twos) = rest.split_at_mut(counts[1]);
        zeros.fill(0);
        ones.fill(1);
        twos.fill(2);
        Ok(())
    }
}

/// `[0, low)` zeros, `[low, mid)` ones, `(high, n)` twos, `[mid, high]` unknown
pub struct DutchNationalFlag;

approach!(DutchNationalFlag, "dutch_national_flag", Optimal, time = "O(n)", space = "O(1)");

impl SortColors for DutchNationalFlag {
    fn sort_colors(&self, data: &mut [i32]) -> Result<()> {
        validate(data)?;

        let mut low = 0;
        let mut mid = 0;
        let mut high = data.len();

        // `high` is exclusive here so it never underflows
        while mid < high {
            match data[mid] {
                0 => {
                    data.swap(low, mid);
                    low += 1;
                    mid += 1;
                }
                1 => mid += 1,
                _ => {
                    high -= 1;
                    data.swap(mid, high);
                }
            }
        }
        Ok(())
    }
}

pub const APPROACHES: [&dyn SortColors; 3] = [&StdSort, &CountingSort, &DutchNationalFlag];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn test_sort<S: SortColors>(s: &S) {
        let mut data = [1, 0, 0, 1, 2, 2, 0, 2, 1];
        s.sort_colors(&mut data).unwrap();
        assert_eq!(data, [0, 0, 0, 1, 1, 1, 2, 2, 2]);

        let mut data = [2, 1, 0, 0, 2, 1, 2, 1];
        s.sort_colors(&mut data).unwrap();
        assert_eq!(data, [0, 0, 1, 1, 1, 2, 2, 2]);

        let mut data = [2, 2];
        s.sort_colors(&mut data).unwrap();
        assert_eq!(data, [2, 2]);

        let mut empty: [i32; 0] = [];
        s.sort_colors(&mut empty).unwrap();

        // Invalid input is reported and left as it was
        let mut data = [2, 0, 3, 1];
        assert_eq!(s.sort_colors(&mut data), Err(Error::InvalidColor { index: 2, value: 3 }));
        assert_eq!(data, [2, 0, 3, 1]);
    }

    #[test]
    fn test_std_sort() { test_sort(&StdSort); }

    #[test]
    fn test_counting_sort() { test_sort(&CountingSort); }

    #[test]
    fn test_dutch_national_flag() { test_sort(&DutchNationalFlag); }

    #[test]
    fn test_random_agreement() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(15);
        for _ in 0..200 {
            let len = rng.gen_range(0..50);
            let data: Vec<i32> = (0..len).map(|_| rng.gen_range(0..3)).collect();
            let mut expected = data.clone();
            expected.sort_unstable();

            for approach in APPROACHES {
                let mut got = data.clone();
                approach.sort_colors(&mut got).unwrap();
                assert_eq!(got, expected, "{}", approach.name());
            }
        }
    }
}
