//! Rearrange so non-negative and negative values alternate

use crate::{Approach, Error, Result};

pub trait RearrangeBySign: Approach {
    /// Positions 0, 2, 4, ... take the non-negative values and 1, 3, 5, ...
    /// the negatives, each group keeping its original order. Both groups
    /// must be the same size.
    fn rearrange(&self, data: &[i32]) -> Result<Vec<i32>>;
}

fn check_balance(data: &[i32]) -> Result<()> {
    let negative = data.iter().filter(|&&v| v < 0).count();
    let non_negative = data.len() - negative;
    if negative == non_negative {
        Ok(())
    } else {
        Err(Error::UnbalancedSigns { non_negative, negative })
    }
}

/// Split into two lists, then interleave them
pub struct SplitAndInterleave;

approach!(SplitAndInterleave, "split_and_interleave", Brute, time = "O(n)", space = "O(n)");

impl RearrangeBySign for SplitAndInterleave {
    fn rearrange(&self, data: &[i32]) -> Result<Vec<i32>> {
        check_balance(data)?;

        let (non_negative, negative): (Vec<i32>, Vec<i32>) = data.iter().partition(|&&v| v >= 0);
        Ok(non_negative
            .into_iter()
            .zip(negative)
            .flat_map(|(p, n)| [p, n])
            .collect())
    }
}

/// Write each value straight to its slot, stepping two at a time per sign
pub struct IndexStepping;

approach!(IndexStepping, "index_stepping", Optimal, time = "O(n)", space = "O(n)");

impl RearrangeBySign for IndexStepping {
    fn rearrange(&self, data: &[i32]) -> Result<Vec<i32>> {
        check_balance(data)?;

        let mut out = vec![0; data.len()];
        let (mut even, mut odd) = (0, 1);
        for &value in data {
            if value >= 0 {
                out[even] = value;
                even += 2;
            } else {
                out[odd] = value;
                odd += 2;
            }
        }
        Ok(out)
    }
}

pub const APPROACHES: [&dyn RearrangeBySign; 2] = [&SplitAndInterleave, &IndexStepping];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn test_rearrange<R: RearrangeBySign>(r: &R) {
        assert_eq!(r.rearrange(&[1, 2, -4, -5]).unwrap(), [1, -4, 2, -5]);
        assert_eq!(
            r.rearrange(&[3, 1, -2, -5, 2, -4]).unwrap(),
            [3, -2, 1, -5, 2, -4]
        );
        // Zero counts as non-negative
        assert_eq!(r.rearrange(&[-1, 0]).unwrap(), [0, -1]);
        assert_eq!(r.rearrange(&[]).unwrap(), Vec::<i32>::new());

        assert_eq!(
            r.rearrange(&[1, 2, -3]),
            Err(Error::UnbalancedSigns { non_negative: 2, negative: 1 })
        );
    }

    #[test]
    fn test_split_and_interleave() { test_rearrange(&SplitAndInterleave); }

    #[test]
    fn test_index_stepping() { test_rearrange(&IndexStepping); }

    #[test]
    fn test_random_agreement() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(20);
        for _ in 0..200 {
            let half = rng.gen_range(0..15);
            let mut data: Vec<i32> = (0..half).map(|_| rng.gen_range(0..50)).collect();
            data.extend((0..half).map(|_| rng.gen_range(-50..0)));
            data.shuffle(&mut rng);

            let expected = SplitAndInterleave.rearrange(&data).unwrap();
            assert_eq!(IndexStepping.rearrange(&data).unwrap(), expected);
            for (i, v) in expected.iter().enumerate() {
                assert_eq!(*v >= 0, i % 2 == 0);
            }
        }
    }
}
