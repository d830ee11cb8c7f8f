//! Best time to buy and sell a stock once

use crate::Approach;

pub trait StockProfit: Approach {
    /// Largest `sell - buy` with the sale strictly after the purchase, or 0
    fn max_profit(&self, prices: &[i32]) -> i64;
}

/// Every buy day against every later sell day
pub struct EveryPair;

approach!(EveryPair, "every_pair", Brute, time = "O(n^2)", space = "O(1)");

impl StockProfit for EveryPair {
    fn max_profit(&self, prices: &[i32]) -> i64 {
        let mut best = 0;
        for (i, &buy) in prices.iter().enumerate() {
            for &sell in &prices[i + 1..] {
                best = best.max(i64::from(sell) - i64::from(buy));
            }
        }
        best
    }
}

/// Carry the cheapest price so far and sell against it
pub struct RunningMinimum;

approach!(RunningMinimum, "running_minimum", Optimal, time = "O(n)", space = "O(1)");

impl StockProfit for RunningMinimum {
    fn max_profit(&self, prices: &[i32]) -> i64 {
        let Some((&first, rest)) = prices.split_first() else {
            return 0;
        };

        let mut cheapest = i64::from(first);
        let mut best = 0;
        for &price in rest {
            let price = i64::from(price);
            best = best.max(price - cheapest);
            cheapest = cheapest.min(price);
        }
        best
    }
}

pub const APPROACHES: [&dyn StockProfit; 2] = [&EveryPair, &RunningMinimum];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn test_profit<S: StockProfit>(s: &S) {
        assert_eq!(s.max_profit(&[7, 1, 5, 3, 6, 4]), 5);
        assert_eq!(s.max_profit(&[7, 6, 4, 3, 1]), 0);
        assert_eq!(s.max_profit(&[2, 4, 1, 7]), 6);
        assert_eq!(s.max_profit(&[3]), 0);
        assert_eq!(s.max_profit(&[]), 0);
        assert_eq!(s.max_profit(&[i32::MIN, i32::MAX]), i64::from(u32::MAX));
    }

    #[test]
    fn test_every_pair() { test_profit(&EveryPair); }

    #[test]
    fn test_running_minimum() { test_profit(&RunningMinimum); }

    #[test]
    fn test_random_agreement() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(19);
        for _ in 0..300 {
            let len = rng.gen_range(0..40);
            let prices: Vec<i32> = (0..len).map(|_| rng.gen_range(1..100)).collect();
            assert_eq!(RunningMinimum.max_profit(&prices), EveryPair.max_profit(&prices));
        }
    }
}
