//! Throughput of every approach on seeded random inputs.
//!
//! Usage: `array-benchmark [size] [seed] [run_ms]`. Progress goes to stderr,
//! the JSON report to stdout.

use std::time::{Duration, Instant};

use anyhow::Result;
use array_problems::intersection_sorted::{self, IntersectionSorted};
use array_problems::largest_element::{self, LargestElement};
use array_problems::leaders::{self, Leaders};
use array_problems::longest_consecutive::{self, LongestConsecutive};
use array_problems::longest_subarray_sum::{self, LongestSubarraySum};
use array_problems::majority_element::{self, MajorityElement};
use array_problems::max_consecutive_ones::{self, MaxConsecutiveOnes};
use array_problems::max_subarray::{self, MaxSubarray};
use array_problems::missing_number::{self, MissingNumber};
use array_problems::move_zeros::{self, MoveZeros};
use array_problems::rearrange_by_sign::{self, RearrangeBySign};
use array_problems::remove_duplicates::{self, RemoveDuplicates};
use array_problems::rotate::{self, LeftRotate};
use array_problems::rotate_matrix::{self, RotateMatrix};
use array_problems::second_largest::{self, SecondLargest};
use array_problems::set_matrix_zeroes::{self, SetMatrixZeroes};
use array_problems::single_number::{self, SingleNumber};
use array_problems::sort_colors::{self, SortColors};
use array_problems::stock_profit::{self, StockProfit};
use array_problems::two_sum::{self, TwoSum};
use array_problems::union_sorted::{self, UnionSorted};
use array_problems::{Approach, Tier};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;

#[derive(Serialize)]
struct BenchmarkResult {
    problem: &'static str,
    approach: &'static str,
    tier: Tier,
    ops_per_second: f64,
    correct: bool,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

struct BenchConfig {
    size: usize,
    seed: u64,
    warmup_ms: u64,
    run_ms: u64,
}

impl BenchConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self {
            size: args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1000),
            seed: args.get(2).and_then(|s| s.parse().ok()).unwrap_or(42),
            warmup_ms: 20,
            run_ms: args.get(3).and_then(|s| s.parse().ok()).unwrap_or(200),
        }
    }
}

struct Runner {
    warmup: Duration,
    run: Duration,
    results: Vec<BenchmarkResult>,
    all_correct: bool,
}

impl Runner {
    fn new(config: &BenchConfig) -> Self {
        Self {
            warmup: Duration::from_millis(config.warmup_ms),
            run: Duration::from_millis(config.run_ms),
            results: Vec::new(),
            all_correct: true,
        }
    }

    /// Checks `op` once against `expected`, then counts how often it runs
    /// in the configured window
    fn measure<A, T, F>(&mut self, problem: &'static str, approach: &A, expected: &T, mut op: F)
    where
        A: Approach + ?Sized,
        T: PartialEq,
        F: FnMut() -> T,
    {
        let correct = op() == *expected;
        self.all_correct &= correct;

        // Warmup
        let warmup_end = Instant::now() + self.warmup;
        while Instant::now() < warmup_end {
            std::hint::black_box(op());
        }

        // Benchmark
        let mut ops = 0u64;
        let start = Instant::now();
        let end = start + self.run;
        while Instant::now() < end {
            std::hint::black_box(op());
            ops += 1;
        }
        let ops_per_second = ops as f64 / start.elapsed().as_secs_f64();

        eprintln!(
            "  {:<24} {:<26} {:>8} {:>14.0} ops/s{}",
            problem,
            approach.name(),
            approach.complexity().time,
            ops_per_second,
            if correct { "" } else { "  MISMATCH" }
        );
        self.results.push(BenchmarkResult {
            problem,
            approach: approach.name(),
            tier: approach.tier(),
            ops_per_second,
            correct,
        });
    }

    fn finish(self) -> FullResults {
        FullResults { results: self.results, correctness: self.all_correct }
    }
}

fn random_values(rng: &mut Xoshiro256PlusPlus, len: usize, lo: i32, hi: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(lo..hi)).collect()
}

fn sorted_values(rng: &mut Xoshiro256PlusPlus, len: usize, lo: i32, hi: i32) -> Vec<i32> {
    let mut v = random_values(rng, len, lo, hi);
    v.sort_unstable();
    v
}

fn main() -> Result<()> {
    let config = BenchConfig::from_args();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let mut runner = Runner::new(&config);
    let n = config.size.max(2);
    let span = i32::try_from(n).unwrap_or(i32::MAX);

    eprintln!("Array benchmark: size={} seed={} run_ms={}", n, config.seed, config.run_ms);

    let values = random_values(&mut rng, n, -span, span);

    let expected = largest_element::SinglePass.largest(&values);
    for a in largest_element::APPROACHES {
        runner.measure("largest_element", a, &expected, || a.largest(&values));
    }

    let expected = second_largest::SinglePass.second_largest(&values);
    for a in second_largest::APPROACHES {
        runner.measure("second_largest", a, &expected, || a.second_largest(&values));
    }

    // Narrow range so there are plenty of duplicates
    let sorted = sorted_values(&mut rng, n, 0, span / 4 + 1);
    let dedup = |a: &dyn RemoveDuplicates| {
        let mut v = sorted.clone();
        let k = a.dedup(&mut v);
        v.truncate(k);
        v
    };
    let mut expected = sorted.clone();
    expected.dedup();
    for a in remove_duplicates::APPROACHES {
        runner.measure("remove_duplicates", a, &expected, || dedup(a));
    }

    let d = rng.gen_range(0..n);
    let mut expected = values.clone();
    expected.rotate_left(d);
    for a in rotate::APPROACHES {
        runner.measure("rotate", a, &expected, || {
            let mut v = values.clone();
            a.rotate_left(&mut v, d);
            v
        });
    }

    let with_zeros: Vec<i32> = values.iter().map(|&v| if v % 3 == 0 { 0 } else { v }).collect();
    let mut expected: Vec<i32> = with_zeros.iter().copied().filter(|&v| v != 0).collect();
    expected.resize(n, 0);
    for a in move_zeros::APPROACHES {
        runner.measure("move_zeros", a, &expected, || {
            let mut v = with_zeros.clone();
            a.move_zeros(&mut v);
            v
        });
    }

    let other = sorted_values(&mut rng, n, 0, span / 4 + 1);
    let expected = union_sorted::TwoPointerMerge.union(&sorted, &other);
    for a in union_sorted::APPROACHES {
        runner.measure("union_sorted", a, &expected, || a.union(&sorted, &other));
    }

    let expected = intersection_sorted::TwoPointers.intersection(&sorted, &other);
    for a in intersection_sorted::APPROACHES {
        runner.measure("intersection_sorted", a, &expected, || a.intersection(&sorted, &other));
    }

    let upper = u32::try_from(n)?;
    let mut present: Vec<u32> = (1..=upper).collect();
    present.shuffle(&mut rng);
    let gone = present.swap_remove(rng.gen_range(0..present.len()));
    for a in missing_number::APPROACHES {
        runner.measure("missing_number", a, &Some(gone), || a.missing(&present, upper));
    }

    let bits = random_values(&mut rng, n, 0, 2);
    let expected = max_consecutive_ones::RunningCount.max_consecutive_ones(&bits);
    for a in max_consecutive_ones::APPROACHES {
        runner.measure("max_consecutive_ones", a, &expected, || a.max_consecutive_ones(&bits));
    }

    // Every value twice except one
    let mut paired: Vec<i32> = (0..span / 2).flat_map(|v| [v, v]).collect();
    paired.push(-1);
    paired.shuffle(&mut rng);
    for a in single_number::APPROACHES {
        runner.measure("single_number", a, &Some(-1), || a.single(&paired));
    }

    let small = random_values(&mut rng, n, 0, 10);
    let k = 40;
    let expected = longest_subarray_sum::PrefixSumMap.longest_with_sum(&small, k);
    for a in longest_subarray_sum::APPROACHES {
        runner.measure("longest_subarray_sum", a, &expected, || a.longest_with_sum(&small, k));
    }

    let target = rng.gen_range(-span..span);
    let expected = two_sum::SeenSet.has_pair(&values, target);
    for a in two_sum::APPROACHES {
        runner.measure("two_sum", a, &expected, || a.has_pair(&values, target));
    }

    let colors = random_values(&mut rng, n, 0, 3);
    let mut expected = colors.clone();
    expected.sort_unstable();
    let expected = Ok(expected);
    for a in sort_colors::APPROACHES {
        runner.measure("sort_colors", a, &expected, || {
            let mut v = colors.clone();
            a.sort_colors(&mut v).map(|()| v)
        });
    }

    let mut voters = vec![7; n / 2 + 1];
    voters.extend(random_values(&mut rng, n - voters.len(), 0, 10));
    voters.shuffle(&mut rng);
    for a in majority_element::APPROACHES {
        runner.measure("majority_element", a, &Some(7), || a.majority(&voters));
    }

    let expected = max_subarray::Kadane.max_subarray(&values);
    for a in max_subarray::APPROACHES {
        runner.measure("max_subarray", a, &expected, || a.max_subarray(&values));
    }

    let prices = random_values(&mut rng, n, 1, 10_000);
    let expected = stock_profit::RunningMinimum.max_profit(&prices);
    for a in stock_profit::APPROACHES {
        runner.measure("stock_profit", a, &expected, || a.max_profit(&prices));
    }

    let mut signed: Vec<i32> = random_values(&mut rng, n / 2, 0, span);
    signed.extend(random_values(&mut rng, n / 2, -span, 0));
    signed.shuffle(&mut rng);
    let expected = rearrange_by_sign::IndexStepping.rearrange(&signed);
    for a in rearrange_by_sign::APPROACHES {
        runner.measure("rearrange_by_sign", a, &expected, || a.rearrange(&signed));
    }

    let expected = leaders::SuffixMaximum.leaders(&values);
    for a in leaders::APPROACHES {
        runner.measure("leaders", a, &expected, || a.leaders(&values));
    }

    let expected = longest_consecutive::HashSetRuns.longest_consecutive(&values);
    for a in longest_consecutive::APPROACHES {
        runner.measure("longest_consecutive", a, &expected, || a.longest_consecutive(&values));
    }

    // Square grid with roughly as many cells as the other inputs
    let side = (1..).find(|s: &usize| s * s >= n).unwrap_or(1);
    let grid: Vec<Vec<i32>> = (0..side)
        .map(|_| (0..side).map(|_| if rng.gen_bool(0.02) { 0 } else { rng.gen_range(1..100) }).collect())
        .collect();

    let zeroed = |a: &dyn SetMatrixZeroes| {
        let mut g = grid.clone();
        a.set_zeroes(&mut g).map(|()| g)
    };
    let expected = zeroed(&set_matrix_zeroes::FirstRowColumnMarkers);
    for a in set_matrix_zeroes::APPROACHES {
        runner.measure("set_matrix_zeroes", a, &expected, || zeroed(a));
    }

    let rotated = |a: &dyn RotateMatrix| {
        let mut g = grid.clone();
        a.rotate_clockwise(&mut g).map(|()| g)
    };
    let expected = rotated(&rotate_matrix::TransposeReverse);
    for a in rotate_matrix::APPROACHES {
        runner.measure("rotate_matrix", a, &expected, || rotated(a));
    }

    let full = runner.finish();
    eprintln!(
        "{} measurements, correctness: {}",
        full.results.len(),
        if full.correctness { "ok" } else { "FAILED" }
    );
    println!("{}", serde_json::to_string(&full)?);
    Ok(())
}
