//! Query throughput of each searcher over a seeded sorted slice.
//!
//! Usage: `search-benchmark [size] [seed] [run_ms]`. Progress goes to stderr,
//! the JSON report to stdout.

use std::time::{Duration, Instant};

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use sorted_search::{LinearScan, SortedSearch, Tier, SEARCHERS};

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
    queries: usize,
    warmup_ms: u64,
    run_ms: u64,
}

impl BenchConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self {
            size: args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000),
            seed: args.get(2).and_then(|s| s.parse().ok()).unwrap_or(42),
            queries: 256,
            warmup_ms: 20,
            run_ms: args.get(3).and_then(|s| s.parse().ok()).unwrap_or(200),
        }
    }
}

/// One boundary question, asked the same way of every searcher
#[derive(Clone, Copy)]
enum Query {
    Find,
    LowerBound,
    UpperBound,
    SearchInsert,
    OccurrenceRange,
}

impl Query {
    const ALL: [Query; 5] = [
        Query::Find,
        Query::LowerBound,
        Query::UpperBound,
        Query::SearchInsert,
        Query::OccurrenceRange,
    ];

    fn name(self) -> &'static str {
        match self {
            Query::Find => "find",
            Query::LowerBound => "lower_bound",
            Query::UpperBound => "upper_bound",
            Query::SearchInsert => "search_insert",
            Query::OccurrenceRange => "occurrence_range",
        }
    }

    /// Answer folded to a comparable value. `find` may return any matching
    /// index, so only whether it hit is compared.
    fn answer(self, s: &dyn SortedSearch, data: &[i32], target: i32) -> Option<(usize, usize)> {
        match self {
            Query::Find => s.find(data, target).map(|_| (0, 0)),
            Query::LowerBound => Some((s.lower_bound(data, target), 0)),
            Query::UpperBound => Some((s.upper_bound(data, target), 0)),
            Query::SearchInsert => Some((s.search_insert(data, target), 0)),
            Query::OccurrenceRange => s.occurrence_range(data, target),
        }
    }
}

fn verify_correctness(s: &dyn SortedSearch, query: Query, data: &[i32], targets: &[i32]) -> bool {
    targets
        .iter()
        .all(|&t| query.answer(s, data, t) == query.answer(&LinearScan, data, t))
}

fn benchmark(s: &dyn SortedSearch, query: Query, data: &[i32], targets: &[i32], config: &BenchConfig) -> f64 {
    // Warmup
    let warmup_end = Instant::now() + Duration::from_millis(config.warmup_ms);
    while Instant::now() < warmup_end {
        for &t in targets.iter().take(16) {
            std::hint::black_box(query.answer(s, data, t));
        }
    }

    // Benchmark
    let mut ops = 0u64;
    let start = Instant::now();
    let end = start + Duration::from_millis(config.run_ms);
    while Instant::now() < end {
        for &t in targets {
            std::hint::black_box(query.answer(s, data, t));
            ops += 1;
        }
    }
    ops as f64 / start.elapsed().as_secs_f64()
}

fn main() -> Result<()> {
    let config = BenchConfig::from_args();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);

    // Values spread over half the size, so most of them repeat
    let span = i32::try_from(config.size / 2).unwrap_or(i32::MAX).max(1);
    let mut data: Vec<i32> = (0..config.size).map(|_| rng.gen_range(0..span)).collect();
    data.sort_unstable();
    // Include misses below, inside and above the range
    let targets: Vec<i32> = (0..config.queries).map(|_| rng.gen_range(-10..span + 10)).collect();

    eprintln!("Search benchmark: size={} seed={} queries={}", config.size, config.seed, targets.len());

    let mut results = Vec::new();
    let mut all_correct = true;

    for query in Query::ALL {
        for s in SEARCHERS {
            let correct = verify_correctness(s, query, &data, &targets);
            all_correct &= correct;
            let ops = benchmark(s, query, &data, &targets, &config);
            eprintln!(
                "  {:<18} {:<12} {:>14.0} queries/s{}",
                query.name(),
                s.name(),
                ops,
                if correct { "" } else { "  MISMATCH" }
            );
            results.push(BenchmarkResult {
                problem: query.name(),
                approach: s.name(),
                tier: s.tier(),
                ops_per_second: ops,
                correct,
            });
        }
    }

    let full = FullResults { results, correctness: all_correct };
    println!("{}", serde_json::to_string(&full)?);
    Ok(())
}
