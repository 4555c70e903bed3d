// Throughput harness: every strategy runs over the same inputs the same number
// of times, results are reported fastest first.
use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::Strategy;

#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub strategy: Strategy,
    pub iterations: u32,
    pub total: Duration,
    /// Inputs accepted during a single pass.
    pub accepted: usize,
}

impl Measurement {
    pub fn per_iteration(&self) -> Duration {
        self.total / self.iterations.max(1)
    }
}

/// Timings taken from a debug build say nothing about the matchers.
pub fn is_optimized_build() -> bool {
    !cfg!(debug_assertions)
}

/// Why the benchmark will not run in this build, if it will not.
pub fn refusal() -> Option<&'static str> {
    (!is_optimized_build()).then_some("run the benchmark in release mode: cargo run --release -- bench")
}

pub fn measure(strategy: Strategy, inputs: &[&str], iterations: u32) -> Measurement {
    let matcher = strategy.matcher();
    let accepted = inputs.iter().filter(|input| matcher(input)).count();
    if accepted != inputs.len() {
        warn!(
            "[{}] accepted {} of {} inputs",
            strategy,
            accepted,
            inputs.len()
        );
    }

    let start = Instant::now();
    for _ in 0..iterations {
        for input in inputs {
            black_box(matcher(black_box(input)));
        }
    }
    let total = start.elapsed();
    debug!("[{}] {} iterations in {:?}", strategy, iterations, total);

    Measurement {
        strategy,
        iterations,
        total,
        accepted,
    }
}

/// Measures each strategy in turn and orders the results fastest to slowest.
pub fn run(strategies: &[Strategy], inputs: &[&str], iterations: u32) -> Vec<Measurement> {
    let mut results: Vec<Measurement> = strategies
        .iter()
        .map(|&strategy| measure(strategy, inputs, iterations))
        .collect();
    results.sort_by_key(|m| m.per_iteration());
    results
}
