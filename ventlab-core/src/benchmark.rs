//! Benchmark-probability aggregation across portfolio sizes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::params::{DistributionParams, ParamError, RunConfig};
use crate::simulate::simulate_portfolios;

/// Probability of meeting or exceeding one benchmark threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkProbability {
    /// Return-multiple cutoff (e.g. 2.0 for "at least 2x").
    pub threshold: f64,
    /// Percent of trials with mean return >= `threshold`, one decimal.
    pub percent: f64,
}

/// One row of the benchmark table: a portfolio size and its estimated
/// probability of clearing each requested threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkRow {
    pub portfolio_size: usize,
    /// One entry per requested benchmark, in request order.
    pub probabilities: Vec<BenchmarkProbability>,
}

/// For each portfolio size, run a fresh simulation of `trials` portfolios
/// and estimate the probability of meeting or exceeding each benchmark.
///
/// Sizes are processed independently: each row's probabilities come from
/// its own outcome pool, so rows are independent noisy estimates rather
/// than slices of one joint distribution. Within a row the estimates are
/// monotone non-increasing as the threshold grows, because the `>=`
/// predicate sets are nested.
pub fn compute_benchmark_probabilities(
    params: &DistributionParams,
    portfolio_sizes: &[usize],
    benchmarks: &[f64],
    trials: usize,
    rng: &mut impl Rng,
) -> Result<Vec<BenchmarkRow>, ParamError> {
    let mut rows = Vec::with_capacity(portfolio_sizes.len());

    for &portfolio_size in portfolio_sizes {
        let run = RunConfig::new(trials, portfolio_size)?;
        let outcomes = simulate_portfolios(params, &run, rng);

        let probabilities = benchmarks
            .iter()
            .map(|&threshold| {
                let hits = outcomes.iter().filter(|&&x| x >= threshold).count();
                let percent = (hits as f64 / trials as f64 * 1000.0).round() / 10.0;
                BenchmarkProbability { threshold, percent }
            })
            .collect();

        rows.push(BenchmarkRow {
            portfolio_size,
            probabilities,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params() -> DistributionParams {
        DistributionParams::new(1.98, 0.333, 0.333).unwrap()
    }

    #[test]
    fn one_row_per_size_one_entry_per_benchmark() {
        let mut rng = StdRng::seed_from_u64(21);
        let rows = compute_benchmark_probabilities(
            &params(),
            &[10, 20, 50],
            &[1.0, 2.0, 3.0, 5.0],
            200,
            &mut rng,
        )
        .unwrap();

        assert_eq!(rows.len(), 3);
        for (row, &size) in rows.iter().zip(&[10, 20, 50]) {
            assert_eq!(row.portfolio_size, size);
            assert_eq!(row.probabilities.len(), 4);
            let thresholds: Vec<f64> =
                row.probabilities.iter().map(|p| p.threshold).collect();
            assert_eq!(thresholds, vec![1.0, 2.0, 3.0, 5.0]);
        }
    }

    #[test]
    fn probabilities_monotone_in_threshold() {
        let mut rng = StdRng::seed_from_u64(22);
        let rows = compute_benchmark_probabilities(
            &params(),
            &[5, 25],
            &[0.5, 1.0, 1.5, 2.0, 3.0, 5.0, 10.0],
            2_000,
            &mut rng,
        )
        .unwrap();

        for row in &rows {
            for pair in row.probabilities.windows(2) {
                assert!(
                    pair[0].percent >= pair[1].percent,
                    "size {}: P(>= {}) = {} < P(>= {}) = {}",
                    row.portfolio_size,
                    pair[0].threshold,
                    pair[0].percent,
                    pair[1].threshold,
                    pair[1].percent
                );
            }
        }
    }

    #[test]
    fn zero_threshold_is_certain() {
        // Outcomes are never negative, so P(>= 0) is exactly 100%.
        let mut rng = StdRng::seed_from_u64(23);
        let rows =
            compute_benchmark_probabilities(&params(), &[10], &[0.0], 500, &mut rng).unwrap();
        assert_eq!(rows[0].probabilities[0].percent, 100.0);
    }

    #[test]
    fn certain_loss_never_clears_a_positive_benchmark() {
        let p = DistributionParams::new(1.98, 1.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(24);
        let rows = compute_benchmark_probabilities(&p, &[10], &[1.0, 2.0], 500, &mut rng).unwrap();
        assert_eq!(rows[0].probabilities[0].percent, 0.0);
        assert_eq!(rows[0].probabilities[1].percent, 0.0);
    }

    #[test]
    fn invalid_sizes_fail_fast() {
        let mut rng = StdRng::seed_from_u64(25);
        assert_eq!(
            compute_benchmark_probabilities(&params(), &[10, 0], &[1.0], 100, &mut rng),
            Err(ParamError::ZeroPortfolioSize)
        );
        assert_eq!(
            compute_benchmark_probabilities(&params(), &[10], &[1.0], 0, &mut rng),
            Err(ParamError::ZeroTrials)
        );
    }

    #[test]
    fn empty_sizes_yield_empty_table() {
        let mut rng = StdRng::seed_from_u64(26);
        let rows =
            compute_benchmark_probabilities(&params(), &[], &[1.0], 100, &mut rng).unwrap();
        assert!(rows.is_empty());
    }
}
