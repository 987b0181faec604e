//! Portfolio-level Monte Carlo simulation.

use rand::Rng;

use crate::params::{DistributionParams, RunConfig};
use crate::sampler::draw_mixture;

/// Simulate `run.trials` independent portfolios of `run.portfolio_size`
/// companies each and return the mean return multiple of every portfolio.
///
/// Each trial draws `portfolio_size` independent mixture variates and
/// reduces them to their arithmetic mean; the returned collection is the
/// sole handoff to the histogram and benchmark aggregators, and its order
/// carries no meaning. Cost is `O(trials * portfolio_size)` random draws
/// with no memoization.
pub fn simulate_portfolios(
    params: &DistributionParams,
    run: &RunConfig,
    rng: &mut impl Rng,
) -> Vec<f64> {
    let mut outcomes = Vec::with_capacity(run.trials);

    for _ in 0..run.trials {
        let total: f64 = (0..run.portfolio_size)
            .map(|_| draw_mixture(params, rng))
            .sum();
        outcomes.push(total / run.portfolio_size as f64);
    }

    outcomes
}
