//! Validated simulation parameters.
//!
//! Both parameter types validate at construction and are immutable
//! afterwards, so the sampling and aggregation functions never have to
//! re-check ranges on the hot path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parameter validation.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("alpha must be a finite value > 1 (got {0})")]
    AlphaOutOfRange(f64),
    #[error("probability {name} must be within [0, 1] (got {value})")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("trials must be >= 1")]
    ZeroTrials,
    #[error("portfolio size must be >= 1")]
    ZeroPortfolioSize,
}

/// Parameters of the zero/one/power-law mixture return distribution.
///
/// A single company's return multiple is 0 with probability `p_zero`, 1
/// with probability `p_one` of the remaining mass, and otherwise a
/// power-law tail draw with shape `alpha`.
///
/// `p_zero + p_one > 1` is accepted: the mixture draw compares one uniform
/// value against the unnormalized cumulative thresholds, so the excess mass
/// is absorbed by the point mass at 1 and the tail branch becomes
/// unreachable. See [`crate::sampler::draw_mixture`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DistributionParams {
    /// Power-law shape parameter. Must be > 1; the tail has no finite mean
    /// for alpha <= 2, which is the model's central property.
    pub alpha: f64,

    /// Probability of a total loss (return multiple exactly 0).
    pub p_zero: f64,

    /// Probability of returning capital (return multiple exactly 1).
    pub p_one: f64,
}

impl DistributionParams {
    /// Validate and construct distribution parameters.
    pub fn new(alpha: f64, p_zero: f64, p_one: f64) -> Result<Self, ParamError> {
        if !alpha.is_finite() || alpha <= 1.0 {
            return Err(ParamError::AlphaOutOfRange(alpha));
        }
        check_probability("p_zero", p_zero)?;
        check_probability("p_one", p_one)?;

        Ok(Self {
            alpha,
            p_zero,
            p_one,
        })
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ParamError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ParamError::ProbabilityOutOfRange { name, value });
    }
    Ok(())
}

/// Size of a single simulation run.
///
/// `trials` controls statistical noise: more trials tighten the estimate
/// without changing its expectation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of independent Monte Carlo trials.
    pub trials: usize,

    /// Number of companies per simulated portfolio.
    pub portfolio_size: usize,
}

impl RunConfig {
    /// Validate and construct a run configuration.
    pub fn new(trials: usize, portfolio_size: usize) -> Result<Self, ParamError> {
        if trials == 0 {
            return Err(ParamError::ZeroTrials);
        }
        if portfolio_size == 0 {
            return Err(ParamError::ZeroPortfolioSize);
        }

        Ok(Self {
            trials,
            portfolio_size,
        })
    }
}
