//! Distribution summary of a trial-outcome collection.
//!
//! Aggregators reduce outcomes to histograms and benchmark tables; this
//! module keeps the center and spread of the raw distribution so the
//! presentation layer can report them next to the binned view.

use serde::{Deserialize, Serialize};

/// Summary statistics over one simulation's trial outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutcomeSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    /// Interquartile range (p75 - p25).
    pub iqr: f64,
    pub p10: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
    pub sample_size: usize,
}

impl OutcomeSummary {
    /// Summarize a collection of trial outcomes.
    ///
    /// An empty collection yields all-zero statistics rather than NaN.
    pub fn from_outcomes(outcomes: &[f64]) -> Self {
        if outcomes.is_empty() {
            return Self {
                mean: 0.0,
                median: 0.0,
                std_dev: 0.0,
                iqr: 0.0,
                p10: 0.0,
                p25: 0.0,
                p75: 0.0,
                p90: 0.0,
                sample_size: 0,
            };
        }

        let n = outcomes.len();
        let mean = outcomes.iter().sum::<f64>() / n as f64;
        let variance =
            outcomes.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

        let mut sorted = outcomes.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let p25 = percentile_sorted(&sorted, 25.0);
        let p75 = percentile_sorted(&sorted, 75.0);

        Self {
            mean,
            median: percentile_sorted(&sorted, 50.0),
            std_dev: variance.sqrt(),
            iqr: p75 - p25,
            p10: percentile_sorted(&sorted, 10.0),
            p25,
            p75,
            p90: percentile_sorted(&sorted, 90.0),
            sample_size: n,
        }
    }
}

/// Percentile of a sorted slice using linear interpolation.
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}
