//! Fixed-width binning of trial outcomes.

use serde::{Deserialize, Serialize};

/// Binning knobs for [`compute_histogram`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HistogramSpec {
    /// Width of each return-multiple bin.
    pub bin_width: f64,
    /// Upper edge of the binned range. Outcomes at or beyond the last
    /// bin's lower bound all land in that bin.
    pub max_bin: f64,
}

impl Default for HistogramSpec {
    fn default() -> Self {
        Self {
            bin_width: 0.5,
            max_bin: 12.0,
        }
    }
}

/// One half-open histogram bin `[lower_bound, lower_bound + bin_width)`.
///
/// The terminal bin is a catch-all: it also counts every outcome at or
/// above its lower bound, so nothing is ever dropped as out-of-range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

/// Bucket `outcomes` into fixed-width return-multiple bins.
///
/// A bin index is `floor(outcome / bin_width)` clamped to the last valid
/// index, which makes the final bin an open-ended overflow bucket. For
/// non-negative input (guaranteed by the sampler) the counts sum to
/// `outcomes.len()` and the percents to 100 within rounding.
///
/// Panics if `spec.bin_width <= 0` or `spec.max_bin <= 0`.
pub fn compute_histogram(outcomes: &[f64], spec: &HistogramSpec) -> Vec<HistogramBin> {
    assert!(spec.bin_width > 0.0, "bin_width must be > 0");
    assert!(spec.max_bin > 0.0, "max_bin must be > 0");

    let num_bins = ((spec.max_bin / spec.bin_width).ceil() as usize).max(1);
    let mut counts = vec![0usize; num_bins];

    for &outcome in outcomes {
        // Negative-to-usize casts saturate at 0, so a (contractually
        // impossible) negative outcome would land in the first bin rather
        // than index out of range.
        let idx = ((outcome / spec.bin_width).floor() as usize).min(num_bins - 1);
        counts[idx] += 1;
    }

    let total = outcomes.len();
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower_bound = i as f64 * spec.bin_width;
            let label = if i == num_bins - 1 {
                format!("{lower_bound:.1}x+")
            } else {
                format!("{:.1}-{:.1}x", lower_bound, lower_bound + spec.bin_width)
            };
            let percent = if total == 0 {
                0.0
            } else {
                (count as f64 / total as f64 * 1000.0).round() / 10.0
            };
            HistogramBin {
                lower_bound,
                label,
                count,
                percent,
            }
        })
        .collect()
}
