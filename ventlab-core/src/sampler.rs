//! Variate sampling from the mixture return distribution.
//!
//! Both functions thread an explicit `&mut impl Rng`: callers own the
//! random source, so tests can pass a seeded `StdRng` while production
//! callers pass `rand::thread_rng()`. Neither function locks; concurrent
//! calls are safe exactly when the supplied source is.

use rand::Rng;

use crate::params::DistributionParams;

/// Draw one sample >= `xmin` from a power-law (Pareto-type) tail with
/// shape `alpha`, via inverse-transform sampling:
///
/// ```text
/// x = xmin * (1 - u)^(-1 / (alpha - 1)),  u ~ Uniform[0, 1)
/// ```
///
/// For `alpha <= 2` the distribution has no finite mean. That is the
/// model's central property: rare draws are enormous, and the sample mean
/// never settles. No truncation or resampling is applied.
///
/// Panics if `alpha <= 1` or `xmin <= 0`.
pub fn draw_power_law_tail(alpha: f64, xmin: f64, rng: &mut impl Rng) -> f64 {
    assert!(alpha > 1.0, "alpha must be > 1");
    assert!(xmin > 0.0, "xmin must be > 0");

    let u: f64 = rng.gen();
    // u in [0, 1) keeps the base in (0, 1], so the negative exponent can
    // never divide by zero and the result is always >= xmin.
    xmin * (1.0 - u).powf(-1.0 / (alpha - 1.0))
}

/// Draw one return multiple from the mixture distribution: exactly 0 with
/// probability `p_zero`, exactly 1 with probability `p_one` of the
/// remaining mass, otherwise a power-law tail draw with `xmin = 1`.
///
/// A single uniform draw is compared against the cumulative thresholds
/// `p_zero` and `p_zero + p_one`. The thresholds are sequential, not
/// normalized: if `p_zero + p_one > 1` the second comparison always
/// succeeds, the tail branch becomes unreachable, and the point mass at 1
/// silently absorbs the excess. This is intentional behavior.
pub fn draw_mixture(params: &DistributionParams, rng: &mut impl Rng) -> f64 {
    let r: f64 = rng.gen();
    if r < params.p_zero {
        0.0
    } else if r < params.p_zero + params.p_one {
        1.0
    } else {
        draw_power_law_tail(params.alpha, 1.0, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(alpha: f64, p_zero: f64, p_one: f64) -> DistributionParams {
        DistributionParams::new(alpha, p_zero, p_one).unwrap()
    }

    #[test]
    fn tail_draw_never_below_xmin() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            assert!(draw_power_law_tail(1.98, 1.0, &mut rng) >= 1.0);
        }
        for _ in 0..10_000 {
            assert!(draw_power_law_tail(3.0, 2.5, &mut rng) >= 2.5);
        }
    }

    #[test]
    fn higher_alpha_thins_the_tail() {
        // With this parameterization the tail is Pareto with shape
        // alpha - 1, so E[x] = (alpha - 1) / (alpha - 2) for alpha > 2.
        // alpha = 6 has finite variance; check its mean tightly and check
        // the heavier alpha = 3 tail dominates it.
        let n = 100_000;

        let mut rng = StdRng::seed_from_u64(42);
        let mean_heavy: f64 =
            (0..n).map(|_| draw_power_law_tail(3.0, 1.0, &mut rng)).sum::<f64>() / n as f64;

        let mut rng = StdRng::seed_from_u64(42);
        let mean_thin: f64 =
            (0..n).map(|_| draw_power_law_tail(6.0, 1.0, &mut rng)).sum::<f64>() / n as f64;

        assert!(
            mean_heavy > mean_thin,
            "alpha=3 sample mean {mean_heavy} should exceed alpha=6 mean {mean_thin}"
        );
        assert!(
            (mean_thin - 1.25).abs() < 0.02,
            "alpha=6 sample mean {mean_thin} should be near 5/4"
        );
    }

    #[test]
    #[should_panic(expected = "alpha must be > 1")]
    fn tail_draw_rejects_alpha_at_one() {
        let mut rng = StdRng::seed_from_u64(0);
        draw_power_law_tail(1.0, 1.0, &mut rng);
    }

    #[test]
    #[should_panic(expected = "xmin must be > 0")]
    fn tail_draw_rejects_nonpositive_xmin() {
        let mut rng = StdRng::seed_from_u64(0);
        draw_power_law_tail(2.0, 0.0, &mut rng);
    }

    #[test]
    fn all_mass_on_zero() {
        let p = params(1.98, 1.0, 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            assert_eq!(draw_mixture(&p, &mut rng), 0.0);
        }
    }

    #[test]
    fn all_mass_on_one() {
        let p = params(1.98, 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1_000 {
            assert_eq!(draw_mixture(&p, &mut rng), 1.0);
        }
    }

    #[test]
    fn all_mass_on_tail() {
        let p = params(1.98, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert!(draw_mixture(&p, &mut rng) >= 1.0);
        }
    }

    #[test]
    fn excess_mass_starves_the_tail() {
        // p_zero + p_one = 1.4: every draw must be exactly 0 or exactly 1,
        // and the point mass at 1 absorbs the overlap.
        let p = params(1.98, 0.7, 0.7);
        let mut rng = StdRng::seed_from_u64(4);
        let mut saw_one = false;
        for _ in 0..10_000 {
            let x = draw_mixture(&p, &mut rng);
            assert!(x == 0.0 || x == 1.0, "unexpected tail draw {x}");
            saw_one |= x == 1.0;
        }
        assert!(saw_one);
    }

    #[test]
    fn mixture_frequencies_track_thresholds() {
        let p = params(1.98, 0.333, 0.333);
        let mut rng = StdRng::seed_from_u64(5);
        let n = 100_000;

        let mut zeros = 0usize;
        let mut ones = 0usize;
        for _ in 0..n {
            match draw_mixture(&p, &mut rng) {
                x if x == 0.0 => zeros += 1,
                x if x == 1.0 => ones += 1,
                x => assert!(x >= 1.0),
            }
        }

        let zero_frac = zeros as f64 / n as f64;
        let one_frac = ones as f64 / n as f64;
        assert!((zero_frac - 0.333).abs() < 0.02, "zero fraction {zero_frac}");
        assert!((one_frac - 0.333).abs() < 0.02, "one fraction {one_frac}");
    }
}
