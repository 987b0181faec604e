//! VentLab Core — venture-portfolio Monte Carlo engine.
//!
//! This crate contains the simulation and aggregation engine:
//! - Validated distribution and run parameters
//! - Mixture-distribution variate sampling (total loss / capital return /
//!   power-law tail)
//! - Portfolio simulation: independent trials reduced to mean multiples
//! - Histogram binning with an open-ended overflow bucket
//! - Benchmark-probability tables across portfolio sizes
//! - Distribution summaries for the presentation layer
//!
//! The engine is synchronous and single-threaded: every function runs to
//! completion, performs no I/O, and holds no state between calls. The only
//! side effect is consuming entropy from the caller-supplied `Rng`, so
//! concurrent calls are safe whenever each caller owns its own source.
//! Callers wanting a responsive UI run whole calls on a worker thread.

pub mod benchmark;
pub mod histogram;
pub mod params;
pub mod sampler;
pub mod simulate;
pub mod summary;

pub use benchmark::{compute_benchmark_probabilities, BenchmarkProbability, BenchmarkRow};
pub use histogram::{compute_histogram, HistogramBin, HistogramSpec};
pub use params::{DistributionParams, ParamError, RunConfig};
pub use sampler::{draw_mixture, draw_power_law_tail};
pub use simulate::simulate_portfolios;
pub use summary::OutcomeSummary;
