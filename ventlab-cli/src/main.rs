//! VentLab CLI — venture-portfolio Monte Carlo commands.
//!
//! Commands:
//! - `histogram` — simulate one portfolio size and print the outcome
//!   histogram with summary statistics
//! - `benchmark` — estimate the probability of clearing each benchmark
//!   multiple across several portfolio sizes
//! - `run` — execute a full run from a TOML config file and export
//!   `manifest.json`, `histogram.csv`, and `benchmarks.csv`
//!
//! Simulations draw from the process RNG and are intentionally not
//! reproducible across invocations.

mod config;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ventlab_core::{
    compute_benchmark_probabilities, compute_histogram, simulate_portfolios,
    DistributionParams, HistogramSpec, OutcomeSummary, RunConfig,
};

use crate::config::SimConfig;

#[derive(Parser)]
#[command(
    name = "ventlab",
    about = "VentLab CLI — power-law venture portfolio simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one portfolio size and print the outcome histogram.
    Histogram {
        /// Power-law shape parameter (> 1).
        #[arg(long, default_value_t = 1.98)]
        alpha: f64,

        /// Probability of a total loss.
        #[arg(long, default_value_t = 0.333)]
        p_zero: f64,

        /// Probability of exactly returning capital.
        #[arg(long, default_value_t = 0.333)]
        p_one: f64,

        /// Companies per simulated portfolio.
        #[arg(long, default_value_t = 20)]
        portfolio_size: usize,

        /// Number of Monte Carlo trials.
        #[arg(long, default_value_t = 10_000)]
        trials: usize,

        /// Histogram bin width in return multiples.
        #[arg(long, default_value_t = 0.5)]
        bin_width: f64,

        /// Upper edge of the binned range; everything beyond lands in the
        /// terminal bucket.
        #[arg(long, default_value_t = 12.0)]
        max_bin: f64,
    },
    /// Estimate benchmark probabilities across portfolio sizes.
    Benchmark {
        /// Power-law shape parameter (> 1).
        #[arg(long, default_value_t = 1.98)]
        alpha: f64,

        /// Probability of a total loss.
        #[arg(long, default_value_t = 0.333)]
        p_zero: f64,

        /// Probability of exactly returning capital.
        #[arg(long, default_value_t = 0.333)]
        p_one: f64,

        /// Portfolio sizes, comma separated (e.g. 1,10,50).
        #[arg(long, value_delimiter = ',', default_value = "1,5,10,20,50,100")]
        portfolio_sizes: Vec<usize>,

        /// Benchmark return multiples, comma separated (e.g. 1,2,5).
        #[arg(long, value_delimiter = ',', default_value = "1,2,3,5,10")]
        benchmarks: Vec<f64>,

        /// Number of Monte Carlo trials per portfolio size.
        #[arg(long, default_value_t = 10_000)]
        trials: usize,
    },
    /// Execute a full run from a TOML config file and export artifacts.
    Run {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,

        /// Output directory for artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Histogram {
            alpha,
            p_zero,
            p_one,
            portfolio_size,
            trials,
            bin_width,
            max_bin,
        } => run_histogram_cmd(
            alpha,
            p_zero,
            p_one,
            portfolio_size,
            trials,
            HistogramSpec { bin_width, max_bin },
        ),
        Commands::Benchmark {
            alpha,
            p_zero,
            p_one,
            portfolio_sizes,
            benchmarks,
            trials,
        } => run_benchmark_cmd(alpha, p_zero, p_one, &portfolio_sizes, &benchmarks, trials),
        Commands::Run { config, output_dir } => run_config_cmd(&config, &output_dir),
    }
}

fn run_histogram_cmd(
    alpha: f64,
    p_zero: f64,
    p_one: f64,
    portfolio_size: usize,
    trials: usize,
    spec: HistogramSpec,
) -> Result<()> {
    let params = DistributionParams::new(alpha, p_zero, p_one)?;
    let run = RunConfig::new(trials, portfolio_size)?;
    let mut rng = rand::thread_rng();

    let outcomes = simulate_portfolios(&params, &run, &mut rng);
    let bins = compute_histogram(&outcomes, &spec);
    let summary = OutcomeSummary::from_outcomes(&outcomes);

    println!(
        "Simulated {} portfolios of {} companies (alpha = {}, p0 = {}, p1 = {})",
        trials, portfolio_size, alpha, p_zero, p_one
    );
    report::print_histogram(&bins);
    report::print_summary(&summary);

    Ok(())
}

fn run_benchmark_cmd(
    alpha: f64,
    p_zero: f64,
    p_one: f64,
    portfolio_sizes: &[usize],
    benchmarks: &[f64],
    trials: usize,
) -> Result<()> {
    let params = DistributionParams::new(alpha, p_zero, p_one)?;
    let mut rng = rand::thread_rng();

    let rows =
        compute_benchmark_probabilities(&params, portfolio_sizes, benchmarks, trials, &mut rng)?;

    println!(
        "Estimated from {} trials per portfolio size (alpha = {}, p0 = {}, p1 = {})",
        trials, alpha, p_zero, p_one
    );
    report::print_benchmarks(&rows);

    Ok(())
}

fn run_config_cmd(config_path: &std::path::Path, output_dir: &std::path::Path) -> Result<()> {
    let config = SimConfig::from_file(config_path)?;

    let params = DistributionParams::new(
        config.distribution.alpha,
        config.distribution.p_zero,
        config.distribution.p_one,
    )?;
    let trials = config.simulation.trials;
    let mut rng = rand::thread_rng();

    let run = RunConfig::new(trials, config.histogram.portfolio_size)?;
    let outcomes = simulate_portfolios(&params, &run, &mut rng);
    let spec = HistogramSpec {
        bin_width: config.histogram.bin_width,
        max_bin: config.histogram.max_bin,
    };
    let bins = compute_histogram(&outcomes, &spec);
    let summary = OutcomeSummary::from_outcomes(&outcomes);

    let rows = compute_benchmark_probabilities(
        &params,
        &config.benchmark.portfolio_sizes,
        &config.benchmark.benchmarks,
        trials,
        &mut rng,
    )?;

    println!(
        "Simulated {} portfolios of {} companies (alpha = {}, p0 = {}, p1 = {})",
        trials,
        config.histogram.portfolio_size,
        config.distribution.alpha,
        config.distribution.p_zero,
        config.distribution.p_one
    );
    report::print_histogram(&bins);
    report::print_summary(&summary);
    report::print_benchmarks(&rows);

    let paths = report::save_artifacts(output_dir, &config, &summary, &bins, &rows)?;
    println!();
    println!("Artifacts saved to: {}", output_dir.display());
    println!("  {}", paths.manifest.display());
    println!("  {}", paths.histogram_csv.display());
    println!("  {}", paths.benchmarks_csv.display());

    Ok(())
}
