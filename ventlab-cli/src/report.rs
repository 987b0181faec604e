//! Table printing and artifact export.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use ventlab_core::{BenchmarkRow, HistogramBin, OutcomeSummary};

use crate::config::SimConfig;

/// Print the outcome histogram as an aligned table with a text bar.
pub fn print_histogram(bins: &[HistogramBin]) {
    println!();
    println!("=== Outcome Histogram ===");
    println!("{:<12} {:>8} {:>8}", "Multiple", "Count", "Percent");
    println!("{}", "-".repeat(52));
    for bin in bins {
        let bar = "#".repeat((bin.percent / 2.0).round() as usize);
        println!(
            "{:<12} {:>8} {:>7.1}% {}",
            bin.label, bin.count, bin.percent, bar
        );
    }
}

/// Print summary statistics of the trial outcomes.
pub fn print_summary(summary: &OutcomeSummary) {
    println!();
    println!("--- Outcome Distribution ---");
    println!("Trials:         {}", summary.sample_size);
    println!("Mean:           {:.3}x", summary.mean);
    println!("Median:         {:.3}x", summary.median);
    println!("Std Dev:        {:.3}", summary.std_dev);
    println!("IQR:            {:.3}", summary.iqr);
    println!(
        "p10 / p90:      {:.3}x / {:.3}x",
        summary.p10, summary.p90
    );
}

/// Print the benchmark-probability table, one row per portfolio size.
pub fn print_benchmarks(rows: &[BenchmarkRow]) {
    println!();
    println!("=== Benchmark Probabilities ===");
    let Some(first) = rows.first() else {
        println!("(no portfolio sizes requested)");
        return;
    };

    print!("{:<10}", "Companies");
    for prob in &first.probabilities {
        print!(" {:>9}", format!(">={}x", prob.threshold));
    }
    println!();
    println!("{}", "-".repeat(10 + 10 * first.probabilities.len()));

    for row in rows {
        print!("{:<10}", row.portfolio_size);
        for prob in &row.probabilities {
            print!(" {:>8.1}%", prob.percent);
        }
        println!();
    }
}

/// Artifact paths returned after export.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub manifest: PathBuf,
    pub histogram_csv: PathBuf,
    pub benchmarks_csv: PathBuf,
}

/// Write `manifest.json`, `histogram.csv`, and `benchmarks.csv` into
/// `output_dir`, creating it if needed.
pub fn save_artifacts(
    output_dir: &Path,
    config: &SimConfig,
    summary: &OutcomeSummary,
    bins: &[HistogramBin],
    rows: &[BenchmarkRow],
) -> Result<ArtifactPaths> {
    std::fs::create_dir_all(output_dir)
        .context("Failed to create artifact output directory")?;

    let manifest = output_dir.join("manifest.json");
    write_manifest(&manifest, config, summary)?;

    let histogram_csv = output_dir.join("histogram.csv");
    write_histogram_csv(&histogram_csv, bins)?;

    let benchmarks_csv = output_dir.join("benchmarks.csv");
    write_benchmarks_csv(&benchmarks_csv, rows)?;

    Ok(ArtifactPaths {
        manifest,
        histogram_csv,
        benchmarks_csv,
    })
}

fn write_manifest(path: &Path, config: &SimConfig, summary: &OutcomeSummary) -> Result<()> {
    let manifest = serde_json::json!({
        "config": config,
        "summary": summary,
    });
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(path, json).context("Failed to write manifest.json")?;
    Ok(())
}

fn write_histogram_csv(path: &Path, bins: &[HistogramBin]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("Failed to create histogram.csv")?;
    writer.write_record(["lower_bound", "label", "count", "percent"])?;
    for bin in bins {
        writer.write_record([
            bin.lower_bound.to_string(),
            bin.label.clone(),
            bin.count.to_string(),
            bin.percent.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_benchmarks_csv(path: &Path, rows: &[BenchmarkRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("Failed to create benchmarks.csv")?;

    let mut header = vec!["portfolio_size".to_string()];
    if let Some(first) = rows.first() {
        for prob in &first.probabilities {
            header.push(format!("p_ge_{}x", prob.threshold));
        }
    }
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.portfolio_size.to_string()];
        for prob in &row.probabilities {
            record.push(prob.percent.to_string());
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
