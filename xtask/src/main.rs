use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "linkcell workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and write a Markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Also build with the `tracing` feature to measure its overhead
        #[arg(long, default_value_t = false)]
        with_tracing: bool,
    },
}

const BENCH: &str = "linked_cell_benchmark";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// `estimates.json` as written by criterion; only the mean is read.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `benchmark.json` as written by criterion.
#[derive(Deserialize)]
struct BenchmarkMeta {
    full_id: String,
    #[serde(default)]
    throughput: Option<serde_json::Value>,
}

struct Row {
    id: String,
    mean_ns: f64,
    elements: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            with_tracing,
        } => {
            if !report_only {
                run_benchmarks(quick, with_tracing)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, with_tracing: bool) -> Result<()> {
    let start = Instant::now();
    println!(">>> Running {BENCH}...");

    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--bench").arg(BENCH);
    if with_tracing {
        cmd.arg("--features").arg("tracing");
    }

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn cargo bench for {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("benchmark {BENCH} failed with {status}");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut estimate_files = Vec::new();
    collect_estimates(criterion_dir, &mut estimate_files);

    let mut rows = Vec::new();
    for path in estimate_files {
        match read_row(&path) {
            Ok(row) => rows.push(row),
            Err(err) => eprintln!("Skipping {}: {err:#}", path.display()),
        }
    }
    rows.sort_by(|a, b| a.id.cmp(&b.id));

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("failed to create {}", report_path.display()))?;

    writeln!(file, "# linkcell Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean | Ops/s | Elements/s |")?;
    writeln!(file, "|---|---|---|---|")?;
    for row in &rows {
        let ops = 1e9 / row.mean_ns;
        let elements = row
            .elements
            .map_or_else(|| "-".to_string(), |n| format_rate(n * ops));
        writeln!(
            file,
            "| {} | {:.1} ns | {} | {} |",
            row.id,
            row.mean_ns,
            format_rate(ops),
            elements
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Collects every `new/estimates.json` below `dir`.
fn collect_estimates(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_estimates(&path, out);
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json")
            && path
                .parent()
                .and_then(Path::file_name)
                .and_then(|s| s.to_str())
                == Some("new")
        {
            out.push(path);
        }
    }
}

fn read_row(estimates_path: &Path) -> Result<Row> {
    let meta_path = estimates_path.with_file_name("benchmark.json");

    let meta: BenchmarkMeta = serde_json::from_str(
        &fs::read_to_string(&meta_path)
            .with_context(|| format!("failed to read {}", meta_path.display()))?,
    )
    .with_context(|| format!("malformed {}", meta_path.display()))?;

    let estimates: Estimates = serde_json::from_str(
        &fs::read_to_string(estimates_path)
            .with_context(|| format!("failed to read {}", estimates_path.display()))?,
    )
    .with_context(|| format!("malformed {}", estimates_path.display()))?;

    if estimates.mean.point_estimate <= 0.0 {
        anyhow::bail!("non-positive mean estimate");
    }

    let elements = meta
        .throughput
        .as_ref()
        .and_then(|t| t.get("Elements"))
        .and_then(serde_json::Value::as_f64);

    Ok(Row {
        id: meta.full_id,
        mean_ns: estimates.mean.point_estimate,
        elements,
    })
}

fn format_rate(rate: f64) -> String {
    if rate > 1_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else if rate > 1_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else {
        format!("{rate:.0}")
    }
}
