use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "dugraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Also run with the `parallel` feature and compare
        #[arg(long, default_value_t = false)]
        parallel: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "graph_benchmark";
const SERIAL: &str = "serial";
const PARALLEL: &str = "parallel";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            parallel,
            report_only,
        } => {
            if !report_only {
                run_benchmarks(quick, parallel)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, parallel: bool) -> Result<()> {
    let mut baselines = vec![(SERIAL, None)];
    if parallel {
        baselines.push((PARALLEL, Some("parallel")));
    }

    for (baseline, feature) in baselines {
        println!("\n>>> Benchmarking baseline: {baseline}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.args(["bench", "--bench", BENCH]);
        if let Some(feature) = feature {
            cmd.args(["--features", feature]);
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        cmd.arg("--save-baseline").arg(baseline);

        if quick {
            cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to run cargo bench for {baseline}"))?;
        if !status.success() {
            anyhow::bail!("benchmark run failed for {baseline}");
        }
        println!("Finished {baseline} in {:.2?}", start.elapsed());
    }

    Ok(())
}

/// workload -> baseline -> mean time in nanoseconds
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Graph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | {SERIAL} | {PARALLEL} | speedup |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (workload, baselines) in &results {
        let serial = baselines.get(SERIAL).copied();
        let parallel = baselines.get(PARALLEL).copied();
        let speedup = match (serial, parallel) {
            (Some(s), Some(p)) if p > 0.0 => format!("**{:.2}x**", s / p),
            _ => "-".to_owned(),
        };
        writeln!(
            file,
            "| {workload} | {} | {} | {speedup} |",
            format_time(serial),
            format_time(parallel)
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_time(ns: Option<f64>) -> String {
    match ns {
        None => "N/A".to_owned(),
        Some(ns) if ns > 1_000_000.0 => format!("{:.2} ms", ns / 1_000_000.0),
        Some(ns) if ns > 1_000.0 => format!("{:.2} µs", ns / 1_000.0),
        Some(ns) => format!("{ns:.0} ns"),
    }
}

// Layout: target/criterion/<group>/<bench>/<baseline>/estimates.json
fn collect_results(root: &Path, dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(baseline_dir) = path.parent() else {
            continue;
        };
        let Some(baseline) = baseline_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if baseline != SERIAL && baseline != PARALLEL {
            continue;
        }
        let Some(workload_dir) = baseline_dir.parent() else {
            continue;
        };
        let workload = workload_dir
            .strip_prefix(root)
            .unwrap_or(workload_dir)
            .display()
            .to_string();
        if workload.split('/').any(|part| part == "report") {
            continue;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        if let Some(mean) = json
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
        {
            results
                .entry(workload)
                .or_default()
                .insert(baseline.to_owned(), mean);
        }
    }
    Ok(())
}
