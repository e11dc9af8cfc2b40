use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cycleperform::catalog::DASHBOARD_METRICS;
use cycleperform::dashboard::Dashboard;
use cycleperform::{report, sample, twin};

#[derive(Parser)]
#[command(name = "cycleperform")]
#[command(about = "Survey aggregation pipeline for the CyclePerform dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Top-line stats for a survey export
    Summary {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Answer counts for one labeled question
    Distribution {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, default_value = "Energy Fluctuations")]
        label: String,
    },
    /// Pearson matrix across the dashboard metrics
    Correlations {
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Render the markdown report
    Report {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the ready-to-render JSON snapshot
    Export {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long, default_value = "dashboard.json")]
        out: PathBuf,
    },
    /// Print the 28-day phase training plan
    Plan {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a synthetic survey export
    Sample {
        #[arg(long, default_value = "sample-responses.csv")]
        out: PathBuf,
        #[arg(long, default_value_t = 361)]
        rows: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { csv } => {
            let dashboard = open_dashboard(csv)?;
            let table = dashboard.scored_table();
            println!(
                "{} respondents across {} columns.",
                table.len(),
                table.columns.len()
            );
            if let Some(mean) = table.mean_impact_score() {
                println!("Mean impact score {mean:.2} (1 = high impact, 3 = low).");
            }
            for metric in DASHBOARD_METRICS {
                let result = dashboard.distribution(metric)?;
                let counts: Vec<String> = result
                    .levels
                    .iter()
                    .map(|entry| format!("{} {}", entry.level, entry.count))
                    .collect();
                println!("- {}: {}", metric, counts.join(", "));
            }
        }
        Commands::Distribution { csv, label } => {
            let dashboard = open_dashboard(csv)?;
            let result = dashboard.distribution(&label)?;
            println!("Distribution of {label}:");
            for entry in &result.levels {
                println!("- {}: {}", entry.level, entry.count);
            }
        }
        Commands::Correlations { csv } => {
            let dashboard = open_dashboard(csv)?;
            let matrix = dashboard.correlation_matrix(&DASHBOARD_METRICS);
            for (index, metric) in matrix.metrics.iter().enumerate() {
                let cells: Vec<String> = matrix.values[index]
                    .iter()
                    .map(|value| {
                        if value.is_nan() {
                            "    --".to_string()
                        } else {
                            format!("{value:>6.2}")
                        }
                    })
                    .collect();
                println!("{metric:>28}  {}", cells.join(" "));
            }
        }
        Commands::Report { csv, out, seed } => {
            let dashboard = open_dashboard(csv)?;
            let plan = twin::training_plan(seed);
            let rendered = report::build_report(&dashboard, &plan);
            std::fs::write(&out, rendered)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { csv, out } => {
            let dashboard = open_dashboard(csv)?;
            let snapshot = dashboard.snapshot();
            let json = serde_json::to_string_pretty(&snapshot)?;
            std::fs::write(&out, json)?;
            println!("Snapshot written to {}.", out.display());
        }
        Commands::Plan { seed } => {
            let plan = twin::training_plan(seed);
            for day in &plan {
                println!(
                    "Day {:>2} ({}): {} at {}% intensity",
                    day.day, day.phase, day.workout, day.intensity
                );
            }
            println!();
            for phase in twin::CyclePhase::ALL {
                println!("{phase}:");
                for tip in twin::advice(phase) {
                    println!("- {tip}");
                }
            }
        }
        Commands::Sample { out, rows, seed } => {
            let written = sample::write_sample(&out, rows, seed)?;
            println!("Wrote {written} synthetic responses to {}.", out.display());
        }
    }

    Ok(())
}

fn open_dashboard(csv: Option<PathBuf>) -> anyhow::Result<Dashboard> {
    let path = survey_path(csv)?;
    Dashboard::open(&path)
        .with_context(|| format!("failed to load survey data from {}", path.display()))
}

fn survey_path(csv: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match csv {
        Some(path) => Ok(path),
        None => std::env::var("SURVEY_CSV")
            .map(PathBuf::from)
            .context("pass --csv or set SURVEY_CSV to the survey export"),
    }
}
