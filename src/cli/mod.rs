//! Command-line parsing for the light-curve / evidence tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the model and lookup code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::ModelKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lce", version, about = "Light-curve models and evidence lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate model A or B on an evenly spaced time grid.
    Eval(EvalArgs),
    /// Print the stored evidence for one event and model.
    Evidence(EvidenceArgs),
    /// Compare the stored evidences of models A and B for one event.
    Compare(CompareArgs),
    /// Generate noisy synthetic observations of a model.
    Simulate(SimulateArgs),
    /// Plot a previously exported light-curve JSON.
    Plot(PlotArgs),
}

/// Model selection and parameters shared by `eval` and `simulate`.
#[derive(Debug, Args, Clone)]
pub struct ModelArgs {
    /// Which model to evaluate.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelKind::A)]
    pub model: ModelKind,

    /// Peak amplitude (flux units).
    #[arg(short = 'a', long, required_unless_present = "params", allow_negative_numbers = true)]
    pub amplitude: Option<f64>,

    /// Peak width (seconds); must be non-zero.
    #[arg(short = 'd', long, required_unless_present = "params", allow_negative_numbers = true)]
    pub duration: Option<f64>,

    /// JSON file with `amplitude` and `duration` (overrides the flags above).
    #[arg(long, value_name = "JSON")]
    pub params: Option<PathBuf>,
}

/// Time window shared by `eval` and `simulate`.
#[derive(Debug, Args, Clone)]
pub struct TimeArgs {
    /// Start of the time window (seconds).
    #[arg(long, default_value_t = -100.0, allow_negative_numbers = true)]
    pub t_min: f64,

    /// End of the time window (seconds).
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub t_max: f64,
}

/// Terminal plot options.
#[derive(Debug, Args, Clone)]
pub struct PlotSize {
    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub time: TimeArgs,

    /// Number of grid points.
    #[arg(long, default_value_t = 201)]
    pub steps: usize,

    /// Print the `time, flux` table.
    #[arg(long)]
    pub table: bool,

    /// Render an ASCII plot of the curve.
    #[arg(long)]
    pub plot: bool,

    #[command(flatten)]
    pub size: PlotSize,

    /// Export the curve to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,

    /// Export the curve (model + params + grid) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Where to look for results and how to pick among several evidence files.
#[derive(Debug, Args, Clone)]
pub struct ResultsArgs {
    /// Results root (default: `results`).
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Accept several evidence files and take the lexicographically first.
    #[arg(long)]
    pub first_sorted: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct EvidenceArgs {
    /// Event identifier (directory `event<ID>_<model>`).
    #[arg(short = 'e', long)]
    pub event: String,

    /// Model label used in the directory name.
    #[arg(short = 'm', long, default_value = "A")]
    pub model: String,

    #[command(flatten)]
    pub results: ResultsArgs,
}

#[derive(Debug, Parser, Clone)]
pub struct CompareArgs {
    /// Event identifier.
    #[arg(short = 'e', long)]
    pub event: String,

    #[command(flatten)]
    pub results: ResultsArgs,

    /// Print the comparison as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[command(flatten)]
    pub time: TimeArgs,

    /// Number of observations.
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Gaussian noise standard deviation (flux units).
    #[arg(long, default_value_t = 0.05)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Render an ASCII plot (model curve + observations).
    #[arg(long)]
    pub plot: bool,

    #[command(flatten)]
    pub size: PlotSize,

    /// Export observations to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Light-curve JSON produced by `lce eval --export-json`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    #[command(flatten)]
    pub size: PlotSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_eval_with_negative_window() {
        let cli = Cli::parse_from([
            "lce", "eval", "-m", "b", "-a", "2", "-d", "30", "--t-min", "-60", "--t-max", "60",
        ]);
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.model.model, ModelKind::B);
        assert_eq!(args.model.amplitude, Some(2.0));
        assert_eq!(args.time.t_min, -60.0);
        assert_eq!(args.steps, 201);
    }

    #[test]
    fn eval_requires_params_or_flags() {
        assert!(Cli::try_parse_from(["lce", "eval", "-a", "1"]).is_err());
        assert!(Cli::try_parse_from(["lce", "eval", "--params", "p.json"]).is_ok());
    }

    #[test]
    fn evidence_defaults_to_model_a() {
        let cli = Cli::parse_from(["lce", "evidence", "--event", "42"]);
        let Command::Evidence(args) = cli.command else {
            panic!("expected evidence");
        };
        assert_eq!(args.model, "A");
        assert!(args.results.results_dir.is_none());
        assert!(!args.results.first_sorted);
    }
}
