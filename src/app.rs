//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging
//! - parses CLI arguments
//! - evaluates models / looks up evidence
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{Command, CompareArgs, EvalArgs, EvidenceArgs, ModelArgs, PlotArgs, SimulateArgs};
use crate::domain::{EvalConfig, GridSpec, ModelParameters, SimulationConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lce` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init();

    // `lce -a 1 -d 30` behaves like `lce eval -a 1 -d 30`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Evidence(args) => handle_evidence(args),
        Command::Compare(args) => handle_compare(args),
        Command::Simulate(args) => handle_simulate(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let config = eval_config_from_args(&args)?;
    let run = pipeline::run_eval(&config)?;

    println!(
        "{}",
        crate::report::format_eval_summary(config.model, &config.params, &run.times, &run.flux)
    );
    if args.table {
        println!("{}", crate::report::format_curve_table(&run.times, &run.flux));
    }
    if args.plot {
        let curve: Vec<(f64, f64)> = run.times.iter().copied().zip(run.flux.iter().copied()).collect();
        let plot = crate::plot::render_ascii_plot(&curve, &[], args.size.width, args.size.height);
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &args.export_csv {
        crate::io::write_curve_csv(path, config.model, &run.times, &run.flux)?;
        info!(path = %path.display(), "wrote curve CSV");
    }
    if let Some(path) = &args.export_json {
        let file = crate::io::light_curve_file(config.model, config.params, &run.times, &run.flux);
        crate::io::write_curve_json(path, &file)?;
        info!(path = %path.display(), "wrote curve JSON");
    }

    Ok(())
}

fn handle_evidence(args: EvidenceArgs) -> Result<(), AppError> {
    let lookup = crate::config::evidence_lookup(args.results.results_dir, args.results.first_sorted);
    let value = lookup.evidence(&args.event, &args.model)?;
    print!("{}", crate::report::format_evidence(&args.event, &args.model, value));
    Ok(())
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let lookup = crate::config::evidence_lookup(args.results.results_dir, args.results.first_sorted);
    let comparison = crate::evidence::compare_models(&lookup, &args.event)?;

    if args.json {
        let json = serde_json::to_string_pretty(&comparison)
            .map_err(|e| AppError::output(format!("Failed to serialize comparison: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_comparison(&comparison));
    }
    Ok(())
}

fn handle_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let config = SimulationConfig {
        model: args.model.model,
        params: params_from_args(&args.model)?,
        t_min: args.time.t_min,
        t_max: args.time.t_max,
        count: args.count,
        noise_sigma: args.noise,
        seed: args.seed,
    };
    let obs = crate::data::simulate(&config)?;

    println!(
        "{}",
        crate::report::format_simulation_summary(config.model, &config.params, &obs)
    );
    if args.plot {
        let points: Vec<(f64, f64)> = obs.times.iter().copied().zip(obs.flux.iter().copied()).collect();
        let plot = crate::plot::render_model_plot(
            config.model,
            &config.params,
            config.t_min,
            config.t_max,
            &points,
            args.size.width,
            args.size.height,
        );
        println!("{plot}");
    }
    if let Some(path) = &args.export_csv {
        crate::io::write_observations_csv(path, config.model, &obs)?;
        info!(path = %path.display(), "wrote observations CSV");
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let curve = crate::io::read_curve_json(&args.curve)?;
    let plot = crate::plot::render_curve_file_plot(&curve, args.size.width, args.size.height);
    println!("{plot}");
    Ok(())
}

/// Resolve model parameters from `--params` or the explicit flags.
pub fn params_from_args(args: &ModelArgs) -> Result<ModelParameters, AppError> {
    if let Some(path) = &args.params {
        return crate::io::read_params_json(path);
    }
    let amplitude = args
        .amplitude
        .ok_or_else(|| AppError::parameter("Missing model parameter 'amplitude'."))?;
    let duration = args
        .duration
        .ok_or_else(|| AppError::parameter("Missing model parameter 'duration'."))?;
    ModelParameters::new(amplitude, duration)
}

pub fn eval_config_from_args(args: &EvalArgs) -> Result<EvalConfig, AppError> {
    Ok(EvalConfig {
        model: args.model.model,
        params: params_from_args(&args.model)?,
        grid: GridSpec {
            t_min: args.time.t_min,
            t_max: args.time.t_max,
            steps: args.steps,
        },
    })
}

/// Rewrite argv so bare flags default to `lce eval`.
///
/// Rules:
/// - `lce -a 1 -d 30 ...`       -> `lce eval -a 1 -d 30 ...`
/// - `lce --help/--version/-h`  -> unchanged (show top-level help/version)
/// - `lce` / `lce <subcommand>` -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version");
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "eval".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_flags_become_eval() {
        assert_eq!(rewrite_args(argv(&["lce", "-a", "1"])), argv(&["lce", "eval", "-a", "1"]));
        assert_eq!(rewrite_args(argv(&["lce", "--help"])), argv(&["lce", "--help"]));
        assert_eq!(rewrite_args(argv(&["lce", "plot", "--curve", "x"])), argv(&["lce", "plot", "--curve", "x"]));
    }

    #[test]
    fn eval_config_validates_parameters() {
        let cli = Cli::parse_from(["lce", "eval", "-a", "1", "-d", "0"]);
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        let err = eval_config_from_args(&args).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Parameter);
    }

    #[test]
    fn params_file_overrides_flags() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("p.json");
        std::fs::write(&path, r#"{"amplitude": 9.0, "duration": 3.0}"#).unwrap();

        let cli = Cli::parse_from([
            "lce",
            "eval",
            "-a",
            "1",
            "-d",
            "1",
            "--params",
            path.to_str().unwrap(),
        ]);
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        let config = eval_config_from_args(&args).unwrap();
        assert_eq!(config.params, ModelParameters { amplitude: 9.0, duration: 3.0 });
    }
}
