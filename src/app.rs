//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initialises logging
//! - parses CLI arguments
//! - runs the analysis (or the synthetic recovery check)
//! - prints the report, renders plots and writes optional exports

use std::fs::create_dir_all;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::{AnalyzeArgs, Command, SimulateArgs};
use crate::data::{builtin_dataset, temperatures_k};
use crate::domain::{AnalysisConfig, SimulateConfig};
use crate::error::AppError;
use crate::plot::{EYRING_PLOT_FILE, KIE_PLOT_FILE, PlotStyle};

pub mod pipeline;
pub mod simulate;

/// Entry point for the `kie` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    // `kie` with no subcommand behaves like `kie analyze`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Simulate(args) => handle_simulate(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = analysis_config_from_args(&args);
    let output = pipeline::run_analysis(&config, builtin_dataset())?;

    println!("{}", crate::report::format_analysis(&output));

    if config.plot {
        for path in render_plots(&output, &config)? {
            log::info!("wrote {}", path.display());
        }
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::write_results_json(path, &output)?;
        log::info!("wrote {}", path.display());
    }
    if let Some(path) = &config.export_points {
        crate::io::write_points_csv(path, &output)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

fn handle_simulate(args: SimulateArgs) -> Result<(), AppError> {
    let config = simulate_config_from_args(&args);
    let summary = simulate::run_simulation(&config)?;
    println!("{}", crate::report::format_simulation(&summary));

    if let Some(path) = &config.export {
        crate::io::write_simulation_json(path, &config, &summary)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

/// Render both figures into `config.out_dir` and return the written paths.
pub fn render_plots(output: &pipeline::AnalysisOutput, config: &AnalysisConfig) -> Result<Vec<PathBuf>, AppError> {
    create_dir_all(&config.out_dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create output directory '{}': {e}", config.out_dir.display()),
        )
    })?;
    if config.plot_width < 64 || config.plot_height < 48 {
        return Err(AppError::new(
            2,
            format!("Plot size {}x{} is too small.", config.plot_width, config.plot_height),
        ));
    }

    let style = PlotStyle::new(config.plot_width, config.plot_height);

    let kie_path = config.out_dir.join(KIE_PLOT_FILE);
    crate::plot::render_kie_plot(&kie_path, &output.kie, &style)?;

    let eyring_path = config.out_dir.join(EYRING_PLOT_FILE);
    crate::plot::render_eyring_plot(&eyring_path, &output.eyring_h, &output.eyring_d, &style)?;

    Ok(vec![kie_path, eyring_path])
}

pub fn analysis_config_from_args(args: &AnalyzeArgs) -> AnalysisConfig {
    AnalysisConfig {
        out_dir: args.out_dir.clone(),
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        reference_temp_k: args.reference_temp,
        export_results: args.export.clone(),
        export_points: args.export_points.clone(),
    }
}

pub fn simulate_config_from_args(args: &SimulateArgs) -> SimulateConfig {
    SimulateConfig {
        ea_kcal: args.ea_kcal,
        ln_a: args.ln_a,
        noise: args.noise,
        replicates: args.replicates,
        seed: args.seed,
        temperatures_k: temperatures_k(),
        export: args.export.clone(),
    }
}

/// Rewrite argv so `kie` defaults to `kie analyze`.
///
/// Rules:
/// - `kie`                      -> `kie analyze`
/// - `kie --out-dir plots ...`  -> `kie analyze --out-dir plots ...`
/// - `kie --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("analyze".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "analyze".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_analyze() {
        assert_eq!(rewrite_args(args(&["kie"])), args(&["kie", "analyze"]));
        assert_eq!(
            rewrite_args(args(&["kie", "--no-plot"])),
            args(&["kie", "analyze", "--no-plot"])
        );
        assert_eq!(rewrite_args(args(&["kie", "--help"])), args(&["kie", "--help"]));
        assert_eq!(rewrite_args(args(&["kie", "simulate"])), args(&["kie", "simulate"]));
    }

    #[test]
    fn defaults_reproduce_builtin_run() {
        let cli = crate::cli::Cli::parse_from(rewrite_args(args(&["kie"])));
        let Command::Analyze(a) = cli.command else {
            panic!("expected analyze");
        };
        let config = analysis_config_from_args(&a);
        assert!(config.plot);
        assert_eq!((config.plot_width, config.plot_height), (1920, 1440));
        assert_eq!(config.reference_temp_k, 298.15);
        assert_eq!(config.out_dir, PathBuf::from("."));
    }

    #[test]
    fn simulate_flags_map_to_config() {
        let cli = crate::cli::Cli::parse_from(args(&["kie", "simulate", "--replicates", "10", "--noise", "0.1"]));
        let Command::Simulate(s) = cli.command else {
            panic!("expected simulate");
        };
        let config = simulate_config_from_args(&s);
        assert_eq!(config.replicates, 10);
        assert_eq!(config.noise, 0.1);
        assert_eq!(config.temperatures_k.len(), 4);
        assert!(config.export.is_none());

        let cli = crate::cli::Cli::parse_from(args(&["kie", "simulate", "--export", "sim.json"]));
        let Command::Simulate(s) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(simulate_config_from_args(&s).export, Some(PathBuf::from("sim.json")));
    }

    #[test]
    fn renders_plots_into_out_dir() {
        let out_dir = std::env::temp_dir().join(format!("kie_render_{}", std::process::id()));
        let config = AnalysisConfig {
            out_dir: out_dir.clone(),
            plot_width: 320,
            plot_height: 240,
            ..AnalysisConfig::default()
        };
        let output = pipeline::run_analysis(&config, builtin_dataset()).unwrap();
        let paths = render_plots(&output, &config).unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with(KIE_PLOT_FILE));
        assert!(paths.iter().all(|p| p.metadata().map(|m| m.len() > 0).unwrap_or(false)));
        let _ = std::fs::remove_dir_all(&out_dir);
    }
}
