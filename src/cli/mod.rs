//! Command-line parsing for the kinetic isotope effect analysis.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fitting/thermodynamics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::T_REF;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "kie", version, about = "Kinetic isotope effect analysis (Arrhenius + Eyring)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit the built-in H/D dataset, print derived quantities and render plots.
    Analyze(AnalyzeArgs),
    /// Check Arrhenius parameter recovery on synthetic replicates.
    Simulate(SimulateArgs),
}

/// Options for the analysis run.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Directory the PNG plots are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip PNG rendering.
    #[arg(long)]
    pub no_plot: bool,

    /// Image width (pixels).
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Image height (pixels).
    #[arg(long, default_value_t = 1440)]
    pub height: u32,

    /// Temperature (K) at which the Gibbs energy of activation is evaluated.
    #[arg(long, default_value_t = T_REF)]
    pub reference_temp: f64,

    /// Export all derived results to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export per-temperature transformed data to CSV.
    #[arg(long = "export-points", value_name = "CSV")]
    pub export_points: Option<PathBuf>,
}

/// Options for the synthetic recovery check.
#[derive(Debug, Parser, Clone)]
pub struct SimulateArgs {
    /// True activation energy (kcal/mol).
    #[arg(long, default_value_t = 27.0)]
    pub ea_kcal: f64,

    /// True ln A (natural log of the pre-exponential factor).
    #[arg(long, default_value_t = 30.0)]
    pub ln_a: f64,

    /// Relative standard deviation of each synthetic rate constant.
    #[arg(long, default_value_t = 0.03)]
    pub noise: f64,

    /// Number of synthetic datasets.
    #[arg(long, default_value_t = 200)]
    pub replicates: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Export the recovery summary to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
