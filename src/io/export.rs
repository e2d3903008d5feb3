//! Export analysis results to JSON and per-temperature data to CSV.
//!
//! The exports are meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::pipeline::AnalysisOutput;
use crate::domain::{
    ArrheniusResult, EyringResult, IsotopeComparison, KieResult, PlotPoint, RatePoint, SimulateConfig, SimulationSummary,
};
use crate::error::AppError;

/// Schema of the JSON results file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub reference_temp_k: f64,
    pub kie: KieResult,
    pub arrhenius: Vec<ArrheniusResult>,
    pub eyring: Vec<EyringResult>,
    pub comparison: IsotopeComparison,
}

impl ResultsFile {
    pub fn from_output(output: &AnalysisOutput) -> Self {
        Self {
            tool: "kie".to_string(),
            generated_at: Utc::now(),
            reference_temp_k: output.eyring_h.reference_temp_k,
            kie: output.kie.clone(),
            arrhenius: vec![output.arrhenius_h.clone(), output.arrhenius_d.clone()],
            eyring: vec![output.eyring_h.clone(), output.eyring_d.clone()],
            comparison: output.comparison,
        }
    }
}

/// Write the results JSON file.
pub fn write_results_json(path: &Path, output: &AnalysisOutput) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create results JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(BufWriter::new(file), &ResultsFile::from_output(output))
        .map_err(|e| AppError::new(2, format!("Failed to write results JSON: {e}")))?;

    Ok(())
}

/// Read a results JSON file.
pub fn read_results_json(path: &Path) -> Result<ResultsFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open results JSON '{}': {e}", path.display())))?;
    let results: ResultsFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid results JSON: {e}")))?;
    Ok(results)
}

/// Schema of the JSON file written by `kie simulate --export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub ln_a: f64,
    pub noise: f64,
    pub seed: u64,
    pub temperatures_k: Vec<f64>,
    pub summary: SimulationSummary,
}

pub fn write_simulation_json(path: &Path, config: &SimulateConfig, summary: &SimulationSummary) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create simulation JSON '{}': {e}", path.display())))?;

    let record = SimulationFile {
        tool: "kie".to_string(),
        generated_at: Utc::now(),
        ln_a: config.ln_a,
        noise: config.noise,
        seed: config.seed,
        temperatures_k: config.temperatures_k.clone(),
        summary: summary.clone(),
    };
    serde_json::to_writer_pretty(BufWriter::new(file), &record)
        .map_err(|e| AppError::new(2, format!("Failed to write simulation JSON: {e}")))?;

    Ok(())
}

pub fn read_simulation_json(path: &Path) -> Result<SimulationFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open simulation JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid simulation JSON: {e}")))
}

/// Write the transformed per-temperature data to CSV.
///
/// One row per isotope per temperature; the KIE columns repeat on both rows.
pub fn write_points_csv(path: &Path, output: &AnalysisOutput) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create points CSV '{}': {e}", path.display())))?;
    let mut file = BufWriter::new(file);

    writeln!(
        file,
        "temperature_k,inv_t,isotope,k,k_sd,ln_k,ln_k_sd,ln_k_over_t,ln_k_over_t_sd,ln_kie,ln_kie_sd"
    )
    .map_err(|e| AppError::new(2, format!("Failed to write points CSV header: {e}")))?;

    let series = [
        (&output.dataset.protium.points, &output.arrhenius_h.points, &output.eyring_h.points),
        (&output.dataset.deuterium.points, &output.arrhenius_d.points, &output.eyring_d.points),
    ];
    let isotopes = [output.arrhenius_h.isotope, output.arrhenius_d.isotope];

    for (i, kie) in output.kie.points.iter().enumerate() {
        for ((raw, arrhenius, eyring), isotope) in series.iter().zip(isotopes) {
            let (Some(raw), Some(a), Some(e)) = (raw.get(i), arrhenius.get(i), eyring.get(i)) else {
                return Err(AppError::new(4, "Result series lengths differ; cannot export points."));
            };
            write_row(&mut file, raw, a, e, isotope.symbol(), kie.ln_ratio.value, kie.ln_ratio.std_dev)?;
        }
    }

    file.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush points CSV: {e}")))?;
    Ok(())
}

fn write_row(
    out: &mut impl Write,
    raw: &RatePoint,
    arrhenius: &PlotPoint,
    eyring: &PlotPoint,
    isotope: &str,
    ln_kie: f64,
    ln_kie_sd: f64,
) -> Result<(), AppError> {
    writeln!(
        out,
        "{:.2},{:.10},{},{:.6e},{:.6e},{:.8},{:.8},{:.8},{:.8},{:.8},{:.8}",
        raw.temperature_k,
        raw.inv_t(),
        isotope,
        raw.k.value,
        raw.k.std_dev,
        arrhenius.y.value,
        arrhenius.y.std_dev,
        eyring.y.value,
        eyring.y.std_dev,
        ln_kie,
        ln_kie_sd,
    )
    .map_err(|e| AppError::new(2, format!("Failed to write points CSV row: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_analysis;
    use crate::data::builtin_dataset;
    use crate::domain::AnalysisConfig;

    fn output() -> AnalysisOutput {
        let config = AnalysisConfig {
            plot: false,
            ..AnalysisConfig::default()
        };
        run_analysis(&config, builtin_dataset()).unwrap()
    }

    #[test]
    fn results_json_reads_back() {
        let output = output();
        let path = std::env::temp_dir().join(format!("kie_results_{}.json", std::process::id()));
        write_results_json(&path, &output).unwrap();

        let back = read_results_json(&path).unwrap();
        assert_eq!(back.tool, "kie");
        assert_eq!(back.arrhenius.len(), 2);
        assert_eq!(back.kie.points.len(), 4);
        assert!((back.eyring[1].gibbs.value - output.eyring_d.gibbs.value).abs() < 1e-6);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn points_csv_has_row_per_isotope_and_temperature() {
        let output = output();
        let path = std::env::temp_dir().join(format!("kie_points_{}.csv", std::process::id()));
        write_points_csv(&path, &output).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 8);
        assert!(lines[0].starts_with("temperature_k,inv_t,isotope"));
        assert!(lines[1].starts_with("313.15,"));
        assert_eq!(lines[1].split(',').nth(2), Some("H"));
        assert_eq!(lines[2].split(',').nth(2), Some("D"));
        assert!(lines.iter().skip(1).all(|l| l.split(',').count() == 11));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn simulation_json_reads_back() {
        let config = SimulateConfig {
            ea_kcal: 27.0,
            ln_a: 30.0,
            noise: 0.03,
            replicates: 20,
            seed: 11,
            temperatures_k: crate::data::temperatures_k(),
            export: None,
        };
        let summary = crate::app::simulate::run_simulation(&config).unwrap();
        let path = std::env::temp_dir().join(format!("kie_simulation_{}.json", std::process::id()));
        write_simulation_json(&path, &config, &summary).unwrap();

        let back = read_simulation_json(&path).unwrap();
        assert_eq!(back.seed, 11);
        assert_eq!(back.temperatures_k.len(), 4);
        assert_eq!(back.summary.replicates, 20);
        assert_eq!(back.summary.true_ea_kcal, 27.0);
        assert!((back.summary.mean_ea_kcal - summary.mean_ea_kcal).abs() < 1e-9);
        let _ = std::fs::remove_file(&path);
    }
}
