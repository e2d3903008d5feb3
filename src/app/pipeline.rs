//! Shared analysis pipeline.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate -> KIE fit -> Arrhenius fits -> isotope comparison -> Eyring fits
//!
//! The front-end (`app`) can then focus on presentation (printing, plots, exports).

use crate::data::validate_dataset;
use crate::domain::{AnalysisConfig, ArrheniusResult, EyringResult, IsotopeComparison, KieResult, KineticDataset};
use crate::error::AppError;
use crate::fit::{analyze_arrhenius, analyze_eyring, analyze_kie, compare_isotopes};

/// All computed outputs of a single `kie analyze` run.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub dataset: KineticDataset,
    pub kie: KieResult,
    pub arrhenius_h: ArrheniusResult,
    pub arrhenius_d: ArrheniusResult,
    pub comparison: IsotopeComparison,
    pub eyring_h: EyringResult,
    pub eyring_d: EyringResult,
}

/// Execute the full analysis and return the computed outputs.
pub fn run_analysis(config: &AnalysisConfig, dataset: KineticDataset) -> Result<AnalysisOutput, AppError> {
    validate_dataset(&dataset)?;
    log::info!(
        "analysing {} temperatures ({:.2}-{:.2} K)",
        dataset.protium.points.len(),
        dataset.protium.points.first().map(|p| p.temperature_k).unwrap_or_default(),
        dataset.protium.points.last().map(|p| p.temperature_k).unwrap_or_default(),
    );

    let kie = analyze_kie(&dataset)?;

    let arrhenius_h = analyze_arrhenius(&dataset.protium)?;
    let arrhenius_d = analyze_arrhenius(&dataset.deuterium)?;
    let comparison = compare_isotopes(&arrhenius_h, &arrhenius_d);

    let eyring_h = analyze_eyring(&dataset.protium, config.reference_temp_k)?;
    let eyring_d = analyze_eyring(&dataset.deuterium, config.reference_temp_k)?;

    Ok(AnalysisOutput {
        dataset,
        kie,
        arrhenius_h,
        arrhenius_d,
        comparison,
        eyring_h,
        eyring_d,
    })
}
