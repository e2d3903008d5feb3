//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::AnalysisOutput;
use crate::domain::{ArrheniusResult, EyringResult, KieResult, SimulationSummary};
use crate::models::to_kcal;

/// Format the full analysis report.
pub fn format_analysis(output: &AnalysisOutput) -> String {
    let mut out = String::new();

    out.push_str("=== kie - Kinetic Isotope Effect Analysis ===\n");
    out.push('\n');
    out.push_str(&format_kie(&output.kie));
    out.push('\n');
    out.push_str(&format_arrhenius(&output.arrhenius_h, &output.arrhenius_d, output));
    out.push('\n');
    out.push_str(&format_eyring(&output.eyring_h));
    out.push_str(&format_eyring(&output.eyring_d));

    out
}

fn format_kie(kie: &KieResult) -> String {
    let mut out = String::new();
    out.push_str("KIE (k_H / k_D):\n");
    out.push_str(&format!("{:>10} {:>22} {:>22}\n", "T (K)", "KIE", "ln(KIE)"));
    for p in &kie.points {
        out.push_str(&format!(
            "{:>10.2} {:>22} {:>22}\n",
            p.temperature_k,
            p.ratio.to_string(),
            p.ln_ratio.to_string()
        ));
    }
    out.push_str(&format!(
        "ln(KIE) fit: intercept={} slope={} K\n",
        kie.fit.intercept_measured(),
        kie.fit.slope_measured()
    ));
    out
}

fn format_arrhenius(h: &ArrheniusResult, d: &ArrheniusResult, output: &AnalysisOutput) -> String {
    let mut out = String::new();
    out.push_str("Arrhenius analysis (ln k vs 1/T):\n");
    for r in [h, d] {
        out.push_str(&format!(
            "- {:<9} Ea = {} kcal/mol | A = {} s^-1\n",
            r.isotope.display_name(),
            to_kcal(r.activation_energy),
            r.prefactor
        ));
    }
    let cmp = &output.comparison;
    out.push_str(&format!("A_H/A_D: {}\n", cmp.prefactor_ratio));
    out.push_str(&format!("ln(A_H/A_D): {}\n", cmp.ln_prefactor_ratio));
    out.push_str(&format!("Ea_D - Ea_H: {} kcal/mol\n", cmp.ea_difference_kcal));
    out
}

fn format_eyring(r: &EyringResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Eyring analysis, {} (ln(k/T) vs 1/T):\n",
        r.isotope.display_name()
    ));
    out.push_str(&format!("- dH = {} kcal/mol\n", to_kcal(r.enthalpy)));
    out.push_str(&format!("- dS = {} cal/(mol K)\n", r.entropy));
    out.push_str(&format!(
        "- dG({:.2} K) = {} kcal/mol\n",
        r.reference_temp_k,
        to_kcal(r.gibbs)
    ));
    out.push_str(&format!("{:>10} {:>12} {:>12} {:>10}\n", "T (K)", "observed", "fitted", "sigma"));
    for p in &r.points {
        out.push_str(&format!(
            "{:>10.2} {:>12.5} {:>12.5} {:>10.5}\n",
            p.temperature_k,
            p.y.value,
            r.fit.predict(p.x),
            p.y.std_dev
        ));
    }
    out
}

/// Format the synthetic recovery summary.
pub fn format_simulation(summary: &SimulationSummary) -> String {
    let mut out = String::new();
    out.push_str("=== kie simulate - Arrhenius parameter recovery ===\n");
    out.push_str(&format!("Replicates: {}\n", summary.replicates));
    out.push_str(&format!("True Ea: {:.3} kcal/mol\n", summary.true_ea_kcal));
    out.push_str(&format!(
        "Recovered Ea: mean={:.3} | empirical sd={:.3} | mean propagated sd={:.3} kcal/mol\n",
        summary.mean_ea_kcal, summary.empirical_sd_kcal, summary.mean_propagated_sd_kcal
    ));
    out.push_str(&format!(
        "Coverage of +/-1 sigma interval: {:.1}% (nominal 68.3%)\n",
        100.0 * summary.coverage_1sigma
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_analysis;
    use crate::data::builtin_dataset;
    use crate::domain::AnalysisConfig;

    #[test]
    fn report_mentions_every_quantity() {
        let config = AnalysisConfig {
            plot: false,
            ..AnalysisConfig::default()
        };
        let output = run_analysis(&config, builtin_dataset()).unwrap();
        let text = format_analysis(&output);

        for needle in [
            "KIE (k_H / k_D)",
            "313.15",
            "Protium",
            "Deuterium",
            "A_H/A_D",
            "ln(A_H/A_D)",
            "Ea_D - Ea_H",
            "dH =",
            "dS =",
            "dG(298.15 K)",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in:\n{text}");
        }
    }

    #[test]
    fn simulation_summary_formats_percent() {
        let text = format_simulation(&SimulationSummary {
            replicates: 10,
            true_ea_kcal: 27.0,
            mean_ea_kcal: 27.01,
            empirical_sd_kcal: 0.2,
            mean_propagated_sd_kcal: 0.21,
            coverage_1sigma: 0.7,
        });
        assert!(text.contains("70.0%"), "{text}");
        assert!(text.contains("True Ea: 27.000"));
    }
}
