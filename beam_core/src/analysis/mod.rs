//! # Beam Analysis
//!
//! The analysis pipeline and its orchestrator. The stages run in strict
//! dependency order:
//!
//! 1. [`section`](crate::section) properties and the [`statics`] solver
//!    (independent of each other),
//! 2. the [`diagram`] sampler, which consumes the reactions,
//! 3. the [`stress`] evaluator, which consumes the sampled peaks.
//!
//! [`analyze`] composes them into the engine's single entry point. It is
//! stateless and reentrant: every call recomputes from the supplied beam and
//! load snapshot and returns a freshly allocated [`AnalysisResult`] that the
//! caller owns outright.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::{analysis, Beam, CrossSection, Load, materials};
//!
//! let beam = Beam::simple(
//!     1000.0,
//!     materials::by_id("astm-a36").unwrap().clone(),
//!     CrossSection::rectangular(100.0, 200.0),
//! );
//! let loads = vec![Load::point(1000.0, 500.0, 0.0)];
//!
//! let result = analysis::analyze(&beam, &loads).unwrap();
//! assert!((result.reaction_a_n - 500.0).abs() < 1e-9);
//! assert!((result.max_bending_moment_nmm - 250_000.0).abs() < 1e-6);
//! ```

pub mod diagram;
pub mod statics;
pub mod stress;

use serde::{Deserialize, Serialize};

pub use diagram::{Diagram, DiagramPoint, DEFAULT_SAMPLES};
pub use statics::{LoadSummary, Reactions};
pub use stress::{StressSummary, SAFETY_FACTOR_UNSTRESSED};

use crate::beam::Beam;
use crate::errors::CalcResult;
use crate::loads::Load;

/// Complete, fully derived analysis output.
///
/// Every field is recomputed on each [`analyze`] call; nothing is mutated in
/// place and the engine retains no reference to the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Magnitude of the vector sum of all applied loads (N)
    pub resultant_force_n: f64,
    /// Direction of the resultant, degrees from the transverse axis
    pub resultant_angle_deg: f64,
    /// Left/first support reaction (N)
    pub reaction_a_n: f64,
    /// Right support reaction (N); always 0 for cantilevers
    pub reaction_b_n: f64,
    /// Position of the transverse load resultant (mm)
    pub center_of_gravity_mm: f64,
    /// Peak |shear| over the sampled span (N)
    pub max_shear_force_n: f64,
    /// Peak |bending moment| over the sampled span (N·mm)
    pub max_bending_moment_nmm: f64,
    /// Peak bending stress (MPa)
    pub max_normal_stress_mpa: f64,
    /// Peak shear stress (MPa)
    pub max_shear_stress_mpa: f64,
    /// Von Mises combination of the peak stresses (MPa)
    pub combined_stress_mpa: f64,
    /// Peak |deflection| estimate (mm)
    pub max_deflection_mm: f64,
    /// Yield strength / combined stress (999 = loaded but stress-free, 0 = unloaded)
    pub safety_factor: f64,
    /// Cross-sectional area (mm²)
    pub area_mm2: f64,
    /// Second moment of area (mm⁴)
    pub moment_of_inertia_mm4: f64,
    /// Full sampled shear/moment/deflection diagram
    pub diagram_points: Vec<DiagramPoint>,
}

/// Run the full analysis with the default sample count (100 intervals).
///
/// Validates the beam geometry and every load before computing; validation
/// failures surface immediately with no partial results.
pub fn analyze(beam: &Beam, loads: &[Load]) -> CalcResult<AnalysisResult> {
    analyze_with_samples(beam, loads, DEFAULT_SAMPLES)
}

/// Run the full analysis with an explicit diagram sample count.
pub fn analyze_with_samples(
    beam: &Beam,
    loads: &[Load],
    num_samples: usize,
) -> CalcResult<AnalysisResult> {
    beam.validate()?;
    for load in loads {
        load.validate(beam.length_mm)?;
    }

    let props = beam.cross_section.properties();
    let summary = statics::summarize(loads);
    let reactions = statics::reactions(beam, &summary);
    let diagram = diagram::sample(beam, loads, &reactions, num_samples);
    let stresses = stress::evaluate(
        diagram.max_shear_n,
        diagram.max_moment_nmm,
        &props,
        beam.cross_section.depth_mm(),
        &beam.material,
        !loads.is_empty(),
    );

    Ok(AnalysisResult {
        resultant_force_n: summary.resultant_force_n,
        resultant_angle_deg: summary.resultant_angle_deg,
        reaction_a_n: reactions.reaction_a_n,
        reaction_b_n: reactions.reaction_b_n,
        center_of_gravity_mm: summary.center_of_gravity_mm,
        max_shear_force_n: diagram.max_shear_n,
        max_bending_moment_nmm: diagram.max_moment_nmm,
        max_normal_stress_mpa: stresses.normal_stress_mpa,
        max_shear_stress_mpa: stresses.shear_stress_mpa,
        combined_stress_mpa: stresses.combined_stress_mpa,
        max_deflection_mm: diagram.max_deflection_mm,
        safety_factor: stresses.safety_factor,
        area_mm2: props.area_mm2,
        moment_of_inertia_mm4: props.moment_of_inertia_mm4,
        diagram_points: diagram.points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials;
    use crate::section::CrossSection;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    fn a36_rect_beam(length_mm: f64) -> Beam {
        Beam::simple(
            length_mm,
            materials::by_id("astm-a36").unwrap().clone(),
            CrossSection::rectangular(100.0, 200.0),
        )
    }

    // Scenario: 100×200 mm rectangle, 1000 mm simple span, 1000 N at midspan.
    #[test]
    fn test_simple_span_midspan_point_load() {
        let beam = a36_rect_beam(1000.0);
        let loads = vec![Load::point(1000.0, 500.0, 0.0)];
        let result = analyze(&beam, &loads).unwrap();

        assert!(approx_eq(result.reaction_a_n, 500.0, 1e-9));
        assert!(approx_eq(result.reaction_b_n, 500.0, 1e-9));
        assert!(approx_eq(result.max_shear_force_n, 500.0, 1e-9));
        assert!(approx_eq(result.max_bending_moment_nmm, 250_000.0, 1e-6));
        assert!(approx_eq(result.center_of_gravity_mm, 500.0, 1e-9));
        assert_eq!(result.diagram_points.len(), 101);
        assert_eq!(result.area_mm2, 20_000.0);
    }

    // Scenario: same beam, 10 N/m over the entire span. Pins the canonical
    // N-per-meter conversion: total load 10 N/m · 1 m = 10 N.
    #[test]
    fn test_simple_span_full_distributed_load() {
        let beam = a36_rect_beam(1000.0);
        let loads = vec![Load::distributed(10.0, 0.0, 1000.0)];
        let result = analyze(&beam, &loads).unwrap();

        assert!(approx_eq(result.resultant_force_n, 10.0, 1e-9));
        assert!(approx_eq(result.reaction_a_n, 5.0, 1e-9));
        assert!(approx_eq(result.reaction_b_n, 5.0, 1e-9));
        // wL²/8 = 1.25 N·m
        assert!(approx_eq(result.max_bending_moment_nmm, 1250.0, 1e-6));
    }

    // Scenario: 2000 mm cantilever, 100 N at the free end.
    #[test]
    fn test_cantilever_free_end_load() {
        let beam = Beam::cantilever(
            2000.0,
            materials::by_id("astm-a36").unwrap().clone(),
            CrossSection::rectangular(100.0, 200.0),
        );
        let loads = vec![Load::point(100.0, 2000.0, 0.0)];
        let result = analyze(&beam, &loads).unwrap();

        assert!(approx_eq(result.reaction_a_n, 100.0, 1e-9));
        assert_eq!(result.reaction_b_n, 0.0);
        assert!(approx_eq(result.max_shear_force_n, 100.0, 1e-9));
        assert!(approx_eq(result.max_bending_moment_nmm, 200_000.0, 1e-6));
    }

    // Scenario: no loads at all - everything zero, including safety factor.
    #[test]
    fn test_no_loads() {
        let beam = a36_rect_beam(1000.0);
        let result = analyze(&beam, &[]).unwrap();

        assert_eq!(result.resultant_force_n, 0.0);
        assert_eq!(result.reaction_a_n, 0.0);
        assert_eq!(result.reaction_b_n, 0.0);
        assert_eq!(result.max_shear_force_n, 0.0);
        assert_eq!(result.max_bending_moment_nmm, 0.0);
        assert_eq!(result.max_normal_stress_mpa, 0.0);
        assert_eq!(result.max_shear_stress_mpa, 0.0);
        assert_eq!(result.max_deflection_mm, 0.0);
        assert_eq!(result.safety_factor, 0.0);
        // Section properties are still reported
        assert_eq!(result.area_mm2, 20_000.0);
    }

    #[test]
    fn test_safety_factor_round_trip() {
        let beam = a36_rect_beam(1000.0);
        let loads = vec![Load::point(50_000.0, 500.0, 0.0)];
        let result = analyze(&beam, &loads).unwrap();

        assert!(result.combined_stress_mpa > 0.0);
        assert!(approx_eq(
            result.safety_factor,
            beam.material.yield_strength_mpa / result.combined_stress_mpa,
            1e-9
        ));
    }

    #[test]
    fn test_peaks_match_diagram() {
        let beam = a36_rect_beam(1000.0);
        let loads = vec![
            Load::point(1000.0, 300.0, 0.0),
            Load::distributed(200.0, 400.0, 600.0),
        ];
        let result = analyze(&beam, &loads).unwrap();

        let max_shear = result
            .diagram_points
            .iter()
            .map(|p| p.shear_force_n.abs())
            .fold(0.0f64, f64::max);
        let max_moment = result
            .diagram_points
            .iter()
            .map(|p| p.bending_moment_nmm.abs())
            .fold(0.0f64, f64::max);

        assert!(approx_eq(result.max_shear_force_n, max_shear, 1e-9));
        assert!(approx_eq(result.max_bending_moment_nmm, max_moment, 1e-6));
    }

    #[test]
    fn test_validation_rejects_before_computing() {
        let beam = a36_rect_beam(1000.0);
        let outside = vec![Load::point(1000.0, 1500.0, 0.0)];
        let err = analyze(&beam, &outside).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let mut bad_beam = a36_rect_beam(1000.0);
        bad_beam.length_mm = -1.0;
        assert!(analyze(&bad_beam, &[]).is_err());
    }

    #[test]
    fn test_custom_sample_count() {
        let beam = a36_rect_beam(1000.0);
        let loads = vec![Load::point(1000.0, 500.0, 0.0)];
        let result = analyze_with_samples(&beam, &loads, 10).unwrap();
        assert_eq!(result.diagram_points.len(), 11);
    }

    #[test]
    fn test_result_serialization_roundtrip() {
        let beam = a36_rect_beam(1000.0);
        let loads = vec![Load::point(1000.0, 500.0, 0.0)];
        let result = analyze(&beam, &loads).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    // Exported values must survive JSON verbatim, including deflections whose
    // shortest decimal form is not the nearest f64 (needs serde_json's
    // float_roundtrip feature).
    #[test]
    fn test_json_floats_are_bit_exact() {
        let value = 0.001_200_000_000_000_000_1_f64;
        let json = serde_json::to_string(&value).unwrap();
        let roundtrip: f64 = serde_json::from_str(&json).unwrap();
        assert_eq!(value.to_bits(), roundtrip.to_bits());
    }
}
