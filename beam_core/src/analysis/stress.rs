//! Stress and safety evaluation from peak internal forces.
//!
//! All stress formulas work in the mm/N system, where N/mm² is exactly MPa:
//! bending stress from the flexure formula `σ = M·c/I`, shear stress with the
//! 1.5 rectangular-distribution factor, combined stress via von Mises.

use serde::{Deserialize, Serialize};

use crate::materials::Material;
use crate::section::SectionProperties;

/// Safety factor sentinel for a loaded but stress-free beam ("infinite margin").
pub const SAFETY_FACTOR_UNSTRESSED: f64 = 999.0;

/// Peak stresses and the resulting safety factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StressSummary {
    /// Peak bending (normal) stress (MPa)
    pub normal_stress_mpa: f64,
    /// Peak transverse shear stress (MPa)
    pub shear_stress_mpa: f64,
    /// Von Mises combination of the two (MPa)
    pub combined_stress_mpa: f64,
    /// Yield strength / combined stress; 999 when loaded but stress-free,
    /// 0 when no loads are present
    pub safety_factor: f64,
}

/// Evaluate peak stresses and the safety factor.
///
/// `max_moment_nmm` and `max_shear_n` are the absolute peak internal forces
/// from the sampled diagram. Degenerate sections (zero area or inertia)
/// produce zero stress rather than an error: "no structural capacity
/// modeled".
pub fn evaluate(
    max_shear_n: f64,
    max_moment_nmm: f64,
    props: &SectionProperties,
    depth_mm: f64,
    material: &Material,
    has_loads: bool,
) -> StressSummary {
    let normal_stress_mpa = if props.moment_of_inertia_mm4 > 0.0 {
        max_moment_nmm * (depth_mm / 2.0) / props.moment_of_inertia_mm4
    } else {
        0.0
    };

    let shear_stress_mpa = if props.area_mm2 > 0.0 {
        1.5 * max_shear_n / props.area_mm2
    } else {
        0.0
    };

    let combined_stress_mpa =
        (normal_stress_mpa.powi(2) + 3.0 * shear_stress_mpa.powi(2)).sqrt();

    let safety_factor = if combined_stress_mpa > 0.0 {
        material.yield_strength_mpa / combined_stress_mpa
    } else if has_loads {
        SAFETY_FACTOR_UNSTRESSED
    } else {
        0.0
    };

    StressSummary {
        normal_stress_mpa,
        shear_stress_mpa,
        combined_stress_mpa,
        safety_factor,
    }
}
