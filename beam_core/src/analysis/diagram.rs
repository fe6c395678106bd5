//! Internal force sampler: shear, bending moment, and deflection along the span.
//!
//! Uses singularity-function superposition: every sample starts from the left
//! reaction's contribution, then each load strictly left of the sample
//! position adds its (partial, for distributed loads) resultant at its
//! centroid. All arithmetic happens in SI base units (m, N, N·m); results are
//! reported in the engine's output units (mm, N, N·mm).
//!
//! ## Sign Convention
//!
//! The left reaction enters shear as `−R_A` and downward loads add positively,
//! so shear returns to zero past the last support of a fully-supported beam.
//! Peak values are tracked as absolute magnitudes.
//!
//! ## Deflection
//!
//! Deflection per sample is the simplified elastic estimate
//! `|M(x)|·x² / (2·E·I)` rather than a full double integration of curvature.
//! This is an order-of-magnitude estimate and is the documented, reproducible
//! contract of the engine.

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, SupportType};
use crate::loads::{Load, LoadKind};
use crate::units::{
    Gigapascals, M4, Meters, Millimeters, Mm4, NewtonMeters, NewtonMillimeters, Pascals,
};

use super::statics::Reactions;

/// Default number of sample intervals (yields 101 diagram points).
pub const DEFAULT_SAMPLES: usize = 100;

/// One sampled station along the beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    /// Distance from the left end (mm)
    pub position_mm: f64,
    /// Internal shear force (N)
    pub shear_force_n: f64,
    /// Internal bending moment (N·mm)
    pub bending_moment_nmm: f64,
    /// Estimated deflection (mm)
    pub deflection_mm: f64,
}

/// Sampled diagram plus the running peak magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// `num_samples + 1` points, ordered by increasing position over `[0, length]`
    pub points: Vec<DiagramPoint>,
    /// max |shear| over all samples (N)
    pub max_shear_n: f64,
    /// max |moment| over all samples (N·mm)
    pub max_moment_nmm: f64,
    /// max |deflection| over all samples (mm)
    pub max_deflection_mm: f64,
}

/// Sample shear, moment, and deflection at `num_samples + 1` evenly spaced
/// stations over the whole beam length.
pub fn sample(beam: &Beam, loads: &[Load], reactions: &Reactions, num_samples: usize) -> Diagram {
    let num_samples = num_samples.max(1);
    let length_m = Meters::from(Millimeters(beam.length_mm)).value();
    let right_support_m = Meters::from(Millimeters(beam.supports.right_mm)).value();

    let e_pa = Pascals::from(Gigapascals(beam.material.elastic_modulus_gpa)).value();
    let i_m4 = M4::from(Mm4(beam.cross_section.properties().moment_of_inertia_mm4)).value();
    let stiffness = e_pa * i_m4;

    let mut points = Vec::with_capacity(num_samples + 1);
    let mut max_shear_n = 0.0f64;
    let mut max_moment_nm = 0.0f64;
    let mut max_deflection_m = 0.0f64;

    for i in 0..=num_samples {
        let x_m = length_m * (i as f64 / num_samples as f64);

        let mut shear_n = -reactions.reaction_a_n;
        let mut moment_nm = -reactions.reaction_a_n * x_m;

        for load in loads {
            let start_m = Meters::from(Millimeters(load.position_mm)).value();
            if start_m >= x_m {
                continue;
            }
            match load.kind {
                LoadKind::Point { .. } => {
                    let force_n = load.transverse_n();
                    shear_n += force_n;
                    moment_nm += force_n * (x_m - start_m);
                }
                LoadKind::Distributed { extent_mm } => {
                    // Only the portion of the load left of x has been picked
                    // up; its resultant acts at the partial centroid.
                    let extent_m = Meters::from(Millimeters(extent_mm)).value();
                    let partial_m = (x_m - start_m).min(extent_m);
                    let partial_force_n = load.magnitude * partial_m;
                    let centroid_m = start_m + partial_m / 2.0;
                    shear_n += partial_force_n;
                    moment_nm += partial_force_n * (x_m - centroid_m);
                }
            }
        }

        if beam.support_type == SupportType::Simple && x_m > right_support_m {
            shear_n -= reactions.reaction_b_n;
            moment_nm -= reactions.reaction_b_n * (x_m - right_support_m);
        }

        let deflection_m = if stiffness > 0.0 {
            moment_nm.abs() * x_m * x_m / (2.0 * stiffness)
        } else {
            0.0
        };

        max_shear_n = max_shear_n.max(shear_n.abs());
        max_moment_nm = max_moment_nm.max(moment_nm.abs());
        max_deflection_m = max_deflection_m.max(deflection_m.abs());

        points.push(DiagramPoint {
            position_mm: Millimeters::from(Meters(x_m)).value(),
            shear_force_n: shear_n,
            bending_moment_nmm: NewtonMillimeters::from(NewtonMeters(moment_nm)).value(),
            deflection_mm: Millimeters::from(Meters(deflection_m)).value(),
        });
    }

    Diagram {
        points,
        max_shear_n,
        max_moment_nmm: NewtonMillimeters::from(NewtonMeters(max_moment_nm)).value(),
        max_deflection_mm: Millimeters::from(Meters(max_deflection_m)).value(),
    }
}
