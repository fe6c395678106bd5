//! Statics solver: load resultants and support reactions.
//!
//! Accumulates each load's transverse component and its moment about the
//! beam's left end, then solves the two equilibrium equations for the
//! support reactions. Pure functions of their inputs.

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, SupportType};
use crate::loads::Load;
use crate::units::{Meters, Millimeters};

/// Aggregate force quantities for a set of loads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Sum of transverse (vertical) components (N)
    pub total_transverse_n: f64,
    /// Sum of axial components (N)
    pub total_axial_n: f64,
    /// Moment of the transverse components about the left end (N·m)
    pub total_moment_nm: f64,
    /// Magnitude of the vector sum of all load components (N)
    pub resultant_force_n: f64,
    /// Direction of the resultant, degrees from the transverse axis
    pub resultant_angle_deg: f64,
    /// Position of the transverse resultant (mm); 0 if no net transverse force
    pub center_of_gravity_mm: f64,
}

/// Vertical support reactions (N).
///
/// For cantilevers `reaction_b_n` is always zero; the fixed end carries all
/// force. No fixed-end moment reaction is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    pub reaction_a_n: f64,
    pub reaction_b_n: f64,
}

/// Accumulate transverse/axial components, the moment about the left end,
/// the resultant vector, and the center of gravity for a load set.
pub fn summarize(loads: &[Load]) -> LoadSummary {
    let mut total_transverse_n = 0.0;
    let mut total_axial_n = 0.0;
    let mut total_moment_nm = 0.0;

    for load in loads {
        total_transverse_n += load.transverse_n();
        total_axial_n += load.axial_n();
        total_moment_nm += load.moment_about_left_end_nm();
    }

    let resultant_force_n = total_transverse_n.hypot(total_axial_n);
    let resultant_angle_deg = if resultant_force_n > 0.0 {
        total_axial_n.atan2(total_transverse_n).to_degrees()
    } else {
        0.0
    };
    let center_of_gravity_mm = if total_transverse_n != 0.0 {
        Millimeters::from(Meters(total_moment_nm / total_transverse_n)).value()
    } else {
        0.0
    };

    LoadSummary {
        total_transverse_n,
        total_axial_n,
        total_moment_nm,
        resultant_force_n,
        resultant_angle_deg,
        center_of_gravity_mm,
    }
}

/// Solve for the vertical support reactions.
///
/// Simple: moment equilibrium about the left support gives
/// `R_B = ΣM / span`, then force equilibrium gives `R_A = ΣF − R_B`.
/// Cantilever: the fixed end takes the whole transverse resultant.
pub fn reactions(beam: &Beam, summary: &LoadSummary) -> Reactions {
    match beam.support_type {
        SupportType::Simple => {
            let span_m = beam.span_m();
            let reaction_b_n = summary.total_moment_nm / span_m;
            Reactions {
                reaction_a_n: summary.total_transverse_n - reaction_b_n,
                reaction_b_n,
            }
        }
        SupportType::Cantilever => Reactions {
            reaction_a_n: summary.total_transverse_n,
            reaction_b_n: 0.0,
        },
    }
}
