//! # Applied Loads
//!
//! Load definitions for beam analysis: point loads (optionally inclined) and
//! uniformly distributed loads over part or all of the span.
//!
//! ## Conventions
//!
//! - Positions are millimeters from the beam's left end.
//! - Point load magnitude is newtons; the angle is measured in degrees from
//!   the beam's transverse (vertical) axis, so 0° is purely transverse and
//!   the transverse component is `magnitude · cos(angle)`.
//! - Distributed load magnitude is intensity in newtons per **meter** of
//!   span, always purely transverse, acting over `extent_mm` starting at
//!   `position_mm`.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::Load;
//!
//! // 1 kN straight down at 500 mm
//! let p = Load::point(1000.0, 500.0, 0.0);
//! assert!((p.transverse_n() - 1000.0).abs() < 1e-9);
//!
//! // 10 N/m over the first meter of span
//! let w = Load::distributed(10.0, 0.0, 1000.0);
//! assert!((w.transverse_n() - 10.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Load variant with its kind-specific parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LoadKind {
    /// Concentrated force; `angle_deg` measured from the transverse axis
    Point { angle_deg: f64 },
    /// Uniform intensity over `extent_mm` starting at the load position
    Distributed { extent_mm: f64 },
}

/// One applied load.
///
/// The `id` exists for UI reconciliation only and never influences the
/// computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Unique identifier (opaque)
    pub id: Uuid,
    /// Point or distributed, with kind-specific parameters
    #[serde(flatten)]
    pub kind: LoadKind,
    /// Force in N (Point) or intensity in N/m (Distributed); signed
    pub magnitude: f64,
    /// Distance from the left end of the beam (mm)
    pub position_mm: f64,
}

impl Load {
    /// Create a point load of `magnitude_n` newtons at `position_mm`,
    /// inclined `angle_deg` degrees from the transverse axis.
    pub fn point(magnitude_n: f64, position_mm: f64, angle_deg: f64) -> Self {
        Load {
            id: Uuid::new_v4(),
            kind: LoadKind::Point { angle_deg },
            magnitude: magnitude_n,
            position_mm,
        }
    }

    /// Create a distributed load of `intensity_n_per_m` newtons per meter
    /// acting over `extent_mm` starting at `position_mm`.
    pub fn distributed(intensity_n_per_m: f64, position_mm: f64, extent_mm: f64) -> Self {
        Load {
            id: Uuid::new_v4(),
            kind: LoadKind::Distributed { extent_mm },
            magnitude: intensity_n_per_m,
            position_mm,
        }
    }

    /// Total transverse (vertical) force component in newtons.
    ///
    /// Point: `F·cos(angle)`. Distributed: `intensity · extent` with the
    /// extent converted mm → m.
    pub fn transverse_n(&self) -> f64 {
        match self.kind {
            LoadKind::Point { angle_deg } => self.magnitude * angle_deg.to_radians().cos(),
            LoadKind::Distributed { extent_mm } => {
                self.magnitude * Meters::from(Millimeters(extent_mm)).value()
            }
        }
    }

    /// Axial force component in newtons (`F·sin(angle)`; zero for
    /// distributed loads, which are always purely transverse).
    pub fn axial_n(&self) -> f64 {
        match self.kind {
            LoadKind::Point { angle_deg } => self.magnitude * angle_deg.to_radians().sin(),
            LoadKind::Distributed { .. } => 0.0,
        }
    }

    /// Position where the load's resultant acts (mm from the left end):
    /// the application point for point loads, the extent centroid for
    /// distributed loads.
    pub fn centroid_mm(&self) -> f64 {
        match self.kind {
            LoadKind::Point { .. } => self.position_mm,
            LoadKind::Distributed { extent_mm } => self.position_mm + extent_mm / 2.0,
        }
    }

    /// Moment of the transverse component about the beam's left end (N·m).
    pub fn moment_about_left_end_nm(&self) -> f64 {
        self.transverse_n() * Meters::from(Millimeters(self.centroid_mm())).value()
    }

    /// Validate this load against the beam length it is applied to.
    pub fn validate(&self, beam_length_mm: f64) -> CalcResult<()> {
        if self.position_mm < 0.0 || self.position_mm > beam_length_mm {
            return Err(CalcError::invalid_input(
                "position_mm",
                self.position_mm.to_string(),
                format!("Load position must lie within [0, {beam_length_mm}] mm"),
            ));
        }
        if let LoadKind::Distributed { extent_mm } = self.kind {
            if extent_mm < 0.0 {
                return Err(CalcError::invalid_input(
                    "extent_mm",
                    extent_mm.to_string(),
                    "Distributed load extent must be non-negative",
                ));
            }
            if self.position_mm + extent_mm > beam_length_mm {
                return Err(CalcError::invalid_input(
                    "extent_mm",
                    extent_mm.to_string(),
                    format!(
                        "Distributed load must end within the beam: position + extent exceeds {beam_length_mm} mm"
                    ),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_point_load_components() {
        let vertical = Load::point(1000.0, 500.0, 0.0);
        assert!(approx_eq(vertical.transverse_n(), 1000.0, 1e-9));
        assert!(approx_eq(vertical.axial_n(), 0.0, 1e-9));

        // 60° from transverse: cos(60°) = 0.5, sin(60°) = 0.866
        let inclined = Load::point(1000.0, 500.0, 60.0);
        assert!(approx_eq(inclined.transverse_n(), 500.0, 1e-6));
        assert!(approx_eq(inclined.axial_n(), 866.025, 1e-3));
    }

    #[test]
    fn test_distributed_load_resultant() {
        // 10 N/m over 1000 mm = 10 N at centroid 500 mm
        let w = Load::distributed(10.0, 0.0, 1000.0);
        assert!(approx_eq(w.transverse_n(), 10.0, 1e-9));
        assert!(approx_eq(w.axial_n(), 0.0, 1e-9));
        assert!(approx_eq(w.centroid_mm(), 500.0, 1e-9));
        // Moment about left end: 10 N · 0.5 m = 5 N·m
        assert!(approx_eq(w.moment_about_left_end_nm(), 5.0, 1e-9));
    }

    #[test]
    fn test_partial_distributed_centroid() {
        let w = Load::distributed(100.0, 200.0, 600.0);
        assert!(approx_eq(w.centroid_mm(), 500.0, 1e-9));
        // Force 100 N/m · 0.6 m = 60 N
        assert!(approx_eq(w.transverse_n(), 60.0, 1e-9));
    }

    #[test]
    fn test_validation() {
        assert!(Load::point(500.0, 500.0, 0.0).validate(1000.0).is_ok());
        assert!(Load::point(500.0, 1500.0, 0.0).validate(1000.0).is_err());
        assert!(Load::point(500.0, -1.0, 0.0).validate(1000.0).is_err());

        assert!(Load::distributed(10.0, 0.0, 1000.0).validate(1000.0).is_ok());
        assert!(Load::distributed(10.0, 500.0, 600.0)
            .validate(1000.0)
            .is_err());
        assert!(Load::distributed(10.0, 0.0, -5.0).validate(1000.0).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let load = Load::distributed(25.0, 100.0, 400.0);
        let json = serde_json::to_string(&load).unwrap();
        let roundtrip: Load = serde_json::from_str(&json).unwrap();
        assert_eq!(load, roundtrip);
    }
}
