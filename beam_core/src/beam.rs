//! # Beam Definition
//!
//! The structure under analysis: span, support configuration, material, and
//! cross-section. Geometry is validated up front, before any computation;
//! the analysis itself never mutates a beam.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::Material;
use crate::section::CrossSection;
use crate::units::{Meters, Millimeters};

/// Smallest span used in reaction formulas (m).
///
/// Simple beams with coincident supports would otherwise divide by zero;
/// flooring the span trades numerical blow-up for a bounded (if extreme)
/// reaction value.
pub const MIN_SPAN_M: f64 = 0.001;

/// Support configuration variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportType {
    /// Pin + roller at `supports.left_mm` / `supports.right_mm`
    Simple,
    /// Fixed end at `supports.left_mm`; `right_mm` is ignored
    Cantilever,
}

/// Support positions in millimeters from the left end
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Supports {
    pub left_mm: f64,
    pub right_mm: f64,
}

/// A beam: geometry, supports, material, and cross-section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    /// Overall span in millimeters, > 0
    pub length_mm: f64,
    pub support_type: SupportType,
    pub supports: Supports,
    pub material: Material,
    pub cross_section: CrossSection,
}

impl Beam {
    /// Simply-supported beam with supports at its ends.
    pub fn simple(length_mm: f64, material: Material, cross_section: CrossSection) -> Self {
        Beam {
            length_mm,
            support_type: SupportType::Simple,
            supports: Supports {
                left_mm: 0.0,
                right_mm: length_mm,
            },
            material,
            cross_section,
        }
    }

    /// Cantilever fixed at the left end.
    pub fn cantilever(length_mm: f64, material: Material, cross_section: CrossSection) -> Self {
        Beam {
            length_mm,
            support_type: SupportType::Cantilever,
            supports: Supports {
                left_mm: 0.0,
                right_mm: 0.0,
            },
            material,
            cross_section,
        }
    }

    /// Distance between supports (Simple) or base and free end (Cantilever),
    /// in meters, floored at [`MIN_SPAN_M`].
    pub fn span_m(&self) -> f64 {
        let span = match self.support_type {
            SupportType::Simple => {
                Meters::from(Millimeters(self.supports.right_mm - self.supports.left_mm)).value()
            }
            SupportType::Cantilever => Meters::from(Millimeters(self.length_mm)).value(),
        };
        span.max(MIN_SPAN_M)
    }

    /// Validate beam geometry per the caller contract.
    ///
    /// Rejects non-positive lengths, supports outside `[0, length]`, and
    /// `left ≥ right` for simple beams. Degenerate cross-sections are NOT
    /// rejected here; they propagate as zero capacity.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_mm",
                self.length_mm.to_string(),
                "Beam length must be positive",
            ));
        }
        let left = self.supports.left_mm;
        if left < 0.0 || left > self.length_mm {
            return Err(CalcError::invalid_input(
                "supports.left_mm",
                left.to_string(),
                format!("Support must lie within [0, {}] mm", self.length_mm),
            ));
        }
        if self.support_type == SupportType::Simple {
            let right = self.supports.right_mm;
            if right < 0.0 || right > self.length_mm {
                return Err(CalcError::invalid_input(
                    "supports.right_mm",
                    right.to_string(),
                    format!("Support must lie within [0, {}] mm", self.length_mm),
                ));
            }
            if left >= right {
                return Err(CalcError::invalid_input(
                    "supports",
                    format!("left={left}, right={right}"),
                    "Left support must be strictly left of the right support",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials;
    use crate::section::CrossSection;

    fn a36() -> Material {
        materials::by_id("astm-a36").unwrap().clone()
    }

    #[test]
    fn test_simple_beam_span() {
        let beam = Beam::simple(1000.0, a36(), CrossSection::rectangular(100.0, 200.0));
        assert!((beam.span_m() - 1.0).abs() < 1e-12);
        assert!(beam.validate().is_ok());
    }

    #[test]
    fn test_cantilever_span_ignores_right_support() {
        let beam = Beam::cantilever(2000.0, a36(), CrossSection::rectangular(100.0, 200.0));
        assert!((beam.span_m() - 2.0).abs() < 1e-12);
        assert!(beam.validate().is_ok());
    }

    #[test]
    fn test_span_floor() {
        let mut beam = Beam::simple(1000.0, a36(), CrossSection::rectangular(100.0, 200.0));
        beam.supports.right_mm = beam.supports.left_mm + 0.0001;
        assert_eq!(beam.span_m(), MIN_SPAN_M);
    }

    #[test]
    fn test_invalid_geometry() {
        let section = CrossSection::rectangular(100.0, 200.0);

        let zero_length = Beam::simple(0.0, a36(), section);
        assert!(zero_length.validate().is_err());

        let mut support_outside = Beam::simple(1000.0, a36(), section);
        support_outside.supports.right_mm = 1500.0;
        assert!(support_outside.validate().is_err());

        let mut crossed = Beam::simple(1000.0, a36(), section);
        crossed.supports.left_mm = 800.0;
        crossed.supports.right_mm = 200.0;
        assert!(crossed.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let beam = Beam::simple(1000.0, a36(), CrossSection::rectangular(100.0, 200.0));
        let json = serde_json::to_string(&beam).unwrap();
        let roundtrip: Beam = serde_json::from_str(&json).unwrap();
        assert_eq!(beam, roundtrip);
    }
}
