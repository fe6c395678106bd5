//! # Cross-Section Properties
//!
//! Cross-section shape descriptors and the closed-form geometric property
//! formulas used in stress and deflection calculations.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area (mm²)
//! - `I` = Moment of inertia / second moment of area (mm⁴)
//! - `b` = Width or flange width (mm)
//! - `h` = Overall height (mm)
//! - `tf` = Flange thickness (mm)
//! - `tw` = Web thickness (mm)
//!
//! Unset dimensions default to zero; a zero-area or zero-inertia section is
//! propagated as "no structural capacity modeled", never an error.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::section::CrossSection;
//!
//! let section = CrossSection::rectangular(100.0, 200.0);
//! let props = section.properties();
//! assert_eq!(props.area_mm2, 20_000.0);
//! // I = bh³/12 = 100 · 200³ / 12
//! assert!((props.moment_of_inertia_mm4 - 66_666_666.67).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Supported cross-section shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionShape {
    /// Solid rectangle (width × height)
    Rectangular,
    /// Solid circle (diameter)
    Circular,
    /// Symmetric I-beam (height, flange width/thickness, web thickness)
    IBeam,
    /// C-channel (height, flange width/thickness, web thickness)
    CChannel,
    /// T-beam (height, flange width/thickness, web thickness)
    TBeam,
}

/// Named dimensions in millimeters, keyed per shape.
///
/// Only the fields relevant to the active [`SectionShape`] are read;
/// everything else stays at its default of zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDimensions {
    /// Width (Rectangular)
    pub width_mm: f64,
    /// Overall height (Rectangular, IBeam, CChannel, TBeam)
    pub height_mm: f64,
    /// Diameter (Circular)
    pub diameter_mm: f64,
    /// Flange width (IBeam, CChannel, TBeam)
    pub flange_width_mm: f64,
    /// Flange thickness (IBeam, CChannel, TBeam)
    pub flange_thickness_mm: f64,
    /// Web thickness (IBeam, CChannel, TBeam)
    pub web_thickness_mm: f64,
}

/// Geometric properties derived from a cross-section, both always ≥ 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (mm²)
    pub area_mm2: f64,
    /// Second moment of area about the bending axis (mm⁴)
    pub moment_of_inertia_mm4: f64,
}

/// A cross-section: shape plus its dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    pub shape: SectionShape,
    pub dimensions: SectionDimensions,
}

// =============================================================================
// Per-shape formulas
// =============================================================================

/// Rectangle: A = b·h
#[inline]
fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Rectangle: I = bh³/12
#[inline]
fn rectangular_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Circle: A = πr²
#[inline]
fn circular_area(d: f64) -> f64 {
    let r = d / 2.0;
    PI * r * r
}

/// Circle: I = πd⁴/64
#[inline]
fn circular_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

/// I-beam: A = 2·b·tf + (h − 2·tf)·tw
#[inline]
fn i_beam_area(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    2.0 * b * tf + (h - 2.0 * tf) * tw
}

/// I-beam: I = bh³/12 − (b − tw)(h − 2·tf)³/12
#[inline]
fn i_beam_inertia(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    b * h.powi(3) / 12.0 - (b - tw) * (h - 2.0 * tf).powi(3) / 12.0
}

/// C-channel: A = 2·b·tf + h·tw
#[inline]
fn c_channel_area(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    2.0 * b * tf + h * tw
}

/// C-channel: I = tw·h³/12 + 2·(tf·b³/12 + b·tf·(h/2 − tf/2)²)
#[inline]
fn c_channel_inertia(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    tw * h.powi(3) / 12.0 + 2.0 * (tf * b.powi(3) / 12.0 + b * tf * (h / 2.0 - tf / 2.0).powi(2))
}

/// T-beam: A = b·tf + (h − tf)·tw
#[inline]
fn t_beam_area(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    b * tf + (h - tf) * tw
}

/// T-beam: I = tw·(h − tf)³/12 + b·tf³/12 + b·tf·(h − tf/2)²
#[inline]
fn t_beam_inertia(h: f64, b: f64, tf: f64, tw: f64) -> f64 {
    tw * (h - tf).powi(3) / 12.0 + b * tf.powi(3) / 12.0 + b * tf * (h - tf / 2.0).powi(2)
}

impl CrossSection {
    /// Solid rectangular section (width × height, mm)
    pub fn rectangular(width_mm: f64, height_mm: f64) -> Self {
        CrossSection {
            shape: SectionShape::Rectangular,
            dimensions: SectionDimensions {
                width_mm,
                height_mm,
                ..Default::default()
            },
        }
    }

    /// Solid circular section (diameter, mm)
    pub fn circular(diameter_mm: f64) -> Self {
        CrossSection {
            shape: SectionShape::Circular,
            dimensions: SectionDimensions {
                diameter_mm,
                ..Default::default()
            },
        }
    }

    /// Built-up section (I-beam, C-channel, or T-beam) from its four
    /// governing dimensions in mm.
    pub fn built_up(
        shape: SectionShape,
        height_mm: f64,
        flange_width_mm: f64,
        flange_thickness_mm: f64,
        web_thickness_mm: f64,
    ) -> Self {
        CrossSection {
            shape,
            dimensions: SectionDimensions {
                height_mm,
                flange_width_mm,
                flange_thickness_mm,
                web_thickness_mm,
                ..Default::default()
            },
        }
    }

    /// Compute area (mm²) and moment of inertia (mm⁴) for this section.
    pub fn properties(&self) -> SectionProperties {
        let d = &self.dimensions;
        let (area_mm2, moment_of_inertia_mm4) = match self.shape {
            SectionShape::Rectangular => (
                rectangular_area(d.width_mm, d.height_mm),
                rectangular_inertia(d.width_mm, d.height_mm),
            ),
            SectionShape::Circular => (
                circular_area(d.diameter_mm),
                circular_inertia(d.diameter_mm),
            ),
            SectionShape::IBeam => (
                i_beam_area(
                    d.height_mm,
                    d.flange_width_mm,
                    d.flange_thickness_mm,
                    d.web_thickness_mm,
                ),
                i_beam_inertia(
                    d.height_mm,
                    d.flange_width_mm,
                    d.flange_thickness_mm,
                    d.web_thickness_mm,
                ),
            ),
            SectionShape::CChannel => (
                c_channel_area(
                    d.height_mm,
                    d.flange_width_mm,
                    d.flange_thickness_mm,
                    d.web_thickness_mm,
                ),
                c_channel_inertia(
                    d.height_mm,
                    d.flange_width_mm,
                    d.flange_thickness_mm,
                    d.web_thickness_mm,
                ),
            ),
            SectionShape::TBeam => (
                t_beam_area(
                    d.height_mm,
                    d.flange_width_mm,
                    d.flange_thickness_mm,
                    d.web_thickness_mm,
                ),
                t_beam_inertia(
                    d.height_mm,
                    d.flange_width_mm,
                    d.flange_thickness_mm,
                    d.web_thickness_mm,
                ),
            ),
        };
        SectionProperties {
            area_mm2,
            moment_of_inertia_mm4,
        }
    }

    /// Overall depth of the section in the bending plane (mm).
    ///
    /// Used as the extreme-fiber distance base in bending stress
    /// (`c = depth/2`). Diameter for circular sections, height otherwise.
    pub fn depth_mm(&self) -> f64 {
        match self.shape {
            SectionShape::Circular => self.dimensions.diameter_mm,
            _ => self.dimensions.height_mm,
        }
    }
}
