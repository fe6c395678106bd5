//! # beam_core - Structural Beam Analysis Engine
//!
//! `beam_core` computes support reactions, internal force diagrams (shear and
//! bending moment along the span), a deflection estimate, stresses, and
//! safety factors for statically determinate beams, simply supported or
//! cantilevered, under combined point and uniformly distributed loads.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure `analyze(beam, loads)` entry point; every call
//!   recomputes from its inputs and returns a caller-owned result
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured validation errors, not just strings
//! - **One unit system**: mm-based inputs/outputs, SI-base internals, with
//!   every conversion going through [`units`]
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analysis, Beam, CrossSection, Load, materials};
//!
//! // 1 m simply-supported beam, A36 steel, 100×200 mm rectangle
//! let beam = Beam::simple(
//!     1000.0,
//!     materials::by_id("astm-a36").unwrap().clone(),
//!     CrossSection::rectangular(100.0, 200.0),
//! );
//!
//! // 1 kN point load at midspan
//! let loads = vec![Load::point(1000.0, 500.0, 0.0)];
//!
//! let result = analysis::analyze(&beam, &loads).unwrap();
//! println!("Reactions: {:.0} N / {:.0} N", result.reaction_a_n, result.reaction_b_n);
//! println!("Max moment: {:.0} N·mm", result.max_bending_moment_nmm);
//! println!("Safety factor: {:.1}", result.safety_factor);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - The solver pipeline: statics, diagram sampling, stresses
//! - [`beam`] - Beam geometry and support configuration
//! - [`loads`] - Point and distributed load definitions
//! - [`section`] - Cross-section shapes and property formulas
//! - [`materials`] - Material record and built-in library
//! - [`units`] - Type-safe unit wrappers and conversions
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod beam;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, analyze_with_samples, AnalysisResult, DiagramPoint};
pub use beam::{Beam, SupportType, Supports};
pub use errors::{CalcError, CalcResult};
pub use loads::{Load, LoadKind};
pub use materials::Material;
pub use section::{CrossSection, SectionDimensions, SectionProperties, SectionShape};
