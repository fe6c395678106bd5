//! # Materials Library
//!
//! Material definitions and the built-in material library for beam analysis.
//!
//! Properties are plain scalars in the units engineers quote them in:
//! yield strength and allowable stress in MPa, elastic modulus in GPa,
//! density in kg/m³, thermal expansion in µm/m·K.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials;
//!
//! let steel = materials::by_id("astm-a36").unwrap();
//! assert_eq!(steel.yield_strength_mpa, 250.0);
//! assert_eq!(steel.elastic_modulus_gpa, 200.0);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Mechanical properties of a beam material.
///
/// All fields are independent scalars; nothing here is derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Stable identifier (e.g., "astm-a36")
    pub id: String,
    /// Display name (e.g., "ASTM A36 Structural Steel")
    pub name: String,
    /// Yield strength Fy (MPa)
    pub yield_strength_mpa: f64,
    /// Elastic modulus E (GPa)
    pub elastic_modulus_gpa: f64,
    /// Density (kg/m³)
    pub density_kg_per_m3: f64,
    /// Poisson's ratio (dimensionless)
    pub poisson_ratio: f64,
    /// Maximum allowable working stress (MPa)
    pub max_allowable_stress_mpa: f64,
    /// Coefficient of thermal expansion (µm/m·K)
    pub thermal_expansion_um_per_m_k: f64,
    /// Whether this material was user-defined rather than from the library
    #[serde(default)]
    pub is_custom: bool,
}

impl Material {
    /// Create a user-defined material.
    ///
    /// Library materials come from [`library`]; this constructor is for
    /// callers that let users enter their own properties.
    #[allow(clippy::too_many_arguments)]
    pub fn custom(
        id: impl Into<String>,
        name: impl Into<String>,
        yield_strength_mpa: f64,
        elastic_modulus_gpa: f64,
        density_kg_per_m3: f64,
        poisson_ratio: f64,
        max_allowable_stress_mpa: f64,
        thermal_expansion_um_per_m_k: f64,
    ) -> Self {
        Material {
            id: id.into(),
            name: name.into(),
            yield_strength_mpa,
            elastic_modulus_gpa,
            density_kg_per_m3,
            poisson_ratio,
            max_allowable_stress_mpa,
            thermal_expansion_um_per_m_k,
            is_custom: true,
        }
    }
}

fn library_material(
    id: &str,
    name: &str,
    yield_strength_mpa: f64,
    elastic_modulus_gpa: f64,
    density_kg_per_m3: f64,
    poisson_ratio: f64,
    max_allowable_stress_mpa: f64,
    thermal_expansion_um_per_m_k: f64,
) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        yield_strength_mpa,
        elastic_modulus_gpa,
        density_kg_per_m3,
        poisson_ratio,
        max_allowable_stress_mpa,
        thermal_expansion_um_per_m_k,
        is_custom: false,
    }
}

/// Built-in material library: common structural steels and aluminum.
static LIBRARY: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        library_material(
            "astm-a36",
            "ASTM A36 Structural Steel",
            250.0,
            200.0,
            7850.0,
            0.26,
            160.0,
            11.7,
        ),
        library_material(
            "astm-a572-gr50",
            "ASTM A572 Grade 50 Steel",
            345.0,
            200.0,
            7850.0,
            0.26,
            230.0,
            11.7,
        ),
        library_material(
            "astm-a992",
            "ASTM A992 Steel",
            345.0,
            200.0,
            7850.0,
            0.26,
            230.0,
            11.7,
        ),
        library_material(
            "aisi-304",
            "AISI 304 Stainless Steel",
            215.0,
            193.0,
            8000.0,
            0.29,
            137.0,
            17.3,
        ),
        library_material(
            "al-6061-t6",
            "Aluminum 6061-T6",
            276.0,
            68.9,
            2700.0,
            0.33,
            165.0,
            23.6,
        ),
    ]
});

/// All built-in materials, in display order.
pub fn library() -> &'static [Material] {
    &LIBRARY
}

/// Look up a built-in material by its stable id.
pub fn by_id(id: &str) -> CalcResult<&'static Material> {
    LIBRARY
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| CalcError::material_not_found(id))
}
