//! # Materials Database
//!
//! Material definitions and property lookups for timber and masonry members.
//!
//! ## Material Types
//!
//! - **Timber**: F-grade sawn timber, MGP and glulam per AS 1720.1 Appendix H
//! - **Masonry**: clay and hollow concrete unreinforced masonry per AS 3700
//!
//! Lookups fail with [`CalcError::MaterialNotFound`](crate::errors::CalcError)
//! for any combination the tables do not contain; nothing falls back to a
//! default grade.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::materials::{
//!     LatitudeZone, MaterialProperties, Seasoning, ServiceCondition, TimberCategory,
//!     TimberGrade, TimberProperties,
//! };
//!
//! let condition = ServiceCondition::new(Seasoning::Seasoned, LatitudeZone::Temperate);
//! let timber = TimberProperties::lookup(TimberCategory::Glulam, TimberGrade::Gl17, condition).unwrap();
//!
//! let strengths = MaterialProperties::Timber(timber).characteristic_strengths();
//! println!("f'b = {} MPa, f'c = {} MPa", strengths.bending_mpa, strengths.compression_mpa);
//! ```

pub mod masonry;
pub mod timber;

pub use masonry::{
    lookup_km, BeddingType, MasonryMaterial, MasonryProperties, MasonryUnit, MortarClass,
};
pub use timber::{
    LatitudeZone, Seasoning, ServiceCondition, TimberCategory, TimberGrade, TimberProperties,
};

use serde::{Deserialize, Serialize};

/// Characteristic strengths common to every material (MPa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthSummary {
    /// f'b for timber, f'ut for masonry
    pub bending_mpa: f64,
    /// f'c for timber, f'm for masonry
    pub compression_mpa: f64,
    /// f's for timber, f'ms for masonry
    pub shear_mpa: f64,
}

/// Resolved material of any element
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Timber", "grade": "F17", "category": "F-grade", ... }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialProperties {
    Timber(TimberProperties),
    Masonry(MasonryProperties),
}

impl MaterialProperties {
    /// Strengths in a material-independent shape
    pub fn characteristic_strengths(&self) -> StrengthSummary {
        match self {
            MaterialProperties::Timber(props) => StrengthSummary {
                bending_mpa: props.fb_mpa,
                compression_mpa: props.fc_mpa,
                shear_mpa: props.fs_mpa,
            },
            MaterialProperties::Masonry(props) => StrengthSummary {
                bending_mpa: props.material.fut_mpa,
                compression_mpa: props.fm_mpa,
                shear_mpa: props.fms_mpa,
            },
        }
    }

    /// Human-readable material description (e.g., "F17 Sawn F-grade")
    pub fn display_name(&self) -> String {
        match self {
            MaterialProperties::Timber(props) => {
                format!("{} {} ({})", props.grade, props.category, props.condition)
            }
            MaterialProperties::Masonry(props) => format!(
                "{} masonry, {} mortar, {}",
                props.material.unit, props.mortar, props.material.bedding
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DesignSettings;

    #[test]
    fn test_timber_summary() {
        let condition = ServiceCondition::new(Seasoning::Seasoned, LatitudeZone::Tropical);
        let props =
            TimberProperties::lookup(TimberCategory::MachineGradedPine, TimberGrade::Mgp10, condition).unwrap();
        let material = MaterialProperties::Timber(props);
        let strengths = material.characteristic_strengths();
        assert_eq!(strengths.bending_mpa, 17.0);
        assert_eq!(strengths.compression_mpa, 18.0);
        assert!(material.display_name().contains("MGP10"));
    }

    #[test]
    fn test_masonry_summary() {
        let mat = MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M4, BeddingType::Full, 20.0);
        let props = MasonryProperties::derive(mat, &DesignSettings::default()).unwrap();
        let material = MaterialProperties::Masonry(props);
        let strengths = material.characteristic_strengths();
        assert_eq!(strengths.compression_mpa, 8.94);
        assert!(strengths.shear_mpa > 0.0);
    }

    #[test]
    fn test_material_json_tag() {
        let condition = ServiceCondition::new(Seasoning::Seasoned, LatitudeZone::Temperate);
        let props = TimberProperties::lookup(TimberCategory::SawnFGrade, TimberGrade::F7, condition).unwrap();
        let json = serde_json::to_string(&MaterialProperties::Timber(props)).unwrap();
        assert!(json.contains("\"type\":\"Timber\""));
        let roundtrip: MaterialProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, MaterialProperties::Timber(props));
    }
}
