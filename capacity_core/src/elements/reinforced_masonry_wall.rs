//! # Reinforced Masonry Wall (AS 3700 Section 8)
//!
//! A grouted masonry wall with fully anchored tension reinforcement, checked
//! for bending to Cl 8.6:
//!
//! ```text
//! Asd = min(Ast, 0.29 (1.3 f'm) b d / fsy)
//! Md  = φ fsy Asd d (1 - 0.6 fsy Asd / (1.3 f'm b d))
//! ```
//!
//! The width b depends on the bending direction:
//!
//! | Check                      | b          |
//! |----------------------------|------------|
//! | Out of plane, vertical     | length L   |
//! | Out of plane, horizontal   | height H   |
//! | In plane                   | thickness t|
//!
//! Only M3 mortar is covered; k_m comes from Table 3.1 for the unit and
//! bedding of the wall.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::elements::reinforced_masonry_wall::{
//!     ReinforcedMasonryWall, ReinforcedMasonryWallInput, ReinforcementParams,
//! };
//! use capacity_core::materials::{BeddingType, MasonryMaterial, MasonryUnit, MortarClass};
//!
//! let material = MasonryMaterial::new(MasonryUnit::HollowConcrete, MortarClass::M3, BeddingType::FaceShell, 15.0);
//! let wall = ReinforcedMasonryWall::new(ReinforcedMasonryWallInput::new("RW-1", 1000.0, 6000.0, 190.0, material))
//!     .unwrap();
//!
//! // N12 bars at 400 mm centres in the middle of a 190 block
//! let md = wall
//!     .out_of_plane_vertical_bending(&ReinforcementParams {
//!         effective_depth_mm: 95.0,
//!         tension_steel_area_mm2: 113.0 / 0.4,
//!         fsy_mpa: 500.0,
//!     })
//!     .unwrap();
//! assert_eq!(md.capacity_knm, 9.21);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::DesignCapacity;
use crate::errors::{require_positive, require_positive_param, CalcError, CalcResult};
use crate::factors::as3700_ref;
use crate::factors::masonry::PHI_REINFORCED_BENDING;
use crate::materials::{MasonryMaterial, MasonryProperties, MortarClass};
use crate::settings::DesignSettings;
use crate::units::{KilonewtonMetres, NewtonMillimetres};

/// Input parameters for a reinforced masonry wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcedMasonryWallInput {
    /// User label for this wall (e.g., "RW-1", "Retaining Wall")
    pub label: String,

    /// Wall length L in mm
    pub length_mm: f64,

    /// Wall height H in mm
    pub height_mm: f64,

    /// Wall thickness t in mm
    pub thickness_mm: f64,

    pub material: MasonryMaterial,

    #[serde(default)]
    pub settings: DesignSettings,
}

impl ReinforcedMasonryWallInput {
    pub fn new(
        label: impl Into<String>,
        length_mm: f64,
        height_mm: f64,
        thickness_mm: f64,
        material: MasonryMaterial,
    ) -> Self {
        ReinforcedMasonryWallInput {
            label: label.into(),
            length_mm,
            height_mm,
            thickness_mm,
            material,
            settings: DesignSettings::default(),
        }
    }

    /// Replace the default design settings
    pub fn with_settings(mut self, settings: DesignSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_mm", self.length_mm)?;
        require_positive("height_mm", self.height_mm)?;
        require_positive("thickness_mm", self.thickness_mm)?;
        self.settings.validate()?;
        self.material.validate()
    }
}

/// Tension reinforcement for one bending check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementParams {
    /// Depth from the extreme compression fibre to the tension steel, d (mm)
    pub effective_depth_mm: f64,
    /// Fully anchored tension reinforcement Ast (mm²)
    pub tension_steel_area_mm2: f64,
    /// Design yield strength fsy (MPa), typically 500
    pub fsy_mpa: f64,
}

/// Design bending capacity of reinforced masonry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcedBendingCapacity {
    /// Md (kN·m)
    pub capacity_knm: f64,
    /// Width of the section in bending, b (mm)
    pub width_mm: f64,
    pub effective_depth_mm: f64,
    /// Steel area counted in the capacity, Asd (mm²)
    pub design_steel_area_mm2: f64,
    /// Upper bound on Asd, `0.29 (1.3 f'm) b d / fsy` (mm²)
    pub steel_area_limit_mm2: f64,
    pub fsy_mpa: f64,
    pub fm_mpa: f64,
    pub phi: f64,
    pub code_reference: String,
}

impl DesignCapacity for ReinforcedBendingCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_knm
    }
}

/// A reinforced masonry wall with its derived strengths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcedMasonryWall {
    input: ReinforcedMasonryWallInput,
    properties: MasonryProperties,
}

impl ReinforcedMasonryWall {
    /// Validate the wall and derive the masonry strengths.
    ///
    /// Fails with `MaterialNotFound` for any mortar other than M3.
    pub fn new(input: ReinforcedMasonryWallInput) -> CalcResult<Self> {
        input.validate()?;
        let properties = MasonryProperties::derive(input.material.clone(), &input.settings)?;
        if properties.mortar != MortarClass::M3 {
            return Err(CalcError::material_not_found(format!(
                "{} mortar for reinforced masonry (only M3 is covered)",
                properties.mortar
            )));
        }
        debug!(
            "reinforced masonry wall '{}': {} x {} x {} mm, f'm = {} MPa",
            input.label, input.length_mm, input.height_mm, input.thickness_mm, properties.fm_mpa
        );
        Ok(Self { input, properties })
    }

    pub fn input(&self) -> &ReinforcedMasonryWallInput {
        &self.input
    }

    pub fn properties(&self) -> &MasonryProperties {
        &self.properties
    }

    /// Bending about a horizontal axis with the wall spanning vertically (b = L).
    pub fn out_of_plane_vertical_bending(&self, params: &ReinforcementParams) -> CalcResult<ReinforcedBendingCapacity> {
        self.bending("out-of-plane vertical", self.input.length_mm, self.input.thickness_mm, params)
    }

    /// Bending about a vertical axis with the wall spanning horizontally (b = H).
    pub fn out_of_plane_horizontal_bending(
        &self,
        params: &ReinforcementParams,
    ) -> CalcResult<ReinforcedBendingCapacity> {
        self.bending("out-of-plane horizontal", self.input.height_mm, self.input.thickness_mm, params)
    }

    /// Bending in the plane of the wall (b = t, d measured along the length).
    pub fn in_plane_bending(&self, params: &ReinforcementParams) -> CalcResult<ReinforcedBendingCapacity> {
        self.bending("in-plane", self.input.thickness_mm, self.input.length_mm, params)
    }

    /// `depth_mm` is the overall section depth the steel must sit within.
    fn bending(
        &self,
        direction: &str,
        width_mm: f64,
        depth_mm: f64,
        params: &ReinforcementParams,
    ) -> CalcResult<ReinforcedBendingCapacity> {
        let d = params.effective_depth_mm;
        let fsy = params.fsy_mpa;
        require_positive_param("effective_depth_mm", d)?;
        require_positive_param("tension_steel_area_mm2", params.tension_steel_area_mm2)?;
        require_positive_param("fsy_mpa", fsy)?;
        if d >= depth_mm {
            return Err(CalcError::out_of_range(
                "effective_depth_mm",
                d.to_string(),
                format!("Reinforcement must lie within the {} mm section", depth_mm),
            ));
        }

        let fm = self.properties.fm_mpa;
        let b = width_mm;
        let steel_limit = 0.29 * 1.3 * fm * b * d / fsy;
        let asd = params.tension_steel_area_mm2.min(steel_limit);
        let moment = NewtonMillimetres(
            PHI_REINFORCED_BENDING * fsy * asd * d * (1.0 - 0.6 * fsy * asd / (1.3 * fm * b * d)),
        );
        let knm: KilonewtonMetres = moment.into();
        let capacity_knm = self.input.settings.round("reinforced_bending_knm", knm.value())?;
        debug!(
            "'{}' {} bending: b = {} mm, Asd = {:.1} mm2 (limit {:.1}), Md = {} kNm [{}]",
            self.input.label,
            direction,
            b,
            asd,
            steel_limit,
            capacity_knm,
            as3700_ref::REINFORCED_BENDING
        );

        Ok(ReinforcedBendingCapacity {
            capacity_knm,
            width_mm: b,
            effective_depth_mm: d,
            design_steel_area_mm2: asd,
            steel_area_limit_mm2: steel_limit,
            fsy_mpa: fsy,
            fm_mpa: fm,
            phi: PHI_REINFORCED_BENDING,
            code_reference: self.input.settings.masonry_reference(as3700_ref::REINFORCED_BENDING),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{BeddingType, MasonryUnit};
    use approx::assert_relative_eq;

    fn block(mortar: MortarClass) -> MasonryMaterial {
        MasonryMaterial::new(MasonryUnit::HollowConcrete, mortar, BeddingType::FaceShell, 15.0)
    }

    fn tall_wall() -> ReinforcedMasonryWall {
        ReinforcedMasonryWall::new(ReinforcedMasonryWallInput::new("RW-1", 1000.0, 6000.0, 190.0, block(MortarClass::M3)))
            .unwrap()
    }

    fn n12_at_400() -> ReinforcementParams {
        ReinforcementParams {
            effective_depth_mm: 95.0,
            tension_steel_area_mm2: 113.0 / 0.4,
            fsy_mpa: 500.0,
        }
    }

    #[test]
    fn test_tall_wall_vertical_bending() {
        let wall = tall_wall();
        // f'm = 1.3 × round(sqrt(15) × 1.6) = 8.06 MPa
        assert_eq!(wall.properties().fm_mpa, 8.06);
        let result = wall.out_of_plane_vertical_bending(&n12_at_400()).unwrap();
        // Asd = min(282.5, 577.3) = 282.5 mm2
        assert_relative_eq!(result.design_steel_area_mm2, 282.5, epsilon = 1e-9);
        assert_relative_eq!(result.steel_area_limit_mm2, 577.3, epsilon = 0.05);
        assert_eq!(result.capacity_knm, 9.21);
        assert_eq!(result.code_reference, "AS 3700:2018 Cl 8.6");
    }

    #[test]
    fn test_steel_area_is_capped() {
        let wall = tall_wall();
        let mut params = n12_at_400();
        params.tension_steel_area_mm2 = 2000.0;
        let result = wall.out_of_plane_vertical_bending(&params).unwrap();
        assert_relative_eq!(result.design_steel_area_mm2, result.steel_area_limit_mm2, epsilon = 1e-12);

        params.tension_steel_area_mm2 = 4000.0;
        let heavier = wall.out_of_plane_vertical_bending(&params).unwrap();
        assert_eq!(heavier.capacity_knm, result.capacity_knm);
    }

    #[test]
    fn test_bending_width_per_direction() {
        let wall = tall_wall();
        let horizontal = wall.out_of_plane_horizontal_bending(&n12_at_400()).unwrap();
        assert_eq!(horizontal.width_mm, 6000.0);
        let vertical = wall.out_of_plane_vertical_bending(&n12_at_400()).unwrap();
        // A wider compression block loses less lever arm
        assert!(horizontal.capacity_knm > vertical.capacity_knm);

        let in_plane = wall
            .in_plane_bending(&ReinforcementParams {
                effective_depth_mm: 900.0,
                tension_steel_area_mm2: 113.0,
                fsy_mpa: 500.0,
            })
            .unwrap();
        assert_eq!(in_plane.width_mm, 190.0);
        assert!(in_plane.capacity_knm > 0.0);
    }

    #[test]
    fn test_only_m3_mortar() {
        let material = MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M4, BeddingType::Full, 20.0);
        let err = ReinforcedMasonryWall::new(ReinforcedMasonryWallInput::new("RW-2", 1000.0, 3000.0, 110.0, material))
            .unwrap_err();
        assert!(matches!(err, CalcError::MaterialNotFound { .. }));
    }

    #[test]
    fn test_invalid_reinforcement() {
        let wall = tall_wall();
        let mut params = n12_at_400();
        params.effective_depth_mm = 190.0;
        assert!(wall.out_of_plane_vertical_bending(&params).unwrap_err().is_domain_error());

        let mut params = n12_at_400();
        params.fsy_mpa = 0.0;
        assert!(wall.out_of_plane_vertical_bending(&params).unwrap_err().is_domain_error());

        let mut params = n12_at_400();
        params.tension_steel_area_mm2 = -1.0;
        assert!(wall.in_plane_bending(&params).unwrap_err().is_domain_error());
    }
}
