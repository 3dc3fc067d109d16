//! # Timber Member Core
//!
//! Geometry, material and the bending/shear capacities shared by
//! [`TimberBeam`](super::TimberBeam) and [`TimberColumn`](super::TimberColumn).
//!
//! ## Assumptions
//!
//! - Solid rectangular section, `depth_mm >= breadth_mm`
//! - Major-axis bending is about the axis parallel to the breadth
//! - Minor-axis bending is treated as laterally stable (k12 = 1)

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Axis, DesignCapacity};
use crate::equations::section::{rectangular_area, rectangular_section_modulus, rectangular_shear_area};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::factors::as1720_ref;
use crate::factors::timber::{
    beam_slenderness, capacity_factor, partial_seasoning_factor, rho_b, stability_factor, temperature_factor,
    ApplicationCategory, BeamSlenderness, LateralRestraint, LoadDuration, StrengthSharing, TimberFactorSet,
};
use crate::materials::{ServiceCondition, TimberCategory, TimberGrade, TimberProperties};
use crate::settings::DesignSettings;
use crate::units::{CubicMillimetres, KilonewtonMetres, Kilonewtons, SquareMillimetres};

/// Input parameters for a timber member.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "J-1",
///   "category": "F-grade",
///   "grade": "F17",
///   "condition": { "seasoning": "Seasoned", "latitude": "Temperate" },
///   "moisture_content_pct": 12.0,
///   "application": "Category2",
///   "length_mm": 3000.0,
///   "depth_mm": 200.0,
///   "breadth_mm": 50.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimberMemberInput {
    /// User label for this member (e.g., "J-1", "Ridge Beam")
    pub label: String,

    /// Product family the grade belongs to ("F-grade", "MGP", "GL")
    pub category: String,

    /// Stress grade ("F17", "MGP10", "GL17"); case and separators are ignored
    pub grade: String,

    /// Seasoning and climate zone
    pub condition: ServiceCondition,

    /// Equilibrium moisture content in service (%)
    pub moisture_content_pct: f64,

    /// Application category for the capacity factor
    pub application: ApplicationCategory,

    /// Member length in mm (span for beams, height for columns)
    pub length_mm: f64,

    /// Larger section dimension in mm
    pub depth_mm: f64,

    /// Smaller section dimension in mm
    pub breadth_mm: f64,

    #[serde(default)]
    pub settings: DesignSettings,
}

impl TimberMemberInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_mm", self.length_mm)?;
        require_positive("depth_mm", self.depth_mm)?;
        require_positive("breadth_mm", self.breadth_mm)?;
        require_positive("moisture_content_pct", self.moisture_content_pct)?;
        self.settings.validate()?;
        if self.breadth_mm > self.depth_mm {
            return Err(CalcError::invalid_input(
                "breadth_mm",
                self.breadth_mm.to_string(),
                "Breadth must not exceed depth; use the minor-axis methods for bending about the narrow face",
            ));
        }
        Ok(())
    }
}

/// Parameters for a bending capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendingParams {
    pub load_duration: LoadDuration,
    pub strength_sharing: StrengthSharing,
    /// Lateral restraint of the compression flange (major axis only)
    pub restraint: LateralRestraint,
    /// Beam material constant ρb (major axis only)
    pub rho_b: f64,
}

impl BendingParams {
    /// Parameters with ρb derived from the member's own grade (Appendix E2).
    ///
    /// `r` is the ratio of temporary to total design action effect.
    pub fn for_member(
        member: &TimberMember,
        load_duration: LoadDuration,
        strength_sharing: StrengthSharing,
        restraint: LateralRestraint,
        r: f64,
    ) -> CalcResult<Self> {
        Ok(BendingParams {
            load_duration,
            strength_sharing,
            restraint,
            rho_b: rho_b(member.properties(), r)?,
        })
    }
}

/// Design bending capacity Md with the factors that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingCapacity {
    /// Design capacity in bending (kN·m)
    pub capacity_knm: f64,
    pub axis: Axis,
    /// Section modulus about the bending axis (mm³)
    pub section_modulus_mm3: f64,
    /// Characteristic bending strength f'b (MPa)
    pub fb_mpa: f64,
    /// S1 and restraint classification; `None` for minor-axis bending
    pub slenderness: Option<BeamSlenderness>,
    pub factors: TimberFactorSet,
    pub code_reference: String,
}

impl DesignCapacity for BendingCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_knm
    }
}

impl BendingCapacity {
    /// Factor report citing the beam stability clause
    pub fn format_report(&self) -> String {
        self.factors.format_report(as1720_ref::K12_BEAM)
    }
}

/// Design shear capacity Vd with the factors that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearCapacity {
    /// Design capacity in shear (kN)
    pub capacity_kn: f64,
    /// Shear plane area As = 2bd/3 (mm²)
    pub shear_area_mm2: f64,
    /// Characteristic shear strength f's (MPa)
    pub fs_mpa: f64,
    pub factors: TimberFactorSet,
    pub code_reference: String,
}

impl DesignCapacity for ShearCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_kn
    }
}

/// A validated timber member with its resolved material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimberMember {
    input: TimberMemberInput,
    properties: TimberProperties,
}

impl TimberMember {
    /// Validate the geometry and resolve the grade.
    ///
    /// An unknown category or grade string fails with `MaterialNotFound`.
    pub fn new(input: TimberMemberInput) -> CalcResult<Self> {
        input.validate()?;
        let category = TimberCategory::from_str_flexible(&input.category)?;
        let grade = TimberGrade::from_str_flexible(&input.grade)?;
        let properties = TimberProperties::lookup(category, grade, input.condition)?;
        debug!(
            "timber member '{}': {} {} ({}), {} x {} x {} mm",
            input.label,
            category.code(),
            grade,
            input.condition,
            input.length_mm,
            input.depth_mm,
            input.breadth_mm
        );
        Ok(Self { input, properties })
    }

    pub fn input(&self) -> &TimberMemberInput {
        &self.input
    }

    pub fn properties(&self) -> &TimberProperties {
        &self.properties
    }

    /// Least of the length and section dimensions, which governs drying (mm)
    pub fn least_dimension_mm(&self) -> f64 {
        self.input.length_mm.min(self.input.breadth_mm).min(self.input.depth_mm)
    }

    /// Cite a clause against the member's timber edition
    pub(crate) fn reference(&self, clause: &str) -> String {
        self.input.settings.timber_reference(clause)
    }

    /// φ, k1, k4 and k6 for the given load duration; k9 and k12 left at 1.
    pub(crate) fn base_factors(&self, load_duration: LoadDuration) -> TimberFactorSet {
        let condition = self.properties.condition;
        TimberFactorSet {
            phi: capacity_factor(self.properties.category, self.input.application),
            k1: load_duration.factor(),
            k4: partial_seasoning_factor(
                condition.seasoning,
                self.input.moisture_content_pct,
                self.least_dimension_mm(),
            ),
            k6: temperature_factor(condition.latitude),
            k9: 1.0,
            k12: 1.0,
        }
    }

    /// Design bending capacity about the major axis.
    ///
    /// `Md = φ k1 k4 k6 k9 k12 f'b Z` with `Z = b d²/6` and k12 from ρb S1.
    pub fn major_axis_bending(&self, params: &BendingParams) -> CalcResult<BendingCapacity> {
        let (d, b) = (self.input.depth_mm, self.input.breadth_mm);
        let slenderness = beam_slenderness(d, b, &params.restraint, params.rho_b)?;

        let mut factors = self.base_factors(params.load_duration);
        factors.k9 = params.strength_sharing.factor()?;
        factors.k12 = stability_factor(params.rho_b * slenderness.s1);

        let z = rectangular_section_modulus(b, d);
        self.bending_result(Axis::Major, z, Some(slenderness), factors)
    }

    /// Design bending capacity about the minor axis.
    ///
    /// `Z = d b²/6`; bending about the minor axis cannot buckle laterally so
    /// k12 = 1 and the restraint parameters are not used.
    pub fn minor_axis_bending(&self, params: &BendingParams) -> CalcResult<BendingCapacity> {
        let (d, b) = (self.input.depth_mm, self.input.breadth_mm);

        let mut factors = self.base_factors(params.load_duration);
        factors.k9 = params.strength_sharing.factor()?;

        let z = rectangular_section_modulus(d, b);
        self.bending_result(Axis::Minor, z, None, factors)
    }

    fn bending_result(
        &self,
        axis: Axis,
        z: f64,
        slenderness: Option<BeamSlenderness>,
        factors: TimberFactorSet,
    ) -> CalcResult<BendingCapacity> {
        let capacity: KilonewtonMetres = (self.properties.fb() * factors.product() * CubicMillimetres(z)).into();
        debug!(
            "'{}' {:?}-axis bending: Md = {:.3} kNm (Z = {:.0} mm3, net factor {:.3})",
            self.input.label,
            axis,
            capacity.value(),
            z,
            factors.product()
        );
        Ok(BendingCapacity {
            capacity_knm: capacity.value(),
            axis,
            section_modulus_mm3: z,
            fb_mpa: self.properties.fb_mpa,
            slenderness,
            factors,
            code_reference: self.reference(as1720_ref::BENDING),
        })
    }

    /// Design shear capacity `Vd = φ k1 k4 k6 f's As`.
    pub fn shear(&self, load_duration: LoadDuration) -> CalcResult<ShearCapacity> {
        let factors = self.base_factors(load_duration);
        let shear_area = rectangular_shear_area(self.input.breadth_mm, self.input.depth_mm);
        let capacity: Kilonewtons =
            (self.properties.fs() * factors.product() * SquareMillimetres(shear_area)).into();
        debug!(
            "'{}' shear: Vd = {:.3} kN (As = {:.0} mm2)",
            self.input.label,
            capacity.value(),
            shear_area
        );
        Ok(ShearCapacity {
            capacity_kn: capacity.value(),
            shear_area_mm2: shear_area,
            fs_mpa: self.properties.fs_mpa,
            factors,
            code_reference: self.reference(as1720_ref::SHEAR),
        })
    }

    /// Gross section area (mm²)
    pub fn area_mm2(&self) -> f64 {
        rectangular_area(self.input.breadth_mm, self.input.depth_mm)
    }
}
