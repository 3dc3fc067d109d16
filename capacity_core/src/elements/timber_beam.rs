//! # Timber Beam (AS 1720.1)
//!
//! A rectangular sawn, MGP or glulam beam checked for bending about either
//! axis and for shear.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::elements::{BendingParams, TimberBeam, TimberMemberInput};
//! use capacity_core::factors::timber::{
//!     ApplicationCategory, LateralRestraint, LoadDuration, RestraintEdge, StrengthSharing,
//! };
//! use capacity_core::materials::{LatitudeZone, Seasoning, ServiceCondition};
//! use capacity_core::settings::DesignSettings;
//!
//! let beam = TimberBeam::new(TimberMemberInput {
//!     label: "B-1".to_string(),
//!     category: "F-grade".to_string(),
//!     grade: "F17".to_string(),
//!     condition: ServiceCondition::new(Seasoning::Seasoned, LatitudeZone::Temperate),
//!     moisture_content_pct: 12.0,
//!     application: ApplicationCategory::Category1,
//!     length_mm: 3000.0,
//!     depth_mm: 200.0,
//!     breadth_mm: 50.0,
//!     settings: DesignSettings::default(),
//! }).unwrap();
//!
//! let md = beam.major_axis_bending(&BendingParams {
//!     load_duration: LoadDuration::FiveSeconds,
//!     strength_sharing: StrengthSharing::Single,
//!     restraint: LateralRestraint::new(RestraintEdge::CompressionEdge, 300.0),
//!     rho_b: 0.9,
//! }).unwrap();
//! assert!((md.capacity_knm - 12.6).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use super::timber_member::{BendingCapacity, BendingParams, ShearCapacity, TimberMember, TimberMemberInput};
use crate::errors::CalcResult;
use crate::factors::timber::LoadDuration;

/// A timber beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimberBeam {
    member: TimberMember,
}

impl TimberBeam {
    /// Validate the input and resolve the grade.
    ///
    /// Fails with `MaterialNotFound` for a grade not tabulated for the
    /// category and service condition.
    pub fn new(input: TimberMemberInput) -> CalcResult<Self> {
        Ok(Self {
            member: TimberMember::new(input)?,
        })
    }

    pub fn member(&self) -> &TimberMember {
        &self.member
    }

    pub fn major_axis_bending(&self, params: &BendingParams) -> CalcResult<BendingCapacity> {
        self.member.major_axis_bending(params)
    }

    pub fn minor_axis_bending(&self, params: &BendingParams) -> CalcResult<BendingCapacity> {
        self.member.minor_axis_bending(params)
    }

    pub fn shear(&self, load_duration: LoadDuration) -> CalcResult<ShearCapacity> {
        self.member.shear(load_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::timber_member::tests::{f17_joist, short_term_bending};
    use crate::elements::Axis;
    use crate::errors::CalcError;
    use crate::factors::timber::{ApplicationCategory, LateralRestraint, RestraintEdge, StrengthSharing};
    use crate::materials::{LatitudeZone, Seasoning, ServiceCondition, TimberCategory, TimberGrade};
    use approx::assert_relative_eq;

    #[test]
    fn test_f17_major_axis_hand_value() {
        let beam = TimberBeam::new(f17_joist()).unwrap();
        let result = beam.major_axis_bending(&short_term_bending(300.0)).unwrap();
        assert_relative_eq!(result.capacity_knm, 12.6, max_relative = 0.005);
        assert_eq!(result.axis, Axis::Major);
    }

    #[test]
    fn test_unseasoned_mgp_rejected() {
        let mut input = f17_joist();
        input.category = "MGP".to_string();
        input.grade = "MGP10".to_string();
        input.condition = ServiceCondition::new(Seasoning::Unseasoned, LatitudeZone::Temperate);
        let err = TimberBeam::new(input).unwrap_err();
        assert!(matches!(err, CalcError::MaterialNotFound { .. }));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_grade_outside_category_rejected() {
        let mut input = f17_joist();
        input.category = "GL".to_string();
        assert!(TimberBeam::new(input).unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_unknown_grade_string_rejected() {
        let mut input = f17_joist();
        input.grade = "F99".to_string();
        let err = TimberBeam::new(input).unwrap_err();
        assert!(matches!(err, CalcError::MaterialNotFound { .. }));

        let mut input = f17_joist();
        input.category = "hardwood".to_string();
        assert!(TimberBeam::new(input).unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_grade_strings_parse_flexibly() {
        let mut input = f17_joist();
        input.grade = "f17".to_string();
        input.category = "sawn".to_string();
        let beam = TimberBeam::new(input).unwrap();
        assert_eq!(beam.member().properties().grade, TimberGrade::F17);
        assert_eq!(beam.member().properties().category, TimberCategory::SawnFGrade);
    }

    #[test]
    fn test_glulam_beam() {
        let mut input = f17_joist();
        input.category = "glulam".to_string();
        input.grade = "gl 17".to_string();
        input.application = ApplicationCategory::Category2;
        input.depth_mm = 360.0;
        input.breadth_mm = 85.0;
        let beam = TimberBeam::new(input).unwrap();
        let params = BendingParams {
            load_duration: LoadDuration::FiveMonths,
            strength_sharing: StrengthSharing::Single,
            restraint: LateralRestraint::new(RestraintEdge::CompressionEdge, 1200.0),
            rho_b: 0.85,
        };
        let result = beam.major_axis_bending(&params).unwrap();
        assert_eq!(result.factors.phi, 0.85);
        assert_eq!(result.factors.k1, 0.8);
        assert!(result.capacity_knm > 0.0);
        assert!(result.factors.k12 <= 1.0);
    }

    #[test]
    fn test_wider_restraint_spacing_reduces_capacity() {
        let beam = TimberBeam::new(f17_joist()).unwrap();
        let close = beam.major_axis_bending(&short_term_bending(1500.0)).unwrap();
        let wide = beam.major_axis_bending(&short_term_bending(3000.0)).unwrap();
        assert!(wide.capacity_knm < close.capacity_knm);
        assert!(wide.slenderness.unwrap().s1 > close.slenderness.unwrap().s1);
    }

    #[test]
    fn test_capacities_non_negative_across_durations() {
        let beam = TimberBeam::new(f17_joist()).unwrap();
        for duration in LoadDuration::ALL {
            let mut params = short_term_bending(2400.0);
            params.load_duration = duration;
            let major = beam.major_axis_bending(&params).unwrap();
            let minor = beam.minor_axis_bending(&params).unwrap();
            let shear = beam.shear(duration).unwrap();
            for value in [major.capacity_knm, minor.capacity_knm, shear.capacity_kn] {
                assert!(value.is_finite() && value > 0.0);
            }
            assert!(minor.capacity_knm < major.capacity_knm);
        }
    }

    #[test]
    fn test_result_serialization() {
        let beam = TimberBeam::new(f17_joist()).unwrap();
        let result = beam.shear(LoadDuration::FiveDays).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("capacity_kn"));
        assert!(json.contains("AS 1720.1:2010 Cl 3.2.5"));
        let roundtrip: ShearCapacity = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }
}
