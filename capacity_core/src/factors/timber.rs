//! # AS 1720.1 Modification Factors
//!
//! Design capacities are the characteristic strength times the product of
//! these factors:
//!
//! ```text
//! Md  = φ k1 k4 k6 k9 k12 f'b Z
//! Vd  = φ k1 k4 k6 f's As
//! Ndc = φ k1 k4 k6 k12 f'c Ac
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Description              | Typical Values    |
//! |--------|--------------------------|-------------------|
//! | φ      | Capacity factor          | 0.70 - 0.95       |
//! | k1     | Duration of load         | 0.57 - 1.0        |
//! | k4     | Partial seasoning        | 0.7 - 1.15        |
//! | k6     | Temperature              | 0.9 or 1.0        |
//! | k9     | Strength sharing         | 1.0 - 1.33        |
//! | k12    | Stability                | Calculated        |

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::as1720_ref;
use crate::errors::{require_positive_param, CalcError, CalcResult};
use crate::materials::{LatitudeZone, Seasoning, TimberCategory, TimberProperties};

/// Slenderness coefficients above this are outside the stability provisions
pub const MAX_SLENDERNESS: f64 = 50.0;

/// Strength sharing ratios g31/g32 for 1..=10 members (Table 2.7)
const STRENGTH_SHARING_TABLE: [f64; 10] = [1.0, 1.14, 1.20, 1.24, 1.26, 1.28, 1.30, 1.31, 1.32, 1.33];

// ============================================================================
// Capacity Factor φ
// ============================================================================

/// Application category of the member (Table 2.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationCategory {
    /// Secondary members whose failure gives limited damage
    Category1,
    /// Primary members in structures other than houses
    Category2,
    /// Primary members in post-disaster structures
    Category3,
}

impl ApplicationCategory {
    pub const ALL: [ApplicationCategory; 3] = [
        ApplicationCategory::Category1,
        ApplicationCategory::Category2,
        ApplicationCategory::Category3,
    ];

    fn index(&self) -> usize {
        match self {
            ApplicationCategory::Category1 => 0,
            ApplicationCategory::Category2 => 1,
            ApplicationCategory::Category3 => 2,
        }
    }
}

/// Capacity factor φ by product family and application category.
pub fn capacity_factor(category: TimberCategory, application: ApplicationCategory) -> f64 {
    let row = match category {
        TimberCategory::SawnFGrade => [0.90, 0.80, 0.70],
        TimberCategory::MachineGradedPine => [0.95, 0.85, 0.75],
        TimberCategory::Glulam => [0.95, 0.85, 0.75],
    };
    row[application.index()]
}

// ============================================================================
// Duration of Load k1
// ============================================================================

/// Cumulative duration of the peak load, Table 2.3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadDuration {
    /// 5 seconds: k1 = 1.0 (wind gusts)
    FiveSeconds,
    /// 5 minutes: k1 = 1.0
    FiveMinutes,
    /// 5 hours: k1 = 0.97
    FiveHours,
    /// 5 days: k1 = 0.94 (construction, roof live load)
    FiveDays,
    /// 5 months: k1 = 0.80 (floor live load)
    FiveMonths,
    /// 50+ years: k1 = 0.57 (permanent load)
    FiftyYears,
}

impl LoadDuration {
    pub const ALL: [LoadDuration; 6] = [
        LoadDuration::FiveSeconds,
        LoadDuration::FiveMinutes,
        LoadDuration::FiveHours,
        LoadDuration::FiveDays,
        LoadDuration::FiveMonths,
        LoadDuration::FiftyYears,
    ];

    /// Get the k1 factor value
    pub fn factor(&self) -> f64 {
        match self {
            LoadDuration::FiveSeconds => 1.0,
            LoadDuration::FiveMinutes => 1.0,
            LoadDuration::FiveHours => 0.97,
            LoadDuration::FiveDays => 0.94,
            LoadDuration::FiveMonths => 0.80,
            LoadDuration::FiftyYears => 0.57,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadDuration::FiveSeconds => "5 seconds (1.00)",
            LoadDuration::FiveMinutes => "5 minutes (1.00)",
            LoadDuration::FiveHours => "5 hours (0.97)",
            LoadDuration::FiveDays => "5 days (0.94)",
            LoadDuration::FiveMonths => "5 months (0.80)",
            LoadDuration::FiftyYears => "50+ years (0.57)",
        }
    }
}

impl std::fmt::Display for LoadDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Seasoning k4 and Temperature k6
// ============================================================================

/// Partial seasoning factor k4.
///
/// Seasoned timber is reduced when its equilibrium moisture content exceeds
/// 15%. Unseasoned timber gains strength as it dries, more so for thin
/// sections.
pub fn partial_seasoning_factor(seasoning: Seasoning, moisture_content_pct: f64, least_dimension_mm: f64) -> f64 {
    match seasoning {
        Seasoning::Seasoned if moisture_content_pct > 15.0 => {
            (1.0 - 0.3 * (moisture_content_pct - 15.0) / 10.0).max(0.7)
        }
        Seasoning::Seasoned => 1.0,
        Seasoning::Unseasoned => {
            if least_dimension_mm <= 38.0 {
                1.15
            } else if least_dimension_mm < 50.0 {
                1.10
            } else if least_dimension_mm < 75.0 {
                1.05
            } else {
                1.0
            }
        }
    }
}

/// Temperature factor k6
pub fn temperature_factor(latitude: LatitudeZone) -> f64 {
    match latitude {
        LatitudeZone::Temperate => 1.0,
        LatitudeZone::Tropical => 0.9,
    }
}

// ============================================================================
// Strength Sharing k9
// ============================================================================

/// Load sharing between parallel members (Cl 2.4.5)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StrengthSharing {
    /// Member acts alone: k9 = 1.0
    Single,
    /// Combined members in a grid or system
    Combined {
        /// Number of elements fastened together to form one member
        ncom: u32,
        /// Number of members in the parallel system
        nmem: u32,
        /// Centre-to-centre member spacing; required when nmem > 1
        spacing_mm: Option<f64>,
        /// Span of the members; required when nmem > 1
        span_mm: Option<f64>,
    },
}

impl StrengthSharing {
    /// Strength sharing factor k9
    pub fn factor(&self) -> CalcResult<f64> {
        match *self {
            StrengthSharing::Single => Ok(1.0),
            StrengthSharing::Combined {
                ncom,
                nmem,
                spacing_mm,
                span_mm,
            } => {
                if ncom == 0 || nmem == 0 {
                    return Err(CalcError::out_of_range(
                        "strength_sharing",
                        format!("ncom={}, nmem={}", ncom, nmem),
                        "Member counts must be at least 1",
                    ));
                }
                let g31 = sharing_ratio(ncom);
                if nmem == 1 {
                    return Ok(g31.max(1.0));
                }
                let spacing = spacing_mm.ok_or_else(|| CalcError::missing_field("spacing_mm"))?;
                let span = span_mm.ok_or_else(|| CalcError::missing_field("span_mm"))?;
                require_positive_param("spacing_mm", spacing)?;
                require_positive_param("span_mm", span)?;

                let g32 = sharing_ratio(ncom.saturating_mul(nmem));
                Ok((g31 + (g32 - g31) * (1.0 - 2.0 * spacing / span)).max(1.0))
            }
        }
    }
}

fn sharing_ratio(n: u32) -> f64 {
    let index = (n.min(10) as usize).saturating_sub(1);
    STRENGTH_SHARING_TABLE[index]
}

// ============================================================================
// Stability k12 and Slenderness
// ============================================================================

/// Stability factor k12 for a given ρS (beams: ρb S1, columns: ρc S3/S4).
///
/// Continuous at both regime boundaries: 1.0 at ρS = 10 and 0.5 at ρS = 20.
pub fn stability_factor(rho_s: f64) -> f64 {
    if rho_s <= 10.0 {
        1.0
    } else if rho_s <= 20.0 {
        1.5 - 0.05 * rho_s
    } else {
        200.0 / (rho_s * rho_s)
    }
}

/// Edge of the beam at which lateral restraints act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RestraintEdge {
    /// Restraints bear on the compression edge
    CompressionEdge,
    /// Restraints bear on the tension edge only
    TensionEdge,
    /// Tension edge restraint plus fly braces to the compression edge
    TensionEdgeWithFlyBraces {
        /// Fly braces are fitted at every n-th restraint
        fly_brace_every: u32,
    },
}

/// Lateral restraint arrangement of a beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralRestraint {
    pub edge: RestraintEdge,
    /// Distance between restraints along the beam, Lay
    pub spacing_mm: f64,
}

impl LateralRestraint {
    pub fn new(edge: RestraintEdge, spacing_mm: f64) -> Self {
        Self { edge, spacing_mm }
    }
}

/// Slenderness coefficient S1 of a beam and whether it counted as
/// continuously restrained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSlenderness {
    pub s1: f64,
    pub continuously_restrained: bool,
}

/// Slenderness coefficient S1 for bending about the major axis.
///
/// Restraint counts as continuous when `Lay/d ≤ 64 (b / ρb d)²`.
pub fn beam_slenderness(
    depth_mm: f64,
    breadth_mm: f64,
    restraint: &LateralRestraint,
    rho_b: f64,
) -> CalcResult<BeamSlenderness> {
    require_positive_param("restraint.spacing_mm", restraint.spacing_mm)?;
    require_positive_param("rho_b", rho_b)?;

    let d_over_b = depth_mm / breadth_mm;
    let lay_over_d = restraint.spacing_mm / depth_mm;
    let continuous_limit = 64.0 * (breadth_mm / (rho_b * depth_mm)).powi(2);
    let continuously_restrained = lay_over_d <= continuous_limit;

    let s1 = match (restraint.edge, continuously_restrained) {
        (RestraintEdge::CompressionEdge, true) => 0.0,
        (RestraintEdge::CompressionEdge, false) => 1.25 * d_over_b * lay_over_d.sqrt(),
        (RestraintEdge::TensionEdge, true) => 2.25 * d_over_b,
        (RestraintEdge::TensionEdgeWithFlyBraces { fly_brace_every }, true) => {
            if fly_brace_every == 0 {
                return Err(CalcError::out_of_range(
                    "fly_brace_every",
                    "0",
                    "Fly braces must be fitted at every n-th restraint with n >= 1",
                ));
            }
            let fly_spacing = f64::from(fly_brace_every) * restraint.spacing_mm;
            let term = std::f64::consts::PI * depth_mm / fly_spacing;
            1.5 * d_over_b / (term * term + 0.4).sqrt()
        }
        (RestraintEdge::TensionEdge, false)
        | (RestraintEdge::TensionEdgeWithFlyBraces { .. }, false) => {
            d_over_b.powf(1.35) * lay_over_d.powf(0.25)
        }
    };

    check_slenderness("s1", s1)?;
    debug!(
        "S1 = {:.3} (continuous: {}, limit Lay/d = {:.2}) [{}]",
        s1, continuously_restrained, continuous_limit, as1720_ref::S1
    );
    Ok(BeamSlenderness {
        s1,
        continuously_restrained,
    })
}

/// Effective length factor g13 by end restraint (Table 3.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndRestraint {
    /// Flat ends
    FlatEnds,
    /// Restrained in position and direction at both ends
    PositionAndDirectionBothEnds,
    /// Bolted at both ends with two bolts each end
    TwoBoltsEachEnd,
    /// One end fixed, the other restrained in position only
    FixedAndPinned,
    /// Studs in light framing, sheeted in plane
    LightFramingStud,
    /// Restrained in position only at both ends
    PinnedBothEnds,
    /// One end fixed, the other partially restrained in direction
    FixedAndPartialDirection,
    /// One end fixed, the other free (flagpole)
    Cantilever,
}

impl EndRestraint {
    pub const ALL: [EndRestraint; 8] = [
        EndRestraint::FlatEnds,
        EndRestraint::PositionAndDirectionBothEnds,
        EndRestraint::TwoBoltsEachEnd,
        EndRestraint::FixedAndPinned,
        EndRestraint::LightFramingStud,
        EndRestraint::PinnedBothEnds,
        EndRestraint::FixedAndPartialDirection,
        EndRestraint::Cantilever,
    ];

    /// Effective length factor g13
    pub fn g13(&self) -> f64 {
        match self {
            EndRestraint::FlatEnds => 0.7,
            EndRestraint::PositionAndDirectionBothEnds => 0.7,
            EndRestraint::TwoBoltsEachEnd => 0.75,
            EndRestraint::FixedAndPinned => 0.85,
            EndRestraint::LightFramingStud => 0.9,
            EndRestraint::PinnedBothEnds => 1.0,
            EndRestraint::FixedAndPartialDirection => 1.5,
            EndRestraint::Cantilever => 2.0,
        }
    }
}

/// Column slenderness coefficient about one axis: S3 (using d) or S4 (using b).
///
/// The lesser of the restrained length ratio and `g13 L / dimension`.
pub fn column_slenderness(
    field: &str,
    restraint_spacing_mm: f64,
    length_mm: f64,
    dimension_mm: f64,
    end_restraint: EndRestraint,
) -> CalcResult<f64> {
    require_positive_param(field, restraint_spacing_mm)?;
    let slenderness = (restraint_spacing_mm / dimension_mm).min(end_restraint.g13() * length_mm / dimension_mm);
    check_slenderness(field, slenderness)?;
    debug!(
        "{} = {:.3} (g13 = {} [{}])",
        field,
        slenderness,
        end_restraint.g13(),
        as1720_ref::G13
    );
    Ok(slenderness)
}

fn check_slenderness(field: &str, slenderness: f64) -> CalcResult<()> {
    if slenderness > MAX_SLENDERNESS {
        return Err(CalcError::out_of_range(
            field,
            format!("{:.2}", slenderness),
            format!(
                "Slenderness coefficient exceeds {} ({} / {})",
                MAX_SLENDERNESS,
                as1720_ref::S1,
                as1720_ref::S3_S4
            ),
        ));
    }
    Ok(())
}

// ============================================================================
// Material Constants ρb and ρc
// ============================================================================

fn check_action_ratio(r: f64) -> CalcResult<()> {
    if !(r > 0.0 && r <= 1.0) {
        return Err(CalcError::out_of_range(
            "r",
            r.to_string(),
            "Ratio of temporary to total design action effect must be in (0, 1]",
        ));
    }
    Ok(())
}

/// Material constant for beams ρb (Appendix E2).
///
/// `r` is the ratio of temporary design action effect to total design action
/// effect.
pub fn rho_b(props: &TimberProperties, r: f64) -> CalcResult<f64> {
    check_action_ratio(r)?;
    let ratio = props.e_mpa / props.fb_mpa;
    trace!("rho_b: E/f'b = {:.1}, r = {} [{}]", ratio, r, as1720_ref::RHO);
    Ok(match props.condition.seasoning {
        Seasoning::Seasoned => 14.71 * ratio.powf(-0.480) * r.powf(-0.061),
        Seasoning::Unseasoned => 11.63 * ratio.powf(-0.435) * r.powf(-0.110),
    })
}

/// Material constant for columns ρc (Appendix E3).
pub fn rho_c(props: &TimberProperties, r: f64) -> CalcResult<f64> {
    check_action_ratio(r)?;
    let ratio = props.e_mpa / props.fc_mpa;
    trace!("rho_c: E/f'c = {:.1}, r = {} [{}]", ratio, r, as1720_ref::RHO);
    Ok(match props.condition.seasoning {
        Seasoning::Seasoned => 11.39 * ratio.powf(-0.408) * r.powf(-0.074),
        Seasoning::Unseasoned => 9.29 * ratio.powf(-0.367) * r.powf(-0.146),
    })
}

// ============================================================================
// Factor Summary
// ============================================================================

/// Factors applied in one timber capacity calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimberFactorSet {
    /// Capacity factor
    pub phi: f64,
    /// Duration of load factor
    pub k1: f64,
    /// Partial seasoning factor
    pub k4: f64,
    /// Temperature factor
    pub k6: f64,
    /// Strength sharing factor (1.0 where it does not apply)
    pub k9: f64,
    /// Stability factor (1.0 where it does not apply)
    pub k12: f64,
}

impl TimberFactorSet {
    /// Net multiplier on the characteristic strength
    pub fn product(&self) -> f64 {
        self.phi * self.k1 * self.k4 * self.k6 * self.k9 * self.k12
    }

    /// Format as a multi-line string for reports.
    ///
    /// `k12_reference` cites the stability clause of the check the factors
    /// belong to: [`as1720_ref::K12_BEAM`] or [`as1720_ref::K12_COLUMN`].
    pub fn format_report(&self, k12_reference: &str) -> String {
        format!(
            "AS 1720.1 Modification Factors\n\
             ================================================\n\
             φ    (Capacity)         = {:.2}    {}\n\
             k1   (Duration of Load) = {:.2}    {}\n\
             k4   (Seasoning)        = {:.2}    {}\n\
             k6   (Temperature)      = {:.2}    {}\n\
             k9   (Strength Sharing) = {:.3}   {}\n\
             k12  (Stability)        = {:.3}   {}\n\
             ------------------------------------------------\n\
             Net factor              = {:.3}",
            self.phi, as1720_ref::PHI,
            self.k1, as1720_ref::K1,
            self.k4, as1720_ref::K4,
            self.k6, as1720_ref::K6,
            self.k9, as1720_ref::K9,
            self.k12, k12_reference,
            self.product(),
        )
    }
}
