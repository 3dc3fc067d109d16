//! # AS 3700 Masonry Factors
//!
//! Capacity reduction factors, slenderness ratios and the reduction factors
//! applied to the basic compressive capacity `Fo = φ f'm`.
//!
//! Slenderness ratios and k-factors are rounded with the precision in
//! [`DesignSettings`] before use, matching hand calculation practice.

use log::debug;
use serde::{Deserialize, Serialize};

use super::as3700_ref;
use crate::errors::{require_non_negative_param, require_positive_param, CalcError, CalcResult};
use crate::materials::BeddingType;
use crate::settings::DesignSettings;

/// Capacity reduction factor for compression
pub const PHI_COMPRESSION: f64 = 0.75;
/// Capacity reduction factor for bending
pub const PHI_BENDING: f64 = 0.6;
/// Capacity reduction factor for shear
pub const PHI_SHEAR: f64 = 0.6;
/// Capacity reduction factor for bending of reinforced masonry
pub const PHI_REINFORCED_BENDING: f64 = 0.75;

/// Largest horizontal-slenderness reduction factor
const MAX_HORIZONTAL_K: f64 = 0.2;

// ============================================================================
// Simplified Compression (Cl 7.3.3)
// ============================================================================

/// How vertical load reaches the wall in the simplified method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompressionLoadType {
    /// Concrete slab bearing over the full wall thickness
    ConcreteSlab,
    /// Other floor or roof systems
    OtherSystems,
    /// Load applied to the face of the wall (e.g., joist hangers)
    FaceLoad,
}

/// Simplified slenderness ratio `Srs = av H / (kt t)`.
pub fn simplified_slenderness(av: f64, kt: f64, height_mm: f64, thickness_mm: f64) -> CalcResult<f64> {
    require_positive_param("av", av)?;
    require_positive_param("kt", kt)?;
    Ok(av * height_mm / (kt * thickness_mm))
}

/// Simplified reduction factor k for the given slenderness.
///
/// Fails when the wall is too slender for k to stay positive.
pub fn simplified_reduction_factor(load_type: CompressionLoadType, srs: f64) -> CalcResult<f64> {
    let k = match load_type {
        CompressionLoadType::ConcreteSlab => (0.67 - 0.02 * (srs - 14.0)).min(0.67),
        CompressionLoadType::OtherSystems => (0.67 - 0.025 * (srs - 10.0)).min(0.67),
        CompressionLoadType::FaceLoad => (0.067 - 0.002 * (srs - 14.0)).min(0.067),
    };
    if k <= 0.0 {
        return Err(CalcError::out_of_range(
            "srs",
            format!("{:.2}", srs),
            format!(
                "Wall too slender for the simplified method (k = {:.3}) [{}]",
                k,
                as3700_ref::SIMPLIFIED_COMPRESSION
            ),
        ));
    }
    Ok(k)
}

// ============================================================================
// Refined Compression (Cl 7.3.4)
// ============================================================================

/// Vertical and horizontal slenderness ratios of a wall
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinedSlenderness {
    pub vertical: f64,
    /// `f64::INFINITY` when there is no vertical edge support (ah = 0)
    #[serde(with = "infinite_as_null")]
    pub horizontal: f64,
}

/// Refined slenderness ratios.
///
/// `Sr_v = av H / (kt t)`; with vertical edge supports (ah ≠ 0)
/// `Sr_h = 0.7/t · sqrt(av H ah Lr)` where Lr is the distance to the return
/// wall (or between returns).
pub fn refined_slenderness(
    settings: &DesignSettings,
    av: f64,
    ah: f64,
    kt: f64,
    height_mm: f64,
    thickness_mm: f64,
    dist_to_return_mm: Option<f64>,
) -> CalcResult<RefinedSlenderness> {
    require_positive_param("av", av)?;
    require_positive_param("kt", kt)?;
    require_non_negative_param("ah", ah)?;

    let vertical = settings.round("sr_vertical", av * height_mm / (kt * thickness_mm))?;

    let horizontal = if ah == 0.0 {
        f64::INFINITY
    } else {
        let lr = dist_to_return_mm.ok_or_else(|| CalcError::missing_field("dist_to_return_mm"))?;
        require_positive_param("dist_to_return_mm", lr)?;
        settings.round(
            "sr_horizontal",
            0.7 / thickness_mm * (av * height_mm * ah * lr).sqrt(),
        )?
    };

    debug!("Sr vertical = {}, Sr horizontal = {}", vertical, horizontal);
    Ok(RefinedSlenderness { vertical, horizontal })
}

/// End eccentricities after applying the 0.05t minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eccentricity {
    /// Larger end eccentricity
    pub e1_mm: f64,
    /// Smaller end eccentricity; negative for double curvature
    pub e2_mm: f64,
}

impl Eccentricity {
    /// Validate the end eccentricities and raise small ones to 0.05t.
    ///
    /// Requires `e1 >= e2` and `e1 >= 0`. Signs are preserved.
    pub fn resolve(e1_mm: f64, e2_mm: f64, thickness_mm: f64) -> CalcResult<Self> {
        if !e1_mm.is_finite() || e1_mm < 0.0 {
            return Err(CalcError::out_of_range(
                "e1_mm",
                e1_mm.to_string(),
                "The larger end eccentricity must be zero or positive",
            ));
        }
        if !e2_mm.is_finite() || e1_mm < e2_mm {
            return Err(CalcError::out_of_range(
                "e2_mm",
                e2_mm.to_string(),
                "e1 must be the larger end eccentricity",
            ));
        }
        let minimum = 0.05 * thickness_mm;
        let raise = |e: f64| {
            if e.abs() < minimum {
                if e < 0.0 {
                    -minimum
                } else {
                    minimum
                }
            } else {
                e
            }
        };
        Ok(Eccentricity {
            e1_mm: raise(e1_mm),
            e2_mm: raise(e2_mm),
        })
    }
}

/// Local crushing reduction factor `k = 1 - 2 e1/t`.
///
/// Fails when k is zero after rounding, so a crushing capacity is never zero.
pub fn crushing_factor(settings: &DesignSettings, ecc: &Eccentricity, thickness_mm: f64) -> CalcResult<f64> {
    let k = 1.0 - 2.0 * ecc.e1_mm / thickness_mm;
    let k = if k > 0.0 { settings.round("k_crushing", k)? } else { 0.0 };
    if k <= 0.0 {
        return Err(CalcError::out_of_range(
            "e1_mm",
            ecc.e1_mm.to_string(),
            "Eccentricity must be less than half the wall thickness",
        ));
    }
    Ok(k)
}

/// Lateral instability reduction factor for one slenderness ratio.
///
/// Zero when the slenderness is infinite (no support in that direction).
pub fn lateral_instability_factor(
    settings: &DesignSettings,
    ecc: &Eccentricity,
    thickness_mm: f64,
    sr: f64,
) -> CalcResult<f64> {
    if sr.is_infinite() {
        return Ok(0.0);
    }
    let e1_t = ecc.e1_mm / thickness_mm;
    let e2_e1 = ecc.e2_mm / ecc.e1_mm;
    let k = 0.5 * (1.0 + e2_e1) * ((1.0 - 2.083 * e1_t) - (0.025 - 0.037 * e1_t) * (1.33 * sr - 8.0))
        + 0.5 * (1.0 - 0.6 * e1_t) * (1.0 - e2_e1) * (1.18 - 0.03 * sr);
    settings.round("k_lateral", k.max(0.0))
}

/// Governing lateral instability factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralFactors {
    pub k_vertical: f64,
    /// Capped at 0.2
    pub k_horizontal: f64,
    /// Larger of the two
    pub k: f64,
}

/// Reduction factor for buckling: the larger of the vertical and the (capped)
/// horizontal value. A wall with no resistance in either direction fails.
pub fn governing_lateral_factor(
    settings: &DesignSettings,
    ecc: &Eccentricity,
    thickness_mm: f64,
    slenderness: &RefinedSlenderness,
) -> CalcResult<LateralFactors> {
    let k_vertical = lateral_instability_factor(settings, ecc, thickness_mm, slenderness.vertical)?;
    let k_horizontal =
        lateral_instability_factor(settings, ecc, thickness_mm, slenderness.horizontal)?.min(MAX_HORIZONTAL_K);
    let k = k_vertical.max(k_horizontal);
    if k <= 0.0 {
        return Err(CalcError::out_of_range(
            "sr_vertical",
            slenderness.vertical.to_string(),
            format!(
                "Wall too slender to carry vertical load [{}]",
                as3700_ref::REFINED_COMPRESSION
            ),
        ));
    }
    debug!("k vertical = {}, k horizontal = {}, k = {}", k_vertical, k_horizontal, k);
    Ok(LateralFactors {
        k_vertical,
        k_horizontal,
        k,
    })
}

// ============================================================================
// Concentrated Loads (Cl 7.3.5)
// ============================================================================

/// Wall length engaged by a concentrated load dispersing at 45° down the
/// wall, limited by the wall ends.
pub fn dispersed_length(
    length_mm: f64,
    height_mm: f64,
    dist_to_end_mm: f64,
    bearing_length_mm: f64,
) -> CalcResult<f64> {
    require_non_negative_param("dist_to_end_mm", dist_to_end_mm)?;
    require_positive_param("bearing_length_mm", bearing_length_mm)?;
    if dist_to_end_mm + bearing_length_mm > length_mm {
        return Err(CalcError::out_of_range(
            "bearing_length_mm",
            bearing_length_mm.to_string(),
            "Bearing extends past the end of the wall",
        ));
    }
    let half_height = height_mm / 2.0;
    Ok(length_mm.min(
        dist_to_end_mm.min(half_height)
            + bearing_length_mm
            + half_height.min(length_mm - dist_to_end_mm - bearing_length_mm),
    ))
}

/// Concentrated bearing factor kb.
///
/// Full bedding: `0.55 (1 + 0.5 a1/L) / (Ab/Ade)^0.33`, bounded by
/// `1 <= kb <= 1.5 + a1/L`. Face shell bedding: 1.0.
pub fn bearing_factor(
    settings: &DesignSettings,
    bedding: BeddingType,
    dist_to_end_mm: f64,
    bearing_area_mm2: f64,
    length_mm: f64,
    dispersed_area_mm2: f64,
) -> CalcResult<f64> {
    match bedding {
        BeddingType::FaceShell => Ok(1.0),
        BeddingType::Full => {
            let a1_l = dist_to_end_mm / length_mm;
            let kb = 0.55 * (1.0 + 0.5 * a1_l) / (bearing_area_mm2 / dispersed_area_mm2).powf(0.33);
            settings.round("kb", kb.min(1.5 + a1_l).max(1.0))
        }
    }
}

// ============================================================================
// Bending (Cl 7.4.3)
// ============================================================================

/// Perpend spacing factor kp for stretcher bond (stagger = half a unit).
pub fn perpend_spacing_factor(
    unit_length_mm: f64,
    unit_height_mm: f64,
    joint_thickness_mm: f64,
    thickness_mm: f64,
) -> f64 {
    let stagger = unit_length_mm / 2.0;
    (stagger / thickness_mm)
        .min(stagger / (unit_height_mm + joint_thickness_mm))
        .min(1.0)
}

// ============================================================================
// Shear (Cl 7.5.4)
// ============================================================================

/// Nature of the bed joint a shear plane runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShearInterface {
    /// Ordinary mortar bed joint
    Mortar,
    /// Damp-proof course, flashing or similar slip joint: no bond strength
    DampProofCourse,
}

mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
