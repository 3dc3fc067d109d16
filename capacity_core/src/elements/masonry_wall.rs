//! # Unreinforced Masonry Wall (AS 3700)
//!
//! A rectangular wall panel of length L, height H and thickness t.
//!
//! ## Compression
//!
//! All compression checks build on the basic compressive capacity
//! `Fo = φ f'm` (MPa):
//!
//! - [`MasonryWall::simplified_compression`] - `k Fo L t` with the simplified slenderness
//! - [`MasonryWall::refined_compression`] - crushing and buckling with end eccentricities
//! - [`MasonryWall::concentrated_load`] - bearing `kb Fo Ab`
//! - [`MasonryWall::refined_concentrated_load`] - bearing plus refined compression
//!   over the length engaged by 45° dispersion
//!
//! ## Bending and Shear
//!
//! Vertical bending spans between floors, horizontal bending between
//! vertical supports. Horizontal-plane shear combines bond and friction;
//! vertical-plane shear relies on bond alone.
//!
//! Results are rounded with the precision in the wall's [`DesignSettings`].
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::elements::masonry_wall::{MasonryWall, MasonryWallInput};
//! use capacity_core::materials::{BeddingType, MasonryMaterial, MasonryUnit, MortarClass};
//!
//! let material = MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M3, BeddingType::Full, 20.0);
//! let wall = MasonryWall::new(MasonryWallInput::new("W-1", 4000.0, 2700.0, 110.0, material)).unwrap();
//!
//! let fo = wall.basic_compressive_capacity().unwrap();
//! assert_eq!(fo.capacity_mpa, 4.7);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::DesignCapacity;
use crate::equations::section::rectangular_section_modulus;
use crate::errors::{require_non_negative_param, require_positive, require_positive_param, CalcError, CalcResult};
use crate::factors::as3700_ref;
use crate::factors::masonry::{
    bearing_factor, crushing_factor, dispersed_length, governing_lateral_factor, perpend_spacing_factor,
    refined_slenderness, simplified_reduction_factor, simplified_slenderness, CompressionLoadType,
    Eccentricity, LateralFactors, RefinedSlenderness, ShearInterface, PHI_BENDING, PHI_COMPRESSION,
    PHI_SHEAR,
};
use crate::materials::{MasonryMaterial, MasonryProperties};
use crate::settings::DesignSettings;
use crate::units::{
    CubicMillimetres, KilonewtonMetres, Kilonewtons, Megapascals, NewtonMillimetres, Newtons, SquareMillimetres,
};

/// Largest design compressive stress counted towards vertical bending (MPa)
const MAX_VERTICAL_BENDING_FD: f64 = 0.36;

/// Input parameters for an unreinforced masonry wall.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "W-1",
///   "length_mm": 4000.0,
///   "height_mm": 2700.0,
///   "thickness_mm": 110.0,
///   "material": {
///     "unit": "clay", "mortar": "M3", "bedding": "full", "fuc_mpa": 20.0,
///     "unit_height_mm": 76.0, "unit_length_mm": 230.0, "joint_thickness_mm": 10.0,
///     "fmt_mpa": 0.2, "fut_mpa": 0.8, "density_kn_m3": 19.0
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasonryWallInput {
    /// User label for this wall (e.g., "W-1", "Party Wall")
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

impl MasonryWallInput {
    pub fn new(
        label: impl Into<String>,
        length_mm: f64,
        height_mm: f64,
        thickness_mm: f64,
        material: MasonryMaterial,
    ) -> Self {
        MasonryWallInput {
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

// ============================================================================
// Method Parameters
// ============================================================================

/// Parameters for simplified compression design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedCompressionParams {
    pub load_type: CompressionLoadType,
    /// Vertical slenderness coefficient a_v
    pub av: f64,
    /// Thickness coefficient k_t (1.0 without engaged piers)
    pub kt: f64,
}

/// Parameters for refined compression design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinedCompressionParams {
    /// Vertical slenderness coefficient a_v
    pub av: f64,
    /// Horizontal slenderness coefficient a_h (0 without vertical edge supports)
    pub ah: f64,
    /// Thickness coefficient k_t
    pub kt: f64,
    /// Larger end eccentricity e1 (mm)
    pub e1_mm: f64,
    /// Smaller end eccentricity e2 (mm); negative for double curvature
    pub e2_mm: f64,
    /// Distance to the return wall; required when `ah > 0`
    #[serde(default)]
    pub dist_to_return_mm: Option<f64>,
    /// Length of wall carrying the load; defaults to the wall length
    #[serde(default)]
    pub effective_length_mm: Option<f64>,
}

/// Geometry of a bearing under a concentrated load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingParams {
    /// Bearing length along the wall (mm)
    pub bearing_length_mm: f64,
    /// Bearing width across the wall (mm)
    pub bearing_width_mm: f64,
    /// Distance from the nearer wall end to the bearing, a1 (mm)
    pub dist_to_end_mm: f64,
}

/// Parameters for horizontal-plane shear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalShearParams {
    /// Shear factor k_v
    pub kv: f64,
    /// Minimum design compressive stress on the bed joint f_d (MPa)
    pub fd_mpa: f64,
    pub interface: ShearInterface,
}

// ============================================================================
// Results
// ============================================================================

/// Basic compressive capacity `Fo = φ f'm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicCompressiveCapacity {
    /// Fo (MPa)
    pub capacity_mpa: f64,
    pub phi: f64,
    pub km: f64,
    pub kh: f64,
    pub fmb_mpa: f64,
    pub fm_mpa: f64,
    pub code_reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedCompressionCapacity {
    /// kFo (kN)
    pub capacity_kn: f64,
    /// Simplified slenderness ratio S_rs
    pub srs: f64,
    /// Reduction factor k
    pub k: f64,
    pub fo_mpa: f64,
    pub code_reference: String,
}

impl DesignCapacity for SimplifiedCompressionCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_kn
    }
}

/// Refined compression capacities for crushing and for buckling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinedCompressionCapacity {
    /// Capacity against local crushing at the load (kN)
    pub crushing_kn: f64,
    /// Capacity against lateral instability (kN)
    pub buckling_kn: f64,
    pub effective_length_mm: f64,
    pub eccentricity: Eccentricity,
    pub slenderness: RefinedSlenderness,
    pub k_crushing: f64,
    pub lateral: LateralFactors,
    pub fo_mpa: f64,
    pub code_reference: String,
}

impl DesignCapacity for RefinedCompressionCapacity {
    fn capacity(&self) -> f64 {
        self.crushing_kn.min(self.buckling_kn)
    }
}

/// Bearing capacity under a concentrated load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingCapacity {
    /// kb Fo Ab (kN)
    pub capacity_kn: f64,
    /// Bearing factor kb
    pub kb: f64,
    pub bearing_area_mm2: f64,
    /// Wall length engaged by 45° dispersion
    pub dispersed_length_mm: f64,
    pub fo_mpa: f64,
    pub code_reference: String,
}

impl DesignCapacity for BearingCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_kn
    }
}

/// Concentrated load checked for bearing and for compression of the
/// dispersed wall length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentratedLoadCapacity {
    pub bearing: BearingCapacity,
    pub compression: RefinedCompressionCapacity,
}

impl DesignCapacity for ConcentratedLoadCapacity {
    fn capacity(&self) -> f64 {
        self.bearing.capacity().min(self.compression.capacity())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalBendingCapacity {
    /// Mcv (kN·m)
    pub capacity_knm: f64,
    /// Zd = L t²/6
    pub section_modulus_mm3: f64,
    pub fd_mpa: f64,
    pub code_reference: String,
}

impl DesignCapacity for VerticalBendingCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_knm
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalBendingCapacity {
    /// Mch, the least of the three candidates (kN·m)
    pub capacity_knm: f64,
    /// Bending with the perpends cracked, increased by the precompression
    pub stepped_knm: f64,
    /// Upper bound on the stepped mechanism
    pub stepped_limit_knm: f64,
    /// Line failure through the units and perpends
    pub line_knm: f64,
    /// Perpend spacing factor kp
    pub kp: f64,
    /// Zd = H t²/6
    pub section_modulus_mm3: f64,
    pub code_reference: String,
}

impl DesignCapacity for HorizontalBendingCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_knm
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalShearCapacity {
    /// Bond component V0 (kN); zero across a damp-proof course
    pub bond_kn: f64,
    /// Friction component V1 (kN)
    pub friction_kn: f64,
    /// V0 + V1 (kN)
    pub capacity_kn: f64,
    pub fms_mpa: f64,
    /// Ad = L t
    pub shear_area_mm2: f64,
    pub code_reference: String,
}

impl DesignCapacity for HorizontalShearCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_kn
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalShearCapacity {
    /// Vd (kN)
    pub capacity_kn: f64,
    pub fms_mpa: f64,
    /// t H
    pub shear_area_mm2: f64,
    pub code_reference: String,
}

impl DesignCapacity for VerticalShearCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_kn
    }
}

// ============================================================================
// Wall
// ============================================================================

/// An unreinforced masonry wall with its derived strengths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasonryWall {
    input: MasonryWallInput,
    properties: MasonryProperties,
}

impl MasonryWall {
    /// Validate the wall and derive the masonry strengths.
    ///
    /// Fails with `MaterialNotFound` when the unit, mortar and bedding
    /// combination has no k_m.
    pub fn new(input: MasonryWallInput) -> CalcResult<Self> {
        input.validate()?;
        let properties = MasonryProperties::derive(input.material.clone(), &input.settings)?;
        debug!(
            "masonry wall '{}': {} x {} x {} mm, f'm = {} MPa",
            input.label, input.length_mm, input.height_mm, input.thickness_mm, properties.fm_mpa
        );
        Ok(Self { input, properties })
    }

    pub fn input(&self) -> &MasonryWallInput {
        &self.input
    }

    pub fn properties(&self) -> &MasonryProperties {
        &self.properties
    }

    fn settings(&self) -> &DesignSettings {
        &self.input.settings
    }

    fn to_kn(&self, field: &str, force: Newtons) -> CalcResult<f64> {
        let kn: Kilonewtons = force.into();
        self.settings().round(field, kn.value())
    }

    fn to_knm(&self, field: &str, moment: NewtonMillimetres) -> CalcResult<f64> {
        let knm: KilonewtonMetres = moment.into();
        self.settings().round(field, knm.value())
    }

    fn fo(&self) -> CalcResult<Megapascals> {
        Ok(Megapascals(self.settings().round("fo_mpa", PHI_COMPRESSION * self.properties.fm_mpa)?))
    }

    /// Basic compressive capacity `Fo = φ f'm` (MPa).
    pub fn basic_compressive_capacity(&self) -> CalcResult<BasicCompressiveCapacity> {
        let fo = self.fo()?;
        debug!(
            "'{}' Fo = {} x {} = {} MPa [{}, {}]",
            self.input.label,
            PHI_COMPRESSION,
            self.properties.fm_mpa,
            fo.value(),
            as3700_ref::PHI,
            as3700_ref::BASIC_COMPRESSION
        );
        Ok(BasicCompressiveCapacity {
            capacity_mpa: fo.value(),
            phi: PHI_COMPRESSION,
            km: self.properties.km,
            kh: self.properties.kh,
            fmb_mpa: self.properties.fmb_mpa,
            fm_mpa: self.properties.fm_mpa,
            code_reference: self.settings().masonry_reference(as3700_ref::BASIC_COMPRESSION),
        })
    }

    /// Simplified compression capacity `k Fo L t`.
    pub fn simplified_compression(
        &self,
        params: &SimplifiedCompressionParams,
    ) -> CalcResult<SimplifiedCompressionCapacity> {
        let (length, height, t) = (self.input.length_mm, self.input.height_mm, self.input.thickness_mm);
        let srs = simplified_slenderness(params.av, params.kt, height, t)?;
        let k = simplified_reduction_factor(params.load_type, srs)?;
        let fo = self.fo()?;
        let capacity_kn = self.to_kn("simplified_compression_kn", fo * k * SquareMillimetres(length * t))?;
        debug!(
            "'{}' simplified compression: Srs = {:.2}, k = {:.3}, kFo = {} kN",
            self.input.label, srs, k, capacity_kn
        );
        Ok(SimplifiedCompressionCapacity {
            capacity_kn,
            srs,
            k,
            fo_mpa: fo.value(),
            code_reference: self.settings().masonry_reference(as3700_ref::SIMPLIFIED_COMPRESSION),
        })
    }

    /// Refined compression capacities for crushing and for buckling.
    ///
    /// The load is carried by `effective_length_mm` of wall (the full length
    /// when not given).
    pub fn refined_compression(&self, params: &RefinedCompressionParams) -> CalcResult<RefinedCompressionCapacity> {
        let settings = self.settings();
        let (height, t) = (self.input.height_mm, self.input.thickness_mm);
        let effective_length = params.effective_length_mm.unwrap_or(self.input.length_mm);
        require_positive_param("effective_length_mm", effective_length)?;

        let slenderness =
            refined_slenderness(settings, params.av, params.ah, params.kt, height, t, params.dist_to_return_mm)?;
        let eccentricity = Eccentricity::resolve(params.e1_mm, params.e2_mm, t)?;
        let k_crushing = crushing_factor(settings, &eccentricity, t)?;
        let lateral = governing_lateral_factor(settings, &eccentricity, t, &slenderness)?;

        let fo = self.fo()?;
        let area = SquareMillimetres(effective_length * t);
        let crushing_kn = self.to_kn("crushing_kn", fo * k_crushing * area)?;
        let buckling_kn = self.to_kn("buckling_kn", fo * lateral.k * area)?;
        debug!(
            "'{}' refined compression over {} mm: crushing = {} kN, buckling = {} kN [{}]",
            self.input.label,
            effective_length,
            crushing_kn,
            buckling_kn,
            as3700_ref::REFINED_COMPRESSION
        );

        Ok(RefinedCompressionCapacity {
            crushing_kn,
            buckling_kn,
            effective_length_mm: effective_length,
            eccentricity,
            slenderness,
            k_crushing,
            lateral,
            fo_mpa: fo.value(),
            code_reference: self.settings().masonry_reference(as3700_ref::REFINED_COMPRESSION),
        })
    }

    /// Bearing capacity `kb Fo Ab` under a concentrated load.
    pub fn concentrated_load(&self, bearing: &BearingParams) -> CalcResult<BearingCapacity> {
        let (length, height, t) = (self.input.length_mm, self.input.height_mm, self.input.thickness_mm);
        require_positive_param("bearing_width_mm", bearing.bearing_width_mm)?;
        if bearing.bearing_width_mm > t {
            return Err(CalcError::out_of_range(
                "bearing_width_mm",
                bearing.bearing_width_mm.to_string(),
                "Bearing is wider than the wall",
            ));
        }

        let dispersed =
            dispersed_length(length, height, bearing.dist_to_end_mm, bearing.bearing_length_mm)?;
        let bearing_area = bearing.bearing_length_mm * bearing.bearing_width_mm;
        let kb = bearing_factor(
            self.settings(),
            self.input.material.bedding,
            bearing.dist_to_end_mm,
            bearing_area,
            length,
            dispersed * t,
        )?;

        let fo = self.fo()?;
        let capacity_kn = self.to_kn("bearing_kn", fo * kb * SquareMillimetres(bearing_area))?;
        debug!(
            "'{}' bearing: kb = {}, Ab = {} mm2, capacity = {} kN [{}]",
            self.input.label,
            kb,
            bearing_area,
            capacity_kn,
            as3700_ref::CONCENTRATED_LOAD
        );
        Ok(BearingCapacity {
            capacity_kn,
            kb,
            bearing_area_mm2: bearing_area,
            dispersed_length_mm: dispersed,
            fo_mpa: fo.value(),
            code_reference: self.settings().masonry_reference(as3700_ref::CONCENTRATED_LOAD),
        })
    }

    /// Bearing plus refined compression of the dispersed wall length.
    ///
    /// The effective length in `params` is replaced by the length engaged by
    /// 45° dispersion of the load.
    pub fn refined_concentrated_load(
        &self,
        params: &RefinedCompressionParams,
        bearing: &BearingParams,
    ) -> CalcResult<ConcentratedLoadCapacity> {
        let bearing = self.concentrated_load(bearing)?;
        let compression = self.refined_compression(&RefinedCompressionParams {
            effective_length_mm: Some(bearing.dispersed_length_mm),
            ..*params
        })?;
        Ok(ConcentratedLoadCapacity { bearing, compression })
    }

    /// Vertical bending capacity Mcv for a design compressive stress `fd_mpa`.
    pub fn vertical_bending(&self, fd_mpa: f64) -> CalcResult<VerticalBendingCapacity> {
        require_non_negative_param("fd_mpa", fd_mpa)?;
        let t = self.input.thickness_mm;
        let zd = CubicMillimetres(rectangular_section_modulus(self.input.length_mm, t));
        let fmt = self.properties.material.fmt_mpa;

        let moment = if fmt > 0.0 {
            let tensile = Megapascals(PHI_BENDING * fmt) * zd;
            let with_precompression = tensile + Megapascals(fd_mpa.min(MAX_VERTICAL_BENDING_FD)) * zd;
            let limit = tensile * 3.0;
            if with_precompression.value() <= limit.value() {
                with_precompression
            } else {
                limit
            }
        } else {
            Megapascals(fd_mpa) * zd
        };

        let capacity_knm = self.to_knm("vertical_bending_knm", moment)?;
        debug!(
            "'{}' vertical bending: fd = {} MPa, Mcv = {} kNm [{}]",
            self.input.label,
            fd_mpa,
            capacity_knm,
            as3700_ref::VERTICAL_BENDING
        );
        Ok(VerticalBendingCapacity {
            capacity_knm,
            section_modulus_mm3: zd.value(),
            fd_mpa,
            code_reference: self.settings().masonry_reference(as3700_ref::VERTICAL_BENDING),
        })
    }

    /// Horizontal bending capacity Mch for a design compressive stress `fd_mpa`.
    ///
    /// Requires a positive flexural tensile strength f'mt.
    pub fn horizontal_bending(&self, fd_mpa: f64) -> CalcResult<HorizontalBendingCapacity> {
        require_non_negative_param("fd_mpa", fd_mpa)?;
        let material = &self.properties.material;
        let fmt = material.fmt_mpa;
        if fmt <= 0.0 {
            return Err(CalcError::out_of_range(
                "fmt_mpa",
                fmt.to_string(),
                format!(
                    "Horizontal bending relies on flexural tensile strength [{}]",
                    as3700_ref::HORIZONTAL_BENDING
                ),
            ));
        }

        let t = self.input.thickness_mm;
        let zd = CubicMillimetres(rectangular_section_modulus(self.input.height_mm, t));
        let kp = self.settings().round(
            "kp",
            perpend_spacing_factor(material.unit_length_mm, material.unit_height_mm, material.joint_thickness_mm, t),
        )?;

        let root_fmt = fmt.sqrt();
        let stepped = Megapascals(2.0 * PHI_BENDING * kp * root_fmt * (1.0 + fd_mpa / fmt)) * zd;
        let stepped_limit = Megapascals(4.0 * PHI_BENDING * kp * root_fmt) * zd;
        let line = Megapascals(PHI_BENDING * (0.44 * material.fut_mpa + 0.56 * fmt)) * zd;

        let stepped_knm = self.to_knm("stepped_knm", stepped)?;
        let stepped_limit_knm = self.to_knm("stepped_limit_knm", stepped_limit)?;
        let line_knm = self.to_knm("line_knm", line)?;
        let capacity_knm = stepped_knm.min(stepped_limit_knm).min(line_knm);
        debug!(
            "'{}' horizontal bending: kp = {}, candidates = [{}, {}, {}] kNm, Mch = {} kNm",
            self.input.label, kp, stepped_knm, stepped_limit_knm, line_knm, capacity_knm
        );

        Ok(HorizontalBendingCapacity {
            capacity_knm,
            stepped_knm,
            stepped_limit_knm,
            line_knm,
            kp,
            section_modulus_mm3: zd.value(),
            code_reference: self.settings().masonry_reference(as3700_ref::HORIZONTAL_BENDING),
        })
    }

    /// Shear capacity along a horizontal bed joint: bond plus friction.
    pub fn horizontal_plane_shear(&self, params: &HorizontalShearParams) -> CalcResult<HorizontalShearCapacity> {
        require_non_negative_param("kv", params.kv)?;
        require_non_negative_param("fd_mpa", params.fd_mpa)?;

        let area = SquareMillimetres(self.input.length_mm * self.input.thickness_mm);
        let fms = self.properties.fms_mpa;
        let bond_kn = match params.interface {
            ShearInterface::Mortar => self.to_kn("bond_kn", Megapascals(PHI_SHEAR * fms) * area)?,
            ShearInterface::DampProofCourse => 0.0,
        };
        let friction_kn = self.to_kn("friction_kn", Megapascals(params.kv * params.fd_mpa) * area)?;
        let capacity_kn = self.settings().round("horizontal_shear_kn", bond_kn + friction_kn)?;
        debug!(
            "'{}' horizontal shear ({:?}): V0 = {} kN, V1 = {} kN [{}]",
            self.input.label,
            params.interface,
            bond_kn,
            friction_kn,
            as3700_ref::SHEAR
        );

        Ok(HorizontalShearCapacity {
            bond_kn,
            friction_kn,
            capacity_kn,
            fms_mpa: fms,
            shear_area_mm2: area.value(),
            code_reference: self.settings().masonry_reference(as3700_ref::SHEAR),
        })
    }

    /// Shear capacity across a vertical plane `φ f'ms t H`.
    pub fn vertical_plane_shear(&self) -> CalcResult<VerticalShearCapacity> {
        let area = SquareMillimetres(self.input.thickness_mm * self.input.height_mm);
        let fms = self.properties.fms_mpa;
        let capacity_kn = self.to_kn("vertical_shear_kn", Megapascals(PHI_SHEAR * fms) * area)?;
        debug!("'{}' vertical shear: Vd = {} kN", self.input.label, capacity_kn);
        Ok(VerticalShearCapacity {
            capacity_kn,
            fms_mpa: fms,
            shear_area_mm2: area.value(),
            code_reference: self.settings().masonry_reference(as3700_ref::SHEAR),
        })
    }

    /// Self weight of the panel.
    pub fn self_weight(&self) -> CalcResult<Kilonewtons> {
        let volume = CubicMillimetres(self.input.length_mm * self.input.height_mm * self.input.thickness_mm);
        let weight = self.properties.density() * volume;
        Ok(Kilonewtons(self.settings().round("self_weight_kn", weight.value())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{BeddingType, MasonryUnit, MortarClass};
    use approx::assert_relative_eq;

    fn clay(mortar: MortarClass) -> MasonryMaterial {
        MasonryMaterial::new(MasonryUnit::Clay, mortar, BeddingType::Full, 20.0)
    }

    fn wall(length: f64, material: MasonryMaterial) -> MasonryWall {
        MasonryWall::new(MasonryWallInput::new("W-1", length, 2700.0, 110.0, material)).unwrap()
    }

    fn axial(e1_mm: f64, e2_mm: f64) -> RefinedCompressionParams {
        RefinedCompressionParams {
            av: 0.75,
            ah: 0.0,
            kt: 1.0,
            e1_mm,
            e2_mm,
            dist_to_return_mm: None,
            effective_length_mm: None,
        }
    }

    #[test]
    fn test_basic_compressive_capacity_values() {
        let cases = [
            (clay(MortarClass::M3), 4.70),
            (clay(MortarClass::M4), 6.71),
            (MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M3, BeddingType::Full, 5.0), 2.35),
            (MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M3, BeddingType::Full, 60.0), 8.13),
            (MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M3, BeddingType::FaceShell, 20.0), 5.37),
            (clay(MortarClass::M3).with_unit_height(90.0, 10.0), 4.93),
            (clay(MortarClass::M3).with_unit_height(150.0, 12.0), 5.40),
            (clay(MortarClass::M3).with_unit_height(200.0, 5.0), 6.11),
        ];
        for (material, expected) in cases {
            let fo = wall(1000.0, material).basic_compressive_capacity().unwrap();
            assert_relative_eq!(fo.capacity_mpa, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_invalid_geometry_and_material() {
        let zero = MasonryWall::new(MasonryWallInput::new("W", 0.0, 2700.0, 110.0, clay(MortarClass::M3)));
        assert!(matches!(zero, Err(CalcError::InvalidInput { .. })));

        let m1 = MasonryWall::new(MasonryWallInput::new("W", 1000.0, 2700.0, 110.0, clay(MortarClass::M1)));
        assert!(m1.unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_refined_compression_worked_example() {
        let wall = wall(600.0, clay(MortarClass::M4));
        let t = 110.0;
        let result = wall.refined_compression(&axial(t / 6.0, t / 6.0)).unwrap();
        assert_eq!(result.slenderness.vertical, 18.41);
        assert!(result.slenderness.horizontal.is_infinite());
        assert_eq!(result.k_crushing, 0.67);
        assert_eq!(result.lateral.k, 0.34);
        assert_relative_eq!(result.crushing_kn, 296.72, epsilon = 1e-9);
        assert_relative_eq!(result.buckling_kn, 150.57, epsilon = 1e-9);
        assert_eq!(result.capacity(), result.buckling_kn);
    }

    #[test]
    fn test_refined_compression_minimum_eccentricity() {
        let wall = wall(600.0, clay(MortarClass::M4));
        let result = wall.refined_compression(&axial(0.0, 0.0)).unwrap();
        assert_relative_eq!(result.eccentricity.e1_mm, 5.5, epsilon = 1e-12);
        assert_eq!(result.k_crushing, 0.9);
    }

    #[test]
    fn test_refined_compression_effective_length() {
        let wall = wall(4000.0, clay(MortarClass::M4));
        let full = wall.refined_compression(&axial(20.0, 10.0)).unwrap();
        let mut params = axial(20.0, 10.0);
        params.effective_length_mm = Some(1000.0);
        let part = wall.refined_compression(&params).unwrap();
        assert_eq!(full.effective_length_mm, 4000.0);
        assert_relative_eq!(part.crushing_kn * 4.0, full.crushing_kn, max_relative = 1e-3);
    }

    #[test]
    fn test_refined_compression_requires_return_distance() {
        let wall = wall(600.0, clay(MortarClass::M4));
        let mut params = axial(18.0, 18.0);
        params.ah = 1.0;
        assert!(matches!(
            wall.refined_compression(&params),
            Err(CalcError::MissingField { .. })
        ));

        params.dist_to_return_mm = Some(1200.0);
        let result = wall.refined_compression(&params).unwrap();
        assert!(result.slenderness.horizontal.is_finite());
        assert!(result.lateral.k_horizontal <= 0.2);
    }

    #[test]
    fn test_refined_compression_out_of_range() {
        let wall = wall(600.0, clay(MortarClass::M4));
        // e1 >= t/2 leaves nothing to crush
        assert!(wall.refined_compression(&axial(55.0, 0.0)).unwrap_err().is_domain_error());
        // e2 larger than e1
        assert!(wall.refined_compression(&axial(5.0, 10.0)).unwrap_err().is_domain_error());
        // Very slender wall has no buckling resistance
        let mut slender = axial(18.0, 18.0);
        slender.av = 2.5;
        assert!(wall.refined_compression(&slender).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_refined_compression_never_returns_zero_crushing() {
        let wall = wall(600.0, clay(MortarClass::M4));
        // k = 1 - 2 × 54.8 / 110 rounds to 0.00
        let err = wall.refined_compression(&axial(54.8, 0.0)).unwrap_err();
        assert!(matches!(err, CalcError::OutOfRange { .. }));
    }

    #[test]
    fn test_code_reference_cites_masonry_edition() {
        let wall = wall(4000.0, clay(MortarClass::M3));
        assert_eq!(wall.vertical_plane_shear().unwrap().code_reference, "AS 3700:2018 Cl 7.5");

        let mut settings = DesignSettings::default();
        settings.masonry_code = "AS 3700:2011".to_string();
        let input = MasonryWallInput::new("W", 4000.0, 2700.0, 110.0, clay(MortarClass::M3)).with_settings(settings);
        let older = MasonryWall::new(input).unwrap();
        let fo = older.basic_compressive_capacity().unwrap();
        assert_eq!(fo.code_reference, "AS 3700:2011 Cl 7.3.2");
    }

    #[test]
    fn test_simplified_compression() {
        let wall = wall(1000.0, clay(MortarClass::M3));
        let result = wall
            .simplified_compression(&SimplifiedCompressionParams {
                load_type: CompressionLoadType::ConcreteSlab,
                av: 1.0,
                kt: 1.0,
            })
            .unwrap();
        let srs = 2700.0 / 110.0;
        assert_relative_eq!(result.srs, srs, epsilon = 1e-12);
        assert_relative_eq!(result.k, 0.67 - 0.02 * (srs - 14.0), epsilon = 1e-12);
        let expected = (result.k * 4.70 * 110_000.0 / 1e3 * 100.0 + 0.5).floor() / 100.0;
        assert_relative_eq!(result.capacity_kn, expected, epsilon = 0.011);

        let too_slender = wall.simplified_compression(&SimplifiedCompressionParams {
            load_type: CompressionLoadType::FaceLoad,
            av: 2.5,
            kt: 1.0,
        });
        assert!(too_slender.unwrap_err().is_domain_error());
    }

    #[test]
    fn test_concentrated_load() {
        let wall = wall(1000.0, clay(MortarClass::M3));
        let bearing = BearingParams {
            bearing_length_mm: 100.0,
            bearing_width_mm: 110.0,
            dist_to_end_mm: 0.0,
        };
        let result = wall.concentrated_load(&bearing).unwrap();
        assert_eq!(result.dispersed_length_mm, 1000.0);
        assert_eq!(result.kb, 1.18);
        assert_relative_eq!(result.capacity_kn, 61.01, epsilon = 1e-9);
    }

    #[test]
    fn test_concentrated_load_face_shell() {
        let material = MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M3, BeddingType::FaceShell, 20.0);
        let wall = wall(1000.0, material);
        let bearing = BearingParams {
            bearing_length_mm: 100.0,
            bearing_width_mm: 110.0,
            dist_to_end_mm: 200.0,
        };
        assert_eq!(wall.concentrated_load(&bearing).unwrap().kb, 1.0);
    }

    #[test]
    fn test_concentrated_load_out_of_range() {
        let wall = wall(1000.0, clay(MortarClass::M3));
        let past_end = BearingParams {
            bearing_length_mm: 200.0,
            bearing_width_mm: 110.0,
            dist_to_end_mm: 900.0,
        };
        assert!(wall.concentrated_load(&past_end).unwrap_err().is_domain_error());

        let too_wide = BearingParams {
            bearing_length_mm: 100.0,
            bearing_width_mm: 150.0,
            dist_to_end_mm: 0.0,
        };
        assert!(wall.concentrated_load(&too_wide).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_refined_concentrated_load_uses_dispersed_length() {
        let wall = wall(4000.0, clay(MortarClass::M4));
        let bearing = BearingParams {
            bearing_length_mm: 200.0,
            bearing_width_mm: 110.0,
            dist_to_end_mm: 1000.0,
        };
        let mut params = axial(18.0, 18.0);
        params.effective_length_mm = Some(4000.0);
        let result = wall.refined_concentrated_load(&params, &bearing).unwrap();
        // 1000 to the near end, the 200 bearing, H/2 on the far side
        assert_eq!(result.bearing.dispersed_length_mm, 2550.0);
        assert_eq!(result.compression.effective_length_mm, 2550.0);
        assert!(result.capacity() <= result.bearing.capacity_kn);
    }

    #[test]
    fn test_vertical_bending() {
        let wall = wall(1000.0, clay(MortarClass::M3));
        // Zd = 1000 × 110² / 6; φ f'mt Zd = 0.242 kNm
        assert_eq!(wall.vertical_bending(0.0).unwrap().capacity_knm, 0.24);
        assert_eq!(wall.vertical_bending(0.1).unwrap().capacity_knm, 0.44);
        // Precompression is capped at three times the tensile term
        assert_eq!(wall.vertical_bending(1.0).unwrap().capacity_knm, 0.73);
        assert!(wall.vertical_bending(-0.1).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_vertical_bending_without_tensile_strength() {
        let wall = wall(1000.0, clay(MortarClass::M3).with_fmt(0.0));
        assert_eq!(wall.vertical_bending(0.0).unwrap().capacity_knm, 0.0);
        assert_eq!(wall.vertical_bending(0.1).unwrap().capacity_knm, 0.2);
    }

    #[test]
    fn test_horizontal_bending() {
        let wall = wall(4000.0, clay(MortarClass::M3));
        let result = wall.horizontal_bending(0.0).unwrap();
        assert_eq!(result.kp, 1.0);
        assert_eq!(result.stepped_knm, 2.92);
        assert_eq!(result.stepped_limit_knm, 5.84);
        assert_eq!(result.line_knm, 1.52);
        assert_eq!(result.capacity_knm, 1.52);

        let no_tension = wall_without_tension();
        assert!(no_tension.horizontal_bending(0.0).unwrap_err().is_domain_error());
    }

    fn wall_without_tension() -> MasonryWall {
        wall(4000.0, clay(MortarClass::M3).with_fmt(0.0))
    }

    #[test]
    fn test_horizontal_shear_worked_example() {
        let wall = wall(4000.0, clay(MortarClass::M3));
        let params = HorizontalShearParams {
            kv: 0.3,
            fd_mpa: 0.41,
            interface: ShearInterface::Mortar,
        };
        let result = wall.horizontal_plane_shear(&params).unwrap();
        assert_relative_eq!(result.bond_kn, 66.0, epsilon = 1e-9);
        assert_relative_eq!(result.friction_kn, 54.12, epsilon = 1e-9);
        assert_relative_eq!(result.capacity_kn, 120.12, epsilon = 1e-9);

        let dpc = wall
            .horizontal_plane_shear(&HorizontalShearParams {
                interface: ShearInterface::DampProofCourse,
                ..params
            })
            .unwrap();
        assert_eq!(dpc.bond_kn, 0.0);
        assert_relative_eq!(dpc.capacity_kn, 54.12, epsilon = 1e-9);
    }

    #[test]
    fn test_horizontal_shear_rejects_negative_parameters() {
        let wall = wall(4000.0, clay(MortarClass::M3));
        let params = HorizontalShearParams {
            kv: -0.3,
            fd_mpa: 0.41,
            interface: ShearInterface::Mortar,
        };
        assert!(wall.horizontal_plane_shear(&params).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_vertical_plane_shear() {
        let wall = wall(4000.0, clay(MortarClass::M3));
        let result = wall.vertical_plane_shear().unwrap();
        // 0.6 × 0.25 × 110 × 2700
        assert_relative_eq!(result.capacity_kn, 44.55, epsilon = 1e-9);
    }

    #[test]
    fn test_self_weight() {
        let wall = wall(4000.0, clay(MortarClass::M3));
        assert_relative_eq!(wall.self_weight().unwrap().value(), 22.57, epsilon = 1e-9);
    }

    #[test]
    fn test_unrounded_settings() {
        let settings = DesignSettings {
            rounding_decimals: None,
            ..DesignSettings::default()
        };
        let input = MasonryWallInput::new("W", 4000.0, 2700.0, 110.0, clay(MortarClass::M3)).with_settings(settings);
        let wall = MasonryWall::new(input).unwrap();
        assert_relative_eq!(wall.self_weight().unwrap().value(), 22.572, epsilon = 1e-9);
    }

    #[test]
    fn test_wall_serialization_defaults_settings() {
        let input = MasonryWallInput::new("W-2", 2000.0, 2400.0, 90.0, clay(MortarClass::M3));
        let mut value = serde_json::to_value(&input).unwrap();
        value.as_object_mut().unwrap().remove("settings");
        let parsed: MasonryWallInput = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, input);
    }
}
