//! Unreinforced Masonry Materials (AS 3700 Section 3)
//!
//! Masonry strength is not tabulated per grade. It is built up from the unit
//! compressive strength f'uc, the mortar strength factor k_m (Table 3.1, loaded
//! from TOML at compile time) and the block height factor k_h:
//!
//! ```text
//! k_h  = min(1.3 (h_u / 19 t_j)^0.29, 1.3)
//! f'mb = sqrt(f'uc) k_m
//! f'm  = k_h f'mb
//! f'ms = min(max(1.25 f'mt, 0.15), 0.35)
//! ```
//!
//! Intermediate values are rounded with the precision in [`DesignSettings`].

use std::collections::HashMap;
use std::str::FromStr;

use log::{debug, trace};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::factors::as3700_ref;
use crate::generated::masonry_data;
use crate::settings::DesignSettings;
use crate::units::{KilonewtonsPerCubicMetre, Megapascals};

/// Masonry unit material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasonryUnit {
    /// Solid or cored clay bricks
    Clay,
    /// Hollow concrete blocks
    HollowConcrete,
}

impl MasonryUnit {
    pub const ALL: [MasonryUnit; 2] = [MasonryUnit::Clay, MasonryUnit::HollowConcrete];

    /// Get the code string for table lookup
    pub fn code(&self) -> &'static str {
        match self {
            MasonryUnit::Clay => "clay",
            MasonryUnit::HollowConcrete => "hollow_concrete",
        }
    }

    /// Standard unit height h_u in mm (76 mm brick, 190 mm block + joint)
    pub fn default_height_mm(&self) -> f64 {
        match self {
            MasonryUnit::Clay => 76.0,
            MasonryUnit::HollowConcrete => 200.0,
        }
    }

    /// Standard unit length l_u in mm
    pub fn default_length_mm(&self) -> f64 {
        match self {
            MasonryUnit::Clay => 230.0,
            MasonryUnit::HollowConcrete => 400.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MasonryUnit::Clay => "Clay",
            MasonryUnit::HollowConcrete => "Hollow Concrete",
        }
    }
}

impl std::fmt::Display for MasonryUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Mortar class per AS 3700 Table 11.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortarClass {
    M1,
    M2,
    M3,
    M4,
}

impl MortarClass {
    pub const ALL: [MortarClass; 4] = [
        MortarClass::M1,
        MortarClass::M2,
        MortarClass::M3,
        MortarClass::M4,
    ];

    /// Get the code string for table lookup
    pub fn code(&self) -> &'static str {
        match self {
            MortarClass::M1 => "M1",
            MortarClass::M2 => "M2",
            MortarClass::M3 => "M3",
            MortarClass::M4 => "M4",
        }
    }

    /// Parse from "M3", "m3" or "3"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let upper = s.trim().to_uppercase();
        let digits = upper.strip_prefix('M').unwrap_or(upper.as_str());
        match digits {
            "1" => Ok(MortarClass::M1),
            "2" => Ok(MortarClass::M2),
            "3" => Ok(MortarClass::M3),
            "4" => Ok(MortarClass::M4),
            _ => Err(CalcError::material_not_found(format!("mortar class '{}'", s))),
        }
    }
}

impl FromStr for MortarClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MortarClass::from_str_flexible(s)
    }
}

impl std::fmt::Display for MortarClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How the mortar bed is laid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeddingType {
    /// Mortar over the full bed face
    Full,
    /// Mortar on the face shells only
    FaceShell,
}

impl BeddingType {
    pub const ALL: [BeddingType; 2] = [BeddingType::Full, BeddingType::FaceShell];

    /// Get the code string for table lookup
    pub fn code(&self) -> &'static str {
        match self {
            BeddingType::Full => "full",
            BeddingType::FaceShell => "face_shell",
        }
    }
}

impl std::fmt::Display for BeddingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeddingType::Full => write!(f, "full bedding"),
            BeddingType::FaceShell => write!(f, "face shell bedding"),
        }
    }
}

static KM_INDEX: Lazy<HashMap<(&'static str, &'static str, &'static str), f64>> = Lazy::new(|| {
    masonry_data::ROWS
        .iter()
        .map(|row| ((row.unit, row.mortar, row.bedding), row.km))
        .collect()
});

/// Look up the mortar strength factor k_m (AS 3700 Table 3.1).
///
/// Fails for combinations the table does not permit, such as M1 mortar or
/// face-shell bedding with anything other than M3.
pub fn lookup_km(unit: MasonryUnit, mortar: MortarClass, bedding: BeddingType) -> CalcResult<f64> {
    let km = KM_INDEX
        .get(&(unit.code(), mortar.code(), bedding.code()))
        .copied()
        .ok_or_else(|| {
            CalcError::material_not_found(format!("{} masonry, {} mortar, {}", unit, mortar, bedding))
        })?;
    trace!("k_m lookup {} {} {} -> {} [{}]", unit, mortar, bedding, km, as3700_ref::KM);
    Ok(km)
}

/// Material description of a masonry panel.
///
/// Unit dimensions default to the standard brick or block; the tensile
/// strengths default to the values AS 3700 permits without testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasonryMaterial {
    pub unit: MasonryUnit,
    /// Mortar class ("M3", "m3" or "3"), resolved when the strengths are derived
    pub mortar: String,
    pub bedding: BeddingType,
    /// Characteristic unconfined compressive strength of the units f'uc
    pub fuc_mpa: f64,
    /// Unit height h_u
    pub unit_height_mm: f64,
    /// Unit length l_u
    pub unit_length_mm: f64,
    /// Bed joint thickness t_j
    pub joint_thickness_mm: f64,
    /// Characteristic flexural tensile strength f'mt (0 where not relied on)
    pub fmt_mpa: f64,
    /// Characteristic lateral modulus of rupture of the units f'ut
    pub fut_mpa: f64,
    /// Unit weight of the masonry
    pub density_kn_m3: f64,
}

impl MasonryMaterial {
    /// Masonry of the given unit type with standard unit dimensions.
    pub fn new(unit: MasonryUnit, mortar: MortarClass, bedding: BeddingType, fuc_mpa: f64) -> Self {
        MasonryMaterial {
            unit,
            mortar: mortar.code().to_string(),
            bedding,
            fuc_mpa,
            unit_height_mm: unit.default_height_mm(),
            unit_length_mm: unit.default_length_mm(),
            joint_thickness_mm: 10.0,
            fmt_mpa: 0.2,
            fut_mpa: 0.8,
            density_kn_m3: 19.0,
        }
    }

    /// Override the unit height and bed joint thickness
    pub fn with_unit_height(mut self, unit_height_mm: f64, joint_thickness_mm: f64) -> Self {
        self.unit_height_mm = unit_height_mm;
        self.joint_thickness_mm = joint_thickness_mm;
        self
    }

    /// Override the flexural tensile strength f'mt
    pub fn with_fmt(mut self, fmt_mpa: f64) -> Self {
        self.fmt_mpa = fmt_mpa;
        self
    }

    /// Override the unit weight
    pub fn with_density(mut self, density_kn_m3: f64) -> Self {
        self.density_kn_m3 = density_kn_m3;
        self
    }

    /// Validate material parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("fuc_mpa", self.fuc_mpa)?;
        require_positive("unit_height_mm", self.unit_height_mm)?;
        require_positive("unit_length_mm", self.unit_length_mm)?;
        require_positive("joint_thickness_mm", self.joint_thickness_mm)?;
        require_positive("fut_mpa", self.fut_mpa)?;
        require_positive("density_kn_m3", self.density_kn_m3)?;
        if !self.fmt_mpa.is_finite() || self.fmt_mpa < 0.0 {
            return Err(CalcError::invalid_input(
                "fmt_mpa",
                self.fmt_mpa.to_string(),
                "Flexural tensile strength cannot be negative (use 0 where it is not relied on)",
            ));
        }
        Ok(())
    }
}

/// Derived masonry strengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasonryProperties {
    pub material: MasonryMaterial,
    /// Resolved mortar class
    pub mortar: MortarClass,
    /// Mortar strength factor k_m
    pub km: f64,
    /// Block height factor k_h
    pub kh: f64,
    /// Characteristic compressive strength of a masonry prism, f'mb
    pub fmb_mpa: f64,
    /// Characteristic compressive strength of masonry, f'm
    pub fm_mpa: f64,
    /// Characteristic shear strength on the horizontal plane, f'ms
    pub fms_mpa: f64,
}

impl MasonryProperties {
    /// Resolve the mortar class and k_m, then derive the masonry strengths.
    ///
    /// An unknown mortar string or a combination missing from Table 3.1
    /// fails with `MaterialNotFound`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use capacity_core::materials::{BeddingType, MasonryMaterial, MasonryProperties, MasonryUnit, MortarClass};
    /// use capacity_core::settings::DesignSettings;
    ///
    /// let material = MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M3, BeddingType::Full, 20.0);
    /// let props = MasonryProperties::derive(material, &DesignSettings::default()).unwrap();
    /// assert_eq!(props.km, 1.4);
    /// assert_eq!(props.fm_mpa, 6.26);
    /// ```
    pub fn derive(material: MasonryMaterial, settings: &DesignSettings) -> CalcResult<Self> {
        material.validate()?;
        let mortar = MortarClass::from_str_flexible(&material.mortar)?;
        let km = lookup_km(material.unit, mortar, material.bedding)?;

        let kh_raw = (1.3
            * (material.unit_height_mm / (19.0 * material.joint_thickness_mm)).powf(0.29))
        .min(1.3);
        let kh = settings.round("kh", kh_raw)?;
        let fmb_mpa = settings.round("fmb_mpa", material.fuc_mpa.sqrt() * km)?;
        let fm_mpa = settings.round("fm_mpa", kh * fmb_mpa)?;
        let fms_mpa = (1.25 * material.fmt_mpa).clamp(0.15, 0.35);

        debug!(
            "masonry properties: km={} kh={} fmb={} fm={} [{}] fms={} [{}]",
            km, kh, fmb_mpa, fm_mpa, as3700_ref::FM, fms_mpa, as3700_ref::FMS
        );

        Ok(MasonryProperties {
            material,
            mortar,
            km,
            kh,
            fmb_mpa,
            fm_mpa,
            fms_mpa,
        })
    }

    /// Get f'm as a typed unit
    pub fn fm(&self) -> Megapascals {
        Megapascals(self.fm_mpa)
    }

    /// Get the unit weight as a typed unit
    pub fn density(&self) -> KilonewtonsPerCubicMetre {
        KilonewtonsPerCubicMetre(self.material.density_kn_m3)
    }
}
