//! Structural Timber Materials (AS 1720.1 Appendix H)
//!
//! Characteristic strengths and moduli for sawn F-grades, machine graded pine
//! and glued laminated timber. Values are loaded from TOML at compile time and
//! indexed on first use.
//!
//! Seasoned and unseasoned stock are separate table rows. MGP and glulam are
//! only produced seasoned, so asking for them unseasoned is a configuration
//! error rather than a silent fallback.

use std::collections::HashMap;
use std::str::FromStr;

use log::trace;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::generated::timber_data::{self, TimberRow};
use crate::units::Megapascals;

/// Timber product families, each with its own grading system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimberCategory {
    /// Visually or mechanically stress graded sawn timber (F-grades)
    #[serde(rename = "F-grade")]
    SawnFGrade,
    /// Machine graded pine (MGP grades)
    #[serde(rename = "MGP")]
    MachineGradedPine,
    /// Glued laminated timber (GL grades)
    #[serde(rename = "GL")]
    Glulam,
}

impl TimberCategory {
    /// All categories for selection lists
    pub const ALL: [TimberCategory; 3] = [
        TimberCategory::SawnFGrade,
        TimberCategory::MachineGradedPine,
        TimberCategory::Glulam,
    ];

    /// Short code (e.g., "F-grade", "MGP")
    pub fn code(&self) -> &'static str {
        match self {
            TimberCategory::SawnFGrade => "F-grade",
            TimberCategory::MachineGradedPine => "MGP",
            TimberCategory::Glulam => "GL",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "F-GRADE" | "F" | "SAWN" | "SAWN-F-GRADE" => Ok(TimberCategory::SawnFGrade),
            "MGP" | "MACHINE-GRADED-PINE" => Ok(TimberCategory::MachineGradedPine),
            "GL" | "GLULAM" | "GLUED-LAMINATED" => Ok(TimberCategory::Glulam),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TimberCategory::SawnFGrade => "Sawn F-grade",
            TimberCategory::MachineGradedPine => "Machine Graded Pine",
            TimberCategory::Glulam => "Glued Laminated Timber",
        }
    }
}

impl std::fmt::Display for TimberCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Stress grades covered by the property tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimberGrade {
    F4,
    F5,
    F7,
    F8,
    F11,
    F14,
    F17,
    F22,
    F27,
    F34,
    Mgp10,
    Mgp12,
    Mgp15,
    Gl8,
    Gl10,
    Gl12,
    Gl13,
    Gl17,
    Gl18,
}

impl TimberGrade {
    /// All grades for selection lists
    pub const ALL: [TimberGrade; 19] = [
        TimberGrade::F4,
        TimberGrade::F5,
        TimberGrade::F7,
        TimberGrade::F8,
        TimberGrade::F11,
        TimberGrade::F14,
        TimberGrade::F17,
        TimberGrade::F22,
        TimberGrade::F27,
        TimberGrade::F34,
        TimberGrade::Mgp10,
        TimberGrade::Mgp12,
        TimberGrade::Mgp15,
        TimberGrade::Gl8,
        TimberGrade::Gl10,
        TimberGrade::Gl12,
        TimberGrade::Gl13,
        TimberGrade::Gl17,
        TimberGrade::Gl18,
    ];

    /// Get the code string for table lookup (e.g., "F17", "MGP10")
    pub fn code(&self) -> &'static str {
        match self {
            TimberGrade::F4 => "F4",
            TimberGrade::F5 => "F5",
            TimberGrade::F7 => "F7",
            TimberGrade::F8 => "F8",
            TimberGrade::F11 => "F11",
            TimberGrade::F14 => "F14",
            TimberGrade::F17 => "F17",
            TimberGrade::F22 => "F22",
            TimberGrade::F27 => "F27",
            TimberGrade::F34 => "F34",
            TimberGrade::Mgp10 => "MGP10",
            TimberGrade::Mgp12 => "MGP12",
            TimberGrade::Mgp15 => "MGP15",
            TimberGrade::Gl8 => "GL8",
            TimberGrade::Gl10 => "GL10",
            TimberGrade::Gl12 => "GL12",
            TimberGrade::Gl13 => "GL13",
            TimberGrade::Gl17 => "GL17",
            TimberGrade::Gl18 => "GL18",
        }
    }

    /// The product family this grade belongs to
    pub fn category(&self) -> TimberCategory {
        match self {
            TimberGrade::F4
            | TimberGrade::F5
            | TimberGrade::F7
            | TimberGrade::F8
            | TimberGrade::F11
            | TimberGrade::F14
            | TimberGrade::F17
            | TimberGrade::F22
            | TimberGrade::F27
            | TimberGrade::F34 => TimberCategory::SawnFGrade,
            TimberGrade::Mgp10 | TimberGrade::Mgp12 | TimberGrade::Mgp15 => {
                TimberCategory::MachineGradedPine
            }
            TimberGrade::Gl8
            | TimberGrade::Gl10
            | TimberGrade::Gl12
            | TimberGrade::Gl13
            | TimberGrade::Gl17
            | TimberGrade::Gl18 => TimberCategory::Glulam,
        }
    }

    /// Parse from common string representations ("F17", "mgp 10", "GL-17")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.to_uppercase().replace([' ', '_', '-', '.'], "");
        TimberGrade::ALL
            .iter()
            .copied()
            .find(|grade| grade.code() == normalized)
            .ok_or_else(|| CalcError::material_not_found(s))
    }
}

impl FromStr for TimberGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimberGrade::from_str_flexible(s)
    }
}

impl std::fmt::Display for TimberGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Moisture condition of the timber when installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seasoning {
    /// Moisture content at or below 15%
    Seasoned,
    /// Green timber that dries out in service
    Unseasoned,
}

impl Seasoning {
    pub const ALL: [Seasoning; 2] = [Seasoning::Seasoned, Seasoning::Unseasoned];

    /// Whether this is the seasoned table row
    pub fn is_seasoned(&self) -> bool {
        matches!(self, Seasoning::Seasoned)
    }
}

impl std::fmt::Display for Seasoning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seasoning::Seasoned => write!(f, "seasoned"),
            Seasoning::Unseasoned => write!(f, "unseasoned"),
        }
    }
}

/// Climate zone for the temperature factor k6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatitudeZone {
    /// South of the tropical zone
    Temperate,
    /// North of 16°S, or coastal Queensland north of 25°S
    Tropical,
}

impl LatitudeZone {
    pub const ALL: [LatitudeZone; 2] = [LatitudeZone::Temperate, LatitudeZone::Tropical];
}

impl std::fmt::Display for LatitudeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatitudeZone::Temperate => write!(f, "temperate"),
            LatitudeZone::Tropical => write!(f, "tropical"),
        }
    }
}

/// Service condition that selects the table row and the climate factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceCondition {
    pub seasoning: Seasoning,
    pub latitude: LatitudeZone,
}

impl ServiceCondition {
    pub fn new(seasoning: Seasoning, latitude: LatitudeZone) -> Self {
        Self { seasoning, latitude }
    }
}

impl std::fmt::Display for ServiceCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.seasoning, self.latitude)
    }
}

static TIMBER_INDEX: Lazy<HashMap<(&'static str, Seasoning), &'static TimberRow>> =
    Lazy::new(|| {
        timber_data::ROWS
            .iter()
            .map(|row| {
                let seasoning = if row.seasoned {
                    Seasoning::Seasoned
                } else {
                    Seasoning::Unseasoned
                };
                ((row.code, seasoning), row)
            })
            .collect()
    });

/// Characteristic properties of a timber grade in a given condition.
///
/// All strengths and moduli in MPa.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimberProperties {
    pub grade: TimberGrade,
    pub category: TimberCategory,
    pub condition: ServiceCondition,
    /// Characteristic bending strength f'b
    pub fb_mpa: f64,
    /// Characteristic tension strength parallel to grain f't
    pub ft_mpa: f64,
    /// Characteristic shear strength f's
    pub fs_mpa: f64,
    /// Characteristic compression strength parallel to grain f'c
    pub fc_mpa: f64,
    /// Short-duration modulus of elasticity E
    pub e_mpa: f64,
    /// Modulus of rigidity G
    pub g_mpa: f64,
}

impl TimberProperties {
    /// Look up timber properties by category, grade and service condition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use capacity_core::materials::{
    ///     LatitudeZone, Seasoning, ServiceCondition, TimberCategory, TimberGrade, TimberProperties,
    /// };
    ///
    /// let condition = ServiceCondition::new(Seasoning::Seasoned, LatitudeZone::Temperate);
    /// let props = TimberProperties::lookup(TimberCategory::SawnFGrade, TimberGrade::F17, condition).unwrap();
    /// assert_eq!(props.fb_mpa, 42.0);
    ///
    /// // MGP is never tabulated unseasoned
    /// let green = ServiceCondition::new(Seasoning::Unseasoned, LatitudeZone::Temperate);
    /// assert!(TimberProperties::lookup(TimberCategory::MachineGradedPine, TimberGrade::Mgp10, green).is_err());
    /// ```
    pub fn lookup(
        category: TimberCategory,
        grade: TimberGrade,
        condition: ServiceCondition,
    ) -> CalcResult<Self> {
        let describe = || format!("{} {} ({})", category.code(), grade, condition);

        if grade.category() != category {
            return Err(CalcError::material_not_found(describe()));
        }

        let row = TIMBER_INDEX
            .get(&(grade.code(), condition.seasoning))
            .ok_or_else(|| CalcError::material_not_found(describe()))?;

        trace!("timber lookup {} -> {:?}", describe(), row);

        Ok(TimberProperties {
            grade,
            category,
            condition,
            fb_mpa: row.fb_mpa,
            ft_mpa: row.ft_mpa,
            fs_mpa: row.fs_mpa,
            fc_mpa: row.fc_mpa,
            e_mpa: row.e_mpa,
            g_mpa: row.g_mpa,
        })
    }

    /// Get f'b as a typed unit
    pub fn fb(&self) -> Megapascals {
        Megapascals(self.fb_mpa)
    }

    /// Get f's as a typed unit
    pub fn fs(&self) -> Megapascals {
        Megapascals(self.fs_mpa)
    }

    /// Get f'c as a typed unit
    pub fn fc(&self) -> Megapascals {
        Megapascals(self.fc_mpa)
    }
}
