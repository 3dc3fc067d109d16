//! # Design Settings
//!
//! Settings shared by every element: the code editions results cite in their
//! `code_reference`, and the precision used when the masonry procedures round
//! their intermediate values.
//!
//! Settings are plain data. They default to the current editions with
//! two-decimal rounding, and can be loaded from a TOML document:
//!
//! ```rust
//! use capacity_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_toml_str(r#"
//!     masonry_code = "AS 3700:2018"
//!     rounding_decimals = 3
//! "#).unwrap();
//! assert_eq!(settings.rounding_decimals, Some(3));
//! assert_eq!(settings.timber_code, "AS 1720.1:2010");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest supported rounding precision
pub const MAX_ROUNDING_DECIMALS: u32 = 10;

/// Global design settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Timber code edition (e.g., "AS 1720.1:2010")
    pub timber_code: String,

    /// Masonry code edition (e.g., "AS 3700:2018")
    pub masonry_code: String,

    /// Decimal places for masonry rounding; `None` keeps full precision
    pub rounding_decimals: Option<u32>,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            timber_code: "AS 1720.1:2010".to_string(),
            masonry_code: "AS 3700:2018".to_string(),
            rounding_decimals: Some(2),
        }
    }
}

impl DesignSettings {
    /// Parse settings from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> CalcResult<Self> {
        let settings: DesignSettings =
            toml::from_str(source).map_err(|e| CalcError::serialization(e.to_string()))?;
        settings.validate()?;
        debug!("loaded design settings: {:?}", settings);
        Ok(settings)
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(decimals) = self.rounding_decimals {
            if decimals > MAX_ROUNDING_DECIMALS {
                return Err(CalcError::invalid_input(
                    "rounding_decimals",
                    decimals.to_string(),
                    format!("Must be at most {}", MAX_ROUNDING_DECIMALS),
                ));
            }
        }
        Ok(())
    }

    /// Cite an AS 1720.1 clause against the configured timber edition.
    pub fn timber_reference(&self, clause: &str) -> String {
        cite(&self.timber_code, clause)
    }

    /// Cite an AS 3700 clause against the configured masonry edition.
    pub fn masonry_reference(&self, clause: &str) -> String {
        cite(&self.masonry_code, clause)
    }

    /// Round a non-negative value with the configured precision.
    pub fn round(&self, field: &str, value: f64) -> CalcResult<f64> {
        match self.rounding_decimals {
            Some(decimals) => round_half_up(field, value, decimals),
            None if value < 0.0 => Err(negative_rounding(field, value)),
            None => Ok(value),
        }
    }
}

/// Round half away from zero for non-negative values.
///
/// A tiny bias of `10^-(2·decimals)` is added before flooring (none at zero
/// decimals) so that values
/// such as `2.675` (stored as `2.67499…`) still round up.
///
/// ```rust
/// use capacity_core::settings::round_half_up;
///
/// assert_eq!(round_half_up("x", 2.675, 2).unwrap(), 2.68);
/// assert_eq!(round_half_up("x", 4.704, 2).unwrap(), 4.7);
/// assert!(round_half_up("x", -1.0, 2).is_err());
/// ```
pub fn round_half_up(field: &str, value: f64, decimals: u32) -> CalcResult<f64> {
    if value < 0.0 || value.is_nan() {
        return Err(negative_rounding(field, value));
    }
    if value.is_infinite() {
        return Ok(value);
    }
    let multiplier = 10f64.powi(decimals as i32);
    // At zero decimals the bias would be a whole unit.
    let bias = if decimals == 0 {
        0.0
    } else {
        10f64.powi(-2 * decimals as i32)
    };
    Ok((value * multiplier + 0.5 + bias).floor() / multiplier)
}

/// "AS 3700 Cl 7.3.2" cited against "AS 3700:2018" gives "AS 3700:2018 Cl 7.3.2".
fn cite(edition: &str, clause: &str) -> String {
    let designation = edition.split(':').next().unwrap_or(edition);
    match clause.strip_prefix(designation) {
        Some(rest) => format!("{}{}", edition, rest),
        None => format!("{} {}", edition, clause),
    }
}

fn negative_rounding(field: &str, value: f64) -> CalcError {
    CalcError::out_of_range(
        field,
        value.to_string(),
        "Only non-negative values can be rounded",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DesignSettings::default();
        assert_eq!(settings.rounding_decimals, Some(2));
        assert_eq!(settings.masonry_code, "AS 3700:2018");
    }

    #[test]
    fn test_from_toml_partial() {
        let settings = DesignSettings::from_toml_str("rounding_decimals = 4").unwrap();
        assert_eq!(settings.rounding_decimals, Some(4));
        assert_eq!(settings.timber_code, "AS 1720.1:2010");
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        assert!(matches!(
            DesignSettings::from_toml_str("rounding_decimals = 40"),
            Err(CalcError::InvalidInput { .. })
        ));
        assert!(matches!(
            DesignSettings::from_toml_str("rounding_decimals = \"two\""),
            Err(CalcError::SerializationError { .. })
        ));
    }

    #[test]
    fn test_references_cite_edition() {
        let settings = DesignSettings::default();
        assert_eq!(settings.masonry_reference("AS 3700 Cl 7.3.2"), "AS 3700:2018 Cl 7.3.2");
        assert_eq!(settings.timber_reference("AS 1720.1 Cl 3.2.5"), "AS 1720.1:2010 Cl 3.2.5");

        let older = DesignSettings::from_toml_str("masonry_code = \"AS 3700:2011\"").unwrap();
        assert_eq!(older.masonry_reference("AS 3700 Cl 7.5"), "AS 3700:2011 Cl 7.5");
        assert_eq!(older.masonry_reference("Table 3.1"), "AS 3700:2011 Table 3.1");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up("x", 1.005, 2).unwrap(), 1.01);
        assert_eq!(round_half_up("x", 1.004, 2).unwrap(), 1.0);
        assert_eq!(round_half_up("x", 6.705, 2).unwrap(), 6.71);
        assert_eq!(round_half_up("x", 0.0, 2).unwrap(), 0.0);
        assert_eq!(round_half_up("x", 12.5, 0).unwrap(), 13.0);
        assert!(round_half_up("x", f64::INFINITY, 2).unwrap().is_infinite());
    }

    #[test]
    fn test_round_rejects_negative() {
        assert!(round_half_up("x", -0.01, 2).unwrap_err().is_domain_error());
        let unrounded = DesignSettings {
            rounding_decimals: None,
            ..DesignSettings::default()
        };
        assert!(unrounded.round("x", -1.0).is_err());
        assert_eq!(unrounded.round("x", 1.23456).unwrap(), 1.23456);
    }
}
