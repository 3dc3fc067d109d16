//! # Structural Elements
//!
//! Each element follows the pattern:
//!
//! - `*Input` - Geometry, material selection and service conditions (JSON-serializable)
//! - `Element::new(input) -> CalcResult<Element>` - Validates and resolves the material
//! - One method per capacity check, returning a `*Capacity` result (JSON-serializable)
//!   carrying the capacity and the factors that produced it
//!
//! Construction rejects invalid geometry and unknown materials; a capacity
//! method only fails when its own parameters fall outside the formula's range.
//!
//! ## Available Elements
//!
//! - [`timber_beam`] - AS 1720.1 beam: bending about both axes and shear
//! - [`timber_column`] - AS 1720.1 column: the beam checks plus axial compression
//! - [`masonry_wall`] - AS 3700 unreinforced wall panel
//! - [`reinforced_masonry_wall`] - AS 3700 reinforced wall in bending
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::elements::ElementInput;
//!
//! let json = r#"{
//!     "type": "TimberBeam",
//!     "label": "B-1",
//!     "category": "F-grade",
//!     "grade": "F17",
//!     "condition": { "seasoning": "Seasoned", "latitude": "Temperate" },
//!     "moisture_content_pct": 12.0,
//!     "application": "Category1",
//!     "length_mm": 3000.0,
//!     "depth_mm": 200.0,
//!     "breadth_mm": 50.0
//! }"#;
//!
//! let element = ElementInput::from_json(json).unwrap().build().unwrap();
//! assert_eq!(element.label(), "B-1");
//! ```

pub mod masonry_wall;
pub mod reinforced_masonry_wall;
pub mod timber_beam;
pub mod timber_column;
pub mod timber_member;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;

// Re-export commonly used types
pub use masonry_wall::{MasonryWall, MasonryWallInput};
pub use reinforced_masonry_wall::{ReinforcedMasonryWall, ReinforcedMasonryWallInput};
pub use timber_beam::TimberBeam;
pub use timber_column::{TimberColumn, TimberColumnInput};
pub use timber_member::{BendingCapacity, BendingParams, ShearCapacity, TimberMember, TimberMemberInput};

/// Principal axis of a rectangular section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Axis parallel to the breadth (bending in the plane of the depth)
    Major,
    /// Axis parallel to the depth
    Minor,
}

/// Common behaviour of capacity results.
pub trait DesignCapacity {
    /// Design capacity in the result's reporting unit (kN or kN·m)
    fn capacity(&self) -> f64;

    /// Ratio of a design action effect to the capacity.
    ///
    /// Infinite for a zero capacity under a non-zero action.
    fn utilization(&self, design_action: f64) -> f64 {
        let capacity = self.capacity();
        if capacity > 0.0 {
            design_action / capacity
        } else if design_action == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    }

    /// True when the design action does not exceed the capacity
    fn passes(&self, design_action: f64) -> bool {
        self.utilization(design_action) <= 1.0
    }
}

/// Enum wrapper for all element inputs.
///
/// This is the JSON entry point: deserialize any element with its `type`
/// tag, then [`build`](ElementInput::build) it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ElementInput {
    /// Timber beam
    TimberBeam(TimberMemberInput),
    /// Timber column
    TimberColumn(TimberColumnInput),
    /// Unreinforced masonry wall panel
    MasonryWall(MasonryWallInput),
    /// Reinforced masonry wall
    ReinforcedMasonryWall(ReinforcedMasonryWallInput),
}

impl ElementInput {
    /// Parse a tagged element input from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Get the user-provided label for this element
    pub fn label(&self) -> &str {
        match self {
            ElementInput::TimberBeam(b) => &b.label,
            ElementInput::TimberColumn(c) => &c.member.label,
            ElementInput::MasonryWall(w) => &w.label,
            ElementInput::ReinforcedMasonryWall(w) => &w.label,
        }
    }

    /// Get the element type as a string
    pub fn element_type(&self) -> &'static str {
        match self {
            ElementInput::TimberBeam(_) => "TimberBeam",
            ElementInput::TimberColumn(_) => "TimberColumn",
            ElementInput::MasonryWall(_) => "MasonryWall",
            ElementInput::ReinforcedMasonryWall(_) => "ReinforcedMasonryWall",
        }
    }

    /// Validate the input and resolve its material.
    pub fn build(self) -> CalcResult<Element> {
        Ok(match self {
            ElementInput::TimberBeam(input) => Element::TimberBeam(TimberBeam::new(input)?),
            ElementInput::TimberColumn(input) => Element::TimberColumn(TimberColumn::new(input)?),
            ElementInput::MasonryWall(input) => Element::MasonryWall(MasonryWall::new(input)?),
            ElementInput::ReinforcedMasonryWall(input) => {
                Element::ReinforcedMasonryWall(ReinforcedMasonryWall::new(input)?)
            }
        })
    }
}

/// A constructed element of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    TimberBeam(TimberBeam),
    TimberColumn(TimberColumn),
    MasonryWall(MasonryWall),
    ReinforcedMasonryWall(ReinforcedMasonryWall),
}

impl Element {
    pub fn label(&self) -> &str {
        match self {
            Element::TimberBeam(b) => &b.member().input().label,
            Element::TimberColumn(c) => &c.member().input().label,
            Element::MasonryWall(w) => &w.input().label,
            Element::ReinforcedMasonryWall(w) => &w.input().label,
        }
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            Element::TimberBeam(_) => "TimberBeam",
            Element::TimberColumn(_) => "TimberColumn",
            Element::MasonryWall(_) => "MasonryWall",
            Element::ReinforcedMasonryWall(_) => "ReinforcedMasonryWall",
        }
    }

    /// The resolved material of this element
    pub fn material(&self) -> MaterialProperties {
        match self {
            Element::TimberBeam(b) => MaterialProperties::Timber(*b.member().properties()),
            Element::TimberColumn(c) => MaterialProperties::Timber(*c.member().properties()),
            Element::MasonryWall(w) => MaterialProperties::Masonry(w.properties().clone()),
            Element::ReinforcedMasonryWall(w) => MaterialProperties::Masonry(w.properties().clone()),
        }
    }
}
