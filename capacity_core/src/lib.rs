//! # capacity_core - Australian Standard Member Capacity Engine
//!
//! `capacity_core` computes design capacities of timber members to AS 1720.1
//! and masonry walls to AS 3700. All inputs and outputs are
//! JSON-serializable, and every result carries the factors that produced it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Elements are immutable; every capacity call recomputes its factors
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types separating configuration and domain errors
//! - **Closed Tables**: Grades and mortar factors are enums resolved against compiled tables
//!
//! ## Quick Start
//!
//! ```rust
//! use capacity_core::elements::{MasonryWall, MasonryWallInput};
//! use capacity_core::materials::{BeddingType, MasonryMaterial, MasonryUnit, MortarClass};
//!
//! let material = MasonryMaterial::new(MasonryUnit::Clay, MortarClass::M4, BeddingType::Full, 20.0);
//! let wall = MasonryWall::new(MasonryWallInput::new("W-1", 600.0, 2700.0, 110.0, material)).unwrap();
//!
//! let shear = wall.vertical_plane_shear().unwrap();
//! let json = serde_json::to_string_pretty(&shear).unwrap();
//! assert!(json.contains("capacity_kn"));
//! ```
//!
//! ## Modules
//!
//! - [`elements`] - Timber beams and columns, unreinforced and reinforced masonry walls
//! - [`factors`] - AS 1720.1 and AS 3700 modification factors
//! - [`materials`] - Timber grades and masonry strengths
//! - [`equations`] - Section properties
//! - [`settings`] - Code editions and rounding precision
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod elements;
pub mod equations;
pub mod errors;
pub mod factors;
mod generated;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use elements::{
    DesignCapacity, Element, ElementInput, MasonryWall, MasonryWallInput, ReinforcedMasonryWall,
    ReinforcedMasonryWallInput, TimberBeam, TimberColumn, TimberColumnInput, TimberMemberInput,
};
pub use errors::{CalcError, CalcResult};
pub use settings::DesignSettings;
