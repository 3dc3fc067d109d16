//! # Structural Equations
//!
//! Geometric formulas shared by the element models. Code-specific factors
//! live in [`crate::factors`]; this module only holds the section properties
//! those factors multiply.
//!
//! ## Modules
//!
//! - [`section`] - Cross-section properties (A, Z, As)
//!
//! ## Conventions
//!
//! - **Lengths** in millimetres, so areas come out in mm² and section moduli in mm³
//! - **d** is the dimension parallel to the bending plane, **b** the other one
//!
//! ## References
//!
//! - AS 1720.1:2010 Section 3: Design of beams and columns
//! - AS 3700:2018 Section 7: Design of unreinforced masonry

pub mod section;

pub use section::{
    rectangular_area,
    rectangular_section_modulus,
    rectangular_shear_area,
};
