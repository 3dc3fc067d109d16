//! # Cross-Section Property Formulas
//!
//! Geometric properties of solid rectangular sections: sawn and glulam timber
//! members, and a strip of masonry wall.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `Z` = Elastic section modulus (I/c, where c = distance to extreme fibre)
//! - `As` = Shear plane area
//! - `b` = Breadth of section
//! - `d` = Depth of section, parallel to the plane of bending
//!
//! ## References
//!
//! - AS 1720.1:2010 Cl 3.2.1 and 3.2.5: Section properties of beams
//! - AS 3700:2018 Cl 7.4: Section moduli of masonry in bending

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// Solid rectangular cross-section (timber members, masonry wall strips)
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use capacity_core::equations::section::rectangular_area;
///
/// // 90 x 90 post
/// let area = rectangular_area(90.0, 90.0);
/// assert!((area - 8100.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Calculate elastic section modulus for rectangular section
///
/// The section modulus relates bending moment to extreme fibre stress:
/// σ = M/Z
///
/// # Formula
/// Z = I/c = bd³/12 ÷ d/2 = bd²/6
///
/// Bending about the minor axis swaps the arguments: Z = db²/6.
/// A masonry wall in vertical bending uses b = wall length, d = thickness.
///
/// # Example
/// ```rust
/// use capacity_core::equations::section::rectangular_section_modulus;
///
/// // 200 x 50 joist about its major axis
/// let z = rectangular_section_modulus(50.0, 200.0);
/// assert!((z - 333_333.33).abs() < 0.01);
/// ```
///
/// # Reference
/// - AS 1720.1 Cl 3.2.1.1: Md = φ k1 k4 k6 k9 k12 f'b Z
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 6.0
}

/// Calculate shear plane area for rectangular section
///
/// The peak shear stress in a rectangle is 1.5× the average, so the
/// effective shear area is two thirds of the gross area.
///
/// # Formula
/// As = 2bd/3
///
/// # Reference
/// - AS 1720.1 Cl 3.2.5: Vd = φ k1 k4 k6 f's As
#[inline]
pub fn rectangular_shear_area(b: f64, d: f64) -> f64 {
    2.0 * b * d / 3.0
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_rectangular_area() {
        let a = rectangular_area(50.0, 200.0);
        assert!(approx_eq(a, 10_000.0), "A = {} (expected 10000)", a);
    }

    #[test]
    fn test_rectangular_section_modulus() {
        // Z = 50 * 200^2 / 6 = 333 333
        let z = rectangular_section_modulus(50.0, 200.0);
        assert!(approx_eq(z, 333_333.33), "Z = {} (expected 333333.33)", z);

        // Minor axis: Z = 200 * 50^2 / 6 = 83 333
        let z_minor = rectangular_section_modulus(200.0, 50.0);
        assert!(approx_eq(z_minor, 83_333.33), "Z = {} (expected 83333.33)", z_minor);
    }

    #[test]
    fn test_masonry_strip_modulus() {
        // 1 m strip of 110 wall: Z = 1000 * 110^2 / 6
        let z = rectangular_section_modulus(1000.0, 110.0);
        assert!(approx_eq(z, 2_016_666.67), "Z = {}", z);
    }

    #[test]
    fn test_rectangular_shear_area() {
        let a_shear = rectangular_shear_area(50.0, 200.0);
        let expected = 2.0 * 50.0 * 200.0 / 3.0;
        assert!(
            approx_eq(a_shear, expected),
            "As = {} (expected {})",
            a_shear,
            expected
        );
    }
}
