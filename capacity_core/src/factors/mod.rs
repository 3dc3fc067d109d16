//! # Modification Factors
//!
//! Capacity and modification factors for AS 1720.1 (timber) and AS 3700
//! (masonry). Every factor is a pure function of element attributes and the
//! action being checked, recomputed on each capacity query.
//!
//! - [`timber`] - φ, k1, k4, k6, k9, k12 and the slenderness coefficients
//! - [`masonry`] - φ, slenderness, eccentricity, k, kb and kp

pub mod masonry;
pub mod timber;

// ============================================================================
// Code Clause References
// ============================================================================

/// AS 1720.1 clause references for timber design checks and factors.
pub mod as1720_ref {
    // Design checks
    /// Design capacity in bending
    pub const BENDING: &str = "AS 1720.1 Cl 3.2.1.1";
    /// Design capacity in shear
    pub const SHEAR: &str = "AS 1720.1 Cl 3.2.5";
    /// Design capacity in compression
    pub const COMPRESSION: &str = "AS 1720.1 Cl 3.3.1.1";

    // Factors
    /// Capacity factor φ
    pub const PHI: &str = "AS 1720.1 Table 2.1";
    /// Duration of load factor k1
    pub const K1: &str = "AS 1720.1 Table 2.3";
    /// Partial seasoning factor k4
    pub const K4: &str = "AS 1720.1 Cl 2.4.2";
    /// Temperature factor k6
    pub const K6: &str = "AS 1720.1 Cl 2.4.3";
    /// Strength sharing factor k9
    pub const K9: &str = "AS 1720.1 Cl 2.4.5.3";
    /// Stability factor k12 for beams
    pub const K12_BEAM: &str = "AS 1720.1 Cl 3.2.4";
    /// Stability factor k12 for columns
    pub const K12_COLUMN: &str = "AS 1720.1 Cl 3.3.3";
    /// Beam slenderness coefficient S1
    pub const S1: &str = "AS 1720.1 Cl 3.2.3.2";
    /// Column slenderness coefficients S3 and S4
    pub const S3_S4: &str = "AS 1720.1 Cl 3.3.2.2";
    /// Effective length factor g13
    pub const G13: &str = "AS 1720.1 Table 3.2";
    /// Material constants ρb and ρc
    pub const RHO: &str = "AS 1720.1 Appendix E";
}

/// AS 3700 clause references for masonry.
pub mod as3700_ref {
    /// Capacity reduction factors
    pub const PHI: &str = "AS 3700 Table 4.1";
    /// Mortar strength factor k_m
    pub const KM: &str = "AS 3700 Table 3.1";
    /// Characteristic compressive strength f'm
    pub const FM: &str = "AS 3700 Cl 3.3.2";
    /// Characteristic shear strength f'ms
    pub const FMS: &str = "AS 3700 Cl 3.3.4";
    /// Basic compressive capacity
    pub const BASIC_COMPRESSION: &str = "AS 3700 Cl 7.3.2";
    /// Simplified compression design
    pub const SIMPLIFIED_COMPRESSION: &str = "AS 3700 Cl 7.3.3";
    /// Refined compression design
    pub const REFINED_COMPRESSION: &str = "AS 3700 Cl 7.3.4";
    /// Concentrated loads
    pub const CONCENTRATED_LOAD: &str = "AS 3700 Cl 7.3.5";
    /// Vertical bending
    pub const VERTICAL_BENDING: &str = "AS 3700 Cl 7.4.2";
    /// Horizontal bending
    pub const HORIZONTAL_BENDING: &str = "AS 3700 Cl 7.4.3";
    /// Shear
    pub const SHEAR: &str = "AS 3700 Cl 7.5";
    /// Reinforced masonry in bending
    pub const REINFORCED_BENDING: &str = "AS 3700 Cl 8.6";
}
