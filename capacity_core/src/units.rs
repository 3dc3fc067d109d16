//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by the Australian standards.
//! These are plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Working Units
//!
//! All formulas are evaluated in the units the standards tabulate. Lengths
//! stay plain `f64` millimetres in the inputs.
//!
//! - Stress: megapascals (MPa = N/mm²)
//! - Force: newtons (N), reported as kilonewtons (kN)
//! - Moment: newton-millimetres (N·mm), reported as kilonewton-metres (kN·m)
//!
//! Multiplying a stress by an area or section modulus yields the force or
//! moment directly, so the N → kN and N·mm → kN·m conversions live in one
//! place.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::units::{Kilonewtons, Megapascals, SquareMillimetres};
//!
//! let stress = Megapascals(4.0);
//! let area = SquareMillimetres(110.0 * 1000.0);
//! let force: Kilonewtons = (stress * area).into();
//! assert_eq!(force.0, 440.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1e3)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1e3)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimetres(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMetres(pub f64);

impl From<NewtonMillimetres> for KilonewtonMetres {
    fn from(nmm: NewtonMillimetres) -> Self {
        KilonewtonMetres(nmm.0 / 1e6)
    }
}

impl From<KilonewtonMetres> for NewtonMillimetres {
    fn from(knm: KilonewtonMetres) -> Self {
        NewtonMillimetres(knm.0 * 1e6)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimetres(pub f64);

/// Section modulus (or volume) in cubic millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimetres(pub f64);

// ============================================================================
// Unit Weight
// ============================================================================

/// Unit weight in kilonewtons per cubic metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonsPerCubicMetre(pub f64);

// ============================================================================
// Cross-unit Products
// ============================================================================

/// Stress over an area gives a force.
impl Mul<SquareMillimetres> for Megapascals {
    type Output = Newtons;
    fn mul(self, rhs: SquareMillimetres) -> Newtons {
        Newtons(self.0 * rhs.0)
    }
}

/// Stress times a section modulus gives a moment.
impl Mul<CubicMillimetres> for Megapascals {
    type Output = NewtonMillimetres;
    fn mul(self, rhs: CubicMillimetres) -> NewtonMillimetres {
        NewtonMillimetres(self.0 * rhs.0)
    }
}

/// Unit weight times a volume in mm³ gives a weight in kN.
impl Mul<CubicMillimetres> for KilonewtonsPerCubicMetre {
    type Output = Kilonewtons;
    fn mul(self, rhs: CubicMillimetres) -> Kilonewtons {
        Kilonewtons(self.0 * rhs.0 / 1e9)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(Megapascals);
impl_arithmetic!(NewtonMillimetres);
impl_arithmetic!(KilonewtonMetres);
impl_arithmetic!(SquareMillimetres);
impl_arithmetic!(CubicMillimetres);
impl_arithmetic!(KilonewtonsPerCubicMetre);
