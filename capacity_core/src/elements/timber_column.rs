//! # Timber Column (AS 1720.1)
//!
//! A rectangular member in axial compression. The column also carries the
//! beam checks so a member in combined actions can be assessed from one
//! element.
//!
//! `Ndc = φ k1 k4 k6 k12 f'c Ac`, with k12 from `ρc S3` buckling about the
//! major axis and `ρc S4` about the minor axis. [`TimberColumn::compression`]
//! returns the lesser.

use log::debug;
use serde::{Deserialize, Serialize};

use super::timber_member::{BendingCapacity, BendingParams, ShearCapacity, TimberMember, TimberMemberInput};
use super::{Axis, DesignCapacity};
use crate::errors::{require_positive_param, CalcResult};
use crate::factors::as1720_ref;
use crate::factors::timber::{
    column_slenderness, rho_c, stability_factor, EndRestraint, LoadDuration, TimberFactorSet,
};
use crate::units::{Kilonewtons, SquareMillimetres};

/// Input parameters for a timber column.
///
/// Serializes flat: the member fields sit beside `end_restraint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimberColumnInput {
    #[serde(flatten)]
    pub member: TimberMemberInput,

    /// End fixity for the effective length factor g13
    pub end_restraint: EndRestraint,
}

/// Parameters for a compression capacity check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionParams {
    pub load_duration: LoadDuration,
    /// Column material constant ρc
    pub rho_c: f64,
    /// Distance between restraints against buckling about the major axis, Lax
    pub major_restraint_spacing_mm: f64,
    /// Distance between restraints against buckling about the minor axis, Lay
    pub minor_restraint_spacing_mm: f64,
}

impl CompressionParams {
    /// Parameters with ρc derived from the column's own grade (Appendix E3).
    ///
    /// `r` is the ratio of temporary to total design action effect.
    pub fn for_column(
        column: &TimberColumn,
        load_duration: LoadDuration,
        major_restraint_spacing_mm: f64,
        minor_restraint_spacing_mm: f64,
        r: f64,
    ) -> CalcResult<Self> {
        Ok(CompressionParams {
            load_duration,
            rho_c: rho_c(column.member().properties(), r)?,
            major_restraint_spacing_mm,
            minor_restraint_spacing_mm,
        })
    }
}

/// Design compression capacity Ndc about one buckling axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionCapacity {
    /// Design capacity in compression (kN)
    pub capacity_kn: f64,
    /// Buckling axis
    pub axis: Axis,
    /// S3 (major) or S4 (minor)
    pub slenderness: f64,
    pub area_mm2: f64,
    /// Characteristic compression strength f'c (MPa)
    pub fc_mpa: f64,
    pub factors: TimberFactorSet,
    pub code_reference: String,
}

impl DesignCapacity for CompressionCapacity {
    fn capacity(&self) -> f64 {
        self.capacity_kn
    }
}

impl CompressionCapacity {
    /// Factor report citing the column stability clause
    pub fn format_report(&self) -> String {
        self.factors.format_report(as1720_ref::K12_COLUMN)
    }
}

/// A timber column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimberColumn {
    member: TimberMember,
    end_restraint: EndRestraint,
}

impl TimberColumn {
    pub fn new(input: TimberColumnInput) -> CalcResult<Self> {
        Ok(Self {
            member: TimberMember::new(input.member)?,
            end_restraint: input.end_restraint,
        })
    }

    pub fn member(&self) -> &TimberMember {
        &self.member
    }

    pub fn end_restraint(&self) -> EndRestraint {
        self.end_restraint
    }

    pub fn major_axis_bending(&self, params: &BendingParams) -> CalcResult<BendingCapacity> {
        self.member.major_axis_bending(params)
    }

    pub fn minor_axis_bending(&self, params: &BendingParams) -> CalcResult<BendingCapacity> {
        self.member.minor_axis_bending(params)
    }

    pub fn shear(&self, load_duration: LoadDuration) -> CalcResult<ShearCapacity> {
        self.member.shear(load_duration)
    }

    /// Compression capacity for buckling about the major axis (S3, using d).
    pub fn major_axis_compression(&self, params: &CompressionParams) -> CalcResult<CompressionCapacity> {
        let input = self.member.input();
        let s3 = column_slenderness(
            "major_restraint_spacing_mm",
            params.major_restraint_spacing_mm,
            input.length_mm,
            input.depth_mm,
            self.end_restraint,
        )?;
        self.axial_capacity(Axis::Major, s3, params)
    }

    /// Compression capacity for buckling about the minor axis (S4, using b).
    pub fn minor_axis_compression(&self, params: &CompressionParams) -> CalcResult<CompressionCapacity> {
        let input = self.member.input();
        let s4 = column_slenderness(
            "minor_restraint_spacing_mm",
            params.minor_restraint_spacing_mm,
            input.length_mm,
            input.breadth_mm,
            self.end_restraint,
        )?;
        self.axial_capacity(Axis::Minor, s4, params)
    }

    /// Governing compression capacity: the lesser of both buckling axes.
    pub fn compression(&self, params: &CompressionParams) -> CalcResult<CompressionCapacity> {
        let major = self.major_axis_compression(params)?;
        let minor = self.minor_axis_compression(params)?;
        Ok(if minor.capacity_kn <= major.capacity_kn {
            minor
        } else {
            major
        })
    }

    fn axial_capacity(&self, axis: Axis, slenderness: f64, params: &CompressionParams) -> CalcResult<CompressionCapacity> {
        require_positive_param("rho_c", params.rho_c)?;

        let mut factors = self.member.base_factors(params.load_duration);
        factors.k12 = stability_factor(params.rho_c * slenderness);

        let props = self.member.properties();
        let area = self.member.area_mm2();
        let capacity: Kilonewtons = (props.fc() * factors.product() * SquareMillimetres(area)).into();
        debug!(
            "'{}' {:?}-axis compression: S = {:.2}, k12 = {:.4}, Ndc = {:.3} kN [{}]",
            self.member.input().label,
            axis,
            slenderness,
            factors.k12,
            capacity.value(),
            as1720_ref::K12_COLUMN
        );
        Ok(CompressionCapacity {
            capacity_kn: capacity.value(),
            axis,
            slenderness,
            area_mm2: area,
            fc_mpa: props.fc_mpa,
            factors,
            code_reference: self.member.reference(as1720_ref::COMPRESSION),
        })
    }
}
