//! # Hull Form Calculations
//!
//! Dimension-checked coefficient calculations. Each calculation follows the
//! pattern:
//!
//! - declare a [`Signature`] of expected length exponents
//! - resolve the arguments against it (reject or coerce per [`DimensionPolicy`])
//! - reject a zero reference geometry
//! - evaluate the raw formula from [`crate::equations`]
//!
//! ## Available Calculations
//!
//! - [`coefficients`] - Block, waterplane, midship and prismatic coefficients
//! - [`hull_form`] - All coefficients for one set of hull particulars
//!
//! [`DimensionPolicy`]: crate::settings::DimensionPolicy

pub mod coefficients;
pub mod hull_form;

use serde::{Deserialize, Serialize};

use crate::dimension::Signature;

// Re-export commonly used types
pub use coefficients::{
    block_coeff, midship_coeff, prismatic_coeff, waterplane_coeff, Calculator, BLOCK_COEFF,
    MIDSHIP_COEFF, PRISMATIC_COEFF, WATERPLANE_COEFF,
};
pub use hull_form::{HullFormInput, HullFormResult};

/// The coefficients of form this crate computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoefficientKind {
    /// Block coefficient Cb
    Block,
    /// Waterplane area coefficient Cwp
    Waterplane,
    /// Midship section coefficient Cm
    Midship,
    /// Longitudinal prismatic coefficient Cp
    Prismatic,
}

impl CoefficientKind {
    /// All kinds, in the order they are usually tabulated
    pub const ALL: [CoefficientKind; 4] = [
        CoefficientKind::Block,
        CoefficientKind::Waterplane,
        CoefficientKind::Midship,
        CoefficientKind::Prismatic,
    ];

    /// Conventional symbol ("Cb", "Cwp", ...)
    pub fn symbol(&self) -> &'static str {
        match self {
            CoefficientKind::Block => "Cb",
            CoefficientKind::Waterplane => "Cwp",
            CoefficientKind::Midship => "Cm",
            CoefficientKind::Prismatic => "Cp",
        }
    }

    /// Dimension signature of the checked calculation
    pub fn signature(&self) -> &'static Signature {
        match self {
            CoefficientKind::Block => &BLOCK_COEFF,
            CoefficientKind::Waterplane => &WATERPLANE_COEFF,
            CoefficientKind::Midship => &MIDSHIP_COEFF,
            CoefficientKind::Prismatic => &PRISMATIC_COEFF,
        }
    }
}
