//! # hull_core - Hull Form Coefficients
//!
//! `hull_core` computes the naval-architecture coefficients of form (block,
//! waterplane, midship and prismatic) from a hull's principal particulars,
//! checking that every argument has the right power of length before any
//! arithmetic happens.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take quantities and return a ratio
//! - **Dimension-checked**: An area passed where a length is expected is an error,
//!   never a plausible-looking wrong number
//! - **Rich Errors**: Structured error types, not just strings
//! - **JSON-Friendly**: Inputs, results, settings and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use hull_core::{block_coeff, Calculator};
//! use hull_core::units::{CubicMeters, Meters, SqMeters};
//!
//! // Plain numbers are accepted under the default (lenient) policy
//! assert_eq!(block_coeff(1.0, 1.0, 1.0, 1.0).unwrap(), 1.0);
//!
//! // Strict calculators require every argument to carry its dimension
//! let calc = Calculator::strict();
//! let cb = calc
//!     .block_coeff(CubicMeters(13_500.0), Meters(20.0), Meters(8.0), Meters(125.0))
//!     .unwrap();
//! assert!((cb - 0.675).abs() < 1e-12);
//!
//! // An area where the beam should be is rejected
//! assert!(calc
//!     .block_coeff(CubicMeters(13_500.0), SqMeters(20.0), Meters(8.0), Meters(125.0))
//!     .is_err());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Dimension-checked coefficient calculations
//! - [`equations`] - Raw coefficient formulas on plain `f64`
//! - [`dimension`] - Parameter signatures and the dimension check
//! - [`units`] - Dimension-tagged quantities and unit newtypes
//! - [`settings`] - Dimension policy configuration
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod dimension;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    block_coeff, midship_coeff, prismatic_coeff, waterplane_coeff, Calculator, CoefficientKind,
};
pub use errors::{CalcError, CalcResult};
pub use settings::{CoefficientSettings, DimensionPolicy};
pub use units::{LengthUnit, Quantity};
