//! # Hull Form Equations
//!
//! The raw formulas behind each coefficient, on plain `f64`s with no
//! dimension checking. Keeping them in one place makes them easy to verify
//! against the references and lets the checked calculations in
//! [`crate::calculations`] compose validation with arithmetic.
//!
//! ## Modules
//!
//! - [`coefficients`] - Block, waterplane, midship and prismatic coefficients
//!
//! ## Notation
//!
//! - `∇` = Volume of displacement
//! - `B` = Breadth extreme (beam)
//! - `T` = Mean draft
//! - `L` = Length between perpendiculars
//! - `Aw` = Waterplane area
//! - `Am` = Midship section area
//!
//! ## References
//!
//! - Principles of Naval Architecture, Vol. I, Chapter 1 (Hull Geometry)
//! - Tupper, Introduction to Naval Architecture, Chapter 3

pub mod coefficients;

pub use coefficients::{
    block_coefficient,
    midship_coefficient,
    prismatic_coefficient,
    waterplane_coefficient,
};
