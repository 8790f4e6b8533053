//! # Unit Types
//!
//! Dimension-tagged quantities for hull form calculations. Every input to a
//! coefficient is a power of a single base dimension, length:
//!
//! - Length (beam, draft, length between perpendiculars): length¹
//! - Area (waterplane, midship section): length²
//! - Volume (displacement): length³
//!
//! A [`Quantity`] records the magnitude, the [`LengthUnit`] it is measured in
//! and the exponent of that unit. Quantities in different length units are
//! freely convertible; quantities with different exponents are not.
//!
//! For call sites that want compile-time clarity, thin newtypes such as
//! [`Meters`] and [`SqFt`] convert into a `Quantity` with the right exponent.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::units::{Feet, LengthUnit, Meters, Quantity};
//!
//! let beam: Meters = Feet(100.0).into();
//! assert!((beam.0 - 30.48).abs() < 1e-9);
//!
//! let area = Quantity::area(1.0, LengthUnit::Meter);
//! assert!((area.value_in(LengthUnit::Centimeter) - 10_000.0).abs() < 1e-6);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Meters per international foot
pub const METERS_PER_FOOT: f64 = 0.3048;

// ============================================================================
// Base Length Unit
// ============================================================================

/// Unit of the base length dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "yd")]
    Yard,
}

impl LengthUnit {
    /// Size of one unit in meters
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Foot => METERS_PER_FOOT,
            LengthUnit::Inch => METERS_PER_FOOT / 12.0,
            LengthUnit::Yard => METERS_PER_FOOT * 3.0,
        }
    }

    /// Short symbol ("m", "ft", ...)
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
            LengthUnit::Yard => "yd",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Dimension-Tagged Quantity
// ============================================================================

/// A magnitude tagged with a power of a length unit.
///
/// An `exponent` of 0 marks a bare number: a magnitude with no dimension
/// attached. Bare numbers are only accepted when dimension checking is lenient.
///
/// ## JSON Example
///
/// ```json
/// { "value": 12500.0, "unit": "m", "exponent": 3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Magnitude in `unit^exponent`
    pub value: f64,

    /// Length unit the magnitude is expressed in
    #[serde(default)]
    pub unit: LengthUnit,

    /// Power of the length unit (1 = length, 2 = area, 3 = volume)
    pub exponent: i32,
}

impl Quantity {
    /// Create a quantity with an arbitrary exponent
    pub fn new(value: f64, unit: LengthUnit, exponent: i32) -> Self {
        Quantity { value, unit, exponent }
    }

    /// Create a length (exponent 1)
    pub fn length(value: f64, unit: LengthUnit) -> Self {
        Quantity::new(value, unit, 1)
    }

    /// Create an area (exponent 2)
    pub fn area(value: f64, unit: LengthUnit) -> Self {
        Quantity::new(value, unit, 2)
    }

    /// Create a volume (exponent 3)
    pub fn volume(value: f64, unit: LengthUnit) -> Self {
        Quantity::new(value, unit, 3)
    }

    /// Create a bare number with no dimension attached
    pub fn bare(value: f64) -> Self {
        Quantity::new(value, LengthUnit::Meter, 0)
    }

    /// True if no dimension is attached
    pub fn is_bare(&self) -> bool {
        self.exponent == 0
    }

    /// Magnitude expressed in `unit^exponent`.
    ///
    /// Bare numbers are returned unchanged.
    pub fn value_in(&self, unit: LengthUnit) -> f64 {
        if self.unit == unit {
            return self.value;
        }
        self.value * (self.unit.meters() / unit.meters()).powi(self.exponent)
    }

    /// Re-express this quantity in another length unit
    pub fn to_unit(self, unit: LengthUnit) -> Self {
        Quantity::new(self.value_in(unit), unit, self.exponent)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exponent {
            0 => write!(f, "{}", self.value),
            1 => write!(f, "{} {}", self.value, self.unit),
            n => write!(f, "{} {}^{}", self.value, self.unit, n),
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::bare(value)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * METERS_PER_FOOT)
    }
}

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 / METERS_PER_FOOT)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMeters(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqFt> for SqMeters {
    fn from(sqft: SqFt) -> Self {
        SqMeters(sqft.0 * METERS_PER_FOOT.powi(2))
    }
}

impl From<SqMeters> for SqFt {
    fn from(sqm: SqMeters) -> Self {
        SqFt(sqm.0 / METERS_PER_FOOT.powi(2))
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFt(pub f64);

impl From<CubicFt> for CubicMeters {
    fn from(cuft: CubicFt) -> Self {
        CubicMeters(cuft.0 * METERS_PER_FOOT.powi(3))
    }
}

impl From<CubicMeters> for CubicFt {
    fn from(cum: CubicMeters) -> Self {
        CubicFt(cum.0 / METERS_PER_FOOT.powi(3))
    }
}

// ============================================================================
// Arithmetic and Quantity Conversions (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_unit {
    ($type:ty, $unit:expr, $exponent:expr) => {
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

        impl From<$type> for Quantity {
            fn from(v: $type) -> Self {
                Quantity::new(v.0, $unit, $exponent)
            }
        }
    };
}

impl_unit!(Meters, LengthUnit::Meter, 1);
impl_unit!(Feet, LengthUnit::Foot, 1);
impl_unit!(SqMeters, LengthUnit::Meter, 2);
impl_unit!(SqFt, LengthUnit::Foot, 2);
impl_unit!(CubicMeters, LengthUnit::Meter, 3);
impl_unit!(CubicFt, LengthUnit::Foot, 3);
