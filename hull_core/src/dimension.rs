//! # Dimension Checking
//!
//! Every checked calculation declares a [`Signature`]: the name and expected
//! length exponent of each of its parameters. [`Signature::resolve`] validates
//! the arguments against it and returns their magnitudes in a single reference
//! unit, so the formula that follows works on plain `f64`s that are known to
//! be dimensionally consistent.
//!
//! ## Rules
//!
//! - The reference unit is the unit of the first argument carrying a dimension.
//! - Arguments with the declared exponent are converted into the reference unit.
//! - Bare numbers (exponent 0) are rejected under [`DimensionPolicy::Strict`] and
//!   taken as already in the reference unit under [`DimensionPolicy::Lenient`].
//! - Any other exponent is a mismatch under both policies.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::dimension::{ParamSpec, Signature};
//! use hull_core::settings::DimensionPolicy;
//! use hull_core::units::{LengthUnit, Quantity};
//!
//! const RECTANGLE: Signature = Signature::new(
//!     "rectangle",
//!     &[ParamSpec::new("width", 1), ParamSpec::new("height", 1)],
//! );
//!
//! let values = RECTANGLE
//!     .resolve(
//!         &[Quantity::length(2.0, LengthUnit::Meter), Quantity::length(100.0, LengthUnit::Centimeter)],
//!         DimensionPolicy::Strict,
//!     )
//!     .unwrap();
//! assert!((values[1] - 1.0).abs() < 1e-12);
//! ```

use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::settings::DimensionPolicy;
use crate::units::{LengthUnit, Quantity};

/// A named parameter and the power of length it must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name reported in errors (e.g., "beam")
    pub name: &'static str,
    /// Expected power of length (1 = length, 2 = area, 3 = volume)
    pub exponent: i32,
}

impl ParamSpec {
    /// Declare a parameter
    pub const fn new(name: &'static str, exponent: i32) -> Self {
        ParamSpec { name, exponent }
    }
}

/// The declared dimensions of one calculation's parameters, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Calculation name reported in errors and logs
    pub operation: &'static str,
    /// Parameters in call order
    pub params: &'static [ParamSpec],
}

impl Signature {
    /// Declare a signature
    pub const fn new(operation: &'static str, params: &'static [ParamSpec]) -> Self {
        Signature { operation, params }
    }

    /// Validate `args` and return their magnitudes in one reference unit.
    ///
    /// Runs before any arithmetic; no magnitude is returned unless every
    /// argument satisfies the signature.
    pub fn resolve(&self, args: &[Quantity], policy: DimensionPolicy) -> CalcResult<Vec<f64>> {
        if args.len() != self.params.len() {
            return Err(CalcError::internal(format!(
                "{} expects {} arguments, got {}",
                self.operation,
                self.params.len(),
                args.len()
            )));
        }

        let reference = args.iter().find(|q| !q.is_bare()).map(|q| q.unit);

        self.params
            .iter()
            .zip(args)
            .map(|(param, arg)| self.resolve_one(param, arg, reference, policy))
            .collect()
    }

    fn resolve_one(
        &self,
        param: &ParamSpec,
        arg: &Quantity,
        reference: Option<LengthUnit>,
        policy: DimensionPolicy,
    ) -> CalcResult<f64> {
        if !arg.value.is_finite() {
            return Err(CalcError::invalid_input(
                param.name,
                arg.value.to_string(),
                "Value must be finite",
            ));
        }

        if arg.is_bare() {
            if policy.is_strict() {
                debug!(
                    operation = self.operation,
                    param = param.name,
                    "rejected bare number under strict dimension policy"
                );
                return Err(CalcError::dimension_mismatch(param.name, param.exponent, 0));
            }
            debug!(
                operation = self.operation,
                param = param.name,
                value = arg.value,
                unit = ?reference,
                "coerced bare number into reference unit"
            );
            return Ok(arg.value);
        }

        if arg.exponent != param.exponent {
            debug!(
                operation = self.operation,
                param = param.name,
                expected = param.exponent,
                found = arg.exponent,
                "rejected argument with wrong dimension"
            );
            return Err(CalcError::dimension_mismatch(param.name, param.exponent, arg.exponent));
        }

        // A dimensioned argument exists, so the reference unit is set.
        let unit = reference.unwrap_or(arg.unit);
        if arg.unit != unit {
            debug!(
                operation = self.operation,
                param = param.name,
                from = %arg.unit,
                to = %unit,
                "converted argument into reference unit"
            );
        }
        let value = arg.value_in(unit);
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                param.name,
                arg.to_string(),
                format!("Value is not representable in {unit}"),
            ));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PRISM: Signature = Signature::new(
        "prism",
        &[ParamSpec::new("volume", 3), ParamSpec::new("area", 2), ParamSpec::new("length", 1)],
    );

    #[test]
    fn test_matching_dimensions_pass_through() {
        let values = PRISM
            .resolve(
                &[
                    Quantity::volume(8.0, LengthUnit::Meter),
                    Quantity::area(4.0, LengthUnit::Meter),
                    Quantity::length(2.0, LengthUnit::Meter),
                ],
                DimensionPolicy::Strict,
            )
            .unwrap();
        assert_eq!(values, vec![8.0, 4.0, 2.0]);
    }

    #[test]
    fn test_converts_to_first_dimensioned_unit() {
        let values = PRISM
            .resolve(
                &[
                    Quantity::volume(1.0, LengthUnit::Foot),
                    Quantity::area(144.0, LengthUnit::Inch),
                    Quantity::length(1.0, LengthUnit::Yard),
                ],
                DimensionPolicy::Strict,
            )
            .unwrap();
        assert_relative_eq!(values[0], 1.0);
        assert_relative_eq!(values[1], 1.0, max_relative = 1e-12);
        assert_relative_eq!(values[2], 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_wrong_exponent_rejected() {
        let err = PRISM
            .resolve(
                &[
                    Quantity::volume(8.0, LengthUnit::Meter),
                    Quantity::length(4.0, LengthUnit::Meter),
                    Quantity::length(2.0, LengthUnit::Meter),
                ],
                DimensionPolicy::Lenient,
            )
            .unwrap_err();
        assert_eq!(err, CalcError::dimension_mismatch("area", 2, 1));
    }

    #[test]
    fn test_bare_number_strict_vs_lenient() {
        let args = [
            Quantity::volume(8.0, LengthUnit::Meter),
            Quantity::bare(4.0),
            Quantity::length(2.0, LengthUnit::Meter),
        ];
        let err = PRISM.resolve(&args, DimensionPolicy::Strict).unwrap_err();
        assert_eq!(err, CalcError::dimension_mismatch("area", 2, 0));

        let values = PRISM.resolve(&args, DimensionPolicy::Lenient).unwrap();
        assert_eq!(values, vec![8.0, 4.0, 2.0]);
    }

    #[test]
    fn test_all_bare_lenient() {
        let args = [Quantity::bare(1.0), Quantity::bare(2.0), Quantity::bare(3.0)];
        let values = PRISM.resolve(&args, DimensionPolicy::Lenient).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_non_finite_rejected() {
        let args = [
            Quantity::volume(f64::NAN, LengthUnit::Meter),
            Quantity::area(1.0, LengthUnit::Meter),
            Quantity::length(1.0, LengthUnit::Meter),
        ];
        let err = PRISM.resolve(&args, DimensionPolicy::Strict).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_conversion_overflow_rejected() {
        let args = [
            Quantity::volume(1.0, LengthUnit::Millimeter),
            Quantity::area(1e300, LengthUnit::Meter),
            Quantity::length(1.0, LengthUnit::Meter),
        ];
        let err = PRISM.resolve(&args, DimensionPolicy::Strict).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "area"));
    }

    #[test]
    fn test_arity_mismatch() {
        let err = PRISM
            .resolve(&[Quantity::volume(1.0, LengthUnit::Meter)], DimensionPolicy::Strict)
            .unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
