//! # Checked Coefficient Calculations
//!
//! The four hull form coefficients with dimensional checking. Each entry
//! point resolves its arguments against a [`Signature`] before any
//! arithmetic, rejects a zero reference geometry, and only then evaluates
//! the raw formula from [`crate::equations`].
//!
//! Arguments accept anything convertible into a [`Quantity`]: a tagged
//! quantity, one of the unit newtypes, or a plain `f64` (a bare number,
//! accepted only under [`DimensionPolicy::Lenient`]).
//!
//! ## Example
//!
//! ```rust
//! use hull_core::calculations::Calculator;
//! use hull_core::units::{CubicMeters, Feet, Meters};
//!
//! let calc = Calculator::strict();
//! let cb = calc
//!     .block_coeff(CubicMeters(13_500.0), Meters(20.0), Meters(8.0), Meters(125.0))
//!     .unwrap();
//! assert!((cb - 0.675).abs() < 1e-12);
//!
//! // Mixed length units are converted before computing
//! let cb_mixed = calc
//!     .block_coeff(CubicMeters(13_500.0), Meters(20.0), Meters(8.0), Feet(125.0 / 0.3048))
//!     .unwrap();
//! assert!((cb_mixed - 0.675).abs() < 1e-9);
//! ```

use tracing::{debug, trace};

use crate::dimension::{ParamSpec, Signature};
use crate::equations;
use crate::errors::{CalcError, CalcResult};
use crate::settings::{CoefficientSettings, DimensionPolicy};
use crate::units::Quantity;

/// Cb = displacement / (beam × draft × length)
pub const BLOCK_COEFF: Signature = Signature::new(
    "block_coeff",
    &[
        ParamSpec::new("displacement", 3),
        ParamSpec::new("beam", 1),
        ParamSpec::new("draft", 1),
        ParamSpec::new("length", 1),
    ],
);

/// Cwp = area / (beam × length)
pub const WATERPLANE_COEFF: Signature = Signature::new(
    "waterplane_coeff",
    &[
        ParamSpec::new("area", 2),
        ParamSpec::new("beam", 1),
        ParamSpec::new("length", 1),
    ],
);

/// Cm = area / (beam × draft)
pub const MIDSHIP_COEFF: Signature = Signature::new(
    "midship_coeff",
    &[
        ParamSpec::new("area", 2),
        ParamSpec::new("beam", 1),
        ParamSpec::new("draft", 1),
    ],
);

/// Cp = displacement / (midship_area × length)
pub const PRISMATIC_COEFF: Signature = Signature::new(
    "prismatic_coeff",
    &[
        ParamSpec::new("displacement", 3),
        ParamSpec::new("midship_area", 2),
        ParamSpec::new("length", 1),
    ],
);

/// Coefficient calculator bound to one set of settings.
///
/// Stateless apart from its settings; cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    settings: CoefficientSettings,
}

impl Calculator {
    /// Create a calculator with the given settings
    pub fn new(settings: CoefficientSettings) -> Self {
        Calculator { settings }
    }

    /// Calculator that rejects bare numbers
    pub fn strict() -> Self {
        Calculator::new(CoefficientSettings::new(DimensionPolicy::Strict))
    }

    /// Calculator that coerces bare numbers into the reference unit
    pub fn lenient() -> Self {
        Calculator::new(CoefficientSettings::new(DimensionPolicy::Lenient))
    }

    /// Copy of this calculator with a different dimension policy.
    ///
    /// ```rust
    /// use hull_core::calculations::Calculator;
    /// use hull_core::settings::DimensionPolicy;
    ///
    /// let calc = Calculator::default();
    /// assert!(calc.waterplane_coeff(1.0, 1.0, 1.0).is_ok());
    /// assert!(calc.with_policy(DimensionPolicy::Strict).waterplane_coeff(1.0, 1.0, 1.0).is_err());
    /// ```
    pub fn with_policy(self, dimension_policy: DimensionPolicy) -> Self {
        let mut settings = self.settings;
        settings.dimension_policy = dimension_policy;
        Calculator::new(settings)
    }

    /// Settings this calculator applies
    pub fn settings(&self) -> &CoefficientSettings {
        &self.settings
    }

    fn policy(&self) -> DimensionPolicy {
        self.settings.dimension_policy
    }

    /// Block coefficient Cb.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - an argument has the wrong power of length
    /// * `DegenerateGeometry` - beam × draft × length is zero
    pub fn block_coeff(
        &self,
        displacement: impl Into<Quantity>,
        beam: impl Into<Quantity>,
        draft: impl Into<Quantity>,
        length: impl Into<Quantity>,
    ) -> CalcResult<f64> {
        let v = BLOCK_COEFF.resolve(
            &[displacement.into(), beam.into(), draft.into(), length.into()],
            self.policy(),
        )?;
        ensure_nonzero(&BLOCK_COEFF, &v[1..], "beam × draft × length")?;
        finish(&BLOCK_COEFF, equations::block_coefficient(v[0], v[1], v[2], v[3]))
    }

    /// Waterplane coefficient Cwp.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - an argument has the wrong power of length
    /// * `DegenerateGeometry` - beam × length is zero
    pub fn waterplane_coeff(
        &self,
        area: impl Into<Quantity>,
        beam: impl Into<Quantity>,
        length: impl Into<Quantity>,
    ) -> CalcResult<f64> {
        let v = WATERPLANE_COEFF.resolve(&[area.into(), beam.into(), length.into()], self.policy())?;
        ensure_nonzero(&WATERPLANE_COEFF, &v[1..], "beam × length")?;
        finish(&WATERPLANE_COEFF, equations::waterplane_coefficient(v[0], v[1], v[2]))
    }

    /// Midship section coefficient Cm.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - an argument has the wrong power of length
    /// * `DegenerateGeometry` - beam × draft is zero
    pub fn midship_coeff(
        &self,
        area: impl Into<Quantity>,
        beam: impl Into<Quantity>,
        draft: impl Into<Quantity>,
    ) -> CalcResult<f64> {
        let v = MIDSHIP_COEFF.resolve(&[area.into(), beam.into(), draft.into()], self.policy())?;
        ensure_nonzero(&MIDSHIP_COEFF, &v[1..], "beam × draft")?;
        finish(&MIDSHIP_COEFF, equations::midship_coefficient(v[0], v[1], v[2]))
    }

    /// Longitudinal prismatic coefficient Cp.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` - an argument has the wrong power of length
    /// * `DegenerateGeometry` - midship_area × length is zero
    pub fn prismatic_coeff(
        &self,
        displacement: impl Into<Quantity>,
        midship_area: impl Into<Quantity>,
        length: impl Into<Quantity>,
    ) -> CalcResult<f64> {
        let v = PRISMATIC_COEFF.resolve(
            &[displacement.into(), midship_area.into(), length.into()],
            self.policy(),
        )?;
        ensure_nonzero(&PRISMATIC_COEFF, &v[1..], "midship_area × length")?;
        finish(&PRISMATIC_COEFF, equations::prismatic_coefficient(v[0], v[1], v[2]))
    }
}

/// Reject a reference geometry whose product is zero or not representable.
///
/// Factors are checked individually so that `0 × ∞` is reported as zero
/// rather than slipping through as NaN.
fn ensure_nonzero(signature: &Signature, factors: &[f64], what: &str) -> CalcResult<()> {
    if factors.iter().any(|f| *f == 0.0) {
        debug!(operation = signature.operation, "rejected zero reference geometry");
        return Err(CalcError::degenerate_geometry(
            signature.operation,
            format!("{what} is zero"),
        ));
    }
    let denominator: f64 = factors.iter().product();
    if !denominator.is_finite() || denominator == 0.0 {
        debug!(operation = signature.operation, denominator, "rejected unrepresentable reference geometry");
        return Err(CalcError::degenerate_geometry(
            signature.operation,
            format!("{what} is not representable ({denominator})"),
        ));
    }
    Ok(())
}

fn finish(signature: &Signature, coefficient: f64) -> CalcResult<f64> {
    if !coefficient.is_finite() {
        debug!(operation = signature.operation, coefficient, "rejected non-finite coefficient");
        return Err(CalcError::degenerate_geometry(
            signature.operation,
            format!("coefficient is not finite ({coefficient})"),
        ));
    }
    trace!(operation = signature.operation, coefficient, "computed coefficient");
    Ok(coefficient)
}

// =============================================================================
// FREE FUNCTIONS (default settings)
// =============================================================================

/// Block coefficient Cb with default settings.
///
/// ```rust
/// assert_eq!(hull_core::block_coeff(1.0, 1.0, 1.0, 1.0).unwrap(), 1.0);
/// ```
pub fn block_coeff(
    displacement: impl Into<Quantity>,
    beam: impl Into<Quantity>,
    draft: impl Into<Quantity>,
    length: impl Into<Quantity>,
) -> CalcResult<f64> {
    Calculator::default().block_coeff(displacement, beam, draft, length)
}

/// Waterplane coefficient Cwp with default settings.
pub fn waterplane_coeff(
    area: impl Into<Quantity>,
    beam: impl Into<Quantity>,
    length: impl Into<Quantity>,
) -> CalcResult<f64> {
    Calculator::default().waterplane_coeff(area, beam, length)
}

/// Midship section coefficient Cm with default settings.
pub fn midship_coeff(
    area: impl Into<Quantity>,
    beam: impl Into<Quantity>,
    draft: impl Into<Quantity>,
) -> CalcResult<f64> {
    Calculator::default().midship_coeff(area, beam, draft)
}

/// Longitudinal prismatic coefficient Cp with default settings.
pub fn prismatic_coeff(
    displacement: impl Into<Quantity>,
    midship_area: impl Into<Quantity>,
    length: impl Into<Quantity>,
) -> CalcResult<f64> {
    Calculator::default().prismatic_coeff(displacement, midship_area, length)
}
