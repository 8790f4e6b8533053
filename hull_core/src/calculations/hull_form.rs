//! # Hull Form Summary
//!
//! Computes every coefficient of form that a set of hull particulars
//! supports. Principal dimensions are required; the volumetric and areal
//! quantities are optional, and each coefficient is produced only when its
//! inputs are present.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::calculations::hull_form::{calculate, HullFormInput};
//! use hull_core::settings::CoefficientSettings;
//! use hull_core::units::{LengthUnit, Quantity};
//!
//! let input = HullFormInput {
//!     label: "Design 3A".to_string(),
//!     displacement: Some(Quantity::volume(13_500.0, LengthUnit::Meter)),
//!     waterplane_area: Some(Quantity::area(2_000.0, LengthUnit::Meter)),
//!     midship_area: None,
//!     beam: Quantity::length(20.0, LengthUnit::Meter),
//!     draft: Quantity::length(8.0, LengthUnit::Meter),
//!     length: Quantity::length(125.0, LengthUnit::Meter),
//! };
//!
//! let result = calculate(&input, &CoefficientSettings::default()).unwrap();
//! assert!((result.block.unwrap() - 0.675).abs() < 1e-12);
//! assert!(result.midship.is_none());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::coefficients::Calculator;
use crate::calculations::CoefficientKind;
use crate::errors::{CalcError, CalcResult};
use crate::settings::CoefficientSettings;
use crate::units::Quantity;

/// Principal particulars of one hull at one draft.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Design 3A",
///   "displacement": { "value": 13500.0, "unit": "m", "exponent": 3 },
///   "waterplane_area": { "value": 2000.0, "unit": "m", "exponent": 2 },
///   "midship_area": { "value": 156.8, "unit": "m", "exponent": 2 },
///   "beam": { "value": 20.0, "unit": "m", "exponent": 1 },
///   "draft": { "value": 8.0, "unit": "m", "exponent": 1 },
///   "length": { "value": 125.0, "unit": "m", "exponent": 1 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullFormInput {
    /// User label for this hull (e.g., "Design 3A", "Full load")
    #[serde(default)]
    pub label: String,

    /// Volume of displacement at the draft
    #[serde(default)]
    pub displacement: Option<Quantity>,

    /// Waterplane area at the draft
    #[serde(default)]
    pub waterplane_area: Option<Quantity>,

    /// Immersed midship section area
    #[serde(default)]
    pub midship_area: Option<Quantity>,

    /// Breadth extreme
    pub beam: Quantity,

    /// Mean draft
    pub draft: Quantity,

    /// Length between perpendiculars
    pub length: Quantity,
}

impl HullFormInput {
    /// Validate that at least one coefficient can be computed.
    pub fn validate(&self) -> CalcResult<()> {
        if self.displacement.is_none() && self.waterplane_area.is_none() && self.midship_area.is_none() {
            return Err(CalcError::missing_field(
                "displacement, waterplane_area or midship_area",
            ));
        }
        Ok(())
    }
}

/// Coefficients computed for one hull.
///
/// ## JSON Example
///
/// ```json
/// {
///   "block": 0.675,
///   "waterplane": 0.8,
///   "midship": 0.98,
///   "prismatic": 0.689
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HullFormResult {
    /// Block coefficient Cb (needs displacement)
    pub block: Option<f64>,

    /// Waterplane coefficient Cwp (needs waterplane area)
    pub waterplane: Option<f64>,

    /// Midship coefficient Cm (needs midship area)
    pub midship: Option<f64>,

    /// Prismatic coefficient Cp (needs displacement and midship area)
    pub prismatic: Option<f64>,
}

impl HullFormResult {
    /// Get a coefficient by kind
    pub fn get(&self, kind: CoefficientKind) -> Option<f64> {
        match kind {
            CoefficientKind::Block => self.block,
            CoefficientKind::Waterplane => self.waterplane,
            CoefficientKind::Midship => self.midship,
            CoefficientKind::Prismatic => self.prismatic,
        }
    }

    /// Deviation from the identity Cp = Cb / Cm.
    ///
    /// Measured displacement and section areas that disagree with each other
    /// show up as a large value here. `None` unless Cb, Cm and Cp are all present.
    pub fn prismatic_consistency(&self) -> Option<f64> {
        let (cb, cm, cp) = (self.block?, self.midship?, self.prismatic?);
        Some((cp - cb / cm).abs())
    }
}

/// Calculate all coefficients supported by the input.
///
/// # Arguments
///
/// * `input` - Hull particulars
/// * `settings` - Dimension policy applied to every argument
///
/// # Returns
///
/// * `Ok(HullFormResult)` - Coefficients whose inputs were supplied
/// * `Err(CalcError)` - If no coefficient can be computed, or any supplied
///   quantity fails its dimension check or gives a zero reference geometry
pub fn calculate(input: &HullFormInput, settings: &CoefficientSettings) -> CalcResult<HullFormResult> {
    input.validate()?;

    let calc = Calculator::new(*settings);
    let mut result = HullFormResult::default();

    if let Some(displacement) = input.displacement {
        result.block = Some(calc.block_coeff(displacement, input.beam, input.draft, input.length)?);
    }
    if let Some(area) = input.waterplane_area {
        result.waterplane = Some(calc.waterplane_coeff(area, input.beam, input.length)?);
    }
    if let Some(area) = input.midship_area {
        result.midship = Some(calc.midship_coeff(area, input.beam, input.draft)?);
    }
    if let (Some(displacement), Some(area)) = (input.displacement, input.midship_area) {
        result.prismatic = Some(calc.prismatic_coeff(displacement, area, input.length)?);
    }

    debug!(label = %input.label, ?result, "hull form coefficients computed");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;
    use approx::assert_relative_eq;

    fn test_hull() -> HullFormInput {
        HullFormInput {
            label: "Test Hull".to_string(),
            displacement: Some(Quantity::volume(13_500.0, LengthUnit::Meter)),
            waterplane_area: Some(Quantity::area(2_000.0, LengthUnit::Meter)),
            midship_area: Some(Quantity::area(156.8, LengthUnit::Meter)),
            beam: Quantity::length(20.0, LengthUnit::Meter),
            draft: Quantity::length(8.0, LengthUnit::Meter),
            length: Quantity::length(125.0, LengthUnit::Meter),
        }
    }

    #[test]
    fn test_all_coefficients() {
        let result = calculate(&test_hull(), &CoefficientSettings::default()).unwrap();

        assert_relative_eq!(result.block.unwrap(), 0.675, max_relative = 1e-12);
        assert_relative_eq!(result.waterplane.unwrap(), 0.8, max_relative = 1e-12);
        // Cm = 156.8 / (20 × 8) = 0.98
        assert_relative_eq!(result.midship.unwrap(), 0.98, max_relative = 1e-12);
        // Cp = 13500 / (156.8 × 125) = 0.68878
        assert_relative_eq!(result.prismatic.unwrap(), 0.68878, epsilon = 1e-5);
    }

    #[test]
    fn test_prismatic_consistency() {
        let result = calculate(&test_hull(), &CoefficientSettings::default()).unwrap();
        assert!(result.prismatic_consistency().unwrap() < 1e-12);
        assert_eq!(result.get(CoefficientKind::Midship), result.midship);
    }

    #[test]
    fn test_partial_input() {
        let mut hull = test_hull();
        hull.midship_area = None;
        let result = calculate(&hull, &CoefficientSettings::default()).unwrap();
        assert!(result.block.is_some());
        assert!(result.prismatic.is_none());
        assert!(result.prismatic_consistency().is_none());
    }

    #[test]
    fn test_missing_all_quantities() {
        let mut hull = test_hull();
        hull.displacement = None;
        hull.waterplane_area = None;
        hull.midship_area = None;
        let err = calculate(&hull, &CoefficientSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_swapped_quantity_rejected() {
        let mut hull = test_hull();
        hull.waterplane_area = Some(Quantity::volume(2_000.0, LengthUnit::Meter));
        let err = calculate(&hull, &CoefficientSettings::default()).unwrap_err();
        assert_eq!(err, CalcError::dimension_mismatch("area", 2, 3));
    }

    #[test]
    fn test_serialization() {
        let hull = test_hull();
        let json = serde_json::to_string_pretty(&hull).unwrap();
        let roundtrip: HullFormInput = serde_json::from_str(&json).unwrap();
        assert_eq!(hull, roundtrip);
    }
}
