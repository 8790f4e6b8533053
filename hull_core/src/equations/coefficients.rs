//! # Coefficients of Form
//!
//! Each coefficient compares a measured quantity of the hull with the
//! smallest rectangular reference shape that circumscribes it. All inputs
//! must be in consistent units; the results are dimensionless.

// =============================================================================
// VOLUMETRIC COEFFICIENTS
// =============================================================================

/// Block coefficient
///
/// ```text
///          ┌──────────────────┐
///        T │  ╲____________╱  │   hull inside the block B × T × L
///          └──────────────────┘
///                   L
/// ```
///
/// # Formula
/// Cb = ∇ / (B × T × L)
///
/// # Arguments
/// * `displacement` - Volume of displacement at the draft
/// * `beam` - Breadth extreme
/// * `draft` - Mean draft
/// * `length` - Length between perpendiculars
///
/// # Example
/// ```rust
/// use hull_core::equations::coefficients::block_coefficient;
///
/// let cb = block_coefficient(13_500.0, 20.0, 8.0, 125.0);
/// assert!((cb - 0.675).abs() < 1e-12);
/// ```
#[inline]
pub fn block_coefficient(displacement: f64, beam: f64, draft: f64, length: f64) -> f64 {
    displacement / (beam * draft * length)
}

/// Longitudinal prismatic coefficient
///
/// Compares the displaced volume with a prism of constant midship section
/// running the full length. Low values mean fine ends.
///
/// # Formula
/// Cp = ∇ / (Am × L)
///
/// Since Am = Cm × B × T, this is equivalently Cp = Cb / Cm.
///
/// # Arguments
/// * `displacement` - Volume of displacement at the draft
/// * `midship_area` - Immersed midship section area
/// * `length` - Length between perpendiculars
#[inline]
pub fn prismatic_coefficient(displacement: f64, midship_area: f64, length: f64) -> f64 {
    displacement / (midship_area * length)
}

// =============================================================================
// AREA COEFFICIENTS
// =============================================================================

/// Waterplane area coefficient
///
/// # Formula
/// Cwp = Aw / (B × L)
///
/// # Arguments
/// * `area` - Waterplane area at the draft
/// * `beam` - Breadth extreme
/// * `length` - Length between perpendiculars
///
/// # Example
/// ```rust
/// use hull_core::equations::coefficients::waterplane_coefficient;
///
/// let cwp = waterplane_coefficient(2000.0, 20.0, 125.0);
/// assert!((cwp - 0.8).abs() < 1e-12);
/// ```
#[inline]
pub fn waterplane_coefficient(area: f64, beam: f64, length: f64) -> f64 {
    area / (beam * length)
}

/// Midship section coefficient
///
/// ```text
///     ┌──────B──────┐
///     │╲           ╱│
///   T │ ╲_________╱ │   section area Am inside B × T
///     └─────────────┘
/// ```
///
/// # Formula
/// Cm = Am / (B × T)
///
/// # Arguments
/// * `area` - Immersed midship section area
/// * `beam` - Breadth extreme
/// * `draft` - Mean draft
#[inline]
pub fn midship_coefficient(area: f64, beam: f64, draft: f64) -> f64 {
    area / (beam * draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_box_is_one() {
        assert_eq!(block_coefficient(1.0, 1.0, 1.0, 1.0), 1.0);
        assert_eq!(waterplane_coefficient(1.0, 1.0, 1.0), 1.0);
        assert_eq!(midship_coefficient(1.0, 1.0, 1.0), 1.0);
        assert_eq!(prismatic_coefficient(1.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_prismatic_is_block_over_midship() {
        let (beam, draft, length) = (20.0, 8.0, 125.0);
        let midship_area = 0.98 * beam * draft;
        let displacement = 13_500.0;

        let cb = block_coefficient(displacement, beam, draft, length);
        let cm = midship_coefficient(midship_area, beam, draft);
        let cp = prismatic_coefficient(displacement, midship_area, length);
        assert!((cp - cb / cm).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominator_is_infinite() {
        // Callers that skip the checked layer get IEEE semantics.
        assert!(block_coefficient(1.0, 0.0, 1.0, 1.0).is_infinite());
    }
}
