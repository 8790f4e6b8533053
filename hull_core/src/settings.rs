//! # Calculator Settings
//!
//! Configuration for the coefficient calculator. Settings are plain serde
//! structs so they can be stored alongside other configuration as JSON.
//!
//! ## Example
//!
//! ```rust
//! use hull_core::settings::{CoefficientSettings, DimensionPolicy};
//!
//! let settings = CoefficientSettings::from_json(r#"{ "dimension_policy": "strict" }"#).unwrap();
//! assert!(settings.dimension_policy.is_strict());
//!
//! // Missing fields fall back to defaults
//! let defaults = CoefficientSettings::from_json("{}").unwrap();
//! assert_eq!(defaults.dimension_policy, DimensionPolicy::Lenient);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// How arguments without the declared dimension are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionPolicy {
    /// Every argument must carry its declared exponent; bare numbers are rejected
    Strict,
    /// Bare numbers are coerced into the call's reference unit before computing
    #[default]
    Lenient,
}

impl DimensionPolicy {
    /// True when mismatches are rejected rather than coerced
    pub fn is_strict(self) -> bool {
        matches!(self, DimensionPolicy::Strict)
    }
}

impl From<bool> for DimensionPolicy {
    fn from(strict: bool) -> Self {
        if strict {
            DimensionPolicy::Strict
        } else {
            DimensionPolicy::Lenient
        }
    }
}

/// Settings shared by every coefficient calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoefficientSettings {
    /// Dimension checking policy applied to each argument
    pub dimension_policy: DimensionPolicy,
}

impl CoefficientSettings {
    /// Settings with the given dimension policy
    pub fn new(dimension_policy: DimensionPolicy) -> Self {
        CoefficientSettings { dimension_policy }
    }

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
