// src/mapper/weighting.rs
// Weighting functions selectable for the TSDF and color integrators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy controlling how much a new observation counts against existing voxel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightingFunctionType {
    /// Every observation has the same weight
    Constant,
    /// Constant weight, dropping off behind the surface
    ConstantDropoff,
    /// Weight falls with the inverse square of the measured depth
    InverseSquare,
    /// Inverse square weight, dropping off behind the surface
    InverseSquareDropoff,
}

/// Weighting function used when none (or an unknown one) is requested.
pub const DEFAULT_WEIGHTING_FUNCTION_TYPE: WeightingFunctionType =
    WeightingFunctionType::InverseSquare;

impl WeightingFunctionType {
    /// All weighting functions, in declaration order
    pub const ALL: [WeightingFunctionType; 4] = [
        WeightingFunctionType::Constant,
        WeightingFunctionType::ConstantDropoff,
        WeightingFunctionType::InverseSquare,
        WeightingFunctionType::InverseSquareDropoff,
    ];

    /// The parameter token naming this weighting function
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightingFunctionType::Constant => "constant",
            WeightingFunctionType::ConstantDropoff => "constant_dropoff",
            WeightingFunctionType::InverseSquare => "inverse_square",
            WeightingFunctionType::InverseSquareDropoff => "inverse_square_dropoff",
        }
    }
}

impl Default for WeightingFunctionType {
    fn default() -> Self {
        DEFAULT_WEIGHTING_FUNCTION_TYPE
    }
}

impl fmt::Display for WeightingFunctionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by the strict parser for a token naming no weighting function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeightingFunction(pub String);

impl fmt::Display for UnknownWeightingFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown weighting function: \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownWeightingFunction {}

impl FromStr for WeightingFunctionType {
    type Err = UnknownWeightingFunction;

    // Exact match only: no trimming, no case folding.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        WeightingFunctionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| UnknownWeightingFunction(token.to_string()))
    }
}

/// Resolves a `weighting_mode` token, falling back to the default with a warning.
///
/// Never fails: unrecognized tokens (the empty string included) log exactly one
/// warning naming the token and the substituted default.
pub fn resolve_weighting_function(token: &str) -> WeightingFunctionType {
    match token.parse() {
        Ok(kind) => kind,
        Err(UnknownWeightingFunction(unknown)) => {
            log::warn!(
                "Requested weighting function: \"{}\" not recognized. Defaulting to: {}",
                unknown,
                DEFAULT_WEIGHTING_FUNCTION_TYPE
            );
            DEFAULT_WEIGHTING_FUNCTION_TYPE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{captured_warnings, clear_captured_logs};
    use rstest::rstest;

    #[rstest]
    #[case("constant", WeightingFunctionType::Constant)]
    #[case("constant_dropoff", WeightingFunctionType::ConstantDropoff)]
    #[case("inverse_square", WeightingFunctionType::InverseSquare)]
    #[case("inverse_square_dropoff", WeightingFunctionType::InverseSquareDropoff)]
    fn known_tokens_resolve_without_warning(
        #[case] token: &str,
        #[case] expected: WeightingFunctionType,
    ) {
        clear_captured_logs();

        assert_eq!(resolve_weighting_function(token), expected);
        assert!(captured_warnings().is_empty());
    }

    #[rstest]
    #[case("bogus")]
    #[case("")]
    #[case("Constant")]
    #[case(" constant")]
    #[case("inverse_square ")]
    #[case("INVERSE_SQUARE_DROPOFF")]
    fn unknown_tokens_fall_back_with_one_warning(#[case] token: &str) {
        clear_captured_logs();

        assert_eq!(
            resolve_weighting_function(token),
            DEFAULT_WEIGHTING_FUNCTION_TYPE
        );

        let warnings = captured_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(&format!("\"{}\"", token)));
        assert!(warnings[0].contains("inverse_square"));
    }

    #[test]
    fn known_tokens_map_to_distinct_types() {
        let resolved: Vec<_> = WeightingFunctionType::ALL
            .iter()
            .map(|kind| resolve_weighting_function(kind.as_str()))
            .collect();

        assert_eq!(resolved, WeightingFunctionType::ALL.to_vec());
        for (i, a) in resolved.iter().enumerate() {
            for b in &resolved[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn strict_parse_reports_the_token() {
        let err = "dropoff".parse::<WeightingFunctionType>().unwrap_err();
        assert_eq!(err, UnknownWeightingFunction("dropoff".to_string()));
        assert_eq!(err.to_string(), "unknown weighting function: \"dropoff\"");
    }

    #[test]
    fn serializes_as_its_token() {
        let yaml = serde_yaml::to_string(&WeightingFunctionType::ConstantDropoff).unwrap();
        assert_eq!(yaml.trim(), "constant_dropoff");
    }
}
