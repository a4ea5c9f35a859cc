//! Runtime parameter sources
//!
//! A parameter source answers typed lookups by key. The binder only ever sees this
//! capability, so parameters can come from a YAML file, from a ROS node, or from a
//! map built in code.

mod map;
#[cfg(feature = "ros")]
mod ros;

pub use map::ParameterMap;
#[cfg(feature = "ros")]
pub use ros::RosParameterSource;

/// Typed lookup by key.
///
/// Each lookup returns `Some` only when the key exists and its value converts to
/// the requested type. Missing keys and type mismatches look the same to callers.
#[cfg_attr(test, mockall::automock)]
pub trait ParameterSource {
    /// Looks up a floating point parameter. Integer values are accepted.
    fn get_float(&self, key: &str) -> Option<f32>;
    /// Looks up a boolean parameter
    fn get_bool(&self, key: &str) -> Option<bool>;
    /// Looks up a string parameter
    fn get_string(&self, key: &str) -> Option<String>;
}

/// A single scalar parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl ParameterValue {
    /// The value as a float, if it is numeric
    pub fn as_float(&self) -> Option<f32> {
        match self {
            ParameterValue::Float(value) => Some(*value as f32),
            ParameterValue::Integer(value) => Some(*value as f32),
            _ => None,
        }
    }

    /// The value as a boolean, if it is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParameterValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as a string, if it is one
    pub fn as_string(&self) -> Option<String> {
        match self {
            ParameterValue::String(value) => Some(value.clone()),
            _ => None,
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Bool(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Float(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

/// Errors raised while loading a parameter source
#[derive(Debug)]
pub enum ParameterError {
    /// Parameter file could not be read
    Io(String),
    /// Parameter file is not valid YAML, or not a mapping
    Parse(String),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParameterError::Io(msg) => write!(f, "Parameter file error: {}", msg),
            ParameterError::Parse(msg) => write!(f, "Parameter parse error: {}", msg),
        }
    }
}

impl std::error::Error for ParameterError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ParameterValue::Float(0.25), Some(0.25))]
    #[case(ParameterValue::Integer(4), Some(4.0))]
    #[case(ParameterValue::Bool(true), None)]
    #[case(ParameterValue::String("4.0".into()), None)]
    fn float_conversion(#[case] value: ParameterValue, #[case] expected: Option<f32>) {
        assert_eq!(value.as_float(), expected);
    }

    #[test]
    fn bool_and_string_conversions_are_strict() {
        assert_eq!(ParameterValue::Integer(1).as_bool(), None);
        assert_eq!(ParameterValue::String("true".into()).as_bool(), None);
        assert_eq!(ParameterValue::Bool(false).as_bool(), Some(false));
        assert_eq!(ParameterValue::Float(1.0).as_string(), None);
        assert_eq!(
            ParameterValue::from("constant").as_string(),
            Some("constant".to_string())
        );
    }
}
