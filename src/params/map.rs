// src/params/map.rs
// In-memory parameter store, usually loaded from a YAML parameter file.

use super::{ParameterError, ParameterSource, ParameterValue};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

// ROS 2 parameter files nest node parameters under this key.
const ROS2_PARAMETERS_KEY: &str = "ros__parameters";

/// Flat key/value parameter store.
///
/// Nested YAML mappings are flattened into `/`-separated keys, so
/// `mapper: {weighting_mode: constant}` is stored as `mapper/weighting_mode`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    values: BTreeMap<String, ParameterValue>,
    namespace: Option<String>,
}

impl ParameterMap {
    /// Creates an empty parameter map
    pub fn new() -> Self {
        ParameterMap::default()
    }

    /// Parses parameters from YAML text.
    ///
    /// The document must be a mapping (or empty). Sequences and nulls are skipped.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ParameterError> {
        let document: Value =
            serde_yaml::from_str(yaml).map_err(|e| ParameterError::Parse(e.to_string()))?;

        let mut map = ParameterMap::new();
        match &document {
            Value::Null => {}
            Value::Mapping(_) => map.flatten("", &document),
            other => {
                return Err(ParameterError::Parse(format!(
                    "expected a mapping of parameters, found {:?}",
                    other
                )));
            }
        }
        Ok(map)
    }

    /// Reads and parses a YAML parameter file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| ParameterError::Io(format!("{}: {}", path.display(), e)))?;

        let map = Self::from_yaml_str(&yaml)?;
        log::info!("Loaded {} parameters from {}", map.len(), path.display());
        Ok(map)
    }

    /// Returns a view of this map where every lookup of `key` reads `namespace/key`
    pub fn scoped(&self, namespace: &str) -> Self {
        let namespace = namespace.trim_matches('/');
        ParameterMap {
            values: self.values.clone(),
            namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
        }
    }

    /// Stores a value under `key`, replacing any previous value.
    ///
    /// Leading slashes are dropped, so `/node/key` and `node/key` name the same
    /// parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        let key = key.into();
        let key = key.trim_start_matches('/');
        if let Some(previous) = self.values.insert(key.to_string(), value.into()) {
            log::debug!("Parameter \"{}\" overrides earlier value {:?}", key, previous);
        }
    }

    /// Builder form of [`ParameterMap::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up a raw value, honouring the namespace
    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        let key = key.trim_start_matches('/');
        match &self.namespace {
            Some(namespace) => self.values.get(&format!("{}/{}", namespace, key)),
            None => self.values.get(key),
        }
    }

    /// Number of stored parameters, regardless of namespace
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no parameters are stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    fn flatten(&mut self, prefix: &str, value: &Value) {
        match value {
            Value::Mapping(mapping) => {
                for (key, child) in mapping {
                    let Some(segment) = key_segment(key) else {
                        log::debug!("Skipping parameter with non-scalar key under \"{}\"", prefix);
                        continue;
                    };
                    // ROS node names are often written `/node`.
                    let segment = segment.trim_matches('/').to_string();
                    let path = if segment == ROS2_PARAMETERS_KEY {
                        prefix.to_string()
                    } else if prefix.is_empty() {
                        segment
                    } else {
                        format!("{}/{}", prefix, segment)
                    };
                    self.flatten(&path, child);
                }
            }
            Value::Tagged(tagged) => self.flatten(prefix, &tagged.value),
            scalar => match scalar_value(scalar) {
                Some(parameter) if !prefix.is_empty() => self.insert(prefix, parameter),
                _ => log::debug!("Skipping unsupported parameter \"{}\"", prefix),
            },
        }
    }
}

fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_value(value: &Value) -> Option<ParameterValue> {
    match value {
        Value::Bool(b) => Some(ParameterValue::Bool(*b)),
        Value::Number(n) => n
            .as_i64()
            .map(ParameterValue::Integer)
            .or_else(|| n.as_f64().map(ParameterValue::Float)),
        Value::String(s) => Some(ParameterValue::String(s.clone())),
        _ => None,
    }
}

impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParameterMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl ParameterSource for ParameterMap {
    fn get_float(&self, key: &str) -> Option<f32> {
        self.get(key)?.as_float()
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key)?.as_string()
    }
}
