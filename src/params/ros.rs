// src/params/ros.rs
// Parameter lookups against the parameters declared on a ROS 2 node.

use super::{ParameterSource, ParameterValue};
use r2r::Node;

impl ParameterValue {
    /// Converts a ROS 2 parameter value. Arrays and unset values have no scalar form.
    pub fn from_ros(value: &r2r::ParameterValue) -> Option<Self> {
        match value {
            r2r::ParameterValue::Bool(value) => Some(ParameterValue::Bool(*value)),
            r2r::ParameterValue::Integer(value) => Some(ParameterValue::Integer(*value)),
            r2r::ParameterValue::Double(value) => Some(ParameterValue::Float(*value)),
            r2r::ParameterValue::String(value) => Some(ParameterValue::String(value.clone())),
            _ => None,
        }
    }
}

/// Reads parameters from an `r2r` node.
///
/// Parameters are read at lookup time; nothing is cached, and the node is only
/// borrowed for as long as binding takes.
pub struct RosParameterSource<'a> {
    node: &'a Node,
}

impl<'a> RosParameterSource<'a> {
    /// Wraps a node whose parameters have already been declared
    pub fn new(node: &'a Node) -> Self {
        RosParameterSource { node }
    }

    fn lookup(&self, key: &str) -> Option<ParameterValue> {
        // A poisoned lock reads as "no parameters", same as an absent key.
        let params = self.node.params.lock().ok()?;
        ParameterValue::from_ros(&params.get(key)?.value)
    }
}

impl ParameterSource for RosParameterSource<'_> {
    fn get_float(&self, key: &str) -> Option<f32> {
        self.lookup(key)?.as_float()
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.lookup(key)?.as_bool()
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.lookup(key)?.as_string()
    }
}
