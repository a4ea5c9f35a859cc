//! Mapper initialization from runtime parameters
//!
//! This library binds externally supplied parameters (a YAML parameter file, a ROS
//! node's parameters, or a map built in code) onto the integrators of a 3D mapping
//! pipeline: TSDF, occupancy, lidar TSDF, lidar occupancy, color, occupancy decay,
//! mesh and ESDF.
//!
//! ```no_run
//! use mapper_init::{bind_parameters, Mapper, ParameterMap};
//!
//! let params = ParameterMap::from_yaml_file("config/mapper.yaml")?;
//! let mut mapper = Mapper::new();
//! bind_parameters(&mut mapper, &params);
//! # Ok::<(), mapper_init::ParameterError>(())
//! ```

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod binder;
pub mod mapper;
pub mod params;

#[cfg(test)]
mod test_support;

// Re-export commonly used items for easier access
pub use binder::{bind_parameters, ParameterBinding, BINDINGS};
pub use mapper::{resolve_weighting_function, Mapper, WeightingFunctionType};
pub use params::{ParameterError, ParameterMap, ParameterSource, ParameterValue};
#[cfg(feature = "ros")]
pub use params::RosParameterSource;
