//! Parameter binding
//!
//! Every tunable integrator field is reached through one row of [`BINDINGS`]: a
//! parameter name, the type it is looked up as, and the setters it feeds. Binding
//! walks the table once. A missing or mistyped parameter leaves its targets alone.

use crate::mapper::{resolve_weighting_function, Mapper, WeightingFunctionType};
use crate::params::ParameterSource;
use std::fmt::Debug;

/// One integrator setter fed by a parameter
#[derive(Clone, Copy)]
pub struct Target<T> {
    /// Dotted `integrator.field` name, used in logs
    pub name: &'static str,
    /// Writes the value into the mapper
    pub apply: fn(&mut Mapper, T),
}

/// The setters of one binding, grouped by the type the parameter is read as
#[derive(Clone, Copy)]
pub enum Targets {
    /// Floating point parameter
    Float(&'static [Target<f32>]),
    /// Boolean parameter
    Bool(&'static [Target<bool>]),
    /// String parameter naming a weighting function
    WeightingFunction(&'static [Target<WeightingFunctionType>]),
}

/// Type a parameter is looked up as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// `get_float`
    Float,
    /// `get_bool`
    Bool,
    /// `get_string`
    String,
}

impl Targets {
    /// Type the parameter is looked up as
    pub fn kind(&self) -> ParameterKind {
        match self {
            Targets::Float(_) => ParameterKind::Float,
            Targets::Bool(_) => ParameterKind::Bool,
            Targets::WeightingFunction(_) => ParameterKind::String,
        }
    }

    /// Dotted names of every setter
    pub fn names(&self) -> Vec<&'static str> {
        fn names_of<T>(targets: &[Target<T>]) -> Vec<&'static str> {
            targets.iter().map(|target| target.name).collect()
        }

        match self {
            Targets::Float(targets) => names_of(targets),
            Targets::Bool(targets) => names_of(targets),
            Targets::WeightingFunction(targets) => names_of(targets),
        }
    }
}

/// A parameter name and the setters it feeds
#[derive(Clone, Copy)]
pub struct ParameterBinding {
    /// Parameter key
    pub name: &'static str,
    /// Setters fed by the parameter
    pub targets: Targets,
}

impl ParameterBinding {
    /// Looks the parameter up and, if present, feeds it to every target.
    ///
    /// Returns whether the parameter was found.
    pub fn apply(&self, mapper: &mut Mapper, params: &dyn ParameterSource) -> bool {
        match self.targets {
            Targets::Float(targets) => params
                .get_float(self.name)
                .map(|value| apply_all(mapper, targets, value))
                .is_some(),
            Targets::Bool(targets) => params
                .get_bool(self.name)
                .map(|value| apply_all(mapper, targets, value))
                .is_some(),
            // Unknown tokens still apply, with the default weighting function.
            Targets::WeightingFunction(targets) => params
                .get_string(self.name)
                .map(|token| apply_all(mapper, targets, resolve_weighting_function(&token)))
                .is_some(),
        }
    }
}

fn apply_all<T: Copy + Debug>(mapper: &mut Mapper, targets: &[Target<T>], value: T) {
    for target in targets {
        log::debug!("Setting {} = {:?}", target.name, value);
        (target.apply)(mapper, value);
    }
}

macro_rules! target {
    ($name:literal, $integrator:ident, $setter:ident) => {
        Target {
            name: $name,
            apply: |mapper: &mut Mapper, value| mapper.$integrator().$setter(value),
        }
    };
}

/// Every recognized parameter and the integrator setters it feeds.
///
/// No setter appears in more than one row, so rows can be applied in any order.
pub const BINDINGS: &[ParameterBinding] = &[
    // tsdf or occupancy integrator
    ParameterBinding {
        name: "projective_integrator_max_integration_distance_m",
        targets: Targets::Float(&[
            target!("tsdf.max_integration_distance_m", tsdf_integrator_mut, set_max_integration_distance_m),
            target!("occupancy.max_integration_distance_m", occupancy_integrator_mut, set_max_integration_distance_m),
        ]),
    },
    ParameterBinding {
        name: "lidar_projective_integrator_max_integration_distance_m",
        targets: Targets::Float(&[
            target!("lidar_tsdf.max_integration_distance_m", lidar_tsdf_integrator_mut, set_max_integration_distance_m),
            target!("lidar_occupancy.max_integration_distance_m", lidar_occupancy_integrator_mut, set_max_integration_distance_m),
        ]),
    },
    ParameterBinding {
        name: "projective_integrator_truncation_distance_vox",
        targets: Targets::Float(&[
            target!("tsdf.truncation_distance_vox", tsdf_integrator_mut, set_truncation_distance_vox),
            target!("occupancy.truncation_distance_vox", occupancy_integrator_mut, set_truncation_distance_vox),
            target!("lidar_tsdf.truncation_distance_vox", lidar_tsdf_integrator_mut, set_truncation_distance_vox),
            target!("lidar_occupancy.truncation_distance_vox", lidar_occupancy_integrator_mut, set_truncation_distance_vox),
        ]),
    },
    // tsdf and color integrator; occupancy has no weighting function
    ParameterBinding {
        name: "weighting_mode",
        targets: Targets::WeightingFunction(&[
            target!("tsdf.weighting_function_type", tsdf_integrator_mut, set_weighting_function_type),
            target!("color.weighting_function_type", color_integrator_mut, set_weighting_function_type),
        ]),
    },
    ParameterBinding {
        name: "tsdf_integrator_max_weight",
        targets: Targets::Float(&[
            target!("tsdf.max_weight", tsdf_integrator_mut, set_max_weight),
            target!("lidar_tsdf.max_weight", lidar_tsdf_integrator_mut, set_max_weight),
        ]),
    },
    // occupancy integrator
    ParameterBinding {
        name: "free_region_occupancy_probability",
        targets: Targets::Float(&[
            target!("occupancy.free_region_occupancy_probability", occupancy_integrator_mut, set_free_region_occupancy_probability),
            target!("lidar_occupancy.free_region_occupancy_probability", lidar_occupancy_integrator_mut, set_free_region_occupancy_probability),
        ]),
    },
    ParameterBinding {
        name: "occupied_region_occupancy_probability",
        targets: Targets::Float(&[
            target!("occupancy.occupied_region_occupancy_probability", occupancy_integrator_mut, set_occupied_region_occupancy_probability),
            target!("lidar_occupancy.occupied_region_occupancy_probability", lidar_occupancy_integrator_mut, set_occupied_region_occupancy_probability),
        ]),
    },
    ParameterBinding {
        name: "unobserved_region_occupancy_probability",
        targets: Targets::Float(&[
            target!("occupancy.unobserved_region_occupancy_probability", occupancy_integrator_mut, set_unobserved_region_occupancy_probability),
            target!("lidar_occupancy.unobserved_region_occupancy_probability", lidar_occupancy_integrator_mut, set_unobserved_region_occupancy_probability),
        ]),
    },
    ParameterBinding {
        name: "occupied_region_half_width_m",
        targets: Targets::Float(&[
            target!("occupancy.occupied_region_half_width_m", occupancy_integrator_mut, set_occupied_region_half_width_m),
            target!("lidar_occupancy.occupied_region_half_width_m", lidar_occupancy_integrator_mut, set_occupied_region_half_width_m),
        ]),
    },
    ParameterBinding {
        name: "free_region_decay_probability",
        targets: Targets::Float(&[target!(
            "occupancy_decay.free_region_decay_probability",
            occupancy_decay_integrator_mut,
            set_free_region_decay_probability
        )]),
    },
    ParameterBinding {
        name: "occupied_region_decay_probability",
        targets: Targets::Float(&[target!(
            "occupancy_decay.occupied_region_decay_probability",
            occupancy_decay_integrator_mut,
            set_occupied_region_decay_probability
        )]),
    },
    // mesh integrator
    ParameterBinding {
        name: "mesh_integrator_min_weight",
        targets: Targets::Float(&[target!("mesh.min_weight", mesh_integrator_mut, set_min_weight)]),
    },
    ParameterBinding {
        name: "mesh_integrator_weld_vertices",
        targets: Targets::Bool(&[target!("mesh.weld_vertices", mesh_integrator_mut, set_weld_vertices)]),
    },
    // color integrator
    ParameterBinding {
        name: "color_integrator_max_integration_distance_m",
        targets: Targets::Float(&[target!(
            "color.max_integration_distance_m",
            color_integrator_mut,
            set_max_integration_distance_m
        )]),
    },
    // esdf integrator
    ParameterBinding {
        name: "esdf_integrator_min_weight",
        targets: Targets::Float(&[target!("esdf.min_weight", esdf_integrator_mut, set_min_weight)]),
    },
    ParameterBinding {
        name: "esdf_integrator_max_site_distance_vox",
        targets: Targets::Float(&[target!(
            "esdf.max_site_distance_vox",
            esdf_integrator_mut,
            set_max_site_distance_vox
        )]),
    },
    ParameterBinding {
        name: "esdf_integrator_max_distance_m",
        targets: Targets::Float(&[target!("esdf.max_distance_m", esdf_integrator_mut, set_max_distance_m)]),
    },
];

/// Applies every recognized parameter found in `params` to the mapper's integrators.
///
/// Parameters that are absent, or not convertible to their expected type, leave
/// their integrator fields as they were. Never fails.
pub fn bind_parameters(mapper: &mut Mapper, params: &dyn ParameterSource) {
    log::info!("Initialize Mapper:");

    for binding in BINDINGS {
        binding.apply(mapper, params);
    }
}
