// src/mapper/integrators.rs
// Tunable configuration of each integrator in the mapping pipeline. These hold
// parameters only; fusion, decay, meshing and distance propagation live elsewhere.

use super::weighting::WeightingFunctionType;
use serde::{Deserialize, Serialize};

/// Default range limit for camera-driven projective integration
pub const DEFAULT_MAX_INTEGRATION_DISTANCE_M: f32 = 7.0;
/// Default range limit for lidar-driven projective integration
pub const DEFAULT_LIDAR_MAX_INTEGRATION_DISTANCE_M: f32 = 10.0;
/// Default truncation band, in voxels
pub const DEFAULT_TRUNCATION_DISTANCE_VOX: f32 = 4.0;

/// Projective TSDF integrator (camera or lidar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsdfIntegrator {
    max_integration_distance_m: f32,
    truncation_distance_vox: f32,
    max_weight: f32,
    weighting_function_type: WeightingFunctionType,
}

impl TsdfIntegrator {
    /// Creates a TSDF integrator that ignores measurements beyond `max_integration_distance_m`
    pub fn new(max_integration_distance_m: f32) -> Self {
        TsdfIntegrator {
            max_integration_distance_m,
            truncation_distance_vox: DEFAULT_TRUNCATION_DISTANCE_VOX,
            max_weight: 100.0,
            weighting_function_type: WeightingFunctionType::default(),
        }
    }

    /// Maximum measurement range integrated, in meters
    pub fn max_integration_distance_m(&self) -> f32 {
        self.max_integration_distance_m
    }

    /// Sets the maximum measurement range integrated, in meters
    pub fn set_max_integration_distance_m(&mut self, value: f32) {
        self.max_integration_distance_m = value;
    }

    /// Truncation band, in voxels
    pub fn truncation_distance_vox(&self) -> f32 {
        self.truncation_distance_vox
    }

    /// Sets the truncation band, in voxels
    pub fn set_truncation_distance_vox(&mut self, value: f32) {
        self.truncation_distance_vox = value;
    }

    /// Upper bound on accumulated voxel weight
    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    /// Sets the upper bound on accumulated voxel weight
    pub fn set_max_weight(&mut self, value: f32) {
        self.max_weight = value;
    }

    /// Weighting applied to new observations
    pub fn weighting_function_type(&self) -> WeightingFunctionType {
        self.weighting_function_type
    }

    /// Sets the weighting applied to new observations
    pub fn set_weighting_function_type(&mut self, value: WeightingFunctionType) {
        self.weighting_function_type = value;
    }
}

impl Default for TsdfIntegrator {
    fn default() -> Self {
        TsdfIntegrator::new(DEFAULT_MAX_INTEGRATION_DISTANCE_M)
    }
}

/// Projective occupancy integrator (camera or lidar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyIntegrator {
    max_integration_distance_m: f32,
    truncation_distance_vox: f32,
    free_region_occupancy_probability: f32,
    occupied_region_occupancy_probability: f32,
    unobserved_region_occupancy_probability: f32,
    occupied_region_half_width_m: f32,
}

impl OccupancyIntegrator {
    /// Creates an occupancy integrator that ignores measurements beyond `max_integration_distance_m`
    pub fn new(max_integration_distance_m: f32) -> Self {
        OccupancyIntegrator {
            max_integration_distance_m,
            truncation_distance_vox: DEFAULT_TRUNCATION_DISTANCE_VOX,
            free_region_occupancy_probability: 0.3,
            occupied_region_occupancy_probability: 0.7,
            unobserved_region_occupancy_probability: 0.5,
            occupied_region_half_width_m: 0.1,
        }
    }

    /// Maximum measurement range integrated, in meters
    pub fn max_integration_distance_m(&self) -> f32 {
        self.max_integration_distance_m
    }

    /// Sets the maximum measurement range integrated, in meters
    pub fn set_max_integration_distance_m(&mut self, value: f32) {
        self.max_integration_distance_m = value;
    }

    /// Truncation band, in voxels
    pub fn truncation_distance_vox(&self) -> f32 {
        self.truncation_distance_vox
    }

    /// Sets the truncation band, in voxels
    pub fn set_truncation_distance_vox(&mut self, value: f32) {
        self.truncation_distance_vox = value;
    }

    /// Occupancy probability assigned in front of a measured surface
    pub fn free_region_occupancy_probability(&self) -> f32 {
        self.free_region_occupancy_probability
    }

    /// Sets the occupancy probability assigned in front of a measured surface
    pub fn set_free_region_occupancy_probability(&mut self, value: f32) {
        self.free_region_occupancy_probability = value;
    }

    /// Occupancy probability assigned around a measured surface
    pub fn occupied_region_occupancy_probability(&self) -> f32 {
        self.occupied_region_occupancy_probability
    }

    /// Sets the occupancy probability assigned around a measured surface
    pub fn set_occupied_region_occupancy_probability(&mut self, value: f32) {
        self.occupied_region_occupancy_probability = value;
    }

    /// Occupancy probability assigned behind a measured surface
    pub fn unobserved_region_occupancy_probability(&self) -> f32 {
        self.unobserved_region_occupancy_probability
    }

    /// Sets the occupancy probability assigned behind a measured surface
    pub fn set_unobserved_region_occupancy_probability(&mut self, value: f32) {
        self.unobserved_region_occupancy_probability = value;
    }

    /// Half width of the occupied band around a surface, in meters
    pub fn occupied_region_half_width_m(&self) -> f32 {
        self.occupied_region_half_width_m
    }

    /// Sets the half width of the occupied band around a surface, in meters
    pub fn set_occupied_region_half_width_m(&mut self, value: f32) {
        self.occupied_region_half_width_m = value;
    }
}

impl Default for OccupancyIntegrator {
    fn default() -> Self {
        OccupancyIntegrator::new(DEFAULT_MAX_INTEGRATION_DISTANCE_M)
    }
}

/// Color integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorIntegrator {
    max_integration_distance_m: f32,
    weighting_function_type: WeightingFunctionType,
}

impl ColorIntegrator {
    /// Maximum measurement range integrated, in meters
    pub fn max_integration_distance_m(&self) -> f32 {
        self.max_integration_distance_m
    }

    /// Sets the maximum measurement range integrated, in meters
    pub fn set_max_integration_distance_m(&mut self, value: f32) {
        self.max_integration_distance_m = value;
    }

    /// Weighting applied to new observations
    pub fn weighting_function_type(&self) -> WeightingFunctionType {
        self.weighting_function_type
    }

    /// Sets the weighting applied to new observations
    pub fn set_weighting_function_type(&mut self, value: WeightingFunctionType) {
        self.weighting_function_type = value;
    }
}

impl Default for ColorIntegrator {
    fn default() -> Self {
        ColorIntegrator {
            max_integration_distance_m: DEFAULT_MAX_INTEGRATION_DISTANCE_M,
            weighting_function_type: WeightingFunctionType::default(),
        }
    }
}

/// Decays occupancy of voxels that are no longer observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyDecayIntegrator {
    free_region_decay_probability: f32,
    occupied_region_decay_probability: f32,
}

impl OccupancyDecayIntegrator {
    /// Probability free voxels decay towards per step
    pub fn free_region_decay_probability(&self) -> f32 {
        self.free_region_decay_probability
    }

    /// Sets the decay probability of free voxels
    pub fn set_free_region_decay_probability(&mut self, value: f32) {
        self.free_region_decay_probability = value;
    }

    /// Probability occupied voxels decay towards per step
    pub fn occupied_region_decay_probability(&self) -> f32 {
        self.occupied_region_decay_probability
    }

    /// Sets the decay probability of occupied voxels
    pub fn set_occupied_region_decay_probability(&mut self, value: f32) {
        self.occupied_region_decay_probability = value;
    }
}

impl Default for OccupancyDecayIntegrator {
    fn default() -> Self {
        OccupancyDecayIntegrator {
            free_region_decay_probability: 0.55,
            occupied_region_decay_probability: 0.4,
        }
    }
}

/// Extracts a surface mesh from the TSDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshIntegrator {
    min_weight: f32,
    weld_vertices: bool,
}

impl MeshIntegrator {
    /// Voxels lighter than this are left out of the mesh
    pub fn min_weight(&self) -> f32 {
        self.min_weight
    }

    /// Sets the minimum voxel weight
    pub fn set_min_weight(&mut self, value: f32) {
        self.min_weight = value;
    }

    /// Whether duplicate vertices are merged after extraction
    pub fn weld_vertices(&self) -> bool {
        self.weld_vertices
    }

    /// Sets whether duplicate vertices are merged
    pub fn set_weld_vertices(&mut self, value: bool) {
        self.weld_vertices = value;
    }
}

impl Default for MeshIntegrator {
    fn default() -> Self {
        MeshIntegrator {
            min_weight: 1e-4,
            weld_vertices: false,
        }
    }
}

/// Computes the Euclidean signed distance field from the TSDF or occupancy layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsdfIntegrator {
    min_weight: f32,
    max_site_distance_vox: f32,
    max_distance_m: f32,
}

impl EsdfIntegrator {
    /// Voxels lighter than this are not used as sites
    pub fn min_weight(&self) -> f32 {
        self.min_weight
    }

    /// Sets the minimum voxel weight
    pub fn set_min_weight(&mut self, value: f32) {
        self.min_weight = value;
    }

    /// How far from the surface a voxel may be and still count as a site, in voxels
    pub fn max_site_distance_vox(&self) -> f32 {
        self.max_site_distance_vox
    }

    /// Sets the site distance limit, in voxels
    pub fn set_max_site_distance_vox(&mut self, value: f32) {
        self.max_site_distance_vox = value;
    }

    /// Distances are propagated no further than this, in meters
    pub fn max_distance_m(&self) -> f32 {
        self.max_distance_m
    }

    /// Sets the propagation limit, in meters
    pub fn set_max_distance_m(&mut self, value: f32) {
        self.max_distance_m = value;
    }
}

impl Default for EsdfIntegrator {
    fn default() -> Self {
        EsdfIntegrator {
            min_weight: 1e-4,
            max_site_distance_vox: 1.0,
            max_distance_m: 2.0,
        }
    }
}
