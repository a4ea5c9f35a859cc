//! Mapper facade
//!
//! The mapping pipeline exposes one configuration object per integrator. A `Mapper`
//! owns all of them for the lifetime of the pipeline; parameter binding only ever
//! reaches them through the mutable accessors below.

/// Per-integrator configuration
pub mod integrators;
/// Weighting function selection
pub mod weighting;

pub use integrators::{
    ColorIntegrator, EsdfIntegrator, MeshIntegrator, OccupancyDecayIntegrator,
    OccupancyIntegrator, TsdfIntegrator, DEFAULT_LIDAR_MAX_INTEGRATION_DISTANCE_M,
};
pub use weighting::{
    resolve_weighting_function, UnknownWeightingFunction, WeightingFunctionType,
    DEFAULT_WEIGHTING_FUNCTION_TYPE,
};

use serde::{Deserialize, Serialize};

/// Integrator configuration of a single mapper instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapper {
    tsdf: TsdfIntegrator,
    occupancy: OccupancyIntegrator,
    lidar_tsdf: TsdfIntegrator,
    lidar_occupancy: OccupancyIntegrator,
    color: ColorIntegrator,
    occupancy_decay: OccupancyDecayIntegrator,
    mesh: MeshIntegrator,
    esdf: EsdfIntegrator,
}

impl Default for Mapper {
    fn default() -> Self {
        Mapper {
            tsdf: TsdfIntegrator::default(),
            occupancy: OccupancyIntegrator::default(),
            lidar_tsdf: TsdfIntegrator::new(DEFAULT_LIDAR_MAX_INTEGRATION_DISTANCE_M),
            lidar_occupancy: OccupancyIntegrator::new(DEFAULT_LIDAR_MAX_INTEGRATION_DISTANCE_M),
            color: ColorIntegrator::default(),
            occupancy_decay: OccupancyDecayIntegrator::default(),
            mesh: MeshIntegrator::default(),
            esdf: EsdfIntegrator::default(),
        }
    }
}

impl Mapper {
    /// Creates a mapper with every integrator at its default configuration
    pub fn new() -> Self {
        Mapper::default()
    }

    /// Camera TSDF integrator
    pub fn tsdf_integrator(&self) -> &TsdfIntegrator {
        &self.tsdf
    }

    /// Camera TSDF integrator, mutable
    pub fn tsdf_integrator_mut(&mut self) -> &mut TsdfIntegrator {
        &mut self.tsdf
    }

    /// Camera occupancy integrator
    pub fn occupancy_integrator(&self) -> &OccupancyIntegrator {
        &self.occupancy
    }

    /// Camera occupancy integrator, mutable
    pub fn occupancy_integrator_mut(&mut self) -> &mut OccupancyIntegrator {
        &mut self.occupancy
    }

    /// Lidar TSDF integrator
    pub fn lidar_tsdf_integrator(&self) -> &TsdfIntegrator {
        &self.lidar_tsdf
    }

    /// Lidar TSDF integrator, mutable
    pub fn lidar_tsdf_integrator_mut(&mut self) -> &mut TsdfIntegrator {
        &mut self.lidar_tsdf
    }

    /// Lidar occupancy integrator
    pub fn lidar_occupancy_integrator(&self) -> &OccupancyIntegrator {
        &self.lidar_occupancy
    }

    /// Lidar occupancy integrator, mutable
    pub fn lidar_occupancy_integrator_mut(&mut self) -> &mut OccupancyIntegrator {
        &mut self.lidar_occupancy
    }

    /// Color integrator
    pub fn color_integrator(&self) -> &ColorIntegrator {
        &self.color
    }

    /// Color integrator, mutable
    pub fn color_integrator_mut(&mut self) -> &mut ColorIntegrator {
        &mut self.color
    }

    /// Occupancy decay integrator
    pub fn occupancy_decay_integrator(&self) -> &OccupancyDecayIntegrator {
        &self.occupancy_decay
    }

    /// Occupancy decay integrator, mutable
    pub fn occupancy_decay_integrator_mut(&mut self) -> &mut OccupancyDecayIntegrator {
        &mut self.occupancy_decay
    }

    /// Mesh integrator
    pub fn mesh_integrator(&self) -> &MeshIntegrator {
        &self.mesh
    }

    /// Mesh integrator, mutable
    pub fn mesh_integrator_mut(&mut self) -> &mut MeshIntegrator {
        &mut self.mesh
    }

    /// ESDF integrator
    pub fn esdf_integrator(&self) -> &EsdfIntegrator {
        &self.esdf
    }

    /// ESDF integrator, mutable
    pub fn esdf_integrator_mut(&mut self) -> &mut EsdfIntegrator {
        &mut self.esdf
    }

    /// Effective integrator configuration as YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lidar_integrators_default_to_longer_range() {
        let mapper = Mapper::new();

        assert_eq!(mapper.tsdf_integrator().max_integration_distance_m(), 7.0);
        assert_eq!(mapper.occupancy_integrator().max_integration_distance_m(), 7.0);
        assert_eq!(
            mapper.lidar_tsdf_integrator().max_integration_distance_m(),
            DEFAULT_LIDAR_MAX_INTEGRATION_DISTANCE_M
        );
        assert_eq!(
            mapper.lidar_occupancy_integrator().max_integration_distance_m(),
            DEFAULT_LIDAR_MAX_INTEGRATION_DISTANCE_M
        );
    }

    #[test]
    fn accessors_reach_distinct_integrators() {
        let mut mapper = Mapper::new();
        mapper.tsdf_integrator_mut().set_max_weight(5.0);

        assert_eq!(mapper.tsdf_integrator().max_weight(), 5.0);
        assert_eq!(mapper.lidar_tsdf_integrator().max_weight(), 100.0);
    }

    #[test]
    fn yaml_dump_round_trips() {
        let mut mapper = Mapper::new();
        mapper.mesh_integrator_mut().set_weld_vertices(true);
        mapper
            .color_integrator_mut()
            .set_weighting_function_type(WeightingFunctionType::Constant);

        let yaml = mapper.to_yaml().unwrap();
        assert!(yaml.contains("weld_vertices: true"));
        assert!(yaml.contains("weighting_function_type: constant"));

        let restored: Mapper = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, mapper);
    }
}
