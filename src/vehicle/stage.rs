use serde::{Deserialize, Serialize};

use crate::math::lerp;
use crate::propulsion;
use crate::vehicle::engine::{self, EngineDef};
use crate::vehicle::rocket::ConfigError;

// ---------------------------------------------------------------------------
// Stage configuration (frozen)
// ---------------------------------------------------------------------------

/// One engine type mounted `count` times on a stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineMount {
    pub engine_id: String,
    pub count: u32,
}

/// Frozen description of one stage, bottom stage first in the rocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    pub engines: Vec<EngineMount>,
    pub fuel_mass: f64,       // kg, initial propellant load
    pub structural_mass: f64, // kg, tanks + adapters + fairings
}

// ---------------------------------------------------------------------------
// Stage runtime (the mutable projection the simulator owns)
// ---------------------------------------------------------------------------

/// Per-stage mutable state plus aggregates resolved from the engine catalog.
#[derive(Debug, Clone)]
pub struct StageRuntime {
    pub engines: Vec<(EngineDef, u32)>,
    pub fuel_capacity: f64,
    pub fuel_remaining: f64,
    pub dry_mass: f64,         // structure + engine hardware
    pub thrust_sea_level: f64, // N, all engines combined
    pub thrust_vacuum: f64,
    pub isp_sea_level: f64, // s, thrust-weighted average
    pub isp_vacuum: f64,
    pub mass_flow_vacuum: f64, // kg/s at the vacuum reference point
}

impl StageRuntime {
    /// Resolve a stage config against the engine catalog.
    ///
    /// Fails on unresolved engine ids, negative masses, or a stage that
    /// mounts engines while having zero wet mass.
    pub fn new(config: &StageConfig, catalog: &[EngineDef]) -> Result<Self, ConfigError> {
        if config.fuel_mass < 0.0 || config.structural_mass < 0.0 {
            return Err(ConfigError::NegativeMass);
        }

        let mut engines = Vec::with_capacity(config.engines.len());
        for mount in &config.engines {
            let def = engine::resolve(catalog, &mount.engine_id)
                .ok_or_else(|| ConfigError::UnknownEngine(mount.engine_id.clone()))?;
            engines.push((def.clone(), mount.count));
        }

        let engine_mass: f64 = engines.iter().map(|(e, n)| e.dry_mass * *n as f64).sum();
        let wet_mass = config.fuel_mass + config.structural_mass + engine_mass;
        if wet_mass <= 0.0 && !engines.is_empty() {
            return Err(ConfigError::ZeroMassStage);
        }

        let thrust_sea_level: f64 = engines
            .iter()
            .map(|(e, n)| e.thrust_sea_level * *n as f64)
            .sum();
        let thrust_vacuum: f64 = engines
            .iter()
            .map(|(e, n)| e.thrust_vacuum * *n as f64)
            .sum();

        // Thrust-weighted Isp averages across the engine cluster.
        let isp_sea_level = if thrust_sea_level > 0.0 {
            engines
                .iter()
                .map(|(e, n)| e.isp_sea_level * e.thrust_sea_level * *n as f64)
                .sum::<f64>()
                / thrust_sea_level
        } else {
            0.0
        };
        let isp_vacuum = if thrust_vacuum > 0.0 {
            engines
                .iter()
                .map(|(e, n)| e.isp_vacuum * e.thrust_vacuum * *n as f64)
                .sum::<f64>()
                / thrust_vacuum
        } else {
            0.0
        };

        Ok(StageRuntime {
            fuel_capacity: config.fuel_mass,
            fuel_remaining: config.fuel_mass,
            dry_mass: config.structural_mass + engine_mass,
            thrust_sea_level,
            thrust_vacuum,
            isp_sea_level,
            isp_vacuum,
            mass_flow_vacuum: propulsion::mass_flow_rate(thrust_vacuum, isp_vacuum),
            engines,
        })
    }

    /// Mass of the stage as currently loaded (dry + remaining fuel).
    pub fn current_mass(&self) -> f64 {
        self.dry_mass + self.fuel_remaining
    }

    /// Mass of the stage as initially loaded.
    pub fn wet_mass(&self) -> f64 {
        self.dry_mass + self.fuel_capacity
    }

    /// Combined thrust at the sea-level/vacuum blend factor `f` in [0, 1].
    pub fn effective_thrust(&self, f: f64) -> f64 {
        lerp(self.thrust_sea_level, self.thrust_vacuum, f)
    }

    /// Cluster Isp at the blend factor `f` in [0, 1].
    pub fn effective_isp(&self, f: f64) -> f64 {
        lerp(self.isp_sea_level, self.isp_vacuum, f)
    }

    /// The engine whose throttle limits govern the stage.
    pub fn primary_engine(&self) -> Option<&EngineDef> {
        self.engines.first().map(|(e, _)| e)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
