use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vehicle::engine::EngineDef;
use crate::vehicle::stage::{StageConfig, StageRuntime};

// ---------------------------------------------------------------------------
// Configuration errors (construction time only; the hot path has none)
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("engine id does not resolve against the catalog: {0}")]
    UnknownEngine(String),
    #[error("rocket has no stages")]
    NoStages,
    #[error("negative mass in stage configuration")]
    NegativeMass,
    #[error("stage mounts engines but has zero wet mass")]
    ZeroMassStage,
    #[error("payload mass must be non-negative")]
    NegativePayload,
}

// ---------------------------------------------------------------------------
// Rocket configuration (frozen for the entire flight)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    pub name: String,
    pub mass: f64, // kg
}

/// Frozen multi-stage rocket description. Stage 0 is the bottom stage and
/// ignites first; stages are consumed strictly bottom-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketConfig {
    pub stages: Vec<StageConfig>,
    pub payload: Payload,
    pub total_cost: f64,     // mission currency
    pub total_mass: f64,     // kg, derived wet mass including payload
    pub total_dry_mass: f64, // kg, derived
}

impl RocketConfig {
    /// Validate a stage stack against the engine catalog and derive totals.
    pub fn new(
        stages: Vec<StageConfig>,
        payload: Payload,
        total_cost: f64,
        catalog: &[EngineDef],
    ) -> Result<Self, ConfigError> {
        if stages.is_empty() {
            return Err(ConfigError::NoStages);
        }
        if payload.mass < 0.0 {
            return Err(ConfigError::NegativePayload);
        }

        let mut total_mass = payload.mass;
        let mut total_dry_mass = payload.mass;
        for config in &stages {
            let runtime = StageRuntime::new(config, catalog)?;
            total_mass += runtime.wet_mass();
            total_dry_mass += runtime.dry_mass;
        }

        Ok(RocketConfig {
            stages,
            payload,
            total_cost,
            total_mass,
            total_dry_mass,
        })
    }
}

// ---------------------------------------------------------------------------
// Rocket builder
// ---------------------------------------------------------------------------

pub struct RocketBuilder {
    stages: Vec<StageConfig>,
    payload: Payload,
    total_cost: f64,
}

impl RocketBuilder {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            payload: Payload { name: "none".into(), mass: 0.0 },
            total_cost: 0.0,
        }
    }

    pub fn stage(mut self, stage: StageConfig) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn payload(mut self, name: impl Into<String>, mass: f64) -> Self {
        self.payload = Payload { name: name.into(), mass };
        self
    }

    pub fn cost(mut self, total_cost: f64) -> Self {
        self.total_cost = total_cost;
        self
    }

    pub fn build(self, catalog: &[EngineDef]) -> Result<RocketConfig, ConfigError> {
        RocketConfig::new(self.stages, self.payload, self.total_cost, catalog)
    }
}

impl Default for RocketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::stage::EngineMount;

    fn catalog() -> Vec<EngineDef> {
        vec![EngineDef {
            id: "m-1".into(),
            thrust_sea_level: 900_000.0,
            thrust_vacuum: 1_000_000.0,
            isp_sea_level: 280.0,
            isp_vacuum: 310.0,
            dry_mass: 1_000.0,
            throttleable: true,
            min_throttle: 0.5,
            restartable: false,
        }]
    }

    fn stage(fuel: f64) -> StageConfig {
        StageConfig {
            engines: vec![EngineMount { engine_id: "m-1".into(), count: 1 }],
            fuel_mass: fuel,
            structural_mass: 2_000.0,
        }
    }

    #[test]
    fn totals_include_payload_and_engines() {
        let rocket = RocketBuilder::new()
            .stage(stage(30_000.0))
            .stage(stage(8_000.0))
            .payload("CubeSat", 500.0)
            .cost(42_000_000.0)
            .build(&catalog())
            .unwrap();

        // Per stage: fuel + 2000 structure + 1000 engine.
        assert!((rocket.total_mass - (33_000.0 + 11_000.0 + 500.0)).abs() < 1e-9);
        assert!((rocket.total_dry_mass - (3_000.0 + 3_000.0 + 500.0)).abs() < 1e-9);
        assert_eq!(rocket.stages.len(), 2);
    }

    #[test]
    fn empty_stack_rejected() {
        let err = RocketBuilder::new().payload("x", 1.0).build(&catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::NoStages));
    }

    #[test]
    fn unknown_engine_rejected_at_build() {
        let mut bad = stage(10_000.0);
        bad.engines[0].engine_id = "ghost".into();
        let err = RocketBuilder::new().stage(bad).build(&catalog()).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEngine(_)));
    }

    #[test]
    fn negative_payload_rejected() {
        let err = RocketBuilder::new()
            .stage(stage(10_000.0))
            .payload("anti-matter", -1.0)
            .build(&catalog())
            .unwrap_err();
        assert!(matches!(err, ConfigError::NegativePayload));
    }
}
