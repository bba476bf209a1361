pub mod engine;
pub mod rocket;
pub mod stage;

pub use engine::EngineDef;
pub use rocket::{ConfigError, Payload, RocketBuilder, RocketConfig};
pub use stage::{EngineMount, StageConfig, StageRuntime};
