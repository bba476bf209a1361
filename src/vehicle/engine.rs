use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Engine definition (frozen catalog data, supplied by the builder)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineDef {
    pub id: String,
    pub thrust_sea_level: f64, // N
    pub thrust_vacuum: f64,    // N
    pub isp_sea_level: f64,    // s
    pub isp_vacuum: f64,       // s
    pub dry_mass: f64,         // kg
    pub throttleable: bool,
    pub min_throttle: f64, // fraction of full thrust, [0, 1]
    pub restartable: bool,
}

/// Look up an engine definition by id.
pub fn resolve<'a>(catalog: &'a [EngineDef], id: &str) -> Option<&'a EngineDef> {
    catalog.iter().find(|e| e.id == id)
}
