use serde::{Deserialize, Serialize};

use crate::math::Vec2;
use crate::orbital::OrbitalElements;

// ---------------------------------------------------------------------------
// Simulation constants
// ---------------------------------------------------------------------------

/// Reference physics step. Tick calls are quantized onto this grid.
pub const FIXED_DT: f64 = 0.01; // s

/// Eastward equatorial surface rotation speed.
pub const V_SURFACE: f64 = 465.1; // m/s

pub const MIN_TIME_SCALE: f64 = 1.0;
pub const MAX_TIME_SCALE: f64 = 100.0;

/// Per-frame real-time cap applied by the driver.
pub const MAX_FRAME_DT: f64 = 0.1; // s

/// Orbital elements are attached to snapshots only above this altitude;
/// below it they are numerically noisy and meaningless.
pub const SNAPSHOT_ORBIT_ALTITUDE: f64 = 50_000.0; // m

// ---------------------------------------------------------------------------
// Continuous state
// ---------------------------------------------------------------------------

/// Continuous state of the vehicle, overwritten every micro-step.
#[derive(Debug, Clone)]
pub struct SimState {
    pub position: Vec2, // m from body center
    pub velocity: Vec2, // m/s
    pub mass: f64,      // kg, total wet including all remaining stages + payload
    pub time: f64,      // s since ignition
    pub altitude: f64,  // m above surface, cached |position| - R
    pub fuel: f64,      // kg remaining in the active stage
}

impl SimState {
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

// ---------------------------------------------------------------------------
// Flight record value types
// ---------------------------------------------------------------------------

/// End-of-tick state sample, appended once per tick and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightSnapshot {
    pub time: f64,
    pub altitude: f64,
    pub speed: f64,
    pub mass: f64,
    pub fuel: f64,
    pub active_stage: usize,
    pub throttle: f64,
    pub pitch_deg: f64,
    pub position: Vec2,
    pub orbit: Option<OrbitalElements>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Ignition,
    StageSeparation,
    FuelDepleted,
    BurnStart,
    BurnStop,
    Abort,
    OrbitAchieved,
}

/// A discrete event in the flight log. Timestamps are non-decreasing;
/// events sharing a timestamp are ordered by emission index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightEvent {
    pub time: f64,
    pub kind: EventKind,
    pub stage: Option<usize>,
    pub label: String,
}

/// Terminal classification of a flight. Set exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    OrbitAchieved,
    MissionComplete,
    Crash,
    Suborbital,
    Aborted,
    FuelExhausted,
}

impl Outcome {
    /// Outcomes that count as mission success for scoring and bonuses.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::OrbitAchieved | Outcome::MissionComplete)
    }
}

/// Immutable record of a finished flight.
///
/// `total_delta_v_used` accumulates |d|v|| per micro-step: it captures
/// acceleration magnitude along the speed axis and counts both gains and
/// losses. The scoring contract is written against this measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightResult {
    pub outcome: Outcome,
    pub history: Vec<FlightSnapshot>,
    pub final_orbit: Option<OrbitalElements>,
    pub total_delta_v_used: f64, // m/s
    pub max_altitude: f64,       // m
    pub flight_duration: f64,    // s
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
