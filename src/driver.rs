use log::info;

use crate::scoring::{self, ScoreBreakdown};
use crate::sim::{FlightResult, FlightSimulator, Outcome, MAX_FRAME_DT};

// ---------------------------------------------------------------------------
// Control commands and the autopilot seam
// ---------------------------------------------------------------------------

/// One frame's worth of control input. `None` fields leave the current
/// setting untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlCommand {
    pub throttle: Option<f64>,
    pub pitch_deg: Option<f64>,
    pub time_scale: Option<f64>,
    pub stage: bool,
    pub abort: bool,
}

/// Trait for flight controllers plugged into the driver loop.
///
/// Commands are applied between ticks, never mid-step.
pub trait Autopilot {
    fn update(&mut self, sim: &FlightSimulator) -> ControlCommand;

    fn name(&self) -> &str {
        "unnamed"
    }
}

// ---------------------------------------------------------------------------
// Driver: real-frame pump around the simulator
// ---------------------------------------------------------------------------

/// Pumps real-time deltas into the simulator and scores the flight once it
/// terminates. The host calls `pump` from its frame scheduler.
pub struct FlightDriver {
    sim: FlightSimulator,
    score: Option<ScoreBreakdown>,
}

impl FlightDriver {
    pub fn new(sim: FlightSimulator) -> Self {
        FlightDriver { sim, score: None }
    }

    pub fn start(&mut self) {
        self.sim.start();
    }

    /// Advance one real frame, capped at 0.1 s to prevent a spiral of
    /// death after a long stall. Returns true while the flight is running.
    pub fn pump(&mut self, dt_real: f64) -> bool {
        let dt = dt_real.min(MAX_FRAME_DT);

        // Mission time-limit hook; missions without one never trip it.
        if let Some(limit) = self.sim.mission().time_limit {
            if self.sim.running() && self.sim.current_state().time > limit {
                self.sim.abort();
            }
        }

        self.sim.tick(dt);

        if self.sim.current_outcome().is_some() {
            self.finalize_score();
            return false;
        }
        true
    }

    /// Apply a control command between ticks.
    pub fn apply(&mut self, cmd: &ControlCommand) {
        if let Some(throttle) = cmd.throttle {
            self.sim.set_throttle(throttle);
        }
        if let Some(pitch) = cmd.pitch_deg {
            self.sim.set_pitch(pitch);
        }
        if let Some(scale) = cmd.time_scale {
            self.sim.set_time_scale(scale);
        }
        if cmd.stage {
            self.sim.trigger_stage_separation();
        }
        if cmd.abort {
            self.sim.abort();
        }
    }

    /// Fly under an autopilot at a fixed frame cadence until the flight
    /// terminates or `max_frames` elapse. Returns the terminal outcome.
    pub fn run_with(
        &mut self,
        autopilot: &mut dyn Autopilot,
        frame_dt: f64,
        max_frames: usize,
    ) -> Option<Outcome> {
        info!("driver: flying under autopilot '{}'", autopilot.name());
        self.sim.start();
        for _ in 0..max_frames {
            let cmd = autopilot.update(&self.sim);
            self.apply(&cmd);
            if !self.pump(frame_dt) {
                break;
            }
        }
        self.sim.current_outcome()
    }

    pub fn simulator(&self) -> &FlightSimulator {
        &self.sim
    }

    pub fn score(&self) -> Option<&ScoreBreakdown> {
        self.score.as_ref()
    }

    pub fn flight_result(&self) -> Option<FlightResult> {
        self.sim.get_result()
    }

    fn finalize_score(&mut self) {
        if self.score.is_some() {
            return;
        }
        if let Some(result) = self.sim.get_result() {
            let breakdown =
                scoring::score(&result, self.sim.mission(), self.sim.rocket().total_cost);
            info!(
                "driver: flight scored {} ({} stars)",
                breakdown.total_score, breakdown.stars
            );
            self.score = Some(breakdown);
        }
    }
}

// ---------------------------------------------------------------------------
// Gravity-turn ascent program
// ---------------------------------------------------------------------------

/// Altitude-keyed pitch program: vertical below `turn_start_altitude`,
/// ramping linearly to horizontal at `turn_end_altitude`, with an optional
/// engine cutoff once the instantaneous apoapsis clears a mark.
pub struct GravityTurnAutopilot {
    pub turn_start_altitude: f64, // m
    pub turn_end_altitude: f64,   // m
    pub warp: f64,                // requested time acceleration
    pub cutoff_apoapsis: Option<f64>,
}

impl GravityTurnAutopilot {
    pub fn new() -> Self {
        GravityTurnAutopilot {
            turn_start_altitude: 1_000.0,
            turn_end_altitude: 65_000.0,
            warp: 25.0,
            cutoff_apoapsis: None,
        }
    }

    /// Vertical ascent profile for altitude-target missions.
    pub fn vertical() -> Self {
        GravityTurnAutopilot {
            turn_start_altitude: f64::INFINITY,
            turn_end_altitude: f64::INFINITY,
            warp: 25.0,
            cutoff_apoapsis: None,
        }
    }
}

impl Default for GravityTurnAutopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot for GravityTurnAutopilot {
    fn update(&mut self, sim: &FlightSimulator) -> ControlCommand {
        let altitude = sim.current_state().altitude;
        let pitch = if altitude <= self.turn_start_altitude {
            0.0
        } else {
            let span = self.turn_end_altitude - self.turn_start_altitude;
            let frac = ((altitude - self.turn_start_altitude) / span).clamp(0.0, 1.0);
            90.0 * frac
        };

        let throttle = match self.cutoff_apoapsis {
            Some(mark) => match sim.current_orbit() {
                Some(orbit) if orbit.apoapsis >= mark => Some(0.0),
                _ => Some(1.0),
            },
            None => None,
        };

        ControlCommand {
            throttle,
            pitch_deg: Some(pitch),
            time_scale: Some(self.warp),
            ..Default::default()
        }
    }

    fn name(&self) -> &str {
        "gravity-turn"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
