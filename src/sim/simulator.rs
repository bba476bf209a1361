use log::{debug, info};

use crate::math::{self, Vec2};
use crate::mission::Mission;
use crate::orbital::OrbitalElements;
use crate::physics::atmosphere::KARMAN_LINE;
use crate::physics::gravity::{self, G0, R_EARTH};
use crate::propulsion::{self, StageMassProfile};
use crate::sim::integrator;
use crate::sim::state::{
    EventKind, FlightEvent, FlightResult, FlightSnapshot, Outcome, SimState, FIXED_DT,
    MAX_TIME_SCALE, MIN_TIME_SCALE, SNAPSHOT_ORBIT_ALTITUDE, V_SURFACE,
};
use crate::vehicle::{ConfigError, EngineDef, RocketConfig, StageRuntime};

// ---------------------------------------------------------------------------
// Flight simulator: staged vehicle, fixed-timestep loop, termination
// ---------------------------------------------------------------------------

/// Deterministic flight simulator for one rocket on one mission.
///
/// Single-threaded cooperative: drive it with `tick(dt_real)` from one
/// logical thread. Control inputs take effect at the next micro-step
/// boundary. All physically meaningful terminations are `Outcome`s, never
/// errors.
pub struct FlightSimulator {
    rocket: RocketConfig,
    mission: Mission,
    stages: Vec<StageRuntime>,
    state: SimState,
    active_stage: usize,
    throttle: f64,
    pitch_deg: f64,
    time_scale: f64,
    running: bool,
    outcome: Option<Outcome>,
    events: Vec<FlightEvent>,
    history: Vec<FlightSnapshot>,
    total_delta_v_used: f64,
}

impl FlightSimulator {
    /// Build a simulator on the launch pad. Fails on configs the catalog
    /// cannot resolve; after this no error can surface during flight.
    pub fn new(
        rocket: RocketConfig,
        mission: Mission,
        catalog: &[EngineDef],
    ) -> Result<Self, ConfigError> {
        let mut stages = Vec::with_capacity(rocket.stages.len());
        for config in &rocket.stages {
            stages.push(StageRuntime::new(config, catalog)?);
        }
        if stages.is_empty() {
            return Err(ConfigError::NoStages);
        }

        let state = SimState {
            position: Vec2::new(R_EARTH, 0.0),
            velocity: Vec2::new(0.0, V_SURFACE),
            mass: rocket.total_mass,
            time: 0.0,
            altitude: 0.0,
            fuel: stages[0].fuel_remaining,
        };

        let mut sim = FlightSimulator {
            rocket,
            mission,
            stages,
            state,
            active_stage: 0,
            throttle: 1.0,
            pitch_deg: 0.0,
            time_scale: 1.0,
            running: false,
            outcome: None,
            events: Vec::new(),
            history: Vec::new(),
            total_delta_v_used: 0.0,
        };
        sim.push_event(EventKind::Ignition, Some(0), "Stage 1 ignition".into());
        sim.record_snapshot();
        Ok(sim)
    }

    // -----------------------------------------------------------------------
    // Control contract (idempotent, applied between ticks)
    // -----------------------------------------------------------------------

    pub fn start(&mut self) {
        if self.outcome.is_none() {
            self.running = true;
        }
    }

    /// Set throttle. Throttleable stages clamp to [min_throttle, 1]; fixed
    /// engines snap to 0 or 1 by sign. Zero always cuts thrust.
    pub fn set_throttle(&mut self, x: f64) {
        if !x.is_finite() {
            return;
        }
        let new = if x <= 0.0 {
            0.0
        } else {
            match self.stages[self.active_stage].primary_engine() {
                Some(engine) if engine.throttleable => x.clamp(engine.min_throttle, 1.0),
                _ => 1.0,
            }
        };
        if self.running {
            if self.throttle > 0.0 && new == 0.0 {
                self.push_event(EventKind::BurnStop, Some(self.active_stage), "Burn stop".into());
            } else if self.throttle == 0.0 && new > 0.0 {
                self.push_event(EventKind::BurnStart, Some(self.active_stage), "Burn start".into());
            }
        }
        self.throttle = new;
    }

    /// Set pitch in degrees from local vertical: 0 = straight up, 90 =
    /// horizontal prograde.
    pub fn set_pitch(&mut self, deg: f64) {
        if deg.is_finite() {
            self.pitch_deg = deg.clamp(0.0, 90.0);
        }
    }

    /// Set time acceleration, clamped to [1, 100].
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.time_scale = scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
        }
    }

    /// Discard the active stage and ignite the next. No-op when no upper
    /// stage remains.
    pub fn trigger_stage_separation(&mut self) {
        if self.active_stage + 1 >= self.stages.len() {
            return;
        }
        self.separate_stage();
    }

    /// Terminal cancellation. Subsequent ticks are no-ops.
    pub fn abort(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        self.push_event(EventKind::Abort, Some(self.active_stage), "Flight aborted".into());
        self.finish(Outcome::Aborted);
    }

    // -----------------------------------------------------------------------
    // Tick loop
    // -----------------------------------------------------------------------

    /// Advance the flight by `dt_real * time_scale` seconds of simulation,
    /// quantized onto the fixed physics step. Appends exactly one snapshot.
    pub fn tick(&mut self, dt_real: f64) {
        if !self.running || self.outcome.is_some() {
            return;
        }
        if !dt_real.is_finite() || dt_real <= 0.0 {
            return;
        }

        let dt_sim = dt_real * self.time_scale;
        let n_steps = (dt_sim / FIXED_DT).ceil().max(1.0) as usize;
        let actual_dt = dt_sim / n_steps as f64;

        for _ in 0..n_steps {
            self.physics_step(actual_dt);
            if self.outcome.is_some() {
                break;
            }
        }
        self.record_snapshot();
    }

    fn physics_step(&mut self, dt: f64) {
        let prev_speed = self.state.speed();

        // 1-2. Effective thrust at the sea-level/vacuum blend, fuel burn.
        let blend = (self.state.altitude / KARMAN_LINE).clamp(0.0, 1.0);
        let mut f_ext = Vec2::zeros();
        {
            let throttle = self.throttle;
            let pitch_rad = self.pitch_deg.to_radians();
            let radial = math::normalize_or_zero(&self.state.position);
            let stage = &mut self.stages[self.active_stage];
            if stage.fuel_remaining > 0.0 && throttle > 0.0 {
                let thrust = stage.effective_thrust(blend) * throttle;
                let isp = stage.effective_isp(blend);
                // Tip from local vertical toward prograde.
                let direction = math::rotate(&radial, pitch_rad);
                f_ext = thrust * direction;

                let mdot = if isp > 0.0 { thrust / (isp * G0) } else { 0.0 };
                let consumed = (mdot * dt).min(stage.fuel_remaining);
                stage.fuel_remaining -= consumed;
                self.state.mass -= consumed;
                self.state.fuel = stage.fuel_remaining;
            }
        }

        // 3. Auto-stage on depletion when an upper stage exists. The new
        // stage produces thrust starting next step.
        if self.stages[self.active_stage].fuel_remaining <= 0.0
            && self.active_stage + 1 < self.stages.len()
        {
            let spent = self.active_stage;
            self.push_event(
                EventKind::FuelDepleted,
                Some(spent),
                format!("Stage {} fuel depleted", spent + 1),
            );
            self.separate_stage();
            self.push_event(
                EventKind::Ignition,
                Some(self.active_stage),
                format!("Stage {} ignition", self.active_stage + 1),
            );
        }

        // 4. Integrate.
        let (pos, vel) = integrator::rk4_step(
            &self.state.position,
            &self.state.velocity,
            self.state.mass,
            &f_ext,
            dt,
        );
        self.state.position = pos;
        self.state.velocity = vel;
        self.state.time += dt;
        self.state.altitude = pos.norm() - R_EARTH;

        // 5. Coarse delta-v bookkeeping.
        self.total_delta_v_used += (self.state.speed() - prev_speed).abs();

        // 6. Termination.
        self.classify_termination();
    }

    fn classify_termination(&mut self) {
        if self.state.altitude < 0.0 {
            self.finish(Outcome::Crash);
            return;
        }

        let target = self.mission.requirements.target_orbit;

        // Altitude-only missions complete the moment the mark is passed.
        if let Some(t) = target {
            if t.is_suborbital() && self.state.altitude >= t.apoapsis.min {
                self.finish(Outcome::MissionComplete);
                return;
            }
        }

        // Orbits are only meaningful above the atmosphere.
        if self.state.altitude <= KARMAN_LINE {
            return;
        }
        let orbit = OrbitalElements::from_state_vector(&self.state.position, &self.state.velocity);

        match target {
            Some(t) if !t.is_suborbital() => {
                if orbit.is_stable() && t.matches(&orbit) {
                    self.push_event(
                        EventKind::OrbitAchieved,
                        None,
                        "Target orbit achieved".into(),
                    );
                    self.finish(Outcome::MissionComplete);
                    return;
                }
            }
            None => {
                if orbit.is_stable() && orbit.periapsis > KARMAN_LINE {
                    self.push_event(
                        EventKind::OrbitAchieved,
                        None,
                        "Stable orbit achieved".into(),
                    );
                    self.finish(Outcome::OrbitAchieved);
                    return;
                }
            }
            _ => {}
        }

        // Out of fuel on a trajectory that falls back in: call it.
        let fuel_left: f64 = self.stages[self.active_stage..]
            .iter()
            .map(|s| s.fuel_remaining)
            .sum();
        if fuel_left <= 0.0 && orbit.periapsis < 0.0 {
            self.finish(Outcome::Suborbital);
        }
    }

    fn separate_stage(&mut self) {
        let departing = self.active_stage;
        let dropped = self.stages[departing].current_mass();
        self.push_event(
            EventKind::StageSeparation,
            Some(departing),
            format!("Stage {} separation", departing + 1),
        );
        self.state.mass -= dropped;
        self.active_stage += 1;
        self.state.fuel = self.stages[self.active_stage].fuel_remaining;
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(
            "flight terminated: {:?} at t={:.2} s, alt={:.0} m",
            outcome, self.state.time, self.state.altitude
        );
        self.outcome = Some(outcome);
        self.running = false;
    }

    fn push_event(&mut self, kind: EventKind, stage: Option<usize>, label: String) {
        debug!("t={:.2} s: {}", self.state.time, label);
        self.events.push(FlightEvent { time: self.state.time, kind, stage, label });
    }

    fn record_snapshot(&mut self) {
        let orbit = if self.state.altitude > SNAPSHOT_ORBIT_ALTITUDE {
            Some(OrbitalElements::from_state_vector(
                &self.state.position,
                &self.state.velocity,
            ))
        } else {
            None
        };
        self.history.push(FlightSnapshot {
            time: self.state.time,
            altitude: self.state.altitude,
            speed: self.state.speed(),
            mass: self.state.mass,
            fuel: self.state.fuel,
            active_stage: self.active_stage,
            throttle: self.throttle,
            pitch_deg: self.pitch_deg,
            position: self.state.position,
            orbit,
        });
    }

    // -----------------------------------------------------------------------
    // Read-only access between ticks
    // -----------------------------------------------------------------------

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn current_outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn current_state(&self) -> &SimState {
        &self.state
    }

    /// Instantaneous orbit, present once above the recording threshold.
    pub fn current_orbit(&self) -> Option<OrbitalElements> {
        if self.state.altitude > SNAPSHOT_ORBIT_ALTITUDE {
            Some(OrbitalElements::from_state_vector(
                &self.state.position,
                &self.state.velocity,
            ))
        } else {
            None
        }
    }

    pub fn active_stage_index(&self) -> usize {
        self.active_stage
    }

    pub fn events(&self) -> &[FlightEvent] {
        &self.events
    }

    pub fn history(&self) -> &[FlightSnapshot] {
        &self.history
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn pitch_deg(&self) -> f64 {
        self.pitch_deg
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn rocket(&self) -> &RocketConfig {
        &self.rocket
    }

    /// Ideal delta-v remaining in the stack at current fuel load.
    pub fn ideal_delta_v(&self) -> f64 {
        let profiles: Vec<StageMassProfile> = self.stages[self.active_stage..]
            .iter()
            .map(|s| StageMassProfile {
                wet_mass: s.current_mass(),
                dry_mass: s.dry_mass,
                isp: s.isp_vacuum,
            })
            .collect();
        propulsion::stack_delta_v(&profiles, self.rocket.payload.mass)
    }

    /// Sea-level thrust-to-weight at full initial mass. Must exceed 1 to
    /// lift off.
    pub fn launch_twr(&self) -> f64 {
        propulsion::thrust_to_weight(
            self.stages[0].thrust_sea_level,
            self.rocket.total_mass,
            gravity::gravity_at_altitude(0.0),
        )
    }

    /// Flight record, available once an outcome is set.
    pub fn get_result(&self) -> Option<FlightResult> {
        let outcome = self.outcome?;
        let max_altitude = self
            .history
            .iter()
            .map(|s| s.altitude)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(FlightResult {
            outcome,
            history: self.history.clone(),
            final_orbit: self.current_orbit(),
            total_delta_v_used: self.total_delta_v_used,
            max_altitude,
            flight_duration: self.state.time,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::{MissionRequirements, OrbitalTarget};
    use crate::vehicle::{EngineMount, RocketBuilder, StageConfig};

    fn catalog() -> Vec<EngineDef> {
        vec![
            EngineDef {
                id: "booster".into(),
                thrust_sea_level: 1_200_000.0,
                thrust_vacuum: 1_300_000.0,
                isp_sea_level: 250.0,
                isp_vacuum: 280.0,
                dry_mass: 1_500.0,
                throttleable: true,
                min_throttle: 0.4,
                restartable: false,
            },
            EngineDef {
                id: "kicker".into(),
                thrust_sea_level: 60_000.0,
                thrust_vacuum: 75_000.0,
                isp_sea_level: 290.0,
                isp_vacuum: 340.0,
                dry_mass: 300.0,
                throttleable: false,
                min_throttle: 1.0,
                restartable: true,
            },
        ]
    }

    fn hop_mission(min_apoapsis: f64) -> Mission {
        Mission {
            id: "hop".into(),
            name: "Hop".into(),
            tier: 1,
            requirements: MissionRequirements {
                target_orbit: Some(OrbitalTarget::suborbital(min_apoapsis)),
                ..Default::default()
            },
            budget: 10_000_000.0,
            bonus_challenges: vec![],
            educational_topic_ids: vec![],
            time_limit: None,
        }
    }

    fn free_flight_mission() -> Mission {
        Mission {
            id: "free".into(),
            name: "Free flight".into(),
            tier: 1,
            requirements: MissionRequirements::default(),
            budget: 10_000_000.0,
            bonus_challenges: vec![],
            educational_topic_ids: vec![],
            time_limit: None,
        }
    }

    fn hop_rocket() -> RocketConfig {
        // Two boosters, 20 t of fuel: sea-level TWR ~5, plenty for a hop.
        RocketBuilder::new()
            .stage(StageConfig {
                engines: vec![EngineMount { engine_id: "booster".into(), count: 2 }],
                fuel_mass: 20_000.0,
                structural_mass: 3_000.0,
            })
            .payload("sensor pod", 200.0)
            .cost(8_000_000.0)
            .build(&catalog())
            .unwrap()
    }

    fn two_stage_rocket(first_stage_fuel: f64) -> RocketConfig {
        RocketBuilder::new()
            .stage(StageConfig {
                engines: vec![EngineMount { engine_id: "booster".into(), count: 2 }],
                fuel_mass: first_stage_fuel,
                structural_mass: 3_000.0,
            })
            .stage(StageConfig {
                engines: vec![EngineMount { engine_id: "kicker".into(), count: 1 }],
                fuel_mass: 2_000.0,
                structural_mass: 400.0,
            })
            .payload("CubeSat", 150.0)
            .cost(12_000_000.0)
            .build(&catalog())
            .unwrap()
    }

    fn sim(rocket: RocketConfig, mission: Mission) -> FlightSimulator {
        FlightSimulator::new(rocket, mission, &catalog()).unwrap()
    }

    #[test]
    fn initial_state_on_pad() {
        let s = sim(hop_rocket(), free_flight_mission());
        assert!(!s.running());
        assert_eq!(s.active_stage_index(), 0);
        assert_eq!(s.current_state().altitude, 0.0);
        assert_eq!(s.current_state().time, 0.0);
        assert!((s.current_state().velocity.y - V_SURFACE).abs() < 1e-9);
        assert_eq!(s.history().len(), 1, "initial snapshot recorded");
        assert_eq!(s.history()[0].altitude, 0.0);
        assert_eq!(s.events().len(), 1);
        assert_eq!(s.events()[0].kind, EventKind::Ignition);
        assert!(s.launch_twr() > 1.0, "test vehicle must lift off");
    }

    #[test]
    fn tick_noop_before_start() {
        let mut s = sim(hop_rocket(), free_flight_mission());
        s.tick(0.1);
        assert_eq!(s.current_state().time, 0.0);
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn tick_advances_scaled_time() {
        let mut s = sim(hop_rocket(), free_flight_mission());
        s.start();
        s.set_time_scale(10.0);
        s.tick(0.1);
        assert!((s.current_state().time - 1.0).abs() < 1e-9);
        assert_eq!(s.history().len(), 2, "exactly one snapshot per tick");
    }

    #[test]
    fn abort_is_terminal() {
        let mut s = sim(hop_rocket(), free_flight_mission());
        s.start();
        s.tick(0.1);
        s.abort();
        assert!(!s.running());
        assert_eq!(s.current_outcome(), Some(Outcome::Aborted));
        let t = s.current_state().time;
        let n = s.history().len();
        s.tick(0.1);
        assert_eq!(s.current_state().time, t, "ticks after abort are no-ops");
        assert_eq!(s.history().len(), n);
        assert_eq!(s.events().last().unwrap().kind, EventKind::Abort);
    }

    #[test]
    fn unpowered_pad_state_crashes() {
        let mut s = sim(hop_rocket(), free_flight_mission());
        s.set_throttle(0.0);
        s.start();
        for _ in 0..100 {
            s.tick(0.1);
            if s.current_outcome().is_some() {
                break;
            }
        }
        assert_eq!(s.current_outcome(), Some(Outcome::Crash));
    }

    #[test]
    fn vertical_hop_completes_suborbital_mission() {
        let mut s = sim(hop_rocket(), hop_mission(15_000.0));
        s.start();
        s.set_time_scale(50.0);
        for _ in 0..200 {
            s.tick(0.1);
            if s.current_outcome().is_some() {
                break;
            }
        }
        assert_eq!(s.current_outcome(), Some(Outcome::MissionComplete));
        let result = s.get_result().expect("result after termination");
        assert!(result.max_altitude >= 15_000.0);
    }

    #[test]
    fn auto_stage_on_depletion() {
        // ~1 s of first-stage fuel, then automatic separation.
        let mut s = sim(two_stage_rocket(1_000.0), free_flight_mission());
        s.start();
        s.set_time_scale(10.0);
        for _ in 0..20 {
            s.tick(0.1);
        }
        assert_eq!(s.active_stage_index(), 1);

        let kinds: Vec<EventKind> = s.events().iter().map(|e| e.kind).collect();
        let depleted = kinds.iter().filter(|k| **k == EventKind::FuelDepleted).count();
        assert_eq!(depleted, 1, "auto-staging fires at most once per depletion");

        let i_dep = kinds.iter().position(|k| *k == EventKind::FuelDepleted).unwrap();
        assert_eq!(kinds[i_dep + 1], EventKind::StageSeparation);
        assert_eq!(kinds[i_dep + 2], EventKind::Ignition);
    }

    #[test]
    fn manual_separation_drops_stage_mass() {
        let mut s = sim(two_stage_rocket(18_000.0), free_flight_mission());
        let mass_before = s.current_state().mass;
        // 18000 fuel + 3000 structure + 2 x 1500 engines.
        s.trigger_stage_separation();
        assert_eq!(s.active_stage_index(), 1);
        assert!((mass_before - s.current_state().mass - 24_000.0).abs() < 1e-9);
        assert!((s.current_state().fuel - 2_000.0).abs() < 1e-9);

        // No upper stage left: no-op.
        let mass_after = s.current_state().mass;
        s.trigger_stage_separation();
        assert_eq!(s.active_stage_index(), 1);
        assert_eq!(s.current_state().mass, mass_after);
    }

    #[test]
    fn throttle_clamping_rules() {
        let mut s = sim(hop_rocket(), free_flight_mission());
        // Throttleable booster, min 0.4.
        s.set_throttle(0.1);
        assert!((s.throttle() - 0.4).abs() < 1e-12);
        s.set_throttle(2.0);
        assert!((s.throttle() - 1.0).abs() < 1e-12);
        s.set_throttle(0.0);
        assert_eq!(s.throttle(), 0.0);
        s.set_throttle(f64::NAN);
        assert_eq!(s.throttle(), 0.0, "NaN input is ignored");

        // Fixed kicker snaps by sign.
        let mut s2 = sim(two_stage_rocket(5_000.0), free_flight_mission());
        s2.trigger_stage_separation();
        s2.set_throttle(0.3);
        assert_eq!(s2.throttle(), 1.0);
        s2.set_throttle(-1.0);
        assert_eq!(s2.throttle(), 0.0);
    }

    #[test]
    fn burn_events_on_throttle_transitions() {
        let mut s = sim(hop_rocket(), free_flight_mission());
        s.start();
        s.tick(0.01);
        s.set_throttle(0.0);
        s.set_throttle(1.0);
        let kinds: Vec<EventKind> = s.events().iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&EventKind::BurnStop));
        assert!(kinds.contains(&EventKind::BurnStart));
    }

    #[test]
    fn pitch_and_time_scale_clamping() {
        let mut s = sim(hop_rocket(), free_flight_mission());
        s.set_pitch(-10.0);
        assert_eq!(s.pitch_deg(), 0.0);
        s.set_pitch(120.0);
        assert_eq!(s.pitch_deg(), 90.0);
        s.set_time_scale(0.0);
        assert_eq!(s.time_scale(), 1.0);
        s.set_time_scale(1_000.0);
        assert_eq!(s.time_scale(), 100.0);
    }

    #[test]
    fn event_and_snapshot_times_monotonic() {
        let mut s = sim(two_stage_rocket(1_000.0), hop_mission(15_000.0));
        s.start();
        s.set_time_scale(50.0);
        for _ in 0..200 {
            s.tick(0.1);
            if s.current_outcome().is_some() {
                break;
            }
        }
        let events = s.events();
        for pair in events.windows(2) {
            assert!(pair[1].time >= pair[0].time, "event timestamps must not decrease");
        }
        let history = s.history();
        for pair in history.windows(2) {
            assert!(pair[1].time >= pair[0].time, "snapshot times must not decrease");
        }
        assert_eq!(history[0].altitude, 0.0);
    }

    #[test]
    fn fuel_burn_matches_mass_loss() {
        let mut s = sim(hop_rocket(), free_flight_mission());
        let fuel_0 = s.current_state().fuel;
        let mass_0 = s.current_state().mass;
        s.start();
        for _ in 0..10 {
            s.tick(0.1);
        }
        let burned = fuel_0 - s.current_state().fuel;
        let lost = mass_0 - s.current_state().mass;
        assert!(burned > 0.0, "engine must consume fuel");
        assert!((burned - lost).abs() < 1e-9, "mass loss equals fuel burned");
    }

    #[test]
    fn max_altitude_matches_history() {
        let mut s = sim(hop_rocket(), hop_mission(15_000.0));
        s.start();
        s.set_time_scale(50.0);
        for _ in 0..200 {
            s.tick(0.1);
            if s.current_outcome().is_some() {
                break;
            }
        }
        let result = s.get_result().unwrap();
        let from_history = result
            .history
            .iter()
            .map(|snap| snap.altitude)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.max_altitude, from_history);
    }

    #[test]
    fn state_stays_finite_through_flight() {
        let mut s = sim(two_stage_rocket(6_000.0), free_flight_mission());
        s.start();
        s.set_time_scale(100.0);
        s.set_pitch(45.0);
        for _ in 0..300 {
            s.tick(0.1);
            let st = s.current_state();
            assert!(st.position.x.is_finite() && st.position.y.is_finite());
            assert!(st.velocity.x.is_finite() && st.velocity.y.is_finite());
            assert!(st.mass.is_finite() && st.fuel.is_finite());
            if s.current_outcome().is_some() {
                break;
            }
        }
    }
}
