mod integrator;
mod simulator;
mod state;

pub use integrator::{acceleration, rk4_step};
pub use simulator::FlightSimulator;
pub use state::{
    EventKind, FlightEvent, FlightResult, FlightSnapshot, Outcome, SimState, FIXED_DT,
    MAX_FRAME_DT, MAX_TIME_SCALE, MIN_TIME_SCALE, SNAPSHOT_ORBIT_ALTITUDE, V_SURFACE,
};
