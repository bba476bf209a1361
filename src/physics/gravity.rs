use crate::math::Vec2;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665; // standard gravity, m/s^2
pub const G: f64 = 6.674e-11; // gravitational constant, m^3/(kg s^2)
pub const M_EARTH: f64 = 5.972e24; // kg
pub const R_EARTH: f64 = 6.371e6; // mean radius, m
pub const MU_EARTH: f64 = G * M_EARTH; // gravitational parameter, m^3/s^2

/// Scalar gravitational acceleration at altitude `h` above the surface.
pub fn gravity_at_altitude(h: f64) -> f64 {
    let r = R_EARTH + h;
    MU_EARTH / (r * r)
}

/// Gravitational acceleration vector toward the body center.
/// Returns zero at the singularity `|pos| = 0`.
pub fn gravity_accel(pos: &Vec2) -> Vec2 {
    let r = pos.norm();
    if r < 1.0 {
        return Vec2::zeros();
    }
    -(MU_EARTH / (r * r * r)) * pos
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
