use crate::math::Vec2;
use crate::physics::atmosphere;

// ---------------------------------------------------------------------------
// Drag model: single global coefficient and reference area
// ---------------------------------------------------------------------------

pub const CD: f64 = 0.2;
pub const AREA_REF: f64 = 10.0; // m^2

/// Scalar drag force magnitude at the given speed and altitude.
pub fn drag_magnitude(speed: f64, altitude: f64) -> f64 {
    let rho = atmosphere::density(altitude);
    0.5 * rho * speed * speed * CD * AREA_REF
}

/// Drag acceleration vector opposing velocity.
/// Zero when at rest, above the Karman line, or for non-positive mass.
pub fn drag_accel(vel: &Vec2, altitude: f64, mass: f64) -> Vec2 {
    let speed = vel.norm();
    if speed <= 0.0 || altitude >= atmosphere::KARMAN_LINE || mass <= 0.0 {
        return Vec2::zeros();
    }
    let mag = drag_magnitude(speed, altitude);
    -(mag / mass) * (vel / speed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
