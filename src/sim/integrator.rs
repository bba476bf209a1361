use crate::math::Vec2;
use crate::physics::aerodynamics;
use crate::physics::gravity::{self, R_EARTH};

// ---------------------------------------------------------------------------
// RK4 over (position, velocity) with constant external thrust
// ---------------------------------------------------------------------------

/// Net acceleration at a trial state: gravity + drag + external thrust.
///
/// Short-circuits to zero at the body center or for non-positive mass so
/// NaN can never enter the state.
pub fn acceleration(pos: &Vec2, vel: &Vec2, mass: f64, f_ext: &Vec2) -> Vec2 {
    let r = pos.norm();
    if r < 1.0 || mass <= 0.0 {
        return Vec2::zeros();
    }
    let a_gravity = gravity::gravity_accel(pos);
    let a_drag = aerodynamics::drag_accel(vel, r - R_EARTH, mass);
    let a_thrust = f_ext / mass;
    a_gravity + a_drag + a_thrust
}

/// Single RK4 step. Mass is held constant across the step; fuel burned
/// during the step is deducted before this call.
pub fn rk4_step(pos: &Vec2, vel: &Vec2, mass: f64, f_ext: &Vec2, dt: f64) -> (Vec2, Vec2) {
    let k1_v = *vel;
    let k1_a = acceleration(pos, vel, mass, f_ext);

    let k2_v = vel + 0.5 * dt * k1_a;
    let k2_a = acceleration(&(pos + 0.5 * dt * k1_v), &k2_v, mass, f_ext);

    let k3_v = vel + 0.5 * dt * k2_a;
    let k3_a = acceleration(&(pos + 0.5 * dt * k2_v), &k3_v, mass, f_ext);

    let k4_v = vel + dt * k3_a;
    let k4_a = acceleration(&(pos + dt * k3_v), &k4_v, mass, f_ext);

    let new_pos = pos + (dt / 6.0) * (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v);
    let new_vel = vel + (dt / 6.0) * (k1_a + 2.0 * k2_a + 2.0 * k3_a + k4_a);
    (new_pos, new_vel)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::gravity::MU_EARTH;

    #[test]
    fn circular_orbit_conserves_energy() {
        // Coasting circular orbit above the atmosphere: radius and speed
        // must hold over 100 s of integration.
        let r = R_EARTH + 300_000.0;
        let v = (MU_EARTH / r).sqrt();
        let mut pos = Vec2::new(r, 0.0);
        let mut vel = Vec2::new(0.0, v);
        let no_thrust = Vec2::zeros();

        let steps = (100.0_f64 / 0.01) as usize;
        for _ in 0..steps {
            let (p, w) = rk4_step(&pos, &vel, 1_000.0, &no_thrust, 0.01);
            pos = p;
            vel = w;
        }

        assert!(
            (pos.norm() - r).abs() < 1_000.0,
            "radius drifted {:.1} m over 100 s",
            (pos.norm() - r).abs()
        );
        assert!(
            (vel.norm() - v).abs() < 10.0,
            "speed drifted {:.3} m/s over 100 s",
            (vel.norm() - v).abs()
        );
    }

    #[test]
    fn high_orbit_conserves_energy() {
        let r = R_EARTH + 40_000_000.0;
        let v = (MU_EARTH / r).sqrt();
        let mut pos = Vec2::new(r, 0.0);
        let mut vel = Vec2::new(0.0, v);

        for _ in 0..10_000 {
            let (p, w) = rk4_step(&pos, &vel, 1_000.0, &Vec2::zeros(), 0.01);
            pos = p;
            vel = w;
        }
        assert!((pos.norm() - r).abs() < 1_000.0);
        assert!((vel.norm() - v).abs() < 10.0);
    }

    #[test]
    fn thrust_accelerates_along_direction() {
        let pos = Vec2::new(R_EARTH + 200_000.0, 0.0);
        let vel = Vec2::zeros();
        let f_ext = Vec2::new(0.0, 50_000.0); // 50 kN on 1 t
        let (_, new_vel) = rk4_step(&pos, &vel, 1_000.0, &f_ext, 0.01);
        assert!(new_vel.y > 0.0, "thrust should accelerate prograde");
    }

    #[test]
    fn degenerate_mass_freezes_acceleration() {
        let pos = Vec2::new(R_EARTH, 0.0);
        let vel = Vec2::new(0.0, 100.0);
        let a = acceleration(&pos, &vel, 0.0, &Vec2::new(1e6, 0.0));
        assert_eq!(a, Vec2::zeros());
        assert!(a.x.is_finite() && a.y.is_finite());
    }

    #[test]
    fn freefall_drops_toward_body() {
        let pos = Vec2::new(R_EARTH + 1_000.0, 0.0);
        let vel = Vec2::zeros();
        let (new_pos, new_vel) = rk4_step(&pos, &vel, 1_000.0, &Vec2::zeros(), 1.0);
        assert!(new_pos.norm() < pos.norm(), "free fall must descend");
        assert!(new_vel.x < 0.0);
    }
}
