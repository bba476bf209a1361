use crate::physics::gravity::MU_EARTH;

// ---------------------------------------------------------------------------
// Circular-orbit speeds and the Hohmann transfer
// ---------------------------------------------------------------------------

/// Circular orbit velocity at radius `r` (from body center).
pub fn circular_velocity(r: f64) -> f64 {
    circular_velocity_mu(r, MU_EARTH)
}

pub fn circular_velocity_mu(r: f64, mu: f64) -> f64 {
    (mu / r).sqrt()
}

/// Escape velocity at radius `r`.
pub fn escape_velocity(r: f64) -> f64 {
    (2.0 * MU_EARTH / r).sqrt()
}

/// Vis-viva speed at radius `r` on an orbit with semi-major axis `a`.
pub fn vis_viva(r: f64, a: f64) -> f64 {
    (MU_EARTH * (2.0 / r - 1.0 / a)).sqrt()
}

/// Period of a circular orbit at radius `r`.
pub fn circular_period(r: f64) -> f64 {
    2.0 * std::f64::consts::PI * (r.powi(3) / MU_EARTH).sqrt()
}

/// Result of a Hohmann transfer calculation between circular orbits.
#[derive(Debug, Clone, Copy)]
pub struct HohmannTransfer {
    pub dv1: f64,           // m/s, departure burn
    pub dv2: f64,           // m/s, circularization burn
    pub total_dv: f64,      // m/s
    pub transfer_time: f64, // s, half the transfer orbit period
}

/// Compute the Hohmann transfer between circular orbits of radius `r1` and `r2`.
pub fn hohmann(r1: f64, r2: f64) -> HohmannTransfer {
    hohmann_mu(r1, r2, MU_EARTH)
}

pub fn hohmann_mu(r1: f64, r2: f64, mu: f64) -> HohmannTransfer {
    let a_transfer = (r1 + r2) / 2.0;

    let v_circ1 = (mu / r1).sqrt();
    let v_circ2 = (mu / r2).sqrt();
    let v_transfer_1 = (mu * (2.0 / r1 - 1.0 / a_transfer)).sqrt();
    let v_transfer_2 = (mu * (2.0 / r2 - 1.0 / a_transfer)).sqrt();

    let dv1 = (v_transfer_1 - v_circ1).abs();
    let dv2 = (v_circ2 - v_transfer_2).abs();
    let transfer_time = std::f64::consts::PI * (a_transfer.powi(3) / mu).sqrt();

    HohmannTransfer {
        dv1,
        dv2,
        total_dv: dv1 + dv2,
        transfer_time,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
