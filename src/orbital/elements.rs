use serde::{Deserialize, Serialize};

use crate::math::{cross_z, normalize_or_zero, Vec2};
use crate::physics::gravity::{MU_EARTH, R_EARTH};

// ---------------------------------------------------------------------------
// Keplerian elements of a 2D equatorial orbit
// ---------------------------------------------------------------------------

/// Orbital elements recovered from an instantaneous state vector.
///
/// Apsides are measured above the body surface. For hyperbolic states the
/// semi-major axis is negative and the period is +infinity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: f64, // m
    pub eccentricity: f64,
    pub apoapsis: f64,  // m above surface
    pub periapsis: f64, // m above surface
    pub period: f64,    // s
}

/// Specific angular momentum of an in-plane state (scalar z-component).
pub fn specific_angular_momentum(pos: &Vec2, vel: &Vec2) -> f64 {
    cross_z(pos, vel)
}

impl OrbitalElements {
    /// Recover elements from position and velocity around Earth.
    pub fn from_state_vector(pos: &Vec2, vel: &Vec2) -> Self {
        Self::from_state_vector_mu(pos, vel, MU_EARTH)
    }

    /// Recover elements with an explicit gravitational parameter.
    pub fn from_state_vector_mu(pos: &Vec2, vel: &Vec2, mu: f64) -> Self {
        let r = pos.norm();
        if r < 1.0 {
            // Degenerate state at the body center; nothing meaningful to report.
            return OrbitalElements {
                semi_major_axis: 0.0,
                eccentricity: 0.0,
                apoapsis: -R_EARTH,
                periapsis: -R_EARTH,
                period: f64::INFINITY,
            };
        }

        let v2 = vel.norm_squared();
        let energy = 0.5 * v2 - mu / r;
        let semi_major_axis = -mu / (2.0 * energy);

        // Eccentricity vector: ((v^2)p - (p.v)v)/mu - p_hat
        let e_vec = (v2 * pos - pos.dot(vel) * vel) / mu - normalize_or_zero(pos);
        let eccentricity = e_vec.norm();

        let apoapsis = semi_major_axis * (1.0 + eccentricity) - R_EARTH;
        let periapsis = semi_major_axis * (1.0 - eccentricity) - R_EARTH;

        let period = if semi_major_axis > 0.0 {
            2.0 * std::f64::consts::PI * (semi_major_axis.powi(3) / mu).sqrt()
        } else {
            f64::INFINITY
        };

        OrbitalElements {
            semi_major_axis,
            eccentricity,
            apoapsis,
            periapsis,
            period,
        }
    }

    /// A closed orbit that never intersects the surface.
    pub fn is_stable(&self) -> bool {
        self.eccentricity < 1.0 && self.periapsis > 0.0 && self.apoapsis > 0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
