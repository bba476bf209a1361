// ---------------------------------------------------------------------------
// Exponential atmosphere (sea level to the Karman line)
// ---------------------------------------------------------------------------

pub const RHO_0: f64 = 1.225; // sea-level density, kg/m^3
pub const SCALE_HEIGHT: f64 = 8_500.0; // m
pub const KARMAN_LINE: f64 = 100_000.0; // hard vacuum above this altitude, m

/// Atmospheric density at geometric altitude `h` (m above the surface).
///
/// Exponential profile rho_0 * exp(-h / H). Negative altitudes clamp to
/// sea level; above the Karman line the density is exactly zero.
pub fn density(h: f64) -> f64 {
    if h < 0.0 {
        return RHO_0;
    }
    if h > KARMAN_LINE {
        return 0.0;
    }
    RHO_0 * (-h / SCALE_HEIGHT).exp()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
