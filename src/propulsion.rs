use crate::physics::gravity::G0;

// ---------------------------------------------------------------------------
// Rocket equation and derived performance figures
// ---------------------------------------------------------------------------

/// Ideal delta-v from the Tsiolkovsky rocket equation (m/s).
/// Returns 0 for degenerate mass ratios (dry <= 0 or wet <= dry).
pub fn tsiolkovsky(isp: f64, wet_mass: f64, dry_mass: f64) -> f64 {
    if dry_mass <= 0.0 || wet_mass <= dry_mass {
        return 0.0;
    }
    isp * G0 * (wet_mass / dry_mass).ln()
}

/// Propellant mass flow rate: mdot = F / (Isp * g0). Zero for Isp <= 0.
pub fn mass_flow_rate(thrust: f64, isp: f64) -> f64 {
    if isp <= 0.0 {
        return 0.0;
    }
    thrust / (isp * G0)
}

/// Thrust-to-weight ratio at local gravity. Zero for non-positive mass.
pub fn thrust_to_weight(thrust: f64, mass: f64, g_local: f64) -> f64 {
    if mass <= 0.0 {
        return 0.0;
    }
    thrust / (mass * g_local)
}

/// Burn time from a propellant load and mass flow rate. Zero for mdot <= 0.
pub fn burn_time(fuel_mass: f64, mdot: f64) -> f64 {
    if mdot <= 0.0 {
        return 0.0;
    }
    fuel_mass / mdot
}

// ---------------------------------------------------------------------------
// Multi-stage stack delta-v
// ---------------------------------------------------------------------------

/// Mass profile of one stage for stack delta-v accounting.
#[derive(Debug, Clone, Copy)]
pub struct StageMassProfile {
    pub wet_mass: f64,
    pub dry_mass: f64,
    pub isp: f64,
}

/// Total ideal delta-v of a stage stack, bottom stage first.
///
/// Each stage burns while carrying the summed wet mass of all stages
/// above it plus the payload.
pub fn stack_delta_v(stages: &[StageMassProfile], payload_mass: f64) -> f64 {
    let mut total = 0.0;
    for (i, stage) in stages.iter().enumerate() {
        let carried: f64 = stages[i + 1..].iter().map(|s| s.wet_mass).sum::<f64>() + payload_mass;
        total += tsiolkovsky(stage.isp, stage.wet_mass + carried, stage.dry_mass + carried);
    }
    total
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
