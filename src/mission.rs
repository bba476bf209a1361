use crate::orbital::OrbitalElements;
use crate::sim::FlightResult;

// ---------------------------------------------------------------------------
// Orbital target
// ---------------------------------------------------------------------------

/// Inclusive numeric interval. Unbounded ends use the infinity sentinels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const ANY: Band = Band { min: f64::NEG_INFINITY, max: f64::INFINITY };

    pub fn new(min: f64, max: f64) -> Self {
        Band { min, max }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// Whether a target describes a real orbit or just an altitude to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Suborbital,
    Orbital,
}

/// Apsis windows the final orbit must land in.
#[derive(Debug, Clone, Copy)]
pub struct OrbitalTarget {
    pub kind: TargetKind,
    pub periapsis: Band, // m above surface
    pub apoapsis: Band,  // m above surface
}

impl OrbitalTarget {
    /// Orbit with both apsides constrained to the given windows.
    pub fn orbital(periapsis: Band, apoapsis: Band) -> Self {
        OrbitalTarget { kind: TargetKind::Orbital, periapsis, apoapsis }
    }

    /// Reach an apoapsis of at least `min_apoapsis`; no closed orbit required.
    pub fn suborbital(min_apoapsis: f64) -> Self {
        OrbitalTarget {
            kind: TargetKind::Suborbital,
            periapsis: Band::ANY,
            apoapsis: Band::new(min_apoapsis, f64::INFINITY),
        }
    }

    /// Suborbital either by explicit tag or by the legacy unbounded-periapsis
    /// sentinel convention of older catalog data.
    pub fn is_suborbital(&self) -> bool {
        self.kind == TargetKind::Suborbital || self.periapsis.min == f64::NEG_INFINITY
    }

    /// Both apsides of `orbit` fall inside the requested windows.
    pub fn matches(&self, orbit: &OrbitalElements) -> bool {
        self.periapsis.contains(orbit.periapsis) && self.apoapsis.contains(orbit.apoapsis)
    }
}

// ---------------------------------------------------------------------------
// Bonus challenges
// ---------------------------------------------------------------------------

pub type BonusPredicate = fn(&FlightResult) -> bool;

/// Condition under which a bonus is awarded. `MaxCost` is the structured
/// shape for cost-threshold bonuses; `Predicate` covers everything else.
#[derive(Debug, Clone, Copy)]
pub enum BonusCondition {
    MaxCost(f64),
    Predicate(BonusPredicate),
}

#[derive(Debug, Clone)]
pub struct BonusChallenge {
    pub id: String,
    pub description: String,
    pub condition: BonusCondition,
    pub star_value: u32,
}

/// Extract a dollar threshold like "$60M", "$500K" or "$60,000,000" from
/// free-form bonus text. Legacy fallback for catalog entries that encode the
/// threshold only in their description.
pub fn parse_cost_threshold(description: &str) -> Option<f64> {
    let bytes = description.as_bytes();
    let dollar = description.find('$')?;
    let mut idx = dollar + 1;
    let mut digits = String::new();
    while idx < bytes.len() {
        let c = bytes[idx] as char;
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c == ',' {
            // thousands separator, skip
        } else {
            break;
        }
        idx += 1;
    }
    if digits.is_empty() {
        return None;
    }
    let base: f64 = digits.parse().ok()?;

    // Optional multiplier suffix after whitespace: K, M, or B.
    while idx < bytes.len() && (bytes[idx] as char).is_ascii_whitespace() {
        idx += 1;
    }
    let multiplier = match bytes.get(idx).map(|b| (*b as char).to_ascii_uppercase()) {
        Some('K') => 1e3,
        Some('M') => 1e6,
        Some('B') => 1e9,
        _ => 1.0,
    };
    Some(base * multiplier)
}

// ---------------------------------------------------------------------------
// Mission definition (frozen)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct MissionRequirements {
    pub target_orbit: Option<OrbitalTarget>,
    pub target_body: Option<String>,
    pub min_payload_mass: Option<f64>,
    pub max_budget: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Mission {
    pub id: String,
    pub name: String,
    pub tier: u8, // 1..=5
    pub requirements: MissionRequirements,
    pub budget: f64,
    pub bonus_challenges: Vec<BonusChallenge>,
    pub educational_topic_ids: Vec<String>,
    /// Optional wall-clock ceiling in simulation seconds, enforced by the driver.
    pub time_limit: Option<f64>,
}

// ---------------------------------------------------------------------------
// Preset missions
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Tier-1 vertical hop past the Karman line.
    pub fn karman_hop() -> Mission {
        Mission {
            id: "karman-hop".into(),
            name: "Touch the Sky".into(),
            tier: 1,
            requirements: MissionRequirements {
                target_orbit: Some(OrbitalTarget::suborbital(100_000.0)),
                target_body: None,
                min_payload_mass: None,
                max_budget: Some(20_000_000.0),
            },
            budget: 20_000_000.0,
            bonus_challenges: vec![BonusChallenge {
                id: "hop-cheap".into(),
                description: "Complete under $10M".into(),
                condition: BonusCondition::MaxCost(10_000_000.0),
                star_value: 1,
            }],
            educational_topic_ids: vec!["karman-line".into(), "twr".into()],
            time_limit: None,
        }
    }

    /// Tier-2 low Earth orbit insertion.
    pub fn low_orbit() -> Mission {
        Mission {
            id: "leo-insertion".into(),
            name: "First Orbit".into(),
            tier: 2,
            requirements: MissionRequirements {
                target_orbit: Some(OrbitalTarget::orbital(
                    Band::new(160_000.0, 2_000_000.0),
                    Band::new(160_000.0, 2_000_000.0),
                )),
                target_body: None,
                min_payload_mass: Some(250.0),
                max_budget: Some(80_000_000.0),
            },
            budget: 80_000_000.0,
            bonus_challenges: vec![BonusChallenge {
                id: "leo-budget".into(),
                description: "Complete under $60M".into(),
                condition: BonusCondition::MaxCost(60_000_000.0),
                star_value: 1,
            }],
            educational_topic_ids: vec!["orbital-velocity".into(), "staging".into()],
            time_limit: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
