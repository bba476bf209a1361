use serde::{Deserialize, Serialize};

use crate::mission::{parse_cost_threshold, Band, BonusCondition, Mission};
use crate::orbital::hohmann;
use crate::physics::gravity::{G0, R_EARTH};
use crate::sim::{FlightResult, Outcome};
use crate::vehicle::RocketConfig;

// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

/// Reference delta-v for a low-Earth-orbit insertion including gravity and
/// drag losses.
pub const LEO_INSERTION_DV: f64 = 9_400.0; // m/s
const LEO_BAND_ALTITUDE: f64 = 2_000_000.0; // m
const PARKING_ALTITUDE: f64 = 200_000.0; // m
/// Apsis tolerance for full accuracy marks.
const ACCURACY_TOLERANCE: f64 = 10_000.0; // m
/// Factor applied to the ideal vertical-hop delta-v to account for drag and
/// gravity losses.
const SUBORBITAL_LOSS_FACTOR: f64 = 1.15;

// ---------------------------------------------------------------------------
// Score breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EfficiencyScore {
    pub score: u32, // 0-100
    pub dv_used: f64,
    pub dv_optimal: f64,
    pub fuel_wasted: f64, // m/s of delta-v spent beyond the optimum
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetScore {
    pub score: u32, // 0-100
    pub cost_spent: f64,
    pub budget_max: f64,
    pub percent_under_budget: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyScore {
    pub score: u32,             // 0-100
    pub orbital_deviation: f64, // m, mean apsis error against target midpoints
    pub inclination_error: f64, // always 0 in a 2D world
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub efficiency: EfficiencyScore,
    pub budget: BudgetScore,
    pub accuracy: AccuracyScore,
    pub total_score: u32,
    pub stars: u32, // 0-3
}

// ---------------------------------------------------------------------------
// Optimal delta-v estimator
// ---------------------------------------------------------------------------

fn band_midpoint(band: &Band) -> Option<f64> {
    match (band.min.is_finite(), band.max.is_finite()) {
        (true, true) => Some((band.min + band.max) / 2.0),
        (true, false) => Some(band.min),
        (false, true) => Some(band.max),
        (false, false) => None,
    }
}

/// Estimate the minimum delta-v a mission demands.
///
/// Suborbital hops use the ideal vertical-climb speed with a loss factor;
/// orbital targets use the LEO insertion reference plus a Hohmann transfer
/// from a 200 km parking orbit when the target sits above the LEO band.
/// Always returns a finite, non-negative value.
pub fn optimal_delta_v(mission: &Mission) -> f64 {
    let target = match mission.requirements.target_orbit {
        Some(t) => t,
        None => return 0.0,
    };

    if target.is_suborbital() {
        let h_target = target.apoapsis.min;
        if !h_target.is_finite() || h_target <= 0.0 {
            return 0.0;
        }
        return (2.0 * G0 * h_target).sqrt() * SUBORBITAL_LOSS_FACTOR;
    }

    let peri_mid = band_midpoint(&target.periapsis);
    let apo_mid = band_midpoint(&target.apoapsis);
    let target_altitude = match (peri_mid, apo_mid) {
        (Some(p), Some(a)) => (p + a) / 2.0,
        (Some(p), None) => p,
        (None, Some(a)) => a,
        (None, None) => return LEO_INSERTION_DV,
    };

    if target_altitude <= LEO_BAND_ALTITUDE {
        LEO_INSERTION_DV
    } else {
        let transfer = hohmann(R_EARTH + PARKING_ALTITUDE, R_EARTH + target_altitude);
        LEO_INSERTION_DV + transfer.total_dv
    }
}

// ---------------------------------------------------------------------------
// Component scores
// ---------------------------------------------------------------------------

fn round_score(x: f64) -> u32 {
    x.clamp(0.0, 100.0).round() as u32
}

fn efficiency_score(result: &FlightResult, mission: &Mission) -> EfficiencyScore {
    let dv_optimal = optimal_delta_v(mission);
    let dv_used = result.total_delta_v_used;
    let denom = dv_optimal.max(dv_used);
    let ratio = if denom > 0.0 { dv_optimal / denom } else { 1.0 };
    EfficiencyScore {
        score: round_score(ratio * 100.0),
        dv_used,
        dv_optimal,
        fuel_wasted: (dv_used - dv_optimal).max(0.0),
    }
}

fn budget_score(cost_spent: f64, budget_max: f64) -> BudgetScore {
    let ratio = if budget_max > 0.0 {
        1.0 - cost_spent / budget_max
    } else {
        0.0
    };
    BudgetScore {
        // Spending exactly half the budget already earns full marks.
        score: round_score(ratio * 100.0 + 50.0),
        cost_spent,
        budget_max,
        percent_under_budget: (ratio * 100.0).max(0.0),
    }
}

fn accuracy_score(result: &FlightResult, mission: &Mission) -> AccuracyScore {
    let target = mission.requirements.target_orbit;
    let mut score;
    let mut deviation = 0.0;

    match (target, result.final_orbit) {
        (Some(t), Some(orbit)) => {
            if t.is_suborbital() {
                let apo_lower = t.apoapsis.min;
                let ratio = if apo_lower.is_finite() && apo_lower > 0.0 {
                    (result.max_altitude / apo_lower).min(1.0)
                } else {
                    1.0
                };
                score = round_score(ratio * 100.0);
                if apo_lower.is_finite() {
                    deviation = (apo_lower - result.max_altitude).max(0.0);
                }
            } else {
                let peri_mid = band_midpoint(&t.periapsis).unwrap_or(orbit.periapsis);
                let apo_mid = band_midpoint(&t.apoapsis).unwrap_or(orbit.apoapsis);
                let peri_error = (orbit.periapsis - peri_mid).abs();
                let apo_error = (orbit.apoapsis - apo_mid).abs();
                deviation = (peri_error + apo_error) / 2.0;
                let error_ratio = 1.0 - (deviation / (10.0 * ACCURACY_TOLERANCE)).min(1.0);
                score = round_score(error_ratio * 100.0);
            }
        }
        _ if result.outcome.is_success() => {
            // Partial credit for any orbit without a specific target.
            score = 75;
        }
        _ => {
            score = 0;
        }
    }

    if matches!(result.outcome, Outcome::Crash | Outcome::Suborbital | Outcome::FuelExhausted) {
        score = score.min(10);
    }

    AccuracyScore { score, orbital_deviation: deviation, inclination_error: 0.0 }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Score a finished flight. Pure function of (result, mission, cost); every
/// field of the returned breakdown is finite.
pub fn score(result: &FlightResult, mission: &Mission, rocket_cost: f64) -> ScoreBreakdown {
    let efficiency = efficiency_score(result, mission);
    let budget = budget_score(rocket_cost, mission.budget);
    let accuracy = accuracy_score(result, mission);

    let total =
        (efficiency.score as f64 + budget.score as f64 + accuracy.score as f64) / 3.0;
    let total_score = round_score(total);

    let stars = if !result.outcome.is_success() {
        0
    } else if total_score >= 80 {
        3
    } else if total_score >= 60 {
        2
    } else if total_score >= 40 {
        1
    } else {
        0
    };

    ScoreBreakdown { efficiency, budget, accuracy, total_score, stars }
}

/// Resolve bonus challenges against a finished flight. Bonuses are only
/// awarded on success outcomes. Predicate-shaped bonuses that fail fall
/// back to the legacy cost threshold embedded in their description.
pub fn resolve_bonuses(result: &FlightResult, mission: &Mission, rocket_cost: f64) -> Vec<String> {
    if !result.outcome.is_success() {
        return Vec::new();
    }
    mission
        .bonus_challenges
        .iter()
        .filter(|challenge| {
            let awarded = match challenge.condition {
                BonusCondition::MaxCost(max_cost) => rocket_cost <= max_cost,
                BonusCondition::Predicate(predicate) => predicate(result),
            };
            if awarded {
                return true;
            }
            match challenge.condition {
                BonusCondition::Predicate(_) => parse_cost_threshold(&challenge.description)
                    .map(|threshold| rocket_cost <= threshold)
                    .unwrap_or(false),
                _ => false,
            }
        })
        .map(|challenge| challenge.id.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Persisted mission result
// ---------------------------------------------------------------------------

pub const MISSION_RESULT_VERSION: u32 = 1;

/// Stable record handed to the progression layer after a flight is scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionResult {
    pub version: u32,
    pub mission_id: String,
    pub stars: u32,
    pub best_score: u32,
    pub best_rocket_config: RocketConfig,
    pub bonus_completed: Vec<String>,
    pub completed_at: u64, // Unix epoch seconds, supplied by the caller
    pub flight_result: FlightResult,
}

impl MissionResult {
    pub fn from_flight(
        mission: &Mission,
        rocket: &RocketConfig,
        flight_result: FlightResult,
        breakdown: &ScoreBreakdown,
        completed_at: u64,
    ) -> Self {
        let bonus_completed = resolve_bonuses(&flight_result, mission, rocket.total_cost);
        MissionResult {
            version: MISSION_RESULT_VERSION,
            mission_id: mission.id.clone(),
            stars: breakdown.stars,
            best_score: breakdown.total_score,
            best_rocket_config: rocket.clone(),
            bonus_completed,
            completed_at,
            flight_result,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
