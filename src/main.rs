use std::time::{SystemTime, UNIX_EPOCH};

use ascent_sim::driver::{FlightDriver, GravityTurnAutopilot};
use ascent_sim::mission::presets;
use ascent_sim::scoring::MissionResult;
use ascent_sim::sim::FlightSimulator;
use ascent_sim::io;
use ascent_sim::vehicle::{EngineDef, EngineMount, RocketBuilder, StageConfig};

fn engine_catalog() -> Vec<EngineDef> {
    vec![
        EngineDef {
            id: "mule-1d".into(),
            thrust_sea_level: 1_200_000.0,
            thrust_vacuum: 1_300_000.0,
            isp_sea_level: 250.0,
            isp_vacuum: 280.0,
            dry_mass: 1_500.0,
            throttleable: true,
            min_throttle: 0.4,
            restartable: false,
        },
        EngineDef {
            id: "wren".into(),
            thrust_sea_level: 60_000.0,
            thrust_vacuum: 75_000.0,
            isp_sea_level: 290.0,
            isp_vacuum: 340.0,
            dry_mass: 300.0,
            throttleable: true,
            min_throttle: 0.1,
            restartable: true,
        },
    ]
}

fn main() {
    env_logger::init();

    let export = std::env::args().any(|a| a == "--export");

    let catalog = engine_catalog();
    let mission = presets::karman_hop();
    let rocket = RocketBuilder::new()
        .stage(StageConfig {
            engines: vec![EngineMount { engine_id: "mule-1d".into(), count: 2 }],
            fuel_mass: 30_000.0,
            structural_mass: 3_000.0,
        })
        .payload("instrument pod", 300.0)
        .cost(9_500_000.0)
        .build(&catalog)
        .expect("demo rocket must validate");

    let sim = FlightSimulator::new(rocket.clone(), mission.clone(), &catalog)
        .expect("demo config must resolve");

    println!();
    println!("====================================================================");
    println!("  FLIGHT SIMULATION — {} (tier {})", mission.name, mission.tier);
    println!("====================================================================");
    println!();

    for (i, stage) in rocket.stages.iter().enumerate() {
        let engines: Vec<String> = stage
            .engines
            .iter()
            .map(|m| format!("{}x {}", m.count, m.engine_id))
            .collect();
        println!("  Stage {} — {}", i + 1, engines.join(", "));
        println!("  ──────────────────────────────────────────────────────────────────");
        println!(
            "  Fuel: {:.0} kg   Structure: {:.0} kg",
            stage.fuel_mass, stage.structural_mass
        );
        println!();
    }

    println!(
        "  Payload: {} ({:.0} kg)   Cost: ${:.1}M",
        rocket.payload.name,
        rocket.payload.mass,
        rocket.total_cost / 1e6
    );
    println!(
        "  Total mass: {:.0} kg   Ideal dv: {:.0} m/s   Launch TWR: {:.2}",
        rocket.total_mass,
        sim.ideal_delta_v(),
        sim.launch_twr()
    );
    println!();

    // -----------------------------------------------------------------------
    // Fly under the ascent program
    // -----------------------------------------------------------------------
    let mut driver = FlightDriver::new(sim);
    let mut autopilot = GravityTurnAutopilot::vertical();
    let outcome = driver.run_with(&mut autopilot, 1.0 / 60.0, 2_000_000);

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for event in driver.simulator().events() {
        println!("  {:>8.2}s   {}", event.time, event.label);
    }
    println!();

    let result = driver.flight_result().expect("flight must terminate");
    println!("  Performance");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Outcome:       {:?}", outcome.expect("terminal outcome"));
    println!(
        "  Max altitude:  {:>8.0} m   ({:.1} km)",
        result.max_altitude,
        result.max_altitude / 1000.0
    );
    println!("  Delta-v used:  {:>8.0} m/s", result.total_delta_v_used);
    println!("  Flight time:   {:>8.1} s", result.flight_duration);
    if let Some(orbit) = &result.final_orbit {
        println!(
            "  Final orbit:   {:.0} x {:.0} km (e = {:.3})",
            orbit.apoapsis / 1000.0,
            orbit.periapsis / 1000.0,
            orbit.eccentricity
        );
    }
    println!();

    let breakdown = driver.score().expect("terminated flight is scored");
    println!("  Score");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Efficiency:  {:>3}   (used {:.0} m/s vs optimal {:.0} m/s)",
        breakdown.efficiency.score, breakdown.efficiency.dv_used, breakdown.efficiency.dv_optimal
    );
    println!(
        "  Budget:      {:>3}   ({:.0}% under budget)",
        breakdown.budget.score, breakdown.budget.percent_under_budget
    );
    println!(
        "  Accuracy:    {:>3}   (deviation {:.0} m)",
        breakdown.accuracy.score, breakdown.accuracy.orbital_deviation
    );
    println!(
        "  Total: {}   Stars: {}",
        breakdown.total_score,
        "*".repeat(breakdown.stars as usize)
    );

    let completed_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let record =
        MissionResult::from_flight(&mission, &rocket, result, breakdown, completed_at);
    if !record.bonus_completed.is_empty() {
        println!("  Bonus completed: {}", record.bonus_completed.join(", "));
    }
    println!();

    // -----------------------------------------------------------------------
    // Export if requested
    // -----------------------------------------------------------------------
    if export {
        let csv_path = "flight_history.csv";
        let json_path = "mission_result.json";
        io::csv::write_history_file(csv_path, driver.simulator().history())
            .expect("Failed to write CSV");
        io::report::write_report_file(json_path, &record).expect("Failed to write JSON");
        println!("  Exported: {} and {}", csv_path, json_path);
    } else {
        println!("  Run with --export to save flight_history.csv and mission_result.json");
    }
    println!("====================================================================");
    println!();
}
