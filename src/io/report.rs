use std::io::{self, Write};

use crate::scoring::MissionResult;

/// Write a mission result as pretty-printed JSON.
pub fn write_report<W: Write>(writer: &mut W, result: &MissionResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer)
}

/// Write a mission result JSON report to a file.
pub fn write_report_file(path: &str, result: &MissionResult) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::presets;
    use crate::scoring::{self, MISSION_RESULT_VERSION};
    use crate::sim::{FlightResult, Outcome};
    use crate::vehicle::{EngineDef, EngineMount, RocketBuilder, StageConfig};

    #[test]
    fn report_is_valid_versioned_json() {
        let catalog = vec![EngineDef {
            id: "e".into(),
            thrust_sea_level: 1e6,
            thrust_vacuum: 1.1e6,
            isp_sea_level: 260.0,
            isp_vacuum: 300.0,
            dry_mass: 1_000.0,
            throttleable: true,
            min_throttle: 0.5,
            restartable: false,
        }];
        let rocket = RocketBuilder::new()
            .stage(StageConfig {
                engines: vec![EngineMount { engine_id: "e".into(), count: 1 }],
                fuel_mass: 10_000.0,
                structural_mass: 1_000.0,
            })
            .payload("sat", 100.0)
            .cost(9_000_000.0)
            .build(&catalog)
            .unwrap();

        let mission = presets::karman_hop();
        let flight = FlightResult {
            outcome: Outcome::MissionComplete,
            history: vec![],
            final_orbit: None,
            total_delta_v_used: 1_800.0,
            max_altitude: 104_000.0,
            flight_duration: 130.0,
        };
        let breakdown = scoring::score(&flight, &mission, rocket.total_cost);
        let record =
            scoring::MissionResult::from_flight(&mission, &rocket, flight, &breakdown, 1_754_000_000);

        let mut buf = Vec::new();
        write_report(&mut buf, &record).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["version"], MISSION_RESULT_VERSION);
        assert_eq!(json["mission_id"], "karman-hop");
        assert!(json["flight_result"]["outcome"].is_string());
    }
}
