use std::io::{self, Write};

use crate::sim::FlightSnapshot;

/// Write flight history to CSV format.
///
/// Columns: time, altitude, speed, mass, fuel, stage, throttle, pitch_deg,
///          pos_x, pos_y, apoapsis, periapsis
pub fn write_history<W: Write>(writer: &mut W, history: &[FlightSnapshot]) -> io::Result<()> {
    writeln!(
        writer,
        "time,altitude,speed,mass,fuel,stage,throttle,pitch_deg,pos_x,pos_y,apoapsis,periapsis"
    )?;

    for snap in history {
        let (apo, peri) = match &snap.orbit {
            Some(orbit) => (format!("{:.1}", orbit.apoapsis), format!("{:.1}", orbit.periapsis)),
            None => (String::new(), String::new()),
        };
        writeln!(
            writer,
            "{:.4},{:.2},{:.2},{:.2},{:.2},{},{:.2},{:.1},{:.2},{:.2},{},{}",
            snap.time,
            snap.altitude,
            snap.speed,
            snap.mass,
            snap.fuel,
            snap.active_stage,
            snap.throttle,
            snap.pitch_deg,
            snap.position.x,
            snap.position.y,
            apo,
            peri,
        )?;
    }

    Ok(())
}

/// Write flight history to a CSV file at the given path.
pub fn write_history_file(path: &str, history: &[FlightSnapshot]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_history(&mut file, history)
}
