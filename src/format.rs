// Console rendering of a route. Writes to any `io::Write` so the driver can
// print to stdout and tests can capture into a buffer.

use std::io::{self, Write};

use crate::route::{split_duration, RouteResult};

const WIDE: usize = 50;
const NARROW: usize = 30;

/// Print the trip summary block, or a failure line when there is no route.
pub fn render_route<W: Write>(
    out: &mut W,
    route: Option<&RouteResult>,
    origin: &str,
    destination: &str,
) -> io::Result<()> {
    let route = match route {
        Some(route) => route,
        None => {
            writeln!(out, "Could not retrieve route information")?;
            return Ok(());
        }
    };

    let (hours, minutes, seconds) = split_duration(route.duration_secs);
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(WIDE))?;
    writeln!(out, "TRIP RESULTS")?;
    writeln!(out, "{}", "=".repeat(WIDE))?;
    writeln!(out, "Origin: {}", origin)?;
    writeln!(out, "Destination: {}", destination)?;
    writeln!(out, "Distance: {:.2} km", route.distance_km)?;
    writeln!(
        out,
        "Duration: {} hours, {} minutes, {} seconds",
        hours, minutes, seconds
    )?;
    writeln!(out, "Fuel: {:.2} litres", route.fuel_litres)?;
    writeln!(out, "Source: {}", route.source)?;

    writeln!(out)?;
    writeln!(out, "TRIP NARRATIVE:")?;
    writeln!(out, "{}", "-".repeat(NARROW))?;
    for (i, step) in route.narrative.iter().enumerate() {
        writeln!(out, "{:2}. {}", i + 1, step)?;
    }
    writeln!(out, "{}", "=".repeat(WIDE))?;
    Ok(())
}
