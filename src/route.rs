// Route record and the small pieces of arithmetic that go with it.
// Every lookup, whatever its source, ends up as a `RouteResult` which the
// formatter knows how to print.

use std::fmt;

/// Average consumption used when nothing else is configured (litres / 100 km).
pub const DEFAULT_CONSUMPTION: f64 = 8.0;

/// Which stage of the fallback chain produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSource {
    LiveApi,
    StaticTable,
    Estimated,
}

impl fmt::Display for RouteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteSource::LiveApi => write!(f, "MapQuest"),
            RouteSource::StaticTable => write!(f, "Preloaded data"),
            RouteSource::Estimated => write!(f, "Estimate"),
        }
    }
}

/// Normalized result of a directions query. Created fresh for every query
/// and never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub distance_km: f64,
    pub duration_secs: u64,
    pub fuel_litres: f64,
    /// Turn-by-turn instructions, in order. May be empty.
    pub narrative: Vec<String>,
    pub source: RouteSource,
}

/// Fuel needed for `distance_km` at `litres_per_100km`.
pub fn estimate_fuel(distance_km: f64, litres_per_100km: f64) -> f64 {
    distance_km * litres_per_100km / 100.0
}

/// Split a duration in seconds into (hours, minutes, seconds).
pub fn split_duration(secs: u64) -> (u64, u64, u64) {
    (secs / 3600, (secs % 3600) / 60, secs % 60)
}
