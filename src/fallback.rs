// Fallback chain: live API first, then the preloaded table (mandatory route
// only) or a flat estimate (user routes).

use std::collections::HashMap;

use crate::api::DirectionsProvider;
use crate::config::Config;
use crate::route::{estimate_fuel, RouteResult, RouteSource};

/// The pair looked up before the interactive loop starts.
pub const MANDATORY_ORIGIN: &str = "Santiago";
pub const MANDATORY_DESTINATION: &str = "Ovalle";

pub const ESTIMATED_DISTANCE_KM: f64 = 300.0;
pub const ESTIMATED_DURATION_SECS: u64 = 10_800;

/// Normalized (origin, destination) pair. Order matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub origin: String,
    pub destination: String,
}

impl RouteKey {
    pub fn new(origin: &str, destination: &str, country: &str) -> Self {
        RouteKey {
            origin: normalize_city(origin, country),
            destination: normalize_city(destination, country),
        }
    }
}

/// Lowercase, drop punctuation and a trailing country token, collapse
/// whitespace. "Santiago, Chile" -> "santiago".
pub fn normalize_city(city: &str, country: &str) -> String {
    let cleaned: String = city
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let country = country.to_lowercase();
    if tokens.len() > 1 && tokens.last() == Some(&country.as_str()) {
        tokens.pop();
    }
    tokens.join(" ")
}

/// Hand-authored routes used when the live lookup for a known pair fails.
#[derive(Debug, Clone)]
pub struct StaticRouteTable {
    country: String,
    routes: HashMap<RouteKey, RouteResult>,
}

impl StaticRouteTable {
    /// The built-in table. Currently a single entry, Santiago -> Ovalle.
    pub fn builtin(country: &str) -> Self {
        let mut routes = HashMap::new();
        routes.insert(
            RouteKey {
                origin: "santiago".into(),
                destination: "ovalle".into(),
            },
            RouteResult {
                distance_km: 347.5,
                duration_secs: 14_400,
                fuel_litres: 27.8,
                narrative: vec![
                    "Salir de Santiago por Ruta 5 Norte".into(),
                    "Continuar por Autopista del Norte durante 280 km".into(),
                    "Tomar desvío hacia Ovalle por Ruta 43".into(),
                    "Llegar a Ovalle, Región de Coquimbo".into(),
                ],
                source: RouteSource::StaticTable,
            },
        );
        StaticRouteTable {
            country: country.to_string(),
            routes,
        }
    }

    pub fn lookup(&self, origin: &str, destination: &str) -> Option<RouteResult> {
        let key = RouteKey::new(origin, destination, &self.country);
        log::debug!("Static table lookup {:?}", key);
        self.routes.get(&key).cloned()
    }
}

/// Generic placeholder route for pairs nobody could answer for.
pub fn estimate_route(origin: &str, destination: &str, litres_per_100km: f64) -> RouteResult {
    RouteResult {
        distance_km: ESTIMATED_DISTANCE_KM,
        duration_secs: ESTIMATED_DURATION_SECS,
        fuel_litres: estimate_fuel(ESTIMATED_DISTANCE_KM, litres_per_100km),
        narrative: vec![
            format!("Ruta estimada desde {}", origin),
            "Tomar carretera principal".to_string(),
            format!("Continuar hacia {}", destination),
            format!("Llegar a {}", destination),
        ],
        source: RouteSource::Estimated,
    }
}

/// Wires a provider, the static table and the estimate together.
pub struct FallbackChain<P> {
    provider: P,
    table: StaticRouteTable,
    config: Config,
}

impl<P: DirectionsProvider> FallbackChain<P> {
    pub fn new(provider: P, config: &Config) -> Self {
        FallbackChain {
            provider,
            table: StaticRouteTable::builtin(&config.country),
            config: config.clone(),
        }
    }

    fn live(&self, origin: &str, destination: &str) -> Option<RouteResult> {
        let from = self.config.qualify(origin);
        let to = self.config.qualify(destination);
        match self.provider.directions(&from, &to) {
            Ok(route) => Some(route),
            Err(e) => {
                log::warn!("Live lookup {} -> {} failed ({:?}): {}", from, to, e.kind(), e);
                None
            }
        }
    }

    /// Live API, then the static table. `None` only when both miss.
    pub fn mandatory(&self, origin: &str, destination: &str) -> Option<RouteResult> {
        self.live(origin, destination).or_else(|| {
            log::info!("Using preloaded data for {} -> {}", origin, destination);
            self.table.lookup(origin, destination)
        })
    }

    /// Live API, then the flat estimate. Always yields a route.
    pub fn user(&self, origin: &str, destination: &str) -> RouteResult {
        match self.live(origin, destination) {
            Some(route) => route,
            None => {
                log::info!("Estimating {} -> {}", origin, destination);
                estimate_route(origin, destination, self.config.litres_per_100km)
            }
        }
    }
}
