// API client module: a small blocking HTTP client for the MapQuest
// directions endpoint. One GET per lookup, no retries, no caching.
//
// Failures never escape as panics: `DirectionsProvider::directions` returns
// a `RouteError` and the fallback chain decides what to do with it.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::RouteError;
use crate::route::{estimate_fuel, RouteResult, RouteSource};

/// Anything able to answer "how do I get from A to B". `RouteClient` is the
/// real one; tests plug in their own.
pub trait DirectionsProvider {
    fn directions(&self, origin: &str, destination: &str) -> Result<RouteResult, RouteError>;
}

impl<T: DirectionsProvider + ?Sized> DirectionsProvider for &T {
    fn directions(&self, origin: &str, destination: &str) -> Result<RouteResult, RouteError> {
        (**self).directions(origin, destination)
    }
}

/// Blocking client that holds a reqwest client plus the request settings
/// taken from `Config`.
#[derive(Clone)]
pub struct RouteClient {
    client: Client,
    base_url: String,
    api_key: String,
    locale: String,
    litres_per_100km: f64,
}

// --- Response shapes. Only the fields we read are declared. ---

#[derive(Deserialize, Debug)]
struct DirectionsResponse {
    info: Info,
    // Error replies carry a partial `route`; only decoded once the status is 0
    #[serde(default)]
    route: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
struct Info {
    statuscode: i64,
    #[serde(default)]
    messages: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Route {
    distance: f64,
    time: u64,
    fuel_used: Option<f64>,
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Deserialize, Debug)]
struct Leg {
    #[serde(default)]
    maneuvers: Vec<Maneuver>,
}

#[derive(Deserialize, Debug)]
struct Maneuver {
    narrative: String,
}

impl RouteClient {
    /// Build a client from the runtime configuration. The request timeout
    /// comes from `Config::timeout`.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(RouteClient {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            locale: config.locale.clone(),
            litres_per_100km: config.litres_per_100km,
        })
    }
}

impl DirectionsProvider for RouteClient {
    fn directions(&self, origin: &str, destination: &str) -> Result<RouteResult, RouteError> {
        log::debug!("Requesting directions {} -> {}", origin, destination);
        let res = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("from", origin),
                ("to", destination),
                ("unit", "k"),
                ("routeType", "fastest"),
                ("doReverseGeocode", "false"),
                ("locale", self.locale.as_str()),
            ])
            .send()?;

        let status = res.status();
        if !status.is_success() {
            return Err(RouteError::Http {
                status: status.as_u16(),
            });
        }
        let body = res.text()?;
        parse_directions(&body, self.litres_per_100km)
    }
}

/// Turn a directions response body into a `RouteResult`. Fuel falls back to
/// `estimate_fuel` when the API leaves `fuelUsed` out; the narrative is the
/// first leg's maneuvers, in order.
pub fn parse_directions(body: &str, litres_per_100km: f64) -> Result<RouteResult, RouteError> {
    let resp: DirectionsResponse = serde_json::from_str(body)?;
    if resp.info.statuscode != 0 {
        return Err(RouteError::Api {
            code: resp.info.statuscode,
            messages: resp.info.messages,
        });
    }
    let route: Route = match resp.route {
        Some(value) => serde_json::from_value(value)?,
        None => return Err(RouteError::Malformed("missing `route` object".into())),
    };

    if route.distance < 0.0 {
        return Err(RouteError::Malformed(format!(
            "invalid distance {}",
            route.distance
        )));
    }
    let fuel_litres = match route.fuel_used {
        Some(fuel) if fuel >= 0.0 => fuel,
        Some(fuel) => {
            return Err(RouteError::Malformed(format!("invalid fuelUsed {}", fuel)));
        }
        None => estimate_fuel(route.distance, litres_per_100km),
    };
    let narrative = route
        .legs
        .into_iter()
        .next()
        .map(|leg| leg.maneuvers.into_iter().map(|m| m.narrative).collect())
        .unwrap_or_default();

    Ok(RouteResult {
        distance_km: route.distance,
        duration_secs: route.time,
        fuel_litres,
        narrative,
        source: RouteSource::LiveApi,
    })
}
