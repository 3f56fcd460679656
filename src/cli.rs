// Command-line / environment binding for `Config`. Every flag can also be
// set through the environment (or a `.env` file loaded by `main`).

use std::time::Duration;

use clap::Parser;

use crate::config::{
    Config, DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_LOCALE, DEFAULT_TIMEOUT_SECS,
    PLACEHOLDER_API_KEY,
};
use crate::route::DEFAULT_CONSUMPTION;

/// Route calculator: distance, duration and fuel between two cities
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// MapQuest API key
    #[arg(long, env = "MAPQUEST_API_KEY", default_value = PLACEHOLDER_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Directions endpoint
    #[arg(long, env = "MAPQUEST_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Locale used for the turn-by-turn narrative
    #[arg(long, env = "ROUTE_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Country appended to every city name
    #[arg(long, env = "ROUTE_COUNTRY", default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Fuel consumption in litres per 100 km
    #[arg(long, env = "FUEL_CONSUMPTION", default_value_t = DEFAULT_CONSUMPTION, value_parser = parse_consumption)]
    pub consumption: f64,

    /// Request timeout in seconds
    #[arg(long, env = "MAPQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,
}

/// Consumption must be a finite, non-negative number of litres.
fn parse_consumption(raw: &str) -> Result<f64, String> {
    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a number", raw))?;
    if !rate.is_finite() || rate < 0.0 {
        return Err(format!("consumption must be a finite value >= 0, got `{}`", raw));
    }
    Ok(rate)
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            api_key: cli.api_key,
            base_url: cli.base_url,
            locale: cli.locale,
            country: cli.country,
            litres_per_100km: cli.consumption,
            timeout: Duration::from_secs(cli.timeout_secs),
        }
    }
}
