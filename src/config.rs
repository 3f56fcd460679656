// Runtime configuration. Built once at startup (see `cli`) and handed by
// reference to whatever needs it; nothing here is global.

use std::time::Duration;

use crate::route::DEFAULT_CONSUMPTION;

/// Value shipped in place of a real MapQuest key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_MAPQUEST_API_KEY";
pub const DEFAULT_BASE_URL: &str = "http://www.mapquestapi.com/directions/v2/route";
pub const DEFAULT_LOCALE: &str = "es_ES";
pub const DEFAULT_COUNTRY: &str = "Chile";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub locale: String,
    /// Appended to every city name sent to the API ("<city>, <country>").
    pub country: String,
    pub litres_per_100km: f64,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: PLACEHOLDER_API_KEY.into(),
            base_url: DEFAULT_BASE_URL.into(),
            locale: DEFAULT_LOCALE.into(),
            country: DEFAULT_COUNTRY.into(),
            litres_per_100km: DEFAULT_CONSUMPTION,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// True when no real key was supplied; live lookups will almost
    /// certainly fail and the fallbacks take over.
    pub fn uses_placeholder_key(&self) -> bool {
        let key = self.api_key.trim();
        key.is_empty() || key == PLACEHOLDER_API_KEY
    }

    /// "Santiago" -> "Santiago, Chile"
    pub fn qualify(&self, city: &str) -> String {
        format!("{}, {}", city, self.country)
    }
}
