use std::cell::Cell;

use rutacalc::api::DirectionsProvider;
use rutacalc::config::Config;
use rutacalc::error::RouteError;
use rutacalc::fallback::FallbackChain;
use rutacalc::route::{RouteResult, RouteSource};
use rutacalc::ui::{self, LinePrompt};

/// Provider whose every lookup fails, counting the attempts.
#[derive(Default)]
struct Offline {
    calls: Cell<usize>,
}

impl DirectionsProvider for Offline {
    fn directions(&self, _: &str, _: &str) -> Result<RouteResult, RouteError> {
        self.calls.set(self.calls.get() + 1);
        Err(RouteError::Malformed("offline".into()))
    }
}

struct Online;

impl DirectionsProvider for Online {
    fn directions(&self, _: &str, _: &str) -> Result<RouteResult, RouteError> {
        Ok(RouteResult {
            distance_km: 123.456,
            duration_secs: 5000,
            fuel_litres: 9.87,
            narrative: vec!["Siga recto".into()],
            source: RouteSource::LiveApi,
        })
    }
}

/// Run a full session over `input`; returns (output, echoed prompts).
fn session<D: DirectionsProvider>(config: &Config, provider: D, input: &str) -> (String, String) {
    let chain = FallbackChain::new(provider, config);
    let mut prompt = LinePrompt::new(input.as_bytes(), Vec::new());
    let mut out = Vec::new();
    ui::run(config, &chain, &mut prompt, &mut out).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(prompt.into_echo()).unwrap(),
    )
}

#[test]
fn quit_at_origin_stops_immediately() {
    let (out, prompts) = session(&Config::default(), Offline::default(), "q\nSantiago\nOvalle\n");
    assert_eq!(prompts, "Origin city: ");
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn uppercase_quit_at_destination() {
    let (out, prompts) = session(&Config::default(), Offline::default(), "Talca\nQ\n");
    assert_eq!(prompts, "Origin city: Destination city: ");
    assert!(out.contains("Goodbye!"));
    assert!(!out.contains("Searching route"));
}

#[test]
fn mandatory_route_uses_static_table_when_offline() {
    let (out, _) = session(&Config::default(), Offline::default(), "q\n");
    assert!(out.contains("WARNING: MapQuest API key not configured"));
    assert!(out.contains("MANDATORY ROUTE: Santiago -> Ovalle"));
    assert!(out.contains("Distance: 347.50 km"));
    assert!(out.contains("Duration: 4 hours, 0 minutes, 0 seconds"));
    assert!(out.contains("Fuel: 27.80 litres"));
    assert!(out.contains("Source: Preloaded data"));
    assert!(out.contains(" 4. Llegar a Ovalle, Región de Coquimbo"));
}

#[test]
fn user_pair_offline_is_estimated() {
    let provider = Offline::default();
    let config = Config::default();
    let chain = FallbackChain::new(&provider, &config);
    let mut prompt = LinePrompt::new("Santiago\nOvalle\nq\n".as_bytes(), Vec::new());
    let mut out = Vec::new();
    ui::run(&config, &chain, &mut prompt, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    // the user flow never consults the static table
    assert_eq!(out.matches("Source: Preloaded data").count(), 1);
    assert!(out.contains("Searching route: Santiago -> Ovalle"));
    assert!(out.contains("using a distance estimate"));
    assert!(out.contains("Distance: 300.00 km"));
    assert!(out.contains("Duration: 3 hours, 0 minutes, 0 seconds"));
    assert!(out.contains("Fuel: 24.00 litres"));
    assert!(out.contains("Source: Estimate"));
    assert!(out.contains(" 1. Ruta estimada desde Santiago"));
    // one mandatory attempt plus one user attempt, no retries
    assert_eq!(provider.calls.get(), 2);
}

#[test]
fn blank_field_restarts_whole_pair() {
    let (out, prompts) = session(
        &Config::default(),
        Offline::default(),
        "Talca\n\nTalca\nLinares\nq\n",
    );
    assert_eq!(out.matches("Please enter both cities").count(), 1);
    assert_eq!(prompts.matches("Origin city: ").count(), 3);
    assert_eq!(prompts.matches("Destination city: ").count(), 2);
    assert!(out.contains("Searching route: Talca -> Linares"));
}

#[test]
fn blank_origin_still_asks_destination() {
    let (out, prompts) = session(&Config::default(), Offline::default(), "\nLinares\nq\n");
    assert!(out.contains("Please enter both cities"));
    assert_eq!(prompts, "Origin city: Destination city: Origin city: ");
}

#[test]
fn end_of_input_terminates() {
    let (out, _) = session(&Config::default(), Offline::default(), "Talca\nLinares\n");
    assert!(out.contains("Searching route: Talca -> Linares"));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn live_results_are_shown_as_is() {
    let config = Config {
        api_key: "real-key".into(),
        ..Config::default()
    };
    let (out, _) = session(&config, Online, "Talca\nLinares\nq\n");
    assert!(!out.contains("WARNING"));
    assert_eq!(out.matches("Source: MapQuest").count(), 2);
    assert!(out.contains("Distance: 123.46 km"));
    assert!(out.contains("Duration: 1 hours, 23 minutes, 20 seconds"));
    assert!(out.contains("Fuel: 9.87 litres"));
    assert!(!out.contains("using a distance estimate"));
}
