// Own test binary: it installs the global logger, which can only happen once.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use env_logger::Target;
use log::LevelFilter;

use rutacalc::api::DirectionsProvider;
use rutacalc::config::Config;
use rutacalc::error::RouteError;
use rutacalc::fallback::FallbackChain;
use rutacalc::logging;
use rutacalc::route::{RouteResult, RouteSource};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Rejected;

impl DirectionsProvider for Rejected {
    fn directions(&self, _: &str, _: &str) -> Result<RouteResult, RouteError> {
        Err(RouteError::Api {
            code: 403,
            messages: vec!["Key not authorized".into()],
        })
    }
}

#[test]
fn failed_live_lookup_is_reported_on_output() {
    let buf = SharedBuf::default();
    logging::builder()
        .filter_level(LevelFilter::Warn)
        .target(Target::Pipe(Box::new(buf.clone())))
        .init();

    let chain = FallbackChain::new(Rejected, &Config::default());
    let route = chain.user("Arica", "Iquique");
    assert_eq!(route.source, RouteSource::Estimated);

    let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("WARN"), "log: {}", logged);
    assert!(logged.contains("Arica, Chile -> Iquique, Chile"), "log: {}", logged);
    assert!(logged.contains("Key not authorized"), "log: {}", logged);
}
