// Logger setup. Diagnostics share stdout with the route output so a failed
// live lookup is reported right above the fallback data it caused.

use env_logger::{Builder, Env, Target};

/// Logger configured the way `init_logging` installs it. `RUST_LOG`
/// overrides the default `warn` filter.
pub fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder
        .format_timestamp_secs()
        .format_module_path(false)
        .target(Target::Stdout);
    builder
}

/// Install the global logger.
pub fn init_logging() {
    builder().init();
}
