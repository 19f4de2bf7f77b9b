/// Tracing subscriber setup
///
/// `RUST_LOG` takes priority; otherwise the configured `log_level` is used.
/// Safe to call more than once, only the first call installs a subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
