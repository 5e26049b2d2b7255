use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "RINGBOX_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the global fmt subscriber, writing to stderr.
///
/// `RINGBOX_LOG` takes precedence over `RUST_LOG`; with neither set the
/// filter is `info`. Calling this twice is harmless.
pub fn init_tracing() {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|err| {
            eprintln!("invalid {LOG_ENV} directive ({err}); defaulting to {DEFAULT_FILTER}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        Err(_) => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
