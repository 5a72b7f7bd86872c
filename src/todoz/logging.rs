use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a `tracing` filter directive, e.g. `todoz=debug`.
pub const LOG_ENV: &str = "TODOZ_LOG";

/// Install the global subscriber. Logs go to stderr so they never mix with
/// list output.
///
/// `verbose` forces debug output for this crate regardless of `TODOZ_LOG`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("todoz=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
