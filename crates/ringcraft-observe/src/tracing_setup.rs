//! Tracing subscriber initialization.
//!
//! One initialization path for both the CLI and the server: a `fmt` layer
//! filtered by `RUST_LOG` when set, or the caller's default directive
//! otherwise. JSON output is for deployments that ship logs to a
//! collector; the human format is the default everywhere else.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset (e.g. `"info"` or
/// `"warn,ringcraft=debug"`).
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_tracing(
    default_filter: &str,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if json_output {
        let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
