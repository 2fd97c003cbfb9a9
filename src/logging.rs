//! Logging init: structured `tracing` output on stderr.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,filedrop=info";
const VERBOSE_FILTER: &str = "info,filedrop=debug";

/// Install the global subscriber. `RUST_LOG` wins over the built-in filter.
///
/// Returns false when a subscriber was already installed (e.g. by a host
/// application or an earlier call); that is not an error.
pub fn init_logging(verbose: bool) -> bool {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
