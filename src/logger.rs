use std::env;
use tracing_subscriber::EnvFilter;

const CI_VAR: &str = "CI";

/// Installs a tracing subscriber for test binaries.
///
/// On CI logs are emitted as json including the current span, otherwise the filter is read
/// from `RUST_LOG` and defaults to `info`. Calling it more than once is a no-op.
pub fn init() {
    let _ = match env::var_os(CI_VAR) {
        Some(_) => tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::INFO)
            .with_current_span(true)
            .with_test_writer()
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with_test_writer()
            .try_init(),
    };
}

