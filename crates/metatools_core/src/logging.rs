use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by `RUST_LOG` (falls back to [`DEFAULT_FILTER`]).
///
/// Stdout is left untouched so tool output can be piped. Calling this more than once is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Fails only when a global subscriber is already set.
    let _ = tracing_subscriber::registry().with(filter).with(stderr_layer).try_init();
}
