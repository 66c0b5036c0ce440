//! Logger initialization and subscriber setup.

use crate::Config;

/// Default filter directive when none is configured or the configured one is invalid.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes logging for the current target.
///
/// In the browser, `tracing` records are forwarded through the `log` bridge
/// to `console_log`, which writes them to the developer console. Elsewhere a
/// `tracing-subscriber` registry filters them with an `EnvFilter` and formats
/// them as single lines on stderr, without timestamps or ANSI colors.
///
/// # Initialization Behavior
///
/// - An invalid `trace_level` falls back to [`DEFAULT_TRACE_LEVEL`]
/// - Idempotent: safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use jitters::observability::init_tracing;
/// use jitters::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    if install(level) {
        tracing::debug!(level = level, "tracing initialized");
    }
}

#[cfg(target_arch = "wasm32")]
fn install(level: &str) -> bool {
    let level = level.trim().parse::<log::Level>().unwrap_or(log::Level::Info);
    console_log::init_with_level(level).is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn install(level: &str) -> bool {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));
    let fmt_layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
