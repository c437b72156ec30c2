use tracing_subscriber::EnvFilter;

/// Respects `RUST_LOG`, defaults to `info`. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init();
}
