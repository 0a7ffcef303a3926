use tracing_subscriber::EnvFilter;

/// Env var with the log filter directives, e.g. `PEXELS_LOG=pexels_random=debug`.
pub const LOG_ENV: &str = "PEXELS_LOG";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}
