use tracing_subscriber::{EnvFilter, fmt};

/// Logs go to stderr so the report on stdout stays machine readable.
pub fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
