use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`
/// (default `convert_core=warn`). Later calls do nothing.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("convert_core=warn")),
            )
            .try_init();
    });
}
