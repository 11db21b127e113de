/// One-time tracing init for the host process, later calls are no-ops
pub fn init() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_log::LogTracer::init();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
