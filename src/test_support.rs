use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness; set `RUST_LOG=debug` to see it.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
