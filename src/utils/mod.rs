pub mod build_info;

/// Installs the global tracing subscriber. The crate logs at `info` unless
/// `RUST_LOG` overrides the filter.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env()
        .add_directive("meal_ledger=info".parse().expect("static directive"));
    fmt().with_env_filter(filter).init();
}
