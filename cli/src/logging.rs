use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays clean JSON. `RUST_LOG` overrides the level.
pub fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let default = format!("{level},geo_core={level},gz_geo={level},ureq=warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
