use mock_server::Mode;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `MOCK_MODE` selects a failure mode so the client's fallback can be tried
/// by hand: `healthy` (default), `failing`, or `malformed`.
fn mode_from_env() -> Mode {
    match std::env::var("MOCK_MODE").as_deref() {
        Ok("failing") => Mode::Failing(503),
        Ok("malformed") => Mode::MalformedDistricts,
        _ => Mode::Healthy,
    }
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let mode = mode_from_env();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, ?mode, "listening");
    mock_server::run_with(listener, mode).await
}
