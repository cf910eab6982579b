mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;

    match config.api_upstream.as_deref() {
        Some(upstream) => tracing::info!(%upstream, timeout_secs = config.proxy_timeout_secs, "API proxy enabled"),
        None => tracing::warn!("API_UPSTREAM_URL not set; /v1 requests will answer 502"),
    }

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "resume-desk listening");
    axum::serve(listener, app).await.expect("server failed");
}
