mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::AdminConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        backend = %config.backend_url,
        timeout_secs = config.backend_timeout_secs,
        query_mode = config.comment_query_mode.as_str(),
        locale = config.locale.tag(),
        "configuration loaded"
    );

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "storefront admin listening");
    axum::serve(listener, app).await.expect("server failed");
}
