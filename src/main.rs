#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let state = proxy::ProxyState::new(&config).expect("failed to build upstream client");
    let app = routes::app(state).expect("failed to assemble router");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.upstream_url, "smart attendance listening");
    axum::serve(listener, app).await.expect("server failed");
}
