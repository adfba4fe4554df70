#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // `.env` is optional; real environment variables win.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::app().expect("leptos configuration");

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "medicare listening");
    axum::serve(listener, app).await.expect("server failed");
}
