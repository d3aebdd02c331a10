//! HTTP front-end for `crack_time` (feature `server`): serves the estimation
//! API built in [`crack_time::http`] over `axum`.

use crack_time::http;

#[tokio::main]
async fn main() {
    env_logger::init();

    let addr = std::env::var("CRACK_TIME_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.expect("failed to bind listen address");
    log::info!("crack-time-server listening on {addr}");

    axum::serve(listener, http::router()).await.expect("server error");
}
