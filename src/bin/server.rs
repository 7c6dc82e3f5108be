use std::sync::Arc;

use hilo::env_config;
use hilo::server::{create_router, AppState};
use hilo::stats::StatsStore;

#[tokio::main]
async fn main() {
    let _base = env_config::init_base_path();
    let port = env_config::server_port();
    let stats_path = env_config::stats_file_path();
    println!("Starting hilo game server...");

    let stats = StatsStore::load(&stats_path);
    println!("Stats file: {}", stats_path.display());

    let state = Arc::new(AppState::new(stats));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    println!("Server is running on port {}. Press Ctrl+C to stop.", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("\nStopping server...");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
