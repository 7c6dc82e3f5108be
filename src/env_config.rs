//! Shared environment configuration for the server binary.
//!
//! Consolidates `HILO_BASE_PATH`, `HILO_PORT`, and `HILO_STATS_FILE` reads.

use std::path::PathBuf;

/// Read `HILO_BASE_PATH` (default `"."`), chdir, print path. Exits on failure.
pub fn init_base_path() -> PathBuf {
    let base_path = std::env::var("HILO_BASE_PATH").unwrap_or_else(|_| ".".to_string());
    println!("HILO_BASE_PATH={}", base_path);
    let path = PathBuf::from(&base_path);
    if std::env::set_current_dir(&base_path).is_err() {
        eprintln!("Failed to change directory to {}", base_path);
        std::process::exit(1);
    }
    if let Ok(cwd) = std::env::current_dir() {
        println!("Working directory: {}", cwd.display());
    }
    path
}

/// Read `HILO_PORT` (default 8080).
pub fn server_port() -> u16 {
    std::env::var("HILO_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080)
}

/// Read `HILO_STATS_FILE` (default `data/game_stats.json`).
pub fn stats_file_path() -> PathBuf {
    std::env::var("HILO_STATS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/game_stats.json"))
}
