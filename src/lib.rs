//! # hilo: a number-guessing game server
//!
//! A single-player higher/lower guessing game served over HTTP. The server
//! draws a secret number in a difficulty-dependent range, the player submits
//! guesses, and the server answers with hints until the game is won or the
//! attempt budget runs out. Aggregate statistics (totals, top-10 leaderboard,
//! last 10 games) survive restarts in a small JSON file.
//!
//! ## Architecture
//!
//! | Concern | Module | Description |
//! |---------|--------|-------------|
//! | Rules | [`game_mechanics`] | Difficulty table, guess evaluation, win scoring (pure, RNG injected) |
//! | Per-player state | [`sessions`] | Cookie-keyed store of [`types::GameSession`] with idle expiry |
//! | Aggregates | [`stats`] | Mutex-guarded stats document, rewritten to disk per completed game |
//! | Persistence | [`storage`] | Fail-open JSON load / whole-file save of the stats document |
//! | HTTP | [`server`] | Axum router: view, guess, new game, stats, health |
//!
//! ## Game flow
//!
//! A session starts on medium difficulty (7 attempts, range 1-100). Each
//! valid guess costs one attempt; a correct guess on attempt k awards
//! `max(100 - 10k, 10)` points to the session's running score. Win and lose
//! both complete the game and are recorded in the stats document exactly once.

pub mod constants;
pub mod env_config;
pub mod game_mechanics;
pub mod server;
pub mod sessions;
pub mod stats;
pub mod storage;
pub mod types;
