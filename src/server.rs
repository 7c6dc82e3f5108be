//! Axum HTTP server: game endpoints for the hilo frontend.
//!
//! Handlers share one [`AppState`] (session store + stats store) as
//! `Arc<AppState>`. The session key travels in a cookie; any game endpoint
//! reached without a live session transparently creates one and sets the
//! cookie on the response.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/` | Current session view plus stats snapshot |
//! | POST | `/guess` | Submit a guess (form field `guess`) |
//! | POST | `/new_game` | Start a new game (form fields `difficulty`, `player_name`) |
//! | GET | `/stats` | The persisted stats document |
//!
//! Game-flow errors (bad range, non-numeric guess, guessing a finished game)
//! are ordinary 200 responses with `result: "error"` and a readable
//! `message`; HTTP status codes are not used for game outcomes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::constants::SESSION_COOKIE;
use crate::game_mechanics::{evaluate_guess, start_game};
use crate::sessions::SessionStore;
use crate::stats::{StatsDocument, StatsStore};
use crate::types::{Difficulty, GuessOutcome, HintDirection};

pub struct AppState {
    pub sessions: SessionStore,
    pub stats: StatsStore,
}

impl AppState {
    pub fn new(stats: StatsStore) -> Self {
        AppState {
            sessions: SessionStore::new(),
            stats,
        }
    }
}

pub type SharedState = Arc<AppState>;

pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/", get(handle_view_game))
        .route("/guess", post(handle_guess))
        .route("/new_game", post(handle_new_game))
        .route("/stats", get(handle_get_stats))
        .layer(cors)
        .with_state(state)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct GuessForm {
    guess: Option<String>,
}

#[derive(Deserialize)]
struct NewGameForm {
    difficulty: Option<String>,
    player_name: Option<String>,
}

// ── Session cookie plumbing ─────────────────────────────────────────

/// Extract the session key from the `Cookie` header, if any.
fn session_key_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .map(str::to_string)
}

/// JSON response, issuing the session cookie when the session is new.
fn json_with_session(body: serde_json::Value, key: &str, created: bool) -> Response {
    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, key);
        (AppendHeaders([(header::SET_COOKIE, cookie)]), Json(body)).into_response()
    } else {
        Json(body).into_response()
    }
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_view_game(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Response {
    let (key, created) = state.sessions.resolve(session_key_from_headers(&headers).as_deref());
    let (attempts, max_attempts, score, player_name, game_over) = state.sessions.update(&key, |s| {
        (
            s.attempts,
            s.max_attempts,
            s.score,
            s.player_name.clone(),
            s.game_over,
        )
    });

    let body = serde_json::json!({
        "attempts": attempts,
        "max_attempts": max_attempts,
        "score": score,
        "player_name": player_name,
        "game_over": game_over,
        "stats": state.stats.snapshot(),
    });
    json_with_session(body, &key, created)
}

async fn handle_get_stats(State(state): State<SharedState>) -> Json<StatsDocument> {
    Json(state.stats.snapshot())
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_guess(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<GuessForm>,
) -> Response {
    let (key, created) = state.sessions.resolve(session_key_from_headers(&headers).as_deref());

    let guess = match form.guess.as_deref().and_then(|g| g.trim().parse::<i64>().ok()) {
        Some(value) => value,
        None => {
            let max_range = state.sessions.update(&key, |s| s.max_range);
            let body = serde_json::json!({
                "result": "error",
                "message": format!("Enter a number between 1 and {}!", max_range),
            });
            return json_with_session(body, &key, created);
        }
    };

    let (outcome, player_name, total_score) = state.sessions.update(&key, |s| {
        let outcome = evaluate_guess(s, guess);
        (outcome, s.player_name.clone(), s.score)
    });

    let body = match outcome {
        GuessOutcome::AlreadyOver => serde_json::json!({
            "result": "error",
            "message": "The game is already over! Start a new game.",
        }),
        GuessOutcome::OutOfRange { max_range } => serde_json::json!({
            "result": "error",
            "message": format!("Enter a number between 1 and {}!", max_range),
        }),
        GuessOutcome::Hint {
            direction,
            attempt,
            max_attempts,
        } => {
            let message = match direction {
                HintDirection::Higher => "The secret number is HIGHER",
                HintDirection::Lower => "The secret number is LOWER",
            };
            serde_json::json!({
                "result": "hint",
                "message": message,
                "attempt": attempt,
                "max_attempts": max_attempts,
                "guess": guess,
            })
        }
        GuessOutcome::Win {
            attempt,
            max_attempts,
            points,
            total_score,
            secret,
        } => {
            state.stats.record_game(&player_name, total_score, true);
            serde_json::json!({
                "result": "win",
                "message": format!("Congratulations! You guessed the number {}!", secret),
                "attempt": attempt,
                "max_attempts": max_attempts,
                "guess": guess,
                "points": points,
                "total_score": total_score,
            })
        }
        GuessOutcome::Lose {
            attempt,
            max_attempts,
            secret,
        } => {
            state.stats.record_game(&player_name, total_score, false);
            serde_json::json!({
                "result": "lose",
                "message": format!("Game over! The secret number was {}", secret),
                "attempt": attempt,
                "max_attempts": max_attempts,
                "guess": guess,
            })
        }
    };
    json_with_session(body, &key, created)
}

async fn handle_new_game(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<NewGameForm>,
) -> Response {
    let (key, created) = state.sessions.resolve(session_key_from_headers(&headers).as_deref());
    let difficulty = Difficulty::from_param(form.difficulty.as_deref());

    let (max_attempts, max_range, player_name) = state.sessions.update(&key, |s| {
        let mut rng = SmallRng::from_entropy();
        start_game(s, difficulty, form.player_name.as_deref(), &mut rng);
        (s.max_attempts, s.max_range, s.player_name.clone())
    });

    let body = serde_json::json!({
        "message": format!("New game started! Guess a number between 1 and {}", max_range),
        "max_attempts": max_attempts,
        "player_name": player_name,
    });
    json_with_session(body, &key, created)
}
