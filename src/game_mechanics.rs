//! Game rules: starting a game, evaluating guesses, and win scoring.
//!
//! All functions here are pure state transitions on a [`GameSession`];
//! randomness is injected so tests can use seeded generators. Reporting a
//! completed game to the stats store is the caller's job (the HTTP layer),
//! keyed off the returned [`GuessOutcome`].

use rand::Rng;

use crate::constants::{WIN_BASE_POINTS, WIN_MIN_POINTS, WIN_POINTS_PER_ATTEMPT};
use crate::types::{Difficulty, GameSession, GuessOutcome, HintDirection};

/// Points awarded for a correct guess on attempt `attempt`:
/// `max(100 - 10 * attempt, 10)`.
pub fn win_points(attempt: u32) -> i64 {
    (WIN_BASE_POINTS - WIN_POINTS_PER_ATTEMPT * attempt as i64).max(WIN_MIN_POINTS)
}

/// Re-initialize the session for a new game on the given difficulty.
///
/// Applies the difficulty table, draws a fresh secret from `[1, max_range]`,
/// and resets the attempt counter and game-over flag. The running `score`
/// carries over; `player_name` is replaced only by a non-empty `player_name`.
pub fn start_game(
    session: &mut GameSession,
    difficulty: Difficulty,
    player_name: Option<&str>,
    rng: &mut impl Rng,
) {
    session.max_attempts = difficulty.attempt_budget();
    session.max_range = difficulty.guess_range();
    session.secret_number = rng.gen_range(1..=session.max_range);
    session.attempts = 0;
    session.game_over = false;
    if let Some(name) = player_name {
        if !name.is_empty() {
            session.player_name = name.to_string();
        }
    }
}

/// Evaluate one guess against the session.
///
/// Rejections (`AlreadyOver`, `OutOfRange`) do not consume an attempt. A
/// valid guess increments `attempts` and resolves, in order: exact match
/// (win, score credited), budget exhausted (lose), otherwise a direction
/// hint. Terminal outcomes set `game_over`; the only way out is
/// [`start_game`].
pub fn evaluate_guess(session: &mut GameSession, value: i64) -> GuessOutcome {
    if session.game_over {
        return GuessOutcome::AlreadyOver;
    }
    if value < 1 || value > session.max_range {
        return GuessOutcome::OutOfRange {
            max_range: session.max_range,
        };
    }

    session.attempts += 1;

    if value == session.secret_number {
        let points = win_points(session.attempts);
        session.score += points;
        session.game_over = true;
        GuessOutcome::Win {
            attempt: session.attempts,
            max_attempts: session.max_attempts,
            points,
            total_score: session.score,
            secret: session.secret_number,
        }
    } else if session.attempts >= session.max_attempts {
        session.game_over = true;
        GuessOutcome::Lose {
            attempt: session.attempts,
            max_attempts: session.max_attempts,
            secret: session.secret_number,
        }
    } else {
        GuessOutcome::Hint {
            direction: if value < session.secret_number {
                HintDirection::Higher
            } else {
                HintDirection::Lower
            },
            attempt: session.attempts,
            max_attempts: session.max_attempts,
        }
    }
}
