//! Core data structures: difficulty table, per-session game state, and
//! guess outcomes.
//!
//! [`GameSession`] is the unit of per-player state. It is owned by the
//! session store and mutated in place by [`crate::game_mechanics`]; nothing
//! in it is shared across sessions.

use std::time::Instant;

use rand::Rng;

use crate::constants::DEFAULT_PLAYER_NAME;

/// Difficulty level, jointly determining the attempt budget and guess range.
///
/// | Difficulty | Attempts | Range |
/// |------------|----------|----------|
/// | Easy | 10 | 1..=50 |
/// | Medium | 7 | 1..=100 |
/// | Hard | 5 | 1..=200 |
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a request parameter. Anything other than `"easy"` or `"hard"`
    /// (including absence) selects Medium.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("easy") => Difficulty::Easy,
            Some("hard") => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// Number of guesses allowed per game.
    pub fn attempt_budget(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 7,
            Difficulty::Hard => 5,
        }
    }

    /// Upper bound of the guessing range (inclusive; lower bound is 1).
    pub fn guess_range(self) -> i64 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 200,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// One player's game state, keyed by an opaque session cookie.
///
/// `max_attempts` and `max_range` are always set together from the same
/// [`Difficulty`] value. `score` accumulates across games played within the
/// same session; everything else resets on a new game.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub secret_number: i64,
    pub max_attempts: u32,
    pub max_range: i64,
    pub attempts: u32,
    pub score: i64,
    pub player_name: String,
    pub game_over: bool,
    /// Last access, for the session store's expiry sweep.
    pub last_seen: Instant,
}

impl GameSession {
    /// Fresh session on the default (medium) difficulty with a zero score
    /// and the placeholder player name.
    pub fn new(rng: &mut impl Rng) -> Self {
        let difficulty = Difficulty::Medium;
        GameSession {
            secret_number: rng.gen_range(1..=difficulty.guess_range()),
            max_attempts: difficulty.attempt_budget(),
            max_range: difficulty.guess_range(),
            attempts: 0,
            score: 0,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            game_over: false,
            last_seen: Instant::now(),
        }
    }
}

/// Direction hint after a wrong guess that did not end the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HintDirection {
    Higher,
    Lower,
}

/// Result of evaluating one guess against a [`GameSession`].
///
/// `AlreadyOver` and `OutOfRange` are rejections: they leave the session
/// untouched (the attempt counter in particular). The other three consumed
/// one attempt. Only `Win` and `Lose` complete the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    AlreadyOver,
    OutOfRange {
        max_range: i64,
    },
    Hint {
        direction: HintDirection,
        attempt: u32,
        max_attempts: u32,
    },
    Win {
        attempt: u32,
        max_attempts: u32,
        points: i64,
        total_score: i64,
        secret: i64,
    },
    Lose {
        attempt: u32,
        max_attempts: u32,
        secret: i64,
    },
}
