//! Game constants: scoring parameters, list bounds, and session settings.

/// Base points for a win before the per-attempt deduction.
pub const WIN_BASE_POINTS: i64 = 100;

/// Points deducted per attempt used.
pub const WIN_POINTS_PER_ATTEMPT: i64 = 10;

/// Floor on the points awarded for any win.
pub const WIN_MIN_POINTS: i64 = 10;

/// Maximum entries kept in the `best_players` leaderboard.
pub const LEADERBOARD_LIMIT: usize = 10;

/// Maximum entries kept in the `recent_games` log.
pub const RECENT_GAMES_LIMIT: usize = 10;

/// `chrono` format string for `recent_games` timestamps (`DD.MM.YYYY HH:MM`).
pub const RECENT_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Name of the session cookie carrying the opaque session key.
pub const SESSION_COOKIE: &str = "hilo_session";

/// Sessions idle longer than this are dropped by the expiry sweep.
pub const SESSION_TTL_SECS: u64 = 30 * 60;

/// Player name used until the player supplies one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";
