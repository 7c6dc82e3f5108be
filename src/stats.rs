//! Aggregate statistics: the shared document and its mutex-guarded store.
//!
//! [`StatsDocument`] is the plain data (what gets serialized);
//! [`StatsStore`] owns one instance for the whole process and serializes
//! the read-modify-persist sequence so concurrent game completions cannot
//! lose updates. The file is rewritten whole after every completed game.

use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::constants::{LEADERBOARD_LIMIT, RECENT_GAMES_LIMIT, RECENT_TIME_FORMAT};
use crate::storage;

/// Leaderboard entry: a player's best session score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBest {
    pub name: String,
    pub score: i64,
}

/// One completed game in the recent-activity log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentGame {
    pub name: String,
    pub score: i64,
    pub won: bool,
    /// Wall-clock completion time, formatted `DD.MM.YYYY HH:MM`.
    pub time: String,
}

/// The persisted statistics document.
///
/// Invariants after every [`record`](Self::record):
/// `total_wins <= total_games`; `best_players` sorted descending by score,
/// unique by name, at most 10 entries; `recent_games` newest first, at most
/// 10 entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDocument {
    pub total_games: u64,
    pub total_wins: u64,
    pub best_players: Vec<PlayerBest>,
    pub recent_games: Vec<RecentGame>,
}

impl StatsDocument {
    /// Fold one completed game into the document.
    ///
    /// Upserts the leaderboard by name (keeping the higher score), re-sorts
    /// and truncates it, and prepends to the recent-games log. The timestamp
    /// is taken as a parameter so tests stay clock-free.
    pub fn record(&mut self, player_name: &str, score: i64, won: bool, time: String) {
        self.total_games += 1;
        if won {
            self.total_wins += 1;
        }

        match self
            .best_players
            .iter_mut()
            .find(|p| p.name == player_name)
        {
            Some(entry) => entry.score = entry.score.max(score),
            None => self.best_players.push(PlayerBest {
                name: player_name.to_string(),
                score,
            }),
        }
        self.best_players.sort_by(|a, b| b.score.cmp(&a.score));
        self.best_players.truncate(LEADERBOARD_LIMIT);

        self.recent_games.insert(
            0,
            RecentGame {
                name: player_name.to_string(),
                score,
                won,
                time,
            },
        );
        self.recent_games.truncate(RECENT_GAMES_LIMIT);
    }
}

/// Process-wide owner of the stats document and its backing file.
///
/// All mutation goes through [`record_game`](Self::record_game), which holds
/// the mutex across the full update-and-persist sequence. A failed write is
/// logged and otherwise ignored; the in-memory document keeps the update so
/// the next successful write repairs the file.
pub struct StatsStore {
    path: PathBuf,
    doc: Mutex<StatsDocument>,
}

impl StatsStore {
    /// Load the document from `path`, falling back to the zero document if
    /// the file is absent or malformed. Never fails.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = storage::load_stats_document(&path);
        StatsStore {
            path,
            doc: Mutex::new(doc),
        }
    }

    /// Record one completed game and rewrite the stats file.
    pub fn record_game(&self, player_name: &str, score: i64, won: bool) {
        let mut doc = self.doc.lock().unwrap();
        let time = Local::now().format(RECENT_TIME_FORMAT).to_string();
        doc.record(player_name, score, won, time);
        if let Err(e) = storage::save_stats_document(&self.path, &doc) {
            eprintln!("Failed to save stats to {}: {}", self.path.display(), e);
        }
    }

    /// Read-only copy of the current document.
    pub fn snapshot(&self) -> StatsDocument {
        self.doc.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(i: usize) -> String {
        format!("01.01.2026 12:{:02}", i % 60)
    }

    #[test]
    fn test_counters() {
        let mut doc = StatsDocument::default();
        doc.record("Ann", 70, true, stamp(0));
        doc.record("Bob", 0, false, stamp(1));
        assert_eq!(doc.total_games, 2);
        assert_eq!(doc.total_wins, 1);
    }

    #[test]
    fn test_upsert_keeps_best_score() {
        let mut doc = StatsDocument::default();
        doc.record("Ann", 70, true, stamp(0));
        doc.record("Ann", 50, true, stamp(1));
        assert_eq!(doc.best_players.len(), 1);
        assert_eq!(doc.best_players[0].name, "Ann");
        assert_eq!(doc.best_players[0].score, 70);

        doc.record("Ann", 90, true, stamp(2));
        assert_eq!(doc.best_players[0].score, 90);
    }

    #[test]
    fn test_leaderboard_sorted_and_truncated() {
        let mut doc = StatsDocument::default();
        for i in 0..12 {
            doc.record(&format!("P{i}"), i * 10, true, stamp(i as usize));
        }
        assert_eq!(doc.best_players.len(), 10);
        assert!(doc
            .best_players
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
        // The two lowest scorers (P0, P1) fell off the end.
        assert_eq!(doc.best_players[0].score, 110);
        assert_eq!(doc.best_players[9].score, 20);
    }

    #[test]
    fn test_recent_games_newest_first_and_truncated() {
        let mut doc = StatsDocument::default();
        for i in 0..12 {
            doc.record("Ann", i, i % 2 == 0, stamp(i as usize));
        }
        assert_eq!(doc.recent_games.len(), 10);
        assert_eq!(doc.recent_games[0].score, 11);
        assert_eq!(doc.recent_games[9].score, 2);
    }

    #[test]
    fn test_snapshot_idempotent() {
        let dir = std::env::temp_dir().join(format!("hilo-stats-{}", uuid::Uuid::new_v4()));
        let store = StatsStore::load(dir.join("stats.json"));
        store.record_game("Ann", 70, true);
        assert_eq!(store.snapshot(), store.snapshot());
    }
}
