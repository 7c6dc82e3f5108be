//! JSON file I/O for the stats document.
//!
//! Loading is fail-open: a missing or malformed file yields the zero
//! document so a broken stats file can never block gameplay. Saving rewrites
//! the whole file (the document is bounded at 10+10 entries, so there is
//! nothing to append to).

use std::fs;
use std::io;
use std::path::Path;

use crate::stats::StatsDocument;

/// Load the stats document from `path`.
///
/// Absence and corruption are treated identically: both return
/// `StatsDocument::default()`. Corruption is reported to stderr so a
/// hand-edited file that stopped parsing is at least visible.
pub fn load_stats_document(path: &Path) -> StatsDocument {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            println!(
                "No stats file at {}, starting with empty statistics",
                path.display()
            );
            return StatsDocument::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!(
                "Malformed stats file {} ({}), starting with empty statistics",
                path.display(),
                e
            );
            StatsDocument::default()
        }
    }
}

/// Rewrite the stats file with the full document, creating the parent
/// directory on first save.
pub fn save_stats_document(path: &Path, doc: &StatsDocument) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_json::to_string_pretty(doc)?;
    fs::write(path, contents)
}
