//! File-backed leaderboard backend.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::entry::rank_records;
use crate::{LeaderboardError, LeaderboardStore, PlayerRecord, RankedEntry, ScoreSubmission};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct FileData {
    records: HashMap<String, PlayerRecord>,
}

/// Leaderboard backend persisting records to a JSON file.
///
/// The default location is `scoredoku/leaderboard.json` under the
/// platform's local data directory. Each submission loads, updates, and
/// rewrites the file; the record volume (one entry per player) keeps that
/// cheap.
#[derive(Debug)]
pub struct FileLeaderboard {
    path: PathBuf,
}

impl FileLeaderboard {
    /// Creates a leaderboard at the platform-default path.
    #[must_use]
    pub fn new() -> Self {
        let path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scoredoku")
            .join("leaderboard.json");
        Self { path }
    }

    /// Creates a leaderboard backed by the given file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the records live in.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty leaderboard, not an error.
    fn load(&self) -> Result<FileData, LeaderboardError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(FileData::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, data: &FileData) -> Result<(), LeaderboardError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Default for FileLeaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardStore for FileLeaderboard {
    fn submit(&self, submission: &ScoreSubmission) -> Result<(), LeaderboardError> {
        let mut data = self.load()?;
        data.records
            .entry(submission.player.clone())
            .or_default()
            .absorb(submission);
        self.save(&data)?;
        debug!(
            "stored submission for {} in {}",
            submission.player,
            self.path.display()
        );
        Ok(())
    }

    fn top(&self, limit: usize) -> Result<Vec<RankedEntry>, LeaderboardError> {
        let data = self.load()?;
        let mut ranked = rank_records(&data.records);
        ranked.truncate(limit);
        Ok(ranked)
    }

    fn rank_of(&self, player: &str) -> Result<Option<RankedEntry>, LeaderboardError> {
        let data = self.load()?;
        Ok(rank_records(&data.records)
            .into_iter()
            .find(|entry| entry.player == player))
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "local file"
    }
}
