use chrono::{DateTime, Local};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::game::Millis;

/// The single persisted record: fastest completed run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HighScore {
    pub best_ms: Millis,
    pub set_at: DateTime<Local>,
}

impl HighScore {
    pub fn new(best_ms: Millis) -> Self {
        Self {
            best_ms,
            set_at: Local::now(),
        }
    }
}

pub trait ScoreStore {
    fn load(&self) -> Option<HighScore>;
    fn save(&self, score: &HighScore) -> std::io::Result<()>;

    /// Record `elapsed_ms` if it beats the stored best. Returns the new
    /// record when one was set. Write failures are swallowed: losing a high
    /// score must never take the game down.
    fn record_if_best(&self, elapsed_ms: Millis) -> Option<HighScore> {
        match self.load() {
            Some(existing) if existing.best_ms <= elapsed_ms => None,
            _ => {
                let score = HighScore::new(elapsed_ms);
                let _ = self.save(&score);
                Some(score)
            }
        }
    }
}

/// JSON file under the platform data dir, one record per alphabet.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "snabb") {
            pd.data_local_dir().join("highscore.json")
        } else {
            PathBuf::from("snabb_highscore.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Option<HighScore> {
        let bytes = fs::read(&self.path).ok()?;
        serde_json::from_slice::<HighScore>(&bytes).ok()
    }

    fn save(&self, score: &HighScore) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(score).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
