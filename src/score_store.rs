use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};

use crate::error::Result;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreRecord {
    score: u64,
}

/// Keeps the player's running score in a small JSON file.
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored score. A file that does not exist yet means a score of 0.
    pub async fn load(&self) -> Result<u64> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let record: ScoreRecord = serde_json::from_str(&contents)?;
                debug!(path = ?self.path, score = record.score, "loaded score");
                Ok(record.score)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "no score file yet, starting from 0");
                Ok(0)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn save(&self, score: u64) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(&ScoreRecord { score })?;
        fs::write(&self.path, contents).await?;
        info!(path = ?self.path, score, "saved score");
        Ok(())
    }
}
