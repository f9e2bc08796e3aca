use log::{info, warn};
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("high score file {path:?} could not be accessed")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("high score file {path:?} does not hold a number: {content:?}")]
    Parse { path: PathBuf, content: String },
}

/// Where the high score lives between sessions
pub trait HighScoreStore {
    /// Stored high score, or 0 if there is none or it cannot be read
    fn load_high_score(&self) -> u32;

    fn save_high_score(&mut self, score: u32) -> Result<(), ScoreError>;
}

/// High score kept as a plain-text integer in a single file
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored score. `Ok(None)` means the file does not exist.
    pub fn read(&self) -> Result<Option<u32>, ScoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ScoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        content
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ScoreError::Parse {
                path: self.path.clone(),
                content: content.trim().to_string(),
            })
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load_high_score(&self) -> u32 {
        match self.read() {
            Ok(Some(score)) => score,
            Ok(None) => {
                info!("no high score stored at {:?} yet", self.path);
                0
            }
            Err(err) => {
                warn!("ignoring stored high score: {}", err);
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), ScoreError> {
        let io_err = |source| ScoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        std::fs::write(&self.path, score.to_string()).map_err(io_err)
    }
}

/// In-memory store for tests and for running without a writable home
#[derive(Debug, Default, Clone)]
pub struct MemoryHighScoreStore {
    pub score: Option<u32>,
    pub saves: usize,
}

impl MemoryHighScoreStore {
    pub fn with_score(score: u32) -> Self {
        Self {
            score: Some(score),
            saves: 0,
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_high_score(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), ScoreError> {
        self.score = Some(score);
        self.saves += 1;
        Ok(())
    }
}
