//! Per-user locations for the high-score file and the log.

use std::path::PathBuf;

const APP_DIR: &str = "grid_snake";

/// File name of the persisted high score inside the data directory
pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// File name of the log inside the data directory
pub const LOG_FILE: &str = "grid_snake.log";

/// Per-user application data directory, resolved from the environment
pub fn data_dir() -> PathBuf {
    data_dir_from(|key| std::env::var(key).ok())
}

/// `$XDG_DATA_HOME/grid_snake`, then `$APPDATA/grid_snake`, then
/// `$HOME/.local/share/grid_snake`, falling back to the working directory.
pub fn data_dir_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(xdg) = non_empty("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(appdata) = non_empty("APPDATA") {
        return PathBuf::from(appdata).join(APP_DIR);
    }
    if let Some(home) = non_empty("HOME") {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    PathBuf::from(".")
}

pub fn default_high_score_path() -> PathBuf {
    data_dir().join(HIGH_SCORE_FILE)
}

pub fn default_log_path() -> PathBuf {
    data_dir().join(LOG_FILE)
}
