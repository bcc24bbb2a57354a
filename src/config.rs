//! Configuration loading
//!
//! Reads `~/.config/textswap/config.toml`. Every section is optional and a
//! missing file means defaults.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::TextSwapError;

pub use types::{ClipboardBackend, ClipboardConfig, Config, HighlightConfig, SearchConfig};

const CONFIG_DIR: &str = "textswap";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from an explicit path, or the default location.
///
/// An explicit path must exist; the default location may be absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, TextSwapError> {
    if let Some(path) = explicit {
        return parse_config(&fs::read_to_string(path)?);
    }

    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, TextSwapError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn parse_config(content: &str) -> Result<Config, TextSwapError> {
    toml::from_str(content).map_err(|e| TextSwapError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
