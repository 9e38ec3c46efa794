//! Game configuration, read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ChessError, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "CHESS_DUEL_CONFIG";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "chess-duel.toml";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Starting position; the standard one when absent
    pub start_fen: Option<String>,
    /// Confine pinned pieces to their pin line
    pub enforce_pins: bool,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_fen: None,
            enforce_pins: true,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ChessError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ChessError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// `$CHESS_DUEL_CONFIG`, then `./chess-duel.toml`, then defaults.
    pub fn discover() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(&PathBuf::from(path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = GameConfig::from_toml("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(config.enforce_pins);
    }

    #[test]
    fn test_parse_all_fields() {
        let text = r#"
            start_fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1"
            enforce_pins = false
            log_level = "debug"
        "#;
        let config = GameConfig::from_toml(text, Path::new("game.toml")).unwrap();
        assert_eq!(
            config.start_fen.as_deref(),
            Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
        );
        assert!(!config.enforce_pins);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = GameConfig::from_toml("board_size = 10", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ChessError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/chess-duel.toml")).unwrap_err();
        assert!(matches!(err, ChessError::ConfigRead { .. }));
    }
}
