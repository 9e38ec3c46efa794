//! Error types for board setup, input parsing and configuration.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ChessError {
    /// FEN text could not be parsed
    #[error("Invalid FEN: {0}")]
    InvalidFen(#[from] shakmaty::fen::ParseFenError),

    /// Square text was neither algebraic (`e2`) nor `row col`
    #[error("Invalid square: {0:?}")]
    InvalidSquare(String),

    /// Coordinates outside the 8x8 board
    #[error("Square out of range: ({row}, {col})")]
    SquareOutOfRange { row: i32, col: i32 },

    #[error("Failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChessError>;
