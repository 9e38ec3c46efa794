//! Two-player chess: board model, move-legality engine and click-driven game state.

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;

pub use error::{ChessError, Result};
