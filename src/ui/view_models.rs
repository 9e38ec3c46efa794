//! View models for rendering the board.
//!
//! These types prepare game state for display. They live in the UI layer,
//! not the domain layer.

use crate::domain::{Piece, Square};

/// Display data for a single board square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub piece: Option<Piece>,
    /// The selected piece may move here
    pub is_guideline: bool,
    /// This square is the current selection
    pub is_selected: bool,
}
