//! Chess domain layer: board model and rules engine.

pub mod chess;
pub mod direction;
pub mod rules;

pub use chess::{BOARD_SIZE, Board, Piece, PieceColor, PieceKind, Square};
pub use direction::Direction;
pub use rules::{AttackDirection, MoveTable, Pin};
