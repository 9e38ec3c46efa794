//! Glyphs used when drawing the board as text.

/// Empty square
pub const EMPTY_CELL: &str = "--";
/// Empty square the selected piece can move to
pub const HINT_CELL: &str = "::";
/// Prefix marking an occupied square the selected piece can capture
pub const CAPTURE_MARK: char = 'x';

pub const FILE_LABELS: &str = "a  b  c  d  e  f  g  h";
