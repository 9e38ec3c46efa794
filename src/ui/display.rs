//! Display generation for the board.
//!
//! This module transforms game state into display-ready view models and
//! draws them as text. It depends on domain + models, not vice versa.

use crate::domain::{BOARD_SIZE, Square};
use crate::models::GameModel;
use crate::ui::theme::{CAPTURE_MARK, EMPTY_CELL, FILE_LABELS, HINT_CELL};
use crate::ui::view_models::SquareView;

/// One view per square, row-major from black's back rank.
pub fn square_views(game: &GameModel) -> Vec<SquareView> {
    let guidelines = game.guideline_squares();
    let selected = match game.selection() {
        [only] => Some(*only),
        _ => None,
    };

    Square::all()
        .map(|square| SquareView {
            square,
            piece: game.piece_at(square),
            is_guideline: guidelines.contains(&square),
            is_selected: selected == Some(square),
        })
        .collect()
}

/// Two-character cell text
pub fn cell_text(view: &SquareView) -> String {
    match (view.piece, view.is_guideline) {
        (Some(piece), true) => format!("{}{}", CAPTURE_MARK, piece.kind.letter()),
        (Some(piece), false) => piece.code(),
        (None, true) => HINT_CELL.to_string(),
        (None, false) => EMPTY_CELL.to_string(),
    }
}

/// The board with rank and file labels, hints for the selected piece, and
/// a status line.
pub fn render_board(game: &GameModel) -> String {
    let views = square_views(game);
    let mut out = String::new();

    for (row, cells) in views.chunks(BOARD_SIZE).enumerate() {
        let line: String = cells
            .iter()
            .map(|view| {
                let mark = if view.is_selected { '>' } else { ' ' };
                format!("{mark}{}", cell_text(view))
            })
            .collect();
        out.push_str(&format!("{} {line}\n", BOARD_SIZE - row));
    }
    out.push_str(&format!("   {FILE_LABELS}\n"));

    out.push_str(&format!("{} to move", game.turn()));
    if game.in_check() {
        out.push_str(", in check");
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_starting_position() {
        let game = GameModel::new();
        let text = render_board(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "8  bR bN bB bQ bK bB bN bR");
        assert_eq!(lines[4], "4  -- -- -- -- -- -- -- --");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
        assert_eq!(lines[9], "white to move");
    }

    #[test]
    fn test_render_selection_and_hints() {
        let mut game = GameModel::new();
        game.process_click(Square::new(6, 4));
        let text = render_board(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[4], "4  -- -- -- -- :: -- -- --");
        assert_eq!(lines[5], "3  -- -- -- -- :: -- -- --");
        assert_eq!(lines[6], "2  wP wP wP wP>wP wP wP wP");
    }

    #[test]
    fn test_capture_hint_and_check_status() {
        let mut game = GameModel::from_fen("4k3/8/8/8/8/1N6/7P/r3K3 w - - 0 1").unwrap();
        game.process_click(Square::new(5, 1));
        let views = square_views(&game);
        let rook = views.iter().find(|v| v.square == Square::new(7, 0)).unwrap();
        assert!(rook.is_guideline);
        assert_eq!(cell_text(rook), "xR");
        assert!(render_board(&game).ends_with("white to move, in check\n"));
    }
}
