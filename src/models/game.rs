//! Game state model - owns the board, turn, move tables and click selection.

use log::{debug, info, trace};

use crate::config::GameConfig;
use crate::domain::rules::{self, AttackDirection, MoveTable};
use crate::domain::{Board, Piece, PieceColor, PieceKind, Square};
use crate::error::Result;

/// The main game model containing all chess game state
#[derive(Clone, Debug)]
pub struct GameModel {
    board: Board,
    /// Side to move
    turn: PieceColor,
    white_moves: MoveTable,
    black_moves: MoveTable,
    /// Squares clicked toward the move in progress (at most two)
    selection: Vec<Square>,
    white_king: Option<Square>,
    black_king: Option<Square>,
    /// Whether the side to move is currently in check
    in_check: bool,
    enforce_pins: bool,
}

impl GameModel {
    /// Standard starting position, white to move
    pub fn new() -> Self {
        Self::from_position(Board::starting(), PieceColor::White)
    }

    pub fn from_position(board: Board, turn: PieceColor) -> Self {
        Self::build(board, turn, true)
    }

    /// Position and side to move from a FEN record
    pub fn from_fen(fen: &str) -> Result<Self> {
        let (board, turn) = Board::from_fen(fen)?;
        Ok(Self::from_position(board, turn))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let (board, turn) = match &config.start_fen {
            Some(fen) => Board::from_fen(fen)?,
            None => (Board::starting(), PieceColor::White),
        };
        Ok(Self::build(board, turn, config.enforce_pins))
    }

    fn build(board: Board, turn: PieceColor, enforce_pins: bool) -> Self {
        let mut game = Self {
            board,
            turn,
            white_moves: MoveTable::new(),
            black_moves: MoveTable::new(),
            selection: Vec::with_capacity(2),
            white_king: None,
            black_king: None,
            in_check: false,
            enforce_pins,
        };
        game.locate_kings();
        game.regenerate_move_tables();
        game.apply_check_restrictions();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square)
    }

    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    pub fn selection(&self) -> &[Square] {
        &self.selection
    }

    pub fn in_check(&self) -> bool {
        self.in_check
    }

    pub fn king_location(&self, color: PieceColor) -> Option<Square> {
        match color {
            PieceColor::White => self.white_king,
            PieceColor::Black => self.black_king,
        }
    }

    /// Move table of `color` as of the last regeneration
    pub fn moves_for(&self, color: PieceColor) -> &MoveTable {
        match color {
            PieceColor::White => &self.white_moves,
            PieceColor::Black => &self.black_moves,
        }
    }

    fn moves_mut(&mut self, color: PieceColor) -> &mut MoveTable {
        match color {
            PieceColor::White => &mut self.white_moves,
            PieceColor::Black => &mut self.black_moves,
        }
    }

    /// Current position as FEN (placement and side to move only)
    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.turn)
    }

    fn locate_kings(&mut self) {
        self.white_king = self.board.find_king(PieceColor::White);
        self.black_king = self.board.find_king(PieceColor::Black);
    }

    /// Rebuild both sides' pseudo-legal tables from the board.
    pub fn regenerate_move_tables(&mut self) {
        self.white_moves = rules::move_table(&self.board, PieceColor::White);
        self.black_moves = rules::move_table(&self.board, PieceColor::Black);
        debug!(
            "regenerated move tables: white {} pieces, black {} pieces",
            self.white_moves.len(),
            self.black_moves.len()
        );
    }

    /// Filter the side to move's table for check and pins.
    pub fn apply_check_restrictions(&mut self) {
        self.in_check = false;
        let turn = self.turn;
        let Some(king) = self.king_location(turn) else {
            return;
        };

        let attackers = rules::square_under_attack(king, self.moves_for(turn.opponent()));
        let pins = if self.enforce_pins {
            rules::pins(king, &self.board)
        } else {
            Vec::new()
        };

        match attackers.as_slice() {
            [] => {}
            [attacker] => {
                self.in_check = true;
                let direction = rules::attack_direction(king, &attackers, &self.board);
                info!("{turn} king on {king} in check from {attacker} ({direction:?})");

                let line = rules::attack_line(king, *attacker);
                let behind = self.square_behind_king(king, *attacker, direction);
                let moves = self.moves_mut(turn);
                rules::restrict_to_single_check(king, *attacker, &line, moves);
                if let (Some(behind), Some(escapes)) = (behind, moves.get_mut(&king)) {
                    escapes.retain(|sq| *sq != behind);
                }
            }
            _ => {
                self.in_check = true;
                info!("{turn} king on {king} in double check from {attackers:?}");

                let mut attacked = Vec::new();
                for &attacker in &attackers {
                    let direction =
                        rules::attack_direction(king, std::slice::from_ref(&attacker), &self.board);
                    attacked.extend(rules::attack_line(king, attacker));
                    attacked.extend(self.square_behind_king(king, attacker, direction));
                }
                rules::restrict_to_double_check(king, &attacked, self.moves_mut(turn));
            }
        }

        if !pins.is_empty() {
            debug!("{} pinned piece(s) for {turn}", pins.len());
            rules::restrict_pins(&pins, self.moves_mut(turn));
        }
    }

    /// Square a slider's check continues through on the far side of the king
    fn square_behind_king(
        &self,
        king: Square,
        attacker: Square,
        direction: Option<AttackDirection>,
    ) -> Option<Square> {
        let slider = self.board.get(attacker).is_some_and(|p| p.kind.is_slider());
        match direction {
            Some(AttackDirection::Compass(dir)) if slider => {
                let (dr, dc) = dir.opposite().delta();
                king.offset(dr, dc)
            }
            _ => None,
        }
    }

    fn is_valid_destination(&self, end: Square) -> bool {
        let Some(start) = self.selection.first() else {
            return false;
        };
        self.moves_for(self.turn)
            .get(start)
            .is_some_and(|moves| moves.contains(&end))
    }

    /// Feed one clicked square into the selection. Returns true if a move
    /// was committed.
    ///
    /// Tables are not regenerated here; see [`GameModel::process_click`].
    pub fn handle_click(&mut self, square: Square) -> bool {
        if self.selection.is_empty() && self.board.is_empty(square) {
            trace!("ignored click on empty {square}");
            return false;
        }

        self.selection.push(square);

        if self.selection.len() == 2 && self.is_valid_destination(square) {
            self.commit_move();
            self.selection.clear();
            return true;
        }

        self.selection.clear();
        self.selection.push(square);
        false
    }

    /// One full click cycle: selection update, then on a committed move
    /// table regeneration and check restriction.
    pub fn process_click(&mut self, square: Square) -> bool {
        let committed = self.handle_click(square);
        if committed {
            self.regenerate_move_tables();
            self.apply_check_restrictions();
        }
        committed
    }

    /// Move the piece from the first selected square to the second.
    ///
    /// Promotes a pawn reaching the far rank, clears the mover's table and
    /// passes the turn. Does nothing unless two squares are selected.
    pub fn commit_move(&mut self) {
        let &[from, to, ..] = self.selection.as_slice() else {
            return;
        };
        debug_assert!(!self.board.is_empty(from), "commit from empty square {from}");
        let Some(mut piece) = self.board.take(from) else {
            return;
        };

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            debug!("{} pawn promotes on {to}", piece.color);
            piece.kind = PieceKind::Queen;
        }

        debug!("{}: {} {from} -> {to}", self.turn, piece.code());
        self.board.set(to, Some(piece));
        self.moves_mut(self.turn).clear();
        self.turn = self.turn.opponent();
        self.locate_kings();
    }

    /// Destinations to highlight for the single selected square
    pub fn guideline_squares(&self) -> Vec<Square> {
        match self.selection.as_slice() {
            [start] => self
                .moves_for(self.turn)
                .get(start)
                .cloned()
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new()
    }
}
