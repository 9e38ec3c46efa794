//! Pure chess domain types: pieces, squares and the 8x8 board.
//! Conversions to and from shakmaty are limited to FEN import/export.

use std::fmt;
use std::str::FromStr;

use shakmaty::fen::{Fen, LossyFenError};
use shakmaty::{Color as SColor, File, Rank, Role, Setup};

use crate::error::{ChessError, Result};

/// Board edge length
pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Rooks, bishops and queens move along rays
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row a pawn of this color starts on
    pub fn pawn_start_row(self) -> usize {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Row where a pawn of this color promotes
    pub fn promotion_row(self) -> usize {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }

    /// Row delta of a forward pawn step
    pub fn forward(self) -> i32 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "white"),
            PieceColor::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Self { kind, color }
    }

    /// Two-letter code such as `wP` or `bK`
    pub fn code(&self) -> String {
        format!("{}{}", self.color.letter(), self.kind.letter())
    }
}

/// A board square, row 0 = rank 8 (black's back rank), row 7 = rank 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// Panics on coordinates outside the board.
    pub fn new(row: usize, col: usize) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Checked constructor for signed coordinates
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// The square `(dr, dc)` away, if still on the board
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + dr, self.col as i32 + dc)
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    fn to_shakmaty(self) -> shakmaty::Square {
        let file = File::new(self.col as u32);
        let rank = Rank::new((BOARD_SIZE - 1 - self.row) as u32);
        shakmaty::Square::from_coords(file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, BOARD_SIZE - self.row)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    /// Parses algebraic notation, e.g. `e2` -> (6, 4)
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(ChessError::InvalidSquare(s.to_string()));
        };
        let col = file.to_ascii_lowercase() as i32 - b'a' as i32;
        let rank = *rank as i32 - b'0' as i32;
        if !(1..=BOARD_SIZE as i32).contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Square::try_new(BOARD_SIZE as i32 - rank, col)
            .ok_or_else(|| ChessError::InvalidSquare(s.to_string()))
    }
}

fn piece_from_shakmaty(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece {
        kind,
        color: color_from_shakmaty(piece.color),
    }
}

fn piece_to_shakmaty(piece: Piece) -> shakmaty::Piece {
    let role = match piece.kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    };
    shakmaty::Piece {
        color: color_to_shakmaty(piece.color),
        role,
    }
}

fn color_from_shakmaty(color: SColor) -> PieceColor {
    match color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    }
}

fn color_to_shakmaty(color: PieceColor) -> SColor {
    match color {
        PieceColor::White => SColor::White,
        PieceColor::Black => SColor::Black,
    }
}

/// The 8x8 grid. Each cell holds at most one piece.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting position
    pub fn starting() -> Self {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; BOARD_SIZE] =
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(PieceColor::Black, kind));
            board.cells[1][col] = Some(Piece::new(PieceColor::Black, Pawn));
            board.cells[6][col] = Some(Piece::new(PieceColor::White, Pawn));
            board.cells[7][col] = Some(Piece::new(PieceColor::White, kind));
        }
        board
    }

    /// Parse the piece placement and side to move of a FEN record.
    /// Castling rights, en passant and clocks are accepted but ignored.
    pub fn from_fen(text: &str) -> Result<(Board, PieceColor)> {
        let fen: Fen = text.trim().parse()?;
        let setup = fen.into_setup();

        let mut board = Self::empty();
        for sq in Square::all() {
            board.cells[sq.row][sq.col] = setup
                .board
                .piece_at(sq.to_shakmaty())
                .map(piece_from_shakmaty);
        }
        Ok((board, color_from_shakmaty(setup.turn)))
    }

    /// FEN record for this board with `turn` to move
    pub fn to_fen(&self, turn: PieceColor) -> String {
        let mut setup = Setup::empty();
        for (sq, piece) in self.pieces() {
            setup
                .board
                .set_piece_at(sq.to_shakmaty(), piece_to_shakmaty(piece));
        }
        setup.turn = color_to_shakmaty(turn);
        Fen::try_from_setup(setup)
            .unwrap_or_else(LossyFenError::ignore)
            .to_string()
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row][sq.col]
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row][sq.col] = piece;
    }

    /// Remove and return the piece on `sq`
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row][sq.col].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// True if `sq` holds a piece of `color`
    pub fn is_color(&self, sq: Square, color: PieceColor) -> bool {
        self.get(sq).is_some_and(|p| p.color == color)
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|p| (sq, p)))
    }

    /// First king of `color` in row-major order
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or_else(|| "--".to_string(), |p| p.code()))
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting();
        assert_eq!(board.get(Square::new(0, 4)).map(|p| p.code()), Some("bK".into()));
        assert_eq!(board.get(Square::new(7, 3)).map(|p| p.code()), Some("wQ".into()));
        assert_eq!(board.get(Square::new(6, 0)).map(|p| p.code()), Some("wP".into()));
        assert!(board.is_empty(Square::new(4, 4)));
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_from_fen_matches_starting() {
        let (board, turn) = Board::from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::starting());
        assert_eq!(turn, PieceColor::White);
    }

    #[test]
    fn test_from_fen_black_to_move() {
        let (board, turn) = Board::from_fen("4k3/8/8/8/8/8/8/r3K3 b - - 0 1").unwrap();
        assert_eq!(turn, PieceColor::Black);
        assert_eq!(board.find_king(PieceColor::White), Some(Square::new(7, 4)));
        assert_eq!(
            board.get(Square::new(7, 0)),
            Some(Piece::new(PieceColor::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn test_invalid_fen() {
        assert!(matches!(
            Board::from_fen("not a fen"),
            Err(ChessError::InvalidFen(_))
        ));
    }

    #[test]
    fn test_to_fen_placement() {
        let fen = Board::starting().to_fen(PieceColor::Black);
        assert!(fen.starts_with("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b"));
        let (board, turn) = Board::from_fen(&fen).unwrap();
        assert_eq!(board, Board::starting());
        assert_eq!(turn, PieceColor::Black);
    }

    #[test]
    fn test_square_algebraic() {
        assert_eq!("e2".parse::<Square>().unwrap(), Square::new(6, 4));
        assert_eq!("a8".parse::<Square>().unwrap(), Square::new(0, 0));
        assert_eq!(Square::new(4, 4).to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_square_accessors() {
        let sq = Square::new(2, 5);
        assert_eq!((sq.row(), sq.col()), (2, 5));
        assert_eq!(Square::try_new(7, 0).map(|s| s.row()), Some(7));
        assert_eq!(Square::try_new(-1, 0), None);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_square_new_out_of_range() {
        Square::new(8, 0);
    }

    #[test]
    fn test_display_uses_cell_codes() {
        let text = Board::starting().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "bR bN bB bQ bK bB bN bR");
        assert_eq!(lines[3], "-- -- -- -- -- -- -- --");
        assert_eq!(lines[7], "wR wN wB wQ wK wB wN wR");
    }
}
