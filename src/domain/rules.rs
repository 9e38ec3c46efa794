//! Move generation and check detection.
//!
//! Everything here is a pure function of an immutable [`Board`]; the only
//! mutation is the in-place filtering of a [`MoveTable`] handed in by the
//! caller.

use std::collections::BTreeMap;

use super::chess::{Board, PieceColor, PieceKind, Square};
use super::direction::Direction;

/// Source square -> pseudo-legal destinations, ordered row-major by source.
pub type MoveTable = BTreeMap<Square, Vec<Square>>;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, 1),
    (-2, -1),
    (2, 1),
    (2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// Where an attack on a square comes from
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttackDirection {
    /// Straight-line attack; the attacker lies this way from the target
    Compass(Direction),
    /// Raw (row, col) offset from the target to the attacking knight
    Knight(i32, i32),
}

/// A piece that cannot leave the line between its king and an enemy slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pin {
    pub pinned: Square,
    pub pinner: Square,
    /// Squares from the king's neighbour out to and including the pinner
    pub line: Vec<Square>,
}

/// Ray directions for sliding pieces; empty for everything else.
pub fn slide_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Rook => &Direction::ORTHOGONAL,
        PieceKind::Bishop => &Direction::DIAGONAL,
        PieceKind::Queen => &Direction::ALL,
        _ => &[],
    }
}

/// Pseudo-legal destinations for a `kind` standing on `start`.
///
/// `opponent` is the side the moving piece may capture; the moving side is
/// its opposite. Never inspects check and never mutates the board.
pub fn pseudo_legal_moves(
    kind: PieceKind,
    start: Square,
    opponent: PieceColor,
    board: &Board,
) -> Vec<Square> {
    match kind {
        PieceKind::King => {
            let steps = Direction::ALL.map(Direction::delta);
            step_moves(start, &steps, opponent, board)
        }
        PieceKind::Knight => step_moves(start, &KNIGHT_OFFSETS, opponent, board),
        PieceKind::Pawn => pawn_moves(start, opponent, board),
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => slide_directions(kind)
            .iter()
            .flat_map(|&dir| direction_moves(dir, start, opponent, board))
            .collect(),
    }
}

/// Walk one ray: empty squares are collected, an opponent piece is collected
/// and ends the ray, a friendly piece ends it without being collected.
pub fn direction_moves(
    dir: Direction,
    start: Square,
    opponent: PieceColor,
    board: &Board,
) -> Vec<Square> {
    let mut moves = Vec::new();
    for sq in dir.ray(start) {
        match board.get(sq) {
            None => moves.push(sq),
            Some(piece) if piece.color == opponent => {
                moves.push(sq);
                break;
            }
            Some(_) => break,
        }
    }
    moves
}

fn step_moves(
    start: Square,
    offsets: &[(i32, i32)],
    opponent: PieceColor,
    board: &Board,
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| start.offset(dr, dc))
        .filter(|&sq| board.is_empty(sq) || board.is_color(sq, opponent))
        .collect()
}

fn pawn_moves(start: Square, opponent: PieceColor, board: &Board) -> Vec<Square> {
    let mover = opponent.opponent();
    let forward = mover.forward();
    let mut moves = Vec::new();

    if let Some(one) = start.offset(forward, 0) {
        if board.is_empty(one) {
            moves.push(one);
            if start.row() == mover.pawn_start_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(target) = start.offset(forward, dc) {
            if board.is_color(target, opponent) {
                moves.push(target);
            }
        }
    }

    moves
}

/// Pseudo-legal table for every piece of `color` on the board.
pub fn move_table(board: &Board, color: PieceColor) -> MoveTable {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(sq, piece)| {
            let moves = pseudo_legal_moves(piece.kind, sq, color.opponent(), board);
            (sq, moves)
        })
        .collect()
}

/// Every source square in `opponent_moves` that can reach `square`.
pub fn square_under_attack(square: Square, opponent_moves: &MoveTable) -> Vec<Square> {
    opponent_moves
        .iter()
        .filter(|(_, moves)| moves.contains(&square))
        .map(|(&from, _)| from)
        .collect()
}

/// Side of `square` the first of `attackers` strikes from.
pub fn attack_direction(
    square: Square,
    attackers: &[Square],
    board: &Board,
) -> Option<AttackDirection> {
    let &attacker = attackers.first()?;
    let dr = attacker.row() as i32 - square.row() as i32;
    let dc = attacker.col() as i32 - square.col() as i32;

    if board.get(attacker).map(|p| p.kind) == Some(PieceKind::Knight) {
        return matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
            .then_some(AttackDirection::Knight(dr, dc));
    }

    let length = dr.abs().max(dc.abs());
    if length == 0 {
        return None;
    }
    Direction::from_delta((dr.div_euclid(length), dc.div_euclid(length)))
        .map(AttackDirection::Compass)
}

/// Squares strictly between `attacker` and `king`, if they share a line.
pub fn attack_line(king: Square, attacker: Square) -> Vec<Square> {
    let dr = king.row() as i32 - attacker.row() as i32;
    let dc = king.col() as i32 - attacker.col() as i32;
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return Vec::new();
    }
    let Some(dir) = Direction::from_delta((dr.signum(), dc.signum())) else {
        return Vec::new();
    };
    dir.ray(attacker).take_while(|&sq| sq != king).collect()
}

/// Restrict `moves` to answers to a single check.
///
/// The king keeps destinations off `attacked_squares` (or capturing the
/// checker); every other piece keeps only blocks on `attacked_squares` or
/// the capture of `attacking_square`.
pub fn restrict_to_single_check(
    king_square: Square,
    attacking_square: Square,
    attacked_squares: &[Square],
    moves: &mut MoveTable,
) {
    for (&from, destinations) in moves.iter_mut() {
        if from == king_square {
            destinations.retain(|sq| !attacked_squares.contains(sq) || *sq == attacking_square);
        } else {
            destinations.retain(|sq| attacked_squares.contains(sq) || *sq == attacking_square);
        }
    }
}

/// Under double check only the king may move, and not onto `attacked_squares`.
pub fn restrict_to_double_check(
    king_square: Square,
    attacked_squares: &[Square],
    moves: &mut MoveTable,
) {
    for (&from, destinations) in moves.iter_mut() {
        if from == king_square {
            destinations.retain(|sq| !attacked_squares.contains(sq));
        } else {
            destinations.clear();
        }
    }
}

/// Pieces pinned against the king standing on `king_square`.
pub fn pins(king_square: Square, board: &Board) -> Vec<Pin> {
    let Some(owner) = board.get(king_square).map(|p| p.color) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for dir in Direction::ALL {
        let mut candidate = None;
        let mut line = Vec::new();
        for sq in dir.ray(king_square) {
            line.push(sq);
            let Some(piece) = board.get(sq) else {
                continue;
            };
            if piece.color == owner {
                if candidate.is_some() {
                    break;
                }
                candidate = Some(sq);
                continue;
            }
            if let Some(pinned) = candidate {
                if slide_directions(piece.kind).contains(&dir.opposite()) {
                    log::trace!("{pinned} pinned by {sq} ({dir:?})");
                    found.push(Pin {
                        pinned,
                        pinner: sq,
                        line,
                    });
                }
            }
            break;
        }
    }
    found
}

/// Confine each pinned piece to its pin line.
pub fn restrict_pins(pins: &[Pin], moves: &mut MoveTable) {
    for pin in pins {
        if let Some(destinations) = moves.get_mut(&pin.pinned) {
            destinations.retain(|sq| pin.line.contains(sq));
        }
    }
}
