//! Compass directions used for sliding-piece rays and attack classification.

use super::chess::Square;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    pub const DIAGONAL: [Direction; 4] =
        [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

    /// (row, col) step. North points toward row 0.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    /// Reverse lookup of [`Direction::delta`]
    pub fn from_delta(delta: (i32, i32)) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.delta() == delta)
    }

    pub fn opposite(self) -> Direction {
        let (dr, dc) = self.delta();
        // every negated unit vector is itself a compass direction
        Self::from_delta((-dr, -dc)).unwrap_or(self)
    }

    /// Squares from `start` (exclusive) to the board edge
    pub fn ray(self, start: Square) -> impl Iterator<Item = Square> {
        let (dr, dc) = self.delta();
        std::iter::successors(start.offset(dr, dc), move |sq| sq.offset(dr, dc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_lookup() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_delta(dir.delta()), Some(dir));
        }
        assert_eq!(Direction::from_delta((0, 0)), None);
        assert_eq!(Direction::from_delta((2, 1)), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::N.opposite(), Direction::S);
        assert_eq!(Direction::NE.opposite(), Direction::SW);
        assert_eq!(Direction::W.opposite(), Direction::E);
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let ray: Vec<Square> = Direction::NW.ray(Square::new(2, 3)).collect();
        assert_eq!(ray, vec![Square::new(1, 2), Square::new(0, 1)]);
        assert_eq!(Direction::E.ray(Square::new(4, 7)).count(), 0);
    }
}
