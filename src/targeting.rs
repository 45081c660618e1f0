//! Hunting/targeting state for the probability player.

use crate::grid::Coordinate;

/// One of the four axis directions, cycled in compass order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Successor in the cycle North → East → South → West → North.
    pub fn next(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// `(row, column)` unit step. North points towards increasing rows.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (1, 0),
            Direction::East => (0, 1),
            Direction::South => (-1, 0),
            Direction::West => (0, -1),
        }
    }

    /// `from` moved `distance` cells this way, or `None` if that underflows.
    /// The result may still lie past the far edge of the board.
    pub fn step(self, from: Coordinate, distance: usize) -> Option<Coordinate> {
        let distance = isize::try_from(distance).ok()?;
        let (dr, dc) = self.delta();
        from.offset(dr * distance, dc * distance)
    }
}

/// Probe state while chasing a partially hit ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCursor {
    /// First hit on the ship being chased.
    pub anchor: Coordinate,
    pub direction: Direction,
    /// Distance from the anchor of the next probe, at least 1.
    pub distance: usize,
}

impl TargetCursor {
    pub fn new(anchor: Coordinate, direction: Direction) -> Self {
        Self {
            anchor,
            direction,
            distance: 1,
        }
    }

    /// Cell the cursor currently points at.
    pub fn candidate(&self) -> Option<Coordinate> {
        self.direction.step(self.anchor, self.distance)
    }

    /// Abandon the current direction.
    pub fn rotate(&mut self) {
        self.direction = self.direction.next();
        self.distance = 1;
    }

    /// Continue one cell further along the current direction.
    pub fn advance(&mut self) {
        self.distance += 1;
    }
}

/// Which strategy the next guess comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunting,
    Targeting(TargetCursor),
}

impl Mode {
    pub fn cursor(&self) -> Option<&TargetCursor> {
        match self {
            Mode::Hunting => None,
            Mode::Targeting(cursor) => Some(cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_directions() {
        let mut d = Direction::North;
        let mut seen = [d; 4];
        for slot in seen.iter_mut().skip(1) {
            d = d.next();
            *slot = d;
        }
        assert_eq!(seen, Direction::ALL);
        assert_eq!(d.next(), Direction::North);
    }

    #[test]
    fn step_stops_at_zero() {
        let origin = Coordinate::new(0, 2);
        assert_eq!(Direction::South.step(origin, 1), None);
        assert_eq!(Direction::West.step(origin, 2), Some(Coordinate::new(0, 0)));
        assert_eq!(Direction::West.step(origin, 3), None);
        assert_eq!(Direction::North.step(origin, 4), Some(Coordinate::new(4, 2)));
        assert_eq!(Direction::East.step(origin, 1), Some(Coordinate::new(0, 3)));
    }

    #[test]
    fn rotate_resets_distance() {
        let mut cursor = TargetCursor::new(Coordinate::new(3, 3), Direction::West);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.candidate(), Some(Coordinate::new(3, 0)));
        cursor.rotate();
        assert_eq!(cursor.direction, Direction::North);
        assert_eq!(cursor.distance, 1);
        assert_eq!(cursor.candidate(), Some(Coordinate::new(4, 3)));
    }
}
