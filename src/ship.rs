//! Ship definitions and hidden placements.

use core::fmt;

use crate::common::OceanError;
use crate::grid::{Coordinate, Dimensions};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.length)
    }
}

/// A ship placed on the board, tracking how many of its segments were hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedShip {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Coordinate,
    hits: usize,
}

impl PlacedShip {
    /// Place a ship with its first segment at `origin`, extending right
    /// (horizontal) or down (vertical).
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        origin: Coordinate,
        dimensions: Dimensions,
    ) -> Result<Self, OceanError> {
        let ship = Self {
            ship_type,
            orientation,
            origin,
            hits: 0,
        };
        let last = ship.segment(ship_type.length().saturating_sub(1));
        if ship_type.length() == 0 || !dimensions.contains(origin) || !dimensions.contains(last) {
            return Err(OceanError::ShipOutOfBounds);
        }
        Ok(ship)
    }

    fn segment(&self, i: usize) -> Coordinate {
        match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.origin.row, self.origin.column + i),
            Orientation::Vertical => Coordinate::new(self.origin.row + i, self.origin.column),
        }
    }

    /// Iterator over the cells the ship occupies.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.ship_type.length()).map(move |i| self.segment(i))
    }

    /// Whether the ship covers `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                coord.row == self.origin.row
                    && coord.column >= self.origin.column
                    && coord.column < self.origin.column + self.ship_type.length()
            }
            Orientation::Vertical => {
                coord.column == self.origin.column
                    && coord.row >= self.origin.row
                    && coord.row < self.origin.row + self.ship_type.length()
            }
        }
    }

    /// Whether two placements share at least one cell.
    pub fn overlaps(&self, other: &PlacedShip) -> bool {
        self.cells().any(|c| other.contains(c))
    }

    /// Register a hit on one of this ship's segments. The caller guarantees
    /// each cell is only guessed once.
    pub fn register_hit(&mut self) {
        self.hits = (self.hits + 1).min(self.ship_type.length());
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
