//! Common types: guess results, answers and errors.

use core::fmt;

use crate::grid::Coordinate;
use crate::ship::ShipType;

/// Result of a guess as reported by the opponent world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessResult {
    /// Guess hit an undepleted ship segment.
    Hit,
    /// Guess missed all ships.
    Miss,
    /// Guess sank a ship.
    Sink(ShipType),
}

/// Answer fed back to a player after one of its guesses.
///
/// `ship_sunk` is present iff the guess completed sinking a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Answer {
    pub is_hit: bool,
    pub ship_sunk: Option<ShipType>,
}

impl Answer {
    pub const fn miss() -> Self {
        Self {
            is_hit: false,
            ship_sunk: None,
        }
    }

    pub const fn hit() -> Self {
        Self {
            is_hit: true,
            ship_sunk: None,
        }
    }

    pub const fn sunk(ship: ShipType) -> Self {
        Self {
            is_hit: true,
            ship_sunk: Some(ship),
        }
    }
}

impl From<GuessResult> for Answer {
    fn from(res: GuessResult) -> Self {
        match res {
            GuessResult::Hit => Answer::hit(),
            GuessResult::Miss => Answer::miss(),
            GuessResult::Sink(ship) => Answer::sunk(ship),
        }
    }
}

/// Errors returned by the targeting engine at its public boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Board must have at least one row and one column.
    InvalidDimensions { rows: usize, columns: usize },
    /// The fleet has no ships.
    EmptyFleet,
    /// A ship of length zero was supplied.
    InvalidShipLength,
    /// Guess lies outside the board.
    OutOfBounds(Coordinate),
    /// Cell was already resolved as a hit or a miss.
    AlreadyGuessed(Coordinate),
    /// A sunk ship was reported whose length is not being tracked.
    ShipNotInFleet(ShipType),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidDimensions { rows, columns } => {
                write!(f, "Invalid board dimensions: {}x{}", rows, columns)
            }
            EngineError::EmptyFleet => write!(f, "Fleet contains no ships"),
            EngineError::InvalidShipLength => write!(f, "Ship length must be at least 1"),
            EngineError::OutOfBounds(c) => write!(f, "Guess {} is outside the board", c),
            EngineError::AlreadyGuessed(c) => write!(f, "Cell {} was already guessed", c),
            EngineError::ShipNotInFleet(s) => write!(f, "Sunk ship {} is not in the fleet", s),
        }
    }
}

/// Errors returned by [`Ocean`](crate::Ocean) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OceanError {
    /// Ship placement is out of bounds.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Unable to place ship after repeated random attempts.
    UnableToPlaceShip,
    /// Guess lies outside the board.
    OutOfBounds(Coordinate),
    /// Guess was already made at this position.
    AlreadyGuessed(Coordinate),
}

impl fmt::Display for OceanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OceanError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            OceanError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            OceanError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            OceanError::OutOfBounds(c) => write!(f, "Guess {} is outside the board", c),
            OceanError::AlreadyGuessed(c) => {
                write!(f, "Guess was already made at position {}", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

#[cfg(feature = "std")]
impl std::error::Error for OceanError {}
