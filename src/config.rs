#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::common::EngineError;
use crate::grid::Dimensions;
use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// What the engine does with a ship length once that ship is sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SunkPolicy {
    /// Keep counting the length as if another ship of it remained.
    #[default]
    Retain,
    /// Drop one counter of the sunk ship's length and recompute.
    Remove,
}

/// Tunables for [`TargetingEngine`](crate::TargetingEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub sunk_policy: SunkPolicy,
    /// Cap on probe attempts per targeting guess. Defaults to
    /// `4 * max(rows, columns)`.
    pub attempt_limit: Option<usize>,
}

impl EngineConfig {
    pub fn attempt_limit_for(&self, dimensions: Dimensions) -> usize {
        self.attempt_limit
            .unwrap_or(4 * dimensions.rows.max(dimensions.columns))
    }
}

/// Board size and fleet supplied fresh for each match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub dimensions: Dimensions,
    pub fleet: Vec<ShipType>,
}

impl World {
    pub fn new(dimensions: Dimensions, fleet: Vec<ShipType>) -> Self {
        Self { dimensions, fleet }
    }

    /// Classic 10x10 board with the five-ship fleet.
    pub fn standard() -> Self {
        Self::new(Dimensions::new(BOARD_SIZE, BOARD_SIZE), SHIPS.to_vec())
    }

    /// Lengths of every ship in the fleet, in fleet order.
    pub fn ship_lengths(&self) -> Vec<usize> {
        self.fleet.iter().map(|s| s.length()).collect()
    }

    /// Total number of ship segments to be found.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().map(|s| s.length()).sum()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let Dimensions { rows, columns } = self.dimensions;
        if rows == 0 || columns == 0 {
            return Err(EngineError::InvalidDimensions { rows, columns });
        }
        if self.fleet.is_empty() {
            return Err(EngineError::EmptyFleet);
        }
        if self.fleet.iter().any(|s| s.length() == 0) {
            return Err(EngineError::InvalidShipLength);
        }
        Ok(())
    }
}

/// Convert a ship name string to the canonical static ship type of the
/// standard fleet. Returns `None` if the name does not match.
pub fn ship_type_by_name(name: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.name() == name)
}
