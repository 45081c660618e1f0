//! Hidden fleet of the opponent, answering guesses.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{GuessResult, OceanError};
use crate::config::World;
use crate::grid::{Coordinate, Dimensions, Grid};
use crate::ship::{Orientation, PlacedShip, ShipType};

pub struct Ocean {
    dimensions: Dimensions,
    ships: Vec<PlacedShip>,
    guessed: Grid<bool>,
}

impl Ocean {
    /// Create an empty ocean (no ships placed).
    pub fn new(dimensions: Dimensions) -> Self {
        Ocean {
            dimensions,
            ships: Vec::new(),
            guessed: Grid::filled(dimensions, false),
        }
    }

    /// Place every ship of `world`'s fleet at random without overlap.
    pub fn random<R: Rng>(world: &World, rng: &mut R) -> Result<Self, OceanError> {
        let mut ocean = Ocean::new(world.dimensions);
        for &ship_type in world.fleet.iter() {
            let (origin, orientation) = ocean.random_placement(rng, ship_type)?;
            ocean.place(ship_type, orientation, origin)?;
        }
        Ok(ocean)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Place a single ship with its first segment at `origin`.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        orientation: Orientation,
        origin: Coordinate,
    ) -> Result<(), OceanError> {
        let ship = PlacedShip::new(ship_type, orientation, origin, self.dimensions)?;
        if self.ships.iter().any(|s| s.overlaps(&ship)) {
            return Err(OceanError::ShipOverlaps);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Returns a random non-overlapping origin and orientation for `ship_type`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Coordinate, Orientation), OceanError> {
        let len = ship_type.length();
        let Dimensions { rows, columns } = self.dimensions;
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let bounds = match orient {
                Orientation::Horizontal => (rows.checked_sub(1), columns.checked_sub(len)),
                Orientation::Vertical => (rows.checked_sub(len), columns.checked_sub(1)),
            };
            // ship does not fit this way round
            let (Some(max_r), Some(max_c)) = bounds else {
                continue;
            };
            let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            // build a temp ship and check overlap
            let ship = PlacedShip::new(ship_type, orient, origin, self.dimensions)?;
            if !self.ships.iter().any(|s| s.overlaps(&ship)) {
                return Ok((origin, orient));
            }
        }
        Err(OceanError::UnableToPlaceShip)
    }

    /// Resolve a guess at `coord`, reporting hit, miss or the sunk ship.
    pub fn guess(&mut self, coord: Coordinate) -> Result<GuessResult, OceanError> {
        let seen = self
            .guessed
            .get(coord)
            .ok_or(OceanError::OutOfBounds(coord))?;
        // prevent duplicates
        if seen {
            return Err(OceanError::AlreadyGuessed(coord));
        }
        self.guessed[coord] = true;
        match self.ships.iter_mut().find(|s| s.contains(coord)) {
            Some(ship) => {
                ship.register_hit();
                if ship.is_sunk() {
                    Ok(GuessResult::Sink(ship.ship_type()))
                } else {
                    Ok(GuessResult::Hit)
                }
            }
            None => Ok(GuessResult::Miss),
        }
    }
}

impl fmt::Debug for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ocean {{ ships: {:?} }}", self.ships)?;
        let Dimensions { rows, columns } = self.dimensions;
        for r in 0..rows {
            for c in 0..columns {
                let coord = Coordinate::new(r, c);
                let occupied = self.ships.iter().any(|s| s.contains(coord));
                let shot = self.guessed.get(coord).unwrap_or(false);
                let ch = match (occupied, shot) {
                    (true, true) => 'X',
                    (true, false) => 'S',
                    (false, true) => 'o',
                    (false, false) => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
