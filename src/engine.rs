//! Probability-driven player: hunts the highest configuration count and
//! probes outward from the first hit once a ship is found.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use log::{debug, warn};

use crate::{
    board::{CellState, OpponentBoard},
    common::{Answer, EngineError},
    config::{EngineConfig, SunkPolicy, World},
    grid::{Coordinate, Dimensions},
    player::Player,
    probability::ProbabilityMap,
    targeting::{Direction, Mode, TargetCursor},
};

pub struct TargetingEngine {
    config: EngineConfig,
    board: OpponentBoard,
    map: ProbabilityMap,
    mode: Mode,
    /// Probe direction carried between ships.
    heading: Direction,
}

impl TargetingEngine {
    /// Create an engine for `world` with the default configuration.
    pub fn new(world: &World) -> Result<Self, EngineError> {
        Self::with_config(world, EngineConfig::default())
    }

    pub fn with_config(world: &World, config: EngineConfig) -> Result<Self, EngineError> {
        world.validate()?;
        let board = OpponentBoard::new(world.dimensions);
        let lengths: Vec<usize> = world.ship_lengths();
        let Dimensions { rows, columns } = world.dimensions;
        if lengths.iter().any(|&l| l > rows.max(columns)) {
            warn!(
                "fleet contains ships longer than the {}x{} board; they will never be counted",
                rows, columns
            );
        }
        let map = ProbabilityMap::new(&board, &lengths);
        Ok(Self {
            config,
            board,
            map,
            mode: Mode::Hunting,
            heading: Direction::North,
        })
    }

    pub fn board(&self) -> &OpponentBoard {
        &self.board
    }

    pub fn probability(&self) -> &ProbabilityMap {
        &self.map
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Pick the next cell: probe around the anchor while targeting, otherwise
    /// take the highest total count.
    pub fn make_guess(&mut self) -> Coordinate {
        if let Mode::Targeting(mut cursor) = self.mode {
            match self.probe(&mut cursor) {
                Some(coord) => {
                    self.heading = cursor.direction;
                    self.mode = Mode::Targeting(cursor);
                    return coord;
                }
                None => {
                    warn!(
                        "every direction from anchor {} is blocked, falling back to hunting",
                        cursor.anchor
                    );
                    self.heading = cursor.direction;
                    self.mode = Mode::Hunting;
                }
            }
        }
        self.hunt()
    }

    /// Rotate the cursor until it points at an unexplored cell, giving up
    /// after the configured number of attempts.
    fn probe(&self, cursor: &mut TargetCursor) -> Option<Coordinate> {
        let limit = self.config.attempt_limit_for(self.board.dimensions());
        for _ in 0..limit {
            match cursor.candidate() {
                Some(coord) if self.board.is_unexplored(coord) => return Some(coord),
                _ => cursor.rotate(),
            }
        }
        None
    }

    fn hunt(&self) -> Coordinate {
        self.map.highest().unwrap_or_else(|| {
            warn!("no placements left on the board; guessing without information");
            self.board
                .first_unexplored()
                .unwrap_or(Coordinate::new(0, 0))
        })
    }

    /// Record the answer to `guess`, advance the hunting/targeting state and
    /// patch the configuration counts around the guessed cell.
    pub fn update(&mut self, guess: Coordinate, answer: Answer) -> Result<(), EngineError> {
        if !self.board.in_bounds(guess) {
            return Err(EngineError::OutOfBounds(guess));
        }
        if self.board.is_obstacle(guess) {
            return Err(EngineError::AlreadyGuessed(guess));
        }
        let sunk = answer.ship_sunk.filter(|_| answer.is_hit);
        if let (SunkPolicy::Remove, Some(ship)) = (self.config.sunk_policy, sunk) {
            if !self.map.lengths().any(|l| l == ship.length()) {
                return Err(EngineError::ShipNotInFleet(ship));
            }
        }

        if answer.is_hit {
            self.board.mark(guess, CellState::Hit);
            match (sunk, self.mode) {
                (Some(ship), _) => {
                    debug!("sank {} with {}, back to hunting", ship, guess);
                    self.mode = Mode::Hunting;
                }
                (None, Mode::Hunting) => {
                    debug!("hit at {}, targeting heading {:?}", guess, self.heading);
                    self.mode = Mode::Targeting(TargetCursor::new(guess, self.heading));
                }
                (None, Mode::Targeting(mut cursor)) => {
                    cursor.advance();
                    self.mode = Mode::Targeting(cursor);
                }
            }
        } else {
            self.board.mark(guess, CellState::Miss);
            if let Mode::Targeting(mut cursor) = self.mode {
                cursor.rotate();
                self.heading = cursor.direction;
                self.mode = Mode::Targeting(cursor);
            }
        }

        self.map.apply_shot(&self.board, guess);
        if let (SunkPolicy::Remove, Some(ship)) = (self.config.sunk_policy, sunk) {
            self.map.remove_length(ship.length());
        }
        Ok(())
    }
}

impl Player for TargetingEngine {
    fn make_guess(&mut self) -> Coordinate {
        TargetingEngine::make_guess(self)
    }

    fn update(&mut self, guess: Coordinate, answer: Answer) -> Result<(), EngineError> {
        TargetingEngine::update(self, guess, answer)
    }
}
