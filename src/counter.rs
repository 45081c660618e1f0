//! Per-length configuration counting.
//!
//! For a ship of length `L`, the configuration count of a cell is the number
//! of horizontal and vertical placements of that ship which cover the cell and
//! cross no hit, miss or board edge.

use log::trace;

use crate::board::OpponentBoard;
use crate::grid::{Coordinate, Grid};
use crate::targeting::Direction;

/// Per-cell configuration count.
pub type Count = u32;

/// Steps from `cell` along `direction` to the first blocked coordinate
/// (off-board or obstacle), capped at `length`. The bound is exclusive.
fn free_run(board: &OpponentBoard, cell: Coordinate, direction: Direction, length: usize) -> usize {
    for step in 1..length {
        match direction.step(cell, step) {
            Some(c) if board.in_bounds(c) && !board.is_obstacle(c) => continue,
            _ => return step,
        }
    }
    length
}

/// Number of placements of a ship of `length` covering `cell`, summed over
/// both orientations. Pure; obstacle cells are not special-cased here.
pub fn count_for_cell(board: &OpponentBoard, cell: Coordinate, length: usize) -> Count {
    if length == 0 || !board.in_bounds(cell) {
        return 0;
    }
    let axis = |low: Direction, high: Direction| {
        let lower = free_run(board, cell, low, length);
        let upper = free_run(board, cell, high, length);
        // span = upper + lower - 1; placements = max(0, 1 + span - length)
        (lower + upper).saturating_sub(length)
    };
    let horizontal = axis(Direction::West, Direction::East);
    let vertical = axis(Direction::South, Direction::North);
    (horizontal + vertical) as Count
}

/// Configuration count grid for a single ship length.
#[derive(Clone, PartialEq, Eq)]
pub struct ShipCounter {
    length: usize,
    counts: Grid<Count>,
}

impl ShipCounter {
    /// Build the counter with a full recompute against `board`.
    pub fn new(board: &OpponentBoard, length: usize) -> Self {
        let mut counter = Self {
            length,
            counts: Grid::zeroed(board.dimensions()),
        };
        counter.recompute(board);
        counter
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn counts(&self) -> &Grid<Count> {
        &self.counts
    }

    /// Recount every cell from scratch. Shot cells hold zero.
    pub fn recompute(&mut self, board: &OpponentBoard) {
        for (coord, state) in board.iter() {
            self.counts[coord] = if state.is_obstacle() {
                0
            } else {
                count_for_cell(board, coord, self.length)
            };
        }
    }

    /// Patch the counts after `shot` was resolved on `board`.
    ///
    /// Only cells on the shot's row or column within `length - 1` steps can
    /// change, and the walk stops at the first obstacle since cells behind it
    /// were already bounded by that obstacle.
    pub fn patch(&mut self, board: &OpponentBoard, shot: Coordinate) {
        if !board.in_bounds(shot) {
            return;
        }
        self.counts[shot] = 0;
        let mut touched = 0usize;
        for direction in Direction::ALL {
            for step in 1..self.length {
                let cell = match direction.step(shot, step) {
                    Some(c) if board.in_bounds(c) && !board.is_obstacle(c) => c,
                    _ => break,
                };
                self.counts[cell] = count_for_cell(board, cell, self.length);
                touched += 1;
            }
        }
        trace!(
            "patched length {} around {}: {} cells recounted",
            self.length,
            shot,
            touched
        );
    }
}

impl core::fmt::Debug for ShipCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "ShipCounter(length {})", self.length)?;
        write!(f, "{:?}", self.counts)
    }
}
