//! Aggregate configuration counts over the fleet and rank cells for guessing.
//! Counters are patched locally after each shot; the total is re-summed.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use log::trace;

use crate::board::OpponentBoard;
use crate::counter::{Count, ShipCounter};
use crate::grid::{Coordinate, Grid};

/// Per-length counters plus their element-wise total.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ProbabilityMap {
    counters: Vec<ShipCounter>,
    total: Grid<Count>,
}

impl ProbabilityMap {
    /// Fully compute one counter per entry of `lengths` against `board`.
    /// Duplicate lengths get their own counter so they weigh twice.
    pub fn new(board: &OpponentBoard, lengths: &[usize]) -> Self {
        let counters = lengths
            .iter()
            .map(|&len| ShipCounter::new(board, len))
            .collect();
        let mut map = Self {
            counters,
            total: Grid::zeroed(board.dimensions()),
        };
        map.recalculate_total();
        map
    }

    /// Recompute every counter from scratch.
    pub fn recompute(&mut self, board: &OpponentBoard) {
        for counter in self.counters.iter_mut() {
            counter.recompute(board);
        }
        self.recalculate_total();
    }

    /// Patch every counter around a freshly resolved cell and re-sum.
    pub fn apply_shot(&mut self, board: &OpponentBoard, shot: Coordinate) {
        for counter in self.counters.iter_mut() {
            counter.patch(board, shot);
        }
        self.recalculate_total();
    }

    /// Drop one counter of `length`. Returns `false` if none is tracked.
    pub fn remove_length(&mut self, length: usize) -> bool {
        match self.counters.iter().position(|c| c.length() == length) {
            Some(idx) => {
                self.counters.remove(idx);
                self.recalculate_total();
                trace!("removed counter for length {}", length);
                true
            }
            None => false,
        }
    }

    fn recalculate_total(&mut self) {
        self.total.fill(0);
        for counter in self.counters.iter() {
            self.total.accumulate(counter.counts());
        }
    }

    pub fn total(&self) -> &Grid<Count> {
        &self.total
    }

    pub fn counters(&self) -> &[ShipCounter] {
        &self.counters
    }

    /// Ship lengths still being counted.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.counters.iter().map(|c| c.length())
    }

    /// Cell with the strictly highest total, first in row-major order on ties.
    pub fn highest(&self) -> Option<Coordinate> {
        self.total.argmax().map(|(coord, _)| coord)
    }

    /// Total count normalized into a probability density. When no placement
    /// remains the mass is spread evenly over the unexplored cells.
    pub fn pdf(&self, board: &OpponentBoard) -> Grid<f64> {
        let mut pdf = Grid::filled(self.total.dimensions(), 0.0f64);
        let sum = self.total.sum();
        if sum == 0 {
            let unknown = board.iter().filter(|(_, s)| !s.is_obstacle()).count();
            if unknown == 0 {
                return pdf;
            }
            let uniform = 1.0 / unknown as f64;
            for (coord, state) in board.iter() {
                if !state.is_obstacle() {
                    pdf[coord] = uniform;
                }
            }
            return pdf;
        }
        for (coord, v) in self.total.iter() {
            pdf[coord] = v as f64 / sum as f64;
        }
        pdf
    }
}
