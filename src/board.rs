//! The opponent's board as seen by this player: per-cell Unknown/Hit/Miss.

use core::fmt;

use crate::grid::{Coordinate, Dimensions, Grid};

/// Knowledge about one cell of the opponent board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Unknown,
    Hit,
    Miss,
}

impl CellState {
    /// Hits and misses block ship placement continuity.
    #[inline]
    pub fn is_obstacle(self) -> bool {
        !matches!(self, CellState::Unknown)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct OpponentBoard {
    cells: Grid<CellState>,
    hits: usize,
    misses: usize,
}

impl OpponentBoard {
    /// Create a board with every cell unknown.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            cells: Grid::filled(dimensions, CellState::Unknown),
            hits: 0,
            misses: 0,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.cells.dimensions()
    }

    /// State at `coord`, or `None` when off the board.
    pub fn state(&self, coord: Coordinate) -> Option<CellState> {
        self.cells.get(coord)
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        self.dimensions().contains(coord)
    }

    /// True if `coord` is on the board and already hit or missed.
    #[inline]
    pub fn is_obstacle(&self, coord: Coordinate) -> bool {
        self.cells.get(coord).is_some_and(CellState::is_obstacle)
    }

    /// True if `coord` is on the board and still unknown.
    #[inline]
    pub fn is_unexplored(&self, coord: Coordinate) -> bool {
        self.cells.get(coord) == Some(CellState::Unknown)
    }

    /// Record the outcome of a shot. Only `Unknown` cells transition; returns
    /// `false` if the cell was off the board or already resolved.
    pub fn mark(&mut self, coord: Coordinate, state: CellState) -> bool {
        if !self.is_unexplored(coord) || state == CellState::Unknown {
            return false;
        }
        self.cells[coord] = state;
        match state {
            CellState::Hit => self.hits += 1,
            CellState::Miss => self.misses += 1,
            CellState::Unknown => {}
        }
        true
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn miss_count(&self) -> usize {
        self.misses
    }

    /// First unknown cell in row-major order.
    pub fn first_unexplored(&self) -> Option<Coordinate> {
        self.cells
            .iter()
            .find(|&(_, s)| s == CellState::Unknown)
            .map(|(c, _)| c)
    }

    /// Row-major iterator over every cell and its state.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, CellState)> + '_ {
        self.cells.iter()
    }
}

impl fmt::Display for OpponentBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Dimensions { rows, columns } = self.dimensions();
        for r in 0..rows {
            for (c, state) in self.cells.row(r).iter().enumerate() {
                let ch = match state {
                    CellState::Unknown => '□',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{}", ch)?;
                if c + 1 < columns {
                    write!(f, " ")?;
                }
            }
            if r + 1 < rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for OpponentBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "OpponentBoard {{ hits: {}, misses: {} }}",
            self.hits, self.misses
        )?;
        write!(f, "{}", self)
    }
}
