//! Fixed-size dense 2D grids indexed by [`Coordinate`].
//!
//! Grids are allocated once with the board's dimensions and mutated in place;
//! they are never resized. Numeric grids get a handful of element-wise helpers
//! used by the configuration counters and the probability map.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
use core::fmt;
use core::ops::{Index, IndexMut};
use num_traits::{PrimInt, Unsigned, Zero};

/// A 0-indexed `(row, column)` position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Offset this coordinate by a signed `(rows, columns)` step.
    /// Returns `None` when the result would be negative.
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Coordinate> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        Some(Coordinate { row, column })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(c: Coordinate) -> Self {
        (c.row, c.column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Immutable board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells on the board.
    pub const fn area(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns true if `coord` lies on the board.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.column < self.columns
    }

    /// Row-major iterator over every coordinate of the board.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let columns = self.columns;
        (0..self.area()).map(move |i| Coordinate::new(i / columns, i % columns))
    }
}

/// Dense row-major grid with one `T` per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    dimensions: Dimensions,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Allocate a grid with every cell set to `value`.
    pub fn filled(dimensions: Dimensions, value: T) -> Self {
        Self {
            dimensions,
            cells: vec![value; dimensions.area()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Value at `coord`, or `None` when off the board.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<T> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|c| *c = value);
    }

    /// Row-major iterator over `(coordinate, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, T)> + '_ {
        self.dimensions.coordinates().zip(self.cells.iter().copied())
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.dimensions.columns;
        &self.cells[start..start + self.dimensions.columns]
    }

    #[inline]
    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        if self.dimensions.contains(coord) {
            Some(coord.row * self.dimensions.columns + coord.column)
        } else {
            None
        }
    }
}

impl<T: PrimInt + Unsigned + Zero> Grid<T> {
    /// Allocate a grid of zeros.
    pub fn zeroed(dimensions: Dimensions) -> Self {
        Self::filled(dimensions, T::zero())
    }

    /// Element-wise `self += other`. Both grids must share dimensions.
    pub fn accumulate(&mut self, other: &Grid<T>) {
        debug_assert_eq!(self.dimensions, other.dimensions);
        for (a, &b) in self.cells.iter_mut().zip(other.cells.iter()) {
            *a = a.saturating_add(b);
        }
    }

    /// Sum of every cell.
    pub fn sum(&self) -> T {
        self.cells
            .iter()
            .fold(T::zero(), |acc, &v| acc.saturating_add(v))
    }

    /// First cell holding the strictly highest positive value in row-major
    /// order, or `None` if every cell is zero.
    pub fn argmax(&self) -> Option<(Coordinate, T)> {
        let mut best: Option<(Coordinate, T)> = None;
        for (coord, v) in self.iter() {
            let current = best.map_or(T::zero(), |(_, b)| b);
            if v > current {
                best = Some((coord, v));
            }
        }
        best
    }
}

impl<T: Copy> Index<Coordinate> for Grid<T> {
    type Output = T;

    /// Panics if `coord` is off the board; use [`Grid::get`] for checked access.
    fn index(&self, coord: Coordinate) -> &T {
        assert!(self.dimensions.contains(coord), "coordinate {} off the board", coord);
        let i = coord.row * self.dimensions.columns + coord.column;
        &self.cells[i]
    }
}

impl<T: Copy> IndexMut<Coordinate> for Grid<T> {
    fn index_mut(&mut self, coord: Coordinate) -> &mut T {
        assert!(self.dimensions.contains(coord), "coordinate {} off the board", coord);
        let i = coord.row * self.dimensions.columns + coord.column;
        &mut self.cells[i]
    }
}

impl<T: Copy + fmt::Display> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid<{}x{}>:",
            self.dimensions.rows, self.dimensions.columns
        )?;
        for r in 0..self.dimensions.rows {
            for v in self.row(r) {
                write!(f, "{:>4}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
