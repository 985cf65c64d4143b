//! Cell addressing: grid dimensions, positions, and checked linear indices.
//!
//! A cell is addressed either by its [`CellPos`] (column, row) or by its
//! linear [`CellIndex`] in row-major order (`index = row * cols + column`).
//! The two are interchangeable through a [`GridSize`], which is the only way
//! to obtain a [`CellIndex`].

use std::{fmt, iter::FusedIterator};

/// Error returned when creating a [`GridSize`] with a zero dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridSizeError {
    /// The grid has no columns or no rows.
    #[display("grid must have at least one row and one column, got {cols}x{rows}")]
    ZeroDimension {
        /// Requested column count.
        cols: usize,
        /// Requested row count.
        rows: usize,
    },
}

/// Error returned when a raw index does not address a cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CellIndexError {
    /// The index is not below the grid's cell count.
    #[display("cell index {index} is out of range for a grid of {len} cells")]
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Number of cells in the grid.
        len: usize,
    },
}

/// A cell position given by column (`x`) and row (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPos {
    x: usize,
    y: usize,
}

impl CellPos {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> usize {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> usize {
        self.y
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A linear, row-major cell index that is known to be in range for the
/// [`GridSize`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Returns the raw index value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Which neighbours count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Adjacency {
    /// All eight surrounding cells (and the cell itself).
    WithDiagonals,
    /// Only the four cells sharing an edge.
    Orthogonal,
}

/// Dimensions of a rectangular grid.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{CellPos, GridSize};
///
/// let size = GridSize::new(4, 3).unwrap();
/// assert_eq!(size.cell_count(), 12);
///
/// let index = size.index_of(CellPos::new(1, 2)).unwrap();
/// assert_eq!(index.index(), 9);
/// assert_eq!(size.position(index), CellPos::new(1, 2));
///
/// assert!(size.index_of(CellPos::new(4, 0)).is_none());
/// assert!(size.checked_index(12).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    cols: usize,
    rows: usize,
}

impl GridSize {
    /// Creates grid dimensions from a column count and a row count.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError::ZeroDimension`] if either count is zero.
    pub fn new(cols: usize, rows: usize) -> Result<Self, GridSizeError> {
        if cols == 0 || rows == 0 {
            return Err(GridSizeError::ZeroDimension { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.cols * self.rows
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(self, pos: CellPos) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Returns the linear index of `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub const fn index_of(self, pos: CellPos) -> Option<CellIndex> {
        if self.contains(pos) {
            Some(CellIndex(pos.y * self.cols + pos.x))
        } else {
            None
        }
    }

    /// Validates a raw linear index.
    ///
    /// # Errors
    ///
    /// Returns [`CellIndexError::OutOfRange`] if `index` is not below
    /// [`cell_count`](Self::cell_count).
    pub const fn checked_index(self, index: usize) -> Result<CellIndex, CellIndexError> {
        if index < self.cell_count() {
            Ok(CellIndex(index))
        } else {
            Err(CellIndexError::OutOfRange {
                index,
                len: self.cell_count(),
            })
        }
    }

    /// Returns the position addressed by `index`.
    ///
    /// `index` is expected to come from this grid size; an index produced by
    /// a larger grid maps to a position outside this one.
    #[must_use]
    pub const fn position(self, index: CellIndex) -> CellPos {
        CellPos::new(index.0 % self.cols, index.0 / self.cols)
    }

    /// Returns `true` if `a` and `b` are neighbours under `adjacency`.
    ///
    /// With [`Adjacency::WithDiagonals`] both deltas must be at most one, which
    /// also accepts `a == b`. With [`Adjacency::Orthogonal`] exactly one delta
    /// must be one and the other zero.
    #[must_use]
    pub fn is_adjacent(self, a: CellPos, b: CellPos, adjacency: Adjacency) -> bool {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        match adjacency {
            Adjacency::WithDiagonals => dx <= 1 && dy <= 1,
            Adjacency::Orthogonal => (dx == 1 && dy == 0) || (dx == 0 && dy == 1),
        }
    }

    /// Returns an iterator over every position in row-major order.
    #[must_use]
    pub fn positions(self) -> Positions {
        Positions {
            size: self,
            next: 0,
        }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Iterator over every position of a grid in row-major order.
#[derive(Debug, Clone)]
pub struct Positions {
    size: GridSize,
    next: usize,
}

impl Iterator for Positions {
    type Item = CellPos;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.size.checked_index(self.next).ok()?;
        self.next += 1;
        Some(self.size.position(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.cell_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl FusedIterator for Positions {}
impl ExactSizeIterator for Positions {}
