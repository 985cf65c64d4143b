//! A row-major per-cell container.

use std::ops::{Index, IndexMut};

use crate::{CellIndex, CellPos, GridSize};

/// Error returned by [`CellMap::from_vec`] when the value count does not match
/// the grid's cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected {expected} cell values, got {actual}")]
pub struct CellCountMismatch {
    /// Cell count of the grid.
    pub expected: usize,
    /// Number of values supplied.
    pub actual: usize,
}

/// One value per cell of a grid, stored in row-major order.
///
/// Indexing by [`CellIndex`] or [`CellPos`] panics if the key lies outside the
/// map, like slice indexing. Use [`get`](Self::get) for a checked lookup.
///
/// # Examples
///
/// ```
/// use wordsearch_core::{CellMap, CellPos, GridSize};
///
/// let size = GridSize::new(2, 2).unwrap();
/// let mut map = CellMap::new(size, 0);
/// map[CellPos::new(1, 0)] = 7;
/// assert_eq!(map.get(CellPos::new(1, 0)), Some(&7));
/// assert_eq!(map.get(CellPos::new(2, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMap<T> {
    size: GridSize,
    cells: Vec<T>,
}

impl<T: Clone> CellMap<T> {
    /// Creates a map with every cell set to `value`.
    #[must_use]
    pub fn new(size: GridSize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size.cell_count()],
        }
    }

    /// Resets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> CellMap<T> {
    /// Creates a map from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`CellCountMismatch`] if `cells` does not hold exactly one value
    /// per cell.
    pub fn from_vec(size: GridSize, cells: Vec<T>) -> Result<Self, CellCountMismatch> {
        if cells.len() != size.cell_count() {
            return Err(CellCountMismatch {
                expected: size.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Returns the grid size of this map.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the value at `pos`, or `None` if it lies outside the map.
    #[must_use]
    pub fn get(&self, pos: CellPos) -> Option<&T> {
        let index = self.size.index_of(pos)?;
        self.cells.get(index.index())
    }

    /// Returns a mutable reference to the value at `pos`, or `None` if it lies
    /// outside the map.
    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut T> {
        let index = self.size.index_of(pos)?;
        self.cells.get_mut(index.index())
    }

    /// Returns an iterator over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, &T)> {
        self.size.positions().zip(&self.cells)
    }

    /// Returns an iterator over the values of one row.
    ///
    /// The iterator is empty if `y` is not a row of the map.
    pub fn row(&self, y: usize) -> impl Iterator<Item = &T> {
        let cols = self.size.cols();
        let start = if y < self.size.rows() {
            y * cols
        } else {
            self.cells.len()
        };
        self.cells[start..].iter().take(cols)
    }

    /// Returns the values in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<CellIndex> for CellMap<T> {
    type Output = T;

    fn index(&self, index: CellIndex) -> &T {
        &self.cells[index.index()]
    }
}

impl<T> IndexMut<CellIndex> for CellMap<T> {
    fn index_mut(&mut self, index: CellIndex) -> &mut T {
        &mut self.cells[index.index()]
    }
}

impl<T> Index<CellPos> for CellMap<T> {
    type Output = T;

    fn index(&self, pos: CellPos) -> &T {
        match self.get(pos) {
            Some(value) => value,
            None => panic!("cell {pos} is outside a {} grid", self.size),
        }
    }
}

impl<T> IndexMut<CellPos> for CellMap<T> {
    fn index_mut(&mut self, pos: CellPos) -> &mut T {
        let size = self.size;
        match self.get_mut(pos) {
            Some(value) => value,
            None => panic!("cell {pos} is outside a {size} grid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        let size = GridSize::new(2, 2).unwrap();
        assert_eq!(
            CellMap::from_vec(size, vec![1, 2, 3]),
            Err(CellCountMismatch {
                expected: 4,
                actual: 3
            })
        );
        let map = CellMap::from_vec(size, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(map[CellPos::new(0, 1)], 3);
        assert_eq!(map[size.checked_index(3).unwrap()], 4);
    }

    #[test]
    fn test_rows() {
        let size = GridSize::new(3, 2).unwrap();
        let map = CellMap::from_vec(size, vec!['a', 'b', 'c', 'd', 'e', 'f']).unwrap();
        assert_eq!(map.row(1).collect::<String>(), "def");
        assert_eq!(map.row(2).count(), 0);
    }

    #[test]
    fn test_fill_and_iter() {
        let size = GridSize::new(2, 1).unwrap();
        let mut map = CellMap::new(size, false);
        map[CellPos::new(1, 0)] = true;
        let set: Vec<_> = map.iter().filter(|(_, v)| **v).map(|(p, _)| p).collect();
        assert_eq!(set, [CellPos::new(1, 0)]);
        map.fill(false);
        assert!(map.iter().all(|(_, v)| !*v));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_index_outside_panics() {
        let size = GridSize::new(2, 2).unwrap();
        let map = CellMap::new(size, 0);
        let _ = map[CellPos::new(5, 5)];
    }
}
