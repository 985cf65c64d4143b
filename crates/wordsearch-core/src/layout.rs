//! Pixel layout of a grid of equally sized cells.

use std::iter::FusedIterator;

use crate::{CellIndex, CellPos, GridSize, Point, Rect};

/// Maps a rectangle and a [`GridSize`] onto cell rectangles.
///
/// Cells are evenly spaced with a uniform `gap` before every row and column,
/// including the leading edge. The cell size is derived once at construction:
///
/// ```text
/// cell_width  = (width  - gap * (cols + 1)) / cols
/// cell_height = (height - gap * (rows + 1)) / rows
/// ```
///
/// # Examples
///
/// ```
/// use wordsearch_core::{CellPos, GridLayout, GridSize, Point, Rect};
///
/// let size = GridSize::new(2, 2).unwrap();
/// let layout = GridLayout::new(Rect::new(0.0, 0.0, 23.0, 23.0), size, 1.0);
/// assert_eq!(layout.cell_width(), 10.0);
///
/// let second = size.index_of(CellPos::new(1, 0)).unwrap();
/// assert_eq!(layout.cell_origin(second), Point::new(12.0, 1.0));
///
/// // Gaps belong to no cell.
/// assert_eq!(layout.cell_at(Point::new(11.5, 5.0)), None);
/// assert_eq!(layout.cell_at(Point::new(15.0, 5.0)), Some(CellPos::new(1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    rect: Rect,
    size: GridSize,
    gap: f64,
    cell_width: f64,
    cell_height: f64,
    origins: Vec<Point>,
}

impl GridLayout {
    /// Creates a layout and precomputes every cell's top-left corner.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn new(rect: Rect, size: GridSize, gap: f64) -> Self {
        let cols = size.cols() as f64;
        let rows = size.rows() as f64;
        let cell_width = (rect.width - gap * (cols + 1.0)) / cols;
        let cell_height = (rect.height - gap * (rows + 1.0)) / rows;

        let origins = size
            .positions()
            .map(|pos| {
                let x = pos.x() as f64;
                let y = pos.y() as f64;
                Point::new(
                    rect.x + gap * (x + 1.0) + cell_width * x,
                    rect.y + gap * (y + 1.0) + cell_height * y,
                )
            })
            .collect();

        Self {
            rect,
            size,
            gap,
            cell_width,
            cell_height,
            origins,
        }
    }

    /// Returns the outer rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the gap between cells.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size.cell_count()
    }

    /// Returns the width of one cell.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Returns the height of one cell.
    #[must_use]
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Returns the precomputed top-left corner of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` was produced by a larger grid size.
    #[must_use]
    pub fn cell_origin(&self, index: CellIndex) -> Point {
        self.origins[index.index()]
    }

    /// Returns the rectangle covered by a cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` was produced by a larger grid size.
    #[must_use]
    pub fn cell_rect(&self, index: CellIndex) -> Rect {
        Rect::from_origin_size(self.cell_origin(index), self.cell_width, self.cell_height)
    }

    /// Returns every cell's rectangle in row-major order.
    pub fn cell_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.origins
            .iter()
            .map(|&origin| Rect::from_origin_size(origin, self.cell_width, self.cell_height))
    }

    /// Returns the geometric centre of the cell at `pos`.
    ///
    /// Positions outside the grid are extrapolated along the same spacing.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn cell_center(&self, pos: CellPos) -> Point {
        let x = pos.x() as f64;
        let y = pos.y() as f64;
        Point::new(
            self.rect.x + self.gap * (x + 1.0) + self.cell_width * (x + 0.5),
            self.rect.y + self.gap * (y + 1.0) + self.cell_height * (y + 0.5),
        )
    }

    /// Returns the cell strictly containing `point`.
    ///
    /// Points on a cell edge, in a gap, outside the grid, or with non-finite
    /// coordinates yield `None`.
    #[must_use]
    pub fn cell_at(&self, point: Point) -> Option<CellPos> {
        let x = self.axis_cell(point.x - self.rect.x, self.cell_width, self.size.cols())?;
        let y = self.axis_cell(point.y - self.rect.y, self.cell_height, self.size.rows())?;
        let pos = CellPos::new(x, y);
        let index = self.size.index_of(pos)?;
        self.cell_rect(index).contains_strict(point).then_some(pos)
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn axis_cell(&self, offset: f64, cell_len: f64, count: usize) -> Option<usize> {
        let pitch = cell_len + self.gap;
        if pitch.is_nan() || pitch <= 0.0 {
            return None;
        }
        let cell = ((offset - self.gap) / pitch).floor();
        (cell >= 0.0 && cell < count as f64).then_some(cell as usize)
    }

    /// Returns a restartable iterator over every cell's top-left corner in
    /// row-major order.
    #[must_use]
    pub fn cell_origins(&self) -> CellOrigins<'_> {
        CellOrigins {
            inner: self.origins.iter(),
        }
    }
}

/// Iterator over cell corners, see [`GridLayout::cell_origins`].
#[derive(Debug, Clone)]
pub struct CellOrigins<'a> {
    inner: std::slice::Iter<'a, Point>,
}

impl Iterator for CellOrigins<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for CellOrigins<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl FusedIterator for CellOrigins<'_> {}
impl ExactSizeIterator for CellOrigins<'_> {}
