use wordsearch_core::CellPos;

/// An ordered, contiguous, straight line of cells.
///
/// A run always contains at least one cell. Its cells are ordered from the
/// geometrically first endpoint: the leftmost one, or the topmost one for a
/// vertical run. The order does not depend on which endpoint the drag
/// started from, so a run spells either a word or its reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRun {
    cells: Vec<CellPos>,
}

impl CellRun {
    /// Enumerates the cells between `start` and `end`, inclusive.
    ///
    /// Returns `None` unless the endpoints share a column, share a row, or lie
    /// on a 45° diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::CellPos;
    /// use wordsearch_game::CellRun;
    ///
    /// let run = CellRun::between(CellPos::new(2, 3), CellPos::new(0, 1)).unwrap();
    /// assert_eq!(
    ///     run.cells(),
    ///     [CellPos::new(0, 1), CellPos::new(1, 2), CellPos::new(2, 3)]
    /// );
    ///
    /// assert!(CellRun::between(CellPos::new(0, 0), CellPos::new(2, 1)).is_none());
    /// ```
    #[must_use]
    pub fn between(start: CellPos, end: CellPos) -> Option<Self> {
        let dx = start.x().abs_diff(end.x());
        let dy = start.y().abs_diff(end.y());

        let cells = if dx == 0 {
            let top = start.y().min(end.y());
            (0..=dy).map(|l| CellPos::new(start.x(), top + l)).collect()
        } else if dy == 0 {
            let left = start.x().min(end.x());
            (0..=dx).map(|l| CellPos::new(left + l, start.y())).collect()
        } else if dx == dy {
            let (left, right) = if start.x() < end.x() {
                (start, end)
            } else {
                (end, start)
            };
            let descending = right.y() > left.y();
            (0..=dx)
                .map(|l| {
                    let y = if descending {
                        left.y() + l
                    } else {
                        left.y() - l
                    };
                    CellPos::new(left.x() + l, y)
                })
                .collect()
        } else {
            return None;
        };

        Some(Self { cells })
    }

    /// Returns the cells in run order.
    #[must_use]
    pub fn cells(&self) -> &[CellPos] {
        &self.cells
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a run has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` is part of the run.
    #[must_use]
    pub fn contains(&self, pos: CellPos) -> bool {
        self.cells.contains(&pos)
    }

    /// Returns the first cell.
    #[must_use]
    pub fn first(&self) -> CellPos {
        self.cells[0]
    }

    /// Returns the last cell.
    #[must_use]
    pub fn last(&self) -> CellPos {
        self.cells[self.cells.len() - 1]
    }

    /// Iterates over the cells from the leftmost (or topmost) end.
    pub fn iter(&self) -> std::slice::Iter<'_, CellPos> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a CellRun {
    type Item = &'a CellPos;
    type IntoIter = std::slice::Iter<'a, CellPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordsearch_core::{Adjacency, GridSize};

    use super::*;

    fn p(x: usize, y: usize) -> CellPos {
        CellPos::new(x, y)
    }

    #[test]
    fn test_single_cell() {
        let run = CellRun::between(p(3, 3), p(3, 3)).unwrap();
        assert_eq!(run.cells(), [p(3, 3)]);
        assert_eq!(run.first(), run.last());
    }

    #[test]
    fn test_vertical_runs_go_top_down() {
        let up = CellRun::between(p(1, 4), p(1, 2)).unwrap();
        let down = CellRun::between(p(1, 2), p(1, 4)).unwrap();
        assert_eq!(up, down);
        assert_eq!(up.cells(), [p(1, 2), p(1, 3), p(1, 4)]);
    }

    #[test]
    fn test_horizontal_runs_go_left_to_right() {
        let run = CellRun::between(p(2, 0), p(0, 0)).unwrap();
        assert_eq!(run.cells(), [p(0, 0), p(1, 0), p(2, 0)]);
        assert!(run.iter().eq(&run));
        assert_eq!(run.iter().rev().next(), Some(&p(2, 0)));
    }

    #[test]
    fn test_diagonal_runs_start_from_the_left() {
        let rising = CellRun::between(p(0, 3), p(3, 0)).unwrap();
        assert_eq!(rising.cells(), [p(0, 3), p(1, 2), p(2, 1), p(3, 0)]);
        assert_eq!(CellRun::between(p(3, 0), p(0, 3)), Some(rising));

        let falling = CellRun::between(p(3, 3), p(1, 1)).unwrap();
        assert_eq!(falling.cells(), [p(1, 1), p(2, 2), p(3, 3)]);
    }

    #[test]
    fn test_crooked_pairs_have_no_run() {
        assert_eq!(CellRun::between(p(0, 0), p(1, 2)), None);
        assert_eq!(CellRun::between(p(4, 1), p(0, 2)), None);
    }

    fn straight_pair() -> impl Strategy<Value = (CellPos, CellPos)> {
        (0usize..12, 0usize..12, 0usize..4, 0usize..12).prop_filter_map(
            "end must stay on the grid",
            |(x, y, kind, len)| {
                let (ex, ey) = match kind {
                    0 => (Some(x), y.checked_add(len)),
                    1 => (x.checked_add(len), Some(y)),
                    2 => (x.checked_add(len), y.checked_add(len)),
                    _ => (x.checked_add(len), y.checked_sub(len)),
                };
                Some((p(x, y), p(ex?, ey?)))
            },
        )
    }

    proptest! {
        #[test]
        fn prop_straight_runs_are_contiguous((start, end) in straight_pair(), reversed in any::<bool>()) {
            let (start, end) = if reversed { (end, start) } else { (start, end) };
            let run = CellRun::between(start, end).unwrap();

            let dx = start.x().abs_diff(end.x());
            let dy = start.y().abs_diff(end.y());
            prop_assert_eq!(run.len(), dx.max(dy) + 1);

            let size = GridSize::new(30, 30).unwrap();
            for pair in run.cells().windows(2) {
                prop_assert!(size.is_adjacent(pair[0], pair[1], Adjacency::WithDiagonals));
                prop_assert_ne!(pair[0], pair[1]);
            }
            prop_assert!(run.contains(start));
            prop_assert!(run.contains(end));
        }

        #[test]
        fn prop_run_does_not_depend_on_drag_direction((start, end) in straight_pair()) {
            prop_assert_eq!(CellRun::between(start, end), CellRun::between(end, start));
        }
    }
}
