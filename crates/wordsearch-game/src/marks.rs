bitflags::bitflags! {
    /// Per-cell presentation state.
    ///
    /// A cell can be both highlighted by the current drag and part of an
    /// already found word; clearing one flag never touches the other.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellMarks: u8 {
        /// Part of the run the pointer is currently dragging over.
        const HIGHLIGHTED = 0b0000_0001;
        /// Part of at least one found word.
        const FOUND = 0b0000_0010;
    }
}

impl CellMarks {
    /// Resolves the marks to a single appearance.
    #[must_use]
    pub fn appearance(self) -> CellAppearance {
        CellAppearance::from(self)
    }
}

/// How a cell should be drawn, derived from its [`CellMarks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellAppearance {
    /// Under the current drag.
    Highlighted,
    /// Part of a found word and not under the current drag.
    Found,
    /// Neither.
    Default,
}

impl From<CellMarks> for CellAppearance {
    fn from(marks: CellMarks) -> Self {
        if marks.contains(CellMarks::HIGHLIGHTED) {
            Self::Highlighted
        } else if marks.contains(CellMarks::FOUND) {
            Self::Found
        } else {
            Self::Default
        }
    }
}
