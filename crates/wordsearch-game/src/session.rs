use std::fmt;

use wordsearch_core::{CellMap, CellPos, GridLayout, Point, Rect};

use crate::{
    CellAppearance, CellMarks, CellRun, DragSettings, DragState, Puzzle, Selection, WordList,
    matcher::{self, Orientation},
};

/// Emitted when a drag spells a word that had not been found yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFound {
    /// Position of the word in the puzzle's word list.
    pub word_index: usize,
    /// The word, as listed.
    pub word: String,
    /// Whether the run spelled the word forwards or backwards.
    pub orientation: Orientation,
    /// The cells now marked as found.
    pub run: CellRun,
    /// `true` if this was the last unfound word.
    pub solved: bool,
}

/// Receives session events as they happen.
///
/// Both methods default to doing nothing, so a listener only implements what
/// it cares about.
pub trait SessionListener {
    /// Called for every newly found word.
    fn word_found(&mut self, _found: &WordFound) {}

    /// Called once, right after the last word is found.
    fn puzzle_solved(&mut self, _puzzle: &Puzzle) {}
}

/// One puzzle being played.
///
/// A session owns the puzzle, the pixel layout of its grid, the drag state and
/// the per-cell marks. Callers forward pointer input through
/// [`on_press`](Self::on_press), [`on_move`](Self::on_move) and
/// [`on_release`](Self::on_release), and read highlight and found state back
/// for drawing.
pub struct Session {
    puzzle: Puzzle,
    layout: GridLayout,
    selection: Selection,
    marks: CellMap<CellMarks>,
    words: WordList,
    listeners: Vec<Box<dyn SessionListener>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("puzzle", &self.puzzle.title())
            .field("selection", &self.selection)
            .field("words", &self.words)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Starts a session, laying the puzzle's grid out inside `bounds` with
    /// `gap` pixels around every cell.
    #[must_use]
    pub fn new(puzzle: Puzzle, bounds: Rect, gap: f64, settings: DragSettings) -> Self {
        let size = puzzle.size();
        log::debug!("starting session for {:?} ({size})", puzzle.title());
        Self {
            layout: GridLayout::new(bounds, size, gap),
            selection: Selection::new(settings),
            marks: CellMap::new(size, CellMarks::empty()),
            words: WordList::new(puzzle.words().iter().cloned()),
            listeners: Vec::new(),
            puzzle,
        }
    }

    /// Registers a listener. Listeners are notified in registration order.
    pub fn add_listener(&mut self, listener: Box<dyn SessionListener>) {
        self.listeners.push(listener);
    }

    /// Returns the puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the grid layout.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Returns the current drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.selection.state()
    }

    /// Returns the run currently highlighted by a drag.
    #[must_use]
    pub fn highlighted(&self) -> Option<&CellRun> {
        self.selection.highlighted()
    }

    /// Returns the marks of the cell at `pos`.
    #[must_use]
    pub fn marks(&self, pos: CellPos) -> Option<CellMarks> {
        self.marks.get(pos).copied()
    }

    /// Returns how the cell at `pos` should be drawn.
    #[must_use]
    pub fn appearance(&self, pos: CellPos) -> Option<CellAppearance> {
        self.marks(pos).map(CellMarks::appearance)
    }

    /// Returns the marks of every cell.
    #[must_use]
    pub fn cell_marks(&self) -> &CellMap<CellMarks> {
        &self.marks
    }

    /// Returns the word list with its found flags.
    #[must_use]
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Returns every word with its found flag, in list order.
    pub fn word_states(&self) -> impl Iterator<Item = (&str, bool)> {
        self.words.iter()
    }

    /// Returns how many words have been found.
    #[must_use]
    pub fn found_words(&self) -> usize {
        self.words.found_count()
    }

    /// Returns `true` once every word has been found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.words.is_complete()
    }

    /// Handles a pointer press.
    ///
    /// Returns the cell the drag started on. Presses outside every cell,
    /// presses during a drag, and presses after the puzzle is solved are
    /// ignored.
    pub fn on_press(&mut self, point: Point) -> Option<CellPos> {
        if self.is_solved() {
            log::debug!("ignoring press: puzzle already solved");
            return None;
        }
        self.selection.press(&self.layout, point)
    }

    /// Handles pointer movement. Returns `true` if the highlight was updated.
    pub fn on_move(&mut self, point: Point) -> bool {
        self.selection.drag_to(&self.layout, point, &mut self.marks)
    }

    /// Handles a pointer release, matching the dragged run against the word
    /// list.
    ///
    /// Returns the event for a newly found word. Listeners are notified before
    /// this returns; [`SessionListener::puzzle_solved`] fires after the
    /// [`SessionListener::word_found`] of the last word.
    pub fn on_release(&mut self) -> Option<WordFound> {
        let run = self.selection.release(&mut self.marks)?;
        let text = matcher::build_string(self.puzzle.letters(), &run)?;
        let Some(word_match) = self.words.find(&text) else {
            log::debug!("{text:?} does not spell an unfound word");
            return None;
        };

        self.words.mark_found(word_match.word_index);
        for &pos in &run {
            if let Some(cell) = self.marks.get_mut(pos) {
                cell.insert(CellMarks::FOUND);
            }
        }

        let word = self
            .words
            .word(word_match.word_index)
            .unwrap_or_default()
            .to_owned();
        let solved = self.words.is_complete();
        log::info!(
            "found {word:?} ({}/{})",
            self.words.found_count(),
            self.words.len()
        );
        let found = WordFound {
            word_index: word_match.word_index,
            word,
            orientation: word_match.orientation,
            run,
            solved,
        };

        for listener in &mut self.listeners {
            listener.word_found(&found);
        }
        if solved {
            log::info!("puzzle {:?} solved", self.puzzle.title());
            for listener in &mut self.listeners {
                listener.puzzle_solved(&self.puzzle);
            }
        }
        Some(found)
    }
}
