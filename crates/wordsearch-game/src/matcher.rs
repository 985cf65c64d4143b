//! Spelling cell runs and looking them up in a puzzle's word list.

use wordsearch_core::CellMap;

use crate::CellRun;

/// Which way a run spells its matched word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Orientation {
    /// The run, read in order, spells the word.
    Forward,
    /// The run, read backwards, spells the word.
    Reversed,
}

/// A successful lookup in a [`WordList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordMatch {
    /// Position of the matched word in the word list.
    pub word_index: usize,
    /// How the run spells the word.
    pub orientation: Orientation,
}

/// Concatenates the letters under `run`, in run order.
///
/// Returns `None` if any cell of the run lies outside `letters`.
///
/// # Examples
///
/// ```
/// use wordsearch_core::CellPos;
/// use wordsearch_game::{CellRun, Puzzle, matcher};
///
/// let puzzle = Puzzle::from_rows("Pets", ["CAT"], ["CAT"]).unwrap();
/// let run = CellRun::between(CellPos::new(2, 0), CellPos::new(0, 0)).unwrap();
/// assert_eq!(matcher::build_string(puzzle.letters(), &run).as_deref(), Some("CAT"));
/// ```
#[must_use]
pub fn build_string(letters: &CellMap<char>, run: &CellRun) -> Option<String> {
    run.into_iter().map(|&pos| letters.get(pos).copied()).collect()
}

/// The words of a puzzle together with which of them have been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    found: Vec<bool>,
    found_count: usize,
}

impl WordList {
    /// Creates a list in which no word has been found yet.
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let found = vec![false; words.len()];
        Self {
            words,
            found,
            found_count: 0,
        }
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns how many words have been found.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found_count
    }

    /// Returns `true` once every word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found_count == self.words.len()
    }

    /// Returns the word at `index`.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Returns `true` if the word at `index` has been found.
    #[must_use]
    pub fn is_found(&self, index: usize) -> bool {
        self.found.get(index).copied().unwrap_or(false)
    }

    /// Returns every word with its found flag, in list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.found.iter().copied())
    }

    /// Looks up an unfound word spelled by `text`, forwards or backwards.
    ///
    /// The forward reading is tried against the whole list before the
    /// reversed one. Words already found never match, so the same text can
    /// match a duplicate entry later on.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_game::{WordList, matcher::Orientation};
    ///
    /// let words = WordList::new(["CAT", "DOG"]);
    /// let found = words.find("GOD").unwrap();
    /// assert_eq!(found.word_index, 1);
    /// assert_eq!(found.orientation, Orientation::Reversed);
    /// assert!(words.find("COW").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, text: &str) -> Option<WordMatch> {
        let reversed: String = text.chars().rev().collect();
        [
            (text, Orientation::Forward),
            (reversed.as_str(), Orientation::Reversed),
        ]
        .into_iter()
        .find_map(|(candidate, orientation)| {
            self.unfound_index_of(candidate).map(|word_index| WordMatch {
                word_index,
                orientation,
            })
        })
    }

    fn unfound_index_of(&self, candidate: &str) -> Option<usize> {
        self.words
            .iter()
            .zip(&self.found)
            .position(|(word, &found)| !found && word == candidate)
    }

    /// Marks the word at `index` as found.
    ///
    /// Returns `false` if it was already found or `index` is out of range.
    pub fn mark_found(&mut self, index: usize) -> bool {
        match self.found.get_mut(index) {
            Some(found) if !*found => {
                *found = true;
                self.found_count += 1;
                true
            }
            _ => false,
        }
    }
}
