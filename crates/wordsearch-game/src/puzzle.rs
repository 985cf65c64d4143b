use serde::{Deserialize, Serialize};
use wordsearch_core::{CellMap, CellPos, GridSize};

use crate::PuzzleError;

/// An immutable word-search puzzle: a titled letter grid and the words hidden
/// in it.
///
/// Letters and words are stored upper-cased. A puzzle can only be built
/// through validation ([`Puzzle::new`], [`Puzzle::from_rows`], or
/// deserialization via [`PuzzleData`]), so every instance has a non-empty
/// rectangular grid of single letters and at least one non-empty word.
///
/// # Example
///
/// ```
/// use wordsearch_core::CellPos;
/// use wordsearch_game::Puzzle;
///
/// let puzzle = Puzzle::from_rows("Pets", ["c a t", "d o g"], ["cat", "dog"]).unwrap();
/// assert_eq!(puzzle.size().cols(), 3);
/// assert_eq!(puzzle.letter(CellPos::new(2, 1)), Some('G'));
/// assert_eq!(puzzle.words(), ["CAT", "DOG"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PuzzleData", into = "PuzzleData")]
pub struct Puzzle {
    title: String,
    letters: CellMap<char>,
    words: Vec<String>,
}

/// The interchange form of a [`Puzzle`].
///
/// `grid` holds one entry per row, each a list of single-letter cells.
///
/// ```json
/// { "title": "Pets", "grid": [["C", "A", "T"], ["D", "O", "G"]], "words": ["CAT", "DOG"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleData {
    /// Puzzle title.
    pub title: String,
    /// Letter grid, row by row.
    pub grid: Vec<Vec<String>>,
    /// Words hidden in the grid.
    pub words: Vec<String>,
}

impl Puzzle {
    /// Creates a puzzle from a grid of cell strings and a word list.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the grid is empty or ragged, a cell is not
    /// exactly one non-whitespace character, the word list is empty, or a word
    /// is empty or contains whitespace.
    pub fn new(
        title: impl Into<String>,
        grid: &[Vec<String>],
        words: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, PuzzleError> {
        let cols = grid.first().map_or(0, Vec::len);
        let size = GridSize::new(cols, grid.len()).map_err(|_| PuzzleError::EmptyGrid)?;

        let mut letters = CellMap::new(size, ' ');
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != cols {
                return Err(PuzzleError::RaggedRow {
                    row,
                    expected: cols,
                    actual: cells.len(),
                });
            }
            for (col, text) in cells.iter().enumerate() {
                let letter = single_letter(text).ok_or_else(|| PuzzleError::InvalidCell {
                    row,
                    col,
                    text: text.clone(),
                })?;
                letters[CellPos::new(col, row)] = uppercase_letter(letter);
            }
        }

        let words = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| {
                let word = word.as_ref();
                if word.is_empty() || word.chars().any(char::is_whitespace) {
                    return Err(PuzzleError::InvalidWord {
                        index,
                        word: word.to_owned(),
                    });
                }
                Ok(word.to_uppercase())
            })
            .collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(PuzzleError::NoWords);
        }

        Ok(Self {
            title: title.into(),
            letters,
            words,
        })
    }

    /// Creates a puzzle from row strings in which every non-whitespace
    /// character is one cell.
    ///
    /// `"CAT"` and `"C A T"` both describe a three-cell row.
    ///
    /// # Errors
    ///
    /// See [`Puzzle::new`].
    pub fn from_rows(
        title: impl Into<String>,
        rows: impl IntoIterator<Item = impl AsRef<str>>,
        words: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, PuzzleError> {
        let grid: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(String::from)
                    .collect()
            })
            .collect();
        Self::new(title, &grid, words)
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.letters.size()
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn letters(&self) -> &CellMap<char> {
        &self.letters
    }

    /// Returns the letter at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn letter(&self, pos: CellPos) -> Option<char> {
        self.letters.get(pos).copied()
    }

    /// Returns the words hidden in the grid.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

fn uppercase_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => letter,
    }
}

fn single_letter(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Some(c),
        _ => None,
    }
}

impl TryFrom<PuzzleData> for Puzzle {
    type Error = PuzzleError;

    fn try_from(data: PuzzleData) -> Result<Self, Self::Error> {
        let PuzzleData { title, grid, words } = data;
        Self::new(title, &grid, words)
    }
}

impl From<Puzzle> for PuzzleData {
    fn from(puzzle: Puzzle) -> Self {
        let size = puzzle.size();
        let grid = (0..size.rows())
            .map(|y| puzzle.letters.row(y).map(char::to_string).collect())
            .collect();
        Self {
            title: puzzle.title,
            grid,
            words: puzzle.words,
        }
    }
}
