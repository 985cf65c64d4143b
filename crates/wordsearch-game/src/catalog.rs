use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{CatalogError, Puzzle, PuzzleData, PuzzleError};

/// A puzzle record that failed validation while loading a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPuzzle {
    /// Zero-based position of the record in the catalog.
    pub index: usize,
    /// The record's title, if it could be read.
    pub title: Option<String>,
    /// Why the record was rejected.
    pub error: PuzzleError,
}

/// The set of puzzles available to play, loaded from a JSON array of
/// [`PuzzleData`] records.
///
/// A malformed record is fatal only for that puzzle: it is skipped, logged,
/// and reported through [`rejected`](Self::rejected), while every valid record
/// is still loaded.
///
/// # Example
///
/// ```
/// use wordsearch_game::PuzzleCatalog;
///
/// let json = r#"[
///     {"title": "Pets", "grid": [["C", "A", "T"]], "words": ["CAT"]},
///     {"title": "Broken", "grid": [["C", "A"], ["T"]], "words": ["CAT"]}
/// ]"#;
/// let catalog = PuzzleCatalog::from_json_str(json).unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.rejected().len(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PuzzleCatalog {
    puzzles: Vec<Puzzle>,
    rejected: Vec<RejectedPuzzle>,
}

impl PuzzleCatalog {
    /// Creates a catalog from already validated puzzles.
    #[must_use]
    pub fn new(puzzles: Vec<Puzzle>) -> Self {
        Self {
            puzzles,
            rejected: Vec::new(),
        }
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Json`] if it is not a JSON array.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        log::debug!("loading puzzle catalog from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a catalog from a reader producing JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the input is not a JSON array.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let records: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Loads a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the input is not a JSON array.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<serde_json::Value>) -> Self {
        let mut catalog = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            let title = record
                .get("title")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned);
            let result = serde_json::from_value::<PuzzleData>(record)
                .map_err(|err| PuzzleError::Malformed {
                    message: err.to_string(),
                })
                .and_then(Puzzle::try_from);
            match result {
                Ok(puzzle) => catalog.puzzles.push(puzzle),
                Err(error) => {
                    log::warn!(
                        "skipping puzzle #{index} ({}): {error}",
                        title.as_deref().unwrap_or("untitled")
                    );
                    catalog.rejected.push(RejectedPuzzle {
                        index,
                        title,
                        error,
                    });
                }
            }
        }
        log::info!(
            "loaded {} puzzles ({} rejected)",
            catalog.puzzles.len(),
            catalog.rejected.len()
        );
        catalog
    }

    /// Returns the loaded puzzles in catalog order.
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Returns the puzzle at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    /// Returns the number of loaded puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns `true` if no puzzle was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Returns the titles of the loaded puzzles.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.puzzles.iter().map(Puzzle::title)
    }

    /// Returns the records that failed validation.
    #[must_use]
    pub fn rejected(&self) -> &[RejectedPuzzle] {
        &self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"title": "Animals", "grid": [["C", "A", "T"], ["O", "X", "X"], ["W", "X", "X"]], "words": ["CAT", "COW"]},
        {"title": "Ragged", "grid": [["A", "B"], ["C"]], "words": ["AB"]},
        {"title": "Missing words", "grid": [["A"]]},
        {"title": "Colors", "grid": [["R", "E", "D"]], "words": ["RED"]}
    ]"#;

    #[test]
    fn test_malformed_records_do_not_affect_others() {
        let catalog = PuzzleCatalog::from_json_str(CATALOG).unwrap();
        assert_eq!(catalog.titles().collect::<Vec<_>>(), ["Animals", "Colors"]);

        let rejected = catalog.rejected();
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].index, 1);
        assert_eq!(rejected[0].title.as_deref(), Some("Ragged"));
        assert!(matches!(rejected[0].error, PuzzleError::RaggedRow { .. }));
        assert_eq!(rejected[1].index, 2);
        assert!(matches!(rejected[1].error, PuzzleError::Malformed { .. }));
    }

    #[test]
    fn test_non_array_document_is_an_error() {
        assert!(matches!(
            PuzzleCatalog::from_json_str(r#"{"title": "x"}"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_from_reader() {
        let catalog = PuzzleCatalog::from_reader(CATALOG.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(Puzzle::title), Some("Colors"));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            PuzzleCatalog::from_path("/nonexistent/puzzles.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
