use std::io;

/// Errors detected while validating puzzle data.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The record could not be decoded into puzzle fields.
    #[display("malformed puzzle record: {message}")]
    Malformed {
        /// Decoder message.
        message: String,
    },
    /// The letter grid has no rows or no columns.
    #[display("puzzle grid is empty")]
    EmptyGrid,
    /// A row's cell count differs from the first row's.
    #[display("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row number.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of this row.
        actual: usize,
    },
    /// A cell is not exactly one non-whitespace character.
    #[display("cell ({col}, {row}) must be a single letter, got {text:?}")]
    InvalidCell {
        /// Zero-based row number.
        row: usize,
        /// Zero-based column number.
        col: usize,
        /// The offending cell text.
        text: String,
    },
    /// The word list is empty.
    #[display("puzzle has no words to find")]
    NoWords,
    /// A word is empty or contains whitespace.
    #[display("word {index} is not a valid word: {word:?}")]
    InvalidWord {
        /// Zero-based position in the word list.
        index: usize,
        /// The offending word.
        word: String,
    },
}

/// Errors that prevent a puzzle catalog from being read at all.
///
/// Problems with individual puzzle records are not catalog errors; see
/// [`PuzzleCatalog::rejected`](crate::PuzzleCatalog::rejected).
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CatalogError {
    /// The catalog could not be read.
    #[display("failed to read puzzle catalog: {_0}")]
    Io(io::Error),
    /// The catalog is not a JSON array.
    #[display("puzzle catalog is not a JSON array of puzzles: {_0}")]
    Json(serde_json::Error),
}
