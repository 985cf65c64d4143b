//! Word-search game logic.
//!
//! This crate turns pointer drags over a laid-out letter grid into word
//! matches. It is independent of any rendering toolkit: callers feed pixel
//! positions in and read highlight/found state and events back out.
//!
//! # Components
//!
//! - [`Puzzle`] and [`PuzzleCatalog`] - immutable puzzle data and JSON loading
//! - [`SnapDirection`] - maps a drag angle onto one of the eight grid directions
//! - [`CellRun`] - the ordered straight line of cells between two endpoints
//! - [`Selection`] - the press/move/release state machine for one drag gesture
//! - [`CellMarks`] - per-cell highlight and found flags
//! - [`WordList`] and the [`matcher`] functions - spelling runs and looking
//!   them up, forwards or reversed
//! - [`Session`] - one puzzle being played, tying all of the above together
//!
//! # Example
//!
//! ```
//! use wordsearch_core::{CellPos, Rect};
//! use wordsearch_game::{DragSettings, Puzzle, Session};
//!
//! let puzzle = Puzzle::from_rows("Pets", ["CAT", "XXX", "XXX"], ["CAT"]).unwrap();
//! let mut session = Session::new(
//!     puzzle,
//!     Rect::new(0.0, 0.0, 300.0, 300.0),
//!     0.0,
//!     DragSettings::default(),
//! );
//!
//! let start = session.layout().cell_center(CellPos::new(0, 0));
//! let end = session.layout().cell_center(CellPos::new(2, 0));
//! session.on_press(start);
//! session.on_move(end);
//! let found = session.on_release().unwrap();
//!
//! assert_eq!(found.word, "CAT");
//! assert!(session.is_solved());
//! ```

pub use self::{
    catalog::*, direction::*, error::*, marks::*, matcher::WordList, puzzle::*, run::*,
    selection::*, session::*,
};

mod catalog;
mod direction;
mod error;
mod marks;
pub mod matcher;
mod puzzle;
mod run;
mod selection;
mod session;
