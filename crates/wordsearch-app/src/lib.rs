//! Shared library module for the Wordsearch app crate.
//!
//! Holds the headless application model: pointer-driven controls, the puzzle
//! select menu, and the screen state machine fed by [`input::InputEvent`]s.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod controls;
pub mod input;
pub mod menu;
pub mod settings;
pub mod state;
