//! Core geometry and addressing types for word-search grids.
//!
//! This crate provides the small, pure building blocks shared by the game and
//! application crates. Nothing here owns game state; every type is either an
//! immutable value or a plain container.
//!
//! # Overview
//!
//! 1. **Vector math** - [`point`]: 2D points in screen (y-down) coordinates,
//!    with the slope, angle, and line-intersection queries used to snap a
//!    pointer drag onto a grid direction.
//! 2. **Rectangles** - [`rect`]: axis-aligned rectangles with the strict
//!    hit-test rule used for cells and controls.
//! 3. **Cell addressing** - [`position`]: [`GridSize`], [`CellPos`] and the
//!    checked [`CellIndex`] type. An index can only be obtained from a
//!    [`GridSize`], so out-of-range indices are never accepted silently.
//! 4. **Containers** - [`cell_map`]: [`CellMap`], a row-major per-cell store.
//! 5. **Layout** - [`layout`]: [`GridLayout`] maps a rectangle and a grid size
//!    onto pixel positions and resolves pixels back to cells.
//!
//! # Examples
//!
//! ```
//! use wordsearch_core::{CellPos, GridLayout, GridSize, Point, Rect};
//!
//! let size = GridSize::new(3, 3).unwrap();
//! let layout = GridLayout::new(Rect::new(0.0, 0.0, 30.0, 30.0), size, 0.0);
//!
//! // The centre of the middle cell resolves back to that cell.
//! let center = layout.cell_center(CellPos::new(1, 1));
//! assert_eq!(center, Point::new(15.0, 15.0));
//! assert_eq!(layout.cell_at(center), Some(CellPos::new(1, 1)));
//! ```

pub mod cell_map;
pub mod layout;
pub mod point;
pub mod position;
pub mod rect;

pub use self::{
    cell_map::{CellCountMismatch, CellMap},
    layout::{CellOrigins, GridLayout},
    point::Point,
    position::{Adjacency, CellIndex, CellIndexError, CellPos, GridSize, GridSizeError, Positions},
    rect::Rect,
};
