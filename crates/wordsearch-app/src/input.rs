use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};
use wordsearch_core::Point;

use crate::controls::PointerInput;

/// A recorded user input, as stored in an events file.
///
/// ```json
/// [
///     {"type": "press", "x": 150.0, "y": 180.0},
///     {"type": "move", "x": 400.0, "y": 180.0},
///     {"type": "release", "x": 400.0, "y": 180.0},
///     {"type": "escape"}
/// ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release { x: f64, y: f64 },
    Escape,
    Quit,
}

impl InputEvent {
    #[must_use]
    pub fn pointer(self) -> Option<PointerInput> {
        match self {
            Self::Press { x, y } => Some(PointerInput::Press(Point::new(x, y))),
            Self::Move { x, y } => Some(PointerInput::Move(Point::new(x, y))),
            Self::Release { x, y } => Some(PointerInput::Release(Point::new(x, y))),
            Self::Escape | Self::Quit => None,
        }
    }
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum AppFlow {
    Continue,
    Exit,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum EventsError {
    #[display("failed to read events: {_0}")]
    Io(std::io::Error),
    #[display("events are not a JSON array of input events: {_0}")]
    Json(serde_json::Error),
}

pub fn read_events(reader: impl Read) -> Result<Vec<InputEvent>, EventsError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<InputEvent>, EventsError> {
    let file = File::open(path)?;
    read_events(BufReader::new(file))
}
