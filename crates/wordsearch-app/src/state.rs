use std::mem;

use wordsearch_game::{PuzzleCatalog, Session};

use crate::{
    controls::{PointerInput, SliderError},
    input::{AppFlow, InputEvent},
    menu::{MenuAction, MenuError, PuzzleMenu},
    settings::Settings,
};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AppError {
    #[display("the puzzle catalog has no playable puzzles")]
    EmptyCatalog,
    #[display("there is no puzzle #{index}; the catalog has {len}")]
    UnknownPuzzle { index: usize, len: usize },
    #[display("invalid dead zone: {_0}")]
    DeadZone(SliderError),
}

/// What happened to one puzzle that was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub title: String,
    pub found: usize,
    pub total: usize,
    pub solved: bool,
}

impl PlayRecord {
    fn from_session(session: &Session) -> Self {
        Self {
            title: session.puzzle().title().to_owned(),
            found: session.found_words(),
            total: session.word_list().len(),
            solved: session.is_solved(),
        }
    }
}

#[derive(Debug, derive_more::IsVariant)]
pub enum Screen {
    PuzzleSelect(PuzzleMenu),
    Playing {
        session: Box<Session>,
        /// Set once the puzzle is solved; the next release leaves the puzzle.
        completed: bool,
    },
}

// AppState owns everything the event loop mutates. Screens are replaced
// wholesale on transitions.
#[derive(Debug)]
pub struct AppState {
    catalog: PuzzleCatalog,
    settings: Settings,
    menu: PuzzleMenu,
    screen: Screen,
    records: Vec<PlayRecord>,
}

impl AppState {
    pub fn new(catalog: PuzzleCatalog, settings: Settings) -> Result<Self, AppError> {
        let menu = PuzzleMenu::new(catalog.titles(), &settings).map_err(|err| match err {
            MenuError::NoPuzzles(_) => AppError::EmptyCatalog,
            MenuError::DeadZone(err) => AppError::DeadZone(err),
        })?;
        Ok(Self {
            catalog,
            settings,
            screen: Screen::PuzzleSelect(menu.clone()),
            menu,
            records: Vec::new(),
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the session being played, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Playing { session, .. } => Some(session.as_ref()),
            Screen::PuzzleSelect(_) => None,
        }
    }

    /// Returns the puzzles played and left so far, oldest first.
    #[must_use]
    pub fn records(&self) -> &[PlayRecord] {
        &self.records
    }

    pub fn start_puzzle(&mut self, index: usize) -> Result<(), AppError> {
        let puzzle = self
            .catalog
            .get(index)
            .cloned()
            .ok_or(AppError::UnknownPuzzle {
                index,
                len: self.catalog.len(),
            })?;
        log::info!("starting puzzle {:?}", puzzle.title());
        let board = self.settings.board;
        let session = Session::new(puzzle, board.rect, board.gap, self.settings.drag);
        self.replace_screen(Screen::Playing {
            session: Box::new(session),
            completed: false,
        });
        Ok(())
    }

    pub fn return_to_menu(&mut self) {
        if self.screen.is_puzzle_select() {
            return;
        }
        log::info!("returning to puzzle select");
        self.replace_screen(Screen::PuzzleSelect(self.menu.clone()));
    }

    /// Changes the dead zone used by puzzles started from now on.
    pub fn set_dead_zone(&mut self, dead_zone: f64) -> Result<(), AppError> {
        self.menu
            .set_dead_zone(dead_zone)
            .map_err(AppError::DeadZone)?;
        if let Screen::PuzzleSelect(menu) = &mut self.screen {
            menu.set_dead_zone(dead_zone).map_err(AppError::DeadZone)?;
        }
        self.settings.drag.dead_zone = dead_zone;
        log::debug!("dead zone set to {dead_zone}px");
        Ok(())
    }

    fn replace_screen(&mut self, screen: Screen) {
        if let Screen::Playing { session, .. } = mem::replace(&mut self.screen, screen) {
            self.records.push(PlayRecord::from_session(&session));
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> AppFlow {
        match event {
            InputEvent::Quit => return AppFlow::Exit,
            InputEvent::Escape => self.return_to_menu(),
            InputEvent::Press { .. } | InputEvent::Move { .. } | InputEvent::Release { .. } => {
                if let Some(pointer) = event.pointer() {
                    self.handle_pointer(pointer);
                }
            }
        }
        AppFlow::Continue
    }

    fn handle_pointer(&mut self, pointer: PointerInput) {
        match &mut self.screen {
            Screen::PuzzleSelect(menu) => {
                let result = match menu.process(pointer) {
                    Some(MenuAction::Start(index)) => self.start_puzzle(index),
                    Some(MenuAction::SetDeadZone(dead_zone)) => self.set_dead_zone(dead_zone),
                    None => Ok(()),
                };
                if let Err(err) = result {
                    log::warn!("{err}");
                }
            }
            Screen::Playing { completed: true, .. } => {
                if pointer.is_release() {
                    self.return_to_menu();
                }
            }
            Screen::Playing { session, completed } => match pointer {
                PointerInput::Press(point) => {
                    session.on_press(point);
                }
                PointerInput::Move(point) => {
                    session.on_move(point);
                }
                PointerInput::Release(_) => {
                    if session.on_release().is_some_and(|found| found.solved) {
                        *completed = true;
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use wordsearch_core::{CellPos, Point};
    use wordsearch_game::Puzzle;

    use super::*;
    use crate::controls::Slider;

    fn catalog() -> PuzzleCatalog {
        PuzzleCatalog::new(vec![
            Puzzle::from_rows("Pets", ["CAT", "XXX", "XXX"], ["CAT"]).unwrap(),
            Puzzle::from_rows("Farm", ["COW", "XXX", "XXX"], ["COW", "OX"]).unwrap(),
        ])
    }

    fn app() -> AppState {
        AppState::new(catalog(), Settings::default()).unwrap()
    }

    fn click(app: &mut AppState, point: Point) {
        let (x, y) = (point.x, point.y);
        app.handle(InputEvent::Press { x, y });
        app.handle(InputEvent::Release { x, y });
    }

    fn drag(app: &mut AppState, from: CellPos, to: CellPos) {
        let layout = app.session().unwrap().layout();
        let (start, end) = (layout.cell_center(from), layout.cell_center(to));
        app.handle(InputEvent::Press {
            x: start.x,
            y: start.y,
        });
        app.handle(InputEvent::Move { x: end.x, y: end.y });
        app.handle(InputEvent::Release { x: end.x, y: end.y });
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(
            AppState::new(PuzzleCatalog::default(), Settings::default()),
            Err(AppError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_menu_release_starts_puzzle() {
        let mut app = app();
        assert!(app.screen().is_puzzle_select());

        // Second of two stacked buttons in the default menu rectangle.
        click(&mut app, Point::new(400.0, 500.0));
        assert_eq!(app.session().map(|s| s.puzzle().title()), Some("Farm"));
    }

    #[test]
    fn test_escape_returns_to_menu_and_records_progress() {
        let mut app = app();
        app.start_puzzle(1).unwrap();
        drag(&mut app, CellPos::new(0, 0), CellPos::new(2, 0));

        assert_eq!(app.handle(InputEvent::Escape), AppFlow::Continue);
        assert!(app.screen().is_puzzle_select());
        assert_eq!(
            app.records(),
            [PlayRecord {
                title: "Farm".to_owned(),
                found: 1,
                total: 2,
                solved: false,
            }]
        );
    }

    #[test]
    fn test_release_after_solving_returns_to_menu() {
        let mut app = app();
        app.start_puzzle(0).unwrap();
        drag(&mut app, CellPos::new(2, 0), CellPos::new(0, 0));
        assert!(matches!(
            app.screen(),
            Screen::Playing {
                completed: true,
                ..
            }
        ));

        click(&mut app, Point::new(0.0, 0.0));
        assert!(app.screen().is_puzzle_select());
        assert!(app.records()[0].solved);
    }

    #[test]
    fn test_menu_slider_sets_dead_zone_for_next_puzzle() {
        let mut app = app();
        // Default 0.5 px dead zone on a 500 px track over 0..=20.
        let thumb_x = 150.0 + 500.0 * 0.5 / 20.0;
        app.handle(InputEvent::Press { x: thumb_x, y: 630.0 });
        app.handle(InputEvent::Move { x: 400.0, y: 630.0 });
        app.handle(InputEvent::Release { x: 400.0, y: 630.0 });
        assert!((app.settings().drag.dead_zone - 10.0).abs() < 1e-9);

        app.start_puzzle(0).unwrap();
        app.return_to_menu();
        let Screen::PuzzleSelect(menu) = app.screen() else {
            panic!("expected the puzzle menu");
        };
        let value = menu.dead_zone_slider().map(Slider::value);
        assert!(value.is_some_and(|v| (v - 10.0).abs() < 1e-9));
    }

    #[test]
    fn test_out_of_range_dead_zone_is_rejected() {
        let mut settings = Settings::default();
        settings.drag.dead_zone = 50.0;
        assert!(matches!(
            AppState::new(catalog(), settings),
            Err(AppError::DeadZone(_))
        ));

        let mut app = app();
        assert!(app.set_dead_zone(-1.0).is_err());
        assert!((app.settings().drag.dead_zone - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_puzzle() {
        let mut app = app();
        assert!(matches!(
            app.start_puzzle(7),
            Err(AppError::UnknownPuzzle { index: 7, len: 2 })
        ));
        assert!(app.screen().is_puzzle_select());
    }

    #[test]
    fn test_quit_exits() {
        let mut app = app();
        assert!(app.handle(InputEvent::Quit).is_exit());
    }
}
