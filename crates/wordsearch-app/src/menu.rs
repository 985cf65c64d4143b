use wordsearch_core::{GridLayout, GridSize, GridSizeError};

use crate::{
    controls::{Button, Control, ControlEvent, ControlList, PointerInput, Slider, SliderError},
    settings::Settings,
};

/// Largest dead zone, in pixels, the menu slider can select.
pub const MAX_DEAD_ZONE: f64 = 20.0;

const THUMB_WIDTH: f64 = 12.0;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MenuError {
    #[display("the menu needs at least one puzzle: {_0}")]
    NoPuzzles(GridSizeError),
    #[display("invalid dead zone: {_0}")]
    DeadZone(SliderError),
}

/// What the user asked for on the puzzle select screen.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum MenuAction {
    /// Play the puzzle with this catalog index.
    Start(usize),
    /// The dead-zone slider moved to this many pixels.
    SetDeadZone(f64),
}

/// The puzzle select screen: one button per puzzle, stacked in a single
/// column, and a slider below them for the drag dead zone.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleMenu {
    layout: GridLayout,
    controls: ControlList,
    dead_zone: usize,
}

impl PuzzleMenu {
    /// # Errors
    ///
    /// Returns [`MenuError::NoPuzzles`] if `titles` is empty and
    /// [`MenuError::DeadZone`] if the configured dead zone is outside
    /// `0..=MAX_DEAD_ZONE`.
    pub fn new<'a>(
        titles: impl IntoIterator<Item = &'a str>,
        settings: &Settings,
    ) -> Result<Self, MenuError> {
        let titles: Vec<&str> = titles.into_iter().collect();
        let size = GridSize::new(1, titles.len())?;
        let layout = GridLayout::new(settings.menu.rect, size, settings.menu.gap);

        // Buttons come first so a button's control index is its puzzle index.
        let mut controls = ControlList::new();
        for (rect, title) in layout.cell_rects().zip(titles) {
            controls.push(Button::new(rect, title));
        }
        let slider = Slider::new(
            settings.dead_zone_track,
            0.0..=MAX_DEAD_ZONE,
            settings.drag.dead_zone,
            THUMB_WIDTH,
        )?;
        let dead_zone = controls.push(slider);
        Ok(Self {
            layout,
            controls,
            dead_zone,
        })
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.controls.iter().filter_map(|control| match control {
            Control::Button(button) => Some(button),
            Control::Slider(_) => None,
        })
    }

    #[must_use]
    pub fn dead_zone_slider(&self) -> Option<&Slider> {
        match self.controls.get(self.dead_zone) {
            Some(Control::Slider(slider)) => Some(slider),
            _ => None,
        }
    }

    /// Moves the dead-zone slider without raising an action.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::OutOfRange`] if `dead_zone` is outside
    /// `0..=MAX_DEAD_ZONE`.
    pub fn set_dead_zone(&mut self, dead_zone: f64) -> Result<(), SliderError> {
        match self.controls.get_mut(self.dead_zone) {
            Some(Control::Slider(slider)) => slider.set_value(dead_zone),
            _ => Ok(()),
        }
    }

    /// Feeds pointer input to the controls. A released button starts its
    /// puzzle; a moved slider reports the new dead zone.
    pub fn process(&mut self, input: PointerInput) -> Option<MenuAction> {
        let dead_zone = self.dead_zone;
        self.controls
            .process(input)
            .into_iter()
            .find_map(|(index, event)| match event {
                ControlEvent::Released if index != dead_zone => Some(MenuAction::Start(index)),
                ControlEvent::ValueChanged(value) if index == dead_zone => {
                    Some(MenuAction::SetDeadZone(value))
                }
                _ => None,
            })
    }
}
