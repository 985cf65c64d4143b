use wordsearch_core::Rect;
use wordsearch_game::DragSettings;

/// Where a grid of cells is placed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    pub rect: Rect,
    pub gap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub board: LayoutSettings,
    pub menu: LayoutSettings,
    /// Track of the dead-zone slider on the puzzle select screen.
    pub dead_zone_track: Rect,
    pub drag: DragSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: LayoutSettings {
                rect: Rect::new(100.0, 100.0, 500.0, 500.0),
                gap: 2.0,
            },
            menu: LayoutSettings {
                rect: Rect::new(150.0, 100.0, 500.0, 500.0),
                gap: 10.0,
            },
            dead_zone_track: Rect::new(150.0, 620.0, 500.0, 20.0),
            drag: DragSettings::default(),
        }
    }
}
