//! Pointer-driven buttons and sliders.

use std::ops::RangeInclusive;

use wordsearch_core::{Point, Rect};

/// One pointer sample fed to the controls.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum PointerInput {
    Press(Point),
    Move(Point),
    Release(Point),
}

impl PointerInput {
    #[must_use]
    pub fn position(self) -> Point {
        match self {
            Self::Press(p) | Self::Move(p) | Self::Release(p) => p,
        }
    }
}

/// Interaction phase of a button or slider thumb.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ControlPhase {
    #[default]
    Idle,
    Hovered,
    Held,
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum ControlEvent {
    /// The pointer was pressed on the control.
    Pressed,
    /// The pointer was released after pressing the control, wherever it is
    /// now.
    Released,
    /// A slider's value moved.
    ValueChanged(f64),
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SliderError {
    #[display("slider value {value} is outside {start}..={end}")]
    OutOfRange { value: f64, start: f64, end: f64 },
}

// Shared hover/hold bookkeeping for anything with a hit rectangle.
fn track_pointer(phase: &mut ControlPhase, hit: Rect, input: PointerInput) -> Option<ControlEvent> {
    let over = hit.contains_strict(input.position());
    let held = phase.is_held();
    if !over && !held {
        *phase = ControlPhase::Idle;
        return None;
    }
    match input {
        PointerInput::Press(_) => {
            *phase = ControlPhase::Held;
            Some(ControlEvent::Pressed)
        }
        PointerInput::Release(_) if held => {
            *phase = ControlPhase::Idle;
            Some(ControlEvent::Released)
        }
        PointerInput::Move(_) | PointerInput::Release(_) => {
            if !held {
                *phase = ControlPhase::Hovered;
            }
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    rect: Rect,
    label: String,
    active: bool,
    phase: ControlPhase,
}

impl Button {
    #[must_use]
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            active: true,
            phase: ControlPhase::Idle,
        }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn phase(&self) -> ControlPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enables or disables the button. A disabled button drops any hold.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.phase = ControlPhase::Idle;
        }
    }

    pub fn process(&mut self, input: PointerInput) -> Option<ControlEvent> {
        if !self.active {
            return None;
        }
        track_pointer(&mut self.phase, self.rect, input)
    }
}

/// A horizontal slider whose thumb is dragged along `track`.
///
/// The left end of the track maps to the start of `range` and the right end to
/// its end.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    track: Rect,
    range: RangeInclusive<f64>,
    value: f64,
    thumb_width: f64,
    phase: ControlPhase,
}

impl Slider {
    /// # Errors
    ///
    /// Returns [`SliderError::OutOfRange`] if `value` is not within `range`.
    pub fn new(
        track: Rect,
        range: RangeInclusive<f64>,
        value: f64,
        thumb_width: f64,
    ) -> Result<Self, SliderError> {
        let mut slider = Self {
            track,
            range,
            value: 0.0,
            thumb_width,
            phase: ControlPhase::Idle,
        };
        slider.set_value(value)?;
        Ok(slider)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn range(&self) -> &RangeInclusive<f64> {
        &self.range
    }

    #[must_use]
    pub fn phase(&self) -> ControlPhase {
        self.phase
    }

    /// # Errors
    ///
    /// Returns [`SliderError::OutOfRange`] if `value` is not within the range;
    /// the current value is left unchanged.
    pub fn set_value(&mut self, value: f64) -> Result<(), SliderError> {
        if !self.range.contains(&value) {
            return Err(SliderError::OutOfRange {
                value,
                start: *self.range.start(),
                end: *self.range.end(),
            });
        }
        self.value = value;
        Ok(())
    }

    /// Returns the horizontal centre of the thumb.
    #[must_use]
    pub fn thumb_x(&self) -> f64 {
        let (start, end) = (*self.range.start(), *self.range.end());
        let fraction = if end > start {
            (self.value - start) / (end - start)
        } else {
            0.0
        };
        self.track.x + self.track.width * fraction
    }

    #[must_use]
    pub fn thumb_rect(&self) -> Rect {
        Rect::new(
            self.thumb_x() - self.thumb_width / 2.0,
            self.track.y,
            self.thumb_width,
            self.track.height,
        )
    }

    /// While the thumb is held it follows the pointer's x, clamped to the
    /// track. A press that also moves the thumb reports only the value change.
    #[expect(clippy::float_cmp)]
    pub fn process(&mut self, input: PointerInput) -> Option<ControlEvent> {
        let hit = self.thumb_rect();
        let event = track_pointer(&mut self.phase, hit, input);
        if !self.phase.is_held() || self.track.width <= 0.0 {
            return event;
        }

        let x = input.position().x.clamp(self.track.x, self.track.right());
        let fraction = (x - self.track.x) / self.track.width;
        let (start, end) = (*self.range.start(), *self.range.end());
        let value = start + (end - start) * fraction;
        if value.is_nan() || value == self.value {
            return event;
        }
        self.value = value;
        Some(ControlEvent::ValueChanged(value))
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::From, derive_more::IsVariant)]
pub enum Control {
    Button(Button),
    Slider(Slider),
}

impl Control {
    pub fn process(&mut self, input: PointerInput) -> Option<ControlEvent> {
        match self {
            Self::Button(button) => button.process(input),
            Self::Slider(slider) => slider.process(input),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Button(button) => button.phase = ControlPhase::Idle,
            Self::Slider(slider) => slider.phase = ControlPhase::Idle,
        }
    }
}

/// An ordered set of controls that receive the same pointer input.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlList {
    controls: Vec<Control>,
    active: bool,
}

impl Default for ControlList {
    fn default() -> Self {
        Self {
            controls: Vec::new(),
            active: true,
        }
    }
}

impl ControlList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, control: impl Into<Control>) -> usize {
        self.controls.push(control.into());
        self.controls.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Control> {
        self.controls.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enables or disables the whole list. Deactivating drops every hover and
    /// hold.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.controls.iter_mut().for_each(Control::reset);
        }
    }

    /// Feeds `input` to every control in order, returning the events raised
    /// together with the index of the control that raised each.
    pub fn process(&mut self, input: PointerInput) -> Vec<(usize, ControlEvent)> {
        if !self.active {
            return Vec::new();
        }
        self.controls
            .iter_mut()
            .enumerate()
            .filter_map(|(index, control)| control.process(input).map(|event| (index, event)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn at(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_button_click_cycle() {
        let mut button = Button::new(Rect::new(0.0, 0.0, 100.0, 50.0), "Play");
        assert_eq!(button.process(PointerInput::Move(at(10.0, 10.0))), None);
        assert!(button.phase().is_hovered());

        assert_eq!(
            button.process(PointerInput::Press(at(10.0, 10.0))),
            Some(ControlEvent::Pressed)
        );
        assert!(button.phase().is_held());

        // A held button keeps its hold when the pointer leaves it.
        assert_eq!(button.process(PointerInput::Move(at(500.0, 10.0))), None);
        assert!(button.phase().is_held());
        assert_eq!(
            button.process(PointerInput::Release(at(500.0, 10.0))),
            Some(ControlEvent::Released)
        );
        assert!(button.phase().is_idle());
    }

    #[test]
    fn test_button_ignores_edges_and_stray_releases() {
        let mut button = Button::new(Rect::new(0.0, 0.0, 100.0, 50.0), "Play");
        assert_eq!(button.process(PointerInput::Press(at(0.0, 10.0))), None);
        assert_eq!(button.process(PointerInput::Release(at(10.0, 10.0))), None);
        assert!(button.phase().is_hovered());
    }

    #[test]
    fn test_inactive_button() {
        let mut button = Button::new(Rect::new(0.0, 0.0, 100.0, 50.0), "Play");
        button.process(PointerInput::Press(at(10.0, 10.0)));
        button.set_active(false);
        assert!(button.phase().is_idle());
        assert_eq!(button.process(PointerInput::Press(at(10.0, 10.0))), None);
    }

    #[test]
    fn test_slider_rejects_out_of_range_values() {
        let track = Rect::new(0.0, 0.0, 100.0, 10.0);
        assert!(matches!(
            Slider::new(track, 0.0..=10.0, 11.0, 4.0),
            Err(SliderError::OutOfRange { .. })
        ));
        let mut slider = Slider::new(track, 0.0..=10.0, 5.0, 4.0).unwrap();
        assert!(slider.set_value(f64::NAN).is_err());
        assert!((slider.value() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_slider_drag_clamps_to_track() {
        let track = Rect::new(100.0, 0.0, 200.0, 10.0);
        let mut slider = Slider::new(track, 0.0..=10.0, 0.0, 4.0).unwrap();
        assert!((slider.thumb_x() - 100.0).abs() < 1e-9);

        assert_eq!(
            slider.process(PointerInput::Press(at(100.0, 5.0))),
            Some(ControlEvent::Pressed)
        );
        assert_eq!(
            slider.process(PointerInput::Move(at(200.0, 80.0))),
            Some(ControlEvent::ValueChanged(5.0))
        );
        assert_eq!(
            slider.process(PointerInput::Move(at(900.0, 5.0))),
            Some(ControlEvent::ValueChanged(10.0))
        );
        assert_eq!(slider.process(PointerInput::Move(at(950.0, 5.0))), None);
        assert_eq!(
            slider.process(PointerInput::Release(at(950.0, 5.0))),
            Some(ControlEvent::Released)
        );
        assert_eq!(slider.process(PointerInput::Move(at(150.0, 5.0))), None);
        assert!((slider.value() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_control_list_reports_indices() {
        let mut list = ControlList::new();
        list.push(Button::new(Rect::new(0.0, 0.0, 50.0, 50.0), "A"));
        let b = list.push(Button::new(Rect::new(60.0, 0.0, 50.0, 50.0), "B"));

        assert_eq!(
            list.process(PointerInput::Press(at(70.0, 10.0))),
            [(b, ControlEvent::Pressed)]
        );
        assert_eq!(
            list.process(PointerInput::Release(at(70.0, 10.0))),
            [(b, ControlEvent::Released)]
        );

        list.process(PointerInput::Press(at(10.0, 10.0)));
        list.set_active(false);
        assert!(list.process(PointerInput::Release(at(10.0, 10.0))).is_empty());
        assert!(
            list.iter()
                .all(|c| matches!(c, Control::Button(button) if button.phase().is_idle()))
        );
    }

    #[test]
    fn test_control_list_drives_slider_thumb() {
        let mut list = ControlList::new();
        list.push(Button::new(Rect::new(0.0, 0.0, 50.0, 50.0), "A"));
        let slider = list.push(
            Slider::new(Rect::new(0.0, 60.0, 100.0, 10.0), 0.0..=4.0, 2.0, 6.0).unwrap(),
        );

        assert_eq!(
            list.process(PointerInput::Press(at(50.0, 65.0))),
            [(slider, ControlEvent::Pressed)]
        );
        assert_eq!(
            list.process(PointerInput::Move(at(75.0, 65.0))),
            [(slider, ControlEvent::ValueChanged(3.0))]
        );
        assert_eq!(
            list.process(PointerInput::Release(at(75.0, 65.0))),
            [(slider, ControlEvent::Released)]
        );
        if let Some(Control::Slider(s)) = list.get_mut(slider) {
            s.set_value(1.0).unwrap();
        }
        assert!(
            matches!(list.get(slider), Some(Control::Slider(s)) if (s.value() - 1.0).abs() < f64::EPSILON)
        );
    }

    proptest! {
        #[test]
        fn prop_held_slider_stays_in_range(xs in prop::collection::vec(-500.0f64..1500.0, 1..20)) {
            let track = Rect::new(100.0, 0.0, 200.0, 10.0);
            let mut slider = Slider::new(track, -1.0..=1.0, 0.0, 4.0).unwrap();
            slider.process(PointerInput::Press(at(slider.thumb_x(), 5.0)));
            for x in xs {
                slider.process(PointerInput::Move(at(x, 5.0)));
                prop_assert!(slider.range().contains(&slider.value()));
                prop_assert!(slider.thumb_x() >= track.x && slider.thumb_x() <= track.right());
            }
        }
    }
}
