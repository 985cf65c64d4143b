use wordsearch_core::Point;

/// Half the angular width of each of the eight direction sectors, in degrees.
pub const SECTOR_HALF_WIDTH: f64 = 22.5;

/// The line a drag is snapped onto.
///
/// Each variant covers two opposite compass directions, since a run can be
/// dragged either way along its line. Angles follow
/// [`Point::angle_degrees`] in screen (y-down) coordinates, so 90° points
/// straight down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SnapDirection {
    /// Up or down (sectors around 90° and 270°).
    Vertical,
    /// Left or right (sectors around 0°/360° and 180°).
    Horizontal,
    /// Up-right or down-left, along `(-1, +1)` (sectors around 135° and 315°).
    AntiDiagonal,
    /// Down-right or up-left, along `(+1, +1)` (sectors around 45° and 225°).
    Diagonal,
}

impl SnapDirection {
    /// Classifies a drag angle.
    ///
    /// Sectors are checked in the order vertical, horizontal, anti-diagonal,
    /// diagonal; each is a half-open range `[center - 22.5, center + 22.5)`.
    /// The horizontal sector also accepts everything at or above 337.5° and
    /// below 22.5°, which covers the slightly negative angles
    /// [`Point::angle_degrees`] can produce. Only NaN matches no sector.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_game::SnapDirection;
    ///
    /// assert_eq!(SnapDirection::from_angle(0.0), Some(SnapDirection::Horizontal));
    /// assert_eq!(SnapDirection::from_angle(67.5), Some(SnapDirection::Vertical));
    /// assert_eq!(SnapDirection::from_angle(67.4), Some(SnapDirection::Diagonal));
    /// assert_eq!(SnapDirection::from_angle(300.0), Some(SnapDirection::AntiDiagonal));
    /// assert_eq!(SnapDirection::from_angle(f64::NAN), None);
    /// ```
    #[must_use]
    pub fn from_angle(angle: f64) -> Option<Self> {
        if angle.is_nan() {
            return None;
        }
        let within = |center: f64| {
            (center - SECTOR_HALF_WIDTH..center + SECTOR_HALF_WIDTH).contains(&angle)
        };

        if within(90.0) || within(270.0) {
            Some(Self::Vertical)
        } else if within(180.0)
            || !(SECTOR_HALF_WIDTH..360.0 - SECTOR_HALF_WIDTH).contains(&angle)
        {
            Some(Self::Horizontal)
        } else if within(135.0) || within(315.0) {
            Some(Self::AntiDiagonal)
        } else if within(45.0) || within(225.0) {
            Some(Self::Diagonal)
        } else {
            None
        }
    }

    /// Classifies the direction from `start` to `current`.
    #[must_use]
    pub fn between(start: Point, current: Point) -> Option<Self> {
        Self::from_angle(start.angle_degrees(current))
    }

    /// Returns a vector along this direction's line.
    #[must_use]
    pub fn line_direction(self) -> Point {
        match self {
            Self::Vertical => Point::new(0.0, 1.0),
            Self::Horizontal => Point::new(1.0, 0.0),
            Self::AntiDiagonal => Point::new(-1.0, 1.0),
            Self::Diagonal => Point::new(1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(dx: f64, dy: f64) -> Option<SnapDirection> {
        let start = Point::new(250.0, 250.0);
        SnapDirection::between(start, start + Point::new(dx, dy))
    }

    #[test]
    fn test_unit_offsets() {
        assert_eq!(snap(1.0, 0.0), Some(SnapDirection::Horizontal));
        assert_eq!(snap(1.0, 1.0), Some(SnapDirection::Diagonal));
        assert_eq!(snap(0.0, 1.0), Some(SnapDirection::Vertical));
    }

    #[test]
    fn test_all_compass_directions() {
        assert_eq!(snap(-5.0, 0.0), Some(SnapDirection::Horizontal));
        assert_eq!(snap(0.0, -5.0), Some(SnapDirection::Vertical));
        assert_eq!(snap(-5.0, -5.0), Some(SnapDirection::Diagonal));
        assert_eq!(snap(5.0, -5.0), Some(SnapDirection::AntiDiagonal));
        assert_eq!(snap(-5.0, 5.0), Some(SnapDirection::AntiDiagonal));
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(SnapDirection::from_angle(22.4), Some(SnapDirection::Horizontal));
        assert_eq!(SnapDirection::from_angle(22.5), Some(SnapDirection::Diagonal));
        assert_eq!(SnapDirection::from_angle(112.5), Some(SnapDirection::AntiDiagonal));
        assert_eq!(SnapDirection::from_angle(157.5), Some(SnapDirection::Horizontal));
        assert_eq!(SnapDirection::from_angle(202.5), Some(SnapDirection::Diagonal));
        assert_eq!(SnapDirection::from_angle(247.5), Some(SnapDirection::Vertical));
        assert_eq!(SnapDirection::from_angle(292.5), Some(SnapDirection::AntiDiagonal));
        assert_eq!(SnapDirection::from_angle(337.5), Some(SnapDirection::Horizontal));
    }

    #[test]
    fn test_unnormalized_angles() {
        assert_eq!(SnapDirection::from_angle(-10.0), Some(SnapDirection::Horizontal));
        assert_eq!(SnapDirection::from_angle(365.0), Some(SnapDirection::Horizontal));
    }

    #[test]
    fn test_non_finite_angles() {
        assert_eq!(SnapDirection::from_angle(f64::NAN), None);
        assert_eq!(
            SnapDirection::from_angle(f64::INFINITY),
            Some(SnapDirection::Horizontal)
        );
        assert_eq!(
            SnapDirection::from_angle(f64::NEG_INFINITY),
            Some(SnapDirection::Horizontal)
        );
    }

    #[test]
    fn test_shallow_drags_snap_to_the_nearest_axis() {
        assert_eq!(snap(10.0, 3.0), Some(SnapDirection::Horizontal));
        assert_eq!(snap(3.0, 10.0), Some(SnapDirection::Vertical));
        assert_eq!(snap(10.0, 8.0), Some(SnapDirection::Diagonal));
    }
}
