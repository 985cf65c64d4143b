//! 2D point arithmetic and line queries.
//!
//! All coordinates are screen coordinates: x grows to the right and y grows
//! downwards. Angles are measured in degrees from the positive x axis towards
//! the positive y axis, so in screen space 90° points straight down.
//!
//! Several queries deliberately avoid failing on degenerate input. Vertical
//! slopes are approximated by [`VERTICAL_SLOPE`], and the angle and
//! intersection formulas add a small epsilon to their denominators. The
//! results are always finite for finite input and are meant to be passed to a
//! hit test that rejects anything outside the grid.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Slope reported for a vertical line, standing in for infinity.
pub const VERTICAL_SLOPE: f64 = 1_000_000_000.0;

/// Added to the x delta in [`Point::angle_degrees`].
pub const ANGLE_EPSILON: f64 = 1e-9;

/// Added to the slope difference in [`Point::line_intersection`].
pub const INTERSECTION_EPSILON: f64 = 1e-8;

/// A 2D point (or vector) in screen coordinates.
///
/// # Examples
///
/// ```
/// use wordsearch_core::Point;
///
/// let a = Point::new(1.0, 2.0);
/// let b = Point::new(4.0, 6.0);
/// assert_eq!(b - a, Point::new(3.0, 4.0));
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (y-down).
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the dot product of two vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the Euclidean length of this vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the Euclidean distance between two points.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Returns `None` for the zero vector, which has no direction.
    #[must_use]
    pub fn unit(self) -> Option<Self> {
        let length = self.length();
        (length > 0.0).then(|| self / length)
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the slope of the line from `self` to `other`.
    ///
    /// A vertical line (`other.x == self.x`) yields [`VERTICAL_SLOPE`] instead
    /// of an infinite or NaN value, so nearly vertical and exactly vertical
    /// lines compare the same way in later arithmetic.
    #[must_use]
    pub fn slope(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        if dx == 0.0 {
            return VERTICAL_SLOPE;
        }
        (other.y - self.y) / dx
    }

    /// Returns the y intercept of the line through `self` with the given slope.
    #[must_use]
    pub fn y_intercept(self, slope: f64) -> f64 {
        self.y - slope * self.x
    }

    /// Returns the angle, in degrees, of the direction from `self` to `other`.
    ///
    /// The base angle is `atan(dy / (dx + ε))`. It is then corrected by +180°
    /// when `other` lies to the left of `self`, or otherwise by +360° when
    /// `other` lies above `self`. The corrections are not normalized
    /// afterwards; the result lies in (-90°, 360°), and an exactly vertical
    /// upward direction lands just below 270°.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch_core::Point;
    ///
    /// let origin = Point::ZERO;
    /// assert!(origin.angle_degrees(Point::new(1.0, 0.0)).abs() < 1e-6);
    /// assert!((origin.angle_degrees(Point::new(0.0, 1.0)) - 90.0).abs() < 1e-6);
    /// assert!((origin.angle_degrees(Point::new(-1.0, 0.0)) - 180.0).abs() < 1e-6);
    /// assert!((origin.angle_degrees(Point::new(1.0, -1.0)) - 315.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn angle_degrees(self, other: Self) -> f64 {
        let angle = ((other.y - self.y) / (other.x - self.x + ANGLE_EPSILON))
            .atan()
            .to_degrees();
        if other.x < self.x {
            angle + 180.0
        } else if other.y < self.y {
            angle + 360.0
        } else {
            angle
        }
    }

    /// Returns the point reached by walking `distance` from `self` along
    /// `angle` degrees.
    #[must_use]
    pub fn point_at_angle(self, angle: f64, distance: f64) -> Self {
        let radians = angle.to_radians();
        Self::new(
            self.x + distance * radians.cos(),
            self.y + distance * radians.sin(),
        )
    }

    /// Returns the point on the line through `a` and `b` closest to `p`.
    ///
    /// A helper line is built through `p` with direction `(1, -slope(a, b))`
    /// and intersected with the line `a`-`b`. The helper line is exactly
    /// perpendicular only for slopes of ±1, which are the only slopes the
    /// diagonal drag snapping uses.
    #[must_use]
    pub fn closest_point_on_line(a: Self, b: Self, p: Self) -> Self {
        let slope = a.slope(b);
        let p2 = Self::new(p.x + 1.0, p.y - slope);
        Self::line_intersection(a, b, p, p2)
    }

    /// Returns the intersection of the line through `a1`, `a2` with the line
    /// through `b1`, `b2`.
    ///
    /// The slope difference is offset by [`INTERSECTION_EPSILON`], so parallel
    /// lines produce a far away (but finite) point instead of an error.
    #[must_use]
    pub fn line_intersection(a1: Self, a2: Self, b1: Self, b2: Self) -> Self {
        let m1 = a2.slope(a1);
        let m2 = b2.slope(b1);
        let d1 = a1.y_intercept(m1);
        let d2 = b1.y_intercept(m2);

        let x = (d2 - d1) / (m1 - m2 + INTERSECTION_EPSILON);
        let y = m1 * x + d1;
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
        assert_close(a.dot(b), 1.0);
    }

    #[test]
    fn test_unit_vector() {
        let unit = Point::new(3.0, 4.0).unit().unwrap();
        assert_close(unit.x, 0.6);
        assert_close(unit.y, 0.8);
        assert_eq!(Point::ZERO.unit(), None);
    }

    #[test]
    fn test_slope_uses_sentinel_for_vertical_lines() {
        let a = Point::new(2.0, 0.0);
        assert_close(a.slope(Point::new(4.0, 4.0)), 2.0);
        assert_close(a.slope(Point::new(2.0, 10.0)), VERTICAL_SLOPE);
        assert_close(a.slope(Point::new(2.0, -10.0)), VERTICAL_SLOPE);
    }

    #[test]
    fn test_angle_quadrants() {
        let o = Point::new(10.0, 10.0);
        assert_close(o.angle_degrees(Point::new(11.0, 11.0)), 45.0);
        assert_close(o.angle_degrees(Point::new(9.0, 11.0)), 135.0);
        assert_close(o.angle_degrees(Point::new(9.0, 9.0)), 225.0);
        assert_close(o.angle_degrees(Point::new(11.0, 9.0)), 315.0);
        assert_close(o.angle_degrees(Point::new(10.0, 9.0)), 270.0);
    }

    #[test]
    fn test_angle_of_identical_points_is_zero() {
        let o = Point::new(3.0, 3.0);
        assert_close(o.angle_degrees(o), 0.0);
    }

    #[test]
    fn test_angle_of_non_finite_input_is_nan() {
        let o = Point::ZERO;
        assert!(o.angle_degrees(Point::new(f64::NAN, 1.0)).is_nan());
    }

    #[test]
    fn test_point_at_angle() {
        let p = Point::new(1.0, 1.0).point_at_angle(90.0, 2.0);
        assert_close(p.x, 1.0);
        assert_close(p.y, 3.0);
    }

    #[test]
    fn test_closest_point_on_diagonals() {
        let a = Point::new(0.0, 0.0);

        let p = Point::closest_point_on_line(a, Point::new(1.0, 1.0), Point::new(4.0, 2.0));
        assert_close(p.x, 3.0);
        assert_close(p.y, 3.0);

        let p = Point::closest_point_on_line(a, Point::new(-1.0, 1.0), Point::new(-4.0, 2.0));
        assert_close(p.x, -3.0);
        assert_close(p.y, 3.0);
    }

    #[test]
    fn test_line_intersection() {
        let p = Point::line_intersection(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(1.0, 1.0),
        );
        assert_close(p.x, 1.0);
        assert_close(p.y, 1.0);
    }

    #[test]
    fn test_parallel_lines_stay_finite() {
        let p = Point::line_intersection(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 2.0),
        );
        assert!(p.is_finite());
    }
}
