use crate::error::{Axis, GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in the Euclidean plane.
///
/// Points are plain `Copy` values. Fields are private so a point cannot be
/// changed after it is built; use [`Point::try_new`] whenever the coordinates
/// come from outside the program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    x: f64,
    y: f64,
}

/// Unchecked wire shape, validated on the way into [`Point`].
#[derive(Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = GeometryError;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        Point::try_new(raw.x, raw.y)
    }
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> GeometryResult<Self> {
        if !x.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate {
                axis: Axis::X,
                value: x,
            });
        }
        if !y.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate {
                axis: Axis::Y,
                value: y,
            });
        }
        Ok(Self::new(x, y))
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Straight-line distance to `other`.
    ///
    /// Always non-negative, zero for coordinate-wise equal points and
    /// symmetric in its arguments.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        let tolerance = f64::EPSILON * a.abs().max(b.abs()).max(1.0) * 4.0;
        assert!((a - b).abs() <= tolerance, "{a} != {b}");
    }

    #[test]
    fn test_three_four_five_triangle() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(&p2), 5.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for p in [
            Point::ORIGIN,
            Point::new(-7.25, 3.5),
            Point::new(1e150, -1e150),
            Point::new(f64::MIN_POSITIVE, 0.0),
        ] {
            assert_eq!(p.distance(&p), 0.0, "distance of {p} to itself");
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = [
            Point::new(0.1, 0.2),
            Point::new(-3.3, 9.75),
            Point::new(1234.5678, -0.0001),
            Point::new(-1e-9, 1e-9),
        ];
        for a in &points {
            for b in &points {
                assert_close(a.distance(b), b.distance(a));
                assert!(a.distance(b) >= 0.0);
            }
        }
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(matches!(
            Point::try_new(f64::NAN, 0.0),
            Err(GeometryError::NonFiniteCoordinate { axis: Axis::X, .. })
        ));
        assert_eq!(
            Point::try_new(1.0, f64::NEG_INFINITY),
            Err(GeometryError::NonFiniteCoordinate {
                axis: Axis::Y,
                value: f64::NEG_INFINITY,
            })
        );
        assert_eq!(Point::try_new(3.0, 4.0), Ok(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(3.0, 4.5).to_string(), "(3.0, 4.5)");
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let json = serde_json::to_string(&Point::new(3.0, 4.0)).unwrap();
        assert_eq!(json, r#"{"x":3.0,"y":4.0}"#);

        let parsed: Point = serde_json::from_str(r#"{"x": -1.5, "y": 2}"#).unwrap();
        assert_eq!(parsed, Point::new(-1.5, 2.0));

        let toml_err = toml::from_str::<Point>("x = nan\ny = 0.0");
        assert!(toml_err.is_err());
    }
}
