//! # Point
//!
//! A position in the plane. The thing every region is asked about.
//!
//! Points are plain values: created ad hoc, consumed immediately,
//! no identity beyond their coordinates.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// A scalar radius or magnitude.
///
/// Expected to be non-negative when used as a radius, but never checked.
pub type Distance = f64;

/// A point in the plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The coordinate origin
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    ///
    /// # Example
    /// ```
    /// use region_algebra::Point;
    /// let p = Point::new(3.0, 4.0);
    /// assert_eq!(p.x, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin
    ///
    /// # Example
    /// ```
    /// use region_algebra::Point;
    /// let p = Point::new(3.0, 4.0);
    /// assert!((p.magnitude() - 5.0).abs() < 1e-12);
    /// ```
    pub fn magnitude(&self) -> Distance {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> Distance {
        (*self - other).magnitude()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors from parsing a point out of `x,y` text
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParsePointError {
    #[error("expected `x,y`, got {0:?}")]
    Format(String),

    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError::Format(s.to_string()))?;

        let parse = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| ParsePointError::Coordinate(raw.trim().to_string()))
        };

        Ok(Point::new(parse(x)?, parse(y)?))
    }
}
