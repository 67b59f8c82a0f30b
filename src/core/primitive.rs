//! # Primitives
//!
//! Leaf regions. The circle is anchored at the origin; move it with
//! [`shift`](super::shift) rather than growing more primitive variants.

use super::{Distance, Point, Region};

/// A closed disk of `radius` around the origin
///
/// Negative radii are accepted as-is and match no point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub radius: Distance,
}

impl Region for Circle {
    fn contains(&self, point: Point) -> bool {
        point.magnitude() <= self.radius
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

/// A closed disk of `radius` around `center`
///
/// Same membership as `shift(center, circle(radius))`, computed in one
/// step instead of by composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenteredCircle {
    pub radius: Distance,
    pub center: Point,
}

impl Region for CenteredCircle {
    fn contains(&self, point: Point) -> bool {
        (point - self.center).magnitude() <= self.radius
    }

    fn name(&self) -> &'static str {
        "centered_circle"
    }
}

/// Disk of `radius` around the origin
///
/// # Example
/// ```
/// use region_algebra::{circle, Point, Region};
/// assert!(circle(5.0).contains(Point::new(3.0, 4.0)));
/// ```
pub fn circle(radius: Distance) -> Circle {
    tracing::trace!(radius, "circle");
    Circle { radius }
}

/// Disk of `radius` around `center`, without composing a shift
pub fn circle2(radius: Distance, center: Point) -> CenteredCircle {
    tracing::trace!(radius, %center, "centered circle");
    CenteredCircle { radius, center }
}
