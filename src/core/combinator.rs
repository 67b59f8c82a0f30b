//! # Combinators
//!
//! Regions built from two operands joined by a boolean connective.
//!
//! `Intersection` and `Union` are the primitive connectives. `Difference`
//! is not a separate struct: it is an intersection with an inverted
//! operand, and its type says so.

use super::{invert, Inverted, Point, Region};

/// Points in both `a` and `b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection<A, B> {
    pub a: A,
    pub b: B,
}

impl<A: Region, B: Region> Region for Intersection<A, B> {
    fn contains(&self, point: Point) -> bool {
        self.a.contains(point) && self.b.contains(point)
    }

    fn name(&self) -> &'static str {
        "intersection"
    }
}

/// Points in `a`, `b`, or both
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Union<A, B> {
    pub a: A,
    pub b: B,
}

impl<A: Region, B: Region> Region for Union<A, B> {
    fn contains(&self, point: Point) -> bool {
        self.a.contains(point) || self.b.contains(point)
    }

    fn name(&self) -> &'static str {
        "union"
    }
}

/// Points in `A` but not in `B`
pub type Difference<A, B> = Intersection<A, Inverted<B>>;

/// Logical AND of two regions
pub fn intersection<A: Region, B: Region>(a: A, b: B) -> Intersection<A, B> {
    tracing::trace!(a = a.name(), b = b.name(), "intersection");
    Intersection { a, b }
}

/// Logical OR of two regions
pub fn union<A: Region, B: Region>(a: A, b: B) -> Union<A, B> {
    tracing::trace!(a = a.name(), b = b.name(), "union");
    Union { a, b }
}

/// `region` with `minus` cut out of it
///
/// # Example
/// ```
/// use region_algebra::{circle, difference, Point, Region};
/// let ring = difference(circle(10.0), circle(2.0));
/// assert!(ring.contains(Point::new(0.0, 5.0)));
/// assert!(!ring.contains(Point::new(0.0, 1.0)));
/// ```
pub fn difference<A: Region, B: Region>(region: A, minus: B) -> Difference<A, B> {
    intersection(region, invert(minus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{circle, shift};
    use proptest::prelude::*;

    fn left() -> impl Region + Copy {
        shift(Point::new(-1.0, 0.0), circle(2.0))
    }

    fn right() -> impl Region + Copy {
        shift(Point::new(1.0, 0.0), circle(2.0))
    }

    #[test]
    fn test_intersection() {
        let lens = intersection(left(), right());
        assert!(lens.contains(Point::ORIGIN));
        assert!(!lens.contains(Point::new(-2.5, 0.0)));
        assert!(!lens.contains(Point::new(2.5, 0.0)));
    }

    #[test]
    fn test_union() {
        let both = union(left(), right());
        assert!(both.contains(Point::new(-2.5, 0.0)));
        assert!(both.contains(Point::new(2.5, 0.0)));
        assert!(!both.contains(Point::new(0.0, 5.0)));
    }

    #[test]
    fn test_annulus() {
        let ring = difference(circle(10.0), circle(2.0));
        assert!(ring.contains(Point::new(0.0, 5.0)));
        assert!(!ring.contains(Point::new(0.0, 1.0)));
        assert!(!ring.contains(Point::new(0.0, 15.0)));
    }

    #[test]
    fn test_annulus_edges() {
        let ring = difference(circle(10.0), circle(2.0));
        // outer edge is in, inner edge is cut out
        assert!(ring.contains(Point::new(10.0, 0.0)));
        assert!(!ring.contains(Point::new(2.0, 0.0)));
    }

    #[test]
    fn test_difference_is_built_from_intersection() {
        let d: Intersection<_, Inverted<_>> = difference(circle(3.0), circle(1.0));
        assert_eq!(d.name(), "intersection");
        assert_eq!(d.b.name(), "invert");
        assert_eq!(d.b.inner, circle(1.0));
    }

    #[test]
    fn test_names() {
        assert_eq!(intersection(left(), right()).name(), "intersection");
        assert_eq!(union(left(), right()).name(), "union");
    }

    proptest! {
        #[test]
        fn intersection_commutes(x in -5.0f64..5.0, y in -5.0f64..5.0) {
            let p = Point::new(x, y);
            prop_assert_eq!(
                intersection(left(), right()).contains(p),
                intersection(right(), left()).contains(p)
            );
        }

        #[test]
        fn union_commutes(x in -5.0f64..5.0, y in -5.0f64..5.0) {
            let p = Point::new(x, y);
            prop_assert_eq!(
                union(left(), right()).contains(p),
                union(right(), left()).contains(p)
            );
        }

        #[test]
        fn de_morgan(x in -5.0f64..5.0, y in -5.0f64..5.0) {
            let p = Point::new(x, y);
            prop_assert_eq!(
                invert(union(left(), right())).contains(p),
                intersection(invert(left()), invert(right())).contains(p)
            );
        }

        #[test]
        fn difference_matches_its_derivation(x in -5.0f64..5.0, y in -5.0f64..5.0) {
            let p = Point::new(x, y);
            prop_assert_eq!(
                difference(left(), right()).contains(p),
                intersection(left(), invert(right())).contains(p)
            );
        }

        #[test]
        fn intersection_associates(x in -5.0f64..5.0, y in -5.0f64..5.0) {
            let p = Point::new(x, y);
            let c = circle(1.5);
            prop_assert_eq!(
                intersection(intersection(left(), right()), c).contains(p),
                intersection(left(), intersection(right(), c)).contains(p)
            );
        }
    }
}
