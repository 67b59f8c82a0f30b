//! # Targeting
//!
//! The worked example: is a target inside weapon range, outside the
//! minimum safe distance around ourselves, and outside the same safety
//! buffer around a friendly unit?
//!
//! Built entirely from the algebra. A fresh region tree per call; nothing
//! is cached.

use super::{circle, difference, shift, Circle, Difference, Distance, Point, Region, Shifted};

/// Ring of fire around the origin: within `range`, outside `minimum_distance`
pub type Annulus = Difference<Circle, Circle>;

/// The full firing region: our annulus minus a friendly's exclusion disk
pub type FiringRegion = Difference<Shifted<Annulus>, Shifted<Circle>>;

/// Region of valid target positions for a unit at `own`
///
/// Evaluate many candidate targets against the same tree with
/// [`Region::contains`].
pub fn firing_region(
    own: Point,
    friendly: Point,
    range: Distance,
    minimum_distance: Distance,
) -> FiringRegion {
    let range_region = difference(circle(range), circle(minimum_distance));
    let target_region = shift(own, range_region);
    let friendly_region = shift(friendly, circle(minimum_distance));
    difference(target_region, friendly_region)
}

/// Is `target` a valid target from `own`?
///
/// `target` must lie within `range` of `own`, but not within
/// `minimum_distance` of either `own` or `friendly`.
///
/// # Example
/// ```
/// use region_algebra::{in_range, Point};
/// let own = Point::new(0.0, 0.0);
/// let friendly = Point::new(100.0, 100.0);
/// assert!(in_range(own, Point::new(5.0, 0.0), friendly, 10.0, 2.0));
/// assert!(!in_range(own, Point::new(5.0, 0.0), Point::new(5.0, 0.5), 10.0, 2.0));
/// ```
pub fn in_range(
    own: Point,
    target: Point,
    friendly: Point,
    range: Distance,
    minimum_distance: Distance,
) -> bool {
    let verdict = firing_region(own, friendly, range, minimum_distance).contains(target);
    tracing::debug!(
        %own,
        %target,
        %friendly,
        range,
        minimum_distance,
        verdict,
        "in_range"
    );
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{circle, invert, shift};

    const RANGE: Distance = 10.0;
    const MIN: Distance = 2.0;

    #[test]
    fn test_clear_shot() {
        assert!(in_range(
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(100.0, 100.0),
            RANGE,
            MIN
        ));
    }

    #[test]
    fn test_friendly_near_target() {
        assert!(!in_range(
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 0.5),
            RANGE,
            MIN
        ));
    }

    #[test]
    fn test_target_on_top_of_us() {
        let own = Point::new(3.0, -7.0);
        assert!(!in_range(own, own, Point::new(100.0, 100.0), RANGE, MIN));
    }

    #[test]
    fn test_out_of_range() {
        assert!(!in_range(
            Point::ORIGIN,
            Point::new(0.0, 15.0),
            Point::new(100.0, 100.0),
            RANGE,
            MIN
        ));
    }

    #[test]
    fn test_inside_own_buffer() {
        assert!(!in_range(
            Point::ORIGIN,
            Point::new(0.0, 1.0),
            Point::new(100.0, 100.0),
            RANGE,
            MIN
        ));
    }

    #[test]
    fn test_off_origin_shooter() {
        let own = Point::new(50.0, 50.0);
        let friendly = Point::new(0.0, 0.0);
        assert!(in_range(own, Point::new(55.0, 50.0), friendly, RANGE, MIN));
        assert!(!in_range(own, Point::new(5.0, 0.0), friendly, RANGE, MIN));
    }

    #[test]
    fn test_friendly_just_outside_buffer() {
        // friendly 2.5 away from the target: buffer of 2 does not reach it
        assert!(in_range(
            Point::ORIGIN,
            Point::new(5.0, 0.0),
            Point::new(7.5, 0.0),
            RANGE,
            MIN
        ));
    }

    #[test]
    fn test_nan_target_is_never_in_range() {
        assert!(!in_range(
            Point::ORIGIN,
            Point::new(f64::NAN, 0.0),
            Point::new(100.0, 100.0),
            RANGE,
            MIN
        ));
    }

    #[test]
    fn test_firing_region_matches_hand_built_tree() {
        let own = Point::new(1.0, 2.0);
        let friendly = Point::new(4.0, 2.0);
        let built = firing_region(own, friendly, RANGE, MIN);

        let by_hand = crate::core::intersection(
            shift(
                own,
                crate::core::intersection(circle(RANGE), invert(circle(MIN))),
            ),
            invert(shift(friendly, circle(MIN))),
        );

        for x in -12..=14 {
            for y in -10..=14 {
                let p = Point::new(x as f64, y as f64);
                assert_eq!(built.contains(p), by_hand.contains(p), "at {}", p);
            }
        }
    }

    #[test]
    fn test_firing_region_reused() {
        let region = firing_region(Point::ORIGIN, Point::new(100.0, 100.0), RANGE, MIN);
        let hits = [Point::new(5.0, 0.0), Point::new(0.0, -9.0)];
        let misses = [Point::new(0.5, 0.5), Point::new(20.0, 0.0)];
        assert!(hits.iter().all(|&p| region.contains(p)));
        assert!(misses.iter().all(|&p| !region.contains(p)));
    }
}
