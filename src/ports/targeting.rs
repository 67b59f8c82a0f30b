//! # Targeting Port
//!
//! Trait for deciding which positions a unit may engage.
//!
//! Implemented by targeting adapters (region algebra, etc.)

use crate::core::Point;

/// Trait for target selection
///
/// Targeting adapters implement this trait.
pub trait Targeting: Send + Sync {
    /// Can a unit at `own` engage `target` without endangering `friendly`?
    fn in_range(&self, own: Point, target: Point, friendly: Point) -> bool;

    /// Filter `candidates` down to the ones that may be engaged from `own`
    ///
    /// A candidate must be in range and outside the safety buffer of every
    /// entry in `friendlies`. Order is preserved.
    fn valid_targets(&self, own: Point, candidates: &[Point], friendlies: &[Point]) -> Vec<Point>;

    /// Name of this targeting strategy (for debugging/config)
    fn name(&self) -> &'static str;
}
