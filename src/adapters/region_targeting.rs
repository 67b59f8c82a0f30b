//! # Region Targeting
//!
//! `Targeting` backed by the region algebra.
//!
//! Single-friendly queries defer to [`in_range`]. Batch queries build one
//! firing region for all candidates, with every friendly's exclusion disk
//! folded together by `union`.

use crate::core::{
    circle, difference, in_range, shift, union, Point, Region, TargetingConfig,
};
use crate::ports::Targeting;

/// Region-algebra targeting with a fixed profile
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionTargeting {
    config: TargetingConfig,
}

impl RegionTargeting {
    /// Create with the given targeting profile
    pub fn new(config: TargetingConfig) -> Self {
        Self { config }
    }

    /// The profile in use
    pub fn config(&self) -> &TargetingConfig {
        &self.config
    }

    /// Firing region from `own`, excluding every friendly's safety buffer
    ///
    /// With no friendlies this is just the annulus around `own`.
    pub fn region(&self, own: Point, friendlies: &[Point]) -> Box<dyn Region> {
        let TargetingConfig {
            range,
            minimum_distance,
        } = self.config;

        let annulus = shift(own, difference(circle(range), circle(minimum_distance)));

        let exclusion = friendlies
            .iter()
            .map(|&f| Box::new(shift(f, circle(minimum_distance))) as Box<dyn Region>)
            .reduce(|acc, next| Box::new(union(acc, next)) as Box<dyn Region>);

        match exclusion {
            Some(exclusion) => Box::new(difference(annulus, exclusion)),
            None => Box::new(annulus),
        }
    }
}

impl Targeting for RegionTargeting {
    fn in_range(&self, own: Point, target: Point, friendly: Point) -> bool {
        in_range(
            own,
            target,
            friendly,
            self.config.range,
            self.config.minimum_distance,
        )
    }

    fn valid_targets(&self, own: Point, candidates: &[Point], friendlies: &[Point]) -> Vec<Point> {
        let region = self.region(own, friendlies);
        let valid: Vec<Point> = candidates
            .iter()
            .copied()
            .filter(|&p| region.contains(p))
            .collect();

        tracing::debug!(
            %own,
            candidates = candidates.len(),
            friendlies = friendlies.len(),
            valid = valid.len(),
            "valid_targets"
        );
        valid
    }

    fn name(&self) -> &'static str {
        "region"
    }
}
