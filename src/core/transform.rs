//! # Transformers
//!
//! Regions that wrap one other region and change its geometry
//! (`Shifted`) or its membership (`Inverted`).

use super::{Point, Region};

/// `inner` translated by `offset`
///
/// A point at `offset` is judged the way `inner` judges the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shifted<R> {
    pub offset: Point,
    pub inner: R,
}

impl<R: Region> Region for Shifted<R> {
    fn contains(&self, point: Point) -> bool {
        self.inner.contains(point - self.offset)
    }

    fn name(&self) -> &'static str {
        "shift"
    }
}

/// Every point `inner` rejects
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inverted<R> {
    pub inner: R,
}

impl<R: Region> Region for Inverted<R> {
    fn contains(&self, point: Point) -> bool {
        !self.inner.contains(point)
    }

    fn name(&self) -> &'static str {
        "invert"
    }
}

/// Translate `region` by `offset`
///
/// Shifting a shifted region wraps it again; offsets are not folded.
pub fn shift<R: Region>(offset: Point, region: R) -> Shifted<R> {
    tracing::trace!(%offset, inner = region.name(), "shift");
    Shifted { offset, inner: region }
}

/// Complement of `region`
pub fn invert<R: Region>(region: R) -> Inverted<R> {
    tracing::trace!(inner = region.name(), "invert");
    Inverted { inner: region }
}
