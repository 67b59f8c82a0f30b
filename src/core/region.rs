//! # Region
//!
//! The one abstraction everything else is built on:
//! `Region: fn(point) -> bool` - Is it in here?
//!
//! Primitives, transformers and combinators all implement this trait.
//! A composed region is a tree of these values, walked afresh on
//! every `contains` query.

use std::sync::Arc;

use super::Point;

/// Trait for boolean membership over the plane
///
/// Implementations hold no mutable state, so a region can be shared
/// freely between threads and queried concurrently.
pub trait Region: Send + Sync {
    /// Is `point` a member of this region?
    fn contains(&self, point: Point) -> bool;

    /// Name of this region kind (for debugging/logging)
    fn name(&self) -> &'static str;
}

impl<R: Region + ?Sized> Region for &R {
    fn contains(&self, point: Point) -> bool {
        (**self).contains(point)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Region + ?Sized> Region for Box<R> {
    fn contains(&self, point: Point) -> bool {
        (**self).contains(point)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Region + ?Sized> Region for Arc<R> {
    fn contains(&self, point: Point) -> bool {
        (**self).contains(point)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
