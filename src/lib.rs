//! # Region Algebra
//!
//! Composable two-dimensional regions for proximity and targeting logic.
//!
//! ## Overview
//!
//! A region is a boolean predicate over points in the plane. Start from a
//! primitive disk, move it with `shift`, flip it with `invert`, and join
//! regions with `intersection`, `union` and `difference`. Every result is
//! itself a region, so composition goes as deep as you like.
//!
//! ## Key Features
//!
//! - **One abstraction**: everything implements `Region::contains`
//! - **Owned composition**: combinators own their operands, nothing mutates
//! - **Lazy**: each query walks the tree, nothing is precomputed
//! - **Thread-safe**: regions are `Send + Sync` and can be shared freely
//!
//! ## Rust Usage
//!
//! ```rust
//! use region_algebra::{circle, difference, shift, in_range, Point, Region};
//!
//! // Ring between 2 and 10 units, centred on (50, 50)
//! let ring = shift(Point::new(50.0, 50.0), difference(circle(10.0), circle(2.0)));
//! assert!(ring.contains(Point::new(55.0, 50.0)));
//!
//! // Target 5 units east, friendly far away
//! let own = Point::new(0.0, 0.0);
//! assert!(in_range(own, Point::new(5.0, 0.0), Point::new(100.0, 100.0), 10.0, 2.0));
//! ```
//!
//! ## Python Usage
//!
//! ```python
//! from region_algebra import Region
//!
//! ring = Region.circle(10.0).difference(Region.circle(2.0))
//! ring.contains(0.0, 5.0)  # True
//! ```

pub mod core;
pub mod ports;
pub mod adapters;

// Re-exports for convenience
pub use crate::core::{
    circle, circle2, difference, firing_region, in_range, intersection, invert, shift, union,
    Distance, Point, Region, TargetingConfig,
};
pub use crate::adapters::RegionTargeting;
pub use crate::ports::Targeting;
