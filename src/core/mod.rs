//! # Core Domain
//!
//! Pure math, no I/O. The region algebra itself.
//!
//! This module contains the fundamental types and operations:
//! - `Point` / `Distance` - Positions and radii in the plane
//! - `Region` - Trait for boolean membership over points
//! - `circle`, `circle2` - Primitive disks
//! - `shift`, `invert` - Transformers
//! - `intersection`, `union`, `difference` - Combinators
//! - `in_range` - Targeting built from all of the above
//!
//! ## Design Principles
//!
//! - All regions are immutable values (no interior mutability)
//! - Combinators own their operands; nothing is mutated in place
//! - Evaluation is lazy: every query walks the tree again
//! - No input validation; floating-point comparison decides edge cases

mod point;
mod region;
mod primitive;
mod transform;
mod combinator;
pub mod targeting;
pub mod config;

// Re-exports
pub use point::{Distance, ParsePointError, Point};
pub use region::Region;
pub use primitive::{circle, circle2, CenteredCircle, Circle};
pub use transform::{invert, shift, Inverted, Shifted};
pub use combinator::{difference, intersection, union, Difference, Intersection, Union};
pub use targeting::{firing_region, in_range, Annulus, FiringRegion};
pub use config::{ConfigError, ConfigResult, TargetingConfig};
