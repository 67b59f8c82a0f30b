//! Adapters - Swappable implementations of port interfaces

mod region_targeting;

#[cfg(feature = "python")]
pub mod python;

pub use region_targeting::RegionTargeting;
