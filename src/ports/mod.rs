//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! - Ports define WHAT decisions are needed
//! - Adapters define HOW they're made
//!
//! The CORE doesn't know about adapters.

mod targeting;

pub use targeting::Targeting;
