//! Test fixtures for route-geometry.
//!
//! Provides realistic test data including:
//! - An encoded I-15 corridor route south of Las Vegas
//! - Fuel stop locations along that corridor

pub mod i15_corridor;

pub use i15_corridor::*;
