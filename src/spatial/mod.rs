//! Spatial data structures for box counting
//!
//! This module contains spatial-related functionality including:
//! - Coordinate validation and extent
//! - Occupied grid cell counting at a single scale

/// Grid occupancy counting
pub mod occupancy;
/// Validated point sets
pub mod points;

pub use points::PointSet;
