//! Estimation pipeline built on the spatial and math modules

/// Single-call box-counting estimate from raw coordinates
pub mod estimator;
/// Dimension estimates grouped by calendar year
pub mod temporal;
