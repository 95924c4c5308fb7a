//! Box-counting fractal dimension of earthquake epicenter distributions
//!
//! Epicenters are binned on square latitude/longitude grids of decreasing
//! size; the slope of log(occupied cells) against log(cell size) gives the
//! fractal dimension together with its fit statistics.

#![forbid(unsafe_code)]

/// Dimension estimation and yearly series
pub mod analysis;
/// Catalog input, reports, logging, progress and the command-line front end
pub mod io;
/// Scale generation and log-log regression
pub mod math;
/// Coordinate validation and grid occupancy counting
pub mod spatial;

pub use analysis::estimator::{
    EstimationOptions, EstimationWarning, FitResult, estimate_fractal_dimension,
};
pub use io::error::{AnalysisError, Result, ValidationError};
