//! Box-counting dimension estimation from raw coordinate arrays
//!
//! Runs validation, scale generation, per-scale occupancy counting and the
//! log-log fit in that order. Validation and parameter failures abort the
//! call; weak fits are returned with [`EstimationWarning`]s attached.

use std::fmt;

use serde::Serialize;

use crate::io::configuration::{DEFAULT_MIN_BOX_SIZE, DEFAULT_NUM_SCALES, MIN_RELIABLE_SCALES};
use crate::io::error::Result;
use crate::math::regression::fit_log_log;
use crate::math::scales::{default_max_box_size, generate_scales};
use crate::spatial::occupancy::{ScaleObservation, count_occupied_cells};
use crate::spatial::points::{PointSet, SpatialExtent};

/// Tunable parameters for one estimation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationOptions {
    /// Smallest box edge in degrees
    pub min_box_size: f64,
    /// Largest box edge in degrees; derived from the spatial extent when `None`
    pub max_box_size: Option<f64>,
    /// Number of log-spaced scales
    pub num_scales: usize,
    /// Include per-scale observations in the result
    pub return_details: bool,
}

impl Default for EstimationOptions {
    fn default() -> Self {
        Self {
            min_box_size: DEFAULT_MIN_BOX_SIZE,
            max_box_size: None,
            num_scales: DEFAULT_NUM_SCALES,
            return_details: false,
        }
    }
}

impl EstimationOptions {
    /// Set an explicit largest box size
    #[must_use]
    pub const fn with_max_box_size(mut self, max_box_size: f64) -> Self {
        self.max_box_size = Some(max_box_size);
        self
    }

    /// Set the smallest box size
    #[must_use]
    pub const fn with_min_box_size(mut self, min_box_size: f64) -> Self {
        self.min_box_size = min_box_size;
        self
    }

    /// Set the number of scales
    #[must_use]
    pub const fn with_num_scales(mut self, num_scales: usize) -> Self {
        self.num_scales = num_scales;
        self
    }

    /// Request per-scale observations in the result
    #[must_use]
    pub const fn with_details(mut self) -> Self {
        self.return_details = true;
        self
    }
}

/// Non-fatal conditions that weaken confidence in an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimationWarning {
    /// Fewer than three scales survived filtering
    LowConfidence {
        /// Scales that entered the fit
        valid_scales: usize,
    },
    /// Every scale had the same count, so the fit has zero variance
    DegenerateFit,
}

impl fmt::Display for EstimationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowConfidence { valid_scales } => write!(
                f,
                "Too few valid box sizes ({valid_scales}) for reliable D estimation; try adjusting min/max box sizes"
            ),
            Self::DegenerateFit => {
                f.write_str("Occupied-cell count is identical at every scale; D is not meaningful")
            }
        }
    }
}

/// Outcome of a box-counting estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    /// Box-counting dimension
    #[serde(rename = "D")]
    pub dimension: f64,
    /// Coefficient of determination of the log-log fit
    pub r_squared: f64,
    /// Standard error of the dimension
    pub std_error: f64,
    /// Regression intercept in log10 space
    pub intercept: f64,
    /// Number of input points
    pub n_points: usize,
    /// Latitude and longitude spans of the input
    pub spatial_extent: SpatialExtent,
    /// Surviving per-scale observations, present only when details were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<Vec<ScaleObservation>>,
    /// Conditions that make this estimate less trustworthy
    pub warnings: Vec<EstimationWarning>,
}

impl FitResult {
    /// Whether the estimate came with no warnings
    pub fn is_reliable(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Box sizes of the surviving scales, if details were requested
    pub fn box_sizes(&self) -> Option<Vec<f64>> {
        self.observations
            .as_ref()
            .map(|obs| obs.iter().map(|o| o.box_size).collect())
    }

    /// Occupied-cell counts of the surviving scales, if details were requested
    pub fn counts(&self) -> Option<Vec<usize>> {
        self.observations
            .as_ref()
            .map(|obs| obs.iter().map(|o| o.count).collect())
    }
}

/// Count occupied cells at every box size, in order
///
/// # Errors
///
/// Returns an error if any box size is invalid for the grid
pub fn observe_scales(points: &PointSet<'_>, box_sizes: &[f64]) -> Result<Vec<ScaleObservation>> {
    box_sizes
        .iter()
        .map(|&box_size| {
            let count = count_occupied_cells(points, box_size)?;
            tracing::debug!(box_size, count, "counted occupied cells");
            Ok(ScaleObservation { box_size, count })
        })
        .collect()
}

/// Estimate the box-counting dimension of a set of epicenters
///
/// # Errors
///
/// Returns a validation error for malformed coordinates, an invalid parameter
/// error for inconsistent scale bounds, and a computation error if fewer than
/// two non-empty scales remain for the fit
pub fn estimate_fractal_dimension(
    latitudes: &[f64],
    longitudes: &[f64],
    options: &EstimationOptions,
) -> Result<FitResult> {
    let points = PointSet::new(latitudes, longitudes)?;
    let extent = points.extent();

    let max_box_size = options
        .max_box_size
        .unwrap_or_else(|| default_max_box_size(&extent));
    let scales = generate_scales(options.min_box_size, max_box_size, options.num_scales)?;

    let observations: Vec<ScaleObservation> = observe_scales(&points, scales.as_slice())?
        .into_iter()
        .filter(|obs| obs.count > 0)
        .collect();

    let mut warnings = Vec::new();
    if observations.len() < MIN_RELIABLE_SCALES {
        let warning = EstimationWarning::LowConfidence {
            valid_scales: observations.len(),
        };
        tracing::warn!(valid_scales = observations.len(), "{warning}");
        warnings.push(warning);
    }

    let box_sizes: Vec<f64> = observations.iter().map(|o| o.box_size).collect();
    let counts: Vec<f64> = observations.iter().map(|o| o.count as f64).collect();
    let fit = fit_log_log(&box_sizes, &counts)?;

    if fit.degenerate {
        let warning = EstimationWarning::DegenerateFit;
        tracing::warn!(n_points = points.len(), "{warning}");
        warnings.push(warning);
    }

    tracing::info!(
        dimension = fit.dimension,
        r_squared = fit.r_squared,
        std_error = fit.std_error,
        n_points = points.len(),
        scales = fit.n_scales,
        "box-counting estimate complete"
    );

    Ok(FitResult {
        dimension: fit.dimension,
        r_squared: fit.r_squared,
        std_error: fit.std_error,
        intercept: fit.intercept,
        n_points: points.len(),
        spatial_extent: extent,
        observations: options.return_details.then_some(observations),
        warnings,
    })
}
