//! Logarithmically spaced box sizes

use crate::io::configuration::DEFAULT_MAX_BOX_FRACTION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::points::SpatialExtent;

/// Strictly increasing, log-spaced sequence of box sizes
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSeries {
    sizes: Vec<f64>,
}

impl ScaleSeries {
    /// Box sizes in increasing order
    pub fn as_slice(&self) -> &[f64] {
        &self.sizes
    }

    /// Number of scales
    pub const fn len(&self) -> usize {
        self.sizes.len()
    }

    /// True only for a series built from zero scales, which the generator rejects
    pub const fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Smallest box size
    pub fn min(&self) -> Option<f64> {
        self.sizes.first().copied()
    }

    /// Largest box size
    pub fn max(&self) -> Option<f64> {
        self.sizes.last().copied()
    }

    /// Consume the series into its box sizes
    pub fn into_vec(self) -> Vec<f64> {
        self.sizes
    }
}

/// Largest box size used when the caller gives none
///
/// A quarter of the smaller of the two spatial ranges keeps the largest box
/// inside the data's footprint. This is a heuristic with no closed-form basis.
pub fn default_max_box_size(extent: &SpatialExtent) -> f64 {
    extent.min_range() * DEFAULT_MAX_BOX_FRACTION
}

/// Generate `num_scales` log-spaced box sizes from `min_box_size` to `max_box_size` inclusive
///
/// Endpoints are exact: the first value is `min_box_size` and, when
/// `num_scales > 1`, the last is `max_box_size`.
///
/// # Errors
///
/// Returns an invalid parameter error if either bound is non-finite or not
/// positive, if `num_scales` is zero, or if `min_box_size >= max_box_size`
pub fn generate_scales(
    min_box_size: f64,
    max_box_size: f64,
    num_scales: usize,
) -> Result<ScaleSeries> {
    if !(min_box_size.is_finite() && min_box_size > 0.0) {
        return Err(invalid_parameter(
            "min_box_size",
            &min_box_size,
            &"must be a positive finite number",
        ));
    }
    if !max_box_size.is_finite() {
        return Err(invalid_parameter(
            "max_box_size",
            &max_box_size,
            &"must be a finite number",
        ));
    }
    if num_scales == 0 {
        return Err(invalid_parameter(
            "num_scales",
            &num_scales,
            &"at least one scale is required",
        ));
    }
    if min_box_size >= max_box_size {
        return Err(invalid_parameter(
            "min_box_size",
            &min_box_size,
            &format!("must be less than max_box_size ({max_box_size})"),
        ));
    }

    let log_min = min_box_size.log10();
    let log_max = max_box_size.log10();
    let last = num_scales - 1;

    let sizes = (0..num_scales)
        .map(|i| {
            if i == 0 {
                min_box_size
            } else if i == last {
                max_box_size
            } else {
                let t = i as f64 / last as f64;
                10f64.powf((log_max - log_min).mul_add(t, log_min))
            }
        })
        .collect();

    Ok(ScaleSeries { sizes })
}
