//! Ordinary least-squares fit of log10(count) against log10(box size)
//!
//! The fit is computed directly from centred sums of squares. The box-counting
//! dimension is the negative slope: counts fall as boxes grow, so a
//! space-filling cloud gives a slope near -2 and a line of points near -1.

use serde::Serialize;

use crate::io::error::{Result, computation_error};

/// Slope statistics of a log-log box-counting fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogLogFit {
    /// Box-counting dimension, the negated slope
    pub dimension: f64,
    /// Regression intercept in log10 space
    pub intercept: f64,
    /// Squared Pearson correlation of the log-log pairs
    pub r_squared: f64,
    /// Standard error of the slope (and so of the dimension)
    pub std_error: f64,
    /// Number of (box size, count) pairs used
    pub n_scales: usize,
    /// Every count was equal, so the fit carries no information
    pub degenerate: bool,
}

impl LogLogFit {
    /// Slope of the fitted line
    pub fn slope(&self) -> f64 {
        -self.dimension
    }

    /// Fitted log10 count at a given log10 box size
    pub fn predict_log_count(&self, log_box_size: f64) -> f64 {
        self.slope().mul_add(log_box_size, self.intercept)
    }
}

/// Fit `log10(counts)` on `log10(box_sizes)`
///
/// With two pairs the fit is exact and the standard error is reported as zero.
/// When every count is equal the log counts have zero variance. That case
/// returns `dimension = 0`, `r_squared = 0`, `std_error = 0` and sets
/// [`LogLogFit::degenerate`] rather than letting NaN through.
///
/// # Errors
///
/// Returns a computation error if the inputs differ in length, hold fewer than
/// two pairs, contain a non-positive or non-finite value, or if every box size
/// is identical
pub fn fit_log_log(box_sizes: &[f64], counts: &[f64]) -> Result<LogLogFit> {
    if box_sizes.len() != counts.len() {
        return Err(computation_error(
            "fit_log_log",
            &format!(
                "{} box sizes paired with {} counts",
                box_sizes.len(),
                counts.len()
            ),
        ));
    }
    if box_sizes.len() < 2 {
        return Err(computation_error(
            "fit_log_log",
            &format!("need at least 2 scales, got {}", box_sizes.len()),
        ));
    }
    if let Some(bad) = box_sizes
        .iter()
        .chain(counts)
        .find(|v| !(v.is_finite() && **v > 0.0))
    {
        return Err(computation_error(
            "fit_log_log",
            &format!("logarithm of non-positive value {bad}"),
        ));
    }

    let xs: Vec<f64> = box_sizes.iter().map(|v| v.log10()).collect();
    let ys: Vec<f64> = counts.iter().map(|v| v.log10()).collect();
    let n = xs.len() as f64;

    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let (sxx, syy, sxy) = xs
        .iter()
        .zip(&ys)
        .fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (&x, &y)| {
            let dx = x - x_mean;
            let dy = y - y_mean;
            (dx.mul_add(dx, sxx), dy.mul_add(dy, syy), dx.mul_add(dy, sxy))
        });

    if sxx <= 0.0 {
        return Err(computation_error(
            "fit_log_log",
            &"all box sizes are identical",
        ));
    }

    let degenerate = syy <= 0.0;
    let slope = if degenerate { 0.0 } else { sxy / sxx };
    let intercept = slope.mul_add(-x_mean, y_mean);

    let r = if degenerate {
        0.0
    } else {
        (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
    };
    let r_squared = r * r;

    let std_error = if xs.len() > 2 {
        let dof = n - 2.0;
        ((1.0 - r_squared).max(0.0) * syy / sxx / dof).sqrt()
    } else {
        0.0
    };

    Ok(LogLogFit {
        // Avoid reporting -0.0 for a flat fit
        dimension: if slope == 0.0 { 0.0 } else { -slope },
        intercept,
        r_squared,
        std_error,
        n_scales: xs.len(),
        degenerate,
    })
}
