//! Per-scale tables and result export

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::analysis::estimator::FitResult;
use crate::analysis::temporal::YearlyDimension;
use crate::io::error::{AnalysisError, Result, file_system_error};

/// One row of the log-log scale table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleRow {
    /// Box edge in degrees
    pub box_size: f64,
    /// Occupied cells
    pub count: usize,
    /// log10 of the box size
    pub log_box_size: f64,
    /// log10 of the count
    pub log_count: f64,
    /// log10 count predicted by the fitted line
    pub fitted_log_count: f64,
    /// Observed minus fitted log10 count
    pub residual: f64,
}

/// Build the per-scale table with residuals against the fitted line
///
/// Empty when the result was produced without details.
pub fn scale_table(result: &FitResult) -> Vec<ScaleRow> {
    let slope = -result.dimension;
    result
        .observations
        .iter()
        .flatten()
        .map(|obs| {
            let log_box_size = obs.box_size.log10();
            let log_count = (obs.count as f64).log10();
            let fitted_log_count = slope.mul_add(log_box_size, result.intercept);
            ScaleRow {
                box_size: obs.box_size,
                count: obs.count,
                log_box_size,
                log_count,
                fitted_log_count,
                residual: log_count - fitted_log_count,
            }
        })
        .collect()
}

/// One-line human-readable summary of an estimate
pub fn summary_line(result: &FitResult) -> String {
    format!(
        "D = {:.3} ± {:.3} (R² = {:.3}, n = {})",
        result.dimension, result.std_error, result.r_squared, result.n_points
    )
}

/// Render the scale table as CSV text
pub fn scale_csv(rows: &[ScaleRow]) -> String {
    let mut out =
        String::from("box_size,count,log10_box_size,log10_count,fitted_log10_count,residual\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            row.box_size,
            row.count,
            row.log_box_size,
            row.log_count,
            row.fitted_log_count,
            row.residual
        );
    }
    out
}

/// Render the yearly series as CSV text
pub fn yearly_csv(rows: &[YearlyDimension]) -> String {
    let mut out = String::from("year,D,std_error,r_squared,n_events\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            row.year, row.dimension, row.std_error, row.r_squared, row.n_events
        );
    }
    out
}

/// Write the scale table of a detailed result to a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_scale_csv(result: &FitResult, path: &Path) -> Result<()> {
    std::fs::write(path, scale_csv(&scale_table(result)))
        .map_err(|e| file_system_error(path, "write scale table", e))
}

/// Write the yearly series to a CSV file
///
/// # Errors
///
/// Returns an error if the file cannot be written
pub fn write_yearly_csv(rows: &[YearlyDimension], path: &Path) -> Result<()> {
    std::fs::write(path, yearly_csv(rows))
        .map_err(|e| file_system_error(path, "write yearly series", e))
}

/// Write a result as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_result_json(result: &FitResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result).map_err(|source| {
        AnalysisError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;
    std::fs::write(path, json).map_err(|e| file_system_error(path, "write result", e))
}
