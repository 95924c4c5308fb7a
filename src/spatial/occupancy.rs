//! Grid occupancy counting for a single box size
//!
//! The grid origin is the point set's own minimum corner. Cell `k` along an
//! axis covers `[min + k*b, min + (k+1)*b)` and each axis has
//! `floor(range / b) + 1` cells, so the maximum coordinate always falls inside
//! the last cell even when the range is not a multiple of `b`.
//!
//! Anchoring at the data minimum makes counts depend on where the bounding box
//! starts: shifting every point by a non-multiple of `b` can change which
//! cells are occupied. Counts are therefore not translation-invariant.

use std::collections::HashSet;

use ndarray::Array2;
use num_traits::ToPrimitive;
use serde::Serialize;

use crate::io::configuration::MAX_HISTOGRAM_CELLS;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::spatial::points::PointSet;

/// Occupied-cell count observed at one box size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleObservation {
    /// Cell edge length in degrees
    pub box_size: f64,
    /// Number of cells holding at least one point
    pub count: usize,
}

/// Number of grid cells along the (latitude, longitude) axes for a box size
///
/// # Errors
///
/// Returns an error if `box_size` is not a positive finite number or the
/// resulting cell count does not fit in `usize`
pub fn grid_shape(points: &PointSet<'_>, box_size: f64) -> Result<[usize; 2]> {
    check_box_size(box_size)?;
    let extent = points.extent();
    Ok([
        axis_cells(extent.lat_range, box_size)?,
        axis_cells(extent.lon_range, box_size)?,
    ])
}

/// Count the distinct grid cells of edge `box_size` that contain at least one point
///
/// Uses a dense 2-D histogram when the grid has at most
/// [`MAX_HISTOGRAM_CELLS`] cells, otherwise collects occupied cell indices
/// into a set. Both paths give the same count.
///
/// # Errors
///
/// Returns an error if `box_size` is not a positive finite number or the grid
/// dimensions overflow
pub fn count_occupied_cells(points: &PointSet<'_>, box_size: f64) -> Result<usize> {
    let shape = grid_shape(points, box_size)?;

    let fits_histogram = shape[0]
        .checked_mul(shape[1])
        .is_some_and(|cells| cells <= MAX_HISTOGRAM_CELLS);

    if fits_histogram {
        histogram_count(points, box_size, shape)
    } else {
        sparse_count(points, box_size, shape)
    }
}

/// Dense histogram variant of [`count_occupied_cells`]
///
/// # Errors
///
/// Returns an error if a point maps outside the histogram, which indicates
/// inconsistent bounds
pub fn histogram_count(points: &PointSet<'_>, box_size: f64, shape: [usize; 2]) -> Result<usize> {
    let mut histogram = Array2::<u32>::zeros((shape[0], shape[1]));

    for cell in cell_indices(points, box_size, shape) {
        let [row, col] = cell?;
        let bin = histogram.get_mut([row, col]).ok_or_else(|| {
            computation_error(
                "histogram_count",
                &format!("cell ({row}, {col}) outside {}x{} grid", shape[0], shape[1]),
            )
        })?;
        *bin = bin.saturating_add(1);
    }

    Ok(histogram.iter().filter(|&&bin| bin > 0).count())
}

/// Sparse variant of [`count_occupied_cells`] for grids too large to allocate
///
/// # Errors
///
/// Returns an error if a cell index cannot be represented
pub fn sparse_count(points: &PointSet<'_>, box_size: f64, shape: [usize; 2]) -> Result<usize> {
    let mut occupied = HashSet::with_capacity(points.len());
    for cell in cell_indices(points, box_size, shape) {
        occupied.insert(cell?);
    }
    Ok(occupied.len())
}

fn cell_indices<'p>(
    points: &'p PointSet<'_>,
    box_size: f64,
    shape: [usize; 2],
) -> impl Iterator<Item = Result<[usize; 2]>> + 'p {
    let origin = points.min_corner();
    points.iter().map(move |point| {
        Ok([
            axis_index(point[0], origin[0], box_size, shape[0])?,
            axis_index(point[1], origin[1], box_size, shape[1])?,
        ])
    })
}

fn axis_cells(range: f64, box_size: f64) -> Result<usize> {
    (range / box_size)
        .floor()
        .to_usize()
        .and_then(|steps| steps.checked_add(1))
        .ok_or_else(|| {
            computation_error(
                "grid_shape",
                &format!("range {range} with box size {box_size} gives too many cells"),
            )
        })
}

fn axis_index(value: f64, origin: f64, box_size: f64, cells: usize) -> Result<usize> {
    let index = ((value - origin) / box_size)
        .floor()
        .to_usize()
        .ok_or_else(|| {
            computation_error(
                "cell_index",
                &format!("value {value} lies below grid origin {origin}"),
            )
        })?;
    // Rounding can push the maximum coordinate one cell past the end
    Ok(index.min(cells.saturating_sub(1)))
}

fn check_box_size(box_size: f64) -> Result<()> {
    if box_size.is_finite() && box_size > 0.0 {
        Ok(())
    } else {
        Err(invalid_parameter(
            "box_size",
            &box_size,
            &"must be a positive finite number",
        ))
    }
}
