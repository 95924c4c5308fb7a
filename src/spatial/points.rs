//! Validated epicenter coordinates and their spatial extent
//!
//! Coordinates stay in plain degrees. No projection or geodesic correction is
//! applied, so a degree of longitude counts the same as a degree of latitude.

use serde::Serialize;

use crate::io::error::{Axis, ValidationError};

/// Largest allowed absolute latitude in degrees
pub const MAX_LATITUDE: f64 = 90.0;
/// Largest allowed absolute longitude in degrees
pub const MAX_LONGITUDE: f64 = 180.0;

/// Check that a candidate point set is well-formed
///
/// # Errors
///
/// Returns the first broken invariant, checked in order: empty input,
/// length mismatch, non-finite value, latitude out of range, longitude out of range
pub fn validate_coordinates(
    latitudes: &[f64],
    longitudes: &[f64],
) -> std::result::Result<(), ValidationError> {
    if latitudes.is_empty() || longitudes.is_empty() {
        return Err(ValidationError::EmptyInput {
            latitudes: latitudes.len(),
            longitudes: longitudes.len(),
        });
    }

    if latitudes.len() != longitudes.len() {
        return Err(ValidationError::LengthMismatch {
            latitudes: latitudes.len(),
            longitudes: longitudes.len(),
        });
    }

    for (axis, values) in [(Axis::Latitude, latitudes), (Axis::Longitude, longitudes)] {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ValidationError::NonFinite { axis, index });
        }
    }

    for (axis, values, limit) in [
        (Axis::Latitude, latitudes, MAX_LATITUDE),
        (Axis::Longitude, longitudes, MAX_LONGITUDE),
    ] {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| v.abs() > limit) {
            return Err(ValidationError::OutOfRange { axis, index, value });
        }
    }

    Ok(())
}

/// Latitude and longitude ranges (max - min) spanned by a point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpatialExtent {
    /// Latitude span in degrees
    pub lat_range: f64,
    /// Longitude span in degrees
    pub lon_range: f64,
}

impl SpatialExtent {
    /// The smaller of the two spans
    pub fn min_range(&self) -> f64 {
        self.lat_range.min(self.lon_range)
    }
}

/// Validated, immutable set of (latitude, longitude) pairs
///
/// Bounds are computed once at construction since every scale's occupancy
/// count anchors its grid at the same minimum corner.
#[derive(Debug, Clone)]
pub struct PointSet<'a> {
    latitudes: &'a [f64],
    longitudes: &'a [f64],
    min: [f64; 2],
    max: [f64; 2],
}

impl<'a> PointSet<'a> {
    /// Validate and wrap caller-supplied coordinate arrays
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the arrays break any point set invariant
    pub fn new(
        latitudes: &'a [f64],
        longitudes: &'a [f64],
    ) -> std::result::Result<Self, ValidationError> {
        validate_coordinates(latitudes, longitudes)?;

        let (lat_min, lat_max) = min_max(latitudes);
        let (lon_min, lon_max) = min_max(longitudes);

        Ok(Self {
            latitudes,
            longitudes,
            min: [lat_min, lon_min],
            max: [lat_max, lon_max],
        })
    }

    /// Number of points
    pub const fn len(&self) -> usize {
        self.latitudes.len()
    }

    /// Always false for a validated set, kept for API symmetry with `len`
    pub const fn is_empty(&self) -> bool {
        self.latitudes.is_empty()
    }

    /// Latitude values in input order
    pub const fn latitudes(&self) -> &'a [f64] {
        self.latitudes
    }

    /// Longitude values in input order
    pub const fn longitudes(&self) -> &'a [f64] {
        self.longitudes
    }

    /// Minimum corner as `[latitude, longitude]`; the occupancy grid origin
    pub const fn min_corner(&self) -> [f64; 2] {
        self.min
    }

    /// Maximum corner as `[latitude, longitude]`
    pub const fn max_corner(&self) -> [f64; 2] {
        self.max
    }

    /// Iterate over `[latitude, longitude]` pairs
    pub fn iter(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.latitudes
            .iter()
            .zip(self.longitudes)
            .map(|(&lat, &lon)| [lat, lon])
    }

    /// Latitude and longitude spans
    pub fn extent(&self) -> SpatialExtent {
        SpatialExtent {
            lat_range: self.max[0] - self.min[0],
            lon_range: self.max[1] - self.min[1],
        }
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
