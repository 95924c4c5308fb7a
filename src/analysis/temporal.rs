//! Year-by-year dimension series

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::estimator::{EstimationOptions, estimate_fractal_dimension};
use crate::io::configuration::{DEFAULT_MIN_BOX_SIZE, MIN_EVENTS_PER_YEAR, YEARLY_NUM_SCALES};

/// An epicenter tagged with the calendar year of the event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedPoint {
    /// Calendar year
    pub year: i32,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Parameters for the yearly series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyOptions {
    /// Years with fewer events are skipped
    pub min_events: usize,
    /// Estimation parameters applied to every year
    pub estimation: EstimationOptions,
}

impl Default for YearlyOptions {
    fn default() -> Self {
        Self {
            min_events: MIN_EVENTS_PER_YEAR,
            estimation: EstimationOptions::default()
                .with_min_box_size(DEFAULT_MIN_BOX_SIZE)
                .with_num_scales(YEARLY_NUM_SCALES),
        }
    }
}

/// Dimension estimate for one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyDimension {
    /// Calendar year
    pub year: i32,
    /// Box-counting dimension
    #[serde(rename = "D")]
    pub dimension: f64,
    /// Standard error of the dimension
    pub std_error: f64,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
    /// Events in that year
    pub n_events: usize,
}

/// Estimate the dimension separately for each year, in ascending year order
///
/// Years below `min_events` are skipped. A year whose estimate fails (for
/// example a cluster too tight for the derived maximum box size) is logged
/// and skipped so one bad year never aborts the series.
pub fn yearly_dimensions(
    events: impl IntoIterator<Item = DatedPoint>,
    options: &YearlyOptions,
) -> Vec<YearlyDimension> {
    let mut by_year: BTreeMap<i32, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for event in events {
        let (lats, lons) = by_year.entry(event.year).or_default();
        lats.push(event.latitude);
        lons.push(event.longitude);
    }

    by_year
        .into_iter()
        .filter(|(_, (lats, _))| lats.len() >= options.min_events)
        .filter_map(|(year, (lats, lons))| {
            match estimate_fractal_dimension(&lats, &lons, &options.estimation) {
                Ok(result) => Some(YearlyDimension {
                    year,
                    dimension: result.dimension,
                    std_error: result.std_error,
                    r_squared: result.r_squared,
                    n_events: result.n_points,
                }),
                Err(error) => {
                    tracing::warn!(year, %error, "could not calculate D for year");
                    None
                }
            }
        })
        .collect()
}
