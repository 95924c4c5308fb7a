//! Earthquake catalog loading from CSV exports
//!
//! Expects a header row and looks columns up by name, which matches the USGS
//! FDSN event CSV format. Fields may be double-quoted (place names contain
//! commas); a doubled quote inside a quoted field is a literal quote.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

use crate::analysis::estimator::{EstimationOptions, FitResult, estimate_fractal_dimension};
use crate::analysis::temporal::DatedPoint;
use crate::io::configuration::{
    DEFAULT_LATITUDE_COLUMN, DEFAULT_LONGITUDE_COLUMN, DEFAULT_TIME_COLUMN,
};
use crate::io::error::{AnalysisError, Result, file_system_error};

/// Header names of the columns read from a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogColumns {
    /// Latitude column header
    pub latitude: String,
    /// Longitude column header
    pub longitude: String,
    /// Event time column header; optional in the file
    pub time: String,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE_COLUMN.to_string(),
            longitude: DEFAULT_LONGITUDE_COLUMN.to_string(),
            time: DEFAULT_TIME_COLUMN.to_string(),
        }
    }
}

/// Epicenters read from one catalog file
#[derive(Debug, Clone, Default)]
pub struct EarthquakeCatalog {
    /// Latitudes in file order
    pub latitudes: Vec<f64>,
    /// Longitudes in file order, paired with `latitudes`
    pub longitudes: Vec<f64>,
    /// Event year per row, `None` when the time is missing or unparsable
    pub years: Vec<Option<i32>>,
    /// Rows dropped because a coordinate was missing or unparsable
    pub skipped_rows: usize,
}

impl EarthquakeCatalog {
    /// Read a catalog CSV from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or lacks a required column
    pub fn from_csv_path(path: &Path, columns: &CatalogColumns) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read catalog", e))?;
        Self::from_csv_str(&text, columns, path)
    }

    /// Parse catalog CSV text; `origin` is only used in error messages
    ///
    /// Rows with an empty or non-numeric latitude or longitude are skipped as
    /// a whole so coordinate pairs stay aligned.
    ///
    /// # Errors
    ///
    /// Returns a catalog format error if the header is missing or lacks the
    /// latitude or longitude column
    pub fn from_csv_str(text: &str, columns: &CatalogColumns, origin: &Path) -> Result<Self> {
        let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

        let (_, header_line) = lines
            .next()
            .ok_or_else(|| format_error(origin, None, "file has no header row"))?;
        let header = split_csv_line(header_line);

        let column_index = |name: &str| header.iter().position(|h| h.trim() == name);
        let lat_idx = column_index(&columns.latitude).ok_or_else(|| {
            format_error(
                origin,
                Some(1),
                &format!("missing column '{}'", columns.latitude),
            )
        })?;
        let lon_idx = column_index(&columns.longitude).ok_or_else(|| {
            format_error(
                origin,
                Some(1),
                &format!("missing column '{}'", columns.longitude),
            )
        })?;
        let time_idx = column_index(&columns.time);

        let mut catalog = Self::default();
        for (line_no, line) in lines {
            let fields = split_csv_line(line);
            let coordinate = |idx: usize| {
                fields
                    .get(idx)
                    .and_then(|f| f.trim().parse::<f64>().ok())
                    .filter(|v| v.is_finite())
            };

            let (Some(lat), Some(lon)) = (coordinate(lat_idx), coordinate(lon_idx)) else {
                tracing::debug!(line = line_no + 1, "skipping row without usable coordinates");
                catalog.skipped_rows += 1;
                continue;
            };

            let year = time_idx
                .and_then(|idx| fields.get(idx))
                .and_then(|t| parse_year(t));

            catalog.latitudes.push(lat);
            catalog.longitudes.push(lon);
            catalog.years.push(year);
        }

        tracing::info!(
            catalog = %origin.display(),
            events = catalog.len(),
            skipped = catalog.skipped_rows,
            "loaded earthquake catalog"
        );

        Ok(catalog)
    }

    /// Number of events with usable coordinates
    pub const fn len(&self) -> usize {
        self.latitudes.len()
    }

    /// Whether no usable events were read
    pub const fn is_empty(&self) -> bool {
        self.latitudes.is_empty()
    }

    /// Events that carry a year, for the yearly series
    pub fn dated_points(&self) -> impl Iterator<Item = DatedPoint> + '_ {
        self.latitudes
            .iter()
            .zip(&self.longitudes)
            .zip(&self.years)
            .filter_map(|((&latitude, &longitude), year)| {
                year.map(|year| DatedPoint {
                    year,
                    latitude,
                    longitude,
                })
            })
    }

    /// Estimate the box-counting dimension of the whole catalog
    ///
    /// # Errors
    ///
    /// Propagates any estimation error
    pub fn estimate(&self, options: &EstimationOptions) -> Result<FitResult> {
        estimate_fractal_dimension(&self.latitudes, &self.longitudes, options)
    }
}

/// Split one CSV record into fields, honouring double quotes
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', _) => in_quotes = !in_quotes,
            (',', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Extract the calendar year from an event timestamp
///
/// Accepts RFC 3339 (`2024-03-01T12:30:00.000Z`) and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_year(timestamp: &str) -> Option<i32> {
    let timestamp = timestamp.trim();
    if let Ok(parsed) = timestamp.parse::<DateTime<Utc>>() {
        return Some(parsed.year());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|parsed| parsed.year())
}

fn format_error(origin: &Path, line: Option<usize>, reason: &str) -> AnalysisError {
    AnalysisError::CatalogFormat {
        path: PathBuf::from(origin),
        line,
        reason: reason.to_string(),
    }
}
