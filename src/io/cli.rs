//! Command-line interface for batch box-counting of earthquake catalogs

use crate::analysis::estimator::EstimationOptions;
use crate::analysis::temporal::{YearlyOptions, yearly_dimensions};
use crate::io::catalog::{CatalogColumns, EarthquakeCatalog};
use crate::io::configuration::{
    DEFAULT_LATITUDE_COLUMN, DEFAULT_LONGITUDE_COLUMN, DEFAULT_MIN_BOX_SIZE, DEFAULT_NUM_SCALES,
    DEFAULT_TIME_COLUMN, MIN_EVENTS_PER_YEAR, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::report::{summary_line, write_result_json, write_scale_csv, write_yearly_csv};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "seisfractal")]
#[command(
    author,
    version,
    about = "Estimate the box-counting fractal dimension of earthquake catalogs"
)]
/// Command-line arguments for the estimation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input CSV catalog or directory of catalogs
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Smallest box size in degrees
    #[arg(long, default_value_t = DEFAULT_MIN_BOX_SIZE)]
    pub min_box: f64,

    /// Largest box size in degrees (default: a quarter of the smaller spatial range)
    #[arg(long)]
    pub max_box: Option<f64>,

    /// Number of log-spaced box sizes
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_SCALES)]
    pub num_scales: usize,

    /// Latitude column header
    #[arg(long, default_value = DEFAULT_LATITUDE_COLUMN)]
    pub lat_column: String,

    /// Longitude column header
    #[arg(long, default_value = DEFAULT_LONGITUDE_COLUMN)]
    pub lon_column: String,

    /// Event time column header
    #[arg(long, default_value = DEFAULT_TIME_COLUMN)]
    pub time_column: String,

    /// Also estimate D separately for each year
    #[arg(short, long)]
    pub yearly: bool,

    /// Minimum events for a year to enter the yearly series
    #[arg(long, default_value_t = MIN_EVENTS_PER_YEAR)]
    pub min_events: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Estimation options implied by the arguments; details are always kept for the scale table
    pub const fn estimation_options(&self) -> EstimationOptions {
        EstimationOptions {
            min_box_size: self.min_box,
            max_box_size: self.max_box,
            num_scales: self.num_scales,
            return_details: true,
        }
    }

    /// Catalog column names implied by the arguments
    pub fn catalog_columns(&self) -> CatalogColumns {
        CatalogColumns {
            latitude: self.lat_column.clone(),
            longitude: self.lon_column.clone(),
            time: self.time_column.clone(),
        }
    }
}

/// Orchestrates batch processing of catalog files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// A catalog that fails to load or estimate is logged and skipped; the
    /// batch carries on with the next file.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a CSV file or readable directory
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(index, file);
            }

            let status = match self.process_file(file) {
                Ok(summary) => summary,
                Err(error) => {
                    tracing::error!(catalog = %file.display(), %error, "catalog failed");
                    format!("failed: {error}")
                }
            };

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file(index, &status);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Estimate one catalog and write its outputs, returning the summary line
    ///
    /// # Errors
    ///
    /// Returns an error if loading, estimation, or writing any output fails
    pub fn process_file(&self, input_path: &Path) -> Result<String> {
        let catalog = EarthquakeCatalog::from_csv_path(input_path, &self.cli.catalog_columns())?;
        let result = catalog.estimate(&self.cli.estimation_options())?;

        write_result_json(&result, &Self::get_output_path(input_path, "", "json"))?;
        write_scale_csv(&result, &Self::get_output_path(input_path, "_scales", "csv"))?;

        if self.cli.yearly {
            let options = YearlyOptions {
                min_events: self.cli.min_events,
                ..YearlyOptions::default()
            };
            let series = yearly_dimensions(catalog.dated_points(), &options);
            tracing::info!(
                catalog = %input_path.display(),
                years = series.len(),
                "yearly series complete"
            );
            write_yearly_csv(
                &series,
                &Self::get_output_path(input_path, "_yearly", "csv"),
            )?;
        }

        let summary = summary_line(&result);
        tracing::info!(catalog = %input_path.display(), "{summary}");
        for warning in &result.warnings {
            tracing::warn!(catalog = %input_path.display(), "{warning}");
        }
        Ok(summary)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_csv(target) {
                Ok(if self.should_process_file(target) {
                    vec![target.clone()]
                } else {
                    vec![]
                })
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a CSV catalog",
                ))
            }
        } else if target.is_dir() {
            let entries =
                std::fs::read_dir(target).map_err(|e| file_system_error(target, "list", e))?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(target, "list", e))?
                    .path();
                if is_csv(&path) && !is_own_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a CSV file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path, "", "json");
        if output_path.exists() {
            tracing::info!(catalog = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    /// Output path beside the input: `<stem>_fractal<extra>.<extension>`
    pub fn get_output_path(input_path: &Path, extra: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}{extra}.{extension}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("csv")
}

fn is_own_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.contains(OUTPUT_SUFFIX))
}
