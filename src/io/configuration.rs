//! Estimation constants and runtime configuration defaults

// Box-counting defaults
/// Smallest box edge in degrees when none is given
pub const DEFAULT_MIN_BOX_SIZE: f64 = 0.1;

/// Number of log-spaced scales when none is given
pub const DEFAULT_NUM_SCALES: usize = 20;

// Empirical convenience default, not derived from the data's statistics
/// Fraction of the smaller spatial range used as the largest box when none is given
pub const DEFAULT_MAX_BOX_FRACTION: f64 = 0.25;

/// Fewer surviving scales than this marks a fit as low-confidence
pub const MIN_RELIABLE_SCALES: usize = 3;

// Above this the occupancy counter switches from a dense histogram to a sparse cell set
/// Maximum number of cells allocated for a dense 2-D histogram
pub const MAX_HISTOGRAM_CELLS: usize = 4_000_000;

// Yearly analysis settings
/// Years with fewer events than this are left out of the yearly series
pub const MIN_EVENTS_PER_YEAR: usize = 10;
/// Number of scales used for each year's estimate
pub const YEARLY_NUM_SCALES: usize = 15;

// Catalog column names (USGS CSV export)
/// Default latitude column header
pub const DEFAULT_LATITUDE_COLUMN: &str = "latitude";
/// Default longitude column header
pub const DEFAULT_LONGITUDE_COLUMN: &str = "longitude";
/// Default event time column header
pub const DEFAULT_TIME_COLUMN: &str = "time";

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_fractal";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
