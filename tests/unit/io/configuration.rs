//! Tests for estimation constants

#[cfg(test)]
mod tests {
    use seisfractal::io::configuration::{
        DEFAULT_LATITUDE_COLUMN, DEFAULT_LONGITUDE_COLUMN, DEFAULT_MAX_BOX_FRACTION,
        DEFAULT_MIN_BOX_SIZE, DEFAULT_NUM_SCALES, DEFAULT_TIME_COLUMN, MAX_HISTOGRAM_CELLS,
        MAX_INDIVIDUAL_PROGRESS_BARS, MIN_EVENTS_PER_YEAR, MIN_RELIABLE_SCALES, OUTPUT_SUFFIX,
        YEARLY_NUM_SCALES,
    };

    // Tests box-counting defaults
    // Verified by changing default values
    #[test]
    fn test_box_counting_defaults() {
        assert!((DEFAULT_MIN_BOX_SIZE - 0.1).abs() < f64::EPSILON);
        assert_eq!(DEFAULT_NUM_SCALES, 20);
        assert!((DEFAULT_MAX_BOX_FRACTION - 0.25).abs() < f64::EPSILON);
    }

    // Tests a regression needs at least three scales to be trusted
    // Verified by lowering the threshold to two
    #[test]
    fn test_reliability_threshold() {
        assert_eq!(MIN_RELIABLE_SCALES, 3);
    }

    // Tests the dense histogram cap stays allocatable
    // Verified by raising the cap past a gigabyte of bins
    #[test]
    fn test_histogram_cap() {
        assert!(MAX_HISTOGRAM_CELLS * std::mem::size_of::<u32>() <= 64 * 1024 * 1024);
    }

    // Tests yearly settings
    // Verified by changing yearly constants
    #[test]
    fn test_yearly_settings() {
        assert_eq!(MIN_EVENTS_PER_YEAR, 10);
        assert_eq!(YEARLY_NUM_SCALES, 15);
    }

    // Tests default column names match the USGS export
    // Verified by capitalising a column name
    #[test]
    fn test_column_names() {
        assert_eq!(DEFAULT_LATITUDE_COLUMN, "latitude");
        assert_eq!(DEFAULT_LONGITUDE_COLUMN, "longitude");
        assert_eq!(DEFAULT_TIME_COLUMN, "time");
    }

    // Tests filesystem safety of suffix
    // Verified by adding special character
    #[test]
    fn test_output_suffix_no_special_chars() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }

    // Tests progress bar limit
    // Verified by increasing bar limit
    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
