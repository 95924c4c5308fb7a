//! Tests for the yearly dimension series

#[cfg(test)]
mod tests {
    use seisfractal::analysis::temporal::{DatedPoint, YearlyOptions, yearly_dimensions};

    fn diagonal_year(year: i32, n: usize, step: f64) -> Vec<DatedPoint> {
        (0..n)
            .map(|i| {
                let t = i as f64 * step;
                DatedPoint {
                    year,
                    latitude: t,
                    longitude: 2.0 * t,
                }
            })
            .collect()
    }

    // Tests defaults follow the yearly analysis settings
    // Verified by changing the yearly scale count
    #[test]
    fn test_default_yearly_options() {
        let options = YearlyOptions::default();
        assert_eq!(options.min_events, 10);
        assert_eq!(options.estimation.num_scales, 15);
        assert!((options.estimation.min_box_size - 0.1).abs() < f64::EPSILON);
        assert_eq!(options.estimation.max_box_size, None);
    }

    // Tests years are sorted and sparse years are skipped
    // Verified by including years below the event threshold
    #[test]
    fn test_years_sorted_and_filtered() {
        let mut events = diagonal_year(2021, 30, 0.5);
        events.extend(diagonal_year(2019, 25, 0.5));
        events.extend(diagonal_year(2020, 4, 0.5));

        let series = yearly_dimensions(events, &YearlyOptions::default());
        let years: Vec<i32> = series.iter().map(|row| row.year).collect();
        assert_eq!(years, vec![2019, 2021]);

        let counts: Vec<usize> = series.iter().map(|row| row.n_events).collect();
        assert_eq!(counts, vec![25, 30]);
    }

    // Tests a line of epicenters has dimension close to one
    // Verified by negating the fitted slope twice
    #[test]
    fn test_linear_cluster_dimension() {
        let series = yearly_dimensions(diagonal_year(2000, 200, 0.01), &YearlyOptions::default());
        let Some(row) = series.first() else {
            unreachable!("one year expected");
        };
        assert!(
            (row.dimension - 1.0).abs() < 0.25,
            "expected D near 1, got {}",
            row.dimension
        );
    }

    // Tests a year whose estimate fails is dropped without aborting the series
    // Verified by propagating the first estimation error
    #[test]
    fn test_failing_year_skipped() {
        let mut events = diagonal_year(2010, 20, 0.5);
        // Identical epicenters give a zero spatial range and no usable maximum box size
        events.extend((0..20).map(|_| DatedPoint {
            year: 2011,
            latitude: 5.0,
            longitude: 5.0,
        }));

        let series = yearly_dimensions(events, &YearlyOptions::default());
        let years: Vec<i32> = series.iter().map(|row| row.year).collect();
        assert_eq!(years, vec![2010]);
    }

    // Tests the event threshold is configurable
    // Verified by ignoring the option in favour of the constant
    #[test]
    fn test_custom_min_events() {
        let options = YearlyOptions {
            min_events: 50,
            ..YearlyOptions::default()
        };
        let series = yearly_dimensions(diagonal_year(1999, 30, 0.5), &options);
        assert!(series.is_empty());
    }
}
