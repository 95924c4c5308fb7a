//! Tests for the log-log least-squares fit

#[cfg(test)]
mod tests {
    use seisfractal::math::regression::fit_log_log;

    // Tests a perfect two-point fit recovers D = 2 with R² = 1
    // Verified by returning the slope without negation
    #[test]
    fn test_two_point_exact_fit() {
        let Ok(fit) = fit_log_log(&[1.0, 2.0], &[4.0, 1.0]) else {
            unreachable!("valid inputs");
        };

        assert!((fit.dimension - 2.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!(fit.std_error.abs() < f64::EPSILON);
        assert!((fit.intercept - 4.0_f64.log10()).abs() < 1e-12);
        assert_eq!(fit.n_scales, 2);
        assert!(!fit.degenerate);
    }

    // Tests a noiseless power law gives the exponent with zero standard error
    // Verified by omitting the degrees of freedom in the standard error
    #[test]
    fn test_power_law_recovered() {
        let sizes = [0.1, 0.2, 0.4, 0.8, 1.6];
        let counts: Vec<f64> = sizes.iter().map(|s: &f64| 50.0 * s.powf(-1.5)).collect();
        let Ok(fit) = fit_log_log(&sizes, &counts) else {
            unreachable!("valid inputs");
        };

        assert!((fit.dimension - 1.5).abs() < 1e-10);
        assert!((fit.r_squared - 1.0).abs() < 1e-10);
        assert!(fit.std_error < 1e-6);
        assert!((fit.predict_log_count(0.0) - 50.0_f64.log10()).abs() < 1e-10);
        assert!((fit.slope() + 1.5).abs() < 1e-10);
    }

    // Tests slope, R² and standard error against hand-computed values
    // Verified by dividing by n instead of n - 2
    #[test]
    fn test_noisy_fit_statistics() {
        // log10 sizes are 0, 1, 2 and log10 counts are 2, 1.5, 0
        let sizes = [1.0, 10.0, 100.0];
        let counts = [100.0, 10.0_f64.powf(1.5), 1.0];
        let Ok(fit) = fit_log_log(&sizes, &counts) else {
            unreachable!("valid inputs");
        };

        // sxx = 2, sxy = -2, syy = 13/6
        assert!((fit.dimension - 1.0).abs() < 1e-12);
        let expected_r2 = 4.0 / (2.0 * 13.0 / 6.0);
        assert!((fit.r_squared - expected_r2).abs() < 1e-12);
        let expected_se = ((1.0 - expected_r2) * (13.0 / 6.0) / 2.0).sqrt();
        assert!((fit.std_error - expected_se).abs() < 1e-12);
        assert!((fit.intercept - (7.0 / 6.0 + 1.0)).abs() < 1e-12);
    }

    // Tests equal counts give the documented degenerate result instead of NaN
    // Verified by computing r without the zero-variance guard
    #[test]
    fn test_flat_counts_are_degenerate() {
        let Ok(fit) = fit_log_log(&[0.1, 0.5, 1.0, 2.0], &[1.0, 1.0, 1.0, 1.0]) else {
            unreachable!("valid inputs");
        };

        assert!(fit.degenerate);
        assert!(fit.dimension.abs() < f64::EPSILON);
        assert!(fit.dimension.is_sign_positive());
        assert!(fit.r_squared.abs() < f64::EPSILON);
        assert!(fit.std_error.abs() < f64::EPSILON);
        assert!(fit.intercept.abs() < f64::EPSILON);
    }

    // Tests malformed inputs produce errors
    // Verified by removing the length check
    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(fit_log_log(&[1.0, 2.0], &[3.0]).is_err());
        assert!(fit_log_log(&[1.0], &[3.0]).is_err());
        assert!(fit_log_log(&[], &[]).is_err());
        assert!(fit_log_log(&[1.0, 2.0], &[3.0, 0.0]).is_err());
        assert!(fit_log_log(&[-1.0, 2.0], &[3.0, 1.0]).is_err());
        assert!(fit_log_log(&[2.0, 2.0], &[3.0, 1.0]).is_err());
    }
}
