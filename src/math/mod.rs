//! Mathematical building blocks of the box-counting estimate

/// Ordinary least-squares fit in log-log space
pub mod regression;
/// Log-spaced box size generation
pub mod scales;
