//! Repository layout checks

mod coverage;
