//! Error types for profile construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Non-finite shape parameter {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid bounds: low ({low}) must be below high ({high})")]
    InvalidBounds { low: f64, high: f64 },

    #[error("Invalid shape parameter {what} = {value}: {reason}")]
    InvalidShape {
        what: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{which} midpoint {radius} lies outside bounds [{low}, {high}]")]
    MidpointOutOfBounds {
        which: &'static str,
        radius: f64,
        low: f64,
        high: f64,
    },

    #[error("Radius axis is not strictly increasing at knot {index}")]
    NonMonotonic { index: usize },

    #[error("Radius axis has {len} knots, expected {expected}")]
    KnotCount { len: usize, expected: usize },
}

pub type ProfileResult<T> = Result<T, ProfileError>;
