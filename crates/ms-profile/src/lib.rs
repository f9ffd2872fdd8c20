//! Piecewise-linear transport profiles.
//!
//! A profile is sampled at six radial knots: the two domain edges, two
//! midpoints and the two edges of a transport barrier. Everything here is
//! pure; identical inputs give bit-identical output.

pub mod error;
pub mod profile;
pub mod shape;

pub use error::{ProfileError, ProfileResult};
pub use profile::{Profile, profile_values, radius_axis};
pub use shape::{Bounds, ShapeParams};
