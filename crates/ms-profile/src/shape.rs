//! Shape parameters and the radial domain.

use crate::{ProfileError, ProfileResult};
use ms_core::PROFILE_PARAMETER_COUNT;

/// Closed radial interval the profile is defined on. Only constructible
/// through `Bounds::new`, so `low < high` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    low: f64,
    high: f64,
}

impl Bounds {
    pub fn new(low: f64, high: f64) -> ProfileResult<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ProfileError::InvalidBounds { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

/// The nine numbers describing one profile.
///
/// Heights are measured from the barrier level: the left edge sits at
/// `barrier_height + boundary_left`, the left midpoint at
/// `barrier_height + boundary_left * frac_left`, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub boundary_left: f64,
    pub boundary_right: f64,
    pub frac_left: f64,
    pub frac_right: f64,
    pub barrier_centre: f64,
    pub barrier_height: f64,
    pub barrier_width: f64,
    pub gap_left: f64,
    pub gap_right: f64,
}

const NAMES: [&str; PROFILE_PARAMETER_COUNT] = [
    "boundary_left",
    "boundary_right",
    "frac_left",
    "frac_right",
    "barrier_centre",
    "barrier_height",
    "barrier_width",
    "gap_left",
    "gap_right",
];

impl ShapeParams {
    /// Build from values in canonical order, validating each one.
    pub fn from_array(values: [f64; PROFILE_PARAMETER_COUNT]) -> ProfileResult<Self> {
        for (value, what) in values.iter().zip(NAMES) {
            if !value.is_finite() {
                return Err(ProfileError::NonFinite {
                    what,
                    value: *value,
                });
            }
        }

        let [
            boundary_left,
            boundary_right,
            frac_left,
            frac_right,
            barrier_centre,
            barrier_height,
            barrier_width,
            gap_left,
            gap_right,
        ] = values;

        let shape = Self {
            boundary_left,
            boundary_right,
            frac_left,
            frac_right,
            barrier_centre,
            barrier_height,
            barrier_width,
            gap_left,
            gap_right,
        };
        shape.validate()?;
        Ok(shape)
    }

    fn validate(&self) -> ProfileResult<()> {
        let positive = [
            ("barrier_width", self.barrier_width),
            ("gap_left", self.gap_left),
            ("gap_right", self.gap_right),
        ];
        for (what, value) in positive {
            if value <= 0.0 {
                return Err(ProfileError::InvalidShape {
                    what,
                    value,
                    reason: "must be positive",
                });
            }
        }

        let non_negative = [
            ("barrier_height", self.barrier_height),
            ("boundary_left", self.boundary_left),
            ("boundary_right", self.boundary_right),
        ];
        for (what, value) in non_negative {
            if value < 0.0 {
                return Err(ProfileError::InvalidShape {
                    what,
                    value,
                    reason: "must not be negative",
                });
            }
        }

        for (what, value) in [("frac_left", self.frac_left), ("frac_right", self.frac_right)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::InvalidShape {
                    what,
                    value,
                    reason: "must lie in [0, 1]",
                });
            }
        }

        Ok(())
    }

    pub fn left_barrier(&self) -> f64 {
        self.barrier_centre - 0.5 * self.barrier_width
    }

    pub fn right_barrier(&self) -> f64 {
        self.barrier_centre + 0.5 * self.barrier_width
    }

    pub fn left_midpoint(&self) -> f64 {
        self.left_barrier() - self.gap_left
    }

    pub fn right_midpoint(&self) -> f64 {
        self.right_barrier() + self.gap_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> [f64; PROFILE_PARAMETER_COUNT] {
        [2.0, 5.0, 0.5, 0.5, 0.0, 0.05, 0.02, 0.01, 0.01]
    }

    #[test]
    fn knots_follow_barrier_geometry() {
        let shape = ShapeParams::from_array(base()).unwrap();
        assert!((shape.left_barrier() + 0.01).abs() < 1e-15);
        assert!((shape.right_barrier() - 0.01).abs() < 1e-15);
        assert!((shape.left_midpoint() + 0.02).abs() < 1e-15);
        assert!((shape.right_midpoint() - 0.02).abs() < 1e-15);
    }

    #[test]
    fn zero_width_barrier_is_rejected() {
        let mut values = base();
        values[6] = 0.0;
        let err = ShapeParams::from_array(values).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidShape {
                what: "barrier_width",
                ..
            }
        ));
    }

    #[test]
    fn fraction_above_one_is_rejected() {
        let mut values = base();
        values[3] = 1.5;
        assert!(ShapeParams::from_array(values).is_err());
    }

    #[test]
    fn nan_is_rejected_with_name() {
        let mut values = base();
        values[7] = f64::NAN;
        let err = ShapeParams::from_array(values).unwrap_err();
        assert!(err.to_string().contains("gap_left"));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert!(Bounds::new(0.2, -0.2).is_err());
        assert!(Bounds::new(0.1, 0.1).is_err());
        assert!(Bounds::new(f64::NAN, 0.1).is_err());
        assert!(Bounds::new(-0.25, f64::INFINITY).is_err());
    }

    #[test]
    fn accepted_bounds_keep_their_limits() {
        let b = Bounds::new(-0.25, 0.24).unwrap();
        assert_eq!(b.low(), -0.25);
        assert_eq!(b.high(), 0.24);
    }
}
