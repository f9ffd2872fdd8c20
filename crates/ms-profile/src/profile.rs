//! Radius axis and profile value construction.

use crate::{Bounds, ProfileError, ProfileResult, ShapeParams};
use ms_core::{PROFILE_PARAMETER_COUNT, strictly_increasing};

/// Number of knots in every profile.
pub const KNOT_COUNT: usize = 6;

/// Radial knots: domain edges, midpoints and barrier edges.
///
/// Fails if either midpoint falls outside `bounds` or the resulting axis is
/// not strictly increasing. Nothing is clamped.
pub fn radius_axis(shape: &ShapeParams, bounds: Bounds) -> ProfileResult<Vec<f64>> {
    let left_mid = shape.left_midpoint();
    let right_mid = shape.right_midpoint();

    for (which, radius) in [("left", left_mid), ("right", right_mid)] {
        if radius < bounds.low() || radius > bounds.high() {
            return Err(ProfileError::MidpointOutOfBounds {
                which,
                radius,
                low: bounds.low(),
                high: bounds.high(),
            });
        }
    }

    let axis = vec![
        bounds.low(),
        left_mid,
        shape.left_barrier(),
        shape.right_barrier(),
        right_mid,
        bounds.high(),
    ];
    check_axis(&axis, bounds)?;
    Ok(axis)
}

/// Profile values at the knots of `radius`, which must be the axis built
/// from the same shape and bounds.
pub fn profile_values(
    radius: &[f64],
    shape: &ShapeParams,
    bounds: Bounds,
) -> ProfileResult<Vec<f64>> {
    check_axis(radius, bounds)?;

    let h = shape.barrier_height;
    Ok(vec![
        h + shape.boundary_left,
        h + shape.boundary_left * shape.frac_left,
        h,
        h,
        h + shape.boundary_right * shape.frac_right,
        h + shape.boundary_right,
    ])
}

fn check_axis(radius: &[f64], bounds: Bounds) -> ProfileResult<()> {
    if radius.len() != KNOT_COUNT {
        return Err(ProfileError::KnotCount {
            len: radius.len(),
            expected: KNOT_COUNT,
        });
    }
    if radius[0] != bounds.low() || radius[KNOT_COUNT - 1] != bounds.high() {
        return Err(ProfileError::InvalidBounds {
            low: radius[0],
            high: radius[KNOT_COUNT - 1],
        });
    }
    if !strictly_increasing(radius) {
        let index = radius
            .windows(2)
            .position(|w| w[0] >= w[1])
            .map_or(0, |i| i + 1);
        return Err(ProfileError::NonMonotonic { index });
    }
    Ok(())
}

/// An immutable sampled profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    radius: Vec<f64>,
    values: Vec<f64>,
}

impl Profile {
    /// Build a profile from raw shape values in canonical order.
    pub fn build(params: [f64; PROFILE_PARAMETER_COUNT], bounds: Bounds) -> ProfileResult<Self> {
        let shape = ShapeParams::from_array(params)?;
        let radius = radius_axis(&shape, bounds)?;
        let values = profile_values(&radius, &shape, bounds)?;
        Ok(Self { radius, values })
    }

    pub fn radius(&self) -> &[f64] {
        &self.radius
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }

    /// (radius, value) pairs in radial order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.radius.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(-0.25, 0.24).unwrap()
    }

    fn shape() -> ShapeParams {
        ShapeParams::from_array([2.0, 5.0, 0.5, 0.25, 0.0, 0.05, 0.02, 0.01, 0.01]).unwrap()
    }

    #[test]
    fn axis_has_six_increasing_knots() {
        let axis = radius_axis(&shape(), bounds()).unwrap();
        assert_eq!(axis.len(), KNOT_COUNT);
        assert_eq!(axis[0], -0.25);
        assert_eq!(axis[5], 0.24);
        assert!(strictly_increasing(&axis));
    }

    #[test]
    fn values_step_down_to_barrier() {
        let axis = radius_axis(&shape(), bounds()).unwrap();
        let values = profile_values(&axis, &shape(), bounds()).unwrap();
        let expected = [2.05, 1.05, 0.05, 0.05, 1.3, 5.05];
        for (got, want) in values.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
    }

    #[test]
    fn midpoint_outside_bounds_fails() {
        let mut s = shape();
        s.barrier_centre = 0.23;
        let err = radius_axis(&s, bounds()).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::MidpointOutOfBounds { which: "right", .. }
        ));
    }

    #[test]
    fn midpoint_on_bound_is_non_monotonic() {
        let b = Bounds::new(-0.02, 0.24).unwrap();
        let err = radius_axis(&shape(), b).unwrap_err();
        assert_eq!(err, ProfileError::NonMonotonic { index: 1 });
    }

    #[test]
    fn values_reject_foreign_axis() {
        let err = profile_values(&[0.0, 1.0], &shape(), bounds()).unwrap_err();
        assert!(matches!(err, ProfileError::KnotCount { len: 2, .. }));
    }

    #[test]
    fn profile_points_pair_radius_and_value() {
        let profile =
            Profile::build([2.0, 5.0, 0.5, 0.25, 0.0, 0.05, 0.02, 0.01, 0.01], bounds()).unwrap();
        let first = profile.points().next().unwrap();
        assert_eq!(first.0, -0.25);
        assert!((first.1 - 2.05).abs() < 1e-12);
        assert_eq!(profile.len(), profile.values().len());
    }
}
