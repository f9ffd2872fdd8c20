//! Canonical parameter names and resolved parameter sets.

use crate::{CoreError, CoreResult, ensure_finite};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Number of shape parameters driving one transport profile.
pub const PROFILE_PARAMETER_COUNT: usize = 9;

/// Parameters of the thermal conductivity (chi) profile, in shape order.
pub const CONDUCTIVITY_PROFILE: [&str; PROFILE_PARAMETER_COUNT] = [
    "chi_boundary_left",
    "chi_boundary_right",
    "chi_frac_left",
    "chi_frac_right",
    "chi_barrier_centre",
    "chi_barrier_height",
    "chi_barrier_width",
    "chi_gap_left",
    "chi_gap_right",
];

/// Parameters of the particle diffusivity (D) profile, in shape order.
pub const DIFFUSIVITY_PROFILE: [&str; PROFILE_PARAMETER_COUNT] = [
    "D_boundary_left",
    "D_boundary_right",
    "D_frac_left",
    "D_frac_right",
    "D_barrier_centre",
    "D_barrier_height",
    "D_barrier_width",
    "D_gap_left",
    "D_gap_right",
];

/// Names every case must supply. Anything else is optional and has to be
/// resolved through template substitution.
pub fn required_parameters() -> BTreeSet<&'static str> {
    CONDUCTIVITY_PROFILE
        .iter()
        .chain(DIFFUSIVITY_PROFILE.iter())
        .copied()
        .collect()
}

pub fn is_required(name: &str) -> bool {
    CONDUCTIVITY_PROFILE.contains(&name) || DIFFUSIVITY_PROFILE.contains(&name)
}

/// Concrete values used for one run. Ordered by name so that iteration,
/// serialization and hashing are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, f64>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, rejecting NaN and infinities.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> CoreResult<()> {
        let name = name.into();
        ensure_finite(value, &name)?;
        self.0.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn require(&self, name: &str) -> CoreResult<f64> {
        self.get(name).ok_or_else(|| CoreError::MissingParameter {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names present in this set that are not required parameters.
    pub fn optional_names(&self) -> BTreeSet<String> {
        self.names()
            .filter(|name| !is_required(name))
            .map(str::to_string)
            .collect()
    }

    /// Required names absent from this set.
    pub fn missing_required(&self) -> Vec<&'static str> {
        required_parameters()
            .into_iter()
            .filter(|name| !self.contains(name))
            .collect()
    }

    /// Gather the values of one profile's parameters in shape order.
    pub fn profile_values(
        &self,
        names: &[&str; PROFILE_PARAMETER_COUNT],
    ) -> CoreResult<[f64; PROFILE_PARAMETER_COUNT]> {
        let mut values = [0.0; PROFILE_PARAMETER_COUNT];
        for (slot, name) in values.iter_mut().zip(names.iter()) {
            *slot = self.require(name)?;
        }
        Ok(values)
    }
}

impl FromIterator<(String, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> ParameterSet {
        required_parameters()
            .into_iter()
            .map(|n| (n.to_string(), 0.01))
            .collect()
    }

    #[test]
    fn required_parameters_cover_both_profiles() {
        let required = required_parameters();
        assert_eq!(required.len(), 2 * PROFILE_PARAMETER_COUNT);
        assert!(required.contains("chi_gap_right"));
        assert!(required.contains("D_barrier_centre"));
    }

    #[test]
    fn optional_names_exclude_required() {
        let mut params = full_set();
        params.insert("ne_core", 2.5e19).unwrap();
        let optional = params.optional_names();
        assert_eq!(optional.len(), 1);
        assert!(optional.contains("ne_core"));
        assert!(params.missing_required().is_empty());
    }

    #[test]
    fn profile_values_follow_shape_order() {
        let mut params = full_set();
        params.insert("chi_boundary_left", 3.0).unwrap();
        params.insert("chi_gap_right", 0.02).unwrap();
        let values = params.profile_values(&CONDUCTIVITY_PROFILE).unwrap();
        assert_eq!(values[0], 3.0);
        assert_eq!(values[8], 0.02);
    }

    #[test]
    fn missing_profile_value_is_reported() {
        let params = ParameterSet::new();
        let err = params.profile_values(&DIFFUSIVITY_PROFILE).unwrap_err();
        assert!(err.to_string().contains("D_boundary_left"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut params = ParameterSet::new();
        assert!(params.insert("x", f64::INFINITY).is_err());
        assert!(params.is_empty());
    }
}
