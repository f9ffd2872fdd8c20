//! Settings validation and parameter resolution.

use crate::schema::{LATEST_VERSION, ParameterSpace, ParameterSpec, Settings};
use ms_core::{ParameterSet, required_parameters};
use std::collections::BTreeMap;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Missing required parameters: {}", .names.join(", "))]
    MissingParameters { names: Vec<String> },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown parameter: {name}")]
    UnknownParameter { name: String },

    #[error("No value supplied for ranged parameter: {name}")]
    MissingCandidate { name: String },

    #[error("Value for {name} ({value}) outside [{low}, {high}]")]
    OutOfRange {
        name: String,
        value: f64,
        low: f64,
        high: f64,
    },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_settings(settings: &Settings) -> Result<(), ValidationError> {
    if settings.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: settings.version,
        });
    }

    let [low, high] = settings.transport_profile_bounds;
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(invalid(
            "transport_profile_bounds",
            format!("[{low}, {high}]"),
            "low must be finite and below high",
        ));
    }

    if settings.n_proc == 0 {
        return Err(invalid("n_proc", settings.n_proc, "must be at least 1"));
    }
    if settings.memory_gb == 0 {
        return Err(invalid("memory_gb", settings.memory_gb, "must be at least 1"));
    }
    if !settings.timeout_hours.is_finite() || settings.timeout_hours <= 0.0 {
        return Err(invalid(
            "timeout_hours",
            settings.timeout_hours,
            "must be positive",
        ));
    }
    if settings.max_concurrent_runs == 0 {
        return Err(invalid(
            "max_concurrent_runs",
            settings.max_concurrent_runs,
            "must be at least 1",
        ));
    }
    if settings.scheduler.submit_command.trim().is_empty() {
        return Err(invalid("scheduler.submit_command", "", "must not be empty"));
    }

    validate_parameters(&settings.parameters)
}

pub fn validate_parameters(space: &ParameterSpace) -> Result<(), ValidationError> {
    let missing: Vec<String> = required_parameters()
        .into_iter()
        .filter(|name| space.get(name).is_none())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingParameters { names: missing });
    }

    for (name, spec) in space.iter() {
        match spec {
            ParameterSpec::Fixed(value) if !value.is_finite() => {
                return Err(invalid(name, value, "must be finite"));
            }
            ParameterSpec::Ranged(low, high)
                if !low.is_finite() || !high.is_finite() || low >= high =>
            {
                return Err(invalid(
                    name,
                    format!("[{low}, {high}]"),
                    "range must be finite with low below high",
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

impl ParameterSpace {
    /// Combine fixed values with an optimizer candidate for the ranged ones.
    ///
    /// Every ranged name must be supplied and lie within its bounds; names
    /// that are not ranged parameters are rejected.
    pub fn resolve(&self, candidate: &BTreeMap<String, f64>) -> Result<ParameterSet, ValidationError> {
        for name in candidate.keys() {
            match self.get(name) {
                Some(ParameterSpec::Ranged(..)) => {}
                Some(ParameterSpec::Fixed(_)) => {
                    return Err(invalid(name, candidate[name], "parameter is fixed"));
                }
                None => {
                    return Err(ValidationError::UnknownParameter { name: name.clone() });
                }
            }
        }

        let mut resolved = ParameterSet::new();
        for (name, spec) in self.iter() {
            let value = match spec {
                ParameterSpec::Fixed(value) => value,
                ParameterSpec::Ranged(low, high) => {
                    let value = *candidate
                        .get(name)
                        .ok_or_else(|| ValidationError::MissingCandidate {
                            name: name.to_string(),
                        })?;
                    if !(low..=high).contains(&value) {
                        return Err(ValidationError::OutOfRange {
                            name: name.to_string(),
                            value,
                            low,
                            high,
                        });
                    }
                    value
                }
            };
            resolved
                .insert(name, value)
                .map_err(|e| invalid(name, value, &e.to_string()))?;
        }
        Ok(resolved)
    }
}
