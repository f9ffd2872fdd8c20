//! Settings schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub version: u32,
    /// Converged reference case the new cases are built from.
    pub reference_directory: PathBuf,
    /// Parent of every `run_<n>` case directory.
    pub simulations_directory: PathBuf,
    /// Radial domain `[low, high]` of the transport profiles.
    pub transport_profile_bounds: [f64; 2],
    #[serde(default)]
    pub set_div_transport: bool,
    #[serde(default = "default_n_proc")]
    pub n_proc: u32,
    #[serde(default = "default_memory_gb")]
    pub memory_gb: u32,
    #[serde(default = "default_timeout_hours")]
    pub timeout_hours: f64,
    #[serde(default = "default_max_concurrent_runs")]
    pub max_concurrent_runs: u32,
    #[serde(default)]
    pub scheduler: SchedulerDef,
    pub parameters: ParameterSpace,
}

fn default_n_proc() -> u32 {
    1
}

fn default_memory_gb() -> u32 {
    20
}

fn default_timeout_hours() -> f64 {
    24.0
}

fn default_max_concurrent_runs() -> u32 {
    4
}

impl Settings {
    pub fn resolve_relative_to(&mut self, base: &Path) {
        if self.reference_directory.is_relative() {
            self.reference_directory = base.join(&self.reference_directory);
        }
        if self.simulations_directory.is_relative() {
            self.simulations_directory = base.join(&self.simulations_directory);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchedulerDef {
    #[serde(default = "default_submit_command")]
    pub submit_command: String,
    #[serde(default = "default_queue_command")]
    pub queue_command: String,
    #[serde(default = "default_cancel_command")]
    pub cancel_command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

fn default_submit_command() -> String {
    "itmsubmit".to_string()
}

fn default_queue_command() -> String {
    "squeue -h -o %i".to_string()
}

fn default_cancel_command() -> String {
    "scancel".to_string()
}

impl Default for SchedulerDef {
    fn default() -> Self {
        Self {
            submit_command: default_submit_command(),
            queue_command: default_queue_command(),
            cancel_command: default_cancel_command(),
            user: None,
        }
    }
}

/// A parameter is either pinned or left to the optimizer within bounds.
///
/// In YAML a scalar is `Fixed` and a two-element list is `Ranged`:
/// ```yaml
/// chi_barrier_centre: [-0.05, 0.05]
/// D_frac_left: 0.5
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ParameterSpec {
    Fixed(f64),
    Ranged(f64, f64),
}

impl ParameterSpec {
    pub fn is_fixed(&self) -> bool {
        matches!(self, ParameterSpec::Fixed(_))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ParameterSpace(BTreeMap<String, ParameterSpec>);

impl ParameterSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: ParameterSpec) {
        self.0.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<ParameterSpec> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ParameterSpec)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Names the optimizer has to supply, with their bounds.
    pub fn ranged(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.iter().filter_map(|(name, spec)| match spec {
            ParameterSpec::Ranged(low, high) => Some((name, low, high)),
            ParameterSpec::Fixed(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, ParameterSpec)> for ParameterSpace {
    fn from_iter<I: IntoIterator<Item = (String, ParameterSpec)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
