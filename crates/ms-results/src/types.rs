//! Run data types.

use chrono::{DateTime, Duration, Utc};
use ms_core::{JobId, ParameterSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::hash::compute_parameters_hash;
use crate::{ResultsError, ResultsResult};

/// Everything needed to find a submitted run again, possibly from a
/// different process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_number: u32,
    pub directory: PathBuf,
    pub launch_time: DateTime<Utc>,
    pub job_id: JobId,
    pub timeout_hours: f64,
    pub parameters: ParameterSet,
    pub parameters_hash: String,
}

impl RunRecord {
    pub fn new(
        run_number: u32,
        directory: PathBuf,
        launch_time: DateTime<Utc>,
        job_id: JobId,
        timeout_hours: f64,
        parameters: ParameterSet,
    ) -> Self {
        let parameters_hash = compute_parameters_hash(&parameters);
        Self {
            run_number,
            directory,
            launch_time,
            job_id,
            timeout_hours,
            parameters,
            parameters_hash,
        }
    }

    /// Wall time since launch. Negative if `now` precedes the launch.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        now - self.launch_time
    }

    /// `None` when `timeout_hours` is negative, non-finite or too large
    /// for a `Duration`.
    pub fn timeout(&self) -> Option<Duration> {
        let millis = (self.timeout_hours * 3_600_000.0).round();
        if !millis.is_finite() || millis < 0.0 || millis >= i64::MAX as f64 {
            return None;
        }
        Duration::try_milliseconds(millis as i64)
    }

    /// A record without a usable timeout is never overdue; `validate`
    /// rejects such records when they are loaded.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.timeout()
            .is_some_and(|timeout| self.elapsed(now) > timeout)
    }

    /// Checks a record read back from disk: positive representable
    /// timeout, and a fingerprint matching its parameters.
    pub fn validate(&self) -> ResultsResult<()> {
        if self.timeout_hours <= 0.0 || self.timeout().is_none() {
            return Err(ResultsError::InvalidRecord {
                run_number: self.run_number,
                reason: format!("unusable timeout_hours {}", self.timeout_hours),
            });
        }
        if compute_parameters_hash(&self.parameters) != self.parameters_hash {
            return Err(ResultsError::InvalidRecord {
                run_number: self.run_number,
                reason: "parameters_hash does not match parameters".to_string(),
            });
        }
        Ok(())
    }
}

/// Derived state of a run. Recomputed on every inspection, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    Running,
    Complete,
    Crashed,
    TimedOut,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunStatus::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Running => "running",
            RunStatus::Complete => "complete",
            RunStatus::Crashed => "crashed",
            RunStatus::TimedOut => "timed-out",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a finished run's output file, passed on to scoring.
/// The file's contents are never inspected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    path: PathBuf,
}

impl SimulationResult {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
