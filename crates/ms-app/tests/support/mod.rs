//! In-memory scheduler and fixture helpers shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use ms_core::{JobId, ParameterSet};
use ms_sched::{
    JobQueue, ResourceRequest, Scheduler, SchedulerError, SchedulerResult, parse_submission,
};

pub fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

/// Scheduler that answers from canned text instead of running commands.
pub struct ScriptedScheduler {
    pub acknowledgement: String,
    pub listing: Mutex<Option<String>>,
    pub submitted: Mutex<Vec<(PathBuf, ResourceRequest)>>,
    pub cancelled: Mutex<Vec<JobId>>,
}

impl ScriptedScheduler {
    pub fn new(acknowledgement: &str) -> Self {
        Self {
            acknowledgement: acknowledgement.to_string(),
            listing: Mutex::new(Some(String::new())),
            submitted: Mutex::new(Vec::new()),
            cancelled: Mutex::new(Vec::new()),
        }
    }

    /// `None` makes the next queue queries fail.
    pub fn set_listing(&self, listing: Option<&str>) {
        *self.listing.lock().unwrap() = listing.map(str::to_string);
    }
}

impl Scheduler for ScriptedScheduler {
    fn submit(&self, case_directory: &Path, resources: &ResourceRequest) -> SchedulerResult<JobId> {
        let job_id = parse_submission(&self.acknowledgement)?;
        self.submitted
            .lock()
            .unwrap()
            .push((case_directory.to_path_buf(), *resources));
        Ok(job_id)
    }

    fn queue(&self) -> SchedulerResult<JobQueue> {
        match self.listing.lock().unwrap().as_deref() {
            Some(listing) => Ok(JobQueue::parse(listing)),
            None => Err(SchedulerError::Query {
                status: "exit status: 1".to_string(),
                stderr: "slurm_load_jobs error: Unable to contact slurm controller".to_string(),
            }),
        }
    }

    fn cancel(&self, job_id: &JobId) -> SchedulerResult<()> {
        self.cancelled.lock().unwrap().push(job_id.clone());
        Ok(())
    }
}

/// Reference case with a base state and two auxiliary files.
pub fn reference_dir(root: &Path) -> PathBuf {
    let dir = root.join("ref_clean");
    fs::create_dir_all(&dir).expect("failed to create reference dir");
    fs::write(dir.join("b2fstate"), "converged state").unwrap();
    fs::write(dir.join("input.dat"), "eirene input").unwrap();
    fs::write(dir.join("b2mn.dat"), "'b2mndr_ntim' '100'\n").unwrap();
    dir
}

/// A valid value for every required parameter.
pub fn required_parameters() -> ParameterSet {
    let shape = [2.0, 5.0, 0.5, 0.5, 0.0, 0.05, 0.02, 0.01, 0.01];
    let mut params = ParameterSet::new();
    for (i, value) in shape.iter().enumerate() {
        params
            .insert(ms_core::CONDUCTIVITY_PROFILE[i], *value)
            .unwrap();
        params
            .insert(ms_core::DIFFUSIVITY_PROFILE[i], value * 0.5)
            .unwrap();
    }
    params
}
