//! A submitted run and its lifecycle state machine.
//!
//! `running` is the only non-terminal state. Status is never stored; it is
//! derived on every call from the scheduler queue, the clock and whether
//! the result artifact exists, so polling has no side effects.

use chrono::{DateTime, Utc};
use ms_case::layout::{RESULT_ARTIFACT, is_allow_listed};
use ms_core::JobId;
use ms_results::{RunRecord, RunStatus, SimulationResult};
use ms_sched::{JobQueue, Scheduler};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{AppError, AppResult};

/// Map the three observations onto a run status.
///
/// A job that has left the queue is complete if it produced its artifact.
/// Without the artifact it crashed, unless it is past its timeout: then it
/// stays timed out, so cancelling a timed-out run does not turn it into a
/// crash on the next poll. A queued job past its timeout is timed out even
/// though the scheduler still runs it.
pub fn classify(in_queue: bool, artifact_exists: bool, overdue: bool) -> RunStatus {
    match (in_queue, artifact_exists, overdue) {
        (false, true, _) => RunStatus::Complete,
        (false, false, true) => RunStatus::TimedOut,
        (false, false, false) => RunStatus::Crashed,
        (true, _, true) => RunStatus::TimedOut,
        (true, _, false) => RunStatus::Running,
    }
}

#[derive(Clone)]
pub struct RunHandle {
    record: RunRecord,
    scheduler: Arc<dyn Scheduler>,
}

impl std::fmt::Debug for RunHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunHandle")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl RunHandle {
    pub fn new(record: RunRecord, scheduler: Arc<dyn Scheduler>) -> Self {
        Self { record, scheduler }
    }

    pub fn record(&self) -> &RunRecord {
        &self.record
    }

    pub fn run_number(&self) -> u32 {
        self.record.run_number
    }

    pub fn job_id(&self) -> &JobId {
        &self.record.job_id
    }

    pub fn directory(&self) -> &Path {
        &self.record.directory
    }

    pub fn result_path(&self) -> PathBuf {
        self.record.directory.join(RESULT_ARTIFACT)
    }

    /// Query the scheduler and classify the run. Query failures are
    /// returned, never treated as "still running".
    pub fn status(&self) -> AppResult<RunStatus> {
        let queue = self.scheduler.queue()?;
        Ok(self.status_at(&queue, Utc::now()))
    }

    /// Classify against an existing queue snapshot and a given time.
    pub fn status_at(&self, queue: &JobQueue, now: DateTime<Utc>) -> RunStatus {
        classify(
            queue.contains(&self.record.job_id),
            self.result_path().is_file(),
            self.record.is_overdue(now),
        )
    }

    /// Ask the scheduler to cancel the job. Safe on finished jobs.
    pub fn cancel(&self) -> AppResult<()> {
        self.scheduler.cancel(&self.record.job_id)?;
        Ok(())
    }

    /// Delete every regular file in the run directory that is not on the
    /// allow-list. The directory itself and subdirectories are kept.
    /// Returns the removed paths.
    pub fn cleanup(&self) -> AppResult<Vec<PathBuf>> {
        let dir = self.directory();
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| AppError::Io { path, source }
        };

        let mut removed = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err(dir))? {
            let entry = entry.map_err(io_err(dir))?;
            let path = entry.path();
            let is_file = entry.file_type().map_err(io_err(&path))?.is_file();
            if !is_file || is_allow_listed(&entry.file_name().to_string_lossy()) {
                continue;
            }
            fs::remove_file(&path).map_err(io_err(&path))?;
            removed.push(path);
        }

        removed.sort();
        tracing::info!(
            run = self.record.run_number,
            removed = removed.len(),
            "cleaned run directory"
        );
        Ok(removed)
    }

    /// Handle to the result artifact. Fails if the file does not exist; its
    /// contents are not checked.
    pub fn get_results(&self) -> AppResult<SimulationResult> {
        let path = self.result_path();
        if !path.is_file() {
            return Err(AppError::ResultNotFound { path });
        }
        Ok(SimulationResult::new(path))
    }
}
