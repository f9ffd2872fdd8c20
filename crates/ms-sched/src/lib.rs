//! Batch scheduler interface.
//!
//! The run manager only needs three things from a scheduler: submit a case,
//! list the jobs still queued or running, and cancel a job. `Scheduler`
//! captures exactly that so the Slurm command-line adapter can be replaced
//! by a structured client without touching the run state machine.

pub mod error;
pub mod queue;
pub mod slurm;
pub mod submit;

pub use error::{SchedulerError, SchedulerResult};
pub use queue::JobQueue;
pub use slurm::{SlurmCli, SlurmCommands};
pub use submit::{ResourceRequest, SUBMISSION_MARKER, parse_submission};

use ms_core::JobId;
use std::path::Path;

pub trait Scheduler: Send + Sync {
    /// Submit the case in `case_directory` and return its job id.
    fn submit(&self, case_directory: &Path, resources: &ResourceRequest) -> SchedulerResult<JobId>;

    /// Snapshot of the jobs the scheduler still holds for this user.
    fn queue(&self) -> SchedulerResult<JobQueue>;

    /// Ask the scheduler to cancel `job_id`. Does not wait for the job to
    /// stop, and cancelling a finished job is not an error.
    fn cancel(&self, job_id: &JobId) -> SchedulerResult<()>;
}
