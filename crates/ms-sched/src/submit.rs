use crate::{SchedulerError, SchedulerResult};
use ms_core::JobId;

/// Literal the scheduler prints in front of a new job id.
pub const SUBMISSION_MARKER: &str = "Submitted batch job";

/// Compute resources requested for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRequest {
    pub n_proc: u32,
    pub memory_gb: u32,
}

impl ResourceRequest {
    /// Extra submit flags. A serial run takes the submit script's defaults.
    pub fn submit_flags(&self) -> Option<String> {
        if self.n_proc <= 1 {
            None
        } else {
            Some(format!(
                "-m \"-np {}\" -M {}GB",
                self.n_proc, self.memory_gb
            ))
        }
    }
}

/// Extract the job id from a submission acknowledgement.
pub fn parse_submission(output: &str) -> SchedulerResult<JobId> {
    output
        .find(SUBMISSION_MARKER)
        .and_then(|at| {
            output[at + SUBMISSION_MARKER.len()..]
                .split_whitespace()
                .next()
        })
        .and_then(JobId::new)
        .ok_or_else(|| SchedulerError::MissingJobId {
            marker: SUBMISSION_MARKER,
            output: output.trim().to_string(),
        })
}
