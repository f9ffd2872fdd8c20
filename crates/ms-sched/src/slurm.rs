//! Slurm adapter driving the scheduler through its command-line tools.

use crate::{JobQueue, ResourceRequest, Scheduler, SchedulerError, SchedulerResult, parse_submission};
use ms_core::JobId;
use std::path::Path;
use std::process::{Command, Output};

/// Shell commands used to talk to Slurm.
#[derive(Debug, Clone, PartialEq)]
pub struct SlurmCommands {
    /// Run inside the case directory; resource flags are appended.
    pub submit: String,
    /// `-u <user>` is appended.
    pub queue: String,
    /// The job id is appended.
    pub cancel: String,
    /// Queue owner. Falls back to `whoami` when unset.
    pub user: Option<String>,
}

impl Default for SlurmCommands {
    fn default() -> Self {
        Self {
            submit: "itmsubmit".to_string(),
            queue: "squeue -h -o %i".to_string(),
            cancel: "scancel".to_string(),
            user: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlurmCli {
    commands: SlurmCommands,
}

impl SlurmCli {
    pub fn new(commands: SlurmCommands) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &SlurmCommands {
        &self.commands
    }

    fn user(&self) -> SchedulerResult<String> {
        if let Some(user) = &self.commands.user {
            return Ok(user.clone());
        }
        let output = run_shell("whoami", None)?;
        let user = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() || user.is_empty() {
            return Err(SchedulerError::User {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(user)
    }
}

/// Run `command` through `sh -c`. With `dir` set, only the child runs
/// there; this process's working directory is never touched.
fn run_shell(command: &str, dir: Option<&Path>) -> SchedulerResult<Output> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    cmd.output().map_err(|source| SchedulerError::Spawn {
        command: command.to_string(),
        source,
    })
}

impl Scheduler for SlurmCli {
    fn submit(&self, case_directory: &Path, resources: &ResourceRequest) -> SchedulerResult<JobId> {
        let command = match resources.submit_flags() {
            Some(flags) => format!("{} {}", self.commands.submit, flags),
            None => self.commands.submit.clone(),
        };
        tracing::debug!(%command, case = %case_directory.display(), "submitting case");

        let output = run_shell(&command, Some(case_directory))?;
        if !output.status.success() {
            return Err(SchedulerError::Submission {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let job_id = parse_submission(&String::from_utf8_lossy(&output.stdout))?;
        tracing::info!(%job_id, case = %case_directory.display(), "submitted job");
        Ok(job_id)
    }

    fn queue(&self) -> SchedulerResult<JobQueue> {
        let command = format!("{} -u {}", self.commands.queue, self.user()?);
        let output = run_shell(&command, None)?;
        if !output.status.success() {
            return Err(SchedulerError::Query {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let queue = JobQueue::parse(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(jobs = queue.len(), "queried job queue");
        Ok(queue)
    }

    fn cancel(&self, job_id: &JobId) -> SchedulerResult<()> {
        let command = format!("{} {}", self.commands.cancel, job_id);
        let output = run_shell(&command, None)?;
        if output.status.success() {
            tracing::info!(%job_id, "cancelled job");
        } else {
            tracing::warn!(
                %job_id,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "cancel command failed"
            );
        }
        Ok(())
    }
}
