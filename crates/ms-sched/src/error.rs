//! Error types for scheduler interaction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Submission failed (exit status {status}): {stderr}")]
    Submission { status: String, stderr: String },

    #[error("Submission output has no job id after '{marker}': {output}")]
    MissingJobId { marker: &'static str, output: String },

    #[error("Queue query failed (exit status {status}): {stderr}")]
    Query { status: String, stderr: String },

    #[error("Could not determine scheduler user: {message}")]
    User { message: String },

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
