//! Error types for the ms-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the errors of the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Settings error: {0}")]
    Config(#[from] ms_config::ConfigError),

    #[error("Parameter validation failed: {0}")]
    Validation(#[from] ms_config::ValidationError),

    #[error("Parameter error: {0}")]
    Parameter(#[from] ms_core::CoreError),

    #[error("Profile error: {0}")]
    Profile(#[from] ms_profile::ProfileError),

    #[error("Case error: {0}")]
    Case(#[from] ms_case::CaseError),

    #[error("Scheduler error: {0}")]
    Scheduler(#[from] ms_sched::SchedulerError),

    #[error("Results error: {0}")]
    Results(#[from] ms_results::ResultsError),

    #[error("Result artifact not found: {}", .path.display())]
    ResultNotFound { path: PathBuf },

    #[error("Too many active runs: {active} of {limit}")]
    ConcurrencyLimit { active: usize, limit: usize },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for ms-app operations.
pub type AppResult<T> = Result<T, AppError>;
