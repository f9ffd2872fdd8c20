//! Run lifecycle service layer.
//!
//! This crate is what an optimization driver talks to: it turns a resolved
//! parameter set into a submitted SOLPS case (`Launcher`), and exposes each
//! submitted case as a `RunHandle` that can be polled, cancelled, cleaned
//! up and asked for its output.

pub mod error;
pub mod handle;
pub mod launcher;
pub mod run_service;

pub use error::{AppError, AppResult};
pub use handle::{RunHandle, classify};
pub use launcher::{LaunchSettings, Launcher};
pub use run_service::{count_active, ensure_capacity, poll_all, reattach, slurm_from_settings};

pub use ms_results::{RunRecord, RunStatus, RunStore, SimulationResult};
