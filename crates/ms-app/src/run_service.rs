//! Helpers for drivers managing many runs at once.

use chrono::Utc;
use ms_config::SchedulerDef;
use ms_results::{RunStatus, RunStore};
use ms_sched::{JobQueue, Scheduler, SlurmCli, SlurmCommands};
use std::sync::Arc;

use crate::error::AppResult;
use crate::handle::RunHandle;

pub fn slurm_from_settings(def: &SchedulerDef) -> SlurmCli {
    SlurmCli::new(SlurmCommands {
        submit: def.submit_command.clone(),
        queue: def.queue_command.clone(),
        cancel: def.cancel_command.clone(),
        user: def.user.clone(),
    })
}

/// Rebuild handles for every stored run, e.g. after a driver restart.
pub fn reattach(store: &RunStore, scheduler: Arc<dyn Scheduler>) -> AppResult<Vec<RunHandle>> {
    let handles = store
        .list_records()?
        .into_iter()
        .map(|record| RunHandle::new(record, Arc::clone(&scheduler)))
        .collect();
    Ok(handles)
}

/// Status of every handle from a single queue query.
pub fn poll_all(
    handles: &[RunHandle],
    scheduler: &dyn Scheduler,
) -> AppResult<Vec<(u32, RunStatus)>> {
    let queue = scheduler.queue()?;
    let now = Utc::now();
    Ok(handles
        .iter()
        .map(|h| (h.run_number(), h.status_at(&queue, now)))
        .collect())
}

/// Number of handles whose job still holds the scheduler: running, or
/// timed out but not yet gone from the queue.
pub fn count_active(handles: &[RunHandle], queue: &JobQueue) -> usize {
    handles
        .iter()
        .filter(|h| queue.contains(h.job_id()))
        .count()
}

/// Refuse another launch once `limit` runs are active.
pub fn ensure_capacity(active: usize, limit: usize) -> AppResult<()> {
    if active >= limit {
        return Err(crate::error::AppError::ConcurrencyLimit { active, limit });
    }
    Ok(())
}
