//! Case materialization and submission.

use chrono::Utc;
use ms_case::layout::{TRANSPORT_INPUT_FILE, case_directory_name};
use ms_case::{TransportInput, build_case, write_transport_inputfile};
use ms_config::Settings;
use ms_core::{CONDUCTIVITY_PROFILE, DIFFUSIVITY_PROFILE, ParameterSet};
use ms_profile::{Bounds, Profile};
use ms_results::RunRecord;
use ms_sched::{ResourceRequest, Scheduler};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::AppResult;
use crate::handle::RunHandle;

/// The subset of the settings a launch needs, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSettings {
    pub reference_directory: PathBuf,
    pub bounds: Bounds,
    pub set_div_transport: bool,
    pub resources: ResourceRequest,
    pub timeout_hours: f64,
}

impl LaunchSettings {
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let [low, high] = settings.transport_profile_bounds;
        Ok(Self {
            reference_directory: settings.reference_directory.clone(),
            bounds: Bounds::new(low, high)?,
            set_div_transport: settings.set_div_transport,
            resources: ResourceRequest {
                n_proc: settings.n_proc,
                memory_gb: settings.memory_gb,
            },
            timeout_hours: settings.timeout_hours,
        })
    }
}

pub struct Launcher {
    settings: LaunchSettings,
    scheduler: Arc<dyn Scheduler>,
}

impl Launcher {
    pub fn new(settings: LaunchSettings, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            settings,
            scheduler,
        }
    }

    pub fn settings(&self) -> &LaunchSettings {
        &self.settings
    }

    /// Build `<simulations_directory>/run_<run_number>`, write its transport
    /// profiles and submit it.
    ///
    /// Profiles are validated before anything touches the disk. A failure
    /// after the case directory exists leaves it in place and submits
    /// nothing. The submit command runs in the case directory as a child
    /// process; this process's working directory is never changed.
    pub fn launch(
        &self,
        run_number: u32,
        simulations_directory: &Path,
        parameters: &ParameterSet,
    ) -> AppResult<RunHandle> {
        let bounds = self.settings.bounds;
        let chi = Profile::build(parameters.profile_values(&CONDUCTIVITY_PROFILE)?, bounds)?;
        let d = Profile::build(parameters.profile_values(&DIFFUSIVITY_PROFILE)?, bounds)?;

        let case_directory = simulations_directory.join(case_directory_name(run_number));
        build_case(&self.settings.reference_directory, &case_directory, parameters)?;

        write_transport_inputfile(
            &case_directory.join(TRANSPORT_INPUT_FILE),
            &TransportInput {
                dperp: &d,
                chieperp: &chi,
                chiiperp: &chi,
                set_ana_visc_dperp: false,
                no_pflux: true,
                no_div: self.settings.set_div_transport,
            },
        )?;

        let job_id = self
            .scheduler
            .submit(&case_directory, &self.settings.resources)?;

        tracing::info!(run = run_number, %job_id, case = %case_directory.display(), "launched run");

        let record = RunRecord::new(
            run_number,
            case_directory,
            Utc::now(),
            job_id,
            self.settings.timeout_hours,
            parameters.clone(),
        );
        Ok(RunHandle::new(record, Arc::clone(&self.scheduler)))
    }
}
