use clap::{Parser, Subcommand};
use ms_app::{
    AppResult, LaunchSettings, Launcher, RunHandle, RunStore, count_active, ensure_capacity,
    poll_all, reattach, slurm_from_settings,
};
use ms_config::Settings;
use ms_sched::Scheduler;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mesa-solps")]
#[command(about = "Launch and track SOLPS runs on a Slurm cluster", long_about = None)]
struct Cli {
    /// Path to the settings YAML file
    #[arg(short, long, default_value = "mesa-solps.yaml")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the settings file
    Validate,
    /// Build and submit a new run
    Launch {
        /// Run number to use (defaults to the next free one)
        #[arg(long)]
        run_number: Option<u32>,
        /// Value for a ranged parameter, e.g. --set chi_barrier_centre=-0.02
        #[arg(long = "set", value_parser = parse_assignment)]
        values: Vec<(String, f64)>,
    },
    /// Show the status of one run, or of every recorded run
    Status {
        run_number: Option<u32>,
    },
    /// Cancel a run's scheduler job
    Cancel {
        run_number: u32,
    },
    /// Remove non-essential files from a run directory
    Cleanup {
        run_number: u32,
    },
    /// Print the result artifact path of a finished run
    Results {
        run_number: u32,
    },
    /// List recorded runs
    Runs,
}

fn parse_assignment(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{}': {e}", name.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate => cmd_validate(&cli.settings),
        Commands::Launch { run_number, values } => cmd_launch(&cli.settings, run_number, values),
        Commands::Status { run_number } => cmd_status(&cli.settings, run_number),
        Commands::Cancel { run_number } => {
            let handle = open_run(&cli.settings, run_number)?;
            handle.cancel()?;
            println!("✓ Cancel requested for run {} (job {})", run_number, handle.job_id());
            Ok(())
        }
        Commands::Cleanup { run_number } => {
            let handle = open_run(&cli.settings, run_number)?;
            let removed = handle.cleanup()?;
            println!("✓ Removed {} file(s) from {}", removed.len(), handle.directory().display());
            Ok(())
        }
        Commands::Results { run_number } => {
            let result = open_run(&cli.settings, run_number)?.get_results()?;
            println!("{}", result.path().display());
            Ok(())
        }
        Commands::Runs => cmd_runs(&cli.settings),
    }
}

struct Session {
    settings: Settings,
    store: RunStore,
    scheduler: Arc<dyn Scheduler>,
}

fn open_session(settings_path: &Path) -> AppResult<Session> {
    let settings = ms_config::load_yaml(settings_path)?;
    tracing::debug!(settings = %settings_path.display(), "loaded settings");
    let store = RunStore::for_simulations(&settings.simulations_directory)?;
    let scheduler: Arc<dyn Scheduler> = Arc::new(slurm_from_settings(&settings.scheduler));
    Ok(Session {
        settings,
        store,
        scheduler,
    })
}

fn open_run(settings_path: &Path, run_number: u32) -> AppResult<RunHandle> {
    let session = open_session(settings_path)?;
    let record = session.store.load_record(run_number)?;
    Ok(RunHandle::new(record, session.scheduler))
}

fn cmd_validate(settings_path: &Path) -> AppResult<()> {
    println!("Validating settings: {}", settings_path.display());
    let settings = ms_config::load_yaml(settings_path)?;
    LaunchSettings::from_settings(&settings)?;
    let ranged = settings.parameters.ranged().count();
    println!("✓ Settings are valid");
    println!(
        "  {} parameters ({} ranged, {} fixed)",
        settings.parameters.len(),
        ranged,
        settings.parameters.len() - ranged
    );
    Ok(())
}

fn cmd_launch(
    settings_path: &Path,
    run_number: Option<u32>,
    values: Vec<(String, f64)>,
) -> AppResult<()> {
    let session = open_session(settings_path)?;
    let candidate: BTreeMap<String, f64> = values.into_iter().collect();
    let parameters = session.settings.parameters.resolve(&candidate)?;

    let handles = reattach(&session.store, Arc::clone(&session.scheduler))?;
    let queue = session.scheduler.queue()?;
    let active = count_active(&handles, &queue);
    ensure_capacity(active, session.settings.max_concurrent_runs as usize)?;

    let run_number = match run_number {
        Some(n) => n,
        None => session.store.next_run_number()?,
    };

    let launcher = Launcher::new(
        LaunchSettings::from_settings(&session.settings)?,
        Arc::clone(&session.scheduler),
    );
    let handle = launcher.launch(
        run_number,
        &session.settings.simulations_directory,
        &parameters,
    )?;
    session.store.save_record(handle.record())?;

    println!("✓ Launched run {} as job {}", run_number, handle.job_id());
    println!("  Directory: {}", handle.directory().display());
    Ok(())
}

fn cmd_status(settings_path: &Path, run_number: Option<u32>) -> AppResult<()> {
    let session = open_session(settings_path)?;
    let handles = match run_number {
        Some(n) => vec![RunHandle::new(
            session.store.load_record(n)?,
            Arc::clone(&session.scheduler),
        )],
        None => reattach(&session.store, Arc::clone(&session.scheduler))?,
    };

    if handles.is_empty() {
        println!("No runs recorded");
        return Ok(());
    }

    for (run, status) in poll_all(&handles, session.scheduler.as_ref())? {
        println!("  run_{:<6} {}", run, status);
    }
    Ok(())
}

fn cmd_runs(settings_path: &Path) -> AppResult<()> {
    let session = open_session(settings_path)?;
    let records = session.store.list_records()?;

    if records.is_empty() {
        println!("No runs recorded");
        return Ok(());
    }

    println!("Recorded runs:");
    for record in records {
        println!(
            "  run_{:<6} job {:<10} launched {}  [{}]",
            record.run_number,
            record.job_id.as_str(),
            record.launch_time.format("%Y-%m-%d %H:%M:%S UTC"),
            &record.parameters_hash[..12.min(record.parameters_hash.len())]
        );
    }
    Ok(())
}
