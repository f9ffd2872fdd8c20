//! Run record storage API.
//!
//! Records live under `<simulations_directory>/.mesa/runs/run_<n>.json`,
//! outside every case directory, so cleaning a case never touches them.

use crate::types::RunRecord;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RunStore {
    root_dir: PathBuf,
    simulations_directory: Option<PathBuf>,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self {
            root_dir,
            simulations_directory: None,
        })
    }

    pub fn for_simulations(simulations_directory: &Path) -> ResultsResult<Self> {
        if simulations_directory.as_os_str().is_empty() {
            return Err(ResultsError::InvalidPath {
                message: "simulations directory is empty".to_string(),
            });
        }
        let mut store = Self::new(simulations_directory.join(".mesa").join("runs"))?;
        store.simulations_directory = Some(simulations_directory.to_path_buf());
        Ok(store)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn record_path(&self, run_number: u32) -> PathBuf {
        self.root_dir.join(format!("run_{run_number}.json"))
    }

    pub fn has_record(&self, run_number: u32) -> bool {
        self.record_path(run_number).exists()
    }

    pub fn save_record(&self, record: &RunRecord) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.record_path(record.run_number), json)?;
        Ok(())
    }

    /// Load and validate one record. A file that does not parse is
    /// `CorruptRecord` naming its path.
    pub fn load_record(&self, run_number: u32) -> ResultsResult<RunRecord> {
        let path = self.record_path(run_number);
        if !path.exists() {
            return Err(ResultsError::RecordNotFound { run_number });
        }
        let content = fs::read_to_string(&path)?;
        let record: RunRecord =
            serde_json::from_str(&content).map_err(|e| ResultsError::CorruptRecord {
                path: path.clone(),
                message: e.to_string(),
            })?;
        if record.run_number != run_number {
            return Err(ResultsError::InvalidRecord {
                run_number,
                reason: format!("file holds run {}", record.run_number),
            });
        }
        record.validate()?;
        Ok(record)
    }

    /// All stored records, ordered by run number. Fails on the first
    /// record that cannot be read.
    pub fn list_records(&self) -> ResultsResult<Vec<RunRecord>> {
        let mut records = Vec::new();

        if !self.root_dir.exists() {
            return Ok(records);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(run_number) = parse_record_name(&name) {
                records.push(self.load_record(run_number)?);
            }
        }

        records.sort_by_key(|r| r.run_number);
        Ok(records)
    }

    /// One past the highest run number in use, starting at 0. Both stored
    /// records and `run_<n>` case directories count, so a number whose
    /// launch failed after its directory was created is not handed out
    /// again.
    pub fn next_run_number(&self) -> ResultsResult<u32> {
        let mut highest: Option<u32> = None;

        if self.root_dir.is_dir() {
            for entry in fs::read_dir(&self.root_dir)? {
                let name = entry?.file_name().to_string_lossy().to_string();
                if let Some(n) = parse_record_name(&name) {
                    highest = highest.max(Some(n));
                }
            }
        }

        if let Some(sims) = &self.simulations_directory
            && sims.is_dir()
        {
            for entry in fs::read_dir(sims)? {
                let entry = entry?;
                if !entry.file_type()?.is_dir() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().to_string();
                if let Some(n) = parse_case_name(&name) {
                    highest = highest.max(Some(n));
                }
            }
        }

        match highest {
            None => Ok(0),
            Some(n) => n.checked_add(1).ok_or_else(|| ResultsError::InvalidPath {
                message: "run numbers exhausted".to_string(),
            }),
        }
    }
}

fn parse_record_name(name: &str) -> Option<u32> {
    parse_case_name(name.strip_suffix(".json")?)
}

fn parse_case_name(name: &str) -> Option<u32> {
    let digits = name.strip_prefix("run_")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_names_parse() {
        assert_eq!(parse_record_name("run_12.json"), Some(12));
        assert_eq!(parse_record_name("run_x.json"), None);
        assert_eq!(parse_record_name("notes.txt"), None);
    }

    #[test]
    fn case_names_parse() {
        assert_eq!(parse_case_name("run_3"), Some(3));
        assert_eq!(parse_case_name("run_+3"), None);
        assert_eq!(parse_case_name("run_"), None);
        assert_eq!(parse_case_name("ref_clean"), None);
    }
}
