use ms_core::JobId;
use std::collections::HashSet;

/// Job ids currently known to the scheduler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQueue {
    ids: HashSet<String>,
}

impl JobQueue {
    /// Parse queue listing text. Only the first column of each line is
    /// read, which is the whole line for the default `squeue -h -o %i` and
    /// the JOBID column of a full table. Membership is an exact match: job
    /// 12 is not "in" job 123.
    pub fn parse(listing: &str) -> Self {
        Self {
            ids: listing
                .lines()
                .filter_map(|line| line.split_whitespace().next())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn contains(&self, job_id: &JobId) -> bool {
        self.ids.contains(job_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> FromIterator<&'a JobId> for JobQueue {
    fn from_iter<I: IntoIterator<Item = &'a JobId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(|id| id.as_str().to_string()).collect(),
        }
    }
}
