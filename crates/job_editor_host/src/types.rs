use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use job_editor_core::{EditorProps, JobDraft, SaveMode, ValidationErrors};

pub type JobId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Draft,
    Published,
}

impl JobStatus {
    pub fn for_mode(mode: SaveMode) -> Self {
        match mode {
            SaveMode::Draft => JobStatus::Draft,
            SaveMode::Submit => JobStatus::Published,
        }
    }
}

/// A job as persisted by a [`crate::JobStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredJob {
    pub id: JobId,
    pub status: JobStatus,
    /// Fingerprint of `job` at save time.
    pub revision: String,
    pub saved_at: NaiveDateTime,
    pub job: JobDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveFailure {
    /// Rejected before reaching the store.
    Invalid(ValidationErrors),
    /// The store could not persist the job.
    Store(String),
}

impl fmt::Display for SaveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveFailure::Invalid(errors) => write!(f, "{} validation error(s)", errors.len()),
            SaveFailure::Store(message) => write!(f, "store error: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Fresh props for the editor; sent after every state change.
    Synced(Box<EditorProps>),
    SaveFinished {
        mode: SaveMode,
        result: Result<StoredJob, SaveFailure>,
    },
    LoadFailed {
        id: JobId,
        message: String,
    },
}
