use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use editor_logging::{editor_debug, editor_info};
use thiserror::Error;

use job_editor_core::JobDraft;

use crate::fingerprint::{draft_fingerprint, job_filename, parse_job_filename};
use crate::persist::{ensure_store_dir, read_json, AtomicFileWriter, PersistError};
use crate::{JobId, JobStatus, StoredJob};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("job {0} not found")]
    NotFound(JobId),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("store task failed: {0}")]
    Task(String),
}

/// Where jobs are persisted.
#[async_trait::async_trait]
pub trait JobStore: Send + Sync {
    /// Saves `draft`; `id = None` creates a new job.
    async fn save(
        &self,
        id: Option<JobId>,
        status: JobStatus,
        draft: JobDraft,
    ) -> Result<StoredJob, StoreError>;

    async fn load(&self, id: JobId) -> Result<StoredJob, StoreError>;
}

pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// One pretty-printed JSON file per job inside `dir`.
#[derive(Clone)]
pub struct FileJobStore {
    dir: PathBuf,
    clock: Clock,
}

impl FileJobStore {
    pub fn new(dir: PathBuf, clock: Clock) -> Self {
        Self { dir, clock }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ids of every job in the store, ascending.
    pub fn list_ids(&self) -> Result<Vec<JobId>, StoreError> {
        list_ids(&self.dir)
    }
}

fn list_ids(dir: &Path) -> Result<Vec<JobId>, StoreError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut ids: Vec<JobId> = fs::read_dir(dir)
        .map_err(PersistError::from)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| parse_job_filename(&entry.file_name().to_string_lossy()))
        .collect();
    ids.sort_unstable();
    Ok(ids)
}

fn save_blocking(
    dir: &Path,
    id: Option<JobId>,
    status: JobStatus,
    draft: JobDraft,
    saved_at: NaiveDateTime,
) -> Result<StoredJob, StoreError> {
    ensure_store_dir(dir)?;
    let id = match id {
        Some(id) => id,
        None => list_ids(dir)?.last().copied().unwrap_or(0) + 1,
    };
    let stored = StoredJob {
        id,
        status,
        revision: draft_fingerprint(&draft),
        saved_at,
        job: draft,
    };
    let writer = AtomicFileWriter::new(dir.to_path_buf());
    let path = writer.write_json(&job_filename(id), &stored)?;
    editor_debug!("wrote {:?} revision={}", path, stored.revision);
    Ok(stored)
}

fn load_blocking(dir: &Path, id: JobId) -> Result<StoredJob, StoreError> {
    let path = dir.join(job_filename(id));
    if !path.exists() {
        return Err(StoreError::NotFound(id));
    }
    Ok(read_json(&path)?)
}

#[async_trait::async_trait]
impl JobStore for FileJobStore {
    async fn save(
        &self,
        id: Option<JobId>,
        status: JobStatus,
        draft: JobDraft,
    ) -> Result<StoredJob, StoreError> {
        let dir = self.dir.clone();
        let saved_at = (self.clock)();
        let stored = tokio::task::spawn_blocking(move || {
            save_blocking(&dir, id, status, draft, saved_at)
        })
        .await
        .map_err(|err| StoreError::Task(err.to_string()))??;
        editor_info!("saved job {} as {:?}", stored.id, stored.status);
        Ok(stored)
    }

    async fn load(&self, id: JobId) -> Result<StoredJob, StoreError> {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || load_blocking(&dir, id))
            .await
            .map_err(|err| StoreError::Task(err.to_string()))?
    }
}
