//! Job editor host: owns the draft, validates it, persists it and runs autosave.
mod autosave;
mod config;
mod engine;
mod fingerprint;
mod persist;
mod session;
mod store;
mod types;

pub use autosave::{AutosavePolicy, AutosaveTimer};
pub use config::{HostConfig, Today};
pub use engine::EditorHost;
pub use fingerprint::{draft_fingerprint, job_filename};
pub use persist::{ensure_store_dir, read_json, AtomicFileWriter, PersistError};
pub use session::{DraftSession, EditorProfile};
pub use store::{Clock, FileJobStore, JobStore, StoreError};
pub use types::{HostEvent, JobId, JobStatus, SaveFailure, StoredJob};
