use std::fs;
use std::path::Path;

use editor_logging::{editor_error, editor_info, editor_warn};
use job_editor_core::JobEditorSection;
use job_editor_host::{ensure_store_dir, AtomicFileWriter, JobId};
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = ".job_editor_session.ron";

/// What the editor reopens on the next start.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) struct SessionMemo {
    pub last_job: Option<JobId>,
    pub last_section: Option<String>,
}

impl SessionMemo {
    pub(crate) fn section(&self) -> Option<JobEditorSection> {
        self.last_section.as_deref().and_then(JobEditorSection::parse)
    }
}

pub(crate) fn load_session(store_dir: &Path) -> SessionMemo {
    let path = store_dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return SessionMemo::default();
        }
        Err(err) => {
            editor_warn!("Failed to read session from {:?}: {}", path, err);
            return SessionMemo::default();
        }
    };

    match ron::from_str(&content) {
        Ok(memo) => {
            editor_info!("Restored session from {:?}", path);
            memo
        }
        Err(err) => {
            editor_warn!("Failed to parse session from {:?}: {}", path, err);
            SessionMemo::default()
        }
    }
}

pub(crate) fn save_session(store_dir: &Path, memo: &SessionMemo) {
    if let Err(err) = ensure_store_dir(store_dir) {
        editor_error!("Failed to ensure store dir {:?}: {}", store_dir, err);
        return;
    }

    let content = match ron::ser::to_string_pretty(memo, ron::ser::PrettyConfig::new()) {
        Ok(text) => text,
        Err(err) => {
            editor_error!("Failed to serialize session: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(store_dir.to_path_buf());
    if let Err(err) = writer.write(SESSION_FILENAME, content.as_bytes()) {
        editor_error!("Failed to write session to {:?}: {}", store_dir, err);
    }
}
