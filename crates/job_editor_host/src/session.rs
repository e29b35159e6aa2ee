use chrono::NaiveDateTime;
use editor_logging::editor_debug;

use job_editor_core::{
    validate, AutosaveState, Category, CompanyOption, DraftChange, EditorProps, JobDraft,
    SaveMode, UserRole, ValidationContext, ValidationErrors,
};

use crate::fingerprint::draft_fingerprint;
use crate::{JobId, JobStatus, StoredJob};

/// Who is editing, and what the selectors offer them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorProfile {
    pub categories: Vec<Category>,
    pub companies: Vec<CompanyOption>,
    pub is_admin: bool,
    pub user_role: Option<UserRole>,
}

impl EditorProfile {
    fn requires_company(&self) -> bool {
        self.is_admin && self.user_role.is_some_and(UserRole::is_admin_privileged)
    }
}

/// The host's record of one editing session: the draft, what was last
/// persisted, and the save bookkeeping the editor displays.
#[derive(Debug, Clone)]
pub struct DraftSession {
    draft: JobDraft,
    baseline: String,
    job_id: Option<JobId>,
    status: Option<JobStatus>,
    errors: ValidationErrors,
    /// Mode of the latest save attempt; edits revalidate in it afterwards.
    validation_mode: Option<SaveMode>,
    ctx: ValidationContext,
    profile: EditorProfile,
    autosave: AutosaveState,
    last_saved_at: Option<NaiveDateTime>,
    saving_draft: bool,
    saving_primary: bool,
    /// Bumped by every load; save tasks started under an older value are stale.
    generation: u64,
}

impl DraftSession {
    pub fn new(profile: EditorProfile, today: chrono::NaiveDate) -> Self {
        let draft = JobDraft::default();
        let ctx = ValidationContext {
            require_company: profile.requires_company(),
            today,
        };
        Self {
            baseline: draft_fingerprint(&draft),
            draft,
            job_id: None,
            status: None,
            errors: ValidationErrors::new(),
            validation_mode: None,
            ctx,
            profile,
            autosave: AutosaveState::Idle,
            last_saved_at: None,
            saving_draft: false,
            saving_primary: false,
            generation: 0,
        }
    }

    /// Replaces the session with a job fetched from the store.
    pub fn load(&mut self, stored: StoredJob) {
        self.baseline = draft_fingerprint(&stored.job);
        self.draft = stored.job;
        self.job_id = Some(stored.id);
        self.status = Some(stored.status);
        self.errors = ValidationErrors::new();
        self.validation_mode = None;
        self.autosave = AutosaveState::Idle;
        self.last_saved_at = Some(stored.saved_at);
        self.saving_draft = false;
        self.saving_primary = false;
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn job_id(&self) -> Option<JobId> {
        self.job_id
    }

    pub fn status(&self) -> Option<JobStatus> {
        self.status
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn autosave_state(&self) -> AutosaveState {
        self.autosave
    }

    pub fn is_dirty(&self) -> bool {
        draft_fingerprint(&self.draft) != self.baseline
    }

    pub fn is_saving(&self) -> bool {
        self.saving_draft || self.saving_primary || self.autosave == AutosaveState::Saving
    }

    pub fn apply(&mut self, change: DraftChange) {
        editor_debug!("apply change to {}", change.field());
        change.apply(&mut self.draft);
        if let Some(mode) = self.validation_mode {
            self.errors = validate(&self.draft, mode, &self.ctx);
        }
    }

    /// Validates for `mode` and, when clean, marks the save as running and
    /// returns the draft to persist. Errors are recorded before returning.
    pub fn begin_save(&mut self, mode: SaveMode) -> Result<JobDraft, ValidationErrors> {
        self.validation_mode = Some(mode);
        self.errors = validate(&self.draft, mode, &self.ctx);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }
        match mode {
            SaveMode::Draft => self.saving_draft = true,
            SaveMode::Submit => self.saving_primary = true,
        }
        Ok(self.draft.clone())
    }

    pub fn finish_save(&mut self, mode: SaveMode, stored: &StoredJob) {
        self.clear_saving(mode);
        self.record_stored(stored);
        self.autosave = AutosaveState::Saved;
    }

    pub fn fail_save(&mut self, mode: SaveMode) {
        self.clear_saving(mode);
    }

    /// Draft to autosave, if one is worth saving now.
    ///
    /// Skips clean drafts, published jobs, drafts that fail relaxed validation
    /// and anything while another save runs. Never touches `errors`.
    pub fn begin_autosave(&mut self) -> Option<JobDraft> {
        if !self.is_dirty() || self.is_saving() || self.status == Some(JobStatus::Published) {
            return None;
        }
        if !validate(&self.draft, SaveMode::Draft, &self.ctx).is_empty() {
            editor_debug!("autosave skipped: draft not valid yet");
            return None;
        }
        self.autosave = AutosaveState::Saving;
        Some(self.draft.clone())
    }

    pub fn finish_autosave(&mut self, stored: &StoredJob) {
        self.record_stored(stored);
        self.autosave = AutosaveState::Saved;
    }

    pub fn fail_autosave(&mut self) {
        self.autosave = AutosaveState::Error;
    }

    /// Props for the editor shell.
    pub fn props(&self) -> EditorProps {
        EditorProps {
            initial_data: self.draft.clone(),
            errors: self.errors.clone(),
            is_dirty: self.is_dirty(),
            autosave_state: self.autosave,
            last_saved_at: self.last_saved_at,
            categories: self.profile.categories.clone(),
            companies: self.profile.companies.clone(),
            is_admin: self.profile.is_admin,
            user_role: self.profile.user_role,
            saving_draft: self.saving_draft,
            saving_primary: self.saving_primary,
            is_edit: self.job_id.is_some(),
        }
    }

    fn clear_saving(&mut self, mode: SaveMode) {
        match mode {
            SaveMode::Draft => self.saving_draft = false,
            SaveMode::Submit => self.saving_primary = false,
        }
    }

    fn record_stored(&mut self, stored: &StoredJob) {
        // Edits made while the save was in flight keep the session dirty.
        self.baseline = stored.revision.clone();
        self.job_id = Some(stored.id);
        self.status = Some(stored.status);
        self.last_saved_at = Some(stored.saved_at);
    }
}
