use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::container::{section_container, Viewport, WIDE_VIEWPORT_MIN_WIDTH};
use crate::draft::JobDraft;
use crate::errors::ValidationErrors;
use crate::form::{build_section_bodies, FormContext};
use crate::save_status::{save_badges, AutosaveState};
use crate::section::{count_errors_by_section, unrouted_fields, JobEditorSection};
use crate::summary::{error_summary, ERROR_SUMMARY_LIMIT};
use crate::view_model::{ButtonView, EditorViewModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    HrManager,
    Moderator,
    Recruiter,
    Employer,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::SuperAdmin,
        UserRole::HrManager,
        UserRole::Moderator,
        UserRole::Recruiter,
        UserRole::Employer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::HrManager => "HR_MANAGER",
            UserRole::Moderator => "MODERATOR",
            UserRole::Recruiter => "RECRUITER",
            UserRole::Employer => "EMPLOYER",
        }
    }

    /// Roles that post on behalf of any company.
    pub fn is_admin_privileged(self) -> bool {
        matches!(
            self,
            UserRole::SuperAdmin | UserRole::HrManager | UserRole::Moderator
        )
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown role `{s}`"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyOption {
    pub id: String,
    pub name: String,
}

/// Everything the host hands to the editor on each render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorProps {
    pub initial_data: JobDraft,
    pub errors: ValidationErrors,
    pub is_dirty: bool,
    pub autosave_state: AutosaveState,
    pub last_saved_at: Option<NaiveDateTime>,
    pub categories: Vec<Category>,
    pub companies: Vec<CompanyOption>,
    pub is_admin: bool,
    pub user_role: Option<UserRole>,
    pub saving_draft: bool,
    pub saving_primary: bool,
    /// Editing an existing posting rather than creating one.
    pub is_edit: bool,
}

impl EditorProps {
    pub fn shows_company_selector(&self) -> bool {
        self.is_admin && self.user_role.is_some_and(UserRole::is_admin_privileged)
    }
}

/// Editor shell state: host props plus the transient UI concerns the shell
/// owns (open section, viewport, queued focus).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    props: EditorProps,
    section: JobEditorSection,
    viewport: Viewport,
    wide_min_width: u16,
    summary_limit: usize,
    pending_focus: Option<String>,
    render_pending: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorProps::default())
    }
}

impl EditorState {
    pub fn new(props: EditorProps) -> Self {
        Self {
            props,
            section: JobEditorSection::Basic,
            viewport: Viewport::Wide,
            wide_min_width: WIDE_VIEWPORT_MIN_WIDTH,
            summary_limit: ERROR_SUMMARY_LIMIT,
            pending_focus: None,
            render_pending: true,
        }
    }

    pub fn with_summary_limit(mut self, limit: usize) -> Self {
        self.summary_limit = limit;
        self
    }

    /// Overrides the tab/accordion breakpoint.
    pub fn with_wide_min_width(mut self, width: u16) -> Self {
        self.wide_min_width = width;
        self
    }

    pub fn props(&self) -> &EditorProps {
        &self.props
    }

    pub fn section(&self) -> JobEditorSection {
        self.section
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pending_focus(&self) -> Option<&str> {
        self.pending_focus.as_deref()
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_render_pending(&mut self) -> bool {
        std::mem::take(&mut self.render_pending)
    }

    pub fn view(&self) -> EditorViewModel {
        let props = &self.props;
        let counts = count_errors_by_section(&props.errors);
        let ctx = FormContext {
            categories: &props.categories,
            companies: &props.companies,
            show_company: props.shows_company_selector(),
        };
        let bodies = build_section_bodies(&props.initial_data, &props.errors, &ctx);

        EditorViewModel {
            heading: if props.is_edit { "Edit job" } else { "Create job" },
            section: self.section,
            viewport: self.viewport,
            badges: save_badges(props.is_dirty, props.autosave_state, props.last_saved_at),
            error_summary: error_summary(&props.errors, self.summary_limit),
            sections: section_container(self.section, self.viewport, &counts, bodies),
            draft_button: ButtonView {
                label: if props.saving_draft {
                    "Saving draft…"
                } else {
                    "Save draft"
                },
                busy: props.saving_draft,
            },
            primary_button: ButtonView {
                label: match (props.is_edit, props.saving_primary) {
                    (true, false) => "Save changes",
                    (true, true) => "Saving…",
                    (false, false) => "Publish job",
                    (false, true) => "Publishing…",
                },
                busy: props.saving_primary,
            },
            unrouted_errors: unrouted_fields(&props.errors)
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
        }
    }

    pub(crate) fn select_section(&mut self, section: JobEditorSection) {
        if self.section != section {
            self.section = section;
            self.render_pending = true;
        }
    }

    pub(crate) fn resize(&mut self, width: u16) {
        let viewport = Viewport::from_width(width, self.wide_min_width);
        if self.viewport != viewport {
            self.viewport = viewport;
            self.render_pending = true;
        }
    }

    pub(crate) fn replace_props(&mut self, props: EditorProps) {
        if self.props != props {
            self.props = props;
            self.render_pending = true;
        }
    }

    pub(crate) fn replace_errors(&mut self, errors: ValidationErrors) {
        if self.props.errors != errors {
            self.props.errors = errors;
            self.render_pending = true;
        }
    }

    pub(crate) fn queue_focus(&mut self, field: impl Into<String>) {
        self.pending_focus = Some(field.into());
    }

    pub(crate) fn take_pending_focus(&mut self) -> Option<String> {
        self.pending_focus.take()
    }
}
