//! Job editor core: pure state machine and view-model helpers.
mod container;
mod draft;
mod effect;
mod errors;
mod focus;
mod form;
mod msg;
mod save_status;
mod section;
mod state;
mod summary;
mod update;
mod validation;
mod view_model;

pub use container::{
    section_container, ContainerLayout, SectionBodies, SectionContainerView, SectionPane,
    Viewport, WIDE_VIEWPORT_MIN_WIDTH,
};
pub use draft::{
    list_items, ChangeParseError, DraftChange, ExperienceLevel, JobDraft, JobField, JobType,
    SalaryType,
};
pub use effect::Effect;
pub use errors::{first_error_field, FieldError, ValidationErrors};
pub use focus::{scroll_to_field, FieldElement, FieldSurface};
pub use form::{
    build_section_bodies, visible_fields, FieldKind, FieldView, FormContext, SectionBody,
    SelectOption,
};
pub use msg::Msg;
pub use save_status::{save_badges, AutosaveState, SaveBadge};
pub use section::{
    count_errors_by_section, is_routed_field, section_for_field, unrouted_fields,
    JobEditorSection, SectionCounts,
};
pub use state::{Category, CompanyOption, EditorProps, EditorState, UserRole};
pub use summary::{error_summary, ErrorRowView, ErrorSummaryView, ERROR_SUMMARY_LIMIT};
pub use update::update;
pub use validation::{
    validate, SaveMode, ValidationContext, DESCRIPTION_MIN_CHARS, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
pub use view_model::{ButtonView, EditorViewModel};
