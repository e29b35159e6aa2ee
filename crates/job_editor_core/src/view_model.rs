use crate::container::{SectionContainerView, Viewport};
use crate::form::SectionBody;
use crate::save_status::SaveBadge;
use crate::section::JobEditorSection;
use crate::summary::ErrorSummaryView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorViewModel {
    pub heading: &'static str,
    pub section: JobEditorSection,
    pub viewport: Viewport,
    pub badges: Vec<SaveBadge>,
    pub error_summary: Option<ErrorSummaryView>,
    pub sections: SectionContainerView<SectionBody>,
    pub draft_button: ButtonView,
    pub primary_button: ButtonView,
    /// Error keys no section declares; they are shown under Content.
    pub unrouted_errors: Vec<String>,
}

/// The shell only reports `busy`; disabling the control is up to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub busy: bool,
}
