use crate::errors::ValidationErrors;
use crate::section::{section_for_field, JobEditorSection};

/// Rows shown in the error summary; later errors are only counted.
pub const ERROR_SUMMARY_LIMIT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSummaryView {
    pub total: usize,
    pub heading: String,
    pub rows: Vec<ErrorRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRowView {
    pub field: String,
    pub message: String,
    /// Where the row's "Go" action navigates.
    pub section: JobEditorSection,
}

/// Summary of `errors`, or `None` when there is nothing to fix.
pub fn error_summary(errors: &ValidationErrors, limit: usize) -> Option<ErrorSummaryView> {
    if errors.is_empty() {
        return None;
    }
    let total = errors.len();
    let heading = if total == 1 {
        "Please fix 1 issue".to_string()
    } else {
        format!("Please fix {total} issues")
    };
    let rows = errors
        .iter()
        .take(limit)
        .map(|entry| ErrorRowView {
            field: entry.field.clone(),
            message: entry.message.clone(),
            section: section_for_field(&entry.field),
        })
        .collect();
    Some(ErrorSummaryView {
        total,
        heading,
        rows,
    })
}
