use job_editor_core::{ButtonView, EditorViewModel, ErrorSummaryView, JobEditorSection, SaveBadge};

use super::layout;

pub fn render(view: &EditorViewModel, focused: Option<&str>) -> Vec<String> {
    let mut lines = vec![header_line(view), String::new()];

    if let Some(summary) = &view.error_summary {
        lines.extend(summary_lines(summary));
        lines.push(String::new());
    }

    lines.extend(layout::section_lines(&view.sections, focused));

    if view.section == JobEditorSection::Content && !view.unrouted_errors.is_empty() {
        lines.push(format!(
            "  ! Other issues: {}",
            view.unrouted_errors.join(", ")
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{}   {}",
        button(&view.draft_button),
        button(&view.primary_button)
    ));
    lines
}

pub fn header_line(view: &EditorViewModel) -> String {
    match badges_text(&view.badges) {
        Some(badges) => format!("== {} ==   {}", view.heading, badges),
        None => format!("== {} ==", view.heading),
    }
}

/// True when a redraw would change nothing but the save badges.
pub fn differs_only_in_badges(previous: &EditorViewModel, next: &EditorViewModel) -> bool {
    previous.badges != next.badges
        && EditorViewModel {
            badges: Vec::new(),
            ..previous.clone()
        } == EditorViewModel {
            badges: Vec::new(),
            ..next.clone()
        }
}

fn badges_text(badges: &[SaveBadge]) -> Option<String> {
    if badges.is_empty() {
        return None;
    }
    Some(
        badges
            .iter()
            .map(SaveBadge::label)
            .collect::<Vec<_>>()
            .join(" | "),
    )
}

fn summary_lines(summary: &ErrorSummaryView) -> Vec<String> {
    let mut lines = vec![format!("┌ {}", summary.heading)];
    for (index, row) in summary.rows.iter().enumerate() {
        lines.push(format!(
            "│ {}. {}: {}   (go {})",
            index + 1,
            row.section.label(),
            row.message,
            index + 1
        ));
    }
    let hidden = summary.total.saturating_sub(summary.rows.len());
    if hidden > 0 {
        lines.push(format!("│ …and {hidden} more"));
    }
    lines.push("└".to_string());
    lines
}

fn button(view: &ButtonView) -> String {
    if view.busy {
        format!("({})", view.label)
    } else {
        format!("[{}]", view.label)
    }
}
