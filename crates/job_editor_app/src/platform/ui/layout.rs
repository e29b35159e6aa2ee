//! Section container rendering: tabs bar on wide terminals, accordion on
//! narrow ones. Only the open section's fields are drawn.

use job_editor_core::{
    list_items, ContainerLayout, FieldKind, FieldView, SectionBody, SectionContainerView,
    SectionPane,
};

const INDENT: &str = "  ";
const EMPTY_VALUE: &str = "—";

pub fn section_lines(view: &SectionContainerView<SectionBody>, focused: Option<&str>) -> Vec<String> {
    match view.layout {
        ContainerLayout::Tabs => {
            let mut lines = vec![tabs_bar(view)];
            if let Some(pane) = view.active_pane() {
                lines.push(String::new());
                lines.extend(body_lines(&pane.body, focused));
            }
            lines
        }
        ContainerLayout::Accordion => {
            let mut lines = Vec::new();
            for pane in &view.panes {
                let marker = if pane.active { '▾' } else { '▸' };
                lines.push(format!("{marker} {}", pane_title(pane)));
                if pane.active {
                    lines.extend(body_lines(&pane.body, focused));
                }
            }
            lines
        }
    }
}

/// `[Basic] Location (1) Salary Content`
pub fn tabs_bar(view: &SectionContainerView<SectionBody>) -> String {
    view.panes
        .iter()
        .map(|pane| {
            if pane.active {
                format!("[{}]", pane_title(pane))
            } else {
                pane_title(pane)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn pane_title(pane: &SectionPane<SectionBody>) -> String {
    match pane.badge {
        Some(count) => format!("{} ({count})", pane.label),
        None => pane.label.to_string(),
    }
}

fn body_lines(body: &SectionBody, focused: Option<&str>) -> Vec<String> {
    body.fields
        .iter()
        .flat_map(|field| field_lines(field, focused == Some(field.id)))
        .collect()
}

pub fn field_lines(field: &FieldView, focused: bool) -> Vec<String> {
    let cursor = if focused { "› " } else { "" };
    let required = if field.required { "*" } else { "" };
    let head = format!("{INDENT}{cursor}{}{required} ({})", field.label, field.id);

    let mut lines = Vec::new();
    match &field.kind {
        FieldKind::List | FieldKind::TextArea => {
            let items = list_items(&field.value);
            if items.is_empty() {
                lines.push(format!("{head}: {EMPTY_VALUE}"));
            } else {
                lines.push(format!("{head}:"));
                let bullet = if field.kind == FieldKind::List { "- " } else { "" };
                lines.extend(
                    items
                        .into_iter()
                        .map(|item| format!("{INDENT}{INDENT}{INDENT}{bullet}{item}")),
                );
            }
        }
        kind => lines.push(format!("{head}: {}", display_value(kind, &field.value))),
    }
    if let Some(message) = &field.error {
        lines.push(format!("{INDENT}{INDENT}! {message}"));
    }
    lines
}

fn display_value(kind: &FieldKind, value: &str) -> String {
    match kind {
        FieldKind::Checkbox => if value == "true" { "[x]" } else { "[ ]" }.to_string(),
        FieldKind::Select(options) => match options.iter().find(|opt| opt.value == value) {
            Some(opt) => format!("{} ({})", opt.label, opt.value),
            None if value.is_empty() => {
                let choices: Vec<&str> = options.iter().map(|opt| opt.value.as_str()).collect();
                if choices.is_empty() {
                    EMPTY_VALUE.to_string()
                } else {
                    format!("{EMPTY_VALUE}  [{}]", choices.join(" | "))
                }
            }
            None => value.to_string(),
        },
        _ if value.is_empty() => EMPTY_VALUE.to_string(),
        _ => value.to_string(),
    }
}
