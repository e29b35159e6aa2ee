use editor_logging::{editor_debug, editor_info};
use job_editor_core::{
    scroll_to_field, EditorViewModel, Effect, FieldElement, FieldSurface, SaveMode,
};
use job_editor_host::{EditorHost, HostEvent, JobId};

/// Carries effects from the editor state machine to the host.
pub struct EffectRunner {
    host: EditorHost,
}

impl EffectRunner {
    pub fn new(host: EditorHost) -> Self {
        Self { host }
    }

    pub fn load(&self, id: JobId) {
        editor_info!("Loading job {}", id);
        self.host.load(id);
    }

    pub fn poll(&self) -> Option<HostEvent> {
        self.host.try_recv()
    }

    /// Runs `effects` in order and returns lines to show the user.
    pub fn run(&self, effects: Vec<Effect>, surface: &mut dyn FieldSurface) -> Vec<String> {
        let mut notes = Vec::new();
        for effect in effects {
            match effect {
                Effect::ForwardChange(change) => self.host.apply(change),
                Effect::SaveDraft => self.host.save(SaveMode::Draft),
                Effect::SubmitOrSave => self.host.save(SaveMode::Submit),
                Effect::ScrollToField { field } => {
                    if scroll_to_field(surface, &field) {
                        notes.push(format!("→ focus {field}"));
                    } else {
                        editor_debug!("focus target {} not on screen", field);
                    }
                }
            }
        }
        notes
    }
}

/// Number of save requests among `effects`.
pub fn save_requests(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::SaveDraft | Effect::SubmitOrSave))
        .count()
}

/// The controls currently drawn: the fields of the open section.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    fields: Vec<TerminalField>,
}

#[derive(Debug)]
struct TerminalField {
    id: &'static str,
    focused: bool,
}

impl FieldElement for TerminalField {
    fn scroll_into_view(&mut self) {
        // The open section is always printed in full.
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

impl TerminalSurface {
    pub fn mount(view: &EditorViewModel) -> Self {
        let fields = view
            .sections
            .active_pane()
            .map(|pane| {
                pane.body
                    .fields
                    .iter()
                    .map(|field| TerminalField {
                        id: field.id,
                        focused: false,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { fields }
    }

    pub fn focused(&self) -> Option<&'static str> {
        self.fields.iter().find(|field| field.focused).map(|field| field.id)
    }
}

impl FieldSurface for TerminalSurface {
    fn element_mut(&mut self, id: &str) -> Option<&mut dyn FieldElement> {
        self.fields
            .iter_mut()
            .find(|field| field.id == id)
            .map(|field| field as &mut dyn FieldElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use job_editor_core::{EditorProps, EditorState, JobEditorSection, Msg};

    fn view_on(section: JobEditorSection) -> EditorViewModel {
        let (state, _) = job_editor_core::update(
            EditorState::new(EditorProps::default()),
            Msg::SectionSelected(section),
        );
        state.view()
    }

    #[test]
    fn only_open_section_fields_can_take_focus() {
        let mut surface = TerminalSurface::mount(&view_on(JobEditorSection::Salary));
        assert!(!scroll_to_field(&mut surface, "title"));
        assert_eq!(surface.focused(), None);

        assert!(scroll_to_field(&mut surface, "salaryMin"));
        assert_eq!(surface.focused(), Some("salaryMin"));
    }

    #[test]
    fn counts_save_requests() {
        let effects = vec![
            Effect::SaveDraft,
            Effect::ScrollToField {
                field: "title".to_string(),
            },
            Effect::SubmitOrSave,
        ];
        assert_eq!(save_requests(&effects), 2);
        assert_eq!(save_requests(&[]), 0);
    }
}
