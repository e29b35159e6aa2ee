use editor_logging::{editor_debug, editor_info, editor_warn};

use crate::section::{is_routed_field, section_for_field};
use crate::{first_error_field, EditorState, Effect, Msg, ValidationErrors};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: EditorState, msg: Msg) -> (EditorState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited(change) => {
            // The draft belongs to the host; it comes back through PropsChanged.
            vec![Effect::ForwardChange(change)]
        }
        Msg::SectionSelected(section) => {
            state.select_section(section);
            Vec::new()
        }
        Msg::ViewportResized { width } => {
            state.resize(width);
            Vec::new()
        }
        Msg::ErrorRowActivated { field } => {
            jump_to_field(&mut state, field);
            Vec::new()
        }
        Msg::SaveDraftClicked => vec![Effect::SaveDraft],
        Msg::SubmitClicked => vec![Effect::SubmitOrSave],
        Msg::SaveFinished { mode, result } => {
            match result {
                Ok(()) => editor_debug!("save finished mode={:?}", mode),
                Err(errors) => {
                    editor_info!("save rejected mode={:?} errors={}", mode, errors.len());
                    jump_to_first_error(&mut state, errors);
                }
            }
            Vec::new()
        }
        Msg::PropsChanged(props) => {
            state.replace_props(*props);
            Vec::new()
        }
        Msg::Tick => match state.take_pending_focus() {
            // Emitted one tick late so the newly selected section is mounted.
            Some(field) => vec![Effect::ScrollToField { field }],
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn jump_to_first_error(state: &mut EditorState, errors: ValidationErrors) {
    let first = first_error_field(&errors).map(ToOwned::to_owned);
    state.replace_errors(errors);
    if let Some(field) = first {
        jump_to_field(state, field);
    }
}

fn jump_to_field(state: &mut EditorState, field: String) {
    if !is_routed_field(&field) {
        editor_warn!("error for undeclared field {} routed to content", field);
    }
    state.select_section(section_for_field(&field));
    state.queue_focus(field);
}
