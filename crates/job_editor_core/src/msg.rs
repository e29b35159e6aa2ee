use crate::{DraftChange, EditorProps, JobEditorSection, SaveMode, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited one form control.
    FieldEdited(DraftChange),
    /// User picked a tab or expanded an accordion item.
    SectionSelected(JobEditorSection),
    /// Viewport width changed.
    ViewportResized { width: u16 },
    /// User clicked "Go" on an error summary row.
    ErrorRowActivated { field: String },
    /// User clicked "Save draft".
    SaveDraftClicked,
    /// User clicked the primary button (publish / save changes).
    SubmitClicked,
    /// A save request resolved; `Err` carries the errors it was rejected with.
    SaveFinished {
        mode: SaveMode,
        result: Result<(), ValidationErrors>,
    },
    /// Host re-rendered the editor with new props.
    PropsChanged(Box<EditorProps>),
    /// Event-loop tick; deferred work runs here.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
