#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand one field mutation to the host, which owns the draft.
    ForwardChange(crate::DraftChange),
    SaveDraft,
    SubmitOrSave,
    /// Scroll the control for `field` into view and focus it.
    ScrollToField { field: String },
}
