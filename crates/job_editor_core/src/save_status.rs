use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Lifecycle of the most recent autosave attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutosaveState {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveBadge {
    Unsaved,
    Saving,
    Saved { at: Option<NaiveTime> },
    AutosaveFailed,
}

impl SaveBadge {
    pub fn label(&self) -> String {
        match self {
            SaveBadge::Unsaved => "Unsaved changes".to_string(),
            SaveBadge::Saving => "Saving…".to_string(),
            SaveBadge::Saved { at: Some(time) } => {
                format!("Saved · {:02}:{:02}", time.hour(), time.minute())
            }
            SaveBadge::Saved { at: None } => "Saved".to_string(),
            SaveBadge::AutosaveFailed => "Autosave failed".to_string(),
        }
    }
}

/// Badges to show, in display order.
///
/// The inputs are independent flags, so several badges can be active at once
/// (dirty again right after a save shows both "Unsaved changes" and "Saved").
/// The one exclusion: "Unsaved changes" is hidden while a save is running.
pub fn save_badges(
    is_dirty: bool,
    autosave: AutosaveState,
    last_saved_at: Option<NaiveDateTime>,
) -> Vec<SaveBadge> {
    let mut badges = Vec::with_capacity(2);
    if is_dirty && autosave != AutosaveState::Saving {
        badges.push(SaveBadge::Unsaved);
    }
    match autosave {
        AutosaveState::Saving => badges.push(SaveBadge::Saving),
        AutosaveState::Saved => badges.push(SaveBadge::Saved {
            at: last_saved_at.map(|at| at.time()),
        }),
        AutosaveState::Error => badges.push(SaveBadge::AutosaveFailed),
        AutosaveState::Idle => {}
    }
    badges
}
