use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosavePolicy {
    pub enabled: bool,
    /// Quiet period after the last edit before an autosave starts.
    pub debounce: Duration,
}

impl Default for AutosavePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce: Duration::from_millis(2500),
        }
    }
}

/// Tracks the last edit so autosave waits for the user to pause.
#[derive(Debug, Clone, Default)]
pub struct AutosaveTimer {
    last_edit: Option<Instant>,
}

impl AutosaveTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, now: Instant) {
        self.last_edit = Some(now);
    }

    /// Disarms the timer until the next edit.
    pub fn clear(&mut self) {
        self.last_edit = None;
    }

    pub fn is_due(&self, now: Instant, policy: &AutosavePolicy) -> bool {
        policy.enabled
            && self
                .last_edit
                .is_some_and(|edited| now.saturating_duration_since(edited) >= policy.debounce)
    }
}
