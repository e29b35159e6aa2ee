use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::autosave::AutosavePolicy;
use crate::store::Clock;

pub type Today = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

#[derive(Clone)]
pub struct HostConfig {
    pub store_dir: PathBuf,
    pub autosave: AutosavePolicy,
    /// How often the host thread wakes to check for a due autosave.
    pub poll_interval: Duration,
    pub clock: Clock,
    pub today: Today,
}

impl HostConfig {
    pub fn default_with_store(store_dir: PathBuf) -> Self {
        Self {
            store_dir,
            autosave: AutosavePolicy::default(),
            poll_interval: Duration::from_millis(100),
            clock: Arc::new(|| Local::now().naive_local()),
            today: Arc::new(|| Local::now().date_naive()),
        }
    }
}
