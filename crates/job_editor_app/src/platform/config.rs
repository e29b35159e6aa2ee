use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use editor_logging::editor_info;
use job_editor_core::{Category, CompanyOption, ERROR_SUMMARY_LIMIT, WIDE_VIEWPORT_MIN_WIDTH};
use job_editor_host::AutosavePolicy;
use serde::Deserialize;

pub const DEFAULT_STORE_DIR: &str = "jobs";
const DEFAULT_WIDTH: u16 = 100;

/// Settings read from `job_editor.ron`. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store_dir: Option<PathBuf>,
    pub autosave: bool,
    pub autosave_debounce_ms: u64,
    pub width: u16,
    /// Columns from which sections render as tabs.
    pub wide_min_width: u16,
    pub summary_limit: usize,
    pub log_level: String,
    pub categories: Vec<Category>,
    pub companies: Vec<CompanyOption>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_dir: None,
            autosave: true,
            autosave_debounce_ms: AutosavePolicy::default().debounce.as_millis() as u64,
            width: DEFAULT_WIDTH,
            wide_min_width: WIDE_VIEWPORT_MIN_WIDTH,
            summary_limit: ERROR_SUMMARY_LIMIT,
            log_level: "info".to_string(),
            categories: Vec::new(),
            companies: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn autosave_policy(&self) -> AutosavePolicy {
        AutosavePolicy {
            enabled: self.autosave,
            debounce: Duration::from_millis(self.autosave_debounce_ms),
        }
    }

    /// `--store` wins over the config file.
    pub fn resolve_store_dir(&self, cli_store: Option<&Path>) -> PathBuf {
        cli_store
            .map(Path::to_path_buf)
            .or_else(|| self.store_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR))
    }
}

/// Reads the config file; a missing file yields the defaults.
pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };
    let config: AppConfig =
        ron::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    editor_info!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("nope.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.autosave_policy(), AutosavePolicy::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("job_editor.ron");
        fs::write(
            &path,
            r#"(
                autosave_debounce_ms: 500,
                categories: [(id: "ops", name: "Operations")],
            )"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.autosave_debounce_ms, 500);
        assert_eq!(config.categories[0].name, "Operations");
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!(config.autosave);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("job_editor.ron");
        fs::write(&path, "(width: \"wide\")").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn cli_store_overrides_config() {
        let config = AppConfig {
            store_dir: Some(PathBuf::from("from_config")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolve_store_dir(Some(Path::new("from_cli"))),
            PathBuf::from("from_cli")
        );
        assert_eq!(config.resolve_store_dir(None), PathBuf::from("from_config"));
        assert_eq!(
            AppConfig::default().resolve_store_dir(None),
            PathBuf::from(DEFAULT_STORE_DIR)
        );
    }
}
