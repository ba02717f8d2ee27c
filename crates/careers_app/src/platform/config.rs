//! Optional RON configuration for the grid and the headless window.
//!
//! Every field is optional; anything missing or unusable falls back to the
//! built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use careers_core::{GridConfig, ListingField};
use careers_host::DEFAULT_CONTAINER_ID;
use careers_logging::{careers_info, careers_warn};
use serde::Deserialize;

use super::window::WindowLayout;

pub const CONFIG_FILENAME: &str = "careers.ron";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub container_id: String,
    pub grid: GridConfig,
    pub layout: WindowLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            grid: GridConfig::default(),
            layout: WindowLayout::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PersistedConfig {
    container_id: Option<String>,
    initial_page_size: Option<usize>,
    columns: Option<usize>,
    infinite_distance: Option<f64>,
    /// Field name, or an empty string to disable query matching.
    query_by: Option<String>,
    /// Field name, or an empty string to disable category filtering.
    filter_by: Option<String>,
    all_text: Option<String>,
    backdrop: Option<bool>,
    empty_message: Option<String>,
    viewport_height: Option<f64>,
    card_height: Option<f64>,
    chrome_height: Option<f64>,
}

/// Config path used when none is given: `careers.ron` next to the page.
pub fn default_config_path(page: &Path) -> PathBuf {
    page.with_file_name(CONFIG_FILENAME)
}

pub fn load_config(path: &Path) -> AppConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            careers_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    let persisted: PersistedConfig = match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            careers_warn!("Failed to parse config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    careers_info!("Loaded config from {:?}", path);
    apply(persisted)
}

fn apply(persisted: PersistedConfig) -> AppConfig {
    let mut config = AppConfig::default();
    let grid = &mut config.grid;

    if let Some(id) = persisted.container_id {
        config.container_id = id;
    }
    if let Some(size) = persisted.initial_page_size {
        grid.initial_page_size = size;
    }
    if let Some(columns) = persisted.columns {
        if columns == 0 {
            careers_warn!("Ignoring columns = 0; keeping {}", grid.columns);
        } else {
            grid.columns = columns;
        }
    }
    if let Some(distance) = persisted.infinite_distance {
        grid.infinite_distance = distance;
    }
    if let Some(name) = persisted.query_by {
        grid.query_field = field_setting("query_by", &name, grid.query_field);
    }
    if let Some(name) = persisted.filter_by {
        grid.filter_field = field_setting("filter_by", &name, grid.filter_field);
    }
    if let Some(text) = persisted.all_text {
        grid.all_text = text;
    }
    if let Some(backdrop) = persisted.backdrop {
        grid.backdrop = backdrop;
    }
    if let Some(message) = persisted.empty_message {
        grid.empty_message = message;
    }

    config.layout.columns = config.grid.columns;
    if let Some(height) = persisted.viewport_height {
        config.layout.viewport_height = height;
    }
    if let Some(height) = persisted.card_height {
        config.layout.card_height = height;
    }
    if let Some(height) = persisted.chrome_height {
        config.layout.chrome_height = height;
    }
    config
}

fn field_setting(
    key: &str,
    name: &str,
    fallback: Option<ListingField>,
) -> Option<ListingField> {
    if name.is_empty() {
        return None;
    }
    match ListingField::parse(name) {
        Some(field) => Some(field),
        None => {
            careers_warn!("Unknown field {:?} for {}; keeping default", name, key);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(
                columns: Some(3),
                query_by: Some("summary"),
                filter_by: Some(""),
                all_text: Some("Everything"),
                card_height: Some(120.0),
            )"#,
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.grid.columns, 3);
        assert_eq!(config.layout.columns, 3);
        assert_eq!(config.grid.query_field, Some(ListingField::Summary));
        assert_eq!(config.grid.filter_field, None);
        assert_eq!(config.grid.all_text, "Everything");
        assert_eq!(config.grid.initial_page_size, 6);
        assert_eq!(config.layout.card_height, 120.0);
        assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        careers_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(columns: ").unwrap();
        assert_eq!(load_config(&path), AppConfig::default());
    }

    #[test]
    fn unknown_field_name_keeps_default() {
        let config = apply(PersistedConfig {
            query_by: Some("salary".to_string()),
            columns: Some(0),
            ..PersistedConfig::default()
        });
        assert_eq!(config.grid.query_field, Some(ListingField::Title));
        assert_eq!(config.grid.columns, 1);
    }

    #[test]
    fn config_path_sits_next_to_page() {
        let path = default_config_path(Path::new("site/careers/index.html"));
        assert_eq!(path, Path::new("site/careers/careers.ron"));
    }
}
