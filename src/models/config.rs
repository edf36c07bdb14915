use serde::{Deserialize, Serialize};

/// Output file stem used by `write_snapshot` when the caller supplies no
/// extra configuration.
pub const DEFAULT_SNAPSHOT_FILE_NAME: &str = "project_dirs";

/// Caller-supplied overlay for the per-record metadata. A present field
/// replaces the default wholesale; an absent field keeps it
/// (`paths: []`, `tags: []`, `enabled: true`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotConfig {
    pub paths: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

impl SnapshotConfig {
    pub fn paths_or_default(&self) -> Vec<String> {
        self.paths.clone().unwrap_or_default()
    }

    pub fn tags_or_default(&self) -> Vec<String> {
        self.tags.clone().unwrap_or_default()
    }

    pub fn enabled_or_default(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Auxiliary options for name filtering and output naming. Not part of the
/// per-record metadata payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraConfig {
    pub filter_dir_names: Option<Vec<String>>,
    pub file_name: Option<String>,
}

impl ExtraConfig {
    /// Process-wide fallback substituted when `write_snapshot` is called
    /// without an extra configuration: default file name, no filter.
    pub fn default_for_write() -> Self {
        Self {
            filter_dir_names: None,
            file_name: Some(DEFAULT_SNAPSHOT_FILE_NAME.to_string()),
        }
    }
}

/// Indentation width of the produced JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFormat {
    pub space: usize,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self { space: 4 }
    }
}
