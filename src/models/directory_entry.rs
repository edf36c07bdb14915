use serde::{Deserialize, Serialize};

/// One subdirectory found under the scanned path, with the caller-configured
/// metadata copied onto it. Built fresh per scan, never mutated afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntryRecord {
    pub name: String,
    pub root_path: String,
    pub paths: Vec<String>,
    pub tags: Vec<String>,
    pub enabled: bool,
}
