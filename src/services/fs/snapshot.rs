use crate::core::errors::{Error, Result};
use crate::models::config::{ExtraConfig, JsonFormat, SnapshotConfig, DEFAULT_SNAPSHOT_FILE_NAME};
use crate::models::directory_entry::DirectoryEntryRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tokio::task;
use tracing::debug;

pub struct ScanParams<'a> {
    pub project_path: &'a Path,
    pub config: Option<&'a SnapshotConfig>,
    pub extra: Option<&'a ExtraConfig>,
    pub format: Option<JsonFormat>,
}

pub struct WriteSnapshotParams<'a> {
    pub project_path: &'a Path,
    pub out_dir: Option<&'a Path>,
    pub config: Option<&'a SnapshotConfig>,
    pub extra: Option<&'a ExtraConfig>,
    pub format: Option<JsonFormat>,
}

pub async fn scan(params: ScanParams<'_>) -> Result<String> {
    // Use a blocking task for filesystem IO to avoid blocking async executors.
    let project_path = params.project_path.to_path_buf();
    let config = params.config.cloned();
    let extra = params.extra.cloned();
    let format = params.format;

    task::spawn_blocking(move || scan_impl(&project_path, config.as_ref(), extra.as_ref(), format))
        .await
        .unwrap()
}

/// Synchronous variant for contexts where an async runtime is not available.
pub fn scan_sync(params: ScanParams<'_>) -> Result<String> {
    scan_impl(params.project_path, params.config, params.extra, params.format)
}

pub async fn write_snapshot(params: WriteSnapshotParams<'_>) -> Result<String> {
    let project_path = params.project_path.to_path_buf();
    let out_dir = params.out_dir.map(|p| p.to_path_buf());
    let config = params.config.cloned();
    let extra = params.extra.cloned();
    let format = params.format;

    task::spawn_blocking(move || {
        write_snapshot_impl(
            &project_path,
            out_dir.as_deref(),
            config.as_ref(),
            extra.as_ref(),
            format,
        )
    })
    .await
    .unwrap()
}

/// Synchronous variant for contexts where an async runtime is not available.
pub fn write_snapshot_sync(params: WriteSnapshotParams<'_>) -> Result<String> {
    write_snapshot_impl(
        params.project_path,
        params.out_dir,
        params.config,
        params.extra,
        params.format,
    )
}

fn scan_impl(
    project_path: &Path,
    config: Option<&SnapshotConfig>,
    extra: Option<&ExtraConfig>,
    format: Option<JsonFormat>,
) -> Result<String> {
    if !project_path.is_absolute() {
        return Err(Error::InvalidPath(project_path.to_path_buf()));
    }

    let format = format.unwrap_or_default();
    let records = collect_records(project_path, config).map_err(read_stage)?;
    debug!(
        "collected {} directory records under {}",
        records.len(),
        project_path.display()
    );

    let json = json_format(&records, format).map_err(read_stage)?;

    let enabled = config.map(SnapshotConfig::enabled_or_default).unwrap_or(true);
    let filter = extra.and_then(|e| e.filter_dir_names.as_deref());
    match filter {
        Some(names) if enabled => {
            // Filters the re-parsed array rather than the in-memory records,
            // so the result reflects exactly what was serialized.
            let parsed: Vec<DirectoryEntryRecord> =
                serde_json::from_str(&json).map_err(read_stage)?;
            let kept: Vec<DirectoryEntryRecord> = parsed
                .into_iter()
                .filter(|record| !names.contains(&record.name))
                .collect();
            json_format(&kept, format).map_err(read_stage)
        }
        _ => Ok(json),
    }
}

fn write_snapshot_impl(
    project_path: &Path,
    out_dir: Option<&Path>,
    config: Option<&SnapshotConfig>,
    extra: Option<&ExtraConfig>,
    format: Option<JsonFormat>,
) -> Result<String> {
    let extra = extra.cloned().unwrap_or_else(ExtraConfig::default_for_write);
    let json = scan_impl(project_path, config, Some(&extra), format)?;

    let file_name = extra
        .file_name
        .as_deref()
        .unwrap_or(DEFAULT_SNAPSHOT_FILE_NAME);
    let target = out_dir
        .unwrap_or(project_path)
        .join(format!("{}.json", file_name));
    fs::write(&target, json.as_bytes()).map_err(write_stage)?;
    debug!("snapshot written to {}", target.display());

    Ok(json)
}

fn collect_records(
    project_path: &Path,
    config: Option<&SnapshotConfig>,
) -> std::io::Result<Vec<DirectoryEntryRecord>> {
    let merged = config.cloned().unwrap_or_default();
    let paths = merged.paths_or_default();
    let tags = merged.tags_or_default();
    let enabled = merged.enabled_or_default();

    // Keep filesystem listing order; whether a symlinked directory counts is
    // whatever the dirent type reporting says.
    let mut records = Vec::new();
    for entry in fs::read_dir(project_path)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let root_path = project_path.join(&name).to_string_lossy().into_owned();
        records.push(DirectoryEntryRecord {
            name,
            root_path,
            paths: paths.clone(),
            tags: tags.clone(),
            enabled,
        });
    }
    Ok(records)
}

fn json_format<T: Serialize>(value: &T, format: JsonFormat) -> serde_json::Result<String> {
    let indent = " ".repeat(format.space);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json emits valid utf-8"))
}

fn read_stage<E: Display>(err: E) -> Error {
    Error::ReadDirectory(err.to_string())
}

fn write_stage(err: std::io::Error) -> Error {
    Error::WriteFile(err.to_string())
}
