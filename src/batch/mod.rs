//! Batch restyling of SVG-bearing JSON files.
//!
//! Every string leaf that starts with `<svg` is passed through
//! [`restyle`](crate::transform::restyle). A file is written back only when
//! one of its leaves changed.

use crate::error::{Error, Result};
use crate::transform::{palette_from_svg, restyle};
use crate::types::Palette;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const DEFAULT_DIR: &str = "JSONs/Body";
pub const DEFAULT_TEMPLATE: &str = "collateral-base-amaave.json";

/// Where to find the files and which colors to apply
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub dir: PathBuf,
    /// File name of the template inside `dir`; it is never rewritten
    pub template: String,
    pub palette: Palette,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_DIR),
            template: DEFAULT_TEMPLATE.to_string(),
            palette: Palette::default(),
        }
    }
}

impl BatchConfig {
    pub fn template_path(&self) -> PathBuf {
        self.dir.join(&self.template)
    }
}

/// Outcome for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Updated,
    Unchanged,
    Failed(String),
}

/// Progress notifications emitted by [`run_with`]
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Found(usize),
    Processing(&'a Path),
    Finished(&'a Path, &'a FileStatus),
}

/// Per-file outcomes, in processing order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub files: Vec<(PathBuf, FileStatus)>,
}

impl BatchReport {
    pub fn updated(&self) -> usize {
        self.count(|s| *s == FileStatus::Updated)
    }

    pub fn unchanged(&self) -> usize {
        self.count(|s| *s == FileStatus::Unchanged)
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|(_, s)| pred(s)).count()
    }
}

/// Restyle every SVG leaf under `value`. Returns true if any leaf changed.
pub fn restyle_value(value: &mut Value, palette: &Palette) -> bool {
    match value {
        Value::String(s) if s.trim_start().starts_with("<svg") => {
            let updated = restyle(s, palette);
            if updated == *s {
                return false;
            }
            *s = updated;
            true
        }
        Value::Array(items) => items
            .iter_mut()
            .fold(false, |changed, item| restyle_value(item, palette) || changed),
        Value::Object(map) => map
            .values_mut()
            .fold(false, |changed, item| restyle_value(item, palette) || changed),
        _ => false,
    }
}

/// Restyle one JSON file in place. Unchanged files are not written.
pub fn restyle_file(path: &Path, palette: &Palette) -> Result<FileStatus> {
    let mut value = read_json(path)?;

    if !restyle_value(&mut value, palette) {
        debug!(path = %path.display(), "no svg leaf changed");
        return Ok(FileStatus::Unchanged);
    }

    let text =
        serde_json::to_string_pretty(&value).map_err(|e| Error::Json(path.to_path_buf(), e))?;
    fs::write(path, text).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    info!(path = %path.display(), "updated");
    Ok(FileStatus::Updated)
}

/// Every `*.json` file in `dir` except `template`, sorted by name.
pub fn collect_targets(dir: &Path, template: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::Io(dir.to_path_buf(), e))?;

    let mut targets = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::Io(dir.to_path_buf(), e))?.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_template = path.file_name().is_some_and(|name| name == template);
        if path.is_file() && is_json && !is_template {
            targets.push(path);
        }
    }
    targets.sort();
    Ok(targets)
}

/// Palette taken from the first SVG leaf of the template that defines one.
pub fn template_palette(path: &Path) -> Result<Option<Palette>> {
    let value = read_json(path)?;
    Ok(find_palette(&value))
}

fn find_palette(value: &Value) -> Option<Palette> {
    match value {
        Value::String(s) if s.trim_start().starts_with("<svg") => palette_from_svg(s),
        Value::Array(items) => items.iter().find_map(find_palette),
        Value::Object(map) => map.values().find_map(find_palette),
        _ => None,
    }
}

pub fn run(config: &BatchConfig) -> Result<BatchReport> {
    run_with(config, |_| {})
}

/// Restyle every target file, reporting progress through `on_event`.
///
/// A missing template or directory aborts before any file is touched. A
/// failure on one file is recorded in the report and the batch moves on.
pub fn run_with<F>(config: &BatchConfig, mut on_event: F) -> Result<BatchReport>
where
    F: FnMut(BatchEvent<'_>),
{
    let template = config.template_path();
    if !template.is_file() {
        return Err(Error::MissingTemplate(template));
    }
    if !config.dir.is_dir() {
        return Err(Error::MissingDirectory(config.dir.clone()));
    }

    let targets = collect_targets(&config.dir, &config.template)?;
    on_event(BatchEvent::Found(targets.len()));

    let mut report = BatchReport::default();
    for path in targets {
        on_event(BatchEvent::Processing(&path));
        let status = match restyle_file(&path, &config.palette) {
            Ok(status) => status,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping file");
                FileStatus::Failed(e.to_string())
            }
        };
        on_event(BatchEvent::Finished(&path, &status));
        report.files.push((path, status));
    }
    Ok(report)
}

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&text).map_err(|e| Error::Json(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_restyle_value_nested() {
        let mut value = json!({
            "name": "body",
            "svgs": [
                { "front": "<svg><style>.gotchi-cheek{fill:#000000}</style></svg>" },
                "  <svg><style>.gotchi-primary{fill:#b6509e}</style></svg>",
                ".gotchi-cheek{fill:#000000}",
                42
            ]
        });
        assert!(restyle_value(&mut value, &Palette::default()));
        assert_eq!(
            value["svgs"][0]["front"],
            "<svg><style>.gotchi-cheek{fill:#f696c6}</style></svg>"
        );
        // not an svg document
        assert_eq!(value["svgs"][2], ".gotchi-cheek{fill:#000000}");
    }

    #[test]
    fn test_restyle_value_unchanged() {
        let mut value = json!(["<svg><style>.gotchi-primary{fill:#b6509e}</style></svg>", null]);
        assert!(!restyle_value(&mut value, &Palette::default()));
    }

    #[test]
    fn test_find_palette() {
        let value = json!({
            "a": "<svg></svg>",
            "b": "<svg><style>.gotchi-primary{fill:#111111}.gotchi-secondary{fill:#222222}.gotchi-cheek{fill:#333333}</style></svg>"
        });
        let palette = find_palette(&value).unwrap();
        assert_eq!(palette, Palette::new("#111111", "#222222", "#333333").unwrap());
    }

    #[test]
    fn test_report_counts() {
        let report = BatchReport {
            files: vec![
                (PathBuf::from("a.json"), FileStatus::Updated),
                (PathBuf::from("b.json"), FileStatus::Unchanged),
                (PathBuf::from("c.json"), FileStatus::Failed("bad".into())),
                (PathBuf::from("d.json"), FileStatus::Updated),
            ],
        };
        assert_eq!(report.updated(), 2);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.failed(), 1);
    }
}
