// SPDX-License-Identifier: PMPL-1.0-or-later
//! Analysis reports and their rendering.
//!
//! A [`Report`] always carries all eight check keys, each with a possibly
//! empty list of locators or warning strings. It serialises to a JSON object
//! with exactly those keys, which is the shape the browser extension consumes.
//!
//! Supported output formats:
//! - Text: human-readable, grouped by check
//! - JSON: the report object itself

use crate::analyzers::CheckKind;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefixes of entries that are warnings rather than locators
const WARNING_PREFIXES: &[&str] = &["Warning:", "Likely too small:"];

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Result of one analysis: check key to locators/warnings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub missing_alt: Vec<String>,
    #[serde(default)]
    pub low_contrast: Vec<String>,
    #[serde(default)]
    pub missing_label: Vec<String>,
    #[serde(default)]
    pub gunning_fog: Vec<String>,
    #[serde(default)]
    pub jargon_ratio: Vec<String>,
    #[serde(default)]
    pub inclusive_language: Vec<String>,
    #[serde(default)]
    pub small_touch_targets: Vec<String>,
    #[serde(default)]
    pub passive_voice: Vec<String>,
}

impl Report {
    /// Entries for one check
    pub fn get(&self, kind: CheckKind) -> &[String] {
        match kind {
            CheckKind::MissingAlt => &self.missing_alt,
            CheckKind::LowContrast => &self.low_contrast,
            CheckKind::MissingLabel => &self.missing_label,
            CheckKind::GunningFog => &self.gunning_fog,
            CheckKind::JargonRatio => &self.jargon_ratio,
            CheckKind::InclusiveLanguage => &self.inclusive_language,
            CheckKind::SmallTouchTargets => &self.small_touch_targets,
            CheckKind::PassiveVoice => &self.passive_voice,
        }
    }

    /// Replace the entries for one check
    pub fn set(&mut self, kind: CheckKind, entries: Vec<String>) {
        let slot = match kind {
            CheckKind::MissingAlt => &mut self.missing_alt,
            CheckKind::LowContrast => &mut self.low_contrast,
            CheckKind::MissingLabel => &mut self.missing_label,
            CheckKind::GunningFog => &mut self.gunning_fog,
            CheckKind::JargonRatio => &mut self.jargon_ratio,
            CheckKind::InclusiveLanguage => &mut self.inclusive_language,
            CheckKind::SmallTouchTargets => &mut self.small_touch_targets,
            CheckKind::PassiveVoice => &mut self.passive_voice,
        };
        *slot = entries;
    }

    /// Every check with its entries, in report order
    pub fn iter(&self) -> impl Iterator<Item = (CheckKind, &[String])> + '_ {
        CheckKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Total entries across all checks
    pub fn total(&self) -> usize {
        self.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Entries that are warnings rather than locators
    pub fn warning_count(&self) -> usize {
        self.iter()
            .flat_map(|(_, entries)| entries)
            .filter(|e| is_warning(e))
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Whether a report entry is a warning string rather than a locator
pub fn is_warning(entry: &str) -> bool {
    WARNING_PREFIXES.iter().any(|p| entry.starts_with(p))
}

/// Report for one file of a directory scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanEntry {
    pub file: PathBuf,
    pub analyzed_at: DateTime<Utc>,
    pub report: Report,
}

impl ScanEntry {
    pub fn new(file: PathBuf, report: Report) -> Self {
        Self { file, analyzed_at: Utc::now(), report }
    }
}

/// Render a single report
pub fn render(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => to_json(report),
    }
}

/// Render the results of a directory scan
pub fn render_scan(entries: &[ScanEntry], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&entries),
        OutputFormat::Text => {
            let mut output = String::new();
            for entry in entries {
                output.push_str(&format!("##### {}\n", entry.file.display()));
                output.push_str(&render_text(&entry.report));
                output.push('\n');
            }
            let total: usize = entries.iter().map(|e| e.report.total()).sum();
            output.push_str(&format!(
                "Scanned {} file(s), {} issue(s) in total\n",
                entries.len(),
                total
            ));
            output
        }
    }
}

/// Persist a report as pretty JSON
pub fn write_json(report: &Report, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}

/// Read a report previously written with [`write_json`]
pub fn read_json(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn render_text(report: &Report) -> String {
    let mut output = String::new();

    output.push_str("=== WebBridge Accessibility Report ===\n\n");

    if report.is_clean() {
        output.push_str("No accessibility issues found. All checks passed.\n");
        return output;
    }

    let warnings = report.warning_count();
    output.push_str(&format!(
        "Found {} issue(s): {} located element(s), {} warning(s)\n\n",
        report.total(),
        report.total() - warnings,
        warnings
    ));

    for (kind, entries) in report.iter() {
        if entries.is_empty() {
            continue;
        }

        output.push_str(&format!("--- {} ({}) ---\n", kind, entries.len()));
        for entry in entries {
            output.push_str(&format!("  {}\n", entry));
        }
        output.push('\n');
    }

    output
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}
