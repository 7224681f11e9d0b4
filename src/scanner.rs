// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for running the analysis across a site tree.
//!
//! Walks directory trees, picks out HTML files, and analyzes each one
//! against the same vocabulary.

use crate::analyze_with;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::report::{Report, ScanEntry};
use crate::vocabulary::Vocabulary;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Analyze every HTML file under `dir`, in path order
pub fn scan_directory(
    dir: &Path,
    config: &ScanConfig,
    vocabulary: &Vocabulary,
) -> Result<Vec<ScanEntry>> {
    let mut entries = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // The root itself is never skipped, even if hidden
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_str().unwrap_or("");
            !config.skips_dir(name) && !name.starts_with('.')
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !config.accepts_extension(ext) {
            continue;
        }

        match scan_file(path, vocabulary) {
            Ok(report) => entries.push(ScanEntry::new(path.to_path_buf(), report)),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    let issues: usize = entries.iter().map(|e| e.report.total()).sum();
    info!("Scanned {} files, found {} issues", entries.len(), issues);

    Ok(entries)
}

/// Analyze a single HTML file
pub fn scan_file(path: &Path, vocabulary: &Vocabulary) -> Result<Report> {
    let content = std::fs::read_to_string(path)?;
    Ok(analyze_with(&content, vocabulary))
}
