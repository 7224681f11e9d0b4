// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility and readability checks.
//!
//! Each analyzer is a pure, read-only pass over the parsed document that
//! returns locators for the offending elements. The contrast and
//! touch-target checks may also return in-band warning strings when they
//! cannot decide. Analyzers do not depend on one another.

pub mod alt_text;
pub mod contrast;
pub mod forms;
pub mod inclusive;
pub mod jargon;
pub mod passive_voice;
pub mod reading_level;
pub mod touch_target;

use crate::error::Result;
use crate::report::Report;
use crate::vocabulary::Vocabulary;
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The eight checks, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckKind {
    MissingAlt,
    LowContrast,
    MissingLabel,
    GunningFog,
    JargonRatio,
    InclusiveLanguage,
    SmallTouchTargets,
    PassiveVoice,
}

impl CheckKind {
    pub const ALL: [CheckKind; 8] = [
        CheckKind::MissingAlt,
        CheckKind::LowContrast,
        CheckKind::MissingLabel,
        CheckKind::GunningFog,
        CheckKind::JargonRatio,
        CheckKind::InclusiveLanguage,
        CheckKind::SmallTouchTargets,
        CheckKind::PassiveVoice,
    ];

    /// Report key
    pub fn key(&self) -> &'static str {
        match self {
            CheckKind::MissingAlt => "missingAlt",
            CheckKind::LowContrast => "lowContrast",
            CheckKind::MissingLabel => "missingLabel",
            CheckKind::GunningFog => "gunningFog",
            CheckKind::JargonRatio => "jargonRatio",
            CheckKind::InclusiveLanguage => "inclusiveLanguage",
            CheckKind::SmallTouchTargets => "smallTouchTargets",
            CheckKind::PassiveVoice => "passiveVoice",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CheckKind::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown check: {}", s))
    }
}

/// Everything one analysis call needs
pub struct AnalysisContext<'a> {
    pub document: &'a Html,
    pub vocabulary: &'a Vocabulary,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(document: &'a Html, vocabulary: &'a Vocabulary) -> Self {
        Self { document, vocabulary }
    }
}

/// Trait implemented by all analyzers
pub trait Analyzer: Send + Sync {
    /// Human-readable name of this analyzer
    fn name(&self) -> &str;

    /// Short description of what this analyzer checks
    fn description(&self) -> &str;

    /// Report slot this analyzer fills
    fn kind(&self) -> CheckKind;

    /// Locators (or warning strings) for every offending element
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>>;
}

/// One instance of every analyzer, in report order
pub fn all() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(alt_text::AltTextAnalyzer),
        Box::new(contrast::ContrastAnalyzer),
        Box::new(forms::LabelAnalyzer),
        Box::new(reading_level::GunningFogAnalyzer),
        Box::new(jargon::JargonAnalyzer),
        Box::new(inclusive::InclusiveLanguageAnalyzer),
        Box::new(touch_target::TouchTargetAnalyzer),
        Box::new(passive_voice::PassiveVoiceAnalyzer),
    ]
}

/// Run every analyzer. A failing analyzer is logged and leaves its slot
/// empty; the others are unaffected.
pub fn run_all(ctx: &AnalysisContext<'_>) -> Report {
    let mut report = Report::default();

    for analyzer in all() {
        let kind = analyzer.kind();
        let entries = match analyzer.analyze(ctx) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(check = %kind, "{} failed: {}", analyzer.name(), e);
                Vec::new()
            }
        };
        debug!(check = %kind, count = entries.len(), "Check complete");
        report.set(kind, entries);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_check_once() {
        let kinds: Vec<_> = all().iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, CheckKind::ALL.to_vec());
    }

    #[test]
    fn test_check_kind_parse() {
        assert_eq!("missingAlt".parse::<CheckKind>(), Ok(CheckKind::MissingAlt));
        assert_eq!("PASSIVEVOICE".parse::<CheckKind>(), Ok(CheckKind::PassiveVoice));
        assert!("colorBlind".parse::<CheckKind>().is_err());
    }

    #[test]
    fn test_serde_key_matches_display() {
        for kind in CheckKind::ALL {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_analyzers_have_names() {
        for analyzer in all() {
            assert!(!analyzer.name().is_empty());
            assert!(!analyzer.description().is_empty());
        }
    }
}
