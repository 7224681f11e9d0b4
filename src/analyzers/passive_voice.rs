// SPDX-License-Identifier: PMPL-1.0-or-later
//! Passive voice analyzer
//!
//! Flags `<p>` and `<li>` elements containing a form of "to be" followed by
//! a word ending in "ed". This is a pattern match, not a grammar parse: it
//! misses irregular participles ("was written") and can fire on adjectives
//! ("is tired").

use crate::analyzers::{AnalysisContext, Analyzer, CheckKind};
use crate::document;
use crate::error::Result;
use crate::locator::locate;
use regex::Regex;
use std::sync::LazyLock;

static PASSIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(am|is|was|were|be|been|being)\s+\w+ed\b").expect("valid regex")
});

/// Passive voice analyzer
pub struct PassiveVoiceAnalyzer;

impl Analyzer for PassiveVoiceAnalyzer {
    fn name(&self) -> &str {
        "Passive Voice Analyzer"
    }

    fn description(&self) -> &str {
        "Flags paragraphs and list items that use passive constructions"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::PassiveVoice
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>> {
        Ok(document::select(ctx.document, "p, li")?
            .into_iter()
            .filter(|el| is_passive(&document::text_content(*el)))
            .map(locate)
            .collect())
    }
}

/// Whether `text` contains a "be + -ed" construction
pub fn is_passive(text: &str) -> bool {
    PASSIVE_RE.is_match(text)
}
