// SPDX-License-Identifier: PMPL-1.0-or-later
//! Jargon analyzer - WCAG 3.1.3 Unusual Words (Level AAA)
//!
//! Flags every `<p>` where more than 20% of the words are missing from the
//! common-word vocabulary in effect for this analysis.

use crate::analyzers::{AnalysisContext, Analyzer, CheckKind};
use crate::document;
use crate::error::Result;
use crate::locator::locate;
use crate::readability::{jargon_ratio, JARGON_THRESHOLD};

/// Jargon density analyzer
pub struct JargonAnalyzer;

impl Analyzer for JargonAnalyzer {
    fn name(&self) -> &str {
        "Jargon Analyzer"
    }

    fn description(&self) -> &str {
        "Flags paragraphs where over 20% of words are uncommon (WCAG 3.1.3)"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::JargonRatio
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>> {
        Ok(document::select(ctx.document, "p")?
            .into_iter()
            .filter(|p| {
                jargon_ratio(&document::text_content(*p), ctx.vocabulary)
                    .is_some_and(|ratio| ratio > JARGON_THRESHOLD)
            })
            .map(locate)
            .collect())
    }
}
