// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text analyzer - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Flags every `<img>` whose `alt` attribute is missing or whitespace-only.

use crate::analyzers::{AnalysisContext, Analyzer, CheckKind};
use crate::document;
use crate::error::Result;
use crate::locator::locate;
use scraper::ElementRef;

/// Analyzer for image alt text
pub struct AltTextAnalyzer;

impl Analyzer for AltTextAnalyzer {
    fn name(&self) -> &str {
        "Alt Text Analyzer"
    }

    fn description(&self) -> &str {
        "Checks <img> elements for non-empty alt text (WCAG 1.1.1)"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::MissingAlt
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>> {
        Ok(document::select(ctx.document, "img")?
            .into_iter()
            .filter(|img| lacks_alt_text(*img))
            .map(locate)
            .collect())
    }
}

/// True when `alt` is absent or blank
pub fn lacks_alt_text(img: ElementRef<'_>) -> bool {
    img.value()
        .attr("alt")
        .map_or(true, |alt| alt.trim().is_empty())
}
