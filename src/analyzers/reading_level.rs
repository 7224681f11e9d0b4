// SPDX-License-Identifier: PMPL-1.0-or-later
//! Reading level analyzer - WCAG 3.1.5 Reading Level (Level AAA)
//!
//! Scores every `<p>` with the Gunning-Fog index and flags paragraphs above
//! grade 12. Paragraphs without sentences or words are skipped.

use crate::analyzers::{AnalysisContext, Analyzer, CheckKind};
use crate::document;
use crate::error::Result;
use crate::locator::locate;
use crate::readability::{gunning_fog, FOG_THRESHOLD};

/// Gunning-Fog analyzer for paragraphs
pub struct GunningFogAnalyzer;

impl Analyzer for GunningFogAnalyzer {
    fn name(&self) -> &str {
        "Reading Level Analyzer"
    }

    fn description(&self) -> &str {
        "Flags paragraphs with a Gunning-Fog index above 12 (WCAG 3.1.5)"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::GunningFog
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>> {
        Ok(document::select(ctx.document, "p")?
            .into_iter()
            .filter(|p| {
                gunning_fog(&document::text_content(*p)).is_some_and(|fog| fog > FOG_THRESHOLD)
            })
            .map(locate)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    fn run(html: &str) -> Vec<String> {
        let doc = document::parse(html);
        let vocab = Vocabulary::builtin();
        GunningFogAnalyzer
            .analyze(&AnalysisContext::new(&doc, &vocab))
            .expect("analysis succeeds")
    }

    #[test]
    fn test_simple_paragraph_passes() {
        assert!(run("<p>The cat sat on the mat. The dog ran fast. I am happy.</p>").is_empty());
    }

    #[test]
    fn test_dense_paragraph_flagged() {
        let issues = run(
            "<p id=\"legal\">Notwithstanding the aforementioned considerations, \
             institutional interoperability necessitates comprehensive organizational \
             harmonization of heterogeneous infrastructural dependencies.</p>",
        );
        assert_eq!(issues, vec!["html:nth-of-type(1) > body:nth-of-type(1) > p#legal"]);
    }

    #[test]
    fn test_empty_paragraph_skipped() {
        assert!(run("<p></p><p>   </p><p>...</p>").is_empty());
    }

    #[test]
    fn test_nested_text_is_scored() {
        let issues = run(
            "<p>Extraordinarily <em>unnecessarily</em> <strong>complicated</strong> \
             terminology overwhelms readers</p>",
        );
        assert_eq!(issues.len(), 1);
    }
}
