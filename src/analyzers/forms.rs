// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label analyzer - WCAG 3.3.2 Labels or Instructions (Level A)
//!
//! A form control counts as labelled when any of these hold:
//! - a `<label for="...">` anywhere in the document references its `id`
//! - it is nested inside a `<label>`
//! - it has a non-empty `aria-label`

use crate::analyzers::{AnalysisContext, Analyzer, CheckKind};
use crate::document;
use crate::error::Result;
use crate::locator::locate;
use scraper::ElementRef;
use std::collections::HashSet;

/// Form controls that need a label
pub const FORM_CONTROLS: &str = "input, textarea, select";

/// Form label analyzer
pub struct LabelAnalyzer;

impl Analyzer for LabelAnalyzer {
    fn name(&self) -> &str {
        "Form Label Analyzer"
    }

    fn description(&self) -> &str {
        "Checks that inputs, textareas and selects have a label (WCAG 3.3.2)"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::MissingLabel
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>> {
        let label_targets: HashSet<&str> = document::select(ctx.document, "label")?
            .into_iter()
            .filter_map(|label| label.value().attr("for"))
            .collect();

        Ok(document::select(ctx.document, FORM_CONTROLS)?
            .into_iter()
            .filter(|el| !is_labelled(*el, &label_targets))
            .map(locate)
            .collect())
    }
}

/// Whether a control is labelled, given every `label[for]` value in the document
pub fn is_labelled(element: ElementRef<'_>, label_targets: &HashSet<&str>) -> bool {
    let referenced = document::non_empty_attr(element, "id")
        .is_some_and(|id| label_targets.contains(id));
    let wrapped = document::ancestor_named(element, &["label"]).is_some();
    let aria = document::non_empty_attr(element, "aria-label").is_some();

    referenced || wrapped || aria
}
