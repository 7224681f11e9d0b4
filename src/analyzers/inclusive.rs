// SPDX-License-Identifier: PMPL-1.0-or-later
//! Inclusive language analyzer
//!
//! Scans every text node for ableist or otherwise non-inclusive terms and
//! reports the element owning each matching text node. An element with
//! several matches is reported once, at the position of its first match.

use crate::analyzers::{AnalysisContext, Analyzer, CheckKind};
use crate::document;
use crate::error::Result;
use crate::locator::locate;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Non-inclusive terms, matched case-insensitively as whole words or phrases
pub const BANNED_TERMS: &[&str] = &[
    "crazy", "lame", "insane", "dumb", "retarded", "handicapped", "crippled", "invalid",
    "deaf and dumb", "moron", "idiot", "imbecile", "lunatic", "nuts", "buggy", "spastic",
    "gimp", "palsy", "deformed", "handicapable", "special needs", "the disabled",
    "hearing impaired", "vision impaired", "epileptic", "autistic", "cripple",
];

static BANNED_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BANNED_TERMS
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b({})\b", alternation)).expect("valid regex")
});

/// Inclusive language analyzer
pub struct InclusiveLanguageAnalyzer;

impl Analyzer for InclusiveLanguageAnalyzer {
    fn name(&self) -> &str {
        "Inclusive Language Analyzer"
    }

    fn description(&self) -> &str {
        "Flags elements whose text uses non-inclusive terminology"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::InclusiveLanguage
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>> {
        let owners = flagged_owners(document::text_nodes(ctx.document));
        Ok(dedup_in_order(owners.into_iter().map(locate)))
    }
}

/// Whether `text` contains any banned term
pub fn contains_banned_term(text: &str) -> bool {
    BANNED_RE.is_match(text)
}

/// Every banned term found in `text`, as written
pub fn banned_terms_in(text: &str) -> Vec<&str> {
    BANNED_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Owners of the text fragments that contain a banned term, in input order
pub fn flagged_owners<'t, T, I>(fragments: I) -> Vec<T>
where
    I: IntoIterator<Item = (&'t str, T)>,
{
    fragments
        .into_iter()
        .filter(|(text, _)| contains_banned_term(text))
        .map(|(_, owner)| owner)
        .collect()
}

fn dedup_in_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}
