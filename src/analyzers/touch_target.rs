// SPDX-License-Identifier: PMPL-1.0-or-later
//! Touch target analyzer - WCAG 2.5.5 Target Size (Level AAA)
//!
//! Interactive elements should be at least 44x44 CSS pixels. Sizes come from
//! inline `width`/`height` declarations in `px`, then from the `width` and
//! `height` attributes. Without a rendered layout most sizes are unknown, so
//! the verdict is chosen by an ordered list of rules, first match wins:
//!
//! 1. a known dimension below 44px: too small
//! 2. both dimensions known: adequate
//! 3. `<a>`/`<button>` with at most 4 visible characters, or inside
//!    `<nav>`, `<header>` or `<toolbar>`: likely too small
//! 4. otherwise: size undetermined

use crate::analyzers::{AnalysisContext, Analyzer, CheckKind};
use crate::document;
use crate::error::Result;
use crate::locator::locate;
use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

/// Minimum target edge in CSS pixels
pub const MIN_TOUCH_TARGET_PX: u32 = 44;

/// Short labels at or below this many characters suggest a small target
pub const SHORT_LABEL_CHARS: usize = 4;

/// Interactive elements whose size is checked
pub const INTERACTIVE_ELEMENTS: &str = "button, a, input, textarea, select";

/// Containers that usually hold compact controls
const COMPACT_CONTAINERS: &[&str] = &["nav", "header", "toolbar"];

static WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*width\s*:\s*(\d+)px").expect("valid regex")
});

static HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*height\s*:\s*(\d+)px").expect("valid regex")
});

/// Touch target size analyzer
pub struct TouchTargetAnalyzer;

impl Analyzer for TouchTargetAnalyzer {
    fn name(&self) -> &str {
        "Touch Target Analyzer"
    }

    fn description(&self) -> &str {
        "Checks interactive elements are at least 44x44px (WCAG 2.5.5)"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::SmallTouchTargets
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        for el in document::select(ctx.document, INTERACTIVE_ELEMENTS)? {
            let facts = TargetFacts::of(el);
            let entry = match verdict(&facts) {
                Verdict::TooSmall => Some(locate(el)),
                Verdict::Adequate => None,
                Verdict::LikelyTooSmall => Some(format!(
                    "Likely too small: {} (short text or in nav/toolbar, no size info)",
                    locate(el)
                )),
                Verdict::Undetermined => Some(format!(
                    "Warning: Could not determine size for element: {}",
                    locate(el)
                )),
            };
            issues.extend(entry);
        }

        Ok(issues)
    }
}

/// What the rules can see about one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFacts {
    pub tag: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Character count of the trimmed visible text
    pub label_chars: usize,
    pub in_compact_container: bool,
}

impl TargetFacts {
    pub fn of(element: ElementRef<'_>) -> Self {
        let style = document::inline_style(element);
        Self {
            tag: document::tag_name(element).to_string(),
            width: dimension(element, &WIDTH_RE, style, "width"),
            height: dimension(element, &HEIGHT_RE, style, "height"),
            label_chars: document::stripped_text(element).chars().count(),
            in_compact_container: document::ancestor_named(element, COMPACT_CONTAINERS).is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooSmall,
    Adequate,
    LikelyTooSmall,
    Undetermined,
}

/// `None` means the rule does not apply and the next one is tried
pub type SizeRule = fn(&TargetFacts) -> Option<Verdict>;

pub const SIZE_RULES: &[SizeRule] = &[
    known_dimension_too_small,
    fully_sized,
    short_label_or_compact_container,
    undetermined,
];

/// Apply [`SIZE_RULES`] in order
pub fn verdict(facts: &TargetFacts) -> Verdict {
    SIZE_RULES
        .iter()
        .find_map(|rule| rule(facts))
        .unwrap_or(Verdict::Undetermined)
}

pub fn known_dimension_too_small(facts: &TargetFacts) -> Option<Verdict> {
    [facts.width, facts.height]
        .into_iter()
        .flatten()
        .any(|px| px < MIN_TOUCH_TARGET_PX)
        .then_some(Verdict::TooSmall)
}

pub fn fully_sized(facts: &TargetFacts) -> Option<Verdict> {
    (facts.width.is_some() && facts.height.is_some()).then_some(Verdict::Adequate)
}

pub fn short_label_or_compact_container(facts: &TargetFacts) -> Option<Verdict> {
    let short_label =
        matches!(facts.tag.as_str(), "a" | "button") && facts.label_chars <= SHORT_LABEL_CHARS;
    (short_label || facts.in_compact_container).then_some(Verdict::LikelyTooSmall)
}

pub fn undetermined(_facts: &TargetFacts) -> Option<Verdict> {
    Some(Verdict::Undetermined)
}

/// Inline `px` declaration, else the integer attribute of the same name
fn dimension(element: ElementRef<'_>, re: &Regex, style: &str, attr: &str) -> Option<u32> {
    re.captures(style)
        .and_then(|caps| caps[1].parse().ok())
        .or_else(|| {
            element
                .value()
                .attr(attr)
                .and_then(|v| v.trim().parse().ok())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;

    fn run(html: &str) -> Vec<String> {
        let doc = document::parse(html);
        let vocab = Vocabulary::builtin();
        TouchTargetAnalyzer
            .analyze(&AnalysisContext::new(&doc, &vocab))
            .expect("analysis succeeds")
    }

    fn facts(tag: &str) -> TargetFacts {
        TargetFacts { tag: tag.to_string(), ..Default::default() }
    }

    #[test]
    fn test_small_inline_size_flagged() {
        let issues = run(r#"<button style="width: 30px; height: 30px">Submit order</button>"#);
        assert_eq!(issues, vec!["html:nth-of-type(1) > body:nth-of-type(1) > button:nth-of-type(1)"]);
    }

    #[test]
    fn test_large_enough_passes() {
        assert!(run(r#"<button style="width:48px;height:48px">OK</button>"#).is_empty());
        assert!(run(r#"<input type="image" width="44" height="60" aria-label="Go">"#).is_empty());
    }

    #[test]
    fn test_attributes_used_when_no_style() {
        let issues = run(r#"<input type="image" width="20" height="50">"#);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].starts_with("Warning"));
    }

    #[test]
    fn test_one_small_dimension_is_enough() {
        let issues = run(r#"<a href="/" style="height: 20px">Read the full article</a>"#);
        assert_eq!(issues, vec!["html:nth-of-type(1) > body:nth-of-type(1) > a:nth-of-type(1)"]);
    }

    #[test]
    fn test_max_width_is_not_width() {
        let f = TargetFacts::of(
            document::select(
                &document::parse(r#"<button style="max-width: 10px">Continue</button>"#),
                "button",
            )
            .expect("valid selector")[0],
        );
        assert_eq!(f.width, None);
    }

    #[test]
    fn test_short_link_likely_too_small() {
        let issues = run(r#"<a href="/">Go</a>"#);
        assert_eq!(
            issues,
            vec!["Likely too small: html:nth-of-type(1) > body:nth-of-type(1) > a:nth-of-type(1) (short text or in nav/toolbar, no size info)"]
        );
    }

    #[test]
    fn test_nav_link_likely_too_small() {
        let issues = run(r#"<nav><a href="/docs">Documentation</a></nav>"#);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].starts_with("Likely too small: "));
    }

    #[test]
    fn test_unsized_input_undetermined() {
        let issues = run(r#"<form><input type="text" name="q"></form>"#);
        assert_eq!(
            issues,
            vec!["Warning: Could not determine size for element: html:nth-of-type(1) > body:nth-of-type(1) > form:nth-of-type(1) > input:nth-of-type(1)"]
        );
    }

    #[test]
    fn test_long_button_undetermined() {
        let issues = run("<button>Subscribe now</button>");
        assert!(issues[0].starts_with("Warning: Could not determine size"));
    }

    #[test]
    fn test_rules_in_isolation() {
        let mut f = facts("button");
        f.width = Some(50);
        assert_eq!(known_dimension_too_small(&f), None);
        assert_eq!(fully_sized(&f), None);
        f.height = Some(43);
        assert_eq!(known_dimension_too_small(&f), Some(Verdict::TooSmall));
        assert_eq!(fully_sized(&f), Some(Verdict::Adequate));

        let mut f = facts("input");
        assert_eq!(short_label_or_compact_container(&f), None);
        f.in_compact_container = true;
        assert_eq!(short_label_or_compact_container(&f), Some(Verdict::LikelyTooSmall));

        let f = TargetFacts { label_chars: 4, ..facts("a") };
        assert_eq!(short_label_or_compact_container(&f), Some(Verdict::LikelyTooSmall));
        let f = TargetFacts { label_chars: 5, ..facts("a") };
        assert_eq!(short_label_or_compact_container(&f), None);
    }

    #[test]
    fn test_partial_size_falls_through_to_heuristics() {
        let mut f = facts("button");
        f.width = Some(120);
        f.label_chars = 2;
        assert_eq!(verdict(&f), Verdict::LikelyTooSmall);
        f.label_chars = 20;
        assert_eq!(verdict(&f), Verdict::Undetermined);
    }
}
