// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast analyzer - WCAG 1.4.3 Contrast (Minimum) (Level AA)
//!
//! Only inline `style` attributes are read; there is no cascade. When a
//! color is not declared on the element itself it is inferred by an ordered
//! list of rules, first match wins:
//!
//! | Foreground                      | Background                                   |
//! |---------------------------------|----------------------------------------------|
//! | inline `color`                  | `nav` tag / `nav` class with no inline background: white |
//! | `<a>`: link blue `#0000ee`      | inline `background-color`                    |
//! | black                           | `<body>`, then `<html>` `background-color`   |
//! |                                 | white                                        |
//!
//! An inline declaration that fails to parse is ignored and the next rule
//! applies. A page background that is declared but unparseable leaves the
//! background undetermined, and the element is reported with a warning
//! instead of a locator.

use crate::analyzers::{AnalysisContext, Analyzer, CheckKind};
use crate::color::{contrast_ratio, Color, MIN_CONTRAST_RATIO};
use crate::document;
use crate::error::Result;
use crate::locator::locate;
use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

/// Elements whose text contrast is checked
pub const TEXT_ELEMENTS: &str = "p, span, a, h1, h2, h3, nav, button";

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*color\s*:\s*([^;]+)").expect("valid regex")
});

static BACKGROUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)background-color\s*:\s*([^;]+)").expect("valid regex")
});

/// Contrast analyzer for inline styles
pub struct ContrastAnalyzer;

impl Analyzer for ContrastAnalyzer {
    fn name(&self) -> &str {
        "Color Contrast Analyzer"
    }

    fn description(&self) -> &str {
        "Checks text/background contrast of inline styles meets 4.5:1 (WCAG 1.4.3)"
    }

    fn kind(&self) -> CheckKind {
        CheckKind::LowContrast
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Result<Vec<String>> {
        let page_background = page_background(ctx.document)?;
        let mut issues = Vec::new();

        for el in document::select(ctx.document, TEXT_ELEMENTS)? {
            let facts = StyleFacts::of(el, page_background);
            match (
                resolve(FOREGROUND_RULES, &facts),
                resolve(BACKGROUND_RULES, &facts),
            ) {
                (Resolution::Resolved(fg), Resolution::Resolved(bg)) => {
                    if contrast_ratio(fg, bg) < MIN_CONTRAST_RATIO {
                        issues.push(locate(el));
                    }
                }
                _ => issues.push(format!(
                    "Warning: Could not determine colors for element: {}",
                    locate(el)
                )),
            }
        }

        Ok(issues)
    }
}

/// What the rules can see about one element
#[derive(Debug, Clone, Default)]
pub struct StyleFacts<'a> {
    pub tag: &'a str,
    pub has_nav_class: bool,
    /// Raw inline `color` value, if declared
    pub inline_color: Option<&'a str>,
    /// Raw inline `background-color` value, if declared
    pub inline_background: Option<&'a str>,
    /// Raw `background-color` declared on `<body>` or `<html>`
    pub page_background: Option<&'a str>,
}

impl<'a> StyleFacts<'a> {
    pub fn of(element: ElementRef<'a>, page_background: Option<&'a str>) -> Self {
        let style = document::inline_style(element);
        Self {
            tag: document::tag_name(element),
            has_nav_class: document::has_class(element, "nav"),
            inline_color: declaration(&COLOR_RE, style),
            inline_background: declaration(&BACKGROUND_RE, style),
            page_background,
        }
    }
}

/// Outcome of a rule that applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved(Color),
    Undetermined,
}

/// `None` means the rule does not apply and the next one is tried
pub type ColorRule = fn(&StyleFacts<'_>) -> Option<Resolution>;

pub const FOREGROUND_RULES: &[ColorRule] = &[inline_color, link_default, text_default];

pub const BACKGROUND_RULES: &[ColorRule] =
    &[nav_light_background, inline_background, page_background_color, white_background];

/// Apply `rules` in order; the first that applies decides
pub fn resolve(rules: &[ColorRule], facts: &StyleFacts<'_>) -> Resolution {
    rules
        .iter()
        .find_map(|rule| rule(facts))
        .unwrap_or(Resolution::Undetermined)
}

pub fn inline_color(facts: &StyleFacts<'_>) -> Option<Resolution> {
    facts.inline_color.and_then(Color::parse).map(Resolution::Resolved)
}

pub fn link_default(facts: &StyleFacts<'_>) -> Option<Resolution> {
    (facts.tag == "a").then_some(Resolution::Resolved(Color::LINK_BLUE))
}

pub fn text_default(_facts: &StyleFacts<'_>) -> Option<Resolution> {
    Some(Resolution::Resolved(Color::BLACK))
}

/// Navigation is assumed to sit on a light background, but only when the
/// element declares no inline background at all. A background inherited
/// from the page is overridden.
pub fn nav_light_background(facts: &StyleFacts<'_>) -> Option<Resolution> {
    let is_nav = facts.tag == "nav" || facts.has_nav_class;
    (is_nav && facts.inline_background.is_none()).then_some(Resolution::Resolved(Color::WHITE))
}

pub fn inline_background(facts: &StyleFacts<'_>) -> Option<Resolution> {
    facts
        .inline_background
        .and_then(Color::parse)
        .map(Resolution::Resolved)
}

pub fn page_background_color(facts: &StyleFacts<'_>) -> Option<Resolution> {
    facts.page_background.map(|value| match Color::parse(value) {
        Some(color) => Resolution::Resolved(color),
        None => Resolution::Undetermined,
    })
}

pub fn white_background(_facts: &StyleFacts<'_>) -> Option<Resolution> {
    Some(Resolution::Resolved(Color::WHITE))
}

fn declaration<'a>(re: &Regex, style: &'a str) -> Option<&'a str> {
    re.captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// `background-color` declared inline on `<body>`, else on `<html>`
fn page_background(document: &Html) -> Result<Option<&str>> {
    for tag in ["body", "html"] {
        if let Some(el) = document::find(document, tag)? {
            if let Some(value) = declaration(&BACKGROUND_RE, document::inline_style(el)) {
                return Ok(Some(value));
            }
        }
    }
    Ok(None)
}
