// SPDX-License-Identifier: PMPL-1.0-or-later
//! WebBridge Analyzer - accessibility and readability checks for HTML pages
//!
//! Takes an HTML document, runs a fixed battery of checks over it, and
//! returns a [`Report`] mapping each check to CSS-selector-style locators
//! for the offending elements. The locators are stable `querySelector`
//! arguments, so a browser extension can highlight the elements in place.
//!
//! ## Checks
//!
//! - **missingAlt** (1.1.1): images without alternative text
//! - **lowContrast** (1.4.3): text below a 4.5:1 contrast ratio
//! - **missingLabel** (3.3.2): form controls without a label
//! - **gunningFog**: paragraphs with a fog index above 12
//! - **jargonRatio**: paragraphs where over 20% of words are uncommon
//! - **inclusiveLanguage**: elements using non-inclusive terms
//! - **smallTouchTargets** (2.5.5): interactive elements under 44x44px
//! - **passiveVoice**: paragraphs and list items in passive voice
//!
//! ## Example
//!
//! ```
//! let report = webbridge_analyzer::analyze(r#"<img src="logo.png">"#, None);
//! assert_eq!(
//!     report.missing_alt,
//!     vec!["html:nth-of-type(1) > body:nth-of-type(1) > img:nth-of-type(1)"]
//! );
//! ```

pub mod analyzers;
pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod locator;
pub mod readability;
pub mod report;
pub mod scanner;
pub mod vocabulary;

pub use analyzers::{AnalysisContext, Analyzer, CheckKind};
pub use error::{AnalyzerError, Result};
pub use report::Report;
pub use vocabulary::Vocabulary;

use tracing::debug;

/// Analyze `html` with every check.
///
/// A non-empty `common_words` list replaces the default vocabulary for this
/// call only; `None` or an empty list uses [`Vocabulary::default_words`].
pub fn analyze(html: &str, common_words: Option<&[String]>) -> Report {
    match common_words.filter(|words| !words.is_empty()) {
        Some(words) => {
            debug!(words = words.len(), "Using per-call vocabulary");
            analyze_with(html, &Vocabulary::from_words(words))
        }
        None => analyze_with(html, Vocabulary::default_words()),
    }
}

/// Analyze `html` against an explicit vocabulary
pub fn analyze_with(html: &str, vocabulary: &Vocabulary) -> Report {
    let document = document::parse(html);
    analyzers::run_all(&AnalysisContext::new(&document, vocabulary))
}
