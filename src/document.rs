// SPDX-License-Identifier: PMPL-1.0-or-later
//! Thin adapter over `scraper` for the queries the analyzers need.
//!
//! Parsing never fails: html5ever recovers a tree from any input and
//! synthesises `<html>`, `<head>` and `<body>` when the markup omits them.

use crate::error::{AnalyzerError, Result};
use scraper::{ElementRef, Html, Selector};

/// Parse a full HTML document
pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// Compile a CSS selector
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AnalyzerError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// All elements matching `css`, in document order
pub fn select<'a>(document: &'a Html, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(document.select(&sel).collect())
}

/// First element matching `css`, in document order
pub fn find<'a>(document: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(document.select(&sel).next())
}

/// Tag name of an element (lowercase for HTML elements)
pub fn tag_name<'a>(element: ElementRef<'a>) -> &'a str {
    element.value().name()
}

/// Non-empty value of an attribute
pub fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|v| !v.is_empty())
}

/// Raw inline `style` attribute, empty when absent
pub fn inline_style<'a>(element: ElementRef<'a>) -> &'a str {
    element.value().attr("style").unwrap_or("")
}

/// Whether the element carries `class` token `name`
pub fn has_class(element: ElementRef<'_>, name: &str) -> bool {
    element.value().classes().any(|c| c == name)
}

/// Nearest proper ancestor whose tag name is one of `names`
pub fn ancestor_named<'a>(element: ElementRef<'a>, names: &[&str]) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| names.contains(&a.value().name()))
}

/// All descendant text, concatenated as-is
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Descendant text with every text node trimmed before concatenation
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Every text node in the document paired with the element that owns it
pub fn text_nodes(document: &Html) -> impl Iterator<Item = (&str, ElementRef<'_>)> {
    document.tree.root().descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let owner = node.parent().and_then(ElementRef::wrap)?;
        Some((&**text, owner))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_synthesises_body() {
        let doc = parse("<p>hello</p>");
        assert!(find(&doc, "html > body > p").expect("valid selector").is_some());
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let err = selector("p[").unwrap_err();
        assert!(matches!(err, AnalyzerError::Selector { .. }));
    }

    #[test]
    fn test_select_in_document_order() {
        let doc = parse(r#"<p id="a"></p><div><p id="b"></p></div><p id="c"></p>"#);
        let ids: Vec<_> = select(&doc, "p")
            .expect("valid selector")
            .into_iter()
            .filter_map(|p| p.value().attr("id"))
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ancestor_named() {
        let doc = parse("<nav><ul><li><a href='#'>x</a></li></ul></nav>");
        let a = find(&doc, "a").expect("valid selector").expect("link present");
        assert_eq!(ancestor_named(a, &["nav", "header"]).map(tag_name), Some("nav"));
        assert!(ancestor_named(a, &["label"]).is_none());
    }

    #[test]
    fn test_ancestor_named_excludes_self() {
        let doc = parse("<nav>x</nav>");
        let nav = find(&doc, "nav").expect("valid selector").expect("nav present");
        assert!(ancestor_named(nav, &["nav"]).is_none());
    }

    #[test]
    fn test_stripped_text() {
        let doc = parse("<button>\n  <span> Go </span>\n</button>");
        let button = find(&doc, "button").expect("valid selector").expect("button present");
        assert_eq!(stripped_text(button), "Go");
    }

    #[test]
    fn test_text_nodes_have_owners() {
        let doc = parse("<p>one <b>two</b></p>");
        let owners: Vec<_> = text_nodes(&doc)
            .map(|(text, owner)| (text.to_string(), tag_name(owner).to_string()))
            .collect();
        assert!(owners.contains(&("one ".to_string(), "p".to_string())));
        assert!(owners.contains(&("two".to_string(), "b".to_string())));
    }
}
