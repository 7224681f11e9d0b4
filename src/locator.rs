// SPDX-License-Identifier: PMPL-1.0-or-later
//! Element locators: CSS-selector-like paths from `<html>` down to a node.
//!
//! Each element contributes one segment, chosen in priority order:
//!
//! | Element has          | Segment                     |
//! |----------------------|-----------------------------|
//! | non-empty `id`       | `tag#id`                    |
//! | one or more classes  | `tag.class1.class2`         |
//! | neither              | `tag:nth-of-type(n)`        |
//!
//! `n` is 1 plus the number of preceding siblings with the same tag name.
//! Segments are joined with `" > "`, so a locator can be handed straight to
//! `document.querySelector` in the browser. Two structurally identical
//! elements that share an id or class list get the same locator.

use scraper::ElementRef;

/// Separator between path segments
pub const SEPARATOR: &str = " > ";

/// Locator for an element
pub fn locate(element: ElementRef<'_>) -> String {
    let mut segments = Vec::new();
    let mut current = Some(element);

    while let Some(el) = current {
        segments.push(segment(el));
        current = el.parent().and_then(ElementRef::wrap);
    }

    segments.reverse();
    segments.join(SEPARATOR)
}

fn segment(element: ElementRef<'_>) -> String {
    let el = element.value();
    let name = el.name();

    if let Some(id) = el.attr("id").filter(|id| !id.is_empty()) {
        return format!("{}#{}", name, id);
    }

    // Attribute order; `Element::classes` would sort them
    let classes: String = el
        .attr("class")
        .unwrap_or("")
        .split_whitespace()
        .map(|c| format!(".{}", c))
        .collect();
    if !classes.is_empty() {
        return format!("{}{}", name, classes);
    }

    format!("{}:nth-of-type({})", name, nth_of_type(element))
}

fn nth_of_type(element: ElementRef<'_>) -> usize {
    let name = element.value().name();
    1 + element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sib| sib.value().name() == name)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document;

    fn first<'a>(doc: &'a scraper::Html, css: &str) -> ElementRef<'a> {
        document::find(doc, css)
            .expect("valid selector")
            .expect("element present")
    }

    #[test]
    fn test_nth_of_type_for_second_div() {
        let doc = document::parse("<div>a</div><div>b</div>");
        let second = document::select(&doc, "div").expect("valid selector")[1];
        assert_eq!(
            locate(second),
            "html:nth-of-type(1) > body:nth-of-type(1) > div:nth-of-type(2)"
        );
    }

    #[test]
    fn test_nth_of_type_ignores_other_tags() {
        let doc = document::parse("<p>x</p><span>y</span><p>z</p>");
        let span = first(&doc, "span");
        assert!(locate(span).ends_with("span:nth-of-type(1)"));
        let last_p = document::select(&doc, "p").expect("valid selector")[1];
        assert!(locate(last_p).ends_with("p:nth-of-type(2)"));
    }

    #[test]
    fn test_id_takes_priority_over_class() {
        let doc = document::parse(r#"<main><p id="intro" class="lead big">x</p></main>"#);
        let p = first(&doc, "p");
        assert!(locate(p).ends_with("main:nth-of-type(1) > p#intro"));
    }

    #[test]
    fn test_class_segment_lists_every_class() {
        let doc = document::parse(r#"<p class="lead  big">x</p>"#);
        let p = first(&doc, "p");
        assert!(locate(p).ends_with("body:nth-of-type(1) > p.lead.big"));
    }

    #[test]
    fn test_class_segment_keeps_attribute_order() {
        let doc = document::parse(r#"<div><p class="zeta alpha mid">x</p></div>"#);
        let p = first(&doc, "p");
        assert_eq!(
            locate(p),
            "html:nth-of-type(1) > body:nth-of-type(1) > div:nth-of-type(1) > p.zeta.alpha.mid"
        );
    }

    #[test]
    fn test_empty_id_falls_back() {
        let doc = document::parse(r#"<p id="">x</p>"#);
        let p = first(&doc, "p");
        assert!(locate(p).ends_with("p:nth-of-type(1)"));
    }

    #[test]
    fn test_locate_is_deterministic() {
        let doc = document::parse(r#"<ul><li>a</li><li class="x">b</li><li>c</li></ul>"#);
        for li in document::select(&doc, "li").expect("valid selector") {
            assert_eq!(locate(li), locate(li));
        }
    }

    #[test]
    fn test_text_node_owner_locates_to_parent() {
        let doc = document::parse("<section><p>words</p></section>");
        let p = first(&doc, "p");
        let (_, owner) = document::text_nodes(&doc)
            .find(|(text, _)| *text == "words")
            .expect("text node present");
        assert_eq!(locate(owner), locate(p));
        assert_eq!(
            locate(owner),
            "html:nth-of-type(1) > body:nth-of-type(1) > section:nth-of-type(1) > p:nth-of-type(1)"
        );
    }
}
