//! DOM text helpers shared by the HTML-parsing extraction stages.
//!
//! Boilerplate subtrees (script/style/nav/header/footer/noscript) are
//! excluded before any text extraction so navigation chrome never pollutes
//! the corpus. Text collection walks the element tree and skips those
//! subtrees rather than flattening them.

use scraper::{ElementRef, Html, Selector};

use crate::types::FALLBACK_TITLE;

/// Tags whose subtrees never contribute article text.
const BOILERPLATE_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "noscript"];

pub(crate) fn is_boilerplate(tag: &str) -> bool {
    BOILERPLATE_TAGS.contains(&tag)
}

/// True when any ancestor element of `element` is a boilerplate tag.
pub(crate) fn in_boilerplate(element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| is_boilerplate(ancestor.value().name()))
}

/// Descendant text of `element`, skipping boilerplate subtrees, with
/// whitespace collapsed to single spaces.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !is_boilerplate(child_element.value().name()) {
                collect_text(child_element, out);
            }
        }
    }
}

/// Text of the first `<h1>` outside boilerplate, or the fixed fallback title.
pub(crate) fn first_heading(document: &Html) -> String {
    let Ok(selector) = Selector::parse("h1") else {
        return FALLBACK_TITLE.to_string();
    };
    document
        .select(&selector)
        .filter(|h1| !in_boilerplate(*h1))
        .map(element_text)
        .find(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

/// Concatenated text of every element matching `selector_str` (document
/// order), boilerplate excluded. `None` when the selector is invalid or
/// matches nothing.
pub(crate) fn joined_text(document: &Html, selector_str: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;
    let parts: Vec<String> = document
        .select(&selector)
        .filter(|element| !in_boilerplate(*element))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
