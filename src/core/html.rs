// src/core/html.rs
// Small helpers over `scraper` element handles.
// They mirror the handful of DOM accessors the page readers need
// (first/last/nth element child, next element sibling, text content).

use scraper::{ElementRef, Selector};

use crate::error::{Error, Result};
use super::sanitize::normalize_ws;

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Schema(format!("bad selector {css:?}: {e:?}")))
}

/// Concatenated text of all descendants, as-is.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text content with whitespace collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&raw_text(el))
}

pub fn first_child(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.child_elements().next()
}

pub fn last_child(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.child_elements().last()
}

pub fn nth_child(el: ElementRef<'_>, n: usize) -> Option<ElementRef<'_>> {
    el.child_elements().nth(n)
}

pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// First descendant matching `sel` (document order).
pub fn select_first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Turn a missing element into a layout error naming what was expected.
pub fn require<'a>(el: Option<ElementRef<'a>>, what: &str) -> Result<ElementRef<'a>> {
    el.ok_or_else(|| Error::Schema(format!("missing {what}")))
}
