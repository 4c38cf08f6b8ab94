//! Label/value lookup for the "details" block of a listing page.
//!
//! Portals render the same facts in different shapes (`<dl>`, `<li><strong>`, loose
//! `<div>` pairs). Each shape is a tier; tiers run in a fixed order and the first one
//! that yields a value wins. Within a tier the whole document is scanned in order and
//! any label of the set may match, so label order inside a set carries no priority.

use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html, Selector};

use super::text::{compact_text, spaced_text};

pub const TYPOLOGY_LABELS: &[&str] = &["Tipologia"];
pub const BEDROOM_LABELS: &[&str] = &["Quartos", "Nº de quartos", "Número de quartos"];
pub const BATHROOM_LABELS: &[&str] = &["Casas de banho", "WCs"];
pub const AREA_LABELS: &[&str] = &[
    "Área bruta",
    "Área útil",
    "Área",
    "Área (m²)",
    "Área bruta (m²)",
];

/// Characters stripped around the value of a `<li>` once its label is removed.
const VALUE_SEPARATORS: &[char] = &[' ', ':', '\u{a0}', '-'];

/// Case-insensitive whole-text matcher for a set of labels.
#[derive(Debug, Clone)]
pub struct LabelPattern {
    regex: Regex,
}

impl LabelPattern {
    pub fn new(labels: &[&str]) -> Result<Self, regex::Error> {
        let alternatives = labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&format!(r"^\s*(?:{alternatives})\s*:?\s*$"))
            .case_insensitive(true)
            .build()?;

        Ok(Self { regex })
    }

    /// True when `text` is exactly one of the labels, optionally followed by a colon.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// One document shape. Returns the value next to a matching label, if any.
pub type Tier = fn(&Html, &LabelPattern) -> Option<String>;

/// Tiers in the order they are tried.
pub const TIERS: [Tier; 3] = [term_description, list_item, sibling];

/// Finds the value for the first of `labels` the document exposes, trying each tier in
/// turn. A missing value is `None`, never an error.
pub fn find_label_value(document: &Html, labels: &[&str]) -> Option<String> {
    if labels.is_empty() {
        return None;
    }
    let pattern = LabelPattern::new(labels).ok()?;

    TIERS
        .iter()
        .find_map(|tier| tier(document, &pattern))
        .map(|value| value.trim().to_string())
}

/// `<dt>Label</dt><dd>Value</dd>`: the first matching term takes the next `<dd>` in
/// document order, even when it is not a direct sibling.
pub fn term_description(document: &Html, pattern: &LabelPattern) -> Option<String> {
    let mut term_matched = false;

    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        match element.value().name() {
            "dt" if !term_matched => {
                let text = compact_text(element);
                term_matched = !text.is_empty() && pattern.matches(&text);
            }
            "dd" if term_matched => return Some(spaced_text(element)),
            _ => {}
        }
    }

    None
}

/// `<li><strong>Label:</strong> Value</li>`: the item text minus the label.
pub fn list_item(document: &Html, pattern: &LabelPattern) -> Option<String> {
    let items = Selector::parse("li").ok()?;
    let emphasis = Selector::parse("strong, span").ok()?;

    document.select(&items).find_map(|item| {
        let label_node = item.select(&emphasis).next()?;
        let label = compact_text(label_node);
        if !pattern.matches(&label) {
            return None;
        }

        let value = spaced_text(item)
            .replace(&label, "")
            .trim_matches(VALUE_SEPARATORS)
            .to_string();

        (!value.is_empty()).then_some(value)
    })
}

/// `<div>Label</div><div>Value</div>`: the element right after the label.
pub fn sibling(document: &Html, pattern: &LabelPattern) -> Option<String> {
    let nodes = Selector::parse("div, span").ok()?;

    document.select(&nodes).find_map(|node| {
        let text = compact_text(node);
        if text.is_empty() || !pattern.matches(&text) {
            return None;
        }

        let next = node.next_siblings().find_map(ElementRef::wrap)?;
        if compact_text(next).is_empty() {
            return None;
        }
        Some(spaced_text(next))
    })
}
