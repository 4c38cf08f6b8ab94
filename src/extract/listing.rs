// extract/listing.rs
use regex::RegexBuilder;
use scraper::{Html, Selector};

use crate::domain::listing::{ExtractedListing, ListingRecord};
use crate::extract::images::collect_images;
use crate::extract::labels::{
    find_label_value, AREA_LABELS, BATHROOM_LABELS, BEDROOM_LABELS, TYPOLOGY_LABELS,
};
use crate::extract::structured::{extract_structured_metadata, StructuredMetadata};
use crate::extract::text::{non_empty, spaced_text};

pub const DEFAULT_MAX_IMAGES: usize = 3;

/// Turns one listing page into one [`ExtractedListing`].
///
/// Structured data is preferred for every field it covers; visual markup is the fallback.
/// Parsing is pure: no I/O, no clock, no randomness.
#[derive(Debug, Clone, Copy)]
pub struct ListingParser {
    max_images: usize,
}

impl Default for ListingParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGES)
    }
}

impl ListingParser {
    pub fn new(max_images: usize) -> Self {
        Self { max_images }
    }

    pub fn max_images(&self) -> usize {
        self.max_images
    }

    pub fn parse(&self, html: &str, url: &str) -> ExtractedListing {
        let document = Html::parse_document(html);
        self.parse_document(&document, url)
    }

    /// Parses and flattens in one step, with exactly `max_images` image columns.
    pub fn parse_record(&self, html: &str, url: &str) -> ListingRecord {
        self.parse(html, url).to_record(self.max_images)
    }

    pub fn parse_document(&self, document: &Html, url: &str) -> ExtractedListing {
        let meta = extract_structured_metadata(document);

        ExtractedListing {
            url: url.to_string(),
            title: non_empty(meta.title.clone()).or_else(|| first_text(document, "h1")),
            price: resolve_price(document, &meta),
            location: non_empty(meta.location.clone())
                .or_else(|| first_text(document, "nav[aria-label='breadcrumb']")),
            area: non_empty(find_label_value(document, AREA_LABELS)),
            typology: non_empty(find_label_value(document, TYPOLOGY_LABELS)),
            bedrooms: non_empty(meta.bedrooms.clone())
                .or_else(|| non_empty(find_label_value(document, BEDROOM_LABELS))),
            bathrooms: non_empty(find_label_value(document, BATHROOM_LABELS)),
            description: non_empty(meta.description.clone())
                .or_else(|| longest_paragraph(document)),
            images: collect_images(document, self.max_images),
        }
    }
}

/// Formatted structured price, then an element labelled "Preço", then the bare
/// structured price.
fn resolve_price(document: &Html, meta: &StructuredMetadata) -> Option<String> {
    non_empty(meta.price_str.clone())
        .or_else(|| non_empty(price_element_text(document)))
        .or_else(|| non_empty(meta.price.clone()))
}

fn price_element_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("strong[aria-label], span[aria-label]").ok()?;
    let label = RegexBuilder::new("Preço")
        .case_insensitive(true)
        .build()
        .ok()?;

    document
        .select(&selector)
        .find(|el| el.value().attr("aria-label").is_some_and(|a| label.is_match(a)))
        .map(spaced_text)
}

fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    let element = document.select(&selector).next()?;
    non_empty(Some(spaced_text(element)))
}

/// Longest paragraph by character count; the earliest wins a tie.
fn longest_paragraph(document: &Html) -> Option<String> {
    let selector = Selector::parse("p").ok()?;

    let mut best: Option<(usize, String)> = None;
    for paragraph in document.select(&selector) {
        let text = spaced_text(paragraph);
        let len = text.chars().count();
        if best.as_ref().map_or(true, |(best_len, _)| len > *best_len) {
            best = Some((len, text));
        }
    }

    non_empty(best.map(|(_, text)| text))
}
