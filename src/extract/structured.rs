//! JSON-LD extraction for listing pages
//!
//! Reads every `<script type="application/ld+json">` block, including `@graph`
//! containers and top-level arrays, and folds the schema.org fields a listing needs
//! into a [`StructuredMetadata`]. The first block that supplies a field wins.

use scraper::{Html, Selector};
use serde_json::{Map, Value};
use tracing::debug;

/// Listing fields recovered from structured data. Each is set at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Offer price as published (`price`, else `lowPrice`).
    pub price: Option<String>,
    /// `"<price> <currency>"` when the offer carries both.
    pub price_str: Option<String>,
    pub location: Option<String>,
    pub bedrooms: Option<String>,
}

impl StructuredMetadata {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn set_title(&mut self, value: Option<String>) {
        set_if_absent(&mut self.title, value);
    }

    pub fn set_description(&mut self, value: Option<String>) {
        set_if_absent(&mut self.description, value);
    }

    pub fn set_price(&mut self, value: Option<String>) {
        set_if_absent(&mut self.price, value);
    }

    pub fn set_price_str(&mut self, value: Option<String>) {
        set_if_absent(&mut self.price_str, value);
    }

    pub fn set_location(&mut self, value: Option<String>) {
        set_if_absent(&mut self.location, value);
    }

    pub fn set_bedrooms(&mut self, value: Option<String>) {
        set_if_absent(&mut self.bedrooms, value);
    }

    /// Folds one schema.org object into the metadata. `@graph` members are merged
    /// before the object's own fields.
    pub fn merge_object(&mut self, obj: &Map<String, Value>) {
        if let Some(Value::Array(graph)) = obj.get("@graph") {
            for item in graph {
                if let Value::Object(inner) = item {
                    self.merge_object(inner);
                }
            }
        }

        self.set_title(obj.get("name").and_then(scalar_string));
        self.set_description(obj.get("description").and_then(scalar_string));

        if let Some(Value::Object(offer)) = obj.get("offers") {
            let price = offer
                .get("price")
                .and_then(scalar_string)
                .or_else(|| offer.get("lowPrice").and_then(scalar_string));
            let currency = offer.get("priceCurrency").and_then(scalar_string);

            if let (Some(price), Some(currency)) = (&price, &currency) {
                self.set_price_str(Some(format!("{price} {currency}")));
            }
            self.set_price(price);
        }

        if let Some(Value::Object(address)) = obj.get("address") {
            let location = ["addressLocality", "addressRegion", "addressCountry"]
                .iter()
                .filter_map(|key| address.get(*key).and_then(scalar_string))
                .collect::<Vec<_>>()
                .join(" ");
            self.set_location(Some(location));
        }

        let rooms = obj
            .get("numberOfRooms")
            .and_then(scalar_string)
            .or_else(|| obj.get("numberOfBedrooms").and_then(scalar_string));
        self.set_bedrooms(rooms);
    }

    fn merge_value(&mut self, value: &Value) {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Value::Object(obj) = item {
                        self.merge_object(obj);
                    }
                }
            }
            Value::Object(obj) => self.merge_object(obj),
            _ => {}
        }
    }
}

/// Extract listing metadata from every JSON-LD block in the document.
///
/// Blocks that fail to decode are skipped; they never abort extraction.
pub fn extract_structured_metadata(document: &Html) -> StructuredMetadata {
    let mut metadata = StructuredMetadata::default();

    let Ok(selector) = Selector::parse(r#"script[type="application/ld+json"]"#) else {
        return metadata;
    };

    for (index, element) in document.select(&selector).enumerate() {
        let content = element.text().collect::<String>();
        let trimmed = content.trim();

        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(json) => metadata.merge_value(&json),
            Err(e) => debug!(block = index, error = %e, "skipping malformed JSON-LD block"),
        }
    }

    metadata
}

fn set_if_absent(slot: &mut Option<String>, value: Option<String>) {
    if slot.is_some() {
        return;
    }
    if let Some(v) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        *slot = Some(v);
    }
}

/// Renders a JSON-LD scalar as published. Null, booleans, `0` and blank strings count as
/// missing. Nested `{"name": ..}` / `{"value": ..}` wrappers are unwrapped.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => (n.as_f64() != Some(0.0)).then(|| n.to_string()),
        Value::Object(obj) => obj
            .get("value")
            .or_else(|| obj.get("name"))
            .and_then(scalar_string),
        _ => None,
    }
}
