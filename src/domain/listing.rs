// src/domain/listing.rs

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Scalar columns in output order. Image columns (`image1..imageN`) follow.
pub const RECORD_FIELDS: [&str; 9] = [
    "url",
    "title",
    "price",
    "location",
    "area",
    "typology",
    "bedrooms",
    "bathrooms",
    "description",
];

/// One listing as extracted from a single document.
///
/// Optional fields are `None` when no source produced a non-empty value. They only turn
/// into empty strings when converted into a [`ListingRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedListing {
    pub url: String,
    pub title: Option<String>,
    /// Formatted price as shown to the user (e.g. "250000 EUR").
    pub price: Option<String>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub typology: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub description: Option<String>,
    /// Absolute image URLs in document order, already capped.
    pub images: Vec<String>,
}

impl ExtractedListing {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Flattens the listing into a record with exactly `image_slots` image columns.
    pub fn to_record(&self, image_slots: usize) -> ListingRecord {
        let scalars = [
            Some(self.url.as_str()),
            self.title.as_deref(),
            self.price.as_deref(),
            self.location.as_deref(),
            self.area.as_deref(),
            self.typology.as_deref(),
            self.bedrooms.as_deref(),
            self.bathrooms.as_deref(),
            self.description.as_deref(),
        ];

        let mut columns: Vec<(String, String)> = RECORD_FIELDS
            .iter()
            .zip(scalars)
            .map(|(key, value)| (key.to_string(), value.unwrap_or("").to_string()))
            .collect();

        for slot in 0..image_slots {
            let value = self.images.get(slot).cloned().unwrap_or_default();
            columns.push((format!("image{}", slot + 1), value));
        }

        ListingRecord { columns }
    }
}

/// Flat, ordered `key -> string` view of a listing. Every key is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    columns: Vec<(String, String)>,
}

impl ListingRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(_, v)| v.as_str())
    }

    /// Non-empty image URLs, in slot order.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|(k, v)| k.starts_with("image") && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for ListingRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (key, value) in &self.columns {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Largest image count across the batch.
pub fn max_image_count(listings: &[ExtractedListing]) -> usize {
    listings.iter().map(|l| l.images.len()).max().unwrap_or(0)
}

/// Pads every listing to the batch's maximum observed image count so all records share
/// one schema.
pub fn pad_batch(listings: &[ExtractedListing]) -> Vec<ListingRecord> {
    let slots = max_image_count(listings);
    listings.iter().map(|l| l.to_record(slots)).collect()
}
