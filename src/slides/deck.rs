// slides/deck.rs
use crate::domain::listing::ListingRecord;
use crate::errors::ExportError;
use crate::fetch::ImageSource;
use crate::templates::{deck_layout, listing_slide, title_slide};
use base64::Engine;
use chrono::Local;
use maud::{html, Markup};
use std::path::Path;
use tracing::{debug, info};

/// Builds the presentation for a batch: per listing, a title slide and a detail slide.
///
/// Images are downloaded while rendering and embedded as data URIs so the deck is a
/// single self-contained file. A failed download drops that image only.
pub struct DeckBuilder<'a> {
    brand: String,
    images: &'a dyn ImageSource,
}

impl<'a> DeckBuilder<'a> {
    pub fn new(brand: impl Into<String>, images: &'a dyn ImageSource) -> Self {
        Self {
            brand: brand.into(),
            images,
        }
    }

    pub fn render(&self, records: &[ListingRecord]) -> Markup {
        let generated = Local::now().format("%Y-%m-%d").to_string();

        let content = html! {
            @for record in records {
                (title_slide(record, &self.brand))
                (listing_slide(record, &self.embedded_images(record), &self.brand))
            }
        };

        deck_layout(&format!("{} · {}", self.brand, generated), content)
    }

    pub fn write(&self, records: &[ListingRecord], path: &Path) -> Result<(), ExportError> {
        if records.is_empty() {
            return Err(ExportError::EmptyBatch);
        }

        let markup = self.render(records);
        std::fs::write(path, markup.into_string()).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), slides = records.len() * 2, "wrote slide deck");
        Ok(())
    }

    fn embedded_images(&self, record: &ListingRecord) -> Vec<String> {
        record
            .images()
            .filter_map(|url| match self.images.load(url) {
                Ok(image) => Some(format!(
                    "data:{};base64,{}",
                    image.mime.essence_str(),
                    base64::engine::general_purpose::STANDARD.encode(&image.bytes)
                )),
                Err(e) => {
                    debug!(url, error = %e, "image omitted from deck");
                    None
                }
            })
            .collect()
    }
}
