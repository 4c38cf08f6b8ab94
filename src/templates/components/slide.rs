use crate::domain::listing::ListingRecord;
use maud::{html, Markup};

/// Descriptions are cut to this many characters so the slide does not overflow.
pub const DESCRIPTION_MAX_CHARS: usize = 700;

/// Detail rows shown on the listing slide: (label, record key).
const DETAIL_ROWS: [(&str, &str); 6] = [
    ("Preço", "price"),
    ("Localização", "location"),
    ("Tipologia", "typology"),
    ("Área", "area"),
    ("Quartos", "bedrooms"),
    ("Casas de banho", "bathrooms"),
];

pub fn title_slide(record: &ListingRecord, brand: &str) -> Markup {
    let price = record.get("price").unwrap_or("");
    let location = record.get("location").unwrap_or("");

    html! {
        section class="slide slide-title" {
            h1 { (display_title(record)) }
            @if !price.is_empty() {
                div class="price" { (price) }
            }
            @if !location.is_empty() {
                div class="location" { (location) }
            }
            div class="brand" { (brand) }
        }
    }
}

/// `images` are ready-to-use `src` values (data URIs); failed downloads are simply absent.
pub fn listing_slide(record: &ListingRecord, images: &[String], brand: &str) -> Markup {
    let description = truncate_chars(
        record.get("description").unwrap_or(""),
        DESCRIPTION_MAX_CHARS,
    );

    html! {
        section class="slide slide-listing" {
            h2 { (display_title(record)) }
            table class="details" {
                @for (label, key) in DETAIL_ROWS {
                    @let value = record.get(key).unwrap_or("");
                    @if !value.is_empty() {
                        tr {
                            th { (label) }
                            td { (value) }
                        }
                    }
                }
            }
            @if !description.is_empty() {
                p class="description" { (description) }
            }
            @if !images.is_empty() {
                div class="gallery" {
                    @for src in images {
                        img src=(src) alt="";
                    }
                }
            }
            div class="source" { (record.get("url").unwrap_or("")) }
            div class="brand" { (brand) }
        }
    }
}

fn display_title(record: &ListingRecord) -> &str {
    match record.get("title") {
        Some(title) if !title.is_empty() => title,
        _ => "Imóvel",
    }
}

/// Cuts `text` to at most `max` characters, appending an ellipsis when shortened.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}
