use scraper::{Html, Selector};

/// Attributes checked on each `<img>`, in priority order. Lazy-loading galleries leave
/// `src` empty and park the real URL in a data attribute.
const SOURCE_ATTRS: [&str; 3] = ["src", "data-src", "data-lazy"];

/// Collects up to `max_images` absolute image URLs in document order.
///
/// Protocol-relative URLs are upgraded to `https:`. Anything without an explicit
/// http(s) scheme is dropped. Duplicates are kept.
pub fn collect_images(document: &Html, max_images: usize) -> Vec<String> {
    let mut images = Vec::new();
    if max_images == 0 {
        return images;
    }

    let Ok(selector) = Selector::parse("img") else {
        return images;
    };

    for img in document.select(&selector) {
        let source = SOURCE_ATTRS
            .iter()
            .filter_map(|attr| img.value().attr(attr))
            .map(str::trim)
            .find(|value| !value.is_empty());

        if let Some(url) = source.and_then(absolute_image_url) {
            images.push(url);
            if images.len() >= max_images {
                break;
            }
        }
    }

    images
}

/// `//host/x.jpg` -> `https://host/x.jpg`; relative paths and non-http schemes -> `None`.
pub fn absolute_image_url(raw: &str) -> Option<String> {
    let url = match raw.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => raw.to_string(),
    };

    (url.starts_with("http://") || url.starts_with("https://")).then_some(url)
}
