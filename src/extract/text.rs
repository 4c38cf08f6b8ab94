use scraper::ElementRef;

/// Every descendant text node trimmed and concatenated with no separator.
///
/// Used for label comparison. Split markup is glued without a space, so
/// `<dt> Área <b>útil</b></dt>` compares as `Áreaútil` and matches no label.
pub fn compact_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Every non-blank descendant text node trimmed and joined by single spaces.
pub fn spaced_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trims and drops empty values.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
