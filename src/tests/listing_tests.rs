// src/tests/listing_tests.rs

use super::utils::{images, jsonld, page};
use crate::domain::listing::RECORD_FIELDS;
use crate::extract::images::absolute_image_url;
use crate::extract::ListingParser;

const URL: &str = "https://www.imovirtual.com/pt/anuncio/t2-alvalade-ID1abc";

#[test]
fn bare_document_yields_url_and_empty_fields() {
    let record = ListingParser::new(3).parse_record(&page("", ""), URL);

    assert_eq!(record.get("url"), Some(URL));
    for key in RECORD_FIELDS.iter().skip(1) {
        assert_eq!(record.get(key), Some(""), "field {key} should be empty");
    }
    for slot in 1..=3 {
        assert_eq!(record.get(&format!("image{slot}")), Some(""));
    }
    assert_eq!(record.len(), RECORD_FIELDS.len() + 3);
}

#[test]
fn url_is_kept_verbatim() {
    let url = "  https://example.pt/anuncio?id=1&x=2  ";
    let listing = ListingParser::default().parse(&page("", ""), url);

    assert_eq!(listing.url, url);
}

#[test]
fn structured_data_takes_precedence() {
    let head = jsonld(
        r#"{
            "@type": "Apartment",
            "name": "T2 renovado em Alvalade",
            "description": "Apartamento luminoso com varanda.",
            "numberOfRooms": 2,
            "offers": {"@type": "Offer", "price": 385000, "priceCurrency": "EUR"},
            "address": {"addressLocality": "Lisboa", "addressRegion": "Lisboa", "addressCountry": "PT"}
        }"#,
    );
    let body = r#"
        <h1>Outro título</h1>
        <span aria-label="Preço">400 000 €</span>
        <nav aria-label="breadcrumb">Lisboa / Alvalade</nav>
        <dl><dt>Quartos</dt><dd>3</dd></dl>
        <p>Um parágrafo muito mais comprido do que a descrição estruturada, que não deve ser usado.</p>
    "#;

    let listing = ListingParser::default().parse(&page(&head, body), URL);

    assert_eq!(listing.title.as_deref(), Some("T2 renovado em Alvalade"));
    assert_eq!(listing.price.as_deref(), Some("385000 EUR"));
    assert_eq!(listing.location.as_deref(), Some("Lisboa Lisboa PT"));
    assert_eq!(listing.bedrooms.as_deref(), Some("2"));
    assert_eq!(listing.description.as_deref(), Some("Apartamento luminoso com varanda."));
}

#[test]
fn markup_fallbacks_when_no_structured_data() {
    let body = r#"
        <h1>
            Moradia T4 <small>em Cascais</small>
        </h1>
        <nav aria-label="breadcrumb"><a>Lisboa</a> › <a>Cascais</a></nav>
        <div class="price"><strong aria-label="preço do imóvel"> 1 250 000 € </strong></div>
    "#;

    let listing = ListingParser::default().parse(&page("", body), URL);

    assert_eq!(listing.title.as_deref(), Some("Moradia T4 em Cascais"));
    assert_eq!(listing.price.as_deref(), Some("1 250 000 €"));
    assert_eq!(listing.location.as_deref(), Some("Lisboa › Cascais"));
}

#[test]
fn bare_structured_price_is_last_price_fallback() {
    let head = jsonld(r#"{"offers": {"price": 250000}}"#);

    let listing = ListingParser::default().parse(&page(&head, "<span>250 000 €</span>"), URL);

    assert_eq!(listing.price.as_deref(), Some("250000"));
}

#[test]
fn detail_fields_come_from_label_lookup() {
    let body = r#"
        <dl>
            <dt>Tipologia:</dt><dd>T3</dd>
            <dt>Área útil</dt><dd>95 m²</dd>
            <dt>Área bruta</dt><dd>110 m²</dd>
        </dl>
        <ul>
            <li><strong>Número de quartos:</strong> 3</li>
            <li><strong>Casas de banho:</strong> 2</li>
        </ul>
    "#;

    let listing = ListingParser::default().parse(&page("", body), URL);

    assert_eq!(listing.typology.as_deref(), Some("T3"));
    assert_eq!(listing.area.as_deref(), Some("95 m²"));
    assert_eq!(listing.bedrooms.as_deref(), Some("3"));
    assert_eq!(listing.bathrooms.as_deref(), Some("2"));
}

#[test]
fn longest_paragraph_becomes_description() {
    let body = format!(
        "<p>{}</p><p>{}</p><p>{}</p>",
        "a".repeat(10),
        "b".repeat(50),
        "c".repeat(30)
    );

    let listing = ListingParser::default().parse(&page("", &body), URL);

    assert_eq!(listing.description, Some("b".repeat(50)));
}

#[test]
fn paragraph_length_tie_keeps_document_order() {
    let body = "<p>primeiro</p><p>segundo!</p>";

    let listing = ListingParser::default().parse(&page("", body), URL);

    assert_eq!(listing.description.as_deref(), Some("primeiro"));
}

#[test]
fn images_are_capped_in_document_order() {
    let listing = ListingParser::new(3).parse(&page("", &images(5, "cdn.example")), URL);

    assert_eq!(
        listing.images,
        vec![
            "https://cdn.example/1.jpg",
            "https://cdn.example/2.jpg",
            "https://cdn.example/3.jpg",
        ]
    );
}

#[test]
fn image_sources_are_normalized() {
    let body = r#"
        <img src="//cdn.example/x.jpg">
        <img src="images/x.jpg">
        <img src="data:image/gif;base64,R0lGOD">
        <img src="" data-src="https://cdn.example/lazy.jpg">
        <img data-lazy="//cdn.example/lazier.jpg">
        <img>
    "#;

    let listing = ListingParser::new(10).parse(&page("", body), URL);

    assert_eq!(
        listing.images,
        vec![
            "https://cdn.example/x.jpg",
            "https://cdn.example/lazy.jpg",
            "https://cdn.example/lazier.jpg",
        ]
    );
}

#[test]
fn duplicate_images_count_toward_the_cap() {
    let body = r#"<img src="https://a/1.jpg"><img src="https://a/1.jpg"><img src="https://a/2.jpg">"#;

    let listing = ListingParser::new(2).parse(&page("", body), URL);

    assert_eq!(listing.images, vec!["https://a/1.jpg", "https://a/1.jpg"]);
}

#[test]
fn zero_cap_collects_no_images() {
    let listing = ListingParser::new(0).parse(&page("", &images(2, "a")), URL);

    assert!(listing.images.is_empty());
}

#[test]
fn absolute_image_url_rules() {
    assert_eq!(
        absolute_image_url("//cdn.example/x.jpg").as_deref(),
        Some("https://cdn.example/x.jpg")
    );
    assert_eq!(
        absolute_image_url("http://cdn.example/x.jpg").as_deref(),
        Some("http://cdn.example/x.jpg")
    );
    assert_eq!(absolute_image_url("images/x.jpg"), None);
    assert_eq!(absolute_image_url("/images/x.jpg"), None);
}

#[test]
fn parsing_is_deterministic() {
    let html = page(
        &jsonld(r#"{"name": "Loja", "offers": {"price": 120000, "priceCurrency": "EUR"}}"#),
        &format!("<p>Descrição</p>{}", images(4, "img")),
    );
    let parser = ListingParser::new(3);

    assert_eq!(parser.parse(&html, URL), parser.parse(&html, URL));
}

#[test]
fn adjacent_inline_elements_are_joined_with_a_space() {
    let body = r#"
        <h1><span>Apartamento</span><span>T1</span></h1>
        <nav aria-label="breadcrumb"><a>Lisboa</a><a>Cascais</a></nav>
        <span aria-label="Preço"><b>180 000</b><small>€</small></span>
    "#;

    let listing = ListingParser::default().parse(&page("", body), URL);

    assert_eq!(listing.title.as_deref(), Some("Apartamento T1"));
    assert_eq!(listing.location.as_deref(), Some("Lisboa Cascais"));
    assert_eq!(listing.price.as_deref(), Some("180 000 €"));
}

#[test]
fn empty_description_term_leaves_field_unset() {
    let body = r#"
        <dl><dt>Tipologia</dt><dd> </dd></dl>
        <ul><li><strong>Tipologia:</strong> T2</li></ul>
    "#;

    let listing = ListingParser::default().parse(&page("", body), URL);

    assert_eq!(listing.typology, None);
}
