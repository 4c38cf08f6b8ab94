// src/tests/structured_tests.rs

use super::utils::{jsonld, page};
use crate::extract::structured::{extract_structured_metadata, StructuredMetadata};
use scraper::Html;
use serde_json::json;

fn metadata_for(blocks: &[&str]) -> StructuredMetadata {
    let head: String = blocks.iter().map(|b| jsonld(b)).collect();
    extract_structured_metadata(&Html::parse_document(&page(&head, "")))
}

#[test]
fn price_is_preferred_over_low_price() {
    let meta = metadata_for(&[r#"{"offers": {"price": 250000, "lowPrice": 200000}}"#]);

    assert_eq!(meta.price.as_deref(), Some("250000"));
    assert_eq!(meta.price_str, None);
}

#[test]
fn low_price_is_used_when_price_is_missing() {
    let meta = metadata_for(&[r#"{"offers": {"lowPrice": 200000, "priceCurrency": "EUR"}}"#]);

    assert_eq!(meta.price.as_deref(), Some("200000"));
    assert_eq!(meta.price_str.as_deref(), Some("200000 EUR"));
}

#[test]
fn formatted_price_needs_price_and_currency() {
    let meta = metadata_for(&[r#"{"offers": {"price": "315000", "priceCurrency": "EUR"}}"#]);

    assert_eq!(meta.price.as_deref(), Some("315000"));
    assert_eq!(meta.price_str.as_deref(), Some("315000 EUR"));
}

#[test]
fn first_block_wins_for_each_field() {
    let meta = metadata_for(&[
        r#"{"name": "A"}"#,
        r#"{"name": "B", "description": "Second block description"}"#,
    ]);

    assert_eq!(meta.title.as_deref(), Some("A"));
    // A field the first block did not supply is still taken from a later one.
    assert_eq!(meta.description.as_deref(), Some("Second block description"));
}

#[test]
fn malformed_block_is_skipped() {
    let meta = metadata_for(&[r#"{"name": "broken",,}"#, r#"{"name": "Casa na Graça"}"#]);

    assert_eq!(meta.title.as_deref(), Some("Casa na Graça"));
}

#[test]
fn top_level_array_merges_each_object() {
    let meta = metadata_for(&[
        r#"[{"@type": "BreadcrumbList"}, {"@type": "Residence", "name": "Moradia T4", "numberOfRooms": 4}]"#,
    ]);

    assert_eq!(meta.title.as_deref(), Some("Moradia T4"));
    assert_eq!(meta.bedrooms.as_deref(), Some("4"));
}

#[test]
fn graph_members_are_merged_before_outer_fields() {
    let meta = metadata_for(&[r#"{
        "name": "Outer",
        "@graph": [
            {"@type": "Product", "name": "Inner", "offers": {"price": 99000, "priceCurrency": "EUR"}},
            {"@type": "Place", "address": {"addressLocality": "Porto", "addressCountry": "PT"}}
        ]
    }"#]);

    assert_eq!(meta.title.as_deref(), Some("Inner"));
    assert_eq!(meta.price_str.as_deref(), Some("99000 EUR"));
    assert_eq!(meta.location.as_deref(), Some("Porto PT"));
}

#[test]
fn location_skips_empty_address_parts() {
    let meta = metadata_for(&[r#"{"address": {
        "addressLocality": "Lisboa",
        "addressRegion": "",
        "addressCountry": {"@type": "Country", "name": "Portugal"}
    }}"#]);

    assert_eq!(meta.location.as_deref(), Some("Lisboa Portugal"));
}

#[test]
fn empty_address_leaves_location_unset() {
    let meta = metadata_for(&[
        r#"{"address": {"addressLocality": ""}}"#,
        r#"{"address": {"addressRegion": "Setúbal"}}"#,
    ]);

    assert_eq!(meta.location.as_deref(), Some("Setúbal"));
}

#[test]
fn bedrooms_fall_back_to_number_of_bedrooms() {
    let meta = metadata_for(&[r#"{"numberOfBedrooms": {"@type": "QuantitativeValue", "value": 2}}"#]);

    assert_eq!(meta.bedrooms.as_deref(), Some("2"));
}

#[test]
fn no_blocks_yields_empty_metadata() {
    let meta = metadata_for(&[]);

    assert!(meta.is_empty());
}

#[test]
fn merge_object_sets_each_field_once() {
    let mut meta = StructuredMetadata::default();

    let first = json!({"name": "T2 em Alvalade", "numberOfRooms": "2"});
    let second = json!({"name": "Other", "numberOfRooms": "5", "description": "Luminoso"});

    meta.merge_object(first.as_object().unwrap());
    meta.merge_object(second.as_object().unwrap());

    assert_eq!(meta.title.as_deref(), Some("T2 em Alvalade"));
    assert_eq!(meta.bedrooms.as_deref(), Some("2"));
    assert_eq!(meta.description.as_deref(), Some("Luminoso"));
}

#[test]
fn blank_values_do_not_claim_a_field() {
    let mut meta = StructuredMetadata::default();

    meta.set_title(Some("   ".to_string()));
    meta.set_title(None);
    meta.set_title(Some("Apartamento".to_string()));

    assert_eq!(meta.title.as_deref(), Some("Apartamento"));
}

#[test]
fn first_offer_keeps_price_and_formatted_price() {
    let meta = metadata_for(&[
        r#"{"offers": {"price": 385000, "priceCurrency": "EUR"}}"#,
        r#"{"offers": {"price": 1500, "priceCurrency": "USD"}}"#,
    ]);

    assert_eq!(meta.price.as_deref(), Some("385000"));
    assert_eq!(meta.price_str.as_deref(), Some("385000 EUR"));
}
