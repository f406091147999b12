use super::*;
use crate::extractor::StructuralExtraction;

fn make_extraction(
    text: &str,
    tags: &[&str],
    classes: &[&str],
    styles: &[&str],
) -> StructuralExtraction {
    StructuralExtraction {
        text: text.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        classes: classes.iter().map(|s| s.to_string()).collect(),
        styles: styles.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_encode_counts_in_first_seen_order() {
    let extraction = make_extraction(
        "hello world",
        &["html", "body", "div", "div", "span", "div"],
        &["card", "wide", "card"],
        &[],
    );

    let signature = encode(&extraction);
    assert_eq!(
        signature.as_str(),
        "hello world html:1 body:1 div:3 span:1 card:2 wide:1"
    );
}

#[test]
fn test_encode_is_deterministic() {
    let extraction = make_extraction(
        "text",
        &["div", "p", "div"],
        &["a", "b", "a"],
        &["color:red", "font:1"],
    );

    let first = encode(&extraction);
    let second = encode(&extraction);
    assert_eq!(first, second);
}

#[test]
fn test_encode_style_tokens_drop_style_contents() {
    let extraction = make_extraction("", &[], &[], &["color:red", "color:red", "font:1"]);

    let signature = encode(&extraction);
    // Two distinct style strings, frequencies 2 and 1; the strings
    // themselves never appear.
    assert_eq!(signature.as_str(), "style:2 style:1");
    assert!(!signature.as_str().contains("color"));
}

#[test]
fn test_encode_empty_categories_add_no_separators() {
    let extraction = make_extraction("only text", &[], &[], &[]);
    assert_eq!(encode(&extraction).as_str(), "only text");

    let empty = make_extraction("", &[], &[], &[]);
    assert_eq!(encode(&empty).as_str(), "");
}

#[test]
fn test_encode_tags_only() {
    let extraction = make_extraction("", &["html", "body"], &[], &[]);
    assert_eq!(encode(&extraction).as_str(), "html:1 body:1");
}
