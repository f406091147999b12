use super::*;

const PAGE: &str = r#"<html>
<head><title>Sample</title></head>
<body>
  <div class="card wide">
    Hello
    <span style="color:red">world</span>
  </div>
  <p class="card">again</p>
</body>
</html>"#;

#[test]
fn test_extract_flattens_text() {
    let extraction = extract("page.html", PAGE.as_bytes()).unwrap();
    assert_eq!(extraction.text, "Sample Hello world again");
}

#[test]
fn test_extract_tags_in_document_order() {
    let extraction = extract("page.html", PAGE.as_bytes()).unwrap();
    assert_eq!(
        extraction.tags,
        vec!["html", "head", "title", "body", "div", "span", "p"]
    );
}

#[test]
fn test_extract_flattens_classes() {
    let extraction = extract("page.html", PAGE.as_bytes()).unwrap();
    // div contributes two entries, p contributes one
    assert_eq!(extraction.classes, vec!["card", "wide", "card"]);
}

#[test]
fn test_extract_skips_styleless_elements() {
    let extraction = extract("page.html", PAGE.as_bytes()).unwrap();
    assert_eq!(extraction.styles, vec!["color:red"]);
}

#[test]
fn test_extract_empty_style_not_recorded() {
    let html = r#"<div style="">text</div>"#;
    let extraction = extract("page.html", html.as_bytes()).unwrap();
    assert!(extraction.styles.is_empty());
}

#[test]
fn test_extract_rejects_non_utf8() {
    let binary = vec![0xFF, 0xFE, 0x00, 0x01];
    let err = extract("binary.html", &binary).unwrap_err();
    assert!(matches!(err, ParseError::NotUtf8 { .. }));
}

#[test]
fn test_extract_rejects_empty_document() {
    let err = extract("empty.html", b"   \n  ").unwrap_err();
    assert!(matches!(err, ParseError::EmptyDocument { .. }));
}

#[test]
fn test_extract_plain_text_without_markup() {
    // An HTML5 parser accepts bare text; it still gets the implicit shell.
    let extraction = extract("plain.html", b"just words").unwrap();
    assert_eq!(extraction.text, "just words");
    assert!(extraction.tags.contains(&"html".to_string()));
    assert!(extraction.classes.is_empty());
}
