use scraper::{ElementRef, Html};

use super::{ParseError, StructuralExtraction};

/// Parse raw document bytes into a structural extraction
///
/// # Arguments
/// * `path` - Document identity, used for error context
/// * `bytes` - Raw file contents
///
/// # Returns
/// Flattened text plus ordered tag/class/style sequences, or a
/// `ParseError` when the bytes are not UTF-8 markup or the document
/// is empty.
pub fn extract(path: &str, bytes: &[u8]) -> Result<StructuralExtraction, ParseError> {
    let raw = std::str::from_utf8(bytes).map_err(|_| ParseError::NotUtf8 {
        path: path.to_string(),
    })?;

    if raw.trim().is_empty() {
        return Err(ParseError::EmptyDocument {
            path: path.to_string(),
        });
    }

    let document = Html::parse_document(raw);
    let root = document.root_element();

    // Each text node is trimmed; empty segments dropped; single-space joined.
    let text = root
        .text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut tags = Vec::new();
    let mut classes = Vec::new();
    let mut styles = Vec::new();

    // descendants() starts at the root element itself, so the implicit
    // html/head/body elements are counted like any other tag.
    for element in root.descendants().filter_map(ElementRef::wrap) {
        tags.push(element.value().name().to_string());

        for class in element.value().classes() {
            classes.push(class.to_string());
        }

        if let Some(style) = element.value().attr("style") {
            if !style.is_empty() {
                styles.push(style.to_string());
            }
        }
    }

    Ok(StructuralExtraction {
        text,
        tags,
        classes,
        styles,
    })
}
