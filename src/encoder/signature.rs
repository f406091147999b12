use std::collections::HashMap;
use std::fmt;

use crate::extractor::StructuralExtraction;

/// One document's text plus structural counts, flattened into a single
/// token-bag string for the vectorizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSignature(String);

impl EncodedSignature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode a structural extraction into its signature string
///
/// Token order is first-seen per category: text, then `tag:count` per
/// distinct tag, then `class:count` per distinct class, then style tokens.
/// Empty categories contribute nothing.
pub fn encode(extraction: &StructuralExtraction) -> EncodedSignature {
    let mut parts: Vec<String> = Vec::new();

    if !extraction.text.is_empty() {
        parts.push(extraction.text.clone());
    }

    for (tag, count) in ordered_counts(&extraction.tags) {
        parts.push(format!("{tag}:{count}"));
    }

    for (class, count) in ordered_counts(&extraction.classes) {
        parts.push(format!("{class}:{count}"));
    }

    // Styles collapse to the literal token `style:<count>`, one per distinct
    // style string; the style contents are discarded and only the frequency
    // profile of inline styling survives into the signature.
    for (_, count) in ordered_counts(&extraction.styles) {
        parts.push(format!("style:{count}"));
    }

    EncodedSignature(parts.join(" "))
}

/// Occurrence counts per distinct value, in first-seen order
fn ordered_counts(values: &[String]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match index.get(value.as_str()) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.clone(), 1));
            }
        }
    }

    counts
}
