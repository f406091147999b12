use std::collections::{HashMap, HashSet};

use crate::encoder::EncodedSignature;

use super::tokenize::tokenize;
use super::types::{SparseRow, TermMatrix};
use super::EmptyCorpusError;

/// Build the sparse TF-IDF matrix for a batch of encoded signatures
///
/// The vocabulary is built fresh from this batch. Term frequency is scaled
/// by ln(docs / document-frequency), so terms present in every document
/// weigh zero and terms distinctive to few documents weigh higher; rows are
/// L2-normalized when they have any nonzero weight. A single-document batch
/// is valid (every weight collapses to zero); an empty batch is not.
pub fn vectorize(signatures: &[EncodedSignature]) -> Result<TermMatrix, EmptyCorpusError> {
    if signatures.is_empty() {
        return Err(EmptyCorpusError);
    }

    let tokenized: Vec<Vec<String>> = signatures
        .iter()
        .map(|signature| tokenize(signature.as_str()))
        .collect();

    // Vocabulary in first-seen order across the batch.
    let mut term_slots: HashMap<String, usize> = HashMap::new();
    let mut vocabulary: Vec<String> = Vec::new();
    for tokens in &tokenized {
        for token in tokens {
            if !term_slots.contains_key(token) {
                term_slots.insert(token.clone(), vocabulary.len());
                vocabulary.push(token.clone());
            }
        }
    }

    // Document frequency per term.
    let mut document_frequency = vec![0usize; vocabulary.len()];
    for tokens in &tokenized {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in distinct {
            document_frequency[term_slots[term]] += 1;
        }
    }

    let doc_count = signatures.len() as f32;
    let rows = tokenized
        .iter()
        .map(|tokens| weigh_row(tokens, &term_slots, &document_frequency, doc_count))
        .collect();

    Ok(TermMatrix { vocabulary, rows })
}

/// TF-IDF weights for one document, sparse over the terms it contains
fn weigh_row(
    tokens: &[String],
    term_slots: &HashMap<String, usize>,
    document_frequency: &[usize],
    doc_count: f32,
) -> SparseRow {
    let mut term_counts: HashMap<usize, usize> = HashMap::new();
    for token in tokens {
        *term_counts.entry(term_slots[token]).or_insert(0) += 1;
    }

    let doc_len = tokens.len() as f32;
    let mut row: SparseRow = term_counts
        .into_iter()
        .map(|(slot, count)| {
            let tf = count as f32 / doc_len;
            let idf = (doc_count / document_frequency[slot] as f32).ln();
            (slot, tf * idf)
        })
        .collect();

    // Stable entry order keeps runs comparable regardless of hash seeding.
    row.sort_unstable_by_key(|(slot, _)| *slot);

    let norm = row
        .iter()
        .map(|(_, weight)| weight * weight)
        .sum::<f32>()
        .sqrt();
    if norm > 0.0 {
        for (_, weight) in &mut row {
            *weight /= norm;
        }
    }

    row
}
