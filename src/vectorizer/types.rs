/// Nonzero-entry row of the term matrix: (vocabulary index, weight)
pub type SparseRow = Vec<(usize, f32)>;

/// Sparse document-term importance matrix
///
/// One row per corpus document in corpus order, one column per vocabulary
/// term. The vocabulary is scoped to a single vectorizer invocation and
/// never reused across runs.
#[derive(Debug, Clone)]
pub struct TermMatrix {
    /// Distinct terms across the batch, in first-seen order
    pub vocabulary: Vec<String>,
    /// Per-document term weights, positionally aligned with the corpus
    pub rows: Vec<SparseRow>,
}

impl TermMatrix {
    pub fn doc_count(&self) -> usize {
        self.rows.len()
    }

    pub fn term_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of a term, if it is in the vocabulary
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.iter().position(|t| t == term)
    }

    /// Stored weight of a term in a document row, if the document
    /// contains that term
    pub fn weight(&self, row: usize, term_index: usize) -> Option<f32> {
        self.rows[row]
            .iter()
            .find(|(index, _)| *index == term_index)
            .map(|(_, weight)| *weight)
    }
}
