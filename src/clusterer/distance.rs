use crate::vectorizer::SparseRow;

/// Squared Euclidean distance between a sparse row and a dense centroid
///
/// Expanded as ‖c‖² plus per-entry corrections so only the row's nonzero
/// entries are visited.
pub fn squared_distance(row: &SparseRow, centroid: &[f32]) -> f32 {
    let mut dist: f32 = centroid.iter().map(|c| c * c).sum();

    for &(slot, value) in row {
        let c = centroid[slot];
        dist += (value - c) * (value - c) - c * c;
    }

    // Float cancellation can push an exact match slightly negative.
    dist.max(0.0)
}

/// Densify a sparse row into a full-width vector
pub fn densify(row: &SparseRow, dim: usize) -> Vec<f32> {
    let mut out = vec![0.0; dim];
    for &(slot, value) in row {
        out[slot] = value;
    }
    out
}
