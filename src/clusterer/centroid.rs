use crate::vectorizer::SparseRow;

/// Mean of a set of sparse member rows, as a dense vector
pub fn compute_centroid(members: &[&SparseRow], dim: usize) -> Vec<f32> {
    let mut out = vec![0.0; dim];

    for row in members {
        for &(slot, value) in row.iter() {
            out[slot] += value;
        }
    }

    let n = members.len() as f32;
    for value in &mut out {
        *value /= n;
    }

    out
}
