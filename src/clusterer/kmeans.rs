use crate::clusterer::{
    centroid::compute_centroid,
    distance::{densify, squared_distance},
    error::InvalidClusterCountError,
    types::ClusterResult,
};
use crate::vectorizer::{SparseRow, TermMatrix};

/// Partition the matrix rows into k groups by iterative relocation
///
/// Initialization is reproducible for a given seed: the first centroid is a
/// uniformly chosen row (seeded ChaCha8), each further centroid the row
/// farthest from those already chosen (lowest index on ties). Labels are in
/// `[0, k)` and aligned with matrix row order.
pub fn kmeans(
    matrix: &TermMatrix,
    k: usize,
    max_iters: usize,
    seed: u64,
) -> Result<ClusterResult, InvalidClusterCountError> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let n = matrix.doc_count();
    if k == 0 || k > n {
        return Err(InvalidClusterCountError { k, documents: n });
    }

    let dim = matrix.term_count();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // 1. Pick initial centers: seeded first pick, then farthest-first
    let first = rng.gen_range(0..n);
    let mut centroids = initial_centroids(matrix, k, dim, first);

    let mut assignments = vec![0usize; n];
    let mut iterations = 0;

    for _ in 0..max_iters {
        iterations += 1;

        // 2. Assign each row to nearest centroid
        let mut changed = false;
        for i in 0..n {
            let best = centroids
                .iter()
                .enumerate()
                .map(|(c, center)| (c, squared_distance(&matrix.rows[i], center)))
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
                .unwrap()
                .0;

            if assignments[i] != best {
                changed = true;
                assignments[i] = best;
            }
        }

        if !changed {
            break; // converged
        }

        // 3. Recompute centroids; an emptied cluster keeps its old center
        for c in 0..k {
            let members: Vec<&SparseRow> = matrix
                .rows
                .iter()
                .zip(assignments.iter())
                .filter(|&(_, a)| *a == c)
                .map(|(row, _)| row)
                .collect();

            if !members.is_empty() {
                centroids[c] = compute_centroid(&members, dim);
            }
        }
    }

    Ok(ClusterResult {
        labels: assignments.iter().map(|&a| a as u32).collect(),
        iterations,
    })
}

/// Farthest-first seeding: maximize the minimum distance to chosen centers
fn initial_centroids(matrix: &TermMatrix, k: usize, dim: usize, first: usize) -> Vec<Vec<f32>> {
    let n = matrix.doc_count();
    let mut chosen = vec![false; n];
    let mut centroids = Vec::with_capacity(k);

    chosen[first] = true;
    centroids.push(densify(&matrix.rows[first], dim));

    while centroids.len() < k {
        let mut next = None;
        let mut best_dist = -1.0f32;

        for i in 0..n {
            if chosen[i] {
                continue;
            }
            let nearest = centroids
                .iter()
                .map(|center| squared_distance(&matrix.rows[i], center))
                .fold(f32::INFINITY, f32::min);
            if nearest > best_dist {
                best_dist = nearest;
                next = Some(i);
            }
        }

        // k <= n guarantees an unchosen row remains
        let next = next.unwrap();
        chosen[next] = true;
        centroids.push(densify(&matrix.rows[next], dim));
    }

    centroids
}
