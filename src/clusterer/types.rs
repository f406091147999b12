/// Centroid seed used when the caller does not supply one.
/// Fixed so identical input always yields identical labels.
pub const DEFAULT_SEED: u64 = 42;

/// Relocation iterations before giving up on convergence
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Outcome of one k-means run
#[derive(Debug, Clone)]
pub struct ClusterResult {
    /// Cluster id per matrix row, positionally aligned with the corpus
    pub labels: Vec<u32>,
    /// Relocation iterations actually performed
    pub iterations: usize,
}
