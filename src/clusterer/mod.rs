mod centroid;
mod distance;
mod error;
mod kmeans;
mod types;

#[cfg(test)]
mod tests;

pub use error::InvalidClusterCountError;
pub use kmeans::kmeans;
pub use types::{ClusterResult, DEFAULT_MAX_ITERS, DEFAULT_SEED};
