mod report;


pub use report::print_grouping;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::clusterer::{kmeans, InvalidClusterCountError, DEFAULT_MAX_ITERS, DEFAULT_SEED};
use crate::encoder::{encode, EncodedSignature};
use crate::extractor::{extract, ParseError};
use crate::vectorizer::{vectorize, EmptyCorpusError};

/// Final mapping from cluster id to member document paths
#[derive(Debug, Clone, Serialize)]
pub struct Grouping {
    pub clusters: BTreeMap<u32, Vec<PathBuf>>,
}

/// A document excluded from the corpus, with the reason it was skipped
#[derive(Debug)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Error, Debug)]
pub enum SkipReason {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
}

/// Result of grouping one document collection
#[derive(Debug)]
pub struct GroupingOutcome {
    pub grouping: Grouping,
    pub skipped: Vec<SkippedDocument>,
    pub iterations: usize,
}

/// Collection-level failure; per-document failures are skips, not errors
#[derive(Error, Debug)]
pub enum GroupError {
    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error(transparent)]
    EmptyCorpus(#[from] EmptyCorpusError),

    #[error(transparent)]
    InvalidClusterCount(#[from] InvalidClusterCountError),
}

/// Orchestrates extract → encode → vectorize → partition for one directory
/// of markup documents
pub struct GroupingDriver {
    extension: String,
    max_iters: usize,
    seed: u64,
}

impl GroupingDriver {
    pub fn new() -> Self {
        Self {
            extension: "html".to_string(),
            max_iters: DEFAULT_MAX_ITERS,
            seed: DEFAULT_SEED,
        }
    }

    /// Set the file extension (without dot) that marks eligible documents
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the centroid initialization seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the relocation iteration cap
    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Group every eligible document under `dir` into `k` clusters
    ///
    /// Documents that cannot be read or parsed are skipped and recorded;
    /// they never abort the batch. `k` is validated against the surviving
    /// corpus before the partitioner runs and is never clamped.
    pub fn group(&self, dir: &Path, k: usize) -> Result<GroupingOutcome, GroupError> {
        let (paths, signatures, skipped) = self.build_corpus(dir)?;

        if paths.is_empty() {
            return Err(EmptyCorpusError.into());
        }
        if k == 0 || k > paths.len() {
            return Err(InvalidClusterCountError {
                k,
                documents: paths.len(),
            }
            .into());
        }

        let matrix = vectorize(&signatures)?;
        let result = kmeans(&matrix, k, self.max_iters, self.seed)?;

        info!(
            collection = %dir.display(),
            documents = paths.len(),
            skipped = skipped.len(),
            iterations = result.iterations,
            "clustered collection"
        );

        let mut clusters: BTreeMap<u32, Vec<PathBuf>> = BTreeMap::new();
        for (path, &label) in paths.into_iter().zip(result.labels.iter()) {
            clusters.entry(label).or_default().push(path);
        }

        Ok(GroupingOutcome {
            grouping: Grouping { clusters },
            skipped,
            iterations: result.iterations,
        })
    }

    /// Read, extract, and encode every eligible file, in lexicographic
    /// name order so corpus order is reproducible
    #[allow(clippy::type_complexity)]
    fn build_corpus(
        &self,
        dir: &Path,
    ) -> Result<(Vec<PathBuf>, Vec<EncodedSignature>, Vec<SkippedDocument>), GroupError> {
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| GroupError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == self.extension)
            {
                files.push(path);
            }
        }
        files.sort();

        let mut paths = Vec::new();
        let mut signatures = Vec::new();
        let mut skipped = Vec::new();

        for path in files {
            match self.load_document(&path) {
                Ok(signature) => {
                    paths.push(path);
                    signatures.push(signature);
                }
                Err(reason) => {
                    warn!(document = %path.display(), %reason, "skipping document");
                    skipped.push(SkippedDocument { path, reason });
                }
            }
        }

        Ok((paths, signatures, skipped))
    }

    fn load_document(&self, path: &Path) -> Result<EncodedSignature, SkipReason> {
        let bytes = fs::read(path)?;
        let extraction = extract(&path.display().to_string(), &bytes)?;
        Ok(encode(&extraction))
    }
}

impl Default for GroupingDriver {
    fn default() -> Self {
        Self::new()
    }
}
