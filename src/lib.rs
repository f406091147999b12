// Public API exports
pub mod clusterer;
pub mod driver;
pub mod encoder;
pub mod extractor;
pub mod vectorizer;

// Re-export main types for convenience
pub use extractor::{extract, ParseError, StructuralExtraction};

pub use encoder::{encode, EncodedSignature};

pub use vectorizer::{vectorize, EmptyCorpusError, SparseRow, TermMatrix};

pub use clusterer::{kmeans, ClusterResult, InvalidClusterCountError, DEFAULT_MAX_ITERS, DEFAULT_SEED};

pub use driver::{
    print_grouping, GroupError, Grouping, GroupingDriver, GroupingOutcome, SkipReason,
    SkippedDocument,
};
