use thiserror::Error;

#[derive(Error, Debug)]
#[error("cannot vectorize an empty corpus")]
pub struct EmptyCorpusError;
