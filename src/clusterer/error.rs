use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid cluster count {k} for {documents} documents")]
pub struct InvalidClusterCountError {
    pub k: usize,
    pub documents: usize,
}
