use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{path}: document is not valid UTF-8")]
    NotUtf8 { path: String },

    #[error("{path}: document is empty")]
    EmptyDocument { path: String },
}
