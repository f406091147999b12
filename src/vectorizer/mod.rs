mod error;
mod stopwords;
mod tfidf;
mod tokenize;
mod types;


pub use error::EmptyCorpusError;
pub use tfidf::vectorize;
pub use tokenize::tokenize;
pub use types::{SparseRow, TermMatrix};
