mod error;
mod html;
mod structure;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use html::extract;
pub use structure::StructuralExtraction;
