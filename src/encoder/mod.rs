mod signature;

#[cfg(test)]
mod tests;

pub use signature::{encode, EncodedSignature};
