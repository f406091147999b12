/// Structural signature of one parsed HTML document
///
/// Immutable once produced; all sequences preserve document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralExtraction {
    /// All human-readable text, whitespace-joined
    pub text: String,
    /// Every element name in document order, duplicates kept
    pub tags: Vec<String>,
    /// Every class token of every element, flattened
    pub classes: Vec<String>,
    /// Raw inline-style value of every element that has a non-empty one
    pub styles: Vec<String>,
}
