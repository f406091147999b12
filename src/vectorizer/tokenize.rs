use super::stopwords::is_stop_word;

/// Split a signature string into vectorizer terms
///
/// Tokens containing `:` are structural count tokens (`div:3`, `style:2`)
/// and pass through verbatim. Plain-text tokens are lowercased, stripped to
/// alphanumerics, and dropped when empty or on the stop-word list.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let lower = raw.to_lowercase();

            if lower.contains(':') {
                return Some(lower);
            }

            let word: String = lower.chars().filter(|c| c.is_alphanumeric()).collect();
            if word.is_empty() || is_stop_word(&word) {
                None
            } else {
                Some(word)
            }
        })
        .collect()
}
