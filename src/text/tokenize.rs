// The two tokenization policies.
//
// The filtered policy feeds vocabulary construction; the raw policy feeds the
// Jaccard and paraphrase paths. They are intentionally separate operations
// over different inputs — merging them silently shifts every downstream score.

use std::collections::HashSet;

/// Vocabulary tokens: whitespace-split the normalized text and drop tokens of
/// two characters or fewer.
pub fn filtered_tokens(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// Lexical tokens: lowercase the original text and whitespace-split.
/// No length filter and no punctuation stripping.
pub fn raw_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The raw tokens of `text` as a set, for intersection/union metrics.
pub fn raw_token_set(text: &str) -> HashSet<String> {
    raw_tokens(text).into_iter().collect()
}
