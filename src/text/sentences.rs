// Sentence segmentation over the original, non-normalized text.
//
// Sentences are split on runs of terminator characters. The terminators are
// consumed by the split, so emitted sentences carry no trailing punctuation.

use std::sync::OnceLock;

use regex_lite::Regex;

fn terminator_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("terminator pattern is valid"))
}

/// Split text into sentences on `.`, `!`, and `?`.
///
/// Each sentence is trimmed and empty segments are dropped. Text with no
/// terminator at all yields a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    terminator_pattern()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
