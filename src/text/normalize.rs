// Text normalization for the TF-IDF path.
//
// Lowercases and strips everything except word characters, whitespace, and
// sentence terminators. Sentence segmentation and the paraphrase heuristic
// deliberately run on the ORIGINAL text instead: case and punctuation are
// preserved there so matched sentences can be reported verbatim.

use std::sync::OnceLock;

use regex_lite::Regex;

fn strip_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s.!?]").expect("strip pattern is valid"))
}

/// Normalize raw text for vocabulary construction.
///
/// Lowercases, removes every character that is not a word character,
/// whitespace, or a sentence terminator (`.`, `!`, `?`), and trims the
/// result. Total: never fails, and empty input yields empty output.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    strip_pattern().replace_all(&lowered, "").trim().to_string()
}
