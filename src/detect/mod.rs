// Detection pipeline — validation, orchestration, and the public contract.
//
// Each call is a pure, stateless computation: tokenization and vectorization
// are linear in the word counts, sentence matching and the paraphrase
// heuristic are quadratic in the sentence counts. Callers are expected to
// bound input size (see Config::max_text_len); the pipeline itself never
// suspends and holds no state across calls, so any number of detections may
// run concurrently.

pub mod aggregate;
pub mod error;
pub mod matcher;
pub mod paraphrase;
pub mod report;
pub mod thresholds;

use tracing::debug;

use crate::similarity::cosine;
use crate::text::normalize::normalize;
use crate::text::sentences::split_sentences;
use crate::text::tokenize::filtered_tokens;
use crate::vectorize::build_vectors;

pub use error::DetectError;
pub use report::DetectionReport;
pub use thresholds::DetectionThresholds;

/// Run the full three-level detection with default thresholds.
pub fn detect(text1: &str, text2: &str) -> Result<DetectionReport, DetectError> {
    detect_with(text1, text2, &DetectionThresholds::default())
}

/// Run the full three-level detection with explicit thresholds.
///
/// Validation is defensive: transport layers check the same preconditions,
/// but the core re-checks so it never computes on rejected input.
pub fn detect_with(
    text1: &str,
    text2: &str,
    thresholds: &DetectionThresholds,
) -> Result<DetectionReport, DetectError> {
    let text1 = text1.trim();
    let text2 = text2.trim();

    if text1.is_empty() || text2.is_empty() {
        return Err(DetectError::MissingInput);
    }
    let min = thresholds.min_text_len;
    if text1.chars().count() < min || text2.chars().count() < min {
        return Err(DetectError::TextTooShort { min });
    }

    // Level 1: TF-IDF cosine over the normalized texts
    let vectors = build_vectors(
        &filtered_tokens(&normalize(text1)),
        &filtered_tokens(&normalize(text2)),
    );
    let level1 = cosine(&vectors.doc1, &vectors.doc2);

    // Levels 2 and 3 segment the original texts: case and punctuation must
    // survive into the reported sentences
    let sentences1 = split_sentences(text1);
    let sentences2 = split_sentences(text2);

    let sentence_matches =
        matcher::match_sentences(&sentences1, &sentences2, thresholds.sentence_match);
    let paraphrases = paraphrase::find_paraphrases(&sentences1, &sentences2, thresholds);

    debug!(
        vocabulary = vectors.vocabulary.len(),
        sentences = sentences2.len(),
        matched = sentence_matches.len(),
        paraphrased = paraphrases.len(),
        "detection levels computed"
    );

    Ok(report::assemble(
        level1,
        sentence_matches,
        sentences2.len(),
        paraphrases,
        thresholds.display_limit,
    ))
}
