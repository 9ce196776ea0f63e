// Level 3 — lexical-overlap paraphrase heuristic.
//
// Scores the full cross product of (document-2 sentence, document-1
// sentence) pairs: shared-token density with a length-difference penalty.
// A pair lands in the report only when its score falls strictly inside the
// paraphrase band; high scores are near-copies and low scores are noise.
// Unlike Level 2 there is no best-only reduction, so one document-2
// sentence can yield several matches.

use std::collections::HashSet;

use crate::text::tokenize::raw_token_set;

use super::report::ParaphraseMatch;
use super::thresholds::DetectionThresholds;

/// Label attached to every paraphrase match.
pub const PARAPHRASE_LABEL: &str = "paraphrased";

/// Score every sentence pair and keep those inside the paraphrase band.
///
/// Matches are emitted in document-2 order, document-1 order within each
/// document-2 sentence.
pub fn find_paraphrases(
    sentences1: &[String],
    sentences2: &[String],
    thresholds: &DetectionThresholds,
) -> Vec<ParaphraseMatch> {
    let sets1: Vec<_> = sentences1.iter().map(|s| raw_token_set(s)).collect();

    let mut matches = Vec::new();
    for (position, sentence) in sentences2.iter().enumerate() {
        let tokens = raw_token_set(sentence);
        for (index, candidate) in sets1.iter().enumerate() {
            let score = overlap_score(&tokens, candidate);
            if score > thresholds.paraphrase_low && score < thresholds.paraphrase_high {
                matches.push(ParaphraseMatch {
                    sentence: sentence.clone(),
                    semantic_similarity: (score * 100.0).round() as u32,
                    matching_sentence: sentences1[index].clone(),
                    position,
                    kind: PARAPHRASE_LABEL.to_string(),
                });
            }
        }
    }
    matches
}

/// Shared-token density with a length-difference penalty:
/// `(common / avg_len) * (1 - len_diff * 0.5)`, where `len_diff` is the
/// set-size difference over the larger set size. Two empty sets score 0.
pub fn overlap_score(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let common = a.intersection(b).count() as f64;
    let avg_len = (a.len() + b.len()) as f64 / 2.0;
    if avg_len == 0.0 {
        return 0.0;
    }

    let max_len = a.len().max(b.len()) as f64;
    let len_diff = if max_len == 0.0 {
        0.0
    } else {
        (a.len() as f64 - b.len() as f64).abs() / max_len
    };

    (common / avg_len) * (1.0 - len_diff * 0.5)
}
