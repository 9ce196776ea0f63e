// Level 2 — per-sentence best-match detection.
//
// Every document-2 sentence is scanned against all document-1 sentences
// with Jaccard over raw token sets. Only the best match survives, and only
// when it strictly clears the threshold; ties keep the first document-1
// sentence that reached the maximum.

use crate::similarity::jaccard;
use crate::text::tokenize::raw_token_set;

use super::report::SentenceMatch;

/// Find the best document-1 match for each document-2 sentence.
///
/// Output is sparse and follows document-2 order; `position` is the 0-based
/// index of the matched sentence within document 2.
pub fn match_sentences(
    sentences1: &[String],
    sentences2: &[String],
    threshold: f64,
) -> Vec<SentenceMatch> {
    let sets1: Vec<_> = sentences1.iter().map(|s| raw_token_set(s)).collect();

    let mut matches = Vec::new();
    for (position, sentence) in sentences2.iter().enumerate() {
        let tokens = raw_token_set(sentence);

        let mut best_score = 0.0;
        let mut best_index = None;
        for (index, candidate) in sets1.iter().enumerate() {
            let score = jaccard(&tokens, candidate);
            if score > best_score {
                best_score = score;
                best_index = Some(index);
            }
        }

        if best_score > threshold {
            if let Some(index) = best_index {
                matches.push(SentenceMatch {
                    sentence: sentence.clone(),
                    similarity: (best_score * 100.0).round() as u32,
                    matching_sentence: sentences1[index].clone(),
                    position,
                });
            }
        }
    }
    matches
}
