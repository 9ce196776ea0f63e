// Unit tests for the detection stages.
//
// Covers the Level 2 matcher (thresholds, ties, ordering), the Level 3
// band boundaries, the aggregation formula, and input validation.

use carbon::detect::aggregate::overall_score;
use carbon::detect::matcher::match_sentences;
use carbon::detect::paraphrase::find_paraphrases;
use carbon::detect::thresholds::DetectionThresholds;
use carbon::detect::{detect, DetectError};

fn sents(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// match_sentences — ordering and sparseness
// ============================================================

#[test]
fn matches_follow_doc2_order_with_positions() {
    let doc1 = sents(&["one two three", "four five six"]);
    let doc2 = sents(&[
        "four five six",
        "unrelated words entirely",
        "one two three",
    ]);
    let matches = match_sentences(&doc1, &doc2, 0.30);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].position, 0);
    assert_eq!(matches[0].matching_sentence, "four five six");
    assert_eq!(matches[1].position, 2);
    assert_eq!(matches[1].matching_sentence, "one two three");
}

#[test]
fn unmatched_sentences_produce_no_zero_records() {
    let doc1 = sents(&["alpha beta gamma"]);
    let doc2 = sents(&["alpha beta gamma", "totally different content"]);
    let matches = match_sentences(&doc1, &doc2, 0.30);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].position, 0);
}

#[test]
fn partial_overlap_scores_round_to_percent() {
    // Jaccard 4/6 between the two sentences: round(66.67) = 67
    let doc1 = sents(&["the quick brown fox jumps"]);
    let doc2 = sents(&["the quick brown fox leaps"]);
    let matches = match_sentences(&doc1, &doc2, 0.30);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].similarity, 67);
}

// ============================================================
// find_paraphrases — band boundaries
// ============================================================

#[test]
fn paraphrase_band_excludes_low_overlap() {
    // One shared token of 4+4: score 0.25 exactly, outside the open band
    let thresholds = DetectionThresholds::default();
    let doc1 = sents(&["w x y z"]);
    let doc2 = sents(&["w a b c"]);
    assert!(find_paraphrases(&doc1, &doc2, &thresholds).is_empty());
}

#[test]
fn paraphrase_band_accepts_mid_overlap() {
    let thresholds = DetectionThresholds::default();
    let doc1 = sents(&["alpha beta gamma delta"]);
    let doc2 = sents(&["alpha beta epsilon zeta"]);
    let matches = find_paraphrases(&doc1, &doc2, &thresholds);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].semantic_similarity, 50);
}

#[test]
fn paraphrase_band_excludes_near_copies() {
    let thresholds = DetectionThresholds::default();
    let doc = sents(&["five distinct tokens right here"]);
    assert!(find_paraphrases(&doc, &doc, &thresholds).is_empty());
}

#[test]
fn custom_band_changes_what_is_kept() {
    // Widen the band upward so an exact copy (score 1.0) is still excluded
    // but a 0.75 score is kept
    let thresholds = DetectionThresholds {
        paraphrase_high: 0.80,
        ..Default::default()
    };
    // common 3 of two 4-token sets: score 0.75
    let doc1 = sents(&["a1 a2 a3 only1"]);
    let doc2 = sents(&["a1 a2 a3 only2"]);
    let matches = find_paraphrases(&doc1, &doc2, &thresholds);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].semantic_similarity, 75);
}

// ============================================================
// overall_score — the aggregation formula, literally
// ============================================================

#[test]
fn formula_reference_case() {
    // round((50*40 + 0.5*100*30 + 50*30) / 100) = 50
    assert_eq!(overall_score(0.5, 1, 2), 50);
}

#[test]
fn level1_carries_seventy_percent_of_the_weight() {
    // With no sentence matches, overall = l1 * 0.7
    assert_eq!(overall_score(1.0, 0, 10), 70);
}

#[test]
fn ratio_term_is_zero_without_sentences() {
    assert_eq!(overall_score(1.0, 0, 0), 70);
}

#[test]
fn bounds_hold_at_the_extremes() {
    assert_eq!(overall_score(0.0, 0, 1), 0);
    assert_eq!(overall_score(1.0, 5, 5), 100);
}

// ============================================================
// detect — validation
// ============================================================

#[test]
fn short_input_is_rejected() {
    let err = detect("too short", "This text is long enough to pass validation.").unwrap_err();
    assert_eq!(err, DetectError::TextTooShort { min: 10 });
}

#[test]
fn empty_or_blank_input_is_rejected() {
    let valid = "This text is long enough to pass validation.";
    assert_eq!(detect("", valid).unwrap_err(), DetectError::MissingInput);
    assert_eq!(detect(valid, "   ").unwrap_err(), DetectError::MissingInput);
}

#[test]
fn validation_applies_to_both_sides() {
    let valid = "This text is long enough to pass validation.";
    assert!(detect(valid, "tiny").is_err());
    assert!(detect("tiny", valid).is_err());
}

#[test]
fn error_messages_match_the_api_contract() {
    assert_eq!(
        DetectError::MissingInput.to_string(),
        "Both text1 and text2 are required"
    );
    assert_eq!(
        DetectError::TextTooShort { min: 10 }.to_string(),
        "Texts must be at least 10 characters long"
    );
}
