// Unit tests for text preparation.
//
// Covers normalization (TF-IDF path only), sentence segmentation (original
// text), and the two tokenization policies — which must stay separate.

use carbon::text::normalize::normalize;
use carbon::text::sentences::split_sentences;
use carbon::text::tokenize::{filtered_tokens, raw_token_set, raw_tokens};

// ============================================================
// normalize — lowercase, strip, trim
// ============================================================

#[test]
fn normalize_lowercases() {
    assert_eq!(normalize("HELLO World"), "hello world");
}

#[test]
fn normalize_strips_punctuation_but_keeps_terminators() {
    assert_eq!(normalize("Hello, world! (Really?)"), "hello world! really?");
}

#[test]
fn normalize_trims_surrounding_whitespace() {
    assert_eq!(normalize("  spaced out.  "), "spaced out.");
}

#[test]
fn normalize_strips_to_empty() {
    assert_eq!(normalize("@#$%^&*"), "");
}

#[test]
fn normalize_empty_input_yields_empty_output() {
    assert_eq!(normalize(""), "");
}

// ============================================================
// split_sentences — original text, terminators consumed
// ============================================================

#[test]
fn sentences_split_on_all_three_terminators() {
    assert_eq!(
        split_sentences("First one. Second one! Third one?"),
        ["First one", "Second one", "Third one"]
    );
}

#[test]
fn sentences_keep_original_case_and_inner_punctuation() {
    assert_eq!(
        split_sentences("The CAT, allegedly, sat. On a mat?"),
        ["The CAT, allegedly, sat", "On a mat"]
    );
}

#[test]
fn sentences_without_terminator_form_one_sentence() {
    assert_eq!(split_sentences("just a fragment"), ["just a fragment"]);
}

#[test]
fn sentences_from_terminators_only_is_empty() {
    assert!(split_sentences("?!.").is_empty());
}

// ============================================================
// tokenize — filtered vs raw policies
// ============================================================

#[test]
fn filtered_drops_short_tokens() {
    assert_eq!(filtered_tokens("the cat is on a mat"), ["the", "cat", "mat"]);
}

#[test]
fn filtered_counts_terminator_as_token_chars() {
    // Normalized text keeps terminators, so a trailing period is part of
    // the token it is attached to
    assert_eq!(filtered_tokens("it. go."), ["it.", "go."]);
}

#[test]
fn raw_keeps_short_tokens_and_punctuation() {
    assert_eq!(
        raw_tokens("A cat, on THE mat!"),
        ["a", "cat,", "on", "the", "mat!"]
    );
}

#[test]
fn raw_token_set_collapses_duplicates() {
    let set = raw_token_set("the the the cat");
    assert_eq!(set.len(), 2);
    assert!(set.contains("the"));
    assert!(set.contains("cat"));
}

#[test]
fn raw_tokens_of_blank_input_are_empty() {
    assert!(raw_tokens("   ").is_empty());
}
