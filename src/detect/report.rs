// Report structures — the serialized output contract.
//
// Pure struct construction: `assemble` packages the three levels and the
// summary without recomputing anything except the overall score. Field
// names are part of the wire contract.

use serde::{Deserialize, Serialize};

use super::aggregate::overall_score;

/// Fixed method label for the Level 1 score.
pub const LEVEL1_METHOD: &str = "TF-IDF + Cosine Similarity";
/// Fixed explanation string for the Level 1 score.
pub const LEVEL1_EXPLANATION: &str = "Measures word overlap and frequency similarity";

/// Complete detection output across all three levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    pub success: bool,
    pub level1_basic: Level1Basic,
    pub level2_sentence: Level2Sentence,
    pub level3_semantic: Level3Semantic,
    pub summary: Summary,
}

/// Level 1 — whole-document TF-IDF cosine similarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level1Basic {
    pub similarity_percentage: u32,
    pub method: String,
    pub explanation: String,
}

/// Level 2 — per-sentence best-match detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level2Sentence {
    pub plagiarized_sentences: Vec<SentenceMatch>,
    /// Sentence count of document 2, the scanned document
    pub total_sentences: usize,
    pub plagiarized_count: usize,
}

/// A document-2 sentence whose best document-1 match cleared the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceMatch {
    pub sentence: String,
    /// Rounded percentage of the best Jaccard score
    pub similarity: u32,
    pub matching_sentence: String,
    /// 0-based index of the sentence within document 2
    pub position: usize,
}

/// Level 3 — lexical-overlap paraphrase candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level3Semantic {
    /// At most `display_limit` entries; the count field holds the full total
    pub semantic_plagiarized_sentences: Vec<ParaphraseMatch>,
    pub semantic_plagiarized_count: usize,
}

/// A sentence pair whose overlap score fell inside the paraphrase band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParaphraseMatch {
    pub sentence: String,
    pub semantic_similarity: u32,
    pub matching_sentence: String,
    pub position: usize,
    /// Always "paraphrased"
    #[serde(rename = "type")]
    pub kind: String,
}

/// Headline numbers for the whole report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub overall_similarity: u32,
    pub total_plagiarized_sentences: usize,
    pub semantic_plagiarized_sentences: usize,
}

/// Package the computed levels into the final report.
///
/// `level1` is the raw cosine score on a 0-1 scale. The Level 3 list is
/// truncated for display after its true count is recorded.
pub fn assemble(
    level1: f64,
    sentence_matches: Vec<SentenceMatch>,
    total_sentences: usize,
    mut paraphrases: Vec<ParaphraseMatch>,
    display_limit: usize,
) -> DetectionReport {
    let level1_pct = (level1 * 100.0).round() as u32;
    let plagiarized_count = sentence_matches.len();
    let semantic_count = paraphrases.len();
    paraphrases.truncate(display_limit);

    let overall = overall_score(level1, plagiarized_count, total_sentences);

    DetectionReport {
        success: true,
        level1_basic: Level1Basic {
            similarity_percentage: level1_pct,
            method: LEVEL1_METHOD.to_string(),
            explanation: LEVEL1_EXPLANATION.to_string(),
        },
        level2_sentence: Level2Sentence {
            plagiarized_sentences: sentence_matches,
            total_sentences,
            plagiarized_count,
        },
        level3_semantic: Level3Semantic {
            semantic_plagiarized_sentences: paraphrases,
            semantic_plagiarized_count: semantic_count,
        },
        summary: Summary {
            overall_similarity: overall,
            total_plagiarized_sentences: plagiarized_count,
            semantic_plagiarized_sentences: semantic_count,
        },
    }
}
