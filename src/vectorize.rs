// TF-IDF vectorization over a two-document corpus.
//
// The vocabulary is the union of both documents' filtered tokens in
// first-seen order (document 1's tokens, then document 2's). That order is
// arbitrary but must be identical for both vectors within one computation:
// it defines positional alignment, not meaning.
//
// Term frequency is the raw occurrence count with no length normalization.
// Document frequency is 1 or 2 by construction, and idf = ln(2/df) + 1. The
// +1 smoothing keeps terms present in both documents from vanishing: without
// it, two identical documents would produce all-zero vectors and a cosine
// similarity of 0.

use std::collections::{HashMap, HashSet};

/// The shared vocabulary and the two positionally aligned TF-IDF vectors.
#[derive(Debug, Clone)]
pub struct DocumentVectors {
    /// Union of both documents' filtered tokens, in fixed first-seen order
    pub vocabulary: Vec<String>,
    /// TF-IDF components for document 1, aligned to `vocabulary`
    pub doc1: Vec<f64>,
    /// TF-IDF components for document 2, aligned to `vocabulary`
    pub doc2: Vec<f64>,
}

/// Build the vocabulary and both TF-IDF vectors from filtered token streams.
///
/// An empty token stream is fine: the vocabulary then comes entirely from
/// the other document and the empty document's components are all zero.
pub fn build_vectors(tokens1: &[String], tokens2: &[String]) -> DocumentVectors {
    let counts1 = term_counts(tokens1);
    let counts2 = term_counts(tokens2);

    let mut vocabulary = Vec::new();
    let mut seen = HashSet::new();
    for token in tokens1.iter().chain(tokens2.iter()) {
        if seen.insert(token.as_str()) {
            vocabulary.push(token.clone());
        }
    }

    let mut doc1 = Vec::with_capacity(vocabulary.len());
    let mut doc2 = Vec::with_capacity(vocabulary.len());
    for term in &vocabulary {
        let tf1 = counts1.get(term.as_str()).copied().unwrap_or(0);
        let tf2 = counts2.get(term.as_str()).copied().unwrap_or(0);
        // Every vocabulary term occurs in at least one document, so df is 1 or 2
        let df = u32::from(tf1 > 0) + u32::from(tf2 > 0);
        let idf = (2.0 / f64::from(df)).ln() + 1.0;
        doc1.push(f64::from(tf1) * idf);
        doc2.push(f64::from(tf2) * idf);
    }

    DocumentVectors {
        vocabulary,
        doc1,
        doc2,
    }
}

/// Raw occurrence count per token.
fn term_counts(tokens: &[String]) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}
