// Similarity metrics — cosine over aligned vectors, Jaccard over token sets.
//
// Both metrics are total functions: every degenerate input (zero-norm
// vector, empty union) resolves to 0.0 rather than an error or NaN.

use std::collections::HashSet;

/// Cosine similarity between two positionally aligned vectors.
///
/// Returns 0.0 when either vector has zero norm, so callers never divide
/// by zero.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Jaccard similarity between two token sets: intersection over union.
///
/// Duplicate tokens have already collapsed in the sets. An empty union
/// resolves to 0.0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let common = a.intersection(b).count();
    common as f64 / union as f64
}
