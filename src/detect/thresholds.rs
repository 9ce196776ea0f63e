// Tunable cutoffs for the detection pipeline.

/// Configurable thresholds for sentence matching and paraphrase detection.
///
/// The defaults reproduce the reference behavior; `detect` uses them
/// unchanged and `detect_with` accepts overrides.
#[derive(Debug, Clone)]
pub struct DetectionThresholds {
    /// A sentence match is kept only when its Jaccard score strictly
    /// exceeds this (default 0.30)
    pub sentence_match: f64,
    /// Lower bound of the paraphrase band, exclusive (default 0.25)
    pub paraphrase_low: f64,
    /// Upper bound of the paraphrase band, exclusive (default 0.70).
    /// Scores at or above this are near-copies — Level 2 territory, not
    /// paraphrase candidates.
    pub paraphrase_high: f64,
    /// How many paraphrase matches the report displays; the count field
    /// still reflects the full set (default 5)
    pub display_limit: usize,
    /// Minimum input length in characters (default 10)
    pub min_text_len: usize,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            sentence_match: 0.30,
            paraphrase_low: 0.25,
            paraphrase_high: 0.70,
            display_limit: 5,
            min_text_len: 10,
        }
    }
}
