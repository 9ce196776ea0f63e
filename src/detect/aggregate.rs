// Overall-score aggregation.
//
// Level 1 contributes twice (weights 40 and 30) and Level 2's match ratio
// contributes weight 30. Level 3 is surfaced in the report but does not
// factor into the overall score. This reproduces the reference weighting
// as-is.

/// Combine the Level 1 score and the Level 2 match ratio into the overall
/// 0-100 similarity.
///
/// `level1` is the cosine score on a 0-1 scale. When document 2 has no
/// sentences the ratio term is 0. The final clamp is a robustness guard on
/// top of the reference formula.
pub fn overall_score(level1: f64, level2_count: usize, level2_total: usize) -> u32 {
    let l1 = level1 * 100.0;
    let ratio = if level2_total == 0 {
        0.0
    } else {
        level2_count as f64 / level2_total as f64
    };

    let raw = (l1 * 40.0 + ratio * 100.0 * 30.0 + l1 * 30.0) / 100.0;
    raw.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_literal() {
        // round((50*40 + 0.5*100*30 + 50*30) / 100) = round(5000/100) = 50
        assert_eq!(overall_score(0.5, 1, 2), 50);
    }

    #[test]
    fn test_zero_sentences_guard() {
        // The ratio term is defined as 0 when document 2 has no sentences
        assert_eq!(overall_score(0.5, 0, 0), 35);
    }

    #[test]
    fn test_full_match() {
        assert_eq!(overall_score(1.0, 3, 3), 100);
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(overall_score(0.0, 0, 5), 0);
    }
}
