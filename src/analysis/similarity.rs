//! Set-overlap similarity between two texts, used for thesis-drift detection.

use std::collections::HashSet;

use super::tokenize::tokenize;

/// Similarity below which a thesis counts as significantly changed.
///
/// Fixed, empirically tuned constant; deliberately not a config knob.
pub const THESIS_DRIFT_THRESHOLD: f64 = 0.55;

/// Jaccard similarity over the distinct-token vocabularies of two texts.
///
/// Type-level, not token-level: repeated words count once. Symmetric and in
/// [0, 1]. Two empty vocabularies are identical by vacuity (1.0); exactly
/// one empty vocabulary yields 0.0.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let vocab_a: HashSet<String> = tokenize(a).into_iter().collect();
    let vocab_b: HashSet<String> = tokenize(b).into_iter().collect();

    if vocab_a.is_empty() && vocab_b.is_empty() {
        return 1.0;
    }
    if vocab_a.is_empty() || vocab_b.is_empty() {
        return 0.0;
    }

    let intersection = vocab_a.intersection(&vocab_b).count();
    let union = vocab_a.union(&vocab_b).count();

    intersection as f64 / union as f64
}

/// True when two thesis sentences diverge below [`THESIS_DRIFT_THRESHOLD`].
pub fn thesis_changed(first_thesis: &str, final_thesis: &str) -> bool {
    jaccard_similarity(first_thesis, final_thesis) < THESIS_DRIFT_THRESHOLD
}
