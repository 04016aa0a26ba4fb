//! Marker-phrase counting: cheap lexical proxies for claims and evidence.
//!
//! A marker occurrence is whole-word and case-insensitive. Matching runs over
//! token sequences rather than raw text, which gives word-boundary semantics
//! for free: "should" never matches inside "shoulder".

use super::tokenize::tokenize;

/// Lexical cues signaling a claim is being made.
pub const CLAIM_MARKERS: &[&str] = &[
    "i believe",
    "i think",
    "i argue",
    "in my opinion",
    "should",
    "must",
    "therefore",
    "thus",
    "clearly",
];

/// Lexical cues signaling evidence is being offered.
pub const EVIDENCE_MARKERS: &[&str] = &[
    "for example",
    "for instance",
    "according to",
    "research shows",
    "studies show",
    "evidence",
    "data",
    "statistics",
];

/// Absolute marker-count shift treated as a structural change.
///
/// A delta of 1 is an incidental addition or removal; 2 or more means the
/// claim/evidence skeleton of the essay moved.
pub const STRUCTURE_SHIFT_THRESHOLD: u32 = 2;

/// Total occurrences of all markers in the text, summed across the list.
///
/// Occurrences are counted, not merely detected: three "for example"s
/// contribute 3. Multi-word markers match as token subsequences, so
/// overlapping occurrences of the same marker count independently.
pub fn count_markers(text: &str, markers: &[&str]) -> u32 {
    let tokens = tokenize(text);
    markers
        .iter()
        .map(|marker| count_occurrences(&tokens, &tokenize(marker)))
        .sum()
}

fn count_occurrences(tokens: &[String], pattern: &[String]) -> u32 {
    if pattern.is_empty() || pattern.len() > tokens.len() {
        return 0;
    }
    tokens
        .windows(pattern.len())
        .filter(|window| *window == pattern)
        .count() as u32
}

/// True when claim- or evidence-marker counts shifted by at least
/// [`STRUCTURE_SHIFT_THRESHOLD`] between two snapshots.
pub fn structure_changed(first_text: &str, final_text: &str) -> bool {
    let claim_delta = count_markers(first_text, CLAIM_MARKERS)
        .abs_diff(count_markers(final_text, CLAIM_MARKERS));
    let evidence_delta = count_markers(first_text, EVIDENCE_MARKERS)
        .abs_diff(count_markers(final_text, EVIDENCE_MARKERS));

    claim_delta >= STRUCTURE_SHIFT_THRESHOLD || evidence_delta >= STRUCTURE_SHIFT_THRESHOLD
}
