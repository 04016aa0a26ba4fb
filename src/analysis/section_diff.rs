//! Section-level change scoring between two essay snapshots.
//!
//! Sections are blank-line-delimited blocks aligned positionally by index.
//! No semantic realignment is attempted: an inserted paragraph shifts every
//! following section and the magnitude lands where the indices collide. That
//! trade-off is intentional; see `RevisionAnalyzer` for how magnitudes are
//! accumulated across a session.

use std::collections::HashSet;

use super::tokenize::tokenize;

/// How many section labels `most_revised_sections` reports.
pub const TOP_SECTIONS: usize = 3;

/// One changed section in a snapshot comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionChange {
    pub label: String,
    pub magnitude: u64,
}

/// Splits a document into trimmed sections on blank-line boundaries.
///
/// One or more blank lines separate sections; leading/trailing blank lines
/// produce no empty sections.
pub fn split_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                sections.push(current.trim().to_string());
            }
            current.clear();
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.trim().is_empty() {
        sections.push(current.trim().to_string());
    }

    sections
}

/// Change magnitude between two aligned sections: absolute token-count
/// difference plus the size of the symmetric vocabulary difference.
pub fn section_change_magnitude(before: &str, after: &str) -> u64 {
    let tokens_before = tokenize(before);
    let tokens_after = tokenize(after);

    let count_delta = tokens_before.len().abs_diff(tokens_after.len()) as u64;

    let vocab_before: HashSet<&str> = tokens_before.iter().map(String::as_str).collect();
    let vocab_after: HashSet<&str> = tokens_after.iter().map(String::as_str).collect();
    let vocab_delta = vocab_before.symmetric_difference(&vocab_after).count() as u64;

    count_delta + vocab_delta
}

/// Scores every aligned section index between two snapshots.
///
/// Snapshots with different section counts are aligned against empty
/// strings on the shorter side. Labels are computed per comparison from the
/// larger section count: index 0 is `introduction`, the last index is
/// `conclusion`, everything else `body_paragraph_{index}`. Sections with
/// zero magnitude are omitted.
pub fn diff_snapshots(before: &str, after: &str) -> Vec<SectionChange> {
    let sections_before = split_sections(before);
    let sections_after = split_sections(after);
    let total = sections_before.len().max(sections_after.len());

    let mut changes = Vec::new();
    for index in 0..total {
        let section_before = sections_before.get(index).map_or("", String::as_str);
        let section_after = sections_after.get(index).map_or("", String::as_str);

        let magnitude = section_change_magnitude(section_before, section_after);
        if magnitude > 0 {
            changes.push(SectionChange {
                label: label_for_index(index, total),
                magnitude,
            });
        }
    }
    changes
}

fn label_for_index(index: usize, total: usize) -> String {
    if index == 0 {
        "introduction".to_string()
    } else if index + 1 == total {
        "conclusion".to_string()
    } else {
        format!("body_paragraph_{index}")
    }
}

/// Accumulates change magnitude per label across consecutive snapshot pairs
/// and reports the top labels by total magnitude.
///
/// Ties keep encounter order (stable sort), so the earliest-touched section
/// wins a tie.
pub fn most_revised_sections(snapshots: &[&str]) -> Vec<String> {
    let mut totals: Vec<(String, u64)> = Vec::new();

    for pair in snapshots.windows(2) {
        for change in diff_snapshots(pair[0], pair[1]) {
            match totals.iter_mut().find(|(label, _)| *label == change.label) {
                Some((_, magnitude)) => *magnitude += change.magnitude,
                None => totals.push((change.label, change.magnitude)),
            }
        }
    }

    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
        .into_iter()
        .take(TOP_SECTIONS)
        .map(|(label, _)| label)
        .collect()
}
