//! The revision-behavior aggregator: one ordered event log in, one
//! [`RevisionBehaviorData`] record out.
//!
//! The computation is a pure, synchronous, single-pass fold over an
//! in-memory event list and is safe to run concurrently for different
//! sessions. The only impurity is the injected clock, consulted solely when
//! a session lacks an `analyze_clicked` or `final_submission` event.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::models::{EventKind, FeedbackLevelCounts, RevisionBehaviorData, WritingEvent};
use crate::domain::ports::{Clock, SystemClock};

use super::markers::structure_changed;
use super::section_diff::most_revised_sections;
use super::similarity::thesis_changed;
use super::tokenize::{first_sentence, word_count};

/// Derives revision-behavior metrics from a session's ordered event log.
///
/// The event list must be in ascending timestamp order (log-source
/// contract); the analyzer does not re-sort. It never fails: missing
/// boundary events, missing snapshots, unrecognized event kinds, and empty
/// logs all produce a well-defined record.
#[derive(Clone)]
pub struct RevisionAnalyzer {
    clock: Arc<dyn Clock>,
}

impl Default for RevisionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RevisionAnalyzer {
    /// Creates an analyzer backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an analyzer with an injected clock. Tests pass a fixed clock
    /// to keep the missing-boundary fallback deterministic.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Computes the full metrics record for one session.
    pub fn analyze(&self, events: &[WritingEvent]) -> RevisionBehaviorData {
        let boundary_ts = events
            .iter()
            .find(|e| e.kind == EventKind::AnalyzeClicked)
            .map_or_else(|| self.clock.now(), |e| e.timestamp);

        let final_submission = events
            .iter()
            .rev()
            .find(|e| e.kind == EventKind::FinalSubmission);
        let final_ts = final_submission.map_or_else(|| self.clock.now(), |e| e.timestamp);

        let first_draft_text = events
            .iter()
            .find(|e| e.kind == EventKind::InitialDraft)
            .map_or("", WritingEvent::essay_text_or_empty);
        let final_text = final_submission.map_or("", WritingEvent::essay_text_or_empty);

        // Inclusive: the triggering analyze_clicked event itself lands in
        // the post-boundary partition.
        let after_boundary: Vec<&WritingEvent> = events
            .iter()
            .filter(|e| e.timestamp >= boundary_ts)
            .collect();

        let mut total_edits_after_analyze = 0u32;
        let mut feedback_level_counts = FeedbackLevelCounts::default();
        for event in &after_boundary {
            match event.kind {
                EventKind::Edit => total_edits_after_analyze += 1,
                EventKind::FeedbackLevel1 => feedback_level_counts.level_1 += 1,
                EventKind::FeedbackLevel2 => feedback_level_counts.level_2 += 1,
                EventKind::FeedbackLevel3 => feedback_level_counts.level_3 += 1,
                EventKind::InitialDraft
                | EventKind::AnalyzeClicked
                | EventKind::FinalSubmission
                | EventKind::Unknown => {}
            }
        }

        // Feedback reveals carry no snapshot and are skipped without
        // breaking adjacency of the surrounding snapshots.
        let snapshots: Vec<&str> = after_boundary
            .iter()
            .filter(|e| e.has_snapshot())
            .map(|e| e.essay_text_or_empty())
            .collect();

        let first_draft_word_count = word_count(first_draft_text);
        let final_draft_word_count = word_count(final_text);

        RevisionBehaviorData {
            total_edits_after_analyze,
            feedback_level_counts,
            revision_window_minutes: revision_window_minutes(boundary_ts, final_ts),
            thesis_changed_significantly: thesis_changed(
                first_sentence(first_draft_text),
                first_sentence(final_text),
            ),
            claim_evidence_structure_changed: structure_changed(first_draft_text, final_text),
            most_revised_sections: most_revised_sections(&snapshots),
            first_draft_word_count,
            final_draft_word_count,
            first_to_final_word_delta: i64::from(final_draft_word_count)
                - i64::from(first_draft_word_count),
            total_logs_analyzed: after_boundary.len() as u32,
        }
    }
}

/// Elapsed minutes between boundary and final submission, rounded to the
/// nearest minute and floored at 0.
fn revision_window_minutes(boundary: DateTime<Utc>, final_ts: DateTime<Utc>) -> i64 {
    let elapsed_ms = (final_ts - boundary).num_milliseconds();
    let minutes = (elapsed_ms as f64 / 60_000.0).round() as i64;
    minutes.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::TimeZone;

    fn ts(minute: u32, second: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, minute, second).unwrap()
    }

    fn event(n: u32, minute: u32, kind: EventKind) -> WritingEvent {
        WritingEvent::new(format!("evt_{n:03}"), "session_1".to_string(), ts(minute, 0), kind)
    }

    fn fixed_analyzer() -> RevisionAnalyzer {
        RevisionAnalyzer::with_clock(Arc::new(FixedClock(ts(30, 0))))
    }

    #[test]
    fn test_empty_log_yields_zeroed_record() {
        let data = fixed_analyzer().analyze(&[]);
        assert_eq!(data, RevisionBehaviorData::default());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let events = vec![
            event(1, 0, EventKind::Edit),
            event(2, 5, EventKind::AnalyzeClicked),
            event(3, 5, EventKind::Edit),
            event(4, 6, EventKind::FinalSubmission),
        ];
        let data = fixed_analyzer().analyze(&events);

        // analyze_clicked, the simultaneous edit, and the submission.
        assert_eq!(data.total_logs_analyzed, 3);
        assert_eq!(data.total_edits_after_analyze, 1);
    }

    #[test]
    fn test_edits_before_boundary_not_counted() {
        let events = vec![
            event(1, 0, EventKind::Edit),
            event(2, 1, EventKind::Edit),
            event(3, 5, EventKind::AnalyzeClicked),
            event(4, 6, EventKind::Edit),
        ];
        let data = fixed_analyzer().analyze(&events);
        assert_eq!(data.total_edits_after_analyze, 1);
    }

    #[test]
    fn test_feedback_levels_counted_per_level() {
        let events = vec![
            event(1, 5, EventKind::AnalyzeClicked),
            event(2, 6, EventKind::FeedbackLevel1),
            event(3, 7, EventKind::FeedbackLevel1),
            event(4, 8, EventKind::FeedbackLevel3),
        ];
        let data = fixed_analyzer().analyze(&events);
        assert_eq!(data.feedback_level_counts.level_1, 2);
        assert_eq!(data.feedback_level_counts.level_2, 0);
        assert_eq!(data.feedback_level_counts.level_3, 1);
    }

    #[test]
    fn test_unknown_kinds_counted_only_in_total() {
        let events = vec![
            event(1, 5, EventKind::AnalyzeClicked),
            event(2, 6, EventKind::Unknown),
            event(3, 7, EventKind::Edit),
        ];
        let data = fixed_analyzer().analyze(&events);
        assert_eq!(data.total_logs_analyzed, 3);
        assert_eq!(data.total_edits_after_analyze, 1);
        assert_eq!(data.feedback_level_counts.total(), 0);
    }

    #[test]
    fn test_revision_window_rounds_to_nearest_minute() {
        let mut analyze = event(1, 5, EventKind::AnalyzeClicked);
        analyze.timestamp = ts(5, 0);
        let mut submit = event(2, 12, EventKind::FinalSubmission);
        submit.timestamp = ts(12, 40);

        let data = fixed_analyzer().analyze(&[analyze, submit]);
        // 7m40s rounds to 8.
        assert_eq!(data.revision_window_minutes, 8);
    }

    #[test]
    fn test_revision_window_floors_at_zero() {
        // Out-of-order timestamps violate the log contract; result is
        // best-effort but never negative.
        let events = vec![
            event(1, 10, EventKind::AnalyzeClicked),
            event(2, 2, EventKind::FinalSubmission),
        ];
        let data = fixed_analyzer().analyze(&events);
        assert_eq!(data.revision_window_minutes, 0);
    }

    #[test]
    fn test_missing_boundaries_fall_back_to_clock() {
        let clock_now = ts(30, 0);
        let analyzer = RevisionAnalyzer::with_clock(Arc::new(FixedClock(clock_now)));
        let events = vec![event(1, 0, EventKind::Edit), event(2, 1, EventKind::Edit)];

        let data = analyzer.analyze(&events);
        // Both boundary and final fall back to the same instant: window 0,
        // and no historical event is at or after it except none.
        assert_eq!(data.revision_window_minutes, 0);
        assert_eq!(data.total_logs_analyzed, 0);
        assert_eq!(data.total_edits_after_analyze, 0);
    }

    #[test]
    fn test_thesis_and_word_metrics_use_global_first_and_final() {
        let events = vec![
            event(1, 0, EventKind::InitialDraft).with_essay_text("Cats are great. They purr."),
            event(2, 5, EventKind::AnalyzeClicked),
            event(3, 8, EventKind::FinalSubmission)
                .with_essay_text("Dogs are loyal companions. They fetch and guard."),
        ];
        let data = fixed_analyzer().analyze(&events);

        assert_eq!(data.first_draft_word_count, 5);
        assert_eq!(data.final_draft_word_count, 8);
        assert_eq!(data.first_to_final_word_delta, 3);
        assert!(data.thesis_changed_significantly);
    }

    #[test]
    fn test_word_delta_negative_when_essay_shrank() {
        let events = vec![
            event(1, 0, EventKind::InitialDraft)
                .with_essay_text("One two three four five six seven."),
            event(2, 5, EventKind::AnalyzeClicked),
            event(3, 8, EventKind::FinalSubmission).with_essay_text("One two three."),
        ];
        let data = fixed_analyzer().analyze(&events);
        assert_eq!(data.first_to_final_word_delta, -4);
    }

    #[test]
    fn test_last_final_submission_wins() {
        let events = vec![
            event(1, 0, EventKind::InitialDraft).with_essay_text("Cats are great."),
            event(2, 5, EventKind::AnalyzeClicked),
            event(3, 6, EventKind::FinalSubmission).with_essay_text("Draft submission."),
            event(4, 9, EventKind::FinalSubmission).with_essay_text("Real final. It grew bigger."),
        ];
        let data = fixed_analyzer().analyze(&events);
        assert_eq!(data.final_draft_word_count, 5);
    }

    #[test]
    fn test_section_diff_skips_feedback_events() {
        let events = vec![
            event(1, 5, EventKind::AnalyzeClicked),
            event(2, 6, EventKind::Edit).with_essay_text("Intro.\n\nBody text here."),
            event(3, 7, EventKind::FeedbackLevel2),
            event(4, 8, EventKind::FinalSubmission)
                .with_essay_text("Intro.\n\nBody text rewritten with new words."),
        ];
        let data = fixed_analyzer().analyze(&events);
        // Only the body changed between the two snapshots; the feedback
        // event in between did not break adjacency.
        assert_eq!(data.most_revised_sections, vec!["conclusion".to_string()]);
    }

    #[test]
    fn test_determinism_with_fixed_clock() {
        let events = vec![
            event(1, 0, EventKind::InitialDraft).with_essay_text("Cats are great."),
            event(2, 5, EventKind::AnalyzeClicked),
            event(3, 8, EventKind::FinalSubmission).with_essay_text("Cats are wonderful."),
        ];
        let analyzer = fixed_analyzer();
        assert_eq!(analyzer.analyze(&events), analyzer.analyze(&events));
    }
}
