//! End-to-end revision-analysis scenarios over realistic session logs.

use chrono::{DateTime, TimeZone, Utc};
use redraft::{EventKind, FixedClock, RevisionAnalyzer, WritingEvent};
use std::sync::Arc;

fn ts(minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, minute, second).unwrap()
}

fn event(n: u32, at: DateTime<Utc>, kind: EventKind) -> WritingEvent {
    WritingEvent::new(format!("evt_{n:03}"), "session_1".to_string(), at, kind)
}

fn analyzer() -> RevisionAnalyzer {
    RevisionAnalyzer::with_clock(Arc::new(FixedClock(ts(59, 0))))
}

#[test]
fn scenario_full_session() {
    // initial_draft@t0, analyze@t1, edit@t2, feedback_1@t3, final@t4
    let events = vec![
        event(1, ts(0, 0), EventKind::InitialDraft).with_essay_text("Cats are great. They purr."),
        event(2, ts(10, 0), EventKind::AnalyzeClicked),
        event(3, ts(12, 0), EventKind::Edit).with_essay_text("Cats are great. They purr loudly."),
        event(4, ts(14, 0), EventKind::FeedbackLevel1),
        event(5, ts(17, 0), EventKind::FinalSubmission)
            .with_essay_text("Cats are wonderful pets. They purr loudly and knead blankets."),
    ];

    let data = analyzer().analyze(&events);

    assert_eq!(data.total_edits_after_analyze, 1);
    assert_eq!(data.feedback_level_counts.level_1, 1);
    assert_eq!(data.feedback_level_counts.level_2, 0);
    assert_eq!(data.feedback_level_counts.level_3, 0);
    // t4 - t1 = 7 minutes exactly.
    assert_eq!(data.revision_window_minutes, 7);
    assert_eq!(data.first_draft_word_count, 5);
    assert_eq!(data.final_draft_word_count, 10);
    assert_eq!(data.first_to_final_word_delta, 5);
    // analyze, edit, feedback, final.
    assert_eq!(data.total_logs_analyzed, 4);
}

#[test]
fn scenario_thesis_drift() {
    let events = vec![
        event(1, ts(0, 0), EventKind::InitialDraft).with_essay_text("Technology is good."),
        event(2, ts(5, 0), EventKind::AnalyzeClicked),
        event(3, ts(20, 0), EventKind::FinalSubmission).with_essay_text(
            "Although critics disagree, technology overwhelmingly benefits society.",
        ),
    ];

    let data = analyzer().analyze(&events);
    assert!(data.thesis_changed_significantly);
}

#[test]
fn scenario_no_thesis_drift() {
    let essay = "Technology is good. It helps people every day.";
    let events = vec![
        event(1, ts(0, 0), EventKind::InitialDraft).with_essay_text(essay),
        event(2, ts(5, 0), EventKind::AnalyzeClicked),
        event(3, ts(20, 0), EventKind::FinalSubmission).with_essay_text(essay),
    ];

    let data = analyzer().analyze(&events);
    assert!(!data.thesis_changed_significantly);
}

#[test]
fn scenario_missing_boundary_events() {
    // Only edits: no analyze_clicked, no final_submission.
    let events = vec![
        event(1, ts(0, 0), EventKind::Edit).with_essay_text("Draft one."),
        event(2, ts(3, 0), EventKind::Edit).with_essay_text("Draft two."),
    ];

    let data = analyzer().analyze(&events);
    assert!(data.revision_window_minutes >= 0);
    assert_eq!(data.total_edits_after_analyze, 0);
}

#[test]
fn scenario_claim_evidence_structure_change() {
    let events = vec![
        event(1, ts(0, 0), EventKind::InitialDraft)
            .with_essay_text("School uniforms are common. Many schools use them."),
        event(2, ts(5, 0), EventKind::AnalyzeClicked),
        event(3, ts(25, 0), EventKind::FinalSubmission).with_essay_text(
            "Schools should adopt uniforms. Uniforms must reduce distraction. \
             For example, studies show focus improves. According to teachers, mornings get easier.",
        ),
    ];

    let data = analyzer().analyze(&events);
    assert!(data.claim_evidence_structure_changed);
}

#[test]
fn scenario_most_revised_sections_across_edits() {
    let draft_a = "Intro about cats.\n\nBody about purring.\n\nConclusion here.";
    let draft_b = "Intro about cats.\n\nBody about purring rewritten with many fresh words now.\n\nConclusion here.";
    let draft_c = "Intro about cats, lightly touched.\n\nBody about purring rewritten with many fresh words now.\n\nConclusion here.";

    let events = vec![
        event(1, ts(0, 0), EventKind::InitialDraft).with_essay_text(draft_a),
        event(2, ts(5, 0), EventKind::AnalyzeClicked),
        event(3, ts(6, 0), EventKind::Edit).with_essay_text(draft_a),
        event(4, ts(8, 0), EventKind::FeedbackLevel2),
        event(5, ts(10, 0), EventKind::Edit).with_essay_text(draft_b),
        event(6, ts(15, 0), EventKind::FinalSubmission).with_essay_text(draft_c),
    ];

    let data = analyzer().analyze(&events);
    assert_eq!(data.most_revised_sections[0], "body_paragraph_1");
    assert!(data.most_revised_sections.contains(&"introduction".to_string()));
    assert_eq!(data.feedback_level_counts.level_2, 1);
}

#[test]
fn scenario_empty_log_is_total() {
    let data = analyzer().analyze(&[]);
    assert_eq!(data.total_logs_analyzed, 0);
    assert_eq!(data.total_edits_after_analyze, 0);
    assert_eq!(data.first_draft_word_count, 0);
    assert_eq!(data.final_draft_word_count, 0);
    assert!(data.most_revised_sections.is_empty());
}

#[test]
fn scenario_repeated_analysis_is_byte_identical() {
    let events = vec![
        event(1, ts(0, 0), EventKind::InitialDraft).with_essay_text("Cats are great. They purr."),
        event(2, ts(10, 0), EventKind::AnalyzeClicked),
        event(3, ts(17, 0), EventKind::FinalSubmission)
            .with_essay_text("Cats are wonderful pets. They purr loudly."),
    ];

    let analyzer = analyzer();
    let first = serde_json::to_vec(&analyzer.analyze(&events)).unwrap();
    let second = serde_json::to_vec(&analyzer.analyze(&events)).unwrap();
    assert_eq!(first, second);
}
