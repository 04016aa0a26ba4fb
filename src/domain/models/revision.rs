/// Derived revision-behavior metrics for one writing session.
use serde::{Deserialize, Serialize};

/// Per-level counts of feedback reveals after the analysis boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackLevelCounts {
    pub level_1: u32,
    pub level_2: u32,
    pub level_3: u32,
}

impl FeedbackLevelCounts {
    /// Total reveals across all three levels.
    pub fn total(&self) -> u32 {
        self.level_1 + self.level_2 + self.level_3
    }
}

/// Quantitative summary of how a student revised their essay.
///
/// Every field is a deterministic pure function of the session's event list.
/// The single documented exception: when the session has no `analyze_clicked`
/// or no `final_submission` event, the analyzer's injected clock supplies the
/// missing boundary timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionBehaviorData {
    /// Edits performed at or after the analysis boundary
    pub total_edits_after_analyze: u32,

    /// Feedback reveals at or after the boundary, per level
    pub feedback_level_counts: FeedbackLevelCounts,

    /// Minutes between the analysis request and final submission,
    /// rounded to the nearest minute, floored at 0
    pub revision_window_minutes: i64,

    /// True when first-draft and final-draft thesis sentences diverge
    /// below the similarity threshold
    pub thesis_changed_significantly: bool,

    /// True when claim- or evidence-marker counts shifted materially
    /// between first draft and final submission
    pub claim_evidence_structure_changed: bool,

    /// Up to 3 section labels, most-revised first
    pub most_revised_sections: Vec<String>,

    /// Word count of the first draft snapshot
    pub first_draft_word_count: u32,

    /// Word count of the final submission snapshot
    pub final_draft_word_count: u32,

    /// final - first; negative when the essay shrank
    pub first_to_final_word_delta: i64,

    /// Events at or after the analysis boundary, regardless of kind
    pub total_logs_analyzed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let data = RevisionBehaviorData::default();
        assert_eq!(data.total_edits_after_analyze, 0);
        assert_eq!(data.feedback_level_counts.total(), 0);
        assert_eq!(data.revision_window_minutes, 0);
        assert!(!data.thesis_changed_significantly);
        assert!(!data.claim_evidence_structure_changed);
        assert!(data.most_revised_sections.is_empty());
        assert_eq!(data.first_to_final_word_delta, 0);
    }

    #[test]
    fn test_serializes_flat_json() {
        let data = RevisionBehaviorData {
            total_edits_after_analyze: 2,
            most_revised_sections: vec!["introduction".to_string()],
            first_to_final_word_delta: -4,
            ..Default::default()
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["total_edits_after_analyze"], 2);
        assert_eq!(value["feedback_level_counts"]["level_1"], 0);
        assert_eq!(value["most_revised_sections"][0], "introduction");
        assert_eq!(value["first_to_final_word_delta"], -4);
    }

    #[test]
    fn test_feedback_level_total() {
        let counts = FeedbackLevelCounts {
            level_1: 2,
            level_2: 1,
            level_3: 0,
        };
        assert_eq!(counts.total(), 3);
    }
}
