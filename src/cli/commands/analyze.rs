//! `redraft analyze`: derive a session's revision-behavior metrics.

use anyhow::Result;
use std::sync::Arc;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::RevisionBehaviorData;
use crate::services::RevisionBehaviorService;

use super::open_event_log;

#[derive(Debug, serde::Serialize)]
pub struct AnalyzeOutput {
    pub session_id: String,
    #[serde(flatten)]
    pub data: RevisionBehaviorData,
}

impl CommandOutput for AnalyzeOutput {
    fn to_human(&self) -> String {
        let data = &self.data;
        let mut lines = vec![format!("Revision behavior for session {}:", self.session_id)];
        lines.push(format!(
            "  Edits after analyze:      {}",
            data.total_edits_after_analyze
        ));
        lines.push(format!(
            "  Feedback reveals:         L1={} L2={} L3={}",
            data.feedback_level_counts.level_1,
            data.feedback_level_counts.level_2,
            data.feedback_level_counts.level_3
        ));
        lines.push(format!(
            "  Revision window:          {} min",
            data.revision_window_minutes
        ));
        lines.push(format!(
            "  Thesis changed:           {}",
            if data.thesis_changed_significantly { "yes" } else { "no" }
        ));
        lines.push(format!(
            "  Claim/evidence changed:   {}",
            if data.claim_evidence_structure_changed { "yes" } else { "no" }
        ));
        lines.push(format!(
            "  Most revised sections:    {}",
            if data.most_revised_sections.is_empty() {
                "none".to_string()
            } else {
                data.most_revised_sections.join(", ")
            }
        ));
        lines.push(format!(
            "  Word count:               {} -> {} ({:+})",
            data.first_draft_word_count, data.final_draft_word_count, data.first_to_final_word_delta
        ));
        lines.push(format!(
            "  Events analyzed:          {}",
            data.total_logs_analyzed
        ));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(session_id: String, json_mode: bool) -> Result<()> {
    let (_, log) = open_event_log().await?;
    let service = RevisionBehaviorService::new(Arc::new(log));

    let data = service.analyze_session(&session_id).await?;

    output(&AnalyzeOutput { session_id, data }, json_mode);
    Ok(())
}
