//! `redraft sessions`: list known sessions with event counts.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Table};
use std::sync::Arc;

use crate::cli::output::{output, CommandOutput};
use crate::services::RevisionBehaviorService;

use super::open_event_log;

#[derive(Debug, serde::Serialize)]
pub struct SessionListOutput {
    pub sessions: Vec<SessionRowOutput>,
}

#[derive(Debug, serde::Serialize)]
pub struct SessionRowOutput {
    pub session_id: String,
    pub event_count: u64,
}

impl CommandOutput for SessionListOutput {
    fn to_human(&self) -> String {
        if self.sessions.is_empty() {
            return "No sessions recorded.".to_string();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["SESSION", "EVENTS"]);
        for session in &self.sessions {
            table.add_row(vec![
                session.session_id.clone(),
                session.event_count.to_string(),
            ]);
        }
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(limit: usize, json_mode: bool) -> Result<()> {
    let (_, log) = open_event_log().await?;
    let service = RevisionBehaviorService::new(Arc::new(log));

    let sessions = service
        .list_sessions(Some(limit))
        .await?
        .into_iter()
        .map(|(session_id, event_count)| SessionRowOutput {
            session_id,
            event_count,
        })
        .collect();

    output(&SessionListOutput { sessions }, json_mode);
    Ok(())
}
