//! Event CLI commands: record single events, inspect a session's log, and
//! import externally captured logs.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};

use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{EventKind, WritingEvent};
use crate::domain::ports::EventLogSource;

use super::open_event_log;

#[derive(Args, Debug)]
pub struct EventArgs {
    #[command(subcommand)]
    pub command: EventCommands,
}

#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// Record one event in a session's log
    Record {
        /// Session identifier
        #[arg(short, long)]
        session: String,

        /// Event type (initial_draft, edit, feedback_level_1..3,
        /// analyze_clicked, final_submission)
        #[arg(short, long)]
        kind: String,

        /// Essay snapshot text (for draft/edit/submission events)
        #[arg(short, long)]
        text: Option<String>,

        /// Read the essay snapshot from a file instead
        #[arg(long, conflicts_with = "text")]
        text_file: Option<String>,

        /// Event timestamp (RFC 3339); defaults to now
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },

    /// List a session's events in chronological order
    List {
        /// Session identifier
        #[arg(short, long)]
        session: String,

        /// Maximum number of events to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Import a JSON array of events (e.g. exported by the editor backend)
    Import {
        /// Path to the JSON file
        file: String,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct RecordOutput {
    pub event_id: String,
    pub session_id: String,
    pub kind: String,
}

impl CommandOutput for RecordOutput {
    fn to_human(&self) -> String {
        format!(
            "Recorded {} event {} in session {}",
            self.kind, self.event_id, self.session_id
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct EventListOutput {
    pub session_id: String,
    pub events: Vec<EventRowOutput>,
}

#[derive(Debug, serde::Serialize)]
pub struct EventRowOutput {
    pub id: String,
    pub timestamp: String,
    pub kind: String,
    pub snapshot_preview: Option<String>,
    pub feedback_level: Option<u8>,
}

impl CommandOutput for EventListOutput {
    fn to_human(&self) -> String {
        if self.events.is_empty() {
            return format!("No events recorded for session {}", self.session_id);
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["TIMESTAMP", "KIND", "LEVEL", "SNAPSHOT"]);
        for event in &self.events {
            table.add_row(vec![
                event.timestamp.clone(),
                event.kind.clone(),
                event
                    .feedback_level
                    .map(|l| l.to_string())
                    .unwrap_or_default(),
                event.snapshot_preview.clone().unwrap_or_default(),
            ]);
        }
        format!(
            "Session {} ({} events)\n{table}",
            self.session_id,
            self.events.len()
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ImportOutput {
    pub imported: usize,
}

impl CommandOutput for ImportOutput {
    fn to_human(&self) -> String {
        format!("Imported {} event(s)", self.imported)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: EventArgs, json_mode: bool) -> Result<()> {
    match args.command {
        EventCommands::Record {
            session,
            kind,
            text,
            text_file,
            at,
        } => record(session, &kind, text, text_file, at, json_mode).await,
        EventCommands::List { session, limit } => list(&session, limit, json_mode).await,
        EventCommands::Import { file } => import(&file, json_mode).await,
    }
}

async fn record(
    session: String,
    kind: &str,
    text: Option<String>,
    text_file: Option<String>,
    at: Option<DateTime<Utc>>,
    json_mode: bool,
) -> Result<()> {
    let kind = match EventKind::parse(kind) {
        EventKind::Unknown => return Err(anyhow!("Unrecognized event kind: {kind}")),
        known => known,
    };

    let text = match (text, text_file) {
        (Some(t), _) => Some(t),
        (None, Some(path)) => Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read essay text from {path}"))?,
        ),
        (None, None) => None,
    };

    let mut event =
        WritingEvent::new_with_uuid(session, at.unwrap_or_else(Utc::now), kind);
    if let Some(text) = text {
        event = event.with_essay_text(text);
    }

    let (_, log) = open_event_log().await?;
    let result = RecordOutput {
        event_id: event.id.clone(),
        session_id: event.session_id.clone(),
        kind: event.kind.as_str().to_string(),
    };
    log.append(event).await.context("Failed to record event")?;

    output(&result, json_mode);
    Ok(())
}

async fn list(session: &str, limit: usize, json_mode: bool) -> Result<()> {
    let (_, log) = open_event_log().await?;
    let events = log
        .session_events(session)
        .await
        .with_context(|| format!("Failed to retrieve event log for session {session}"))?;

    let rows = events
        .iter()
        .take(limit)
        .map(|e| EventRowOutput {
            id: e.id.clone(),
            timestamp: e.timestamp.to_rfc3339(),
            kind: e.kind.as_str().to_string(),
            snapshot_preview: e
                .essay_text
                .as_deref()
                .map(|t| truncate(&t.replace('\n', " "), 48)),
            feedback_level: e.feedback_level,
        })
        .collect();

    output(
        &EventListOutput {
            session_id: session.to_string(),
            events: rows,
        },
        json_mode,
    );
    Ok(())
}

async fn import(file: &str, json_mode: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {file}"))?;
    let events: Vec<WritingEvent> =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {file}"))?;

    let (_, log) = open_event_log().await?;
    let mut imported = 0usize;
    for event in events {
        log.append(event).await.context("Failed to import event")?;
        imported += 1;
    }

    output(&ImportOutput { imported }, json_mode);
    Ok(())
}
