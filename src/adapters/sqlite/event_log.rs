//! SQLite implementation of the EventLogSource trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::collections::HashMap;

use crate::domain::models::{EventKind, WritingEvent};
use crate::domain::ports::EventLogSource;

/// SQLite-backed append-only event log.
#[derive(Clone)]
pub struct SqliteEventLog {
    pool: SqlitePool,
}

impl SqliteEventLog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_event(row: EventRow) -> anyhow::Result<WritingEvent> {
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map_err(|e| anyhow::anyhow!("Invalid timestamp for event {}: {}", row.id, e))?
            .with_timezone(&Utc);

        let metadata: HashMap<String, serde_json::Value> = match row.metadata {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| anyhow::anyhow!("Invalid metadata for event {}: {}", row.id, e))?,
            None => HashMap::new(),
        };

        Ok(WritingEvent {
            id: row.id,
            session_id: row.session_id,
            timestamp,
            kind: EventKind::parse(&row.event_type),
            essay_text: row.essay_text,
            feedback_level: row.feedback_level.map(|l| l as u8),
            metadata,
        })
    }
}

#[async_trait]
impl EventLogSource for SqliteEventLog {
    async fn append(&self, event: WritingEvent) -> anyhow::Result<()> {
        let metadata_json = if event.metadata.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&event.metadata)?)
        };

        sqlx::query(
            r#"
            INSERT INTO writing_events (id, session_id, timestamp, event_type, essay_text, feedback_level, metadata)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.id)
        .bind(&event.session_id)
        .bind(event.timestamp.to_rfc3339())
        .bind(event.kind.as_str())
        .bind(&event.essay_text)
        .bind(event.feedback_level.map(i64::from))
        .bind(metadata_json)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn session_events(&self, session_id: &str) -> anyhow::Result<Vec<WritingEvent>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, session_id, timestamp, event_type, essay_text, feedback_level, metadata
            FROM writing_events
            WHERE session_id = ?
            ORDER BY timestamp ASC, id ASC
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        let mut events = Vec::with_capacity(rows.len());
        for row in rows {
            events.push(Self::row_to_event(row)?);
        }
        Ok(events)
    }

    async fn list_sessions(&self, limit: usize) -> anyhow::Result<Vec<(String, u64)>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT session_id, COUNT(*) AS event_count
            FROM writing_events
            GROUP BY session_id
            ORDER BY MAX(timestamp) DESC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, count)| (id, count as u64))
            .collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: String,
    session_id: String,
    timestamp: String,
    event_type: String,
    essay_text: Option<String>,
    feedback_level: Option<i64>,
    metadata: Option<String>,
}
