/// Event log source port (trait) for dependency injection.
///
/// Defines the contract for the append-only writing-event log that
/// infrastructure adapters must implement. Services depend on this trait,
/// not concrete implementations.
use crate::domain::models::WritingEvent;
use anyhow::Result;
use async_trait::async_trait;

/// Repository trait for the append-only session event log.
///
/// Implementations must return events in ascending timestamp order; the
/// analyzer assumes chronological order and does not re-sort. Retrieval
/// failures must surface as errors, never as an empty event list: a caller
/// has to be able to distinguish "empty session" from "store unreachable".
#[async_trait]
pub trait EventLogSource: Send + Sync {
    /// Appends one event to the log.
    ///
    /// # Errors
    /// Returns error if:
    /// - Event ID already exists
    /// - Storage operation fails
    async fn append(&self, event: WritingEvent) -> Result<()>;

    /// Retrieves the full ordered event log for one session.
    ///
    /// # Returns
    /// All events for the session in ascending timestamp order; an empty
    /// vector when the session has no events.
    ///
    /// # Errors
    /// Returns error if the storage operation fails.
    async fn session_events(&self, session_id: &str) -> Result<Vec<WritingEvent>>;

    /// Lists distinct session ids with their event counts, most recent first.
    ///
    /// # Errors
    /// Returns error if the storage operation fails.
    async fn list_sessions(&self, limit: usize) -> Result<Vec<(String, u64)>>;
}
