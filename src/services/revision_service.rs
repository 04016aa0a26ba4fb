/// Revision-behavior service coordinating log retrieval with analysis.
///
/// This service is the single entry point for turning a session id into a
/// metrics record: it fetches the ordered event log through the injected
/// repository and runs the pure analyzer over it.
use crate::analysis::RevisionAnalyzer;
use crate::domain::errors::DomainError;
use crate::domain::models::RevisionBehaviorData;
use crate::domain::ports::EventLogSource;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::instrument;

/// Service for deriving revision-behavior metrics per session.
///
/// A retrieval failure propagates as an error; it is never collapsed into a
/// zeroed record, so callers can distinguish "store unreachable" from a
/// genuinely empty session (which analyzes cleanly to an all-zero record).
pub struct RevisionBehaviorService {
    /// Repository for the append-only event log
    log_source: Arc<dyn EventLogSource>,
    analyzer: RevisionAnalyzer,
}

impl RevisionBehaviorService {
    /// Creates a new service with the provided log source and a
    /// system-clock analyzer.
    pub fn new(log_source: Arc<dyn EventLogSource>) -> Self {
        Self::with_analyzer(log_source, RevisionAnalyzer::new())
    }

    /// Creates a new service with an explicit analyzer (tests inject a
    /// fixed-clock analyzer here).
    pub fn with_analyzer(log_source: Arc<dyn EventLogSource>, analyzer: RevisionAnalyzer) -> Self {
        Self {
            log_source,
            analyzer,
        }
    }

    /// Fetches the session's event log and derives its metrics record.
    ///
    /// # Errors
    /// Returns error if:
    /// - `session_id` is empty
    /// - Log retrieval fails
    #[instrument(skip(self), err)]
    pub async fn analyze_session(&self, session_id: &str) -> Result<RevisionBehaviorData> {
        if session_id.is_empty() {
            return Err(DomainError::ValidationFailed("Session ID cannot be empty".to_string()).into());
        }

        let events = self
            .log_source
            .session_events(session_id)
            .await
            .map_err(|e| DomainError::LogRetrievalFailed {
                session_id: session_id.to_string(),
                reason: format!("{e:#}"),
            })?;

        Ok(self.analyzer.analyze(&events))
    }

    /// Lists known sessions with their event counts.
    ///
    /// # Errors
    /// Returns error if the repository operation fails.
    #[instrument(skip(self), err)]
    pub async fn list_sessions(&self, limit: Option<usize>) -> Result<Vec<(String, u64)>> {
        let limit = limit.unwrap_or(50).min(1000);

        self.log_source
            .list_sessions(limit)
            .await
            .context("Failed to list sessions")
    }
}
