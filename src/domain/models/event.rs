/// Domain models for writing-session events.
///
/// A session is one continuous essay-writing/revision interaction. Every
/// tracked action (drafting, editing, revealing feedback, requesting
/// analysis, submitting) is captured as one immutable, timestamped event.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// The closed set of tracked actions within a writing session.
///
/// `Unknown` absorbs unrecognized wire values so deserialization of logs
/// written by newer clients never fails. Unknown events are excluded from
/// every typed count but still count toward `total_logs_analyzed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// First full draft snapshot of the essay
    InitialDraft,
    /// An edit with a full essay snapshot
    Edit,
    /// Student revealed level-1 (least specific) feedback
    #[serde(rename = "feedback_level_1")]
    FeedbackLevel1,
    /// Student revealed level-2 feedback
    #[serde(rename = "feedback_level_2")]
    FeedbackLevel2,
    /// Student revealed level-3 (most specific) feedback
    #[serde(rename = "feedback_level_3")]
    FeedbackLevel3,
    /// Student requested structural/lexical analysis (the revision boundary)
    AnalyzeClicked,
    /// Final essay submission with a full snapshot
    FinalSubmission,
    /// Any event type this version does not recognize
    #[serde(other)]
    Unknown,
}

impl EventKind {
    /// Feedback level carried by this kind, if it is a feedback reveal.
    pub fn feedback_level(self) -> Option<u8> {
        match self {
            Self::FeedbackLevel1 => Some(1),
            Self::FeedbackLevel2 => Some(2),
            Self::FeedbackLevel3 => Some(3),
            Self::InitialDraft
            | Self::Edit
            | Self::AnalyzeClicked
            | Self::FinalSubmission
            | Self::Unknown => None,
        }
    }

    /// Wire/database representation (snake_case, matching serde).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialDraft => "initial_draft",
            Self::Edit => "edit",
            Self::FeedbackLevel1 => "feedback_level_1",
            Self::FeedbackLevel2 => "feedback_level_2",
            Self::FeedbackLevel3 => "feedback_level_3",
            Self::AnalyzeClicked => "analyze_clicked",
            Self::FinalSubmission => "final_submission",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a wire/database value, mapping unrecognized values to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "initial_draft" => Self::InitialDraft,
            "edit" => Self::Edit,
            "feedback_level_1" => Self::FeedbackLevel1,
            "feedback_level_2" => Self::FeedbackLevel2,
            "feedback_level_3" => Self::FeedbackLevel3,
            "analyze_clicked" => Self::AnalyzeClicked,
            "final_submission" => Self::FinalSubmission,
            _ => Self::Unknown,
        }
    }
}

/// One immutable record of a tracked action during a writing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingEvent {
    /// Unique event identifier
    pub id: String,

    /// Groups events into one writing session
    pub session_id: String,

    /// ISO 8601 timestamp; non-decreasing per session by log-source contract
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub kind: EventKind,

    /// Full essay snapshot; present for draft/edit/submission events,
    /// absent for feedback reveals and analysis requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub essay_text: Option<String>,

    /// Feedback level 1-3, present only on feedback-reveal events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_level: Option<u8>,

    /// Opaque key-value metadata from the editor; never interpreted here
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl WritingEvent {
    /// Creates a new event with required fields.
    pub fn new(
        id: String,
        session_id: String,
        timestamp: DateTime<Utc>,
        kind: EventKind,
    ) -> Self {
        Self {
            id,
            session_id,
            timestamp,
            kind,
            essay_text: None,
            feedback_level: kind.feedback_level(),
            metadata: HashMap::new(),
        }
    }

    /// Creates a new event with a random UUID identifier.
    pub fn new_with_uuid(session_id: String, timestamp: DateTime<Utc>, kind: EventKind) -> Self {
        Self::new(Uuid::new_v4().to_string(), session_id, timestamp, kind)
    }

    /// Attaches a full essay snapshot.
    pub fn with_essay_text(mut self, text: impl Into<String>) -> Self {
        self.essay_text = Some(text.into());
        self
    }

    /// Attaches metadata.
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// The essay snapshot text, or `""` when absent.
    pub fn essay_text_or_empty(&self) -> &str {
        self.essay_text.as_deref().unwrap_or("")
    }

    /// True when this event carries a non-empty essay snapshot.
    pub fn has_snapshot(&self) -> bool {
        self.essay_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}
