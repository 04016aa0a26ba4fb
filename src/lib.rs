//! Redraft - Revision-Behavior Analytics
//!
//! Redraft ingests the time-ordered event log of a student's essay-writing
//! session (drafts, edits, feedback reveals, analysis request, final
//! submission) and derives deterministic metrics about how the student
//! revised: edit volume, feedback-escalation usage, thesis drift,
//! claim/evidence structural change, and the most-revised sections.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, ports, and errors
//! - **Analysis Layer** (`analysis`): Pure, deterministic revision metrics
//! - **Service Layer** (`services`): Coordination between log retrieval and analysis
//! - **Adapters** (`adapters`): SQLite event-log storage
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use redraft::domain::ports::EventLogSource;
//! use redraft::services::RevisionBehaviorService;
//!
//! async fn example(log: Arc<dyn EventLogSource>) -> anyhow::Result<()> {
//!     let service = RevisionBehaviorService::new(log);
//!     let metrics = service.analyze_session("session_123").await?;
//!     println!("{} edits after analyze", metrics.total_edits_after_analyze);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod analysis;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use analysis::RevisionAnalyzer;
pub use domain::models::{
    Config, EventKind, FeedbackLevelCounts, RevisionBehaviorData, WritingEvent,
};
pub use domain::ports::{Clock, EventLogSource, FixedClock, SystemClock};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::RevisionBehaviorService;
