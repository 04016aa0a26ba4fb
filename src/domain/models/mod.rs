pub mod config;
pub mod event;
pub mod revision;

pub use config::{Config, DatabaseConfig, LoggingConfig};
pub use event::{EventKind, WritingEvent};
pub use revision::{FeedbackLevelCounts, RevisionBehaviorData};
