//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interfaces that infrastructure adapters must
//! implement:
//! - EventLogSource: read/append access to the per-session event log
//! - Clock: current-time provider, injected so analysis stays deterministic
//!
//! These traits define the contracts that allow the domain to be independent
//! of specific infrastructure implementations.

pub mod clock;
pub mod event_log;

pub use clock::{Clock, FixedClock, SystemClock};
pub use event_log::EventLogSource;
