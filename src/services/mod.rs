pub mod revision_service;

pub use revision_service::RevisionBehaviorService;
