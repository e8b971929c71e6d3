//! Application use cases. Orchestrate domain logic via ports.

pub mod detector;
pub mod reaction_service;

pub use detector::PhraseDetector;
pub use reaction_service::ReactionService;
