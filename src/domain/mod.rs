//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod eligibility;
pub mod entities;
pub mod errors;
pub mod matcher;

pub use eligibility::is_eligible;
pub use entities::{ActorIdentity, Post, ReactionOutcome, TargetPattern};
pub use errors::DomainError;
