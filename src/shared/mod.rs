//! Cross-cutting pieces shared by the whole crate.

pub mod config;

pub use config::AppConfig;
