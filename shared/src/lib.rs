//! Shared types for the StudyHub UI and backend
//!
//! This crate contains common types used across the StudyHub platform:
//! - Domain types (projects, feedback, users)
//! - API request/response envelopes

pub mod messages;
pub mod types;

pub use messages::*;
pub use types::*;
