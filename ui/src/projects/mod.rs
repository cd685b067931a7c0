//! Project lifecycle logic
//!
//! The state machines behind the feedback list and the creation form, kept
//! free of rendering concerns so they can be tested without a browser:
//!
//! - [`feedback`]: fetch lifecycle with staleness tracking
//! - [`form`]: draft validation and submission
//! - [`listing`]: project list fetch with the same staleness tracking

pub mod feedback;
pub mod form;
pub mod listing;

pub use feedback::{FeedbackPhase, FeedbackState};
pub use form::{submit_project, ProjectForm, SubmitError};
pub use listing::{ListingPhase, ListingState};
