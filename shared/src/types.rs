//! Domain types for the StudyHub platform
//!
//! These types model the core entities:
//! - Student projects and their review status
//! - Faculty feedback attached to a project
//! - The authenticated user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status of a student project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Submitted, awaiting faculty review
    Pending,
    /// Approved by faculty
    Approved,
    /// Rejected by faculty
    Rejected,
    /// Marked as completed
    Completed,
}

impl ProjectStatus {
    /// Human-readable label for badges and lists
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::Approved => "Approved",
            ProjectStatus::Rejected => "Rejected",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A student project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: Uuid,

    /// Project title
    pub title: String,

    /// Project description
    pub description: String,

    /// Current review status
    pub status: ProjectStatus,

    /// Identifier of the student who owns the project
    pub student_id: Uuid,

    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Faculty member attached to a feedback entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    /// Display name
    pub name: String,

    /// Optional avatar image URL
    pub avatar_url: Option<String>,
}

/// A faculty comment attached to a student project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Unique feedback identifier
    pub id: Uuid,

    /// Comment text
    pub comment: String,

    /// Submission time
    pub created_at: DateTime<Utc>,

    /// Submitting faculty member, when the join resolved
    pub faculty: Option<Faculty>,
}

/// The currently authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique user identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Account email
    pub email: String,
}

/// A not-yet-persisted project a student is composing
///
/// Construction trims surrounding whitespace and requires both fields to be
/// non-empty, so a `ProjectDraft` value is always submittable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    /// Project title
    pub title: String,

    /// Project description
    pub description: String,
}

/// Validation failure for a project draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("title and description are required")]
    MissingInfo,
}

impl ProjectDraft {
    /// Build a draft from raw input, trimming whitespace
    pub fn new(title: &str, description: &str) -> Result<Self, DraftError> {
        let title = title.trim();
        let description = description.trim();

        if title.is_empty() || description.is_empty() {
            return Err(DraftError::MissingInfo);
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}
