//! API message types for communication between the UI and backend
//!
//! The backend reports failures in-band: responses carry an `error` field
//! next to the payload instead of relying on transport status alone. The
//! `into_result` helpers apply the precedence rule used across the platform:
//! a present `error` value is authoritative, even when payload data is also
//! populated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Feedback, Project, ProjectDraft, ProjectStatus};

/// Response envelope for a project feedback read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    /// Feedback entries in backend order
    #[serde(default)]
    pub feedback: Vec<Feedback>,

    /// In-band error, set when the read failed
    #[serde(default)]
    pub error: Option<String>,
}

impl FeedbackResponse {
    /// Resolve the envelope; an error value wins over any payload
    pub fn into_result(self) -> Result<Vec<Feedback>, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.feedback),
        }
    }
}

/// Request body for creating a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub student_id: Uuid,
}

impl CreateProjectRequest {
    /// New projects always start in review
    pub fn new(draft: &ProjectDraft, student_id: Uuid) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: ProjectStatus::Pending,
            student_id,
        }
    }
}

/// Response envelope for a project insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectResponse {
    /// The persisted project, on success
    #[serde(default)]
    pub data: Option<Project>,

    /// In-band error, set when the insert failed
    #[serde(default)]
    pub error: Option<String>,
}

impl CreateProjectResponse {
    /// Resolve the envelope; an error value wins over any payload
    pub fn into_result(self) -> Result<Project, String> {
        match self.error {
            Some(error) => Err(error),
            None => self.data.ok_or_else(|| "No data in response".to_string()),
        }
    }
}
