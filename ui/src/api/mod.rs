//! Backend API boundary
//!
//! The backend is an opaque request/response boundary to the rest of the UI.
//! [`ProjectsApi`] is the narrow interface the lifecycle logic is written
//! against; [`HttpApi`] is the production implementation. Tests substitute a
//! mock so no network or browser runtime is needed.

mod http;

pub use http::HttpApi;

use async_trait::async_trait;
use leptos::expect_context;
use uuid::Uuid;

use studyhub_shared::{Feedback, Project, ProjectDraft};

/// Error types for backend requests
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Error reported in-band by the backend; the message is shown verbatim
    #[error("{0}")]
    Rejected(String),
}

/// Client interface for the StudyHub backend
#[async_trait(?Send)]
pub trait ProjectsApi {
    /// List all projects visible to the current user
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    /// Fetch a single project
    async fn project(&self, project_id: &str) -> Result<Project, ApiError>;

    /// Fetch feedback for a project, in backend order
    async fn project_feedback(&self, project_id: &str) -> Result<Vec<Feedback>, ApiError>;

    /// Insert a new project owned by `student_id`
    async fn create_project(
        &self,
        draft: &ProjectDraft,
        student_id: Uuid,
    ) -> Result<Project, ApiError>;
}

/// Get the API client provided by the app root
pub fn use_api() -> HttpApi {
    expect_context::<HttpApi>()
}
