//! HTTP implementation of the backend boundary
//!
//! Talks to the StudyHub REST API under `/api/v1`, attaching the stored
//! session token when present. Reads and writes use in-band error envelopes;
//! a returned error is treated as authoritative even when the transport
//! succeeded (see [`studyhub_shared::messages`]).

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use uuid::Uuid;

use studyhub_shared::{
    CreateProjectRequest, CreateProjectResponse, CurrentUser, Feedback, FeedbackResponse, Project,
    ProjectDraft,
};

use super::{ApiError, ProjectsApi};

/// HTTP client for the StudyHub backend
#[derive(Debug, Clone)]
pub struct HttpApi {
    /// API base URL (same origin in production)
    base_url: String,

    /// Bearer token for the current session, when one is stored
    token: Option<String>,
}

impl HttpApi {
    /// Create a new client
    pub fn new(url: &str) -> Self {
        // Normalize URL (remove trailing slash)
        let base_url = url.trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
        }
    }

    /// Attach a session token to every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Resolve the current session, if any
    ///
    /// Returns `Ok(None)` when the backend reports no valid session, so the
    /// caller can distinguish "signed out" from a failed request.
    pub async fn current_user(&self) -> Result<Option<CurrentUser>, ApiError> {
        let response = self
            .authorize(Request::get(&self.url("/me")))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if response.status() == 401 {
            return Ok(None);
        }

        if !response.ok() {
            return Err(ApiError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let user = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        Ok(Some(user))
    }
}

#[async_trait(?Send)]
impl ProjectsApi for HttpApi {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = self
            .authorize(Request::get(&self.url("/projects")))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn project(&self, project_id: &str) -> Result<Project, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(&format!("/projects/{}", project_id))))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn project_feedback(&self, project_id: &str) -> Result<Vec<Feedback>, ApiError> {
        let response = self
            .authorize(Request::get(
                &self.url(&format!("/projects/{}/feedback", project_id)),
            ))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let envelope: FeedbackResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        envelope.into_result().map_err(ApiError::Rejected)
    }

    async fn create_project(
        &self,
        draft: &ProjectDraft,
        student_id: Uuid,
    ) -> Result<Project, ApiError> {
        let body = CreateProjectRequest::new(draft, student_id);

        let response = self
            .authorize(Request::post(&self.url("/projects")))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if response.ok() {
            let envelope: CreateProjectResponse = response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
            return envelope.into_result().map_err(ApiError::Rejected);
        }

        // Rejections ride in the same envelope on error statuses
        match response.json::<CreateProjectResponse>().await {
            Ok(envelope) => envelope.into_result().map_err(ApiError::Rejected),
            Err(_) => Err(ApiError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))),
        }
    }
}
