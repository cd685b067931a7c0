//! Project creation form lifecycle
//!
//! `Idle -> Submitting -> Idle`: success resets the draft, failure keeps it
//! so the user can retry. Preconditions run in order - draft validation, then
//! authentication - and both abort before any request is made. A submission
//! already in flight blocks further writes.

use studyhub_shared::{CurrentUser, Project, ProjectDraft};

use crate::api::{ApiError, ProjectsApi};

/// Local state of the creation form
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub submitting: bool,
}

impl ProjectForm {
    /// Validated draft, or `None` when either trimmed field is empty
    pub fn draft(&self) -> Option<ProjectDraft> {
        ProjectDraft::new(&self.title, &self.description).ok()
    }
}

/// Why a submission did not produce a project
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// A previous submission is still outstanding; nothing was sent
    #[error("a submission is already in progress")]
    InFlight,

    /// Empty title or description; nothing was sent
    #[error("Please enter a title and description")]
    MissingInfo,

    /// No authenticated user; nothing was sent
    #[error("You must be logged in to create a project")]
    NotAuthenticated,

    /// The backend rejected or failed the insert; the draft is preserved
    #[error("{0}")]
    Rejected(String),
}

impl SubmitError {
    /// Toast headline paired with the `Display` text as the body
    pub fn toast_title(&self) -> &'static str {
        match self {
            SubmitError::MissingInfo => "Missing info",
            SubmitError::NotAuthenticated => "Authentication error",
            SubmitError::InFlight | SubmitError::Rejected(_) => "Error",
        }
    }
}

/// Run one submission attempt against the backend
pub async fn submit_project<A: ProjectsApi>(
    api: &A,
    form: &ProjectForm,
    user: Option<&CurrentUser>,
) -> Result<Project, SubmitError> {
    if form.submitting {
        return Err(SubmitError::InFlight);
    }

    let draft = form.draft().ok_or(SubmitError::MissingInfo)?;
    let user = user.ok_or(SubmitError::NotAuthenticated)?;

    api.create_project(&draft, user.id).await.map_err(|error| {
        let message = match error {
            ApiError::Rejected(message) => message,
            other => other.to_string(),
        };
        SubmitError::Rejected(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockApi;
    use chrono::Utc;
    use futures::executor::block_on;
    use studyhub_shared::ProjectStatus;
    use uuid::Uuid;

    fn user() -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            name: "Dana Rivers".to_string(),
            email: "dana@example.edu".to_string(),
        }
    }

    fn form(title: &str, description: &str) -> ProjectForm {
        ProjectForm {
            title: title.to_string(),
            description: description.to_string(),
            submitting: false,
        }
    }

    fn project(title: &str, student_id: Uuid) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "desc".to_string(),
            status: ProjectStatus::Pending,
            student_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_title_aborts_before_any_request() {
        let api = MockApi::default();
        let user = user();

        let result = block_on(submit_project(&api, &form("", "x"), Some(&user)));

        assert_eq!(result.unwrap_err(), SubmitError::MissingInfo);
        assert_eq!(api.create_calls.get(), 0);
    }

    #[test]
    fn test_empty_description_aborts_before_any_request() {
        let api = MockApi::default();
        let user = user();

        let result = block_on(submit_project(&api, &form("x", "   "), Some(&user)));

        assert_eq!(result.unwrap_err(), SubmitError::MissingInfo);
        assert_eq!(api.create_calls.get(), 0);
    }

    #[test]
    fn test_missing_user_aborts_before_any_request() {
        let api = MockApi::default();

        let result = block_on(submit_project(&api, &form("Title", "Description"), None));

        assert_eq!(result.unwrap_err(), SubmitError::NotAuthenticated);
        assert_eq!(api.create_calls.get(), 0);
    }

    #[test]
    fn test_validation_runs_before_the_auth_check() {
        let api = MockApi::default();

        // Both preconditions fail; the missing-info one must win.
        let result = block_on(submit_project(&api, &form("", ""), None));

        assert_eq!(result.unwrap_err(), SubmitError::MissingInfo);
    }

    #[test]
    fn test_successful_submit_sends_trimmed_draft_with_owner() {
        let user = user();
        let api = MockApi::with_create(Ok(project("Solar Tracker", user.id)));

        let result = block_on(submit_project(
            &api,
            &form("  Solar Tracker ", " Dual-axis rig "),
            Some(&user),
        ));

        assert!(result.is_ok());
        assert_eq!(api.create_calls.get(), 1);

        let sent = api.created_with.borrow();
        let (draft, student_id) = &sent[0];
        assert_eq!(draft.title, "Solar Tracker");
        assert_eq!(draft.description, "Dual-axis rig");
        assert_eq!(*student_id, user.id);
    }

    #[test]
    fn test_backend_rejection_surfaces_its_message() {
        let user = user();
        let api = MockApi::with_create(Err(ApiError::Rejected("duplicate title".to_string())));

        let result = block_on(submit_project(&api, &form("Title", "Description"), Some(&user)));

        assert_eq!(
            result.unwrap_err(),
            SubmitError::Rejected("duplicate title".to_string())
        );
        assert_eq!(api.create_calls.get(), 1);
    }

    #[test]
    fn test_transport_failure_surfaces_as_rejection_text() {
        let user = user();
        let api = MockApi::with_create(Err(ApiError::RequestFailed("connection reset".to_string())));

        let result = block_on(submit_project(&api, &form("Title", "Description"), Some(&user)));

        match result.unwrap_err() {
            SubmitError::Rejected(message) => assert!(message.contains("connection reset")),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_toast_copy_is_defined_once() {
        // Precondition toasts and the error messages themselves come from
        // the same variants, so the dialog never duplicates the copy.
        let missing = SubmitError::MissingInfo;
        assert_eq!(missing.toast_title(), "Missing info");
        assert_eq!(missing.to_string(), "Please enter a title and description");

        let unauthenticated = SubmitError::NotAuthenticated;
        assert_eq!(unauthenticated.toast_title(), "Authentication error");
        assert_eq!(
            unauthenticated.to_string(),
            "You must be logged in to create a project"
        );

        let rejected = SubmitError::Rejected("duplicate title".to_string());
        assert_eq!(rejected.toast_title(), "Error");
        assert_eq!(rejected.to_string(), "duplicate title");
    }

    #[test]
    fn test_in_flight_submission_blocks_a_second_write() {
        let user = user();
        let api = MockApi::with_create(Ok(project("Title", user.id)));
        let mut form = form("Title", "Description");
        form.submitting = true;

        let result = block_on(submit_project(&api, &form, Some(&user)));

        assert_eq!(result.unwrap_err(), SubmitError::InFlight);
        assert_eq!(api.create_calls.get(), 0);
    }
}
