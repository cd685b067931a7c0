//! Feedback fetch lifecycle
//!
//! One activation per project identifier: reset to `Loading`, issue a single
//! read, and land in exactly one of `Loaded` or `Failed`. Activations are
//! numbered; a response carrying a superseded ticket is discarded, so a slow
//! response for a previous project can never clobber the state of the one
//! currently shown. No automatic retries.

use studyhub_shared::Feedback;

use crate::api::ApiError;

/// Shown when the backend reports an error with no usable message
pub const LOAD_FALLBACK_MESSAGE: &str = "Failed to load feedback";

/// Rendering phase of the feedback list
#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackPhase {
    /// Read request in flight
    Loading,
    /// Read completed; items are in backend order
    Loaded(Vec<Feedback>),
    /// Read failed; holds the message to render
    Failed(String),
}

/// Fetch state for one feedback list
#[derive(Debug, Clone)]
pub struct FeedbackState {
    phase: FeedbackPhase,
    generation: u64,
}

impl FeedbackState {
    pub fn new() -> Self {
        Self {
            phase: FeedbackPhase::Loading,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &FeedbackPhase {
        &self.phase
    }

    /// Start a new activation, invalidating any in-flight request
    ///
    /// Returns the ticket the eventual completion must present to
    /// [`finish`](Self::finish).
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = FeedbackPhase::Loading;
        self.generation
    }

    /// Apply a completed read
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn finish(&mut self, ticket: u64, outcome: Result<Vec<Feedback>, ApiError>) -> bool {
        if ticket != self.generation {
            return false;
        }

        self.phase = match outcome {
            Ok(items) => FeedbackPhase::Loaded(items),
            Err(error) => {
                let message = error.to_string();
                if message.trim().is_empty() {
                    FeedbackPhase::Failed(LOAD_FALLBACK_MESSAGE.to_string())
                } else {
                    FeedbackPhase::Failed(message)
                }
            }
        };
        true
    }
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockApi;
    use crate::api::ProjectsApi;
    use chrono::Utc;
    use futures::executor::block_on;
    use uuid::Uuid;

    fn feedback(comment: &str) -> Feedback {
        Feedback {
            id: Uuid::new_v4(),
            comment: comment.to_string(),
            created_at: Utc::now(),
            faculty: None,
        }
    }

    /// Drive one activation the way the component does: begin, one read,
    /// finish with the matching ticket.
    fn activate(state: &mut FeedbackState, api: &MockApi, project_id: &str) {
        let ticket = state.begin();
        let outcome = block_on(api.project_feedback(project_id));
        state.finish(ticket, outcome);
    }

    #[test]
    fn test_activation_issues_one_read_for_the_given_project() {
        let api = MockApi::with_feedback(Ok(vec![]));
        let mut state = FeedbackState::new();

        activate(&mut state, &api, "proj-1");

        assert_eq!(api.feedback_calls.get(), 1);
        assert_eq!(*api.feedback_requested.borrow(), vec!["proj-1".to_string()]);
    }

    #[test]
    fn test_success_preserves_backend_order() {
        let api = MockApi::with_feedback(Ok(vec![
            feedback("first"),
            feedback("second"),
            feedback("third"),
        ]));
        let mut state = FeedbackState::new();

        activate(&mut state, &api, "proj-1");

        match state.phase() {
            FeedbackPhase::Loaded(items) => {
                let comments: Vec<&str> = items.iter().map(|f| f.comment.as_str()).collect();
                assert_eq!(comments, vec!["first", "second", "third"]);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_result_is_loaded_not_failed() {
        let api = MockApi::with_feedback(Ok(vec![]));
        let mut state = FeedbackState::new();

        activate(&mut state, &api, "proj-1");

        assert_eq!(*state.phase(), FeedbackPhase::Loaded(vec![]));
    }

    #[test]
    fn test_failure_renders_error_text_and_no_items() {
        let api = MockApi::with_feedback(Err(ApiError::Rejected("permission denied".to_string())));
        let mut state = FeedbackState::new();

        activate(&mut state, &api, "proj-1");

        assert_eq!(
            *state.phase(),
            FeedbackPhase::Failed("permission denied".to_string())
        );
    }

    #[test]
    fn test_blank_error_message_falls_back() {
        let api = MockApi::with_feedback(Err(ApiError::Rejected("  ".to_string())));
        let mut state = FeedbackState::new();

        activate(&mut state, &api, "proj-1");

        assert_eq!(
            *state.phase(),
            FeedbackPhase::Failed(LOAD_FALLBACK_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_stale_response_is_discarded_after_id_change() {
        let mut state = FeedbackState::new();

        // First activation's request is still in flight...
        let stale_ticket = state.begin();
        // ...when the project id changes and a new activation starts.
        let current_ticket = state.begin();

        let applied = state.finish(stale_ticket, Ok(vec![feedback("stale")]));
        assert!(!applied);
        assert_eq!(*state.phase(), FeedbackPhase::Loading);

        let applied = state.finish(current_ticket, Ok(vec![feedback("current")]));
        assert!(applied);
        match state.phase() {
            FeedbackPhase::Loaded(items) => assert_eq!(items[0].comment, "current"),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_reactivation_clears_a_previous_failure() {
        let api = MockApi::default();
        api.feedback_responses
            .borrow_mut()
            .push_back(Err(ApiError::RequestFailed("timeout".to_string())));
        api.feedback_responses
            .borrow_mut()
            .push_back(Ok(vec![feedback("fresh")]));

        let mut state = FeedbackState::new();
        activate(&mut state, &api, "proj-1");
        assert!(matches!(state.phase(), FeedbackPhase::Failed(_)));

        activate(&mut state, &api, "proj-2");
        assert!(matches!(state.phase(), FeedbackPhase::Loaded(_)));
        assert_eq!(api.feedback_calls.get(), 2);
    }
}
