//! Project list fetch lifecycle
//!
//! Same shape as the feedback lifecycle: one numbered activation per fetch,
//! so a creation-triggered refresh racing the initial load can never be
//! overwritten by the slower, older response.

use studyhub_shared::Project;

use crate::api::ApiError;

/// Rendering phase of the project list
#[derive(Debug, Clone, PartialEq)]
pub enum ListingPhase {
    /// Read request in flight
    Loading,
    /// Read completed
    Loaded(Vec<Project>),
    /// Read failed; holds the message to render
    Failed(String),
}

/// Fetch state for the project list
#[derive(Debug, Clone)]
pub struct ListingState {
    phase: ListingPhase,
    generation: u64,
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            phase: ListingPhase::Loading,
            generation: 0,
        }
    }

    pub fn phase(&self) -> &ListingPhase {
        &self.phase
    }

    /// Start a new fetch, invalidating any in-flight request
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = ListingPhase::Loading;
        self.generation
    }

    /// Apply a completed read
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn finish(&mut self, ticket: u64, outcome: Result<Vec<Project>, ApiError>) -> bool {
        if ticket != self.generation {
            return false;
        }

        self.phase = match outcome {
            Ok(projects) => ListingPhase::Loaded(projects),
            Err(error) => ListingPhase::Failed(error.to_string()),
        };
        true
    }
}

impl Default for ListingState {
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
    use studyhub_shared::ProjectStatus;
    use uuid::Uuid;

    fn project(title: &str) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "desc".to_string(),
            status: ProjectStatus::Pending,
            student_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn titles(phase: &ListingPhase) -> Vec<&str> {
        match phase {
            ListingPhase::Loaded(projects) => {
                projects.iter().map(|p| p.title.as_str()).collect()
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn test_refresh_racing_initial_load_keeps_the_newer_response() {
        let mut state = ListingState::new();

        // Initial load is still in flight when a creation triggers a refresh.
        let initial_ticket = state.begin();
        let refresh_ticket = state.begin();

        // The refresh response lands first and sticks.
        assert!(state.finish(refresh_ticket, Ok(vec![project("old"), project("new")])));
        assert_eq!(titles(state.phase()), vec!["old", "new"]);

        // The slower initial response is dropped.
        assert!(!state.finish(initial_ticket, Ok(vec![project("old")])));
        assert_eq!(titles(state.phase()), vec!["old", "new"]);
    }

    #[test]
    fn test_each_refresh_issues_a_new_read() {
        let api = MockApi::default();
        api.list_responses
            .borrow_mut()
            .push_back(Ok(vec![project("first")]));
        api.list_responses
            .borrow_mut()
            .push_back(Ok(vec![project("first"), project("second")]));

        let mut state = ListingState::new();
        for _ in 0..2 {
            let ticket = state.begin();
            let outcome = block_on(api.list_projects());
            state.finish(ticket, outcome);
        }

        assert_eq!(api.list_calls.get(), 2);
        assert_eq!(titles(state.phase()), vec!["first", "second"]);
    }

    #[test]
    fn test_refresh_clears_a_previous_failure() {
        let api = MockApi::default();
        api.list_responses
            .borrow_mut()
            .push_back(Err(ApiError::RequestFailed("timeout".to_string())));
        api.list_responses.borrow_mut().push_back(Ok(vec![]));

        let mut state = ListingState::new();
        for _ in 0..2 {
            let ticket = state.begin();
            let outcome = block_on(api.list_projects());
            state.finish(ticket, outcome);
        }

        assert_eq!(*state.phase(), ListingPhase::Loaded(vec![]));
    }
}
