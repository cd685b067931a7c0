//! Feedback list component
//!
//! Renders the feedback attached to one project. Re-activates whenever the
//! project identifier changes; the lifecycle itself lives in
//! [`crate::projects::feedback`].

use leptos::*;

use studyhub_shared::Feedback;

use crate::api::{use_api, ProjectsApi};
use crate::components::dashboard::{EmptyState, EmptyStateIcon};
use crate::projects::{FeedbackPhase, FeedbackState};
use crate::time::relative_from_now;

/// Feedback list for the given project
#[component]
pub fn FeedbackList(#[prop(into)] project_id: Signal<String>) -> impl IntoView {
    let api = use_api();
    let state = create_rw_signal(FeedbackState::new());

    // One activation per project id: reset to Loading and issue a single
    // read. A response carrying a stale ticket is dropped in finish();
    // try_update additionally covers a response landing after teardown.
    create_effect(move |_| {
        let pid = project_id.get();
        let mut ticket = 0;
        state.update(|s| ticket = s.begin());

        let api = api.clone();
        spawn_local(async move {
            let outcome = api.project_feedback(&pid).await;
            if let Err(error) = &outcome {
                tracing::error!("Failed to load feedback for {}: {}", pid, error);
            }
            let _ = state.try_update(|s| s.finish(ticket, outcome));
        });
    });

    view! {
        <div>
            {move || {
                let phase = state.with(|s| s.phase().clone());
                match phase {
                    FeedbackPhase::Loading => view! {
                        <div class="flex justify-center py-8">
                            <div class="w-8 h-8 border-2 border-accent border-t-transparent rounded-full animate-spin"></div>
                        </div>
                    }.into_view(),
                    FeedbackPhase::Failed(message) => view! {
                        <div class="text-center py-4">
                            <p class="text-red-400">{message}</p>
                        </div>
                    }.into_view(),
                    FeedbackPhase::Loaded(items) => {
                        if items.is_empty() {
                            view! {
                                <EmptyState
                                    icon=EmptyStateIcon::MessageSquare
                                    title="No feedback yet"
                                    description="Feedback will appear here when faculty provides it"
                                />
                            }.into_view()
                        } else {
                            view! {
                                <div class="bg-theme-surface rounded-xl border border-theme-border">
                                    <div class="px-4 py-3 border-b border-theme-border">
                                        <h2 class="text-lg font-semibold text-theme">"Project Feedback"</h2>
                                    </div>
                                    <div class="p-4 space-y-4">
                                        {items.into_iter().map(|item| view! {
                                            <FeedbackCard item=item />
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }.into_view()
                        }
                    }
                }
            }}
        </div>
    }
}

/// One feedback entry: avatar, submitter, relative time, comment
#[component]
fn FeedbackCard(item: Feedback) -> impl IntoView {
    let (name, avatar_url) = match &item.faculty {
        Some(faculty) => (faculty.name.clone(), faculty.avatar_url.clone()),
        None => ("Faculty".to_string(), None),
    };
    let initial = name.chars().next().unwrap_or('F').to_uppercase().to_string();
    let timestamp = relative_from_now(item.created_at);

    view! {
        <div class="p-4 bg-theme-bg rounded-lg border border-theme-border">
            <div class="flex items-start gap-4">
                {match avatar_url {
                    Some(url) => view! {
                        <img class="w-10 h-10 rounded-full object-cover flex-shrink-0" src=url alt="Faculty" />
                    }.into_view(),
                    None => view! {
                        <div class="w-10 h-10 rounded-full bg-theme-surface-hover flex items-center justify-center flex-shrink-0">
                            <span class="text-sm font-medium text-theme-secondary">{initial}</span>
                        </div>
                    }.into_view(),
                }}
                <div class="flex-1 min-w-0">
                    <div class="flex justify-between gap-2">
                        <p class="font-medium text-theme truncate">{name}</p>
                        <p class="text-xs text-theme-muted flex-shrink-0">{timestamp}</p>
                    </div>
                    <p class="mt-2 text-sm text-theme-secondary">{item.comment}</p>
                </div>
            </div>
        </div>
    }
}
