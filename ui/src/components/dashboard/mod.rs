//! Dashboard page
//!
//! Lists the current user's projects with the standard
//! loading/error/empty/list rendering, and hosts the creation dialog. A
//! refresh trigger re-runs the fetch after a project is created.

mod empty_state;

pub use empty_state::{EmptyState, EmptyStateIcon};

use leptos::*;

use studyhub_shared::{Project, ProjectStatus};

use crate::api::{use_api, ProjectsApi};
use crate::components::projects::NewProjectDialog;
use crate::projects::{ListingPhase, ListingState};
use crate::time::relative_from_now;

/// Badge classes per review status
fn status_badge_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Pending => "bg-amber-500/20 text-amber-400 border-amber-500/30",
        ProjectStatus::Approved => "bg-green-500/20 text-green-400 border-green-500/30",
        ProjectStatus::Rejected => "bg-red-500/20 text-red-400 border-red-500/30",
        ProjectStatus::Completed => "bg-violet-500/20 text-violet-400 border-violet-500/30",
    }
}

/// Project list page
#[component]
pub fn Dashboard() -> impl IntoView {
    let api = use_api();
    let state = create_rw_signal(ListingState::new());
    let (show_create, set_show_create) = create_signal(false);
    let (refresh_trigger, set_refresh_trigger) = create_signal(0);

    // Fetch projects on mount and whenever the trigger is bumped. Activations
    // are ticketed, so a refresh racing the initial load cannot be clobbered
    // by the slower response.
    create_effect(move |_| {
        let _ = refresh_trigger.get();
        let mut ticket = 0;
        state.update(|s| ticket = s.begin());

        let api = api.clone();
        spawn_local(async move {
            let outcome = api.list_projects().await;
            if let Err(error) = &outcome {
                tracing::error!("Failed to load projects: {}", error);
            }
            let _ = state.try_update(|s| s.finish(ticket, outcome));
        });
    });

    view! {
        <div class="p-6">
            <div class="max-w-5xl mx-auto">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-theme">"My Projects"</h1>
                        <p class="text-theme-secondary mt-1">"Track your submissions and faculty feedback"</p>
                    </div>
                    <button
                        class="btn-primary"
                        on:click=move |_| set_show_create.set(true)
                    >
                        "+ New Project"
                    </button>
                </div>

                {move || {
                    let phase = state.with(|s| s.phase().clone());
                    match phase {
                        ListingPhase::Loading => view! {
                            <div class="flex justify-center py-8">
                                <div class="w-8 h-8 border-2 border-accent border-t-transparent rounded-full animate-spin"></div>
                            </div>
                        }.into_view(),
                        ListingPhase::Failed(message) => view! {
                            <div class="text-center py-4">
                                <p class="text-red-400">{message}</p>
                            </div>
                        }.into_view(),
                        ListingPhase::Loaded(list) => {
                            if list.is_empty() {
                                view! {
                                    <EmptyState
                                        icon=EmptyStateIcon::Folder
                                        title="No projects yet"
                                        description="Create your first project to get started"
                                    />
                                }.into_view()
                            } else {
                                view! {
                                    <div class="space-y-3">
                                        {list.into_iter().map(|project| view! {
                                            <ProjectCard project=project />
                                        }).collect::<Vec<_>>()}
                                    </div>
                                }.into_view()
                            }
                        }
                    }
                }}
            </div>

            <NewProjectDialog
                open=show_create
                on_open_change=move |open| set_show_create.set(open)
                on_project_created=move |_| set_refresh_trigger.update(|n| *n += 1)
            />
        </div>
    }
}

/// One project row: title, status badge, description, relative age
#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let badge = status_badge_class(project.status);
    let age = relative_from_now(project.created_at);

    view! {
        <a
            href=href
            class="block p-4 bg-theme-surface hover:bg-theme-surface-hover rounded-lg border border-theme-border hover:border-accent transition-all"
        >
            <div class="flex items-start justify-between gap-4">
                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-2">
                        <h3 class="font-semibold text-theme truncate">{project.title}</h3>
                        <span class=format!("px-2 py-0.5 text-xs font-medium rounded border {}", badge)>
                            {project.status.label()}
                        </span>
                    </div>
                    <p class="text-sm text-theme-secondary mt-1 truncate">{project.description}</p>
                </div>
                <span class="text-xs text-theme-muted flex-shrink-0">{age}</span>
            </div>
        </a>
    }
}
