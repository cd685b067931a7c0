//! Root Application Component
//!
//! Sets up routing, the shared contexts (API client, auth, toaster), and the
//! one-shot session bootstrap.

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use studyhub_shared::Project;

use crate::api::{use_api, HttpApi, ProjectsApi};
use crate::auth::{clear_session_token, provide_auth, stored_session_token};
use crate::components::dashboard::Dashboard;
use crate::components::layout::AppShell;
use crate::components::projects::FeedbackList;
use crate::notify::provide_toaster;

fn api_base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = HttpApi::new(&api_base_url()).with_token(stored_session_token());
    provide_context(api.clone());
    let auth = provide_auth();
    provide_toaster();

    // Resolve the backend session once on startup
    create_effect(move |prev_run: Option<bool>| {
        // Only run once
        if prev_run.is_some() {
            return true;
        }

        let api = api.clone();
        spawn_local(async move {
            match api.current_user().await {
                Ok(Some(user)) => {
                    tracing::info!("Signed in as {}", user.email);
                    auth.set_user(Some(user));
                }
                Ok(None) => {
                    // Stored token is no longer valid
                    clear_session_token();
                    auth.set_user(None);
                }
                Err(e) => {
                    tracing::error!("Session bootstrap failed: {}", e);
                }
            }
        });

        true
    });

    view! {
        <Title text="StudyHub" />
        <Router>
            <AppShell>
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/projects/:id" view=ProjectPage />
                    <Route path="/*" view=NotFoundPage />
                </Routes>
            </AppShell>
        </Router>
    }
}

/// Project detail page: header plus the feedback list
#[component]
fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = Signal::derive(move || {
        params.get().get("id").cloned().unwrap_or_default()
    });

    let api = use_api();
    let (project, set_project) = create_signal(Option::<Project>::None);

    create_effect(move |_| {
        let pid = project_id.get();
        let api = api.clone();
        spawn_local(async move {
            match api.project(&pid).await {
                Ok(p) => set_project.set(Some(p)),
                Err(e) => {
                    // The feedback list surfaces its own error; the header
                    // just stays minimal.
                    tracing::error!("Failed to load project {}: {}", pid, e);
                }
            }
        });
    });

    view! {
        <div class="p-6">
            <div class="max-w-3xl mx-auto space-y-6">
                <A href="/" class="text-sm text-theme-secondary hover:text-theme">
                    "← All Projects"
                </A>

                {move || project.get().map(|p| view! {
                    <div>
                        <h1 class="text-2xl font-bold text-theme">{p.title}</h1>
                        <p class="text-theme-secondary mt-1">{p.description}</p>
                    </div>
                })}

                <FeedbackList project_id=project_id />
            </div>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-6">
            <div class="text-center py-16">
                <h1 class="text-6xl font-bold text-theme-muted mb-4">"404"</h1>
                <p class="text-xl text-theme-secondary mb-6">"Page not found"</p>
                <a href="/" class="btn-primary">"Go to My Projects"</a>
            </div>
        </div>
    }
}
