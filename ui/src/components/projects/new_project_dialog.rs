//! Project creation dialog
//!
//! Modal form for a new project draft. Validation and the write itself live
//! in [`crate::projects::form`]; this component maps the outcome to toasts,
//! resets local state on success, and tells the host to close.

use leptos::*;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::notify::use_toaster;
use crate::projects::{submit_project, ProjectForm, SubmitError};

/// Dialog for creating a new project
///
/// `on_project_created` fires exactly once per successful creation, after
/// the fields are reset and the host was told to close.
#[component]
pub fn NewProjectDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_open_change: Callback<bool>,
    #[prop(into)] on_project_created: Callback<()>,
) -> impl IntoView {
    // Stored so the submit handler stays Copy for the view closures
    let api = store_value(use_api());
    let auth = use_auth();
    let toaster = use_toaster();

    let (title, set_title) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let close = move || {
        // Cancelling discards the draft
        set_title.set(String::new());
        set_description.set(String::new());
        on_open_change.call(false);
    };

    let handle_create = move |_| {
        if saving.get_untracked() {
            return;
        }

        let form = ProjectForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            submitting: false,
        };

        // Preconditions abort before any request and without touching state;
        // their toast copy comes from the variants themselves
        if form.draft().is_none() {
            let error = SubmitError::MissingInfo;
            toaster.error(error.toast_title(), &error.to_string());
            return;
        }
        let Some(user) = auth.current_user() else {
            let error = SubmitError::NotAuthenticated;
            toaster.error(error.toast_title(), &error.to_string());
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            let api = api.get_value();
            match submit_project(&api, &form, Some(&user)).await {
                Ok(project) => {
                    tracing::info!("Project created: {}", project.id);
                    toaster.success(
                        "Project created!",
                        "Your project has been created successfully",
                    );
                    set_title.set(String::new());
                    set_description.set(String::new());
                    on_open_change.call(false);
                    on_project_created.call(());
                }
                Err(error) => {
                    tracing::error!("Project creation failed: {}", error);
                    // Keep the draft so the user can retry
                    toaster.error(error.toast_title(), &error.to_string());
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        {move || {
            if open.get() {
                view! {
                    <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-40">
                        <div class="bg-theme-surface rounded-xl w-[450px] shadow-xl border border-theme-border">
                            <div class="flex items-center justify-between p-4 border-b border-theme-border">
                                <h2 class="text-lg font-semibold text-theme">"New Project"</h2>
                                <button
                                    class="p-1.5 hover:bg-theme-surface-hover rounded-lg text-theme-secondary hover:text-theme transition-colors"
                                    on:click=move |_| close()
                                >
                                    "✕"
                                </button>
                            </div>

                            <div class="p-4 space-y-4">
                                <div class="space-y-1">
                                    <label class="text-sm text-theme-secondary">"Title"</label>
                                    <input
                                        type="text"
                                        class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                                        placeholder="Title"
                                        prop:value=move || title.get()
                                        on:input=move |e| set_title.set(event_target_value(&e))
                                    />
                                </div>

                                <div class="space-y-1">
                                    <label class="text-sm text-theme-secondary">"Description"</label>
                                    <textarea
                                        class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme resize-none focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                                        rows="3"
                                        placeholder="Description"
                                        prop:value=move || description.get()
                                        on:input=move |e| set_description.set(event_target_value(&e))
                                    />
                                </div>
                            </div>

                            <div class="p-4 border-t border-theme-border flex justify-end gap-3">
                                <button class="btn-secondary" on:click=move |_| close()>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn-primary disabled:opacity-50"
                                    disabled=move || saving.get()
                                    on:click=handle_create
                                >
                                    {move || if saving.get() { "Creating..." } else { "Create" }}
                                </button>
                            </div>
                        </div>
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
