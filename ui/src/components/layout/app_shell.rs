//! App Shell Component
//!
//! Layout container with the top bar (brand, current-user chip), the routed
//! page content, and the toast viewport.

use leptos::*;

use crate::auth::use_auth;
use crate::notify::ToastViewport;

/// Main application shell layout
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();

    view! {
        <div class="h-screen flex flex-col bg-theme-bg text-theme overflow-hidden">
            <header class="flex items-center justify-between px-6 py-3 border-b border-theme-border bg-theme-surface">
                <a href="/" class="flex items-center gap-2">
                    <span class="text-lg font-bold text-theme">"StudyHub"</span>
                </a>
                {move || {
                    match user.get() {
                        Some(user) => {
                            let initial = user
                                .name
                                .chars()
                                .next()
                                .unwrap_or('?')
                                .to_uppercase()
                                .to_string();
                            view! {
                                <div class="flex items-center gap-2">
                                    <div class="w-8 h-8 rounded-full bg-accent/20 flex items-center justify-center">
                                        <span class="text-sm font-medium text-accent">{initial}</span>
                                    </div>
                                    <span class="text-sm text-theme-secondary">{user.name}</span>
                                </div>
                            }.into_view()
                        }
                        None => view! {
                            <span class="text-sm text-theme-muted">"Not signed in"</span>
                        }.into_view(),
                    }
                }}
            </header>

            <main class="flex-1 overflow-auto">
                {children()}
            </main>

            <ToastViewport />
        </div>
    }
}
