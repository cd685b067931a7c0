//! Empty-state placeholder card
//!
//! Shown wherever a list loaded successfully but has nothing in it, so the
//! user can tell "nothing here yet" apart from "still loading" or "failed".

use leptos::*;

/// Icon shown inside the placeholder circle
#[derive(Clone, Copy)]
pub enum EmptyStateIcon {
    /// Speech bubble, for feedback lists
    MessageSquare,
    /// Folder, for project lists
    Folder,
}

impl EmptyStateIcon {
    fn render(self) -> impl IntoView {
        match self {
            EmptyStateIcon::MessageSquare => view! {
                <svg class="w-8 h-8 text-theme-muted" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
                </svg>
            }.into_view(),
            EmptyStateIcon::Folder => view! {
                <svg class="w-8 h-8 text-theme-muted" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z" />
                </svg>
            }.into_view(),
        }
    }
}

/// Placeholder with icon, title, and description
#[component]
pub fn EmptyState(
    icon: EmptyStateIcon,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-8 text-center bg-theme-surface rounded-xl border border-theme-border">
            <div class="w-16 h-16 rounded-full bg-theme-surface-hover flex items-center justify-center mx-auto mb-4">
                {icon.render()}
            </div>
            <p class="text-theme-secondary font-medium">{title}</p>
            <p class="text-sm text-theme-muted mt-1">{description}</p>
        </div>
    }
}
