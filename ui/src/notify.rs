//! Toast notifications
//!
//! Fire-and-forget user notifications: callers push `{title, description,
//! variant}` and the viewport renders and auto-dismisses them. Provided once
//! at the app root and reached through context.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

/// How long a toast stays on screen
pub const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Handle for pushing notifications
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn success(&self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Success);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.push(title, description, ToastVariant::Error);
    }

    fn push(&self, title: &str, description: &str, variant: ToastVariant) {
        let mut id = 0;
        self.next_id.update(|n| {
            *n += 1;
            id = *n;
        });

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
                variant,
            })
        });

        // Auto-dismiss; try_update in case the app was torn down meanwhile
        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            let _ = toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the toaster at the app root
pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// Get the toaster provided by the app root
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders active toasts in the bottom-right corner
#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            {move || {
                toaster
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let toast_id = toast.id;
                        let accent = match toast.variant {
                            ToastVariant::Success => "border-green-500/40",
                            ToastVariant::Error => "border-red-500/40",
                        };
                        view! {
                            <div class=format!(
                                "p-3 bg-theme-surface border rounded-lg shadow-lg {}",
                                accent,
                            )>
                                <div class="flex items-start justify-between gap-2">
                                    <div class="min-w-0">
                                        <div class="text-sm font-medium text-theme">{toast.title}</div>
                                        <div class="text-xs text-theme-secondary mt-0.5">
                                            {toast.description}
                                        </div>
                                    </div>
                                    <button
                                        class="text-theme-muted hover:text-theme text-xs"
                                        on:click=move |_| toaster.dismiss(toast_id)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
