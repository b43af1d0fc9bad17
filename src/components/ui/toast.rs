//! Transient toast notifications. Messages stack in the top-right corner and
//! auto-dismiss after a short fixed delay; nothing requires user interaction
//! to clear.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen (milliseconds).
const DISMISS_AFTER_MS: u32 = 1_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Supported toast styles.
enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    message: String,
}

#[derive(Clone, Copy)]
/// Toast handle shared through Leptos context.
pub struct Toasts {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|entries| {
            entries.push(ToastEntry { id, kind, message });
        });

        let entries = self.entries;
        Timeout::new(DISMISS_AFTER_MS, move || {
            entries.update(|current| current.retain(|entry| entry.id != id));
        })
        .forget();
    }
}

/// Provides the toast context and mounts the overlay above `children`.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        <ToastHost />
        {children()}
    }
}

/// Returns the shared toast handle, or a detached one when no provider is
/// mounted; pushes to a detached handle render nowhere.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(Toasts::new)
}

#[component]
fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let entries = toasts.entries;

    view! {
        <div class="fixed top-4 right-4 z-50 flex w-80 flex-col gap-2">
            <For each=move || entries.get() key=|entry| entry.id children=move |entry| {
                let class = match entry.kind {
                    ToastKind::Success => {
                        "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 shadow-md"
                    }
                    ToastKind::Error => {
                        "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 shadow-md"
                    }
                };

                view! { <div class=class role="alert">{entry.message}</div> }
            } />
        </div>
    }
}
