use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-white/40 border-t-white"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
