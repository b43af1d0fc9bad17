use super::Spinner;
use leptos::prelude::*;

/// Action button that swaps its label for a busy indicator while an
/// operation is outstanding. Busy always implies disabled, so a pending
/// submission cannot be restarted from the UI.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] busy: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <button
            type=button_type
            class="flex w-full flex-row items-center justify-center gap-5 rounded-[10px] bg-blue-800 py-3 px-6 font-bold uppercase text-white transition-colors hover:bg-blue-900"
            class:cursor-not-allowed=move || busy.get()
            class:bg-blue-900=move || busy.get()
            disabled=move || busy.get()
        >
            {move || {
                if busy.get() {
                    view! { <Spinner /> }.into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
