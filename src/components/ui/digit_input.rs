use leptos::html;
use leptos::prelude::*;

/// One single-character cell of the code row. The cell renders its value and
/// error ring and forwards raw events upward through listeners spread onto
/// the component; validation and focus control stay with the caller.
#[component]
pub fn DigitInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] is_error: Signal<bool>,
    node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    view! {
        <input
            node_ref=node_ref
            type="text"
            maxlength="1"
            class="h-12 w-12 rounded-[10px] border-none bg-gray-100 text-center text-3xl text-gray-600 outline-none ring-blue-500 focus:ring-2 sm:h-16 sm:w-16 sm:text-4xl"
            class:ring-2=move || is_error.get()
            class:ring-red-500=move || is_error.get()
            prop:value=move || value.get()
        />
    }
}
