//! Terminal view shown after the verification service accepts a code.

use crate::{
    components::{AppShell, Button},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <AppShell>
            <div class="flex min-h-[70vh] flex-col items-center justify-center gap-8">
                <p class="text-3xl font-semibold text-gray-900">"OTP Verified Successfully"</p>
                <svg
                    class="h-40 w-40 text-emerald-500"
                    xmlns="http://www.w3.org/2000/svg"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                    stroke-width="1.5"
                    aria-hidden="true"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        d="M9 12.75 11.25 15 15 9.75M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z"
                    ></path>
                </svg>
                <div class="w-48">
                    <Button on:click=move |_| navigate(paths::ENTRY, Default::default())>
                        "Back home"
                    </Button>
                </div>
            </div>
        </AppShell>
    }
}
