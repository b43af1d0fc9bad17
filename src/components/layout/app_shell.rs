//! Shared layout wrapper with the page header, content container, and build
//! footer. Routes keep their own vertical centering; the shell only
//! contributes the chrome around them.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-7xl flex items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap text-gray-900">
                            "OTP Verify"
                        </span>
                    </A>
                </div>
            </header>
            <main class="flex-1">
                {children()}
            </main>
            <footer class="p-4 text-center text-xs text-gray-400">
                {format!("v{} ({commit})", env!("CARGO_PKG_VERSION"))}
            </footer>
        </div>
    }
}
