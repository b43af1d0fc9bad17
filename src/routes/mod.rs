mod not_found;
mod success;
mod verify;

pub(crate) use not_found::NotFoundPage;
pub(crate) use success::SuccessPage;
pub(crate) use verify::VerifyPage;

/// Route paths used by navigation and links.
pub(crate) mod paths {
    pub const ENTRY: &str = "/";
    pub const SUCCESS: &str = "/success";
}

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=VerifyPage />
            <Route path=path!("/success") view=SuccessPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
