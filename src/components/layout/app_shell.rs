//! Frame for every partner page: sidebar navigation, a header with the signed-in
//! account, and the routed content. Navigation stays client-side; the API still
//! authorizes every request.

use crate::{
    app_lib::errors::failure_details,
    components::layout::Sidebar,
    features::auth::state::use_auth,
};
use leptos::{error::Errors, prelude::*};
use leptos_router::components::Outlet;
use tracing::warn;

#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();
    let (menu_open, set_menu_open) = signal(false);
    let email = move || {
        auth.session
            .with(|session| session.user.as_ref().map(|user| user.email.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar open=menu_open on_navigate=move || set_menu_open.set(false) />
            <div class="flex flex-1 flex-col">
                <header class="flex items-center justify-between border-b border-gray-200 bg-white px-6 py-4">
                    <button
                        type="button"
                        class="inline-flex h-10 w-10 items-center justify-center rounded-lg text-gray-500 hover:bg-gray-100 md:hidden"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        "☰"
                    </button>
                    <span class="text-sm text-gray-600">{email}</span>
                    <button
                        type="button"
                        class="rounded-lg px-3 py-2 text-sm font-medium text-gray-900 hover:bg-gray-100"
                        on:click=move |_| auth.sign_out()
                    >
                        "Sign out"
                    </button>
                </header>
                <main class="flex-1">
                    <div class="mx-auto max-w-6xl p-6">
                        <ErrorBoundary fallback=section_error>
                            <Outlet />
                        </ErrorBoundary>
                    </div>
                </main>
            </div>
        </div>
    }
}

/// Replaces a page that rendered an error; "Try again" clears the errors and
/// renders the page once more.
fn section_error(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let details = failure_details(errors.get().into_iter().map(|(_, err)| err.to_string()));
    for detail in &details {
        warn!(error = %detail, "partner page failed to render");
    }

    view! {
        <div class="flex min-h-[300px] items-center justify-center p-4">
            <div class="w-full max-w-md rounded-xl border border-gray-200 bg-white p-6">
                <h3 class="mb-2 font-semibold text-amber-700">"Something went wrong"</h3>
                <p class="mb-4 text-sm text-gray-600">"A problem occurred while loading this section."</p>
                <ul class="space-y-1 rounded-lg bg-gray-50 p-3 text-xs text-gray-700">
                    {details.into_iter().map(|detail| view! { <li>{detail}</li> }).collect_view()}
                </ul>
                <button
                    type="button"
                    class="mt-4 rounded-lg bg-gray-900 px-3 py-2 text-sm text-white hover:bg-black"
                    on:click=move |_| errors.set(Errors::default())
                >
                    "Try again"
                </button>
            </div>
        </div>
    }
}
