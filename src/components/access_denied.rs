//! Shown to signed-in visitors whose account is not a partner account. Signing
//! in again would not change that, so the page offers the public store and a
//! way to switch accounts instead of a login redirect.

use crate::{app_lib::config::AppConfig, features::auth::state::use_auth};
use leptos::prelude::*;

#[component]
pub fn AccessDenied() -> impl IntoView {
    let auth = use_auth();
    let store_url = AppConfig::load().store_url;
    let email = move || {
        auth.session
            .with(|session| session.user.as_ref().map(|user| user.email.clone()))
            .unwrap_or_default()
    };

    let on_switch = move |_| auth.sign_out();

    view! {
        <div class="flex min-h-screen items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md space-y-6 rounded-xl border border-gray-200 bg-white p-8 text-center shadow-sm">
                <h1 class="text-xl font-bold text-gray-900">"Partners only"</h1>
                <p class="text-sm text-gray-600">
                    "The account " <span class="font-medium text-gray-900">{email}</span>
                    " is not enrolled in the partner program."
                </p>
                <div class="flex flex-col gap-3">
                    <a
                        href=store_url
                        class="inline-flex justify-center rounded-lg bg-gray-900 px-5 py-2.5 text-sm font-medium text-white hover:bg-black"
                    >
                        "Go to the store"
                    </a>
                    <button
                        type="button"
                        class="inline-flex justify-center rounded-lg border border-gray-200 px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100"
                        on:click=on_switch
                    >
                        "Sign in with another account"
                    </button>
                </div>
            </div>
        </div>
    }
}
