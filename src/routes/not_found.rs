use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center px-4 text-center">
            <h1 class="select-none text-9xl font-black text-gray-100">"404"</h1>
            <p class="text-2xl font-bold text-gray-900">"Page not found"</p>
            <p class="mt-4 max-w-sm text-gray-500">"The page you requested does not exist."</p>
            <A
                href=paths::DASHBOARD
                {..}
                class="mt-6 inline-flex items-center rounded-lg bg-gray-900 px-5 py-2.5 text-sm font-medium text-white hover:bg-black"
            >
                "Go to dashboard"
            </A>
        </div>
    }
}
