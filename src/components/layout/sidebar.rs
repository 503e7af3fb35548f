//! Side navigation for partner pages.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Sidebar<F>(open: ReadSignal<bool>, on_navigate: F) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let location = use_location();

    let links = paths::NAVIGATION
        .iter()
        .map(|item| {
            let target = item.path;
            let on_navigate = on_navigate.clone();
            let active = move || location.pathname.get() == target;
            view! {
                <A
                    href=target
                    {..}
                    class="block rounded-md px-3 py-2 text-sm font-medium transition-colors hover:bg-gray-100"
                    class:bg-gray-900=active
                    class:text-white=active
                    class:text-gray-700=move || !active()
                    on:click=move |_| on_navigate()
                >
                    {item.label}
                </A>
            }
        })
        .collect_view();

    view! {
        <aside
            class="w-60 flex-shrink-0 flex-col border-r border-gray-200 bg-white md:flex"
            class:hidden=move || !open.get()
            class:flex=move || open.get()
        >
            <div class="px-6 py-5">
                <span class="text-lg font-bold text-gray-900">"MoodVerse Partners"</span>
            </div>
            <nav class="flex-1 space-y-1 px-3">{links}</nav>
        </aside>
    }
}
