use leptos::prelude::*;

/// Bordered panel with an optional title.
#[component]
pub fn Card(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <section class="rounded-xl border border-gray-200 bg-white shadow-sm">
            {title
                .map(|title| {
                    view! {
                        <header class="px-6 pt-5 pb-2">
                            <h2 class="text-sm font-medium text-gray-500">{title}</h2>
                        </header>
                    }
                })}
            <div class="px-6 pb-6 pt-2">{children()}</div>
        </section>
    }
}

/// Headline number with a label, used by the dashboard and analytics grids.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(optional)] accent: bool,
) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-gray-200 bg-white p-5 shadow-sm">
            <p class="text-sm font-medium text-gray-500">{title}</p>
            <p class="mt-2 text-2xl font-bold" class:text-emerald-600=accent class:text-gray-900=!accent>
                {value}
            </p>
        </div>
    }
}
