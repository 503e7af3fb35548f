use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-8 w-8 animate-spin rounded-full border-4 border-purple-200 border-t-purple-600"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
