use crate::app_lib::clipboard::copy_to_clipboard;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const COPIED_FEEDBACK_MS: u32 = 2_000;

/// Copies `text` to the clipboard and shows a short confirmation.
#[component]
pub fn CopyButton(
    #[prop(into)] text: Signal<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Copy".to_string());
    let (copied, set_copied) = signal(false);
    let (failed, set_failed) = signal(false);

    let on_click = move |_| {
        let value = text.get_untracked();
        if value.is_empty() {
            return;
        }
        if copy_to_clipboard(&value) {
            set_failed.set(false);
            set_copied.set(true);
            Timeout::new(COPIED_FEEDBACK_MS, move || {
                set_copied.try_set(false);
            })
            .forget();
        } else {
            set_failed.set(true);
        }
    };

    view! {
        <button
            type="button"
            class="inline-flex items-center gap-2 rounded-lg bg-gray-900 px-4 py-2 text-sm font-medium text-white hover:bg-black"
            on:click=on_click
        >
            {move || {
                if copied.get() {
                    "Copied!".to_string()
                } else if failed.get() {
                    "Copy unavailable".to_string()
                } else {
                    label.clone()
                }
            }}
        </button>
    }
}
