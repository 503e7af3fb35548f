use crate::app_lib::{GIT_COMMIT_HASH, built_info};
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    view! {
        <div class="flex justify-center">
            <div class="block max-w-[38rem] rounded-lg border border-gray-200 bg-white">
                <div class="border-b border-gray-200 px-6 py-3 font-semibold text-gray-600">
                    "Build Version"
                </div>
                <div class="space-y-1 p-6 text-center">
                    <p class="text-sm text-gray-500">{built_info::PKG_VERSION}</p>
                    <pre>{GIT_COMMIT_HASH}</pre>
                </div>
            </div>
        </div>
    }
}
