//! Links to promote the whole catalog or a single category.

use crate::{
    app_lib::config::AppConfig,
    components::{Alert, AlertKind, Card, CopyButton},
    features::{
        auth::state::use_auth,
        referrals::{CATEGORIES, category_link, store_link},
    },
};
use leptos::prelude::*;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = use_auth();
    let store_url = AppConfig::load().store_url;
    let code = auth.session.with_untracked(|session| {
        session
            .user
            .as_ref()
            .and_then(|user| user.reference_code())
            .map(str::to_string)
            .unwrap_or_default()
    });

    let body = match store_link(&store_url, &code) {
        Ok(main_link) => {
            let copy = main_link.clone();
            let categories = CATEGORIES
                .iter()
                .filter_map(|category| {
                    let link = category_link(&store_url, category, &code).ok()?;
                    Some(view! {
                        <div class="flex items-center justify-between rounded-xl border border-gray-200 bg-white p-5">
                            <div>
                                <p class="font-semibold text-gray-900">{category.name}</p>
                                <p class="text-sm text-gray-500">{category.description}</p>
                            </div>
                            <CopyButton text=link label="Copy link" />
                        </div>
                    })
                })
                .collect_view();

            view! {
                <Card title="Whole store">
                    <div class="flex flex-wrap items-center gap-3">
                        <code class="flex-1 break-all rounded-lg bg-gray-100 px-3 py-2 text-sm">
                            {main_link}
                        </code>
                        <CopyButton text=copy label="Copy store link" />
                    </div>
                </Card>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">{categories}</div>
            }
                .into_any()
        }
        Err(err) => view! { <Alert kind=AlertKind::Info message=err.user_message() /> }.into_any(),
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900">"Products to promote"</h1>
                <p class="text-sm text-gray-500">
                    "Share any product from the store and earn commission on every sale."
                </p>
            </div>
            {body}
        </div>
    }
}
