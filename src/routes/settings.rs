//! Read-only account settings. Profile changes go through partner support.

use crate::{
    app_lib::format::money,
    components::{Card, Spinner},
    features::auth::{state::use_auth, types::UserProfile},
};
use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900">"Settings"</h1>
                <p class="text-sm text-gray-500">"Your partner account"</p>
            </div>
            {move || match auth.session.get().user {
                Some(user) => settings_body(user).into_any(),
                None => view! { <Spinner /> }.into_any(),
            }}
        </div>
    }
}

fn settings_body(user: UserProfile) -> impl IntoView {
    let profile = user.influencer_profile.clone();
    let text = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or("—")
            .to_string()
    };

    let account = view! {
        <Card title="Account">
            <dl>
                {detail_row("Name", text(user.full_name.as_deref()))}
                {detail_row("Email", user.email.clone())}
                {detail_row("Phone", text(user.phone.as_deref()))}
            </dl>
        </Card>
    };

    let partner = profile.map(|profile| {
        let level = profile
            .current_level
            .as_ref()
            .map(|level| format!("{} (level {})", level.name, level.level_number))
            .unwrap_or_else(|| "—".to_string());
        let commissions = profile
            .product_commissions
            .iter()
            .map(|commission| detail_row(&commission.product_type, money(commission.commission_amount)))
            .collect_view();

        view! {
            <Card title="Partner program">
                <dl>
                    {detail_row("Status", profile.status.clone())}
                    {detail_row("Reference code", text(Some(profile.reference_code.as_str())))}
                    {detail_row("Level", level)}
                    {detail_row("Total points", profile.total_points.to_string())}
                    {detail_row("Points this month", profile.current_month_points.to_string())}
                    {detail_row("Total commission", money(profile.total_commission))}
                    {detail_row("Pending commission", money(profile.pending_commission))}
                </dl>
            </Card>
            <Card title="Commission per product">
                <dl>{commissions}</dl>
            </Card>
            <Card title="Social media">
                <dl>
                    {detail_row("Instagram", text(profile.instagram_handle.as_deref()))}
                    {detail_row("TikTok", text(profile.tiktok_handle.as_deref()))}
                    {detail_row("YouTube", text(profile.youtube_channel.as_deref()))}
                    {detail_row("Bio", text(profile.bio.as_deref()))}
                </dl>
            </Card>
        }
    });

    view! {
        {account}
        {partner}
    }
}

fn detail_row(label: &str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between border-b border-gray-100 py-2 text-sm">
            <dt class="capitalize text-gray-500">{label.to_string()}</dt>
            <dd class="font-medium text-gray-900">{value}</dd>
        </div>
    }
}
