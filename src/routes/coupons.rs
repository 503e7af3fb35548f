use crate::{
    app_lib::{config::AppConfig, format::money},
    components::{Alert, AlertKind, Card, CopyButton, Spinner, StatCard},
    features::{
        dashboard::{client, types::DashboardSummary},
        referrals::referral_link,
    },
};
use leptos::prelude::*;

#[component]
pub fn CouponsPage() -> impl IntoView {
    let summary = LocalResource::new(move || async move { client::get_dashboard().await });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900">"Coupons"</h1>
                <p class="text-sm text-gray-500">"Your discount coupon and referral link"</p>
            </div>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match summary.get() {
                    Some(Ok(summary)) => coupon_body(summary).into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

fn coupon_body(summary: DashboardSummary) -> impl IntoView {
    let link = referral_link(&AppConfig::load().store_url, &summary.reference_code);

    let coupon = match summary.coupon {
        Some(coupon) => {
            let code = coupon.code.clone();
            let (badge_class, badge) = if coupon.is_active {
                ("rounded-full bg-emerald-100 px-3 py-1 text-xs font-medium text-emerald-800", "Active")
            } else {
                ("rounded-full bg-red-100 px-3 py-1 text-xs font-medium text-red-800", "Inactive")
            };
            view! {
                <Card title="Your discount coupon">
                    <div class="space-y-4 rounded-lg border-2 border-dashed border-gray-300 bg-gray-50 p-6 text-center">
                        <p class="text-xs uppercase text-gray-500">"Coupon code"</p>
                        <p class="font-mono text-4xl font-bold tracking-widest text-gray-900">
                            {coupon.code}
                        </p>
                        <CopyButton text=code label="Copy coupon" />
                        <div>
                            <span class=badge_class>{badge}</span>
                        </div>
                    </div>
                </Card>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4">
                    <StatCard title="Clicks" value=coupon.total_clicks.to_string() />
                    <StatCard title="Conversions" value=coupon.total_conversions.to_string() />
                    <StatCard title="Revenue" value=money(coupon.total_revenue) />
                    <StatCard title="Commission" value=money(coupon.total_commission) accent=true />
                </div>
            }
                .into_any()
        }
        None => {
            view! {
                <Alert kind=AlertKind::Info message="Your coupon has not been created yet." />
            }
                .into_any()
        }
    };

    let referral = match link {
        Ok(link) => {
            let copy = link.clone();
            view! {
                <Card title="Referral link">
                    <div class="flex flex-wrap items-center gap-3">
                        <code class="flex-1 break-all rounded-lg bg-gray-100 px-3 py-2 text-sm">{link}</code>
                        <CopyButton text=copy label="Copy link" />
                    </div>
                </Card>
            }
                .into_any()
        }
        Err(err) => view! { <Alert kind=AlertKind::Info message=err.user_message() /> }.into_any(),
    };

    view! {
        {coupon}
        {referral}
    }
}
