//! Partner home: headline counters, the last seven days of sales, and recent
//! orders. Each panel loads on its own so one failing endpoint does not blank
//! the page.

use crate::{
    app_lib::format::{money, percent, short_date},
    components::{Alert, AlertKind, Card, Spinner, StatCard},
    features::{
        analytics::{client as analytics_client, types::Period},
        auth::state::use_auth,
        dashboard::{
            chart::SalesChart,
            client,
            types::{DashboardStats, Sale, SalesQuery},
        },
    },
};
use leptos::prelude::*;

const RECENT_SALES: SalesQuery = SalesQuery {
    limit: Some(5),
    days: Some(30),
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session.with(|session| match &session.user {
            Some(user) => format!("Welcome, {}.", user.display_name()),
            None => "Welcome.".to_string(),
        })
    };

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900">"Dashboard"</h1>
                <p class="text-sm text-gray-500">{greeting}</p>
            </div>
            <StatsCards />
            <SalesChartPanel />
            <RecentSales />
        </div>
    }
}

#[component]
fn StatsCards() -> impl IntoView {
    let stats = LocalResource::new(move || async move { client::get_dashboard_stats().await });

    view! {
        <Suspense fallback=move || view! { <Spinner /> }>
            {move || match stats.get() {
                Some(Ok(stats)) => stats_grid(&stats).into_any(),
                Some(Err(err)) => {
                    view! { <Alert kind=AlertKind::Error message=err.user_message() /> }.into_any()
                }
                None => view! { <Spinner /> }.into_any(),
            }}
        </Suspense>
    }
}

fn stats_grid(stats: &DashboardStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-4">
            <StatCard title="Total clicks" value=stats.total_clicks.to_string() />
            <StatCard title="Total orders" value=stats.total_orders.to_string() />
            <StatCard title="Total commission" value=money(stats.total_commission) accent=true />
            <StatCard title="Conversion rate" value=percent(stats.conversion_rate) />
        </div>
    }
}

#[component]
fn SalesChartPanel() -> impl IntoView {
    let week = LocalResource::new(move || async move {
        analytics_client::get_analytics(Period::Week).await
    });

    view! {
        <Card title="Sales, last 7 days">
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match week.get() {
                    Some(Ok(analytics)) => {
                        sales_chart(SalesChart::from_days(&analytics.sales_by_day)).into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </Card>
    }
}

/// Shared with the analytics page, which charts the selected period.
pub(crate) fn sales_chart(chart: SalesChart) -> impl IntoView {
    let bars = chart
        .bars
        .into_iter()
        .map(|bar| {
            let sales_height = format!("height: {:.1}%; min-height: 6px", bar.sales_pct);
            let commission_height = format!("height: {:.1}%; min-height: 4px", bar.commission_pct);
            view! {
                <div class="flex flex-1 flex-col items-center gap-2" title=bar.date>
                    <div class="relative flex h-full w-full flex-col justify-end">
                        <div class="rounded-t-md bg-blue-500" style=sales_height></div>
                        <div
                            class="absolute bottom-0 w-full rounded-t-md bg-green-500 opacity-60"
                            style=commission_height
                        ></div>
                    </div>
                    <span class="text-xs font-medium text-gray-500">{bar.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 gap-4">
                <div class="rounded-lg bg-indigo-50 p-4 text-center">
                    <div class="text-2xl font-bold text-gray-900">{money(chart.total_sales)}</div>
                    <div class="text-sm text-gray-600">"Total sales"</div>
                </div>
                <div class="rounded-lg bg-green-50 p-4 text-center">
                    <div class="text-2xl font-bold text-gray-900">{money(chart.total_commission)}</div>
                    <div class="text-sm text-gray-600">"Your commission"</div>
                </div>
            </div>
            <div class="flex h-48 items-end justify-between gap-2">{bars}</div>
        </div>
    }
}

#[component]
fn RecentSales() -> impl IntoView {
    let sales = LocalResource::new(move || async move { client::get_sales(RECENT_SALES).await });

    view! {
        <Card title="Recent sales">
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match sales.get() {
                    Some(Ok(page)) if page.results.is_empty() => {
                        view! {
                            <p class="text-sm text-gray-500">"No sales in the last 30 days."</p>
                        }
                            .into_any()
                    }
                    Some(Ok(page)) => {
                        view! {
                            <ul class="divide-y divide-gray-100">
                                {page.results.into_iter().map(sale_row).collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </Card>
    }
}

fn sale_row(sale: Sale) -> impl IntoView {
    let date = sale.date.as_deref().map(short_date).unwrap_or_default();
    let items = sale.item_count();

    view! {
        <li class="flex items-center justify-between py-3 text-sm">
            <div>
                <p class="font-medium text-gray-900">{sale.order_number}</p>
                <p class="text-gray-500">{date} " · " {items} " items"</p>
            </div>
            <div class="text-right">
                <p class="text-gray-900">{money(sale.total)}</p>
                <p class="font-semibold text-emerald-600">{money(sale.commission_total)}</p>
            </div>
        </li>
    }
}
