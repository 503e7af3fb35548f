use crate::{
    app_lib::format::{money, percent},
    components::{Alert, AlertKind, Card, Spinner, StatCard},
    features::{
        analytics::{
            client,
            types::{Analytics, Period, TopProduct, TrafficSource},
        },
        dashboard::chart::SalesChart,
    },
    routes::dashboard::sales_chart,
};
use leptos::prelude::*;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let (period, set_period) = signal(Period::default());
    let analytics = LocalResource::new(move || {
        let period = period.get();
        async move { client::get_analytics(period).await }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900">"Analytics"</h1>
                    <p class="text-sm text-gray-500">"Detailed view of your performance"</p>
                </div>
                <select
                    class="rounded-lg border border-gray-300 px-4 py-2 text-sm"
                    on:change=move |event| {
                        if let Some(selected) = Period::parse(&event_target_value(&event)) {
                            set_period.set(selected);
                        }
                    }
                >
                    {Period::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    selected=move || period.get() == option
                                >
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match analytics.get() {
                    Some(Ok(analytics)) => analytics_body(analytics).into_any(),
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

fn analytics_body(analytics: Analytics) -> impl IntoView {
    let chart = SalesChart::from_days(&analytics.sales_by_day);
    let top_products = (!analytics.top_products.is_empty()).then(|| {
        view! {
            <Card title="Top products">
                <table class="min-w-full text-sm">
                    <thead>
                        <tr class="border-b border-gray-200 text-xs uppercase text-gray-500">
                            <th class="px-2 py-3 text-left">"Product"</th>
                            <th class="px-2 py-3 text-right">"Sales"</th>
                            <th class="px-2 py-3 text-right">"Revenue"</th>
                            <th class="px-2 py-3 text-right">"Your commission"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {analytics.top_products.into_iter().map(product_row).collect_view()}
                    </tbody>
                </table>
            </Card>
        }
    });
    let traffic = (!analytics.traffic_sources.is_empty()).then(|| {
        view! {
            <Card title="Traffic sources">
                <div class="grid gap-3">
                    {analytics.traffic_sources.into_iter().map(source_row).collect_view()}
                </div>
            </Card>
        }
    });

    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-3 lg:grid-cols-5">
            <StatCard title="Clicks" value=analytics.total_clicks.to_string() />
            <StatCard title="Orders" value=analytics.total_orders.to_string() />
            <StatCard title="Sales" value=money(analytics.total_sales) />
            <StatCard title="Commission" value=money(analytics.total_commission) accent=true />
            <StatCard title="Conversion rate" value=percent(analytics.conversion_rate) />
        </div>
        {(!chart.is_empty()).then(|| view! { <Card title="Sales by day">{sales_chart(chart)}</Card> })}
        {top_products}
        {traffic}
    }
}

fn product_row(product: TopProduct) -> impl IntoView {
    view! {
        <tr class="border-b border-gray-100">
            <td class="px-2 py-3 font-medium">{product.name}</td>
            <td class="px-2 py-3 text-right">{product.sales_count}</td>
            <td class="px-2 py-3 text-right">{money(product.total_revenue)}</td>
            <td class="px-2 py-3 text-right font-semibold text-emerald-600">
                {money(product.commission_earned)}
            </td>
        </tr>
    }
}

fn source_row(source: TrafficSource) -> impl IntoView {
    let rate = percent(source.conversion_rate());

    view! {
        <div class="flex items-center justify-between rounded-lg bg-gray-50 p-3">
            <div>
                <p class="text-sm font-semibold">{source.source}</p>
                <p class="text-xs text-gray-500">
                    {source.clicks} " clicks · " {source.conversions} " conversions"
                </p>
            </div>
            <span class="text-sm font-semibold text-emerald-600">{rate}</span>
        </div>
    }
}
