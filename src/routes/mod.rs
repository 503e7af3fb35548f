//! Route table. `/login` is public; every other page renders inside the partner
//! guard and the app shell.

mod analytics;
mod coupons;
mod dashboard;
mod health;
mod login;
mod not_found;
mod onboarding;
pub(crate) mod paths;
mod payments;
mod products;
mod ranking;
mod settings;

pub(crate) use analytics::AnalyticsPage;
pub(crate) use coupons::CouponsPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use health::HealthPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use onboarding::OnboardingPage;
pub(crate) use payments::PaymentsPage;
pub(crate) use products::ProductsPage;
pub(crate) use ranking::RankingPage;
pub(crate) use settings::SettingsPage;

use crate::{components::AppShell, features::auth::RequirePartner};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/login") view=LoginPage />
            <ParentRoute path=path!("") view=PartnerLayout>
                <Route path=path!("") view=|| view! { <Redirect path=paths::DASHBOARD /> } />
                <Route path=path!("dashboard") view=DashboardPage />
                <Route path=path!("analytics") view=AnalyticsPage />
                <Route path=path!("pagamentos") view=PaymentsPage />
                <Route path=path!("produtos") view=ProductsPage />
                <Route path=path!("cupons") view=CouponsPage />
                <Route path=path!("ranking") view=RankingPage />
                <Route path=path!("configuracoes") view=SettingsPage />
                <Route path=path!("health") view=HealthPage />
                <Route path=path!("onboarding") view=OnboardingPage />
            </ParentRoute>
        </Routes>
    }
}

/// Guarded frame for partner pages; the shell renders the matched child route.
#[component]
fn PartnerLayout() -> impl IntoView {
    view! {
        <RequirePartner>
            <AppShell />
        </RequirePartner>
    }
}
