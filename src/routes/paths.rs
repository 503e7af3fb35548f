//! Route paths shared by navigation, redirects, and links.

pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";
pub const ANALYTICS: &str = "/analytics";
pub const PAYMENTS: &str = "/pagamentos";
pub const PRODUCTS: &str = "/produtos";
pub const COUPONS: &str = "/cupons";
pub const RANKING: &str = "/ranking";
pub const SETTINGS: &str = "/configuracoes";
pub const HEALTH: &str = "/health";
pub const ONBOARDING: &str = "/onboarding";

pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

/// Sidebar entries in display order.
pub const NAVIGATION: [NavItem; 9] = [
    NavItem { path: DASHBOARD, label: "Dashboard" },
    NavItem { path: ANALYTICS, label: "Analytics" },
    NavItem { path: PAYMENTS, label: "Payments" },
    NavItem { path: PRODUCTS, label: "Products" },
    NavItem { path: COUPONS, label: "Coupons" },
    NavItem { path: RANKING, label: "Ranking" },
    NavItem { path: SETTINGS, label: "Settings" },
    NavItem { path: HEALTH, label: "Health" },
    NavItem { path: ONBOARDING, label: "Getting started" },
];
