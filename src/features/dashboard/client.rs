//! Client helpers for the dashboard endpoints.

use crate::{
    app_lib::{AppError, get_json},
    features::dashboard::types::{DashboardStats, DashboardSummary, SalesPage, SalesQuery},
};

pub async fn get_dashboard() -> Result<DashboardSummary, AppError> {
    get_json("/api/influencers/dashboard/").await
}

pub async fn get_dashboard_stats() -> Result<DashboardStats, AppError> {
    get_json("/api/influencers/dashboard-stats/").await
}

/// Fetches the partner's recent sales.
pub async fn get_sales(query: SalesQuery) -> Result<SalesPage, AppError> {
    get_json(&query.path()).await
}
