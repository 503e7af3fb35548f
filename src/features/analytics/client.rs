use crate::{
    app_lib::{AppError, get_json},
    features::analytics::types::{Analytics, Period},
};

/// Fetches analytics for the selected period.
pub async fn get_analytics(period: Period) -> Result<Analytics, AppError> {
    get_json(&format!("/api/influencers/analytics/?period={}", period.as_str())).await
}
