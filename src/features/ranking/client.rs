use crate::{
    app_lib::{AppError, get_json},
    features::ranking::types::{Leaderboard, LeaderboardPeriod},
};

/// Fetches the leaderboard for the selected period.
pub async fn get_leaderboard(period: LeaderboardPeriod) -> Result<Leaderboard, AppError> {
    get_json(&format!("/api/influencers/leaderboard/?period={}", period.as_str())).await
}
