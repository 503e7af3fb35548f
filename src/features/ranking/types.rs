use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaderboardPeriod {
    Total,
    #[default]
    Month,
    Week,
}

impl LeaderboardPeriod {
    pub const ALL: [LeaderboardPeriod; 3] = [
        LeaderboardPeriod::Total,
        LeaderboardPeriod::Month,
        LeaderboardPeriod::Week,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeaderboardPeriod::Total => "total",
            LeaderboardPeriod::Month => "month",
            LeaderboardPeriod::Week => "week",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaderboardPeriod::Total => "All time",
            LeaderboardPeriod::Month => "This month",
            LeaderboardPeriod::Week => "This week",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Leaderboard {
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeaderboardEntry {
    pub position: u32,
    pub influencer_id: i64,
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub points: i64,
    pub instagram_handle: Option<String>,
    pub avatar_url: Option<String>,
}

impl LeaderboardEntry {
    pub fn is_top_ten(&self) -> bool {
        (1..=10).contains(&self.position)
    }
}

impl Leaderboard {
    /// The signed-in partner's row, matched by influencer profile id.
    pub fn entry_for(&self, influencer_id: Option<i64>) -> Option<&LeaderboardEntry> {
        let id = influencer_id?;
        self.leaderboard
            .iter()
            .find(|entry| entry.influencer_id == id)
    }

    /// Positions 1-3 in order, only when all three are present.
    pub fn podium(&self) -> Option<[&LeaderboardEntry; 3]> {
        let place = |position| {
            self.leaderboard
                .iter()
                .find(|entry| entry.position == position)
        };
        Some([place(1)?, place(2)?, place(3)?])
    }
}
