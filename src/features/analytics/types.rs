use crate::{app_lib::payload::null_as_default, features::dashboard::types::DaySales};
use serde::Deserialize;

/// Reporting window accepted by the analytics endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Week, Period::Month, Period::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Week => "Last week",
            Period::Month => "Last month",
            Period::Year => "Last year",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == value.trim())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Analytics {
    pub period: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_clicks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_orders: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_sales: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_commission: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub conversion_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sales_by_day: Vec<DaySales>,
    #[serde(deserialize_with = "null_as_default")]
    pub top_products: Vec<TopProduct>,
    #[serde(deserialize_with = "null_as_default")]
    pub traffic_sources: Vec<TrafficSource>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopProduct {
    pub name: String,
    #[serde(default)]
    pub sales_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commission_earned: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrafficSource {
    pub source: String,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub conversions: u64,
}

impl TrafficSource {
    /// Conversions per click as a percentage; zero when there were no clicks.
    pub fn conversion_rate(&self) -> f64 {
        if self.clicks == 0 {
            return 0.0;
        }
        self.conversions as f64 / self.clicks as f64 * 100.0
    }
}
