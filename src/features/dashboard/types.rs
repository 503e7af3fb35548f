use crate::app_lib::payload::null_as_default;
use serde::Deserialize;
use url::form_urlencoded;

/// Headline counters. Any field the backend leaves out or nulls reads as zero.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_clicks: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_orders: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_commission: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub conversion_rate: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reference_code: String,
    pub coupon: Option<Coupon>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Coupon {
    pub code: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_clicks: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_conversions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_commission: f64,
}

/// Filters for the sales listing; `None` leaves the backend default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SalesQuery {
    pub limit: Option<u32>,
    pub days: Option<u32>,
}

impl SalesQuery {
    pub fn path(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            query.append_pair("limit", &limit.to_string());
        }
        if let Some(days) = self.days.filter(|days| *days > 0) {
            query.append_pair("days", &days.to_string());
        }
        let query = query.finish();
        if query.is_empty() {
            "/api/influencers/sales/".to_string()
        } else {
            format!("/api/influencers/sales/?{query}")
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SalesPage {
    #[serde(default)]
    pub results: Vec<Sale>,
    #[serde(default)]
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Sale {
    pub order_id: i64,
    pub order_number: String,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commission_total: f64,
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

impl Sale {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SaleItem {
    pub product: String,
    pub product_type: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_commission: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_commission: f64,
}

/// One day of the sales series used by the chart and the analytics page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DaySales {
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commission: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: u64,
}

#[cfg(test)]
mod tests {
    use super::{DashboardStats, DashboardSummary, SalesPage, SalesQuery};

    #[test]
    fn sales_query_builds_path() {
        assert_eq!(SalesQuery::default().path(), "/api/influencers/sales/");
        let query = SalesQuery {
            limit: Some(5),
            days: Some(30),
        };
        assert_eq!(query.path(), "/api/influencers/sales/?limit=5&days=30");
        let query = SalesQuery {
            limit: Some(0),
            days: Some(7),
        };
        assert_eq!(query.path(), "/api/influencers/sales/?days=7");
    }

    #[test]
    fn empty_stats_default_to_zero() {
        let stats: DashboardStats = serde_json::from_str("{}").expect("stats");
        assert_eq!(stats, DashboardStats::default());

        let stats: DashboardStats =
            serde_json::from_str(r#"{"total_clicks": null, "total_orders": 4, "conversion_rate": 2.5}"#)
                .expect("stats");
        assert_eq!(stats.total_clicks, 0);
        assert_eq!(stats.total_orders, 4);
        assert_eq!(stats.total_commission, 0.0);
        assert_eq!(stats.conversion_rate, 2.5);
    }

    #[test]
    fn summary_without_coupon_parses() {
        let summary: DashboardSummary =
            serde_json::from_str(r#"{"reference_code": "ANA10", "coupon": null}"#).expect("summary");
        assert_eq!(summary.reference_code, "ANA10");
        assert!(summary.coupon.is_none());
    }

    #[test]
    fn sales_page_parses_items() {
        let page: SalesPage = serde_json::from_str(
            r#"{
                "count": 1,
                "results": [{
                    "order_id": 91,
                    "order_number": "MV-0091",
                    "date": "2024-05-03T12:00:00Z",
                    "total": 189.8,
                    "commission_total": 15.0,
                    "items": [
                        {"product": "Camiseta Aura", "product_type": "camiseta", "quantity": 2,
                         "unit_commission": 5.0, "total_commission": 10.0},
                        {"product": "Regata Sol", "quantity": 1, "unit_commission": 5.0,
                         "total_commission": 5.0}
                    ]
                }]
            }"#,
        )
        .expect("sales page");

        let sale = &page.results[0];
        assert_eq!(page.count, 1);
        assert_eq!(sale.order_number, "MV-0091");
        assert_eq!(sale.item_count(), 3);
        assert!(sale.items[1].product_type.is_none());
    }
}
