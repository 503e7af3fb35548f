//! Bar-chart model for the daily sales series. Bar heights are percentages of
//! the largest sales or commission value in the series, with a floor of 1 so an
//! empty week renders flat bars instead of dividing by zero.

use crate::{app_lib::format::weekday_label, features::dashboard::types::DaySales};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    /// Short weekday label, e.g. `Mon`.
    pub label: String,
    pub date: String,
    pub sales_pct: f64,
    pub commission_pct: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalesChart {
    pub total_sales: f64,
    pub total_commission: f64,
    pub bars: Vec<ChartBar>,
}

impl SalesChart {
    pub fn from_days(days: &[DaySales]) -> Self {
        let scale = days
            .iter()
            .flat_map(|day| [day.sales, day.commission])
            .fold(1.0_f64, f64::max);

        let bars = days
            .iter()
            .map(|day| ChartBar {
                label: weekday_label(&day.date),
                date: day.date.clone(),
                sales_pct: share(day.sales, scale),
                commission_pct: share(day.commission, scale),
            })
            .collect();

        Self {
            total_sales: days.iter().map(|day| day.sales).sum(),
            total_commission: days.iter().map(|day| day.commission).sum(),
            bars,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn share(value: f64, scale: f64) -> f64 {
    (value / scale * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::SalesChart;
    use crate::features::dashboard::types::DaySales;

    fn day(date: &str, sales: f64, commission: f64) -> DaySales {
        DaySales {
            date: date.to_string(),
            sales,
            commission,
            orders: 0,
        }
    }

    #[test]
    fn bars_scale_to_largest_value() {
        let chart = SalesChart::from_days(&[
            day("2024-05-03", 200.0, 20.0),
            day("2024-05-04", 50.0, 5.0),
        ]);

        assert_eq!(chart.total_sales, 250.0);
        assert_eq!(chart.total_commission, 25.0);
        assert_eq!(chart.bars[0].label, "Fri");
        assert_eq!(chart.bars[0].sales_pct, 100.0);
        assert_eq!(chart.bars[0].commission_pct, 10.0);
        assert_eq!(chart.bars[1].sales_pct, 25.0);
    }

    #[test]
    fn commission_can_set_the_scale() {
        let chart = SalesChart::from_days(&[day("2024-05-03", 10.0, 40.0)]);
        assert_eq!(chart.bars[0].sales_pct, 25.0);
        assert_eq!(chart.bars[0].commission_pct, 100.0);
    }

    #[test]
    fn quiet_week_uses_floor_of_one() {
        let chart = SalesChart::from_days(&[
            day("2024-05-03", 0.0, 0.0),
            day("2024-05-04", 0.5, 0.0),
        ]);
        assert_eq!(chart.bars[0].sales_pct, 0.0);
        assert_eq!(chart.bars[1].sales_pct, 50.0);
    }

    #[test]
    fn empty_series_has_no_bars() {
        let chart = SalesChart::from_days(&[]);
        assert!(chart.is_empty());
        assert_eq!(chart.total_sales, 0.0);
    }
}
