//! Dashboard overview: headline counters, the coupon summary, recent sales, and
//! the seven-day sales chart.

pub(crate) mod chart;
#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
