//! Payments: balance summary, payout history, payout details, and withdrawals.
//! Payout details are sensitive; views show them masked and nothing here logs
//! them.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod rules;
pub(crate) mod types;
