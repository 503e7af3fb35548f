//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while API handling, payload schemas, and
//! calculations live in dedicated feature areas.

pub(crate) mod analytics;
pub(crate) mod auth;
pub(crate) mod dashboard;
pub(crate) mod onboarding;
pub(crate) mod payments;
pub(crate) mod ranking;
pub(crate) mod referrals;
