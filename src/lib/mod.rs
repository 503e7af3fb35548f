//! Shared frontend utilities for API access, configuration, errors, logging, and
//! build metadata.
//!
//! Every call against the partners API carries the session cookie
//! (`credentials: include`). The identity check at `/api/influencers/me/` is the
//! only source of truth for "who is signed in"; nothing here caches credentials.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated request setup in routes and features. Callers must still avoid
//! logging passwords or payout details.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
#[cfg(target_arch = "wasm32")]
pub(crate) mod clipboard;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod format;
pub(crate) mod payload;
#[cfg(target_arch = "wasm32")]
pub(crate) mod telemetry;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{get_json, post_empty, post_json_empty, put_json_empty};
pub(crate) use errors::AppError;
