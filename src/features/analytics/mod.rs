//! Performance analytics over a selectable period.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
