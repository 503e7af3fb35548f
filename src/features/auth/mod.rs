//! Auth feature module covering login, logout, the session store, and the
//! session guard that gates every partner route. It keeps authentication logic
//! out of the UI and must not log passwords.
//!
//! Flow Overview: a protected navigation mounts the guard, which runs a single
//! identity check (`GET /api/influencers/me/`) when the store holds no user.
//! Login posts credentials, then runs the identity check itself and stores the
//! profile so the guard passes without another request. Logout clears the store
//! and the guard redirects to `/login`.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod guard;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod redirect;
pub(crate) mod session;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequirePartner;
