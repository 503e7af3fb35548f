//! Client wrappers for the partners auth endpoints. All calls are cookie based;
//! the backend sets and clears the `HttpOnly` session cookie.

use crate::{
    app_lib::{AppError, get_json, post_empty, post_json_empty},
    features::auth::{
        guard::IdentityCheck,
        types::{LoginRequest, UserProfile},
    },
};
use std::future::Future;

/// Posts credentials so the server can set the session cookie. The response
/// body is not used; the identity check that follows returns the profile.
pub async fn login(request: &LoginRequest) -> Result<(), AppError> {
    post_json_empty("/api/influencers/login/", request).await
}

/// Fetches the current visitor's profile using the session cookie.
pub async fn fetch_me() -> Result<UserProfile, AppError> {
    get_json("/api/influencers/me/").await
}

/// Clears the session on the server.
pub async fn logout() -> Result<(), AppError> {
    post_empty("/api/auth/logout/").await
}

/// Identity check backed by the partners API.
pub struct ApiIdentity;

impl IdentityCheck for ApiIdentity {
    fn current_user(&self) -> impl Future<Output = Result<UserProfile, AppError>> {
        fetch_me()
    }
}
