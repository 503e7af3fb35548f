//! Auth session context for the frontend. The provider owns the process-wide
//! session signal; the session guard fills it with a single identity check and
//! the login/logout flows update it through the [`SessionStore`] actions. Only
//! profile data is kept in memory; cookies remain `HttpOnly`.

use crate::features::auth::{
    client,
    session::{Session, SessionStore},
};
use leptos::{prelude::*, task::spawn_local};
use tracing::debug;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Session>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Session>) -> Self {
        Self { session }
    }

    /// Clears the local session and asks the server to drop the cookie. The
    /// local state does not wait for the server; the partner guard performs the
    /// single redirect to the login page.
    pub fn sign_out(&self) {
        self.logout();
        spawn_local(async {
            if let Err(err) = client::logout().await {
                debug!(error = %err, "server logout failed");
            }
        });
    }
}

impl SessionStore for AuthContext {
    fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    fn replace(&self, session: Session) {
        self.session.set(session);
    }
}

/// Provides the auth context to the whole app.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(RwSignal::new(Session::default()));
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(Session::default())))
}
