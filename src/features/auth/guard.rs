//! Session guard for partner routes.
//!
//! One [`SessionGuard`] lives for one mount of a protected subtree. On
//! activation it claims the identity check through the store (at most one check
//! is ever in flight), and hands the caller a task to spawn. The task commits
//! the result only while the mount is still active; deactivation aborts the
//! request and releases the claim so a later mount can ask again.
//!
//! Every identity-check failure means "no session": network errors, 401/403,
//! server errors, and malformed payloads all lead to the login redirect. A
//! signed-in visitor without the influencer flag gets the denial view instead,
//! since signing in again would not change eligibility. Nothing is retried.

use crate::app_lib::AppError;
use crate::features::auth::{
    redirect::login_path,
    session::{Session, SessionStore},
    types::UserProfile,
};
use futures_util::future::{AbortHandle, Abortable};
use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};
use tracing::{debug, warn};

/// Asks the backend who the current visitor is.
pub trait IdentityCheck: 'static {
    fn current_user(&self) -> impl Future<Output = Result<UserProfile, AppError>>;
}

/// What a protected route renders for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Loading,
    /// Redirect to the login page; `path` carries the requested location.
    Login { path: String },
    Denied,
    Granted,
}

/// Maps a session snapshot to the view for `requested`.
pub fn decide(session: &Session, requested: &str) -> Access {
    match &session.user {
        Some(user) if user.is_influencer => Access::Granted,
        Some(_) => Access::Denied,
        None if session.is_checked() => Access::Login {
            path: login_path(requested),
        },
        None => Access::Loading,
    }
}

#[derive(Default)]
struct Mount {
    active: Cell<bool>,
    claimed: Cell<bool>,
    abort: RefCell<Option<AbortHandle>>,
}

pub struct SessionGuard<S: SessionStore, C: IdentityCheck> {
    store: S,
    identity: Rc<C>,
    mount: Rc<Mount>,
}

impl<S: SessionStore, C: IdentityCheck> SessionGuard<S, C> {
    pub fn new(store: S, identity: Rc<C>) -> Self {
        let mount = Mount::default();
        mount.active.set(true);
        Self {
            store,
            identity,
            mount: Rc::new(mount),
        }
    }

    /// Runs the mount logic. Returns the identity-check task when this mount
    /// claimed the check; the caller spawns it on the UI executor. Repeated calls
    /// are idempotent and never start a second request.
    pub fn activate(&self) -> Option<impl Future<Output = ()> + 'static> {
        if !self.mount.active.get() || self.mount.claimed.get() {
            return None;
        }
        if !self.store.begin_check() {
            return None;
        }

        self.mount.claimed.set(true);
        let (handle, registration) = AbortHandle::new_pair();
        self.mount.abort.replace(Some(handle));

        let store = self.store.clone();
        let identity = Rc::clone(&self.identity);
        let mount = Rc::clone(&self.mount);
        let check = async move {
            let result = identity.current_user().await;
            if !mount.active.get() {
                debug!("discarding identity result after unmount");
                return;
            }
            mount.claimed.set(false);
            mount.abort.take();

            let user = match result {
                Ok(user) => Some(user),
                Err(err) if err.is_unauthorized() => {
                    debug!("no active partner session");
                    None
                }
                Err(err) => {
                    warn!(error = %err, "identity check failed; treating visitor as signed out");
                    None
                }
            };
            store.finish_check(user);
        };

        Some(async move {
            // `Err(Aborted)` means the mount went away first; nothing to commit.
            let _ = Abortable::new(check, registration).await;
        })
    }

    /// Runs the unmount logic. After this call the guard never writes to the
    /// store again.
    pub fn deactivate(&self) {
        if !self.mount.active.replace(false) {
            return;
        }
        if let Some(handle) = self.mount.abort.take() {
            handle.abort();
        }
        if self.mount.claimed.replace(false) {
            self.store.abandon_check();
        }
    }

    pub fn access(&self, requested: &str) -> Access {
        decide(&self.store.snapshot(), requested)
    }
}

impl<S: SessionStore, C: IdentityCheck> Drop for SessionGuard<S, C> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::{Access, SessionGuard, decide};
    use crate::app_lib::AppError;
    use crate::features::auth::{
        session::{CheckStatus, Session, SessionStore},
        test_support::{MemoryStore, ScriptedIdentity, customer, partner},
    };
    use std::rc::Rc;

    fn guard(
        store: &MemoryStore,
        identity: &Rc<ScriptedIdentity>,
    ) -> SessionGuard<MemoryStore, ScriptedIdentity> {
        SessionGuard::new(store.clone(), Rc::clone(identity))
    }

    #[test]
    fn decide_covers_every_state() {
        let pending = Session::default();
        assert_eq!(decide(&pending, "/dashboard"), Access::Loading);

        let in_flight = Session {
            user: None,
            status: CheckStatus::InFlight,
        };
        assert_eq!(decide(&in_flight, "/dashboard"), Access::Loading);

        let anonymous = Session {
            user: None,
            status: CheckStatus::Checked,
        };
        assert_eq!(
            decide(&anonymous, "/dashboard"),
            Access::Login {
                path: "/login?next=%2Fdashboard".to_string()
            }
        );

        let denied = Session {
            user: Some(customer()),
            status: CheckStatus::Checked,
        };
        assert_eq!(decide(&denied, "/dashboard"), Access::Denied);

        let granted = Session {
            user: Some(partner()),
            status: CheckStatus::Checked,
        };
        assert_eq!(decide(&granted, "/dashboard"), Access::Granted);
    }

    #[test]
    fn granted_survives_navigation_and_profile_refresh() {
        let store = MemoryStore::default();
        store.login(partner());
        let identity = Rc::new(ScriptedIdentity::default());
        let guard = guard(&store, &identity);

        let before = guard.access("/dashboard");
        assert_eq!(before, Access::Granted);
        assert_eq!(guard.access("/pagamentos"), before);
        assert_eq!(guard.access("/analytics?period=year"), before);

        let mut refreshed = partner();
        refreshed.full_name = Some("Ana Paula".to_string());
        store.login(refreshed);
        assert_eq!(guard.access("/pagamentos"), before);
        assert!(guard.activate().is_none());
        assert_eq!(identity.calls(), 0);
    }

    #[test]
    fn sign_out_leads_to_a_single_login_redirect() {
        let store = MemoryStore::default();
        store.login(partner());
        let identity = Rc::new(ScriptedIdentity::default());
        let guard = guard(&store, &identity);

        store.logout();

        let redirect = Access::Login {
            path: "/login?next=%2Fpagamentos".to_string(),
        };
        assert_eq!(guard.access("/pagamentos"), redirect);
        assert!(guard.activate().is_none());
        assert_eq!(guard.access("/pagamentos"), redirect);
        assert_eq!(identity.calls(), 0);
    }

    #[tokio::test]
    async fn empty_store_issues_one_check_before_deciding() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let reply = identity.next_reply();
        let guard = guard(&store, &identity);

        let task = guard.activate().expect("first activation claims the check");
        assert_eq!(guard.access("/dashboard"), Access::Loading);

        reply.send(Ok(partner())).expect("check is waiting");
        task.await;

        assert_eq!(identity.calls(), 1);
        assert_eq!(guard.access("/dashboard"), Access::Granted);
    }

    #[tokio::test]
    async fn partner_reaches_terminal_state() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let reply = identity.next_reply();
        let guard = guard(&store, &identity);

        let task = guard.activate().expect("claims the check");
        reply.send(Ok(partner())).expect("check is waiting");
        task.await;

        let writes = store.writes();
        for _ in 0..3 {
            assert!(guard.activate().is_none());
            assert_eq!(guard.access("/dashboard"), Access::Granted);
        }
        assert_eq!(identity.calls(), 1);
        assert_eq!(store.writes(), writes);
    }

    #[tokio::test]
    async fn non_partner_is_denied_without_login_redirect() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let reply = identity.next_reply();
        let guard = guard(&store, &identity);

        let task = guard.activate().expect("claims the check");
        reply.send(Ok(customer())).expect("check is waiting");
        task.await;

        assert_eq!(guard.access("/payments"), Access::Denied);
        assert!(store.snapshot().is_checked());
    }

    #[tokio::test]
    async fn network_failure_redirects_with_requested_location() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let reply = identity.next_reply();
        let guard = guard(&store, &identity);

        let task = guard.activate().expect("claims the check");
        reply
            .send(Err(AppError::Network("connection reset".to_string())))
            .expect("check is waiting");
        task.await;

        assert_eq!(
            guard.access("/analytics?period=week"),
            Access::Login {
                path: "/login?next=%2Fanalytics%3Fperiod%3Dweek".to_string()
            }
        );
        let session = store.snapshot();
        assert!(session.is_checked());
        assert_eq!(session.user, None);
    }

    #[tokio::test]
    async fn unauthorized_and_server_errors_are_treated_alike() {
        for error in [
            AppError::Http {
                status: 401,
                message: "Not authenticated".to_string(),
            },
            AppError::Http {
                status: 503,
                message: "Unavailable".to_string(),
            },
            AppError::Parse("missing field `is_influencer`".to_string()),
        ] {
            let store = MemoryStore::default();
            let identity = Rc::new(ScriptedIdentity::default());
            let reply = identity.next_reply();
            let guard = guard(&store, &identity);

            let task = guard.activate().expect("claims the check");
            reply.send(Err(error)).expect("check is waiting");
            task.await;

            assert!(matches!(guard.access("/ranking"), Access::Login { .. }));
            assert!(guard.activate().is_none());
            assert_eq!(identity.calls(), 1);
        }
    }

    #[tokio::test]
    async fn cached_user_skips_the_check() {
        let store = MemoryStore::default();
        store.login(partner());
        let identity = Rc::new(ScriptedIdentity::default());
        let guard = guard(&store, &identity);

        assert!(guard.activate().is_none());
        assert_eq!(identity.calls(), 0);
        assert_eq!(guard.access("/dashboard"), Access::Granted);
    }

    #[tokio::test]
    async fn cached_user_without_check_status_never_shows_loading() {
        let store = MemoryStore::with_session(Session {
            user: Some(partner()),
            status: CheckStatus::Pending,
        });
        let identity = Rc::new(ScriptedIdentity::default());
        let guard = guard(&store, &identity);

        assert_eq!(guard.access("/dashboard"), Access::Granted);
        assert!(guard.activate().is_none());
        assert_eq!(identity.calls(), 0);
        assert!(store.snapshot().is_checked());
    }

    #[tokio::test]
    async fn result_after_unmount_is_discarded() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let reply = identity.next_reply();
        let guard = guard(&store, &identity);

        let mut task = Box::pin(guard.activate().expect("claims the check"));
        assert!(futures_util::poll!(task.as_mut()).is_pending());
        assert_eq!(identity.calls(), 1);

        guard.deactivate();
        let writes = store.writes();

        let _ = reply.send(Ok(partner()));
        task.await;

        assert_eq!(store.writes(), writes);
        assert_eq!(store.snapshot().user, None);
        assert_eq!(store.snapshot().status, CheckStatus::Pending);
        assert!(guard.activate().is_none());
    }

    #[tokio::test]
    async fn repeated_activation_keeps_one_outstanding_check() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let reply = identity.next_reply();
        let first = guard(&store, &identity);
        let second = guard(&store, &identity);

        let task = first.activate().expect("claims the check");
        assert!(first.activate().is_none());
        assert!(second.activate().is_none());
        assert_eq!(store.snapshot().status, CheckStatus::InFlight);

        reply.send(Ok(partner())).expect("check is waiting");
        task.await;

        assert_eq!(identity.calls(), 1);
        assert_eq!(first.access("/dashboard"), Access::Granted);
        assert_eq!(second.access("/dashboard"), Access::Granted);
    }

    #[tokio::test]
    async fn remount_after_abandoned_check_asks_again() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let stale_reply = identity.next_reply();
        let fresh_reply = identity.next_reply();

        let first = guard(&store, &identity);
        let mut stale = Box::pin(first.activate().expect("first mount claims"));
        assert!(futures_util::poll!(stale.as_mut()).is_pending());
        first.deactivate();

        let second = guard(&store, &identity);
        let fresh = second.activate().expect("second mount claims after release");

        let _ = stale_reply.send(Ok(customer()));
        stale.await;
        assert_eq!(second.access("/dashboard"), Access::Loading);

        fresh_reply.send(Ok(partner())).expect("check is waiting");
        fresh.await;

        assert_eq!(identity.calls(), 2);
        assert_eq!(second.access("/dashboard"), Access::Granted);
    }

    #[tokio::test]
    async fn dropping_the_guard_releases_its_claim() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let reply = identity.next_reply();

        let first = guard(&store, &identity);
        let mut task = Box::pin(first.activate().expect("claims the check"));
        assert!(futures_util::poll!(task.as_mut()).is_pending());
        drop(first);
        assert_eq!(store.snapshot().status, CheckStatus::Pending);

        let writes = store.writes();
        let _ = reply.send(Ok(partner()));
        task.await;
        assert_eq!(store.writes(), writes);
    }

    #[tokio::test]
    async fn deactivate_is_idempotent() {
        let store = MemoryStore::default();
        let identity = Rc::new(ScriptedIdentity::default());
        let guard = guard(&store, &identity);

        guard.deactivate();
        guard.deactivate();
        assert!(guard.activate().is_none());
        assert_eq!(store.writes(), 0);
        assert_eq!(identity.calls(), 0);
    }
}
