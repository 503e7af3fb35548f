//! Process-wide session state. The store is the single source of truth for the
//! signed-in partner; writes happen only through the actions on
//! [`SessionStore`], which the guard and the login/logout flows call. Every
//! other reader takes snapshots.

use crate::features::auth::types::UserProfile;
use tracing::debug;

/// Progress of the one-time identity check for this page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckStatus {
    /// No check has been started.
    #[default]
    Pending,
    /// Exactly one identity check is outstanding.
    InFlight,
    /// The check resolved (or login/logout decided the outcome).
    Checked,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub status: CheckStatus,
}

impl Session {
    pub fn is_checked(&self) -> bool {
        self.status == CheckStatus::Checked
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Storage seam for the session. Implementors provide a snapshot getter and a
/// setter; the provided actions encode the state transitions.
pub trait SessionStore: Clone + 'static {
    fn snapshot(&self) -> Session;

    fn replace(&self, session: Session);

    /// Claims the identity check. Returns `true` only for the caller that moved
    /// the session from `Pending` to `InFlight`; a session that already holds a
    /// user is marked `Checked` without a request.
    fn begin_check(&self) -> bool {
        let mut session = self.snapshot();
        if session.user.is_some() {
            if session.status != CheckStatus::Checked {
                session.status = CheckStatus::Checked;
                self.replace(session);
            }
            return false;
        }
        if session.status != CheckStatus::Pending {
            return false;
        }
        session.status = CheckStatus::InFlight;
        self.replace(session);
        debug!("identity check claimed");
        true
    }

    /// Commits the outcome of the in-flight check. Ignored when no check is in
    /// flight, so a late result cannot overwrite a login or logout.
    fn finish_check(&self, user: Option<UserProfile>) -> bool {
        if self.snapshot().status != CheckStatus::InFlight {
            debug!("ignoring identity result without an in-flight check");
            return false;
        }
        debug!(authenticated = user.is_some(), "identity check resolved");
        self.replace(Session {
            user,
            status: CheckStatus::Checked,
        });
        true
    }

    /// Releases an in-flight claim whose owner went away before it resolved.
    fn abandon_check(&self) {
        let mut session = self.snapshot();
        if session.status == CheckStatus::InFlight {
            session.status = CheckStatus::Pending;
            self.replace(session);
            debug!("identity check abandoned");
        }
    }

    fn login(&self, user: UserProfile) {
        self.replace(Session {
            user: Some(user),
            status: CheckStatus::Checked,
        });
    }

    /// Clears the user. The session stays `Checked` so the guard redirects to
    /// login instead of asking the backend again.
    fn logout(&self) {
        self.replace(Session {
            user: None,
            status: CheckStatus::Checked,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckStatus, Session, SessionStore};
    use crate::features::auth::test_support::{MemoryStore, partner};

    #[test]
    fn new_session_is_pending_and_anonymous() {
        let session = Session::default();
        assert_eq!(session.status, CheckStatus::Pending);
        assert!(!session.is_checked());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn begin_check_claims_once() {
        let store = MemoryStore::default();
        assert!(store.begin_check());
        assert!(!store.begin_check());
        assert_eq!(store.snapshot().status, CheckStatus::InFlight);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn begin_check_with_user_marks_checked_without_claim() {
        let store = MemoryStore::with_session(Session {
            user: Some(partner()),
            status: CheckStatus::Pending,
        });
        assert!(!store.begin_check());
        assert_eq!(store.snapshot().status, CheckStatus::Checked);

        let writes = store.writes();
        assert!(!store.begin_check());
        assert_eq!(store.writes(), writes);
    }

    #[test]
    fn finish_check_commits_only_in_flight() {
        let store = MemoryStore::default();
        assert!(!store.finish_check(Some(partner())));
        assert_eq!(store.snapshot(), Session::default());

        assert!(store.begin_check());
        assert!(store.finish_check(Some(partner())));
        let session = store.snapshot();
        assert!(session.is_checked());
        assert_eq!(session.user, Some(partner()));
    }

    #[test]
    fn late_result_does_not_clobber_logout() {
        let store = MemoryStore::default();
        assert!(store.begin_check());
        store.logout();
        assert!(!store.finish_check(Some(partner())));
        assert_eq!(store.snapshot().user, None);
    }

    #[test]
    fn abandon_returns_to_pending() {
        let store = MemoryStore::default();
        store.abandon_check();
        assert_eq!(store.writes(), 0);

        assert!(store.begin_check());
        store.abandon_check();
        assert_eq!(store.snapshot().status, CheckStatus::Pending);
        assert!(store.begin_check());
    }

    #[test]
    fn login_and_logout_decide_the_session() {
        let store = MemoryStore::default();
        store.login(partner());
        assert!(store.snapshot().is_authenticated());
        assert!(store.snapshot().is_checked());

        store.logout();
        let session = store.snapshot();
        assert!(!session.is_authenticated());
        assert!(session.is_checked());
        assert!(!store.begin_check());
    }
}
