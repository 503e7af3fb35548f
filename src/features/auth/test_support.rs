//! Shared fakes for session and guard tests.

use crate::app_lib::AppError;
use crate::features::auth::{
    guard::IdentityCheck,
    session::{Session, SessionStore},
    types::UserProfile,
};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    future::Future,
    rc::Rc,
};
use tokio::sync::oneshot;

/// In-memory store that counts every write, standing in for the signal store.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    session: Rc<RefCell<Session>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub(crate) fn with_session(session: Session) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            writes: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SessionStore for MemoryStore {
    fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    fn replace(&self, session: Session) {
        self.writes.set(self.writes.get() + 1);
        *self.session.borrow_mut() = session;
    }
}

pub(crate) type IdentityReply = Result<UserProfile, AppError>;

/// Identity check whose replies are delivered by the test through channels.
#[derive(Default)]
pub(crate) struct ScriptedIdentity {
    calls: Cell<usize>,
    replies: RefCell<VecDeque<oneshot::Receiver<IdentityReply>>>,
}

impl ScriptedIdentity {
    /// Queues the reply for the next call and returns its sender.
    pub(crate) fn next_reply(&self) -> oneshot::Sender<IdentityReply> {
        let (sender, receiver) = oneshot::channel();
        self.replies.borrow_mut().push_back(receiver);
        sender
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl IdentityCheck for ScriptedIdentity {
    fn current_user(&self) -> impl Future<Output = IdentityReply> {
        self.calls.set(self.calls.get() + 1);
        let reply = self.replies.borrow_mut().pop_front();
        async move {
            match reply {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(AppError::Network("reply dropped".to_string()))),
                None => Err(AppError::Network("no scripted reply".to_string())),
            }
        }
    }
}

pub(crate) fn partner() -> UserProfile {
    UserProfile {
        id: 7,
        email: "ana@moodverse.com.br".to_string(),
        full_name: Some("Ana Souza".to_string()),
        phone: None,
        is_influencer: true,
        influencer_profile: None,
    }
}

pub(crate) fn customer() -> UserProfile {
    UserProfile {
        id: 8,
        email: "bruno@example.com".to_string(),
        full_name: None,
        phone: None,
        is_influencer: false,
        influencer_profile: None,
    }
}
