//! Shared UI components exported for routes and features.

mod access_denied;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use access_denied::AccessDenied;
pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, Button, Card, CopyButton, Spinner, StatCard};
