//! Layout components shared across protected routes.

mod app_shell;
mod sidebar;

pub(crate) use app_shell::AppShell;
pub(crate) use sidebar::Sidebar;
