//! Layout components shared across the page.

mod app_shell;

pub(crate) use app_shell::AppShell;
