//! Page components. Every component reads the theme through `use_theme` and
//! takes its classes from `Styles`, so switching themes only changes signals.

pub(crate) mod layout;
pub(crate) mod projects;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use projects::{ProjectGrid, ProjectsHeader};
