pub mod projects;
pub mod theme;
