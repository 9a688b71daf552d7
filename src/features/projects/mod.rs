//! Static project catalog and the card model the gallery renders from it.

pub(crate) mod catalog;
pub(crate) mod gallery;
pub(crate) mod types;

pub use catalog::{validate, PROJECTS};
pub use gallery::{card, cards, Card, CardClasses, LinkTarget};
pub use types::ProjectDescriptor;
