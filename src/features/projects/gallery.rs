//! Render contract for the project grid: one [`Card`] per descriptor, in list
//! order, keyed by title. The Leptos grid maps these one-to-one onto card
//! components, so everything a card shows or links to is decided here.

use super::ProjectDescriptor;
use crate::features::theme::Theme;
use crate::styles::Styles;

/// Anchor attributes for a link that opens in a new, unrelated browsing
/// context. `noopener` keeps the opened page from reaching `window.opener`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTarget {
    pub href: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

impl LinkTarget {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";

    pub fn external(href: &'static str) -> Self {
        Self {
            href,
            target: Self::TARGET,
            rel: Self::REL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardClasses {
    pub card: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub icon: &'static str,
    pub tag: &'static str,
}

impl CardClasses {
    fn for_theme(theme: Theme) -> Self {
        Self {
            card: Styles::card(theme),
            title: Styles::card_title(theme),
            tagline: Styles::card_tagline(theme),
            icon: Styles::card_icon(theme),
            tag: Styles::tag_pill(theme),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub key: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub tags: &'static [&'static str],
    pub preview: Option<&'static str>,
    pub link: LinkTarget,
    pub classes: CardClasses,
}

impl Card {
    fn new(project: &ProjectDescriptor, classes: CardClasses) -> Self {
        Card {
            key: project.title,
            title: project.title,
            tagline: project.tagline,
            tags: project.tags,
            preview: project.preview(),
            link: LinkTarget::external(project.url),
            classes,
        }
    }
}

/// Builds the card for a single project under `theme`.
pub fn card(project: &ProjectDescriptor, theme: Theme) -> Card {
    Card::new(project, CardClasses::for_theme(theme))
}

/// Builds the cards for `projects` under `theme`, in list order.
pub fn cards(projects: &[ProjectDescriptor], theme: Theme) -> Vec<Card> {
    let classes = CardClasses::for_theme(theme);
    projects
        .iter()
        .map(|project| Card::new(project, classes))
        .collect()
}
