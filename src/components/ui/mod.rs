mod external_link_icon;
mod tag_pill;
mod theme_toggle;

pub(crate) use external_link_icon::ExternalLinkIcon;
pub(crate) use tag_pill::TagPill;
pub(crate) use theme_toggle::ThemeToggle;
