//! Tailwind class strings shared by the page so cards, pills and chrome stay
//! visually consistent. Theme-dependent styling is selected here from the
//! current [`Theme`]; views never branch on the theme themselves.

use crate::features::theme::Theme;

pub struct Styles;

impl Styles {
    /// Page content column.
    pub const CONTAINER: &'static str = "max-w-5xl mx-auto px-5 py-10";

    /// Responsive grid with equal row heights.
    pub const GRID: &'static str =
        "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 [grid-auto-rows:1fr]";

    /// Wrapper giving every tile the same minimum height.
    pub const GRID_CELL: &'static str = "min-h-[180px]";

    /// Card shell; the `group` class lets children react to hover.
    pub fn card(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "group h-full rounded-2xl border border-zinc-200 bg-white/70 backdrop-blur-sm shadow-sm hover:shadow-md transition-shadow flex flex-col p-5",
            Theme::Dark => "group h-full rounded-2xl border border-zinc-800 bg-zinc-900/60 backdrop-blur-sm shadow-sm hover:shadow-md transition-shadow flex flex-col p-5",
            Theme::Solar => "group h-full rounded-2xl border border-amber-200 bg-amber-50/70 backdrop-blur-sm shadow-sm hover:shadow-md transition-shadow flex flex-col p-5",
        }
    }

    pub fn card_title(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "text-base font-semibold text-zinc-900",
            Theme::Dark => "text-base font-semibold text-zinc-100",
            Theme::Solar => "text-base font-semibold text-slate-700",
        }
    }

    pub fn card_tagline(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "mt-2 text-sm text-zinc-600",
            Theme::Dark => "mt-2 text-sm text-zinc-300",
            Theme::Solar => "mt-2 text-sm text-slate-600",
        }
    }

    /// Outbound-link icon that brightens on card hover.
    pub fn card_icon(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "size-4 text-zinc-500 group-hover:text-zinc-700 transition-colors",
            Theme::Dark => "size-4 text-zinc-400 group-hover:text-zinc-200 transition-colors",
            Theme::Solar => "size-4 text-amber-600 group-hover:text-amber-800 transition-colors",
        }
    }

    pub fn tag_pill(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "text-[11px] leading-none px-2 py-1 rounded-full border border-zinc-200 text-zinc-600",
            Theme::Dark => "text-[11px] leading-none px-2 py-1 rounded-full border border-zinc-700 text-zinc-300",
            Theme::Solar => "text-[11px] leading-none px-2 py-1 rounded-full border border-amber-300 text-slate-600",
        }
    }

    pub fn heading(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "text-2xl font-bold tracking-tight text-zinc-900",
            Theme::Dark => "text-2xl font-bold tracking-tight text-zinc-100",
            Theme::Solar => "text-2xl font-bold tracking-tight text-slate-700",
        }
    }

    /// Secondary text and links in the header, top bar and footer.
    pub fn muted(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "text-sm text-zinc-600 hover:text-zinc-900",
            Theme::Dark => "text-sm text-zinc-400 hover:text-zinc-100",
            Theme::Solar => "text-sm text-slate-500 hover:text-slate-800",
        }
    }

    pub fn toggle_button(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "inline-flex items-center gap-2 rounded-full border border-zinc-200 px-3 py-1.5 text-sm hover:bg-zinc-100 transition-colors",
            Theme::Dark => "inline-flex items-center gap-2 rounded-full border border-zinc-800 px-3 py-1.5 text-sm hover:bg-zinc-800 transition-colors",
            Theme::Solar => "inline-flex items-center gap-2 rounded-full border border-amber-200 px-3 py-1.5 text-sm hover:bg-amber-100 transition-colors",
        }
    }

    pub fn footer(theme: Theme) -> &'static str {
        match theme {
            Theme::Light => "mt-12 border-t border-zinc-200 pt-6",
            Theme::Dark => "mt-12 border-t border-zinc-800 pt-6",
            Theme::Solar => "mt-12 border-t border-amber-200 pt-6",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Styles;
    use crate::features::theme::Theme;

    #[test]
    fn card_keeps_hover_group_in_every_theme() {
        for theme in Theme::ALL {
            assert!(Styles::card(theme).starts_with("group "));
        }
    }

    #[test]
    fn themes_get_distinct_card_treatment() {
        assert_ne!(Styles::card(Theme::Light), Styles::card(Theme::Dark));
        assert_ne!(Styles::card(Theme::Dark), Styles::card(Theme::Solar));
    }
}
