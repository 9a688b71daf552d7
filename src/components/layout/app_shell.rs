//! Page chrome: themed root, the top bar with the owner link and theme toggle,
//! and the footer. The root carries `data-theme` and the theme class, and the
//! main element cross-fades between palettes.

use crate::build_info;
use crate::components::ui::ThemeToggle;
use crate::config::AppConfig;
use crate::features::projects::LinkTarget;
use crate::features::theme::context::use_theme;
use crate::motion::MotionConfig;
use crate::styles::Styles;
use leptos::prelude::*;

/// Wraps page content with the themed root, top bar and footer.
#[component]
pub fn AppShell(config: AppConfig, children: Children) -> impl IntoView {
    let context = use_theme();
    let theme = context.theme;
    let motion = MotionConfig::PAGE.for_motion_preference(context.reduced_motion);
    let transition = motion.transition(&["background-color", "color"]);
    let main_style = move || {
        let palette = theme.get().palette();
        format!(
            "background-color: {}; color: {}; transition: {transition};",
            palette.background, palette.foreground
        )
    };
    let year = js_sys::Date::new_0().get_full_year();
    let AppConfig {
        owner_handle,
        profile_url,
        ..
    } = config;
    let footer_url = profile_url.clone();

    view! {
        <div
            class=move || theme.get().root_class().unwrap_or_default()
            data-theme=move || theme.get().as_str()
        >
            <main class="min-h-dvh" style=main_style>
                <div class=Styles::CONTAINER>
                    <div class="flex items-center justify-between">
                        <a
                            href=profile_url
                            target=LinkTarget::TARGET
                            rel=LinkTarget::REL
                            class=move || Styles::muted(theme.get())
                        >
                            {owner_handle}
                        </a>
                        <ThemeToggle />
                    </div>
                    {children()}
                    <footer class=move || Styles::footer(theme.get())>
                        <a
                            href=footer_url
                            target=LinkTarget::TARGET
                            rel=LinkTarget::REL
                            class=move || Styles::muted(theme.get())
                        >
                            "github"
                        </a>
                        <div class="mt-2 text-xs opacity-70">
                            {format!("© {year} · {}", build_info::short_commit_hash())}
                        </div>
                    </footer>
                </div>
            </main>
        </div>
    }
}
