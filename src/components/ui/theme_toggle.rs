//! The page's single input control. A click toggles the theme; holding Shift
//! passes the modifier, which the extended profile uses for the solar pair.

use crate::features::theme::{context::use_theme, ThemeProfile};
use crate::styles::Styles;
use leptos::{ev::MouseEvent, prelude::*};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let context = use_theme();
    let theme = context.theme;
    let hint = (context.profile == ThemeProfile::Extended).then_some("Shift+click for solar");

    view! {
        <button
            type="button"
            aria-label="Toggle theme"
            title=hint
            class=move || Styles::toggle_button(theme.get())
            on:click=move |event: MouseEvent| context.toggle(event.shift_key())
        >
            <span class="size-4 leading-none" aria-hidden="true">
                {move || theme.get().toggle_glyph()}
            </span>
            {move || theme.get().toggle_label()}
        </button>
    }
}
