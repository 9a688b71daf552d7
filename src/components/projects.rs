//! Project header and grid. The grid renders every catalog entry immediately,
//! keyed by title; each card re-styles itself when the theme changes and keeps
//! its link untouched.

use crate::components::ui::{ExternalLinkIcon, TagPill};
use crate::features::projects::{card, ProjectDescriptor};
use crate::features::theme::context::use_theme;
use crate::motion::MotionConfig;
use crate::styles::Styles;
use leptos::prelude::*;

#[component]
pub fn ProjectsHeader() -> impl IntoView {
    let theme = use_theme().theme;

    view! {
        <header class="mt-8">
            <h1 class=move || Styles::heading(theme.get())>"Projects"</h1>
            <p class=move || format!("mt-1 {}", Styles::muted(theme.get()))>
                "Clean tiles with quick tags. Click to open."
            </p>
        </header>
    }
}

#[component]
pub fn ProjectGrid(projects: &'static [ProjectDescriptor]) -> impl IntoView {
    view! {
        <section class="mt-6">
            <div class=Styles::GRID>
                <For
                    each=move || projects.iter().copied()
                    key=|project| project.title
                    children=move |project| {
                        view! {
                            <div class=Styles::GRID_CELL>
                                <ProjectCard project />
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}

/// One outbound tile. Fades and slides in after mount unless reduced motion is
/// requested, in which case it renders in its final state.
#[component]
fn ProjectCard(project: ProjectDescriptor) -> impl IntoView {
    let context = use_theme();
    let theme = context.theme;
    let initial = card(&project, theme.get_untracked());
    let classes = Memo::new(move |_| card(&project, theme.get()).classes);

    let motion = MotionConfig::CARD.for_motion_preference(context.reduced_motion);
    let (entered, set_entered) = signal(motion.disabled);
    if !motion.disabled {
        request_animation_frame(move || {
            request_animation_frame(move || set_entered.set(true));
        });
    }
    let transition = motion.transition(&["opacity", "transform"]);
    let style = move || {
        let (opacity, offset) = if entered.get() { (1, 0) } else { (0, 8) };
        format!("opacity: {opacity}; transform: translateY({offset}px); transition: {transition};")
    };

    view! {
        <a
            href=initial.link.href
            target=initial.link.target
            rel=initial.link.rel
            class=move || classes.get().card
            style=style
        >
            <div class="flex items-start justify-between gap-4">
                <h3 class=move || classes.get().title>{initial.title}</h3>
                <ExternalLinkIcon class=Signal::derive(move || classes.get().icon) />
            </div>
            <p class=move || classes.get().tagline>{initial.tagline}</p>
            {initial
                .preview
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=format!("{} preview", initial.title)
                            class="mt-3 rounded-lg"
                            loading="eager"
                        />
                    }
                })}
            <div class="mt-3 flex flex-wrap gap-2">
                {initial
                    .tags
                    .iter()
                    .map(|label| {
                        view! {
                            <TagPill label=*label class=Signal::derive(move || classes.get().tag) />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-auto"></div>
        </a>
    }
}
