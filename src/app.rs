use crate::components::{AppShell, ProjectGrid, ProjectsHeader};
use crate::config::AppConfig;
use crate::features::projects::PROJECTS;
use crate::features::theme::context::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let profile = config.theme_profile;

    view! {
        <ThemeProvider profile>
            <AppShell config>
                <ProjectsHeader />
                <ProjectGrid projects=PROJECTS />
            </AppShell>
        </ThemeProvider>
    }
}
