use leptos::prelude::*;

#[component]
pub fn TagPill(label: &'static str, #[prop(into)] class: Signal<&'static str>) -> impl IntoView {
    view! { <span class=move || class.get()>{label}</span> }
}
