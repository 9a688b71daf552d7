use leptos::prelude::*;

/// Arrow-out-of-box glyph marking links that open in a new tab.
#[component]
pub fn ExternalLinkIcon(#[prop(into)] class: Signal<&'static str>) -> impl IntoView {
    view! {
        <svg
            class=move || class.get()
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M15 3h6v6"></path>
            <path d="M10 14 21 3"></path>
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path>
        </svg>
    }
}
