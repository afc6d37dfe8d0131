use leptos::prelude::*;

use crate::profile::Icon;

/// Inline stroke icon. `class` may change with hover or theme.
#[component]
pub fn Glyph(icon: Icon, class: Signal<String>) -> impl IntoView {
    view! {
        <svg
            data-icon=icon.slug()
            class=move || class.get()
            viewBox="0 0 24 24"
            width="24"
            height="24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path() />
        </svg>
    }
}
