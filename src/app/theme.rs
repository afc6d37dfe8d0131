use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::theme::Theme;
use crate::view_state::ViewState;

/// Feeds the host's `prefers-color-scheme` into the page state.
///
/// Effects only run in the browser, so a server render keeps the default
/// dark theme and the hydrated page switches once the media query answers.
pub fn use_ambient_theme(state: RwSignal<ViewState>) {
    let prefers_dark = use_preferred_dark();
    Effect::watch(
        move || prefers_dark.get(),
        move |prefers_dark, _, _| {
            let theme = Theme::from_prefers_dark(*prefers_dark);
            state.update(|s| s.adopt_ambient(Some(theme)));
        },
        true,
    );
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let theme = move || state.with(|s| s.theme());

    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "px-4 transition-colors duration-300 {}",
                    theme().palette().toggle,
                )
            }
            aria-label=move || format!("Switch to {} theme", theme().toggled().name())
            data-theme=move || theme().name()
            on:click=move |_| state.update(ViewState::toggle_theme)
        >
            {move || match theme() {
                Theme::Dark => "☀",
                Theme::Light => "☾",
            }}
        </button>
    }
}
