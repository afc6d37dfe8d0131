use leptos::prelude::*;

use crate::profile::Profile;
use crate::view_state::{Section, ViewState};

use super::theme::ThemeToggle;

#[component]
pub fn SectionNavigator() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();
    let state = expect_context::<RwSignal<ViewState>>();
    let palette = move || state.with(|s| s.theme().palette());

    view! {
        <nav class=move || format!("flex border-b {}", palette().nav_border)>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    let is_active = move || state.with(|s| s.active() == section);
                    view! {
                        <button
                            type="button"
                            data-section=section.slug()
                            class=move || {
                                let p = palette();
                                format!(
                                    "flex-1 p-3 text-center transition-all duration-300 {}",
                                    if is_active() { p.nav_active } else { p.nav_idle },
                                )
                            }
                            aria-current=move || is_active().then_some("page")
                            on:click=move |_| state.update(|s| s.select(section))
                        >
                            {profile.sections.label(section)}
                        </button>
                    }
                })
                .collect_view()}
            {profile.theme_toggle.then(|| view! { <ThemeToggle /> })}
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_nav(active: Section) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let profile: &'static Profile =
                Box::leak(Box::new(Profile::load().expect("embedded profile should parse")));
            let mut state = ViewState::new();
            state.select(active);
            provide_context(profile);
            provide_context(RwSignal::new(state));
            view! { <SectionNavigator /> }.to_html()
        })
    }

    #[test]
    fn test_exactly_one_entry_is_active() {
        for section in Section::ALL {
            let html = render_nav(section);
            assert_eq!(html.matches("aria-current=\"page\"").count(), 1, "{html}");
            assert_eq!(html.matches("<button").count(), 4, "{html}");
            let marker = format!("data-section=\"{}\"", section.slug());
            let button_start = html.find(&marker).expect("section button rendered");
            let active_at = html.find("aria-current").expect("active marker rendered");
            // the active marker belongs to the same button as the data-section
            let next_button = html[button_start..]
                .find("<button")
                .map(|i| button_start + i)
                .unwrap_or(html.len());
            assert!(active_at > button_start && active_at < next_button, "{html}");
        }
    }

    #[test]
    fn test_entries_in_fixed_order() {
        let html = render_nav(Section::Profile);
        let positions = Section::ALL
            .iter()
            .map(|s| {
                html.find(&format!("data-section=\"{}\"", s.slug()))
                    .expect("every section has a button")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
