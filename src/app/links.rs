use leptos::prelude::*;

use crate::profile::{Icon, LinkTarget, Profile};
use crate::view_state::{HoverKey, LinkGroup, ViewState};

use super::icons::Glyph;

const LINK_STAGGER_MS: usize = 100;
const PROJECT_STAGGER_MS: usize = 200;

fn stagger(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms", index * step_ms)
}

/// One gradient button per link of `group`, in table order.
#[component]
pub fn LinkList(group: LinkGroup) -> impl IntoView {
    let profile = expect_context::<&'static Profile>();
    let state = expect_context::<RwSignal<ViewState>>();

    view! {
        <div class="space-y-4">
            {profile
                .links(group)
                .iter()
                .enumerate()
                .map(|(index, link)| {
                    let key = HoverKey { group, index };
                    let target = LinkTarget::for_url(&link.url);
                    let icon_class = Signal::derive(move || {
                        let hovered = state.with(|s| s.is_hovered(key));
                        format!(
                            "w-6 h-6 mr-3 transition-transform duration-300{}",
                            if hovered { " rotate-12 scale-110" } else { "" },
                        )
                    });
                    view! {
                        <a
                            href=link.url.as_str()
                            target=target.target()
                            rel=target.rel()
                            style=stagger(index, LINK_STAGGER_MS)
                            class=format!(
                                "block w-full p-3 rounded-xl bg-gradient-to-r {} text-white font-semibold transition-all duration-300 hover:scale-105 hover:shadow-xl flex items-center justify-center group animate-rise",
                                link.accent,
                            )
                            on:mouseenter=move |_| {
                                state.update(|s| {
                                    s.hover_enter(profile, key);
                                })
                            }
                            on:mouseleave=move |_| state.update(|s| s.hover_leave(key))
                        >
                            <Glyph icon=link.icon class=icon_class />
                            {link.label.as_str()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Portfolio cards. Every project opens in a new tab and ignores hover state.
#[component]
pub fn ProjectList() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();
    let state = expect_context::<RwSignal<ViewState>>();
    let palette = move || state.with(|s| s.theme().palette());

    view! {
        <div class="space-y-4">
            {profile
                .projects
                .iter()
                .enumerate()
                .map(|(index, project)| {
                    view! {
                        <a
                            href=project.url.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            style=stagger(index, PROJECT_STAGGER_MS)
                            class=move || {
                                format!(
                                    "block rounded-xl p-4 flex items-center transition-all duration-300 hover:scale-105 group animate-slide {}",
                                    palette().project_card,
                                )
                            }
                        >
                            <div class="bg-gradient-to-r from-cyan-500 to-blue-600 p-3 rounded-lg mr-4">
                                <Glyph
                                    icon=project.icon
                                    class=Signal::derive(|| "w-6 h-6 text-white".to_string())
                                />
                            </div>
                            <div class="flex-grow">
                                <h3 class=move || {
                                    format!("font-bold {}", palette().project_title)
                                }>{project.title.as_str()}</h3>
                                <p class=move || {
                                    format!("text-sm {}", palette().muted)
                                }>{project.description.as_str()}</p>
                            </div>
                            <Glyph
                                icon=Icon::ExternalLink
                                class=Signal::derive(move || {
                                    format!("w-5 h-5 shrink-0 transition-colors {}", palette().muted)
                                })
                            />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
