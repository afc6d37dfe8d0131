use leptos::{either::EitherOf3, prelude::*};
use leptos_meta::Title;

use crate::profile::{Profile, SectionContent, PROFILE};
use crate::view_state::{LinkGroup, ViewState};

use super::links::{LinkList, ProjectList};
use super::navigator::SectionNavigator;
use super::particles::ParticleField;
use super::theme::use_ambient_theme;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile: &'static Profile = &PROFILE;
    let state = RwSignal::new(ViewState::new());
    provide_context(profile);
    provide_context(state);
    use_ambient_theme(state);

    view! { <PageBody /> }
}

/// Everything under the page, driven by the profile and state in context.
#[component]
fn PageBody() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();
    let state = expect_context::<RwSignal<ViewState>>();
    let palette = move || state.with(|s| s.theme().palette());
    // hover changes must not rebuild the section body under the pointer
    let active = Memo::new(move |_| state.with(|s| s.active()));

    view! {
        <Title text=move || profile.sections.label(active.get()).to_string() />
        <div class=move || {
            format!(
                "min-h-screen bg-gradient-to-br flex items-center justify-center p-4 {}",
                palette().page,
            )
        }>
            <ParticleField count=profile.particle_count() />
            <div class=move || {
                format!(
                    "w-full max-w-md backdrop-blur-xl rounded-3xl shadow-2xl border relative z-10 {}",
                    palette().card,
                )
            }>
                <SectionNavigator />
                <div class="p-6" data-active=move || active.get().slug()>
                    {move || match profile.content(active.get()) {
                        SectionContent::Profile(_) => {
                            EitherOf3::A(
                                view! {
                                    <div class="text-center">
                                        <ProfileHeader />
                                        <LinkList group=LinkGroup::Social />
                                    </div>
                                },
                            )
                        }
                        SectionContent::Portfolio(_) => {
                            EitherOf3::B(
                                view! {
                                    <div>
                                        <SectionHeading text=profile.portfolio_heading.as_str() />
                                        <ProjectList />
                                    </div>
                                },
                            )
                        }
                        SectionContent::Contact(_) => {
                            EitherOf3::C(
                                view! {
                                    <div>
                                        <SectionHeading text=profile.contact_heading.as_str() />
                                        <LinkList group=LinkGroup::Contact />
                                    </div>
                                },
                            )
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProfileHeader() -> impl IntoView {
    let profile = expect_context::<&'static Profile>();
    let state = expect_context::<RwSignal<ViewState>>();
    let palette = move || state.with(|s| s.theme().palette());

    view! {
        <img
            src=profile.avatar.as_str()
            alt=profile.avatar_alt.as_str()
            class="mx-auto w-32 h-32 rounded-full border-4 border-white shadow-lg mb-4 transition-all duration-300 hover:scale-110 hover:rotate-6"
        />
        <h1 class=move || {
            format!("text-3xl font-bold mb-2 {}", palette().heading)
        }>{profile.name.as_str()}</h1>
        <p class=move || format!("mb-6 {}", palette().body)>{profile.tagline.as_str()}</p>
    }
}

#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    (!text.is_empty())
        .then(|| {
            view! {
                <h2 class=move || {
                    format!(
                        "text-2xl font-bold mb-6 text-center {}",
                        state.with(|s| s.theme().palette().heading),
                    )
                }>{text}</h2>
            }
        })
}
