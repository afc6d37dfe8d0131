use leptos::prelude::*;

use crate::particles::generate;
use crate::view_state::ViewState;

/// Background specks. Drawn once per mount in a layer that takes no space and
/// no pointer events.
#[component]
pub fn ParticleField(count: usize) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();
    let particle_class = move || {
        format!(
            "absolute rounded-full animate-float {}",
            state.with(|s| s.theme().palette().particle),
        )
    };
    let particles = generate(&mut rand::thread_rng(), count);

    view! {
        <div
            class="fixed inset-0 pointer-events-none overflow-hidden z-0 opacity-30"
            aria-hidden="true"
        >
            {particles
                .into_iter()
                .map(|p| view! { <div class=particle_class style=p.style() /> })
                .collect_view()}
        </div>
    }
}
