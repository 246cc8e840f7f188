//! Public landing page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AUTH_PATH, AuthState};
use crate::util::auth::install_signed_in_redirect;

/// Landing page. Visitors with an active session are sent to the dashboard;
/// everyone else sees the hero and feature tiles.
#[component]
pub fn IndexPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_signed_in_redirect(auth, use_navigate());

    view! {
        <div class="landing-page">
            <section class="landing-page__hero">
                <h1 class="landing-page__title">"NeoCura"</h1>
                <p class="landing-page__tagline">"Your Health-Tracking Buddy"</p>
                <p class="landing-page__lead">
                    "Track your fitness journey with ease. Log workouts, monitor calories, "
                    "and achieve your health goals with NeoCura."
                </p>
                <div class="landing-page__actions">
                    <a href=AUTH_PATH class="btn btn--primary btn--large">"Get Started"</a>
                    <a href=AUTH_PATH class="btn btn--outline btn--large">"Login"</a>
                </div>
            </section>
            <section class="landing-page__features">
                <FeatureTile
                    title="Track Workouts"
                    body="Log your exercises, duration, and calories burned with ease"
                />
                <FeatureTile
                    title="Monitor Progress"
                    body="View your fitness stats and track your health journey"
                />
                <FeatureTile
                    title="Achieve Goals"
                    body="Stay motivated with real-time insights and analytics"
                />
            </section>
        </div>
    }
}

#[component]
fn FeatureTile(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="feature-tile">
            <h3 class="feature-tile__title">{title}</h3>
            <p class="feature-tile__body">{body}</p>
        </div>
    }
}
