//! Dashboard page: stats, workout form and workout list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it fires the session
//! check, the profile fetch and the workout fetch as independent tasks; the
//! page leaves `Loading` as soon as the session check answers. Every
//! mutation is followed by a toast and, on success, a full re-fetch.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::components::stat_card::StatCard;
use crate::components::workout_form::WorkoutForm;
use crate::components::workout_list::WorkoutList;
use crate::net::types::{Workout, WorkoutInput};
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, Mutation};
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let dashboard = RwSignal::new(DashboardState::default());

    install_unauth_redirect(auth, use_navigate());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_session().await;
            auth.update(|a| a.resolve(user));
            dashboard.update(DashboardState::session_resolved);
        });
        leptos::task::spawn_local(async move {
            let profile = crate::net::api::fetch_profile().await;
            dashboard.update(|d| d.apply_profile(profile));
        });
        leptos::task::spawn_local(refresh_workouts(dashboard, toasts));
    }

    let stats = Memo::new(move |_| dashboard.with(DashboardState::stats));
    let workouts = Memo::new(move |_| dashboard.with(|d| d.workouts.clone()));
    let editing = Memo::new(move |_| dashboard.with(|d| d.editing.clone()));

    let on_submit = Callback::new(move |input: WorkoutInput| {
        let mutation = dashboard.with_untracked(|d| d.plan_submit(input));
        run_mutation(dashboard, toasts, mutation);
    });
    let on_cancel = Callback::new(move |()| dashboard.update(DashboardState::cancel_edit));
    let on_edit = Callback::new(move |workout: Workout| dashboard.update(|d| d.start_edit(workout)));
    let on_delete = Callback::new(move |id: Uuid| run_mutation(dashboard, toasts, Mutation::Delete(id)));

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.resolve(None));
        });
    };

    view! {
        <Show
            when=move || dashboard.with(DashboardState::is_ready)
            fallback=|| {
                view! {
                    <div class="dashboard-page dashboard-page--loading">
                        <p>"Loading..."</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <div>
                        <h1 class="dashboard-page__title">"NeoCura Dashboard"</h1>
                        <p class="dashboard-page__greeting">
                            {move || dashboard.with(|d| format!("Welcome back, {}!", d.greeting_name()))}
                        </p>
                    </div>
                    <button class="btn btn--outline" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <section class="dashboard-page__stats">
                    <StatCard
                        title="Total Workouts"
                        value=Signal::derive(move || stats.get().total_workouts.to_string())
                        icon="🏋"
                        variant="accent"
                    />
                    <StatCard
                        title="Total Calories"
                        value=Signal::derive(move || stats.get().total_calories.to_string())
                        icon="🔥"
                        variant="energy"
                    />
                    <StatCard
                        title="Total Duration (min)"
                        value=Signal::derive(move || stats.get().total_duration.to_string())
                        icon="⏱"
                        variant="primary"
                    />
                    <StatCard
                        title="Avg Calories/Workout"
                        value=Signal::derive(move || stats.get().average_calories.to_string())
                        icon="📈"
                        variant="success"
                    />
                </section>

                <section class="dashboard-page__form">
                    <WorkoutForm initial=editing on_submit=on_submit on_cancel=on_cancel/>
                </section>

                <section class="dashboard-page__list">
                    <h2>"Your Workouts"</h2>
                    <WorkoutList workouts=workouts on_edit=on_edit on_delete=on_delete/>
                </section>
            </div>
        </Show>
    }
}

/// Send `mutation`, toast the outcome and re-fetch on success.
fn run_mutation(dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>, mutation: Mutation) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::apply_mutation(&mutation).await;
        if let Err(e) = &result {
            log::warn!("workout mutation failed: {e}");
        }
        let succeeded = result.is_ok();
        if let Some(notification) = dashboard.try_update(|d| d.mutation_finished(&mutation, succeeded)) {
            crate::components::toast_stack::notify(toasts, notification);
        }
        if succeeded {
            refresh_workouts(dashboard, toasts).await;
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (dashboard, toasts, mutation);
}

/// Replace the collection with a fresh fetch; a failure keeps the old one.
#[cfg(feature = "hydrate")]
async fn refresh_workouts(dashboard: RwSignal<DashboardState>, toasts: RwSignal<ToastState>) {
    let fetched = crate::net::api::fetch_workouts().await;
    if let Err(e) = &fetched {
        log::warn!("workout fetch failed: {e}");
    }
    if let Some(Some(notification)) = dashboard.try_update(|d| d.apply_workouts(fetched)) {
        crate::components::toast_stack::notify(toasts, notification);
    }
}
