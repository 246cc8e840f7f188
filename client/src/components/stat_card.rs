//! Summary tile for one aggregate number.

use leptos::prelude::*;

/// A coloured card showing a title, a value and a decorative glyph.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    icon: &'static str,
    variant: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{variant}")>
            <div class="stat-card__text">
                <p class="stat-card__title">{title}</p>
                <p class="stat-card__value">{move || value.get()}</p>
            </div>
            <span class="stat-card__icon" aria-hidden="true">{icon}</span>
        </div>
    }
}
