//! Catch-all view for unknown routes.

use leptos::prelude::*;

use crate::state::auth::LANDING_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a href=LANDING_PATH class="btn">"Return to Home"</a>
        </div>
    }
}
