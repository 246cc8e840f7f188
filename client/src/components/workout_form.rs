//! Create/edit form for a single workout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard passes the current edit target (or `None`) and receives the
//! candidate record through `on_submit`. The form never talks to the server.

use leptos::prelude::*;

use crate::net::types::{Workout, WorkoutInput};
use crate::state::form::{FormAction, WorkoutFormState, dispatch_outcome};
use crate::util::date::today;

#[component]
pub fn WorkoutForm(
    /// Record to edit; `None` puts the form in create mode.
    #[prop(into)]
    initial: Signal<Option<Workout>>,
    on_submit: Callback<WorkoutInput>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(WorkoutFormState::new(today()));
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let initial = initial.get();
        form.update(|f| f.prefill(initial.as_ref(), today()));
        error.set(None);
    });

    let run_action = move |action: FormAction| {
        let Some(outcome) = form.try_update(|f| f.apply(action, today())) else {
            return;
        };
        let message = dispatch_outcome(
            outcome,
            |input| on_submit.run(input),
            || {
                if let Some(on_cancel) = on_cancel {
                    on_cancel.run(());
                }
            },
        );
        error.set(message);
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_action(FormAction::Submit);
    };

    let editing = move || form.with(WorkoutFormState::is_editing);

    view! {
        <div class="card workout-form">
            <h3 class="workout-form__heading">{move || form.with(|f| f.heading())}</h3>
            <form class="workout-form__body" on:submit=handle_submit>
                <div class="workout-form__grid">
                    <label class="workout-form__field">
                        "Exercise"
                        <input
                            id="exercise"
                            type="text"
                            required
                            placeholder="Running, Yoga, Cycling..."
                            prop:value=move || form.with(|f| f.exercise.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.exercise = value);
                            }
                        />
                    </label>
                    <label class="workout-form__field">
                        "Duration (minutes)"
                        <input
                            id="duration"
                            type="number"
                            required
                            min="1"
                            placeholder="30"
                            prop:value=move || form.with(|f| f.duration.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.duration = value);
                            }
                        />
                    </label>
                    <label class="workout-form__field">
                        "Calories"
                        <input
                            id="calories"
                            type="number"
                            required
                            min="1"
                            placeholder="200"
                            prop:value=move || form.with(|f| f.calories.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.calories = value);
                            }
                        />
                    </label>
                    <label class="workout-form__field">
                        "Date"
                        <input
                            id="date"
                            type="date"
                            required
                            prop:value=move || form.with(|f| f.date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.date = value);
                            }
                        />
                    </label>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="workout-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="workout-form__actions">
                    <button class="btn btn--primary" type="submit">
                        {move || form.with(|f| f.submit_label())}
                    </button>
                    <Show when=move || editing() && on_cancel.is_some()>
                        <button
                            class="btn"
                            type="button"
                            on:click=move |_| run_action(FormAction::Cancel)
                        >
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </div>
    }
}
