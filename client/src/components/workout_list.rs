//! Workout rows with per-row edit and delete actions.

#[cfg(test)]
#[path = "workout_list_test.rs"]
mod workout_list_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::net::types::Workout;
use crate::util::date::format_display;

pub const EMPTY_MESSAGE: &str = "No workouts yet. Add your first workout to get started!";

fn duration_label(workout: &Workout) -> String {
    format!("{} min", workout.duration)
}

fn calories_label(workout: &Workout) -> String {
    format!("{} cal", workout.calories)
}

/// One rendered row: the record plus the id its delete action reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RowItem {
    pub id: Uuid,
    pub workout: Workout,
}

/// What the list shows for a given collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListView {
    /// Placeholder only.
    Empty,
    /// One row per record, in the order received.
    Rows(Vec<RowItem>),
}

pub(crate) fn list_view(workouts: &[Workout]) -> ListView {
    if workouts.is_empty() {
        return ListView::Empty;
    }
    ListView::Rows(
        workouts
            .iter()
            .map(|w| RowItem { id: w.id, workout: w.clone() })
            .collect(),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RowAction {
    Edit,
    Delete,
}

/// Route a row button press to the matching callback.
pub(crate) fn dispatch_row_action(
    item: &RowItem,
    action: RowAction,
    on_edit: impl FnOnce(Workout),
    on_delete: impl FnOnce(Uuid),
) {
    match action {
        RowAction::Edit => on_edit(item.workout.clone()),
        RowAction::Delete => on_delete(item.id),
    }
}

/// Renders `workouts` in the order given. Only reports intent through the
/// callbacks; never mutates anything.
#[component]
pub fn WorkoutList(
    #[prop(into)] workouts: Signal<Vec<Workout>>,
    on_edit: Callback<Workout>,
    on_delete: Callback<Uuid>,
) -> impl IntoView {
    let view_model = Memo::new(move |_| workouts.with(|w| list_view(w)));

    move || match view_model.get() {
        ListView::Empty => view! {
            <div class="card workout-list__empty">
                <p>{EMPTY_MESSAGE}</p>
            </div>
        }
        .into_any(),
        ListView::Rows(rows) => view! {
            <div class="workout-list">
                {rows
                    .into_iter()
                    .map(|item| view! { <WorkoutRow item=item on_edit=on_edit on_delete=on_delete/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn WorkoutRow(item: RowItem, on_edit: Callback<Workout>, on_delete: Callback<Uuid>) -> impl IntoView {
    let workout = &item.workout;
    let duration = duration_label(workout);
    let calories = calories_label(workout);
    let date = format_display(workout.date);
    let exercise = workout.exercise.clone();
    let edit_item = item.clone();

    view! {
        <div class="card workout-row">
            <div class="workout-row__body">
                <h4 class="workout-row__title">{exercise}</h4>
                <div class="workout-row__meta">
                    <span>{duration}</span>
                    <span>{calories}</span>
                    <span>{date}</span>
                </div>
            </div>
            <div class="workout-row__actions">
                <button
                    class="btn btn--small"
                    title="Edit workout"
                    aria-label="Edit workout"
                    on:click=move |_| dispatch_row_action(&edit_item, RowAction::Edit, |w| on_edit.run(w), |_| {})
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    title="Delete workout"
                    aria-label="Delete workout"
                    on:click=move |_| dispatch_row_action(&item, RowAction::Delete, |_| {}, |id| on_delete.run(id))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
