use super::*;
use chrono::NaiveDate;

fn workout(exercise: &str, calories: u32) -> Workout {
    Workout {
        id: Uuid::new_v4(),
        exercise: exercise.to_owned(),
        duration: 30,
        calories,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        user_id: Uuid::nil(),
    }
}

fn input() -> WorkoutInput {
    WorkoutInput {
        exercise: "Running".to_owned(),
        duration: 30,
        calories: 200,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

// =============================================================
// phase
// =============================================================

#[test]
fn starts_loading() {
    let state = DashboardState::default();
    assert_eq!(state.phase, Phase::Loading);
    assert!(!state.is_ready());
}

#[test]
fn session_resolution_makes_ready_without_data() {
    let mut state = DashboardState::default();
    state.session_resolved();
    assert!(state.is_ready());
    assert!(state.workouts.is_empty());
    assert!(state.profile.is_none());
}

// =============================================================
// submit planning
// =============================================================

#[test]
fn submit_without_edit_target_inserts() {
    let state = DashboardState::default();
    assert_eq!(state.plan_submit(input()), Mutation::Insert(input()));
}

#[test]
fn submit_with_edit_target_updates_that_id() {
    let target = workout("Yoga", 100);
    let mut state = DashboardState::default();
    state.start_edit(target.clone());
    assert_eq!(state.plan_submit(input()), Mutation::Update { id: target.id, input: input() });
}

#[test]
fn starting_another_edit_replaces_target() {
    let first = workout("Yoga", 100);
    let second = workout("Swim", 300);
    let mut state = DashboardState::default();
    state.start_edit(first);
    state.start_edit(second.clone());
    assert_eq!(state.editing.as_ref().map(|w| w.id), Some(second.id));
}

#[test]
fn cancel_edit_returns_to_insert() {
    let mut state = DashboardState::default();
    state.start_edit(workout("Yoga", 100));
    state.cancel_edit();
    assert!(matches!(state.plan_submit(input()), Mutation::Insert(_)));
}

// =============================================================
// mutation outcomes
// =============================================================

#[test]
fn successful_update_clears_edit_target() {
    let target = workout("Yoga", 100);
    let mut state = DashboardState::default();
    state.start_edit(target.clone());
    let mutation = state.plan_submit(input());
    let toast = state.mutation_finished(&mutation, true);
    assert!(state.editing.is_none());
    assert_eq!(toast.description, "Workout updated successfully");
}

#[test]
fn failed_update_keeps_edit_target() {
    let target = workout("Yoga", 100);
    let mut state = DashboardState::default();
    state.start_edit(target.clone());
    let mutation = state.plan_submit(input());
    let toast = state.mutation_finished(&mutation, false);
    assert_eq!(state.editing, Some(target));
    assert!(toast.is_error());
    assert_eq!(toast.description, "Failed to update workout");
}

#[test]
fn update_completion_does_not_clear_newer_target() {
    let first = workout("Yoga", 100);
    let second = workout("Swim", 300);
    let mut state = DashboardState::default();
    state.start_edit(first);
    let mutation = state.plan_submit(input());
    state.start_edit(second.clone());
    state.mutation_finished(&mutation, true);
    assert_eq!(state.editing, Some(second));
}

#[test]
fn insert_and_delete_notifications() {
    let mut state = DashboardState::default();
    let insert = Mutation::Insert(input());
    assert_eq!(state.mutation_finished(&insert, true).description, "Workout added successfully");
    assert_eq!(state.mutation_finished(&insert, false).description, "Failed to add workout");
    let delete = Mutation::Delete(Uuid::new_v4());
    assert_eq!(state.mutation_finished(&delete, true).description, "Workout deleted successfully");
    assert_eq!(state.mutation_finished(&delete, false).description, "Failed to delete workout");
}

#[test]
fn mutation_does_not_touch_collection() {
    let mut state = DashboardState::default();
    state.workouts = vec![workout("Yoga", 100)];
    let delete = Mutation::Delete(state.workouts[0].id);
    state.mutation_finished(&delete, true);
    assert_eq!(state.workouts.len(), 1);
}

// =============================================================
// fetch results
// =============================================================

#[test]
fn fetch_replaces_collection_in_received_order() {
    let mut state = DashboardState::default();
    state.workouts = vec![workout("Old", 1)];
    let fresh = vec![workout("B", 2), workout("A", 3)];
    assert!(state.apply_workouts(Ok(fresh.clone())).is_none());
    assert_eq!(state.workouts, fresh);
}

#[test]
fn failed_fetch_keeps_previous_collection() {
    let mut state = DashboardState::default();
    let previous = vec![workout("Old", 1)];
    state.workouts = previous.clone();
    let toast = state.apply_workouts(Err("boom".to_owned())).unwrap();
    assert_eq!(state.workouts, previous);
    assert!(toast.is_error());
    assert_eq!(toast.description, FETCH_FAILED);
}

#[test]
fn delete_then_refetch_removes_only_that_record() {
    let keep_a = workout("A", 1);
    let gone = workout("B", 2);
    let keep_c = workout("C", 3);
    let mut state = DashboardState::default();
    state.apply_workouts(Ok(vec![keep_a.clone(), gone.clone(), keep_c.clone()]));

    let delete = Mutation::Delete(gone.id);
    state.mutation_finished(&delete, true);
    // The store now answers without the deleted row.
    state.apply_workouts(Ok(vec![keep_a.clone(), keep_c.clone()]));
    assert_eq!(state.workouts, vec![keep_a, keep_c]);
}

#[test]
fn stats_follow_collection() {
    let mut state = DashboardState::default();
    assert_eq!(state.stats().total_workouts, 0);
    state.apply_workouts(Ok(vec![workout("A", 100), workout("B", 201)]));
    let stats = state.stats();
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.total_calories, 301);
    assert_eq!(stats.total_duration, 60);
    assert_eq!(stats.average_calories, 151);
}

// =============================================================
// profile
// =============================================================

#[test]
fn greeting_falls_back_to_user() {
    let mut state = DashboardState::default();
    assert_eq!(state.greeting_name(), "User");
    state.apply_profile(Some(Profile { name: String::new() }));
    assert_eq!(state.greeting_name(), "User");
}

#[test]
fn greeting_uses_profile_name() {
    let mut state = DashboardState::default();
    state.apply_profile(Some(Profile { name: "Ada".to_owned() }));
    assert_eq!(state.greeting_name(), "Ada");
}

#[test]
fn absent_profile_keeps_previous() {
    let mut state = DashboardState::default();
    state.apply_profile(Some(Profile { name: "Ada".to_owned() }));
    state.apply_profile(None);
    assert_eq!(state.greeting_name(), "Ada");
}
