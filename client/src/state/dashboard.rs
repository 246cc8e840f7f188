//! Dashboard controller state.
//!
//! DESIGN
//! ======
//! The page component owns an `RwSignal<DashboardState>` and drives it from
//! async tasks; every decision about what to send and what to show afterwards
//! lives here so it can be tested without a browser. The workout collection is
//! a read-through cache: it is only ever replaced wholesale by a fetch.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use uuid::Uuid;

use crate::net::types::{Profile, Workout, WorkoutInput};
use crate::state::stats::WorkoutStats;
use crate::state::toast::Notification;

pub const FETCH_FAILED: &str = "Failed to fetch workouts";
const FALLBACK_NAME: &str = "User";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
}

/// A write against the record store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    Insert(WorkoutInput),
    Update { id: Uuid, input: WorkoutInput },
    Delete(Uuid),
}

impl Mutation {
    /// Toast shown once the store has answered.
    #[must_use]
    pub fn notification(&self, succeeded: bool) -> Notification {
        match (self, succeeded) {
            (Self::Insert(_), true) => Notification::success("Workout added successfully"),
            (Self::Insert(_), false) => Notification::error("Failed to add workout"),
            (Self::Update { .. }, true) => Notification::success("Workout updated successfully"),
            (Self::Update { .. }, false) => Notification::error("Failed to update workout"),
            (Self::Delete(_), true) => Notification::success("Workout deleted successfully"),
            (Self::Delete(_), false) => Notification::error("Failed to delete workout"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub phase: Phase,
    pub workouts: Vec<Workout>,
    pub profile: Option<Profile>,
    /// Record currently loaded into the form, at most one.
    pub editing: Option<Workout>,
}

impl DashboardState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// The session check answered; fetches may still be in flight.
    pub fn session_resolved(&mut self) {
        self.phase = Phase::Ready;
    }

    /// Make `workout` the edit target, replacing any previous one.
    pub fn start_edit(&mut self, workout: Workout) {
        self.editing = Some(workout);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Decide what a form submission turns into.
    #[must_use]
    pub fn plan_submit(&self, input: WorkoutInput) -> Mutation {
        match &self.editing {
            Some(target) => Mutation::Update { id: target.id, input },
            None => Mutation::Insert(input),
        }
    }

    /// Record the store's answer to `mutation` and return the toast to show.
    /// A successful update releases the edit target.
    pub fn mutation_finished(&mut self, mutation: &Mutation, succeeded: bool) -> Notification {
        if succeeded {
            if let Mutation::Update { id, .. } = mutation {
                if self.editing.as_ref().is_some_and(|w| w.id == *id) {
                    self.editing = None;
                }
            }
        }
        mutation.notification(succeeded)
    }

    /// Replace the collection with a fresh fetch. On failure the previous
    /// collection stays and an error toast is returned.
    pub fn apply_workouts(&mut self, fetched: Result<Vec<Workout>, String>) -> Option<Notification> {
        match fetched {
            Ok(workouts) => {
                self.workouts = workouts;
                None
            }
            Err(_) => Some(Notification::error(FETCH_FAILED)),
        }
    }

    /// Store the profile if one came back; an absent profile is not an error.
    pub fn apply_profile(&mut self, profile: Option<Profile>) {
        if profile.is_some() {
            self.profile = profile;
        }
    }

    #[must_use]
    pub fn stats(&self) -> WorkoutStats {
        WorkoutStats::from_workouts(&self.workouts)
    }

    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.profile
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME)
    }
}
