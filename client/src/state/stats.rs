//! Aggregate view over the current workout collection.
//!
//! Derived on every render from whatever the dashboard currently holds;
//! never cached or persisted.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::Workout;

/// Summary numbers shown in the dashboard stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    pub total_calories: u64,
    /// Minutes.
    pub total_duration: u64,
    /// Rounded half-up; zero for an empty collection.
    pub average_calories: u64,
}

impl WorkoutStats {
    #[must_use]
    pub fn from_workouts(workouts: &[Workout]) -> Self {
        let total_workouts = workouts.len();
        let total_calories: u64 = workouts.iter().map(|w| u64::from(w.calories)).sum();
        let total_duration: u64 = workouts.iter().map(|w| u64::from(w.duration)).sum();
        Self {
            total_workouts,
            total_calories,
            total_duration,
            average_calories: rounded_average(total_calories, total_workouts as u64),
        }
    }
}

/// Integer `round(total / count)` with halves rounding up; `0` when `count` is 0.
#[must_use]
pub fn rounded_average(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (total + count / 2) / count
}
