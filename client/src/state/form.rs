//! Controlled-form state behind the workout form component.
//!
//! DESIGN
//! ======
//! Inputs are kept as raw strings exactly as typed; parsing happens only on
//! submit. The component owns one `RwSignal<WorkoutFormState>` and binds each
//! input to a field, so everything here is plain data that tests can drive
//! without a reactive runtime.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::net::types::{Workout, WorkoutInput};

/// Field names as rendered in form labels and error messages.
pub const FIELD_EXERCISE: &str = "Exercise";
pub const FIELD_DURATION: &str = "Duration";
pub const FIELD_CALORIES: &str = "Calories";
pub const FIELD_DATE: &str = "Date";

/// Validation failures mirroring the input controls' constraints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a whole number")]
    NotANumber(&'static str),
    #[error("{0} must be at least 1")]
    BelowMinimum(&'static str),
    #[error("{0} is not a valid date")]
    InvalidDate(&'static str),
}

/// Raw field values plus the id of the record being edited, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkoutFormState {
    pub exercise: String,
    pub duration: String,
    pub calories: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub date: String,
    pub editing: Option<Uuid>,
}

impl WorkoutFormState {
    /// Fresh create-mode form dated `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self { date: format_input_date(today), ..Self::default() }
    }

    /// Load an existing record for editing, or switch back to a blank
    /// create-mode form when `initial` is `None`.
    pub fn prefill(&mut self, initial: Option<&Workout>, today: NaiveDate) {
        match initial {
            Some(workout) => {
                let input = WorkoutInput::from(workout);
                self.duration = input.duration.to_string();
                self.calories = input.calories.to_string();
                self.date = format_input_date(input.date);
                self.exercise = input.exercise;
                self.editing = Some(workout.id);
            }
            None => *self = Self::new(today),
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.is_editing() { "Edit Workout" } else { "Add New Workout" }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update Workout" } else { "Add Workout" }
    }

    /// Build a candidate record from the current field values.
    ///
    /// # Errors
    ///
    /// Returns the first field that violates its input constraint.
    pub fn candidate(&self) -> Result<WorkoutInput, FormError> {
        let exercise = self.exercise.trim();
        if exercise.is_empty() {
            return Err(FormError::Required(FIELD_EXERCISE));
        }
        let duration = parse_positive(&self.duration, FIELD_DURATION)?;
        let calories = parse_positive(&self.calories, FIELD_CALORIES)?;
        let date = parse_input_date(&self.date)?;
        Ok(WorkoutInput { exercise: exercise.to_owned(), duration, calories, date })
    }

    /// Produce the candidate for the submit callback. In create mode the
    /// form is cleared and re-dated to `today`; edit mode keeps its fields.
    ///
    /// # Errors
    ///
    /// Propagates [`WorkoutFormState::candidate`] failures and leaves the
    /// fields untouched.
    pub fn submit(&mut self, today: NaiveDate) -> Result<WorkoutInput, FormError> {
        let input = self.candidate()?;
        if !self.is_editing() {
            *self = Self::new(today);
        }
        Ok(input)
    }
}

/// Button pressed on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    Cancel,
}

/// What the component should do after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// Hand the candidate to `on_submit`.
    Submitted(WorkoutInput),
    /// Hand control to `on_cancel`; nothing is submitted.
    Cancelled,
    /// Show the error inline.
    Rejected(FormError),
    /// Cancel outside edit mode.
    Ignored,
}

impl WorkoutFormState {
    /// Apply a button press. Cancel never submits and leaves the fields as
    /// they are; the parent decides what the form shows next.
    pub fn apply(&mut self, action: FormAction, today: NaiveDate) -> FormOutcome {
        match action {
            FormAction::Submit => match self.submit(today) {
                Ok(input) => FormOutcome::Submitted(input),
                Err(e) => FormOutcome::Rejected(e),
            },
            FormAction::Cancel if self.is_editing() => FormOutcome::Cancelled,
            FormAction::Cancel => FormOutcome::Ignored,
        }
    }
}

/// Route an outcome to the form's callbacks. Returns the inline error
/// message, if any.
pub fn dispatch_outcome(
    outcome: FormOutcome,
    on_submit: impl FnOnce(WorkoutInput),
    on_cancel: impl FnOnce(),
) -> Option<String> {
    match outcome {
        FormOutcome::Submitted(input) => {
            on_submit(input);
            None
        }
        FormOutcome::Cancelled => {
            on_cancel();
            None
        }
        FormOutcome::Rejected(e) => Some(e.to_string()),
        FormOutcome::Ignored => None,
    }
}

fn parse_positive(raw: &str, field: &'static str) -> Result<u32, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Required(field));
    }
    let value: i64 = raw.parse().map_err(|_| FormError::NotANumber(field))?;
    if value < 1 {
        return Err(FormError::BelowMinimum(field));
    }
    u32::try_from(value).map_err(|_| FormError::NotANumber(field))
}

fn parse_input_date(raw: &str) -> Result<NaiveDate, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Required(FIELD_DATE));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FormError::InvalidDate(FIELD_DATE))
}

/// Format a date the way `<input type="date">` expects its value.
#[must_use]
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
