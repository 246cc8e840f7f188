use super::*;

fn running() -> WorkoutInput {
    WorkoutInput {
        exercise: "Running".to_owned(),
        duration: 30,
        calories: 200,
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

// =============================================================
// Workout wire format
// =============================================================

#[test]
fn workout_deserializes_store_row() {
    let row = serde_json::json!({
        "id": "6f1c2f0e-0000-4000-8000-000000000001",
        "exercise": "Yoga",
        "duration": 45,
        "calories": 150,
        "date": "2024-03-05",
        "user_id": "6f1c2f0e-0000-4000-8000-0000000000aa",
        "created_at": "2024-03-05T10:00:00Z"
    });
    let workout: Workout = serde_json::from_value(row).unwrap();
    assert_eq!(workout.exercise, "Yoga");
    assert_eq!(workout.duration, 45);
    assert_eq!(workout.calories, 150);
    assert_eq!(workout.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn workout_input_serializes_date_as_iso_day() {
    let value = serde_json::to_value(running()).unwrap();
    assert_eq!(value["date"], "2024-01-01");
    assert_eq!(value["duration"], 30);
    assert!(value.get("id").is_none());
}

#[test]
fn user_email_defaults_when_absent() {
    let user: User = serde_json::from_str(r#"{"id":"6f1c2f0e-0000-4000-8000-0000000000aa"}"#).unwrap();
    assert!(user.email.is_empty());
}

// =============================================================
// WorkoutInput::validate
// =============================================================

#[test]
fn validate_accepts_positive_fields() {
    assert_eq!(running().validate(), Ok(()));
}

#[test]
fn validate_rejects_blank_exercise() {
    let input = WorkoutInput { exercise: "   ".to_owned(), ..running() };
    assert_eq!(input.validate(), Err("exercise is required"));
}

#[test]
fn validate_rejects_zero_duration() {
    let input = WorkoutInput { duration: 0, ..running() };
    assert!(input.validate().is_err());
}

#[test]
fn validate_rejects_zero_calories() {
    let input = WorkoutInput { calories: 0, ..running() };
    assert!(input.validate().is_err());
}

#[test]
fn input_from_workout_drops_identity() {
    let workout = Workout {
        id: Uuid::new_v4(),
        exercise: "Cycling".to_owned(),
        duration: 60,
        calories: 500,
        date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
        user_id: Uuid::new_v4(),
    };
    let input = WorkoutInput::from(&workout);
    assert_eq!(input.exercise, "Cycling");
    assert_eq!(input.duration, 60);
    assert_eq!(input.calories, 500);
    assert_eq!(input.date, workout.date);
}
