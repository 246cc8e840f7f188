use super::*;

const BASE: &str = "https://project.example.test";

fn uid(n: u8) -> Uuid {
    Uuid::from_bytes([n; 16])
}

// =============================================================================
// URLs
// =============================================================================

#[test]
fn auth_urls() {
    assert_eq!(token_url(BASE), "https://project.example.test/auth/v1/token?grant_type=password");
    assert_eq!(signup_url(BASE), "https://project.example.test/auth/v1/signup");
    assert_eq!(user_url(BASE), "https://project.example.test/auth/v1/user");
    assert_eq!(logout_url(BASE), "https://project.example.test/auth/v1/logout");
}

#[test]
fn table_urls_scope_to_user() {
    let user = uid(0xaa);
    assert_eq!(
        profile_url(BASE, user),
        format!("{BASE}/rest/v1/profiles?id=eq.{user}&select=name")
    );
    assert_eq!(
        workouts_url(BASE, user),
        format!("{BASE}/rest/v1/workouts?select=*&user_id=eq.{user}&order=date.desc")
    );
    assert_eq!(workouts_insert_url(BASE), format!("{BASE}/rest/v1/workouts"));
}

#[test]
fn workout_url_filters_by_id_and_owner() {
    let id = uid(1);
    let user = uid(2);
    assert_eq!(workout_url(BASE, id, user), format!("{BASE}/rest/v1/workouts?id=eq.{id}&user_id=eq.{user}"));
}

#[test]
fn new_trims_trailing_slash() {
    let backend = RestBackend::new(&BackendConfig {
        url: format!("{BASE}/"),
        anon_key: "anon".to_owned(),
        connect_timeout_secs: 1,
    })
    .unwrap();
    assert_eq!(backend.base_url, BASE);
}

// =============================================================================
// classify_status
// =============================================================================

#[test]
fn classify_status_passes_success_body() {
    assert_eq!(classify_status(201, "[]".into()).unwrap(), "[]");
}

#[test]
fn classify_status_maps_auth_failures() {
    assert!(matches!(classify_status(401, String::new()), Err(BackendError::Unauthorized)));
    assert!(matches!(classify_status(403, String::new()), Err(BackendError::Unauthorized)));
}

#[test]
fn classify_status_keeps_other_failures() {
    let err = classify_status(500, "boom".into()).unwrap_err();
    assert!(matches!(err, BackendError::Response { status: 500, ref body } if body == "boom"));
}

// =============================================================================
// parsing
// =============================================================================

#[test]
fn parse_session_reads_token_and_user() {
    let json = r#"{
        "access_token": "jwt-abc",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "r",
        "user": {"id": "01010101-0101-0101-0101-010101010101", "email": "ada@example.com", "role": "authenticated"}
    }"#;
    let session = parse_session(json).unwrap();
    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.user.id, uid(1));
    assert_eq!(session.user.email, "ada@example.com");
}

#[test]
fn parse_session_without_token_is_parse_error() {
    let err = parse_session(r#"{"user": null}"#).unwrap_err();
    assert!(matches!(err, BackendError::Parse(_)));
}

#[test]
fn parse_sign_up_bare_user_is_pending_confirmation() {
    let json = r#"{"id": "01010101-0101-0101-0101-010101010101", "email": "ada@example.com", "confirmation_sent_at": "2024-01-01T00:00:00Z"}"#;
    assert!(matches!(parse_sign_up(json), Err(BackendError::PendingConfirmation)));
}

#[test]
fn parse_sign_up_with_session_signs_in() {
    let json = r#"{"access_token": "jwt", "user": {"id": "01010101-0101-0101-0101-010101010101"}}"#;
    let session = parse_sign_up(json).unwrap();
    assert_eq!(session.token, "jwt");
    assert!(session.user.email.is_empty());
}

#[test]
fn parse_user_reads_id_and_email() {
    let json = r#"{"id": "02020202-0202-0202-0202-020202020202", "email": "bo@example.com", "aud": "authenticated"}"#;
    assert_eq!(parse_user(json).unwrap(), User { id: uid(2), email: "bo@example.com".to_owned() });
}

#[test]
fn parse_profile_takes_first_row_or_none() {
    assert_eq!(parse_profile(r#"[{"name":"Ada"}]"#).unwrap(), Some(Profile { name: "Ada".to_owned() }));
    assert_eq!(parse_profile("[]").unwrap(), None);
}

#[test]
fn parse_workouts_reads_rows() {
    let json = r#"[{
        "id": "01010101-0101-0101-0101-010101010101",
        "exercise": "Running",
        "duration": 30,
        "calories": 200,
        "date": "2024-01-01",
        "user_id": "02020202-0202-0202-0202-020202020202",
        "created_at": "2024-01-01T09:00:00+00:00"
    }]"#;
    let rows = parse_workouts(json).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].exercise, "Running");
    assert_eq!(rows[0].user_id, uid(2));
}

#[test]
fn parse_workouts_rejects_garbage() {
    assert!(matches!(parse_workouts("{not json"), Err(BackendError::Parse(_))));
}

#[test]
fn parse_single_workout_empty_is_not_found() {
    assert!(matches!(parse_single_workout("[]"), Err(BackendError::NotFound)));
}

#[test]
fn error_message_prefers_known_fields() {
    assert_eq!(error_message(r#"{"code":422,"msg":"Password should be at least 6 characters"}"#), "Password should be at least 6 characters");
    assert_eq!(
        error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
        "Invalid login credentials"
    );
    assert_eq!(error_message("plain text"), "plain text");
}

#[test]
fn workout_row_flattens_input_with_owner() {
    let input = WorkoutInput {
        exercise: "Yoga".to_owned(),
        duration: 45,
        calories: 150,
        date: chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    };
    let value = serde_json::to_value([WorkoutRow { input: &input, user_id: uid(3) }]).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "exercise": "Yoga",
            "duration": 45,
            "calories": 150,
            "date": "2024-03-05",
            "user_id": uid(3),
        }])
    );
}
