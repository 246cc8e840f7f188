use super::*;

#[test]
fn sign_in_trims_email() {
    assert_eq!(
        validate_credentials(AuthMode::SignIn, "", "  a@b.com ", "secret1"),
        Ok(Credentials::SignIn(SignInRequest { email: "a@b.com".to_owned(), password: "secret1".to_owned() }))
    );
}

#[test]
fn sign_in_ignores_name() {
    assert!(matches!(
        validate_credentials(AuthMode::SignIn, "   ", "a@b.com", "secret1"),
        Ok(Credentials::SignIn(_))
    ));
}

#[test]
fn email_must_look_like_an_address() {
    assert_eq!(
        validate_credentials(AuthMode::SignIn, "", "   ", "secret1"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_credentials(AuthMode::SignIn, "", "nobody", "secret1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn short_password_rejected() {
    assert_eq!(
        validate_credentials(AuthMode::SignIn, "", "a@b.com", "12345"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn sign_up_requires_name() {
    assert_eq!(validate_credentials(AuthMode::SignUp, "  ", "a@b.com", "secret1"), Err("Enter your name."));
}

#[test]
fn sign_up_builds_request() {
    assert_eq!(
        validate_credentials(AuthMode::SignUp, " Ada ", "a@b.com", "secret1"),
        Ok(Credentials::SignUp(SignUpRequest {
            name: "Ada".to_owned(),
            email: "a@b.com".to_owned(),
            password: "secret1".to_owned(),
        }))
    );
}

#[test]
fn mode_toggle_round_trips() {
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.toggled().toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignIn.submit_label(), "Sign In");
    assert_eq!(AuthMode::SignUp.submit_label(), "Sign Up");
}
