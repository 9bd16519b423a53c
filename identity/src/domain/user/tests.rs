//! Tests for the user aggregate.

use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};

use super::*;
use crate::domain::{
    EmailError, FIRST_NAME_MIN, FirstNameError, LAST_NAME_MIN, LastNameError, PASSWORD_MIN,
    PasswordError, RoleError,
};

#[fixture]
fn valid_payload() -> NewUser {
    NewUser {
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email: "john@doe.com".to_owned(),
        password: "myComplexPassword123!".to_owned(),
        role: None,
    }
}

#[rstest]
fn create_succeeds_with_a_valid_payload(valid_payload: NewUser) {
    let result = User::create(valid_payload);
    assert!(result.is_ok());
}

#[rstest]
fn create_fails_when_first_name_is_too_short(valid_payload: NewUser) {
    let result = User::create(NewUser {
        first_name: "J".to_owned(),
        ..valid_payload
    });

    assert_eq!(
        result.unwrap_err(),
        UserValidationError::FirstName(FirstNameError::TooShort {
            min: FIRST_NAME_MIN
        })
    );
}

#[rstest]
fn create_fails_when_last_name_is_too_short(valid_payload: NewUser) {
    let result = User::create(NewUser {
        last_name: "D".to_owned(),
        ..valid_payload
    });

    assert_eq!(
        result.unwrap_err(),
        UserValidationError::LastName(LastNameError::TooShort { min: LAST_NAME_MIN })
    );
}

#[rstest]
fn create_fails_when_email_is_invalid(valid_payload: NewUser) {
    let result = User::create(NewUser {
        email: "invalidEmail".to_owned(),
        ..valid_payload
    });

    assert_eq!(
        result.unwrap_err(),
        UserValidationError::Email(EmailError::IncorrectFormat)
    );
}

#[rstest]
#[case::too_short("123", PasswordError::TooShort { min: PASSWORD_MIN })]
#[case::no_number("myComplexPassword!", PasswordError::MustHaveAtLeastOneNumber)]
#[case::no_upper("mycomplexpassword123!", PasswordError::MustHaveAtLeastOneUpperCaseLetter)]
#[case::no_lower("MYCOMPLEXPASSWORD123!", PasswordError::MustHaveAtLeastOneLowerCaseLetter)]
#[case::no_special("MyComplexPassword123", PasswordError::MustHaveAtLeastOneSpecialCharacter)]
fn create_fails_on_each_password_policy_violation(
    valid_payload: NewUser,
    #[case] password: &str,
    #[case] expected: PasswordError,
) {
    let result = User::create(NewUser {
        password: password.to_owned(),
        ..valid_payload
    });

    assert_eq!(result.unwrap_err(), UserValidationError::Password(expected));
}

#[rstest]
fn create_reports_only_the_first_violated_invariant(valid_payload: NewUser) {
    // Every field is invalid; the declared order means the first name's
    // error wins and nothing later is ever parsed.
    let result = User::create(NewUser {
        first_name: "J".to_owned(),
        last_name: "D".to_owned(),
        email: "invalidEmail".to_owned(),
        password: "123".to_owned(),
        role: Some("invalidRole".to_owned()),
    });

    assert_eq!(
        result.unwrap_err(),
        UserValidationError::FirstName(FirstNameError::TooShort {
            min: FIRST_NAME_MIN
        })
    );

    // With the first name fixed, the next field in declaration order wins.
    let result = User::create(NewUser {
        first_name: valid_payload.first_name,
        last_name: "D".to_owned(),
        email: "invalidEmail".to_owned(),
        password: "123".to_owned(),
        role: Some("invalidRole".to_owned()),
    });

    assert_eq!(
        result.unwrap_err(),
        UserValidationError::LastName(LastNameError::TooShort { min: LAST_NAME_MIN })
    );
}

#[rstest]
fn created_users_get_distinct_fresh_identities(valid_payload: NewUser) {
    let first = User::create(valid_payload.clone()).unwrap();
    let second = User::create(valid_payload).unwrap();

    assert_ne!(first.id(), second.id());
}

#[rstest]
fn every_validated_field_is_readable(valid_payload: NewUser) {
    let user = User::create(valid_payload.clone()).unwrap();

    assert_eq!(user.first_name().as_ref(), valid_payload.first_name);
    assert_eq!(user.last_name().as_ref(), valid_payload.last_name);
    assert_eq!(user.email().as_ref(), valid_payload.email);
    assert_eq!(user.password().expose(), valid_payload.password);
}

#[rstest]
fn role_defaults_to_user_when_absent(valid_payload: NewUser) {
    let user = User::create(valid_payload).unwrap();

    assert_eq!(user.role(), UserRole::User);
    assert!(!user.is_admin());
}

#[rstest]
fn role_is_admin_when_requested(valid_payload: NewUser) {
    let user = User::create(NewUser {
        role: Some("admin".to_owned()),
        ..valid_payload
    })
    .unwrap();

    assert_eq!(user.role(), UserRole::Admin);
    assert!(user.is_admin());
}

#[rstest]
fn create_fails_when_role_is_unknown(valid_payload: NewUser) {
    let result = User::create(NewUser {
        role: Some("invalidRole".to_owned()),
        ..valid_payload
    });

    assert_eq!(
        result.unwrap_err(),
        UserValidationError::Role(RoleError::UnknownRole {
            input: "invalidRole".to_owned()
        })
    );
}

#[rstest]
fn a_new_user_has_no_active_session(valid_payload: NewUser) {
    let user = User::create(valid_payload).unwrap();
    assert!(user.session_token().is_none());
}

#[rstest]
fn log_in_records_the_supplied_token_exactly(valid_payload: NewUser) {
    let mut user = User::create(valid_payload).unwrap();
    let token = SessionToken::parse("refresh-token-123").unwrap();

    user.log_in(token.clone());

    assert_eq!(user.session_token(), Maybe::Some(&token));
}

#[rstest]
fn log_out_returns_the_session_to_the_absent_state(valid_payload: NewUser) {
    let mut user = User::create(valid_payload).unwrap();
    user.log_in(SessionToken::parse("refresh-token-123").unwrap());
    assert!(user.session_token().is_some());

    user.log_out();

    assert!(user.session_token().is_none());
}

#[rstest]
fn construction_sets_both_instants_together(valid_payload: NewUser) {
    let user = User::create(valid_payload).unwrap();
    assert_eq!(user.created_at(), user.updated_at());
}

#[rstest]
fn controlled_mutations_touch_the_update_instant(valid_payload: NewUser) {
    let mut user = User::create(valid_payload).unwrap();
    let constructed_at = user.created_at();

    user.log_in(SessionToken::parse("refresh-token-123").unwrap());

    assert!(user.updated_at() >= constructed_at);
    assert_eq!(user.created_at(), constructed_at);
}

#[rstest]
fn payload_debug_output_redacts_the_password(valid_payload: NewUser) {
    let printed = format!("{valid_payload:?}");
    assert!(printed.contains("<redacted>"));
    assert!(!printed.contains("myComplexPassword123"));
}

#[rstest]
fn user_id_parses_its_own_textual_form() {
    let id = UserId::random();
    let parsed = UserId::parse(id.to_string()).expect("round trip");
    assert_eq!(parsed, id);

    assert_eq!(UserId::parse("").unwrap_err(), UserIdError::Empty);
    assert_eq!(UserId::parse("not-a-uuid").unwrap_err(), UserIdError::Invalid);
}

#[given("a valid sign-up payload")]
fn a_valid_sign_up_payload(valid_payload: NewUser) -> NewUser {
    valid_payload
}

#[when("the user is constructed")]
fn the_user_is_constructed(payload: NewUser) -> Validated<User> {
    User::create(payload)
}

#[then("a fully valid aggregate is returned")]
fn a_fully_valid_aggregate_is_returned(result: Validated<User>) {
    let user = result.expect("user should be created");
    assert_eq!(user.email().as_ref(), "john@doe.com");
    assert!(user.session_token().is_none());
}

#[rstest]
fn constructing_a_user_happy_path(valid_payload: NewUser) {
    let payload = a_valid_sign_up_payload(valid_payload);
    let result = the_user_is_constructed(payload);
    a_fully_valid_aggregate_is_returned(result);
}

#[given("a payload with a one-letter first name")]
fn a_payload_with_a_one_letter_first_name(valid_payload: NewUser) -> NewUser {
    NewUser {
        first_name: "J".to_owned(),
        ..valid_payload
    }
}

#[then("construction fails on the first name")]
fn construction_fails_on_the_first_name(result: Validated<User>) {
    assert!(matches!(
        result,
        Outcome::Err(UserValidationError::FirstName(FirstNameError::TooShort { .. }))
    ));
}

#[rstest]
fn constructing_a_user_unhappy_path(valid_payload: NewUser) {
    let payload = a_payload_with_a_one_letter_first_name(valid_payload);
    let result = the_user_is_constructed(payload);
    construction_fails_on_the_first_name(result);
}
