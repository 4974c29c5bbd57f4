//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn valid_input() -> UserInput {
    UserInput {
        name: Some("  Ann  ".to_owned()),
        email: Some("Ann@X.com".to_owned()),
        age: AgeInput::Number(40.0),
    }
}

#[rstest]
#[case("1", 1)]
#[case(" 42 ", 42)]
#[case("-7", -7)]
#[case("999999", 999_999)]
fn user_id_parses_integers(#[case] raw: &str, #[case] expected: i64) {
    let id: UserId = raw.parse().expect("integer id");
    assert_eq!(id.get(), expected);
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("1.5")]
#[case("12abc")]
#[case("99999999999999999999")]
fn user_id_rejects_non_integers(#[case] raw: &str) {
    assert_eq!(raw.parse::<UserId>(), Err(UserValidationError::InvalidId));
}

#[rstest]
fn email_pattern_compiles() {
    assert!(Regex::new(EMAIL_PATTERN).is_ok());
    assert!(EMAIL_RE.is_match("ann@x.com"));
}

#[rstest]
#[case("ann@x.com")]
#[case("first.last+tag@sub.example.org")]
#[case("a@b.c")]
fn email_accepts_valid_shapes(#[case] raw: &str) {
    let email = EmailAddress::new(raw).expect("valid email");
    assert_eq!(email.as_str(), raw);
}

#[rstest]
#[case("ann")]
#[case("ann@x")]
#[case("ann@@x.com")]
#[case("an n@x.com")]
#[case(" ann@x.com")]
#[case("@x.com")]
fn email_rejects_invalid_shapes(#[case] raw: &str) {
    assert_eq!(
        EmailAddress::new(raw),
        Err(UserValidationError::InvalidEmail)
    );
}

#[rstest]
fn email_normalises_case() {
    let email = EmailAddress::new("Ann.B@Example.COM").expect("valid email");
    assert_eq!(email.normalised(), "ann.b@example.com");
}

#[rstest]
#[case(0)]
#[case(41)]
#[case(150)]
fn age_accepts_range_bounds(#[case] value: i64) {
    let age = Age::new(value).expect("age in range");
    assert_eq!(i64::from(age.get()), value);
}

#[rstest]
#[case(-1)]
#[case(151)]
#[case(i64::MAX)]
fn age_rejects_out_of_range(#[case] value: i64) {
    assert_eq!(Age::new(value), Err(UserValidationError::InvalidAge));
}

#[rstest]
#[case(AgeInput::Absent, None)]
#[case(AgeInput::Text(String::new()), None)]
#[case(AgeInput::Text("   ".to_owned()), None)]
#[case(AgeInput::Number(30.0), Some(30))]
#[case(AgeInput::Number(0.0), Some(0))]
#[case(AgeInput::Text("42".to_owned()), Some(42))]
fn age_input_resolves_accepted_values(#[case] input: AgeInput, #[case] expected: Option<i32>) {
    let resolved = input.resolve().expect("accepted age input");
    assert_eq!(resolved.map(Age::get), expected);
}

#[rstest]
#[case(AgeInput::Number(30.5))]
#[case(AgeInput::Number(-1.0))]
#[case(AgeInput::Number(151.0))]
#[case(AgeInput::Number(f64::NAN))]
#[case(AgeInput::Text("abc".to_owned()))]
#[case(AgeInput::Text("200".to_owned()))]
#[case(AgeInput::Unsupported)]
fn age_input_rejects_invalid_values(#[case] input: AgeInput) {
    assert_eq!(input.resolve(), Err(UserValidationError::InvalidAge));
}

#[rstest]
fn draft_keeps_raw_values(valid_input: UserInput) {
    let draft = UserDraft::try_from(valid_input).expect("valid draft");

    assert_eq!(draft.name().as_str(), "  Ann  ");
    assert_eq!(draft.email().as_str(), "Ann@X.com");
    assert_eq!(draft.age().map(Age::get), Some(40));
}

#[rstest]
fn created_echo_normalises_name_and_email(valid_input: UserInput) {
    let draft = UserDraft::try_from(valid_input).expect("valid draft");

    let echo = draft.created_echo(UserId::new(7));

    assert_eq!(echo.id, UserId::new(7));
    assert_eq!(echo.name, "Ann");
    assert_eq!(echo.email, "ann@x.com");
    assert_eq!(echo.age.map(Age::get), Some(40));
}

#[rstest]
#[case(None, Some("ann@x.com"))]
#[case(Some("Ann"), None)]
#[case(Some(""), Some("ann@x.com"))]
#[case(Some("Ann"), Some("   "))]
#[case(None, None)]
fn draft_requires_name_and_email(
    valid_input: UserInput,
    #[case] name: Option<&str>,
    #[case] email: Option<&str>,
) {
    let input = UserInput {
        name: name.map(str::to_owned),
        email: email.map(str::to_owned),
        ..valid_input
    };

    assert_eq!(
        UserDraft::try_from(input),
        Err(UserValidationError::MissingNameOrEmail)
    );
}

#[rstest]
fn draft_checks_email_before_age(valid_input: UserInput) {
    let input = UserInput {
        email: Some("not-an-email".to_owned()),
        age: AgeInput::Number(999.0),
        ..valid_input
    };

    assert_eq!(
        UserDraft::try_from(input),
        Err(UserValidationError::InvalidEmail)
    );
}

#[rstest]
fn draft_rejects_invalid_age(valid_input: UserInput) {
    let input = UserInput {
        age: AgeInput::Text("old".to_owned()),
        ..valid_input
    };

    assert_eq!(
        UserDraft::try_from(input),
        Err(UserValidationError::InvalidAge)
    );
}

#[rstest]
#[case(UserValidationError::InvalidId, "Invalid user ID")]
#[case(UserValidationError::MissingNameOrEmail, "Name and email are required")]
#[case(UserValidationError::InvalidEmail, "Invalid email format")]
#[case(UserValidationError::InvalidAge, "Invalid age")]
fn validation_messages_are_client_facing(
    #[case] error: UserValidationError,
    #[case] expected: &str,
) {
    assert_eq!(error.to_string(), expected);
}
