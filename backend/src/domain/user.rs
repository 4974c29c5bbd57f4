//! User data model.
//!
//! Validated value types for the single `User` entity. Validation messages are
//! the exact strings returned to API clients, so [`UserValidationError`]'s
//! `Display` output is part of the HTTP contract.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Validation errors raised while building user values from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The path identifier is not an integer.
    #[error("Invalid user ID")]
    InvalidId,
    /// Name or email is absent or blank.
    #[error("Name and email are required")]
    MissingNameOrEmail,
    /// Email does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail,
    /// Age is non-numeric, fractional, or outside the accepted range.
    #[error("Invalid age")]
    InvalidAge,
}

/// Storage-assigned user identifier.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id: UserId = "42".parse().expect("integer id");
/// assert_eq!(id.get(), 42);
/// assert!("abc".parse::<UserId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap an identifier produced by storage.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name supplied by the client, kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Validate that the name contains at least one non-whitespace character.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::MissingNameOrEmail);
        }
        Ok(Self(name))
    }

    /// Name as submitted.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Name without surrounding whitespace.
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// The pattern is a compile-time constant covered by
// `email_pattern_compiles`, so building it cannot fail at runtime.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Email address supplied by the client, kept exactly as submitted.
///
/// # Examples
/// ```
/// use users_api::domain::EmailAddress;
///
/// let email = EmailAddress::new("Ann@X.com").expect("valid email");
/// assert_eq!(email.as_str(), "Ann@X.com");
/// assert_eq!(email.normalised(), "ann@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate presence and the `local@domain.tld` shape.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::MissingNameOrEmail);
        }
        if !EMAIL_RE.is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }

    /// Email as submitted.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Trimmed, lowercased form used for uniqueness and response echoes.
    pub fn normalised(&self) -> String {
        self.0.trim().to_lowercase()
    }
}

/// Smallest accepted age.
pub const AGE_MIN: i32 = 0;
/// Largest accepted age.
pub const AGE_MAX: i32 = 150;

/// Age in whole years within `AGE_MIN..=AGE_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(i32);

impl Age {
    /// Validate an integral age.
    pub fn new(value: i64) -> Result<Self, UserValidationError> {
        i32::try_from(value)
            .ok()
            .filter(|age| (AGE_MIN..=AGE_MAX).contains(age))
            .map(Self)
            .ok_or(UserValidationError::InvalidAge)
    }

    /// Age in years.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Age {
    type Error = UserValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

/// Raw `age` value as it arrived on the wire, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum AgeInput {
    /// Absent, `null`, or a blank string.
    Absent,
    /// A JSON number.
    Number(f64),
    /// A JSON string, accepted when it holds a number.
    Text(String),
    /// Any other JSON type.
    Unsupported,
}

impl AgeInput {
    /// Resolve the input into an optional validated [`Age`].
    ///
    /// Numbers must be integral; `30.0` is accepted, `30.5` is not.
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::{AgeInput, UserValidationError};
    ///
    /// assert_eq!(AgeInput::Absent.resolve(), Ok(None));
    /// let age = AgeInput::Text("41".into()).resolve().expect("numeric string");
    /// assert_eq!(age.map(|a| a.get()), Some(41));
    /// assert_eq!(AgeInput::Number(151.0).resolve(), Err(UserValidationError::InvalidAge));
    /// ```
    pub fn resolve(self) -> Result<Option<Age>, UserValidationError> {
        match self {
            Self::Absent => Ok(None),
            Self::Number(value) => age_from_f64(value).map(Some),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                let value = trimmed
                    .parse::<f64>()
                    .map_err(|_| UserValidationError::InvalidAge)?;
                age_from_f64(value).map(Some)
            }
            Self::Unsupported => Err(UserValidationError::InvalidAge),
        }
    }
}

fn age_from_f64(value: f64) -> Result<Age, UserValidationError> {
    let in_range = (f64::from(AGE_MIN)..=f64::from(AGE_MAX)).contains(&value);
    if !value.is_finite() || value.fract() != 0.0 || !in_range {
        return Err(UserValidationError::InvalidAge);
    }
    Age::new(value as i64)
}

/// Unvalidated create/update payload fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: AgeInput,
}

/// Validated attributes for inserting or replacing a user.
///
/// Holds the raw client values; the normalised forms are only used when
/// echoing a newly created user back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: UserName,
    email: EmailAddress,
    age: Option<Age>,
}

impl UserDraft {
    /// Build a draft from already validated parts.
    pub fn new(name: UserName, email: EmailAddress, age: Option<Age>) -> Self {
        Self { name, email, age }
    }

    /// Submitted name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Submitted email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Submitted age, if any.
    pub fn age(&self) -> Option<Age> {
        self.age
    }

    /// Summary returned by the create endpoint: trimmed name and normalised
    /// email, regardless of what was stored.
    pub fn created_echo(&self, id: UserId) -> CreatedUser {
        CreatedUser {
            id,
            name: self.name.trimmed().to_owned(),
            email: self.email.normalised(),
            age: self.age,
        }
    }
}

impl TryFrom<UserInput> for UserDraft {
    type Error = UserValidationError;

    /// Checks run in a fixed order: presence of name and email, then email
    /// shape, then age.
    fn try_from(value: UserInput) -> Result<Self, Self::Error> {
        let UserInput { name, email, age } = value;
        let (Some(name), Some(email)) = (name, email) else {
            return Err(UserValidationError::MissingNameOrEmail);
        };
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(UserValidationError::MissingNameOrEmail);
        }
        let name = UserName::new(name)?;
        let email = EmailAddress::new(email)?;
        let age = age.resolve()?;
        Ok(Self::new(name, email, age))
    }
}

/// Persisted user as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: Option<Age>,
    pub created_at: DateTime<Utc>,
}

/// Summary of a newly created user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub age: Option<Age>,
}

#[cfg(test)]
mod tests;
