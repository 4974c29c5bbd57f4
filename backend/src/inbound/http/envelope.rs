//! Uniform JSON envelope wrapping every API response.
//!
//! Bodies always carry `success` and then at most one of `data`, `message`
//! or `error`; absent members are omitted rather than serialised as `null`.

use serde::Serialize;

/// Response envelope `{success, data?, error?, message?}`.
///
/// # Examples
/// ```
/// use users_api::inbound::http::envelope::Envelope;
///
/// let body = serde_json::to_value(Envelope::data(vec![1, 2])).expect("serialise");
/// assert_eq!(body, serde_json::json!({"success": true, "data": [1, 2]}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }
}

impl Envelope<()> {
    /// Successful response carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
        }
    }

    /// Failed response carrying a client-safe error message.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}
