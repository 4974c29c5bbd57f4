//! OpenAPI schema definitions for response envelopes.
//!
//! [`Envelope`](super::envelope::Envelope) is generic and skips absent
//! members, which utoipa cannot describe per endpoint. These wrappers spell
//! out each concrete envelope shape for the generated document only.

use utoipa::ToSchema;

use super::users::{CreatedUserBody, UserBody};

/// Failed request: `{"success": false, "error": "..."}`.
#[derive(ToSchema)]
#[schema(as = ErrorResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorResponseSchema {
    #[schema(example = false)]
    success: bool,
    /// Client-safe failure description.
    #[schema(example = "User not found")]
    error: String,
}

/// Successful mutation acknowledged with a message.
#[derive(ToSchema)]
#[schema(as = MessageResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MessageResponseSchema {
    #[schema(example = true)]
    success: bool,
    #[schema(example = "User updated successfully")]
    message: String,
}

/// Envelope around the list of users.
#[derive(ToSchema)]
#[schema(as = UserListResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserListResponseSchema {
    #[schema(example = true)]
    success: bool,
    data: Vec<UserBody>,
}

/// Envelope around a single stored user.
#[derive(ToSchema)]
#[schema(as = UserResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserResponseSchema {
    #[schema(example = true)]
    success: bool,
    data: UserBody,
}

/// Envelope around the create summary.
#[derive(ToSchema)]
#[schema(as = CreatedUserResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreatedUserResponseSchema {
    #[schema(example = true)]
    success: bool,
    data: CreatedUserBody,
}
